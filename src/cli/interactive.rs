//! Configuração interativa do Quadro.
//!
//! Este módulo implementa a configuração interativa usando dialoguer.

use std::path::Path;

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::types::config::Config;
use crate::QuadroResult;

/// Executa a configuração interativa.
pub fn run_interactive_config(config_path: &Path) -> QuadroResult<()> {
    let theme = ColorfulTheme::default();

    println!("\n🔧 Configuração Interativa do Quadro\n");

    // Carrega config existente ou cria nova
    let mut config = if config_path.exists() {
        Config::load(config_path)?
    } else {
        println!("Criando nova configuração...\n");
        Config::default_config()
    };

    // Menu principal
    loop {
        let options = vec![
            "Configurações Gerais",
            "Conexão BigQuery",
            "Cache",
            "Relatório",
            "Salvar e Sair",
            "Sair sem Salvar",
        ];

        let selection = Select::with_theme(&theme)
            .with_prompt("O que deseja configurar?")
            .items(&options)
            .default(0)
            .interact()?;

        match selection {
            0 => configure_general(&theme, &mut config)?,
            1 => configure_connection(&theme, &mut config)?,
            2 => configure_cache(&theme, &mut config)?,
            3 => configure_report(&theme, &mut config)?,
            4 => {
                config.save(config_path)?;
                println!("\n✓ Configuração salva em: {}\n", config_path.display());
                break;
            }
            5 => {
                if Confirm::with_theme(&theme)
                    .with_prompt("Deseja realmente sair sem salvar?")
                    .default(false)
                    .interact()?
                {
                    println!("\nSaindo sem salvar.\n");
                    break;
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// Configura opções gerais.
fn configure_general(theme: &ColorfulTheme, config: &mut Config) -> QuadroResult<()> {
    println!("\n📋 Configurações Gerais\n");

    // Log level
    let log_levels = vec!["error", "warn", "info", "debug", "trace"];
    let current_idx = log_levels
        .iter()
        .position(|&l| l == config.general.log_level)
        .unwrap_or(2);

    let log_level_idx = Select::with_theme(theme)
        .with_prompt("Nível de log")
        .items(&log_levels)
        .default(current_idx)
        .interact()?;

    config.general.log_level = log_levels[log_level_idx].to_string();

    // Log format
    let log_formats = vec!["text", "json"];
    let current_format_idx = log_formats
        .iter()
        .position(|&f| f == config.general.log_format)
        .unwrap_or(0);

    let log_format_idx = Select::with_theme(theme)
        .with_prompt("Formato de log")
        .items(&log_formats)
        .default(current_format_idx)
        .interact()?;

    config.general.log_format = log_formats[log_format_idx].to_string();

    // Timeout
    let timeout: u64 = Input::with_theme(theme)
        .with_prompt("Timeout das queries (segundos)")
        .default(config.general.timeout_secs)
        .interact_text()?;

    config.general.timeout_secs = timeout;

    println!("\n✓ Configurações gerais atualizadas.\n");
    Ok(())
}

/// Configura a conexão com o BigQuery.
fn configure_connection(theme: &ColorfulTheme, config: &mut Config) -> QuadroResult<()> {
    println!("\n🔌 Conexão BigQuery\n");

    let project_id: String = Input::with_theme(theme)
        .with_prompt("Project id")
        .default(config.connection.project_id.clone())
        .interact_text()?;

    config.connection.project_id = project_id;

    let location: String = Input::with_theme(theme)
        .with_prompt("Location")
        .default(config.connection.location.clone())
        .interact_text()?;

    config.connection.location = location;

    let dataset: String = Input::with_theme(theme)
        .with_prompt("Dataset")
        .default(config.connection.dataset.clone())
        .interact_text()?;

    config.connection.dataset = dataset;

    let table: String = Input::with_theme(theme)
        .with_prompt("Tabela")
        .default(config.connection.table.clone())
        .interact_text()?;

    config.connection.table = table;

    let date_column: String = Input::with_theme(theme)
        .with_prompt("Coluna de data (filtros)")
        .default(config.connection.date_column.clone())
        .interact_text()?;

    config.connection.date_column = date_column;

    let metric_column: String = Input::with_theme(theme)
        .with_prompt("Coluna de métrica (agregação)")
        .default(config.connection.metric_column.clone())
        .interact_text()?;

    config.connection.metric_column = metric_column;

    println!("\n✓ Conexão configurada.\n");
    Ok(())
}

/// Configura cache.
fn configure_cache(theme: &ColorfulTheme, config: &mut Config) -> QuadroResult<()> {
    println!("\n💾 Configuração do Cache\n");

    // Habilitado
    config.cache.enabled = Confirm::with_theme(theme)
        .with_prompt("Cache habilitado?")
        .default(config.cache.enabled)
        .interact()?;

    if !config.cache.enabled {
        println!("Cache desabilitado.\n");
        return Ok(());
    }

    // Capacidade
    let capacity: usize = Input::with_theme(theme)
        .with_prompt("Capacidade máxima (número de entradas)")
        .default(config.cache.capacity)
        .interact_text()?;

    config.cache.capacity = capacity;

    // TTL
    let ttl: u64 = Input::with_theme(theme)
        .with_prompt("Tempo de vida (segundos)")
        .default(config.cache.ttl_secs)
        .interact_text()?;

    config.cache.ttl_secs = ttl;

    println!("\n✓ Cache configurado.\n");
    Ok(())
}

/// Configura o relatório HTML.
fn configure_report(theme: &ColorfulTheme, config: &mut Config) -> QuadroResult<()> {
    println!("\n📊 Configuração do Relatório\n");

    let title: String = Input::with_theme(theme)
        .with_prompt("Título do relatório")
        .default(config.report.title.clone())
        .interact_text()?;

    config.report.title = title;

    let prefix: String = Input::with_theme(theme)
        .with_prompt("Prefixo do nome do arquivo")
        .default(config.report.filename_prefix.clone())
        .interact_text()?;

    config.report.filename_prefix = prefix;

    println!("\n✓ Relatório configurado.\n");
    Ok(())
}

/// Mostra resumo da configuração.
pub fn show_config_summary(config: &Config) {
    println!("\n📊 Resumo da Configuração\n");
    println!("┌─────────────────────────────────────────┐");
    println!("│ Geral                                   │");
    println!("├─────────────────────────────────────────┤");
    println!("│ Log level: {:<28} │", config.general.log_level);
    println!("│ Timeout: {:<29}s │", config.general.timeout_secs);
    println!("├─────────────────────────────────────────┤");
    println!("│ Conexão                                 │");
    println!("├─────────────────────────────────────────┤");
    println!("│ Projeto: {:<30} │", config.connection.project_id);
    println!("│ Location: {:<29} │", config.connection.location);
    println!("│ Dataset: {:<30} │", config.connection.dataset);
    println!("│ Tabela: {:<31} │", config.connection.table);
    println!("│ Coluna de data: {:<23} │", config.connection.date_column);
    println!("├─────────────────────────────────────────┤");
    println!("│ Cache                                   │");
    println!("├─────────────────────────────────────────┤");
    println!(
        "│ Habilitado: {:<27} │",
        if config.cache.enabled { "Sim" } else { "Não" }
    );
    if config.cache.enabled {
        println!("│ Capacidade: {:<27} │", config.cache.capacity);
        println!("│ TTL: {:<33}s │", config.cache.ttl_secs);
    }
    println!("├─────────────────────────────────────────┤");
    println!("│ Relatório                               │");
    println!("├─────────────────────────────────────────┤");
    println!("│ Título: {:<31} │", config.report.title);
    println!("│ Prefixo: {:<30} │", config.report.filename_prefix);
    println!("└─────────────────────────────────────────┘");
    println!();
}
