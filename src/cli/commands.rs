//! Implementação dos comandos CLI do Quadro.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};

use crate::auth::CredentialSource;
use crate::cache::QueryCache;
use crate::filter::{DateRange, FilterCompiler};
use crate::query::{example_query, BqCliBackend, CachedQueryRunner};
use crate::report::{generate_html_report, report_filename, time_series_spec};
use crate::types::config::Config;
use crate::{QuadroError, QuadroResult};

/// Initializes configuration in the specified directory.
pub async fn init(path: Option<PathBuf>) -> QuadroResult<()> {
    let target_dir = path.unwrap_or_else(|| PathBuf::from("."));

    // Create directory if it doesn't exist
    if !target_dir.exists() {
        std::fs::create_dir_all(&target_dir)?;
        tracing::info!("Directory created: {}", target_dir.display());
    }

    let config_path = target_dir.join("quadro.toml");

    if config_path.exists() {
        println!("Configuration already exists at: {}", config_path.display());
        println!("Use 'quadro config' to modify.");
        return Ok(());
    }

    // Update .gitignore to ignore generated reports
    update_gitignore(&target_dir)?;

    // Create default configuration
    let config = Config::default_config();
    config.save(&config_path)?;

    println!("Quadro initialized successfully!");
    println!("Configuration created at: {}", config_path.display());
    println!();
    println!("Next steps:");
    println!("  1. Authenticate: gcloud auth application-default login");
    println!("  2. Check the connection: quadro status");
    println!("  3. Point the config at your table: quadro config");

    Ok(())
}

/// Updates or creates .gitignore to exclude generated HTML reports.
fn update_gitignore(target_dir: &Path) -> QuadroResult<()> {
    let gitignore_path = target_dir.join(".gitignore");
    let report_entry = "report_*.html";
    let report_comment = "# Quadro - generated HTML reports";

    if gitignore_path.exists() {
        let content = std::fs::read_to_string(&gitignore_path)?;

        if content.lines().any(|line| line.trim() == report_entry) {
            tracing::debug!(".gitignore already contains the report entry");
            return Ok(());
        }

        let mut new_content = content.trim_end().to_string();
        if !new_content.is_empty() {
            new_content.push_str("\n\n");
        }
        new_content.push_str(report_comment);
        new_content.push('\n');
        new_content.push_str(report_entry);
        new_content.push('\n');

        std::fs::write(&gitignore_path, new_content)?;
        println!(".gitignore updated with {}", report_entry);
    } else {
        let content = format!("{}\n{}\n", report_comment, report_entry);
        std::fs::write(&gitignore_path, content)?;
        println!(".gitignore created with {}", report_entry);
    }

    Ok(())
}

/// Mostra status da conexão com o BigQuery.
pub async fn status(config: &Config) -> QuadroResult<()> {
    println!("Verificando conexão com o BigQuery...\n");

    println!("  Projeto:  {}", config.connection.project_id);
    println!("  Location: {}", config.connection.location);
    println!();

    // CLI bq
    let backend = BqCliBackend::from_config(&config.connection, config.general.timeout_secs);
    let available = backend.is_available().await;
    let status_icon = if available { "✓" } else { "✗" };
    let status_text = if available {
        "disponível"
    } else {
        "não encontrada"
    };

    println!("  {} CLI bq - {}", status_icon, status_text);

    if available {
        if let Ok(version) = backend.version().await {
            println!("      versão: {}", version);
        }
    } else {
        println!("      Instale o Google Cloud SDK: https://cloud.google.com/sdk/docs/install");
    }

    // Credenciais padrão do ambiente
    let source = CredentialSource::ApplicationDefault;
    match source.resolve(&config.connection.project_id) {
        Ok(creds) => {
            println!("  ✓ Credenciais - projeto: {}", creds.project_id);
        }
        Err(e) => {
            println!("  ✗ Credenciais - {}", e);
        }
    }

    println!();
    println!("Dica: use 'quadro query' para testar uma consulta.");

    Ok(())
}

/// Executa uma query com os filtros dados e exibe a tabela.
#[allow(clippy::too_many_arguments)]
pub async fn query(
    sql: Option<String>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    predicates: Vec<String>,
    no_cache: bool,
    ttl: u64,
    config: &Config,
) -> QuadroResult<()> {
    let date_range = build_date_range(start, end)?;

    let compiler = FilterCompiler::new(&config.connection.date_column);
    let where_clause = compiler.compile(date_range.as_ref(), &predicates);

    let sql = sql.unwrap_or_else(|| example_query(&config.connection, &where_clause));
    tracing::debug!(query = %sql, "query montada");

    let runner = build_runner(config);
    let use_cache = !no_cache && config.cache.enabled;

    let spinner = query_spinner();
    let result = runner
        .run(&sql, use_cache, Duration::from_secs(ttl))
        .await;
    spinner.finish_and_clear();

    let table = result?;

    if table.is_empty() {
        println!("A query não retornou resultados.");
        return Ok(());
    }

    println!("{} linha(s) retornada(s)\n", table.len());
    println!("{}", table.render_text());

    Ok(())
}

/// Gera o relatório HTML do dashboard.
pub async fn export(
    output: Option<PathBuf>,
    title: Option<String>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    config: &Config,
) -> QuadroResult<()> {
    let date_range = build_date_range(start, end)?;

    let compiler = FilterCompiler::new(&config.connection.date_column);
    let where_clause = compiler.compile(date_range.as_ref(), &[]);
    let sql = example_query(&config.connection, &where_clause);

    let runner = build_runner(config);

    let spinner = query_spinner();
    let result = runner
        .run(
            &sql,
            config.cache.enabled,
            Duration::from_secs(config.cache.ttl_secs),
        )
        .await;
    spinner.finish_and_clear();

    let table = result?;

    if table.is_empty() {
        println!("A query não retornou resultados; relatório não gerado.");
        return Ok(());
    }

    let charts = vec![
        time_series_spec(&table, "date", "record_count", "Registros por dia"),
        time_series_spec(&table, "date", "total_metric", "Métrica total por dia"),
    ];

    let report_title = title.unwrap_or_else(|| config.report.title.clone());
    let html = generate_html_report(&charts, &report_title);

    let output_path = output
        .unwrap_or_else(|| PathBuf::from(report_filename(&config.report.filename_prefix)));
    std::fs::write(&output_path, html)?;

    tracing::info!(path = %output_path.display(), charts = charts.len(), "relatório gerado");
    println!("Relatório gerado em: {}", output_path.display());

    Ok(())
}

/// Configura opções interativamente.
pub async fn config_cmd(config_path: &Path) -> QuadroResult<()> {
    use super::interactive::{run_interactive_config, show_config_summary};

    // Mostra resumo antes de editar
    if config_path.exists() {
        let config = Config::load(config_path)?;
        show_config_summary(&config);
    }

    run_interactive_config(config_path)
}

/// Mostra a versão.
pub fn version() {
    println!("quadro {}", env!("CARGO_PKG_VERSION"));
}

/// Monta o filtro de datas a partir das flags da CLI.
fn build_date_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> QuadroResult<Option<DateRange>> {
    match (start, end) {
        (Some(s), Some(e)) => Ok(Some(DateRange::between(s, e)?)),
        (Some(s), None) => Ok(Some(DateRange::single(s))),
        (None, Some(_)) => Err(QuadroError::config(
            "--end requer --start para formar um intervalo",
        )),
        (None, None) => Ok(None),
    }
}

/// Cria o runner com backend e cache a partir da configuração.
fn build_runner(config: &Config) -> CachedQueryRunner {
    let backend = Arc::new(BqCliBackend::from_config(
        &config.connection,
        config.general.timeout_secs,
    ));
    CachedQueryRunner::new(backend, QueryCache::new(config.cache.capacity))
}

/// Spinner exibido enquanto a query roda no backend.
fn query_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("template de spinner válido"),
    );
    spinner.set_message("Buscando dados...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
