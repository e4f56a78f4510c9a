//! Interface de linha de comando do Quadro.

pub mod commands;
pub mod interactive;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Quadro - Dashboard BigQuery com cache de queries e exportação HTML.
#[derive(Parser, Debug)]
#[command(name = "quadro")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Arquivo de configuração.
    #[arg(short, long, default_value = "quadro.toml")]
    pub config: PathBuf,

    /// Modo verbose.
    #[arg(short, long)]
    pub verbose: bool,

    /// Modo silencioso.
    #[arg(short, long)]
    pub quiet: bool,

    /// Comando a executar.
    #[command(subcommand)]
    pub command: Commands,
}

/// Comandos disponíveis.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inicializa configuração no diretório atual.
    Init {
        /// Diretório de destino (padrão: diretório atual).
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Mostra status da conexão (CLI bq e credenciais).
    Status,

    /// Configura opções interativamente.
    Config,

    /// Executa uma query com os filtros dados.
    Query {
        /// SQL customizado (padrão: query de exemplo do template).
        #[arg(long)]
        sql: Option<String>,

        /// Início do intervalo de datas (YYYY-MM-DD).
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Fim do intervalo de datas (YYYY-MM-DD).
        #[arg(long)]
        end: Option<NaiveDate>,

        /// Predicado SQL extra (repetível).
        #[arg(long = "where", value_name = "PREDICATE")]
        predicates: Vec<String>,

        /// Desabilita o cache de resultados.
        #[arg(long)]
        no_cache: bool,

        /// TTL do cache em segundos.
        #[arg(long, default_value_t = 600)]
        ttl: u64,
    },

    /// Gera o relatório HTML com os gráficos do dashboard.
    Export {
        /// Arquivo de saída (padrão: <prefixo>_<timestamp>.html).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Título do relatório.
        #[arg(short, long)]
        title: Option<String>,

        /// Início do intervalo de datas (YYYY-MM-DD).
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Fim do intervalo de datas (YYYY-MM-DD).
        #[arg(long)]
        end: Option<NaiveDate>,
    },

    /// Mostra versão.
    Version,
}
