//! # Quadro
//!
//! Template de dashboard BigQuery para relatórios com exportação HTML.
//!
//! Quadro conecta um fluxo de relatórios ao Google BigQuery: compila
//! filtros de data em cláusulas SQL, executa queries com cache opcional
//! por TTL e monta relatórios HTML estáticos com gráficos embutidos.
//!
//! ## Módulos
//!
//! - [`cli`] - Interface de linha de comando
//! - [`filter`] - Compilador de filtros para cláusulas WHERE
//! - [`query`] - Execução de queries com cache (backend `bq`)
//! - [`cache`] - Cache de resultados por texto exato da query
//! - [`auth`] - Resolução de credenciais GCP
//! - [`report`] - Exportação de relatórios HTML com gráficos
//! - [`types`] - Tipos compartilhados

pub mod auth;
pub mod cache;
#[cfg(feature = "cli")]
pub mod cli;
pub mod filter;
pub mod query;
pub mod report;
pub mod types;

pub use types::config::Config;
pub use types::errors::{QuadroError, QuadroResult};
pub use types::table::ResultTable;
