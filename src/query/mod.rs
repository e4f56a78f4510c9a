//! Execução de queries no BigQuery.
//!
//! Este módulo contém o trait do backend de execução, o wrapper para a
//! CLI `bq` do Google Cloud SDK e o runner com cache opcional.

mod backend;
mod runner;
mod template;

pub use backend::{BqCliBackend, QueryBackend};
pub use runner::{CachedQueryRunner, DEFAULT_TTL};
pub use template::example_query;
