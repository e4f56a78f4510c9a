//! Cache de resultados de query.
//!
//! Este módulo implementa um cache com TTL para tabelas de resultado,
//! chaveado pelo texto exato da query, evitando reexecuções no backend
//! dentro da janela de validade.

mod query_cache;

pub use query_cache::{CacheStats, CachedEntry, QueryCache};
