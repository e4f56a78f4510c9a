//! Runner de queries com cache opcional.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::cache::{CacheStats, QueryCache};
use crate::types::table::ResultTable;
use crate::QuadroResult;

use super::backend::QueryBackend;

/// TTL padrão para entradas de cache.
pub const DEFAULT_TTL: Duration = Duration::from_secs(600);

/// Executor de queries com cache opcional por TTL.
///
/// Possui uma instância explícita de [`QueryCache`] e um backend
/// injetado. O cache é a única mutação; falhas do backend são
/// propagadas sem modificação e nunca entram no cache.
///
/// O mutex protege o cache caso o runner seja compartilhado entre
/// tarefas; cada interação do template executa uma query por vez.
pub struct CachedQueryRunner {
    backend: Arc<dyn QueryBackend>,
    cache: Mutex<QueryCache>,
}

impl CachedQueryRunner {
    /// Cria um novo runner com o backend e o cache injetados.
    pub fn new(backend: Arc<dyn QueryBackend>, cache: QueryCache) -> Self {
        Self {
            backend,
            cache: Mutex::new(cache),
        }
    }

    /// Executa uma query, opcionalmente usando o cache.
    ///
    /// - `use_cache == false`: executa direto no backend; nenhuma
    ///   leitura ou escrita de cache acontece.
    /// - `use_cache == true`: busca pelo texto exato da query; uma
    ///   entrada viva é retornada sem contatar o backend, caso
    ///   contrário executa, armazena com o `ttl` dado e retorna.
    pub async fn run(
        &self,
        query_text: &str,
        use_cache: bool,
        ttl: Duration,
    ) -> QuadroResult<ResultTable> {
        let run_id = Uuid::new_v4();

        if use_cache {
            if let Some(table) = self.cache.lock().await.get(query_text) {
                tracing::debug!(%run_id, rows = table.len(), "resultado servido do cache");
                return Ok(table);
            }
        }

        tracing::debug!(%run_id, backend = self.backend.name(), "executando query no backend");
        let table = self.backend.execute(query_text).await?;
        tracing::info!(%run_id, rows = table.len(), "query executada");

        if use_cache {
            self.cache
                .lock()
                .await
                .insert(query_text, table.clone(), ttl);
        }

        Ok(table)
    }

    /// Executa com cache habilitado e TTL padrão.
    pub async fn run_cached(&self, query_text: &str) -> QuadroResult<ResultTable> {
        self.run(query_text, true, DEFAULT_TTL).await
    }

    /// Retorna estatísticas do cache.
    pub async fn stats(&self) -> CacheStats {
        self.cache.lock().await.stats()
    }

    /// Invalida a entrada de uma query específica.
    pub async fn invalidate(&self, query_text: &str) {
        self.cache.lock().await.invalidate(query_text);
    }

    /// Limpa todo o cache.
    pub async fn clear_cache(&self) {
        self.cache.lock().await.clear();
    }
}
