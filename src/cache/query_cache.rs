//! Cache com TTL para tabelas de resultado.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};
use lru::LruCache;

use crate::types::table::ResultTable;

/// Entrada em cache.
#[derive(Debug, Clone)]
pub struct CachedEntry {
    /// Tabela de resultado armazenada.
    pub table: ResultTable,

    /// Momento em que foi cacheada.
    pub cached_at: DateTime<Utc>,

    /// Tempo de vida desta entrada.
    pub ttl: Duration,
}

impl CachedEntry {
    /// Cria uma nova entrada em cache.
    pub fn new(table: ResultTable, ttl: Duration) -> Self {
        Self {
            table,
            cached_at: Utc::now(),
            ttl,
        }
    }

    /// Verifica se a entrada expirou.
    ///
    /// Uma entrada é reutilizável apenas enquanto `agora - cached_at < ttl`.
    pub fn is_expired(&self) -> bool {
        let elapsed = Utc::now()
            .signed_duration_since(self.cached_at)
            .to_std()
            .unwrap_or(Duration::MAX);
        elapsed >= self.ttl
    }
}

/// Estatísticas do cache.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Número atual de entradas.
    pub size: usize,

    /// Capacidade máxima.
    pub capacity: usize,

    /// Número de acertos (cache hits).
    pub hits: u64,

    /// Número de erros (cache misses).
    pub misses: u64,
}

impl CacheStats {
    /// Calcula a taxa de acerto.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Cache de resultados chaveado pelo texto exato da query.
///
/// A chave é a query verbatim: nenhuma normalização é aplicada, então
/// duas queries textualmente diferentes mas semanticamente idênticas
/// são entradas distintas. Instância explícita, criada na inicialização
/// e injetada no runner.
pub struct QueryCache {
    cache: LruCache<String, CachedEntry>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl QueryCache {
    /// Cria um novo cache.
    ///
    /// # Argumentos
    /// - `capacity`: Número máximo de entradas
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::new(100).unwrap());
        Self {
            cache: LruCache::new(cap),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Cria um cache com configuração padrão.
    pub fn default_config() -> Self {
        Self::new(1000)
    }

    /// Busca no cache pelo texto exato da query.
    ///
    /// Retorna `None` se não encontrada ou se expirada. Entradas
    /// expiradas são removidas, nunca servidas.
    pub fn get(&mut self, query_text: &str) -> Option<ResultTable> {
        // Primeiro verifica se existe e se está expirada (peek para não alterar LRU)
        let is_expired = self.cache.peek(query_text).map(|e| e.is_expired());

        match is_expired {
            Some(true) => {
                // Expirada - remove e retorna None
                self.cache.pop(query_text);
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
            Some(false) => {
                // Válida - acessa via get para atualizar LRU
                self.hits.fetch_add(1, Ordering::Relaxed);
                self.cache.get(query_text).map(|e| e.table.clone())
            }
            None => {
                // Não encontrada
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Insere o resultado de uma query com o TTL dado.
    ///
    /// Sobrescreve qualquer entrada anterior para a mesma query.
    pub fn insert(&mut self, query_text: impl Into<String>, table: ResultTable, ttl: Duration) {
        self.cache.put(query_text.into(), CachedEntry::new(table, ttl));
    }

    /// Invalida uma entrada específica.
    pub fn invalidate(&mut self, query_text: &str) {
        self.cache.pop(query_text);
    }

    /// Limpa todo o cache.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Retorna estatísticas do cache.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.cache.len(),
            capacity: self.cache.cap().get(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    /// Remove entradas expiradas.
    pub fn cleanup_expired(&mut self) {
        let expired_keys: Vec<String> = self
            .cache
            .iter()
            .filter(|(_, e)| e.is_expired())
            .map(|(k, _)| k.clone())
            .collect();

        for key in expired_keys {
            self.cache.pop(&key);
        }
    }
}
