//! Backend de execução de queries.

use async_trait::async_trait;
use std::time::Duration;
use tokio::process::Command;

use crate::types::config::ConnectionConfig;
use crate::types::table::ResultTable;
use crate::{QuadroError, QuadroResult};

/// Trait para backends de execução de SQL.
///
/// O runner recebe uma implementação injetada e nunca conhece detalhes
/// de autenticação ou transporte. Falhas do backend são propagadas ao
/// chamador sem modificação: sem retry, sem resultado parcial.
#[async_trait]
pub trait QueryBackend: Send + Sync {
    /// Retorna o nome do backend.
    fn name(&self) -> &str;

    /// Executa a query SQL e retorna a tabela de resultados.
    async fn execute(&self, sql: &str) -> QuadroResult<ResultTable>;
}

/// Backend que encapsula a CLI `bq` do Google Cloud SDK.
///
/// As credenciais são as do ambiente (`gcloud auth application-default
/// login` ou `GOOGLE_APPLICATION_CREDENTIALS`); este backend nunca
/// inspeciona o conteúdo delas.
pub struct BqCliBackend {
    command_name: String,
    project_id: String,
    location: String,
    timeout: Duration,
}

impl BqCliBackend {
    /// Cria um novo backend com valores padrão.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            command_name: "bq".to_string(),
            project_id: project_id.into(),
            location: "US".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Cria backend a partir da configuração do TOML.
    pub fn from_config(config: &ConnectionConfig, timeout_secs: u64) -> Self {
        Self {
            command_name: "bq".to_string(),
            project_id: config.project_id.clone(),
            location: config.location.clone(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Define o timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Verifica se a CLI está disponível no sistema.
    pub async fn is_available(&self) -> bool {
        Command::new(&self.command_name)
            .arg("version")
            .output()
            .await
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    /// Retorna a versão da CLI.
    pub async fn version(&self) -> QuadroResult<String> {
        let output = Command::new(&self.command_name)
            .arg("version")
            .output()
            .await?;

        let version = String::from_utf8_lossy(&output.stdout)
            .lines()
            .next()
            .unwrap_or("unknown")
            .to_string();

        Ok(version)
    }
}

#[async_trait]
impl QueryBackend for BqCliBackend {
    fn name(&self) -> &str {
        "bq"
    }

    async fn execute(&self, sql: &str) -> QuadroResult<ResultTable> {
        // --format=json imprime as linhas como array de objetos no stdout
        let mut cmd = Command::new(&self.command_name);
        cmd.arg(format!("--project_id={}", self.project_id))
            .arg(format!("--location={}", self.location))
            .arg("--format=json")
            .arg("query")
            .arg("--nouse_legacy_sql")
            .arg(sql);

        let result = tokio::time::timeout(self.timeout, cmd.output()).await;

        match result {
            Ok(Ok(output)) => {
                if output.status.success() {
                    let stdout = String::from_utf8_lossy(&output.stdout);
                    ResultTable::from_json_rows(&stdout).map_err(|e| {
                        QuadroError::BackendFailed(
                            self.name().to_string(),
                            format!("Falha ao parsear saída JSON: {}", e),
                        )
                    })
                } else {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    Err(QuadroError::BackendFailed(
                        self.name().to_string(),
                        stderr.trim().to_string(),
                    ))
                }
            }
            Ok(Err(e)) => {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Err(QuadroError::BackendUnavailable(self.name().to_string()))
                } else {
                    Err(QuadroError::BackendFailed(
                        self.name().to_string(),
                        e.to_string(),
                    ))
                }
            }
            Err(_) => Err(QuadroError::BackendTimeout(self.name().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_name() {
        let backend = BqCliBackend::new("my-project");
        assert_eq!(backend.name(), "bq");
    }

    #[test]
    fn test_from_config() {
        let config = ConnectionConfig {
            project_id: "proj".to_string(),
            location: "EU".to_string(),
            ..ConnectionConfig::default()
        };

        let backend = BqCliBackend::from_config(&config, 30);

        assert_eq!(backend.project_id, "proj");
        assert_eq!(backend.location, "EU");
        assert_eq!(backend.timeout, Duration::from_secs(30));
    }

    #[tokio::test]
    async fn test_execute_missing_cli_is_unavailable() {
        let mut backend = BqCliBackend::new("proj");
        backend.command_name = "bq-cli-que-nao-existe".to_string();

        let result = backend.execute("SELECT 1").await;

        assert!(matches!(result, Err(QuadroError::BackendUnavailable(_))));
    }
}
