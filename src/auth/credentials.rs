//! Fontes de credencial e resolução de project id.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{QuadroError, QuadroResult};

/// Fonte de credencial escolhida pelo usuário.
///
/// Os três modos do template: credenciais locais do gcloud, arquivo de
/// chave de conta de serviço, ou conteúdo da chave colado diretamente.
#[derive(Debug, Clone)]
pub enum CredentialSource {
    /// Application Default Credentials (`gcloud auth application-default login`).
    ApplicationDefault,

    /// Arquivo JSON de chave de conta de serviço.
    KeyFile(PathBuf),

    /// Conteúdo JSON da chave colado diretamente.
    KeyJson(String),
}

/// Tipo de credencial resolvida.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialKind {
    /// Credenciais padrão do ambiente.
    ApplicationDefault,

    /// Conta de serviço identificada pelo client_email.
    ServiceAccount { client_email: String },
}

/// Credencial resolvida: identidade + project id.
///
/// O conteúdo do material de credencial nunca é inspecionado além do
/// necessário para extrair o project id; quem usa é a CLI `bq`.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Project id efetivo para as queries.
    pub project_id: String,

    /// Tipo da credencial.
    pub kind: CredentialKind,
}

/// Campos relevantes de uma chave de conta de serviço.
#[derive(Debug, Deserialize)]
struct ServiceAccountKey {
    project_id: Option<String>,
    client_email: Option<String>,
}

impl CredentialSource {
    /// Resolve a fonte em uma credencial utilizável.
    ///
    /// Para `ApplicationDefault` o project id vem da configuração; para
    /// chaves de conta de serviço vem do próprio JSON da chave.
    pub fn resolve(&self, default_project: &str) -> QuadroResult<Credentials> {
        match self {
            Self::ApplicationDefault => {
                if !adc_available() {
                    return Err(QuadroError::credentials(
                        "Credenciais padrão não encontradas. \
                         Execute: gcloud auth application-default login",
                    ));
                }

                Ok(Credentials {
                    project_id: default_project.to_string(),
                    kind: CredentialKind::ApplicationDefault,
                })
            }
            Self::KeyFile(path) => {
                let json = std::fs::read_to_string(path)?;
                parse_service_account(&json)
            }
            Self::KeyJson(json) => parse_service_account(json),
        }
    }
}

/// Parseia uma chave de conta de serviço e extrai a identidade.
fn parse_service_account(json: &str) -> QuadroResult<Credentials> {
    let key: ServiceAccountKey = serde_json::from_str(json)
        .map_err(|e| QuadroError::credentials(format!("Erro ao parsear JSON da chave: {}", e)))?;

    let project_id = key
        .project_id
        .ok_or_else(|| QuadroError::credentials("Chave de serviço sem project_id"))?;

    let client_email = key
        .client_email
        .ok_or_else(|| QuadroError::credentials("Chave de serviço sem client_email"))?;

    Ok(Credentials {
        project_id,
        kind: CredentialKind::ServiceAccount { client_email },
    })
}

/// Caminho well-known das Application Default Credentials do gcloud.
pub fn adc_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gcloud").join("application_default_credentials.json"))
}

/// Verifica se existe material de credencial padrão no ambiente.
fn adc_available() -> bool {
    if let Ok(path) = std::env::var("GOOGLE_APPLICATION_CREDENTIALS") {
        if Path::new(&path).exists() {
            return true;
        }
    }

    adc_path().map(|p| p.exists()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_KEY: &str = r#"{
        "type": "service_account",
        "project_id": "my-sa-project",
        "private_key_id": "abc123",
        "client_email": "reporter@my-sa-project.iam.gserviceaccount.com"
    }"#;

    #[test]
    fn test_key_json_resolves_project_from_key() {
        let source = CredentialSource::KeyJson(SAMPLE_KEY.to_string());
        let creds = source.resolve("ignored-default").unwrap();

        assert_eq!(creds.project_id, "my-sa-project");
        assert!(matches!(
            creds.kind,
            CredentialKind::ServiceAccount { ref client_email }
                if client_email == "reporter@my-sa-project.iam.gserviceaccount.com"
        ));
    }

    #[test]
    fn test_key_json_invalid() {
        let source = CredentialSource::KeyJson("not json".to_string());
        let result = source.resolve("default");

        assert!(matches!(result, Err(QuadroError::Credentials(_))));
    }

    #[test]
    fn test_key_json_missing_project_id() {
        let source = CredentialSource::KeyJson(r#"{"client_email": "a@b.com"}"#.to_string());
        let result = source.resolve("default");

        assert!(matches!(result, Err(QuadroError::Credentials(_))));
    }

    #[test]
    fn test_key_file_resolves() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_KEY.as_bytes()).unwrap();

        let source = CredentialSource::KeyFile(file.path().to_path_buf());
        let creds = source.resolve("default").unwrap();

        assert_eq!(creds.project_id, "my-sa-project");
    }

    #[test]
    fn test_key_file_missing() {
        let source = CredentialSource::KeyFile(PathBuf::from("/caminho/que/nao/existe.json"));
        let result = source.resolve("default");

        assert!(matches!(result, Err(QuadroError::Io(_))));
    }
}
