//! Tipos de erro do Quadro.

use thiserror::Error;

/// Tipo de resultado padrão do Quadro.
pub type QuadroResult<T> = Result<T, QuadroError>;

/// Erros possíveis no Quadro.
#[derive(Error, Debug)]
pub enum QuadroError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro ao parsear TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Erro ao serializar TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Erro de JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Intervalo de datas inválido: início {start} após o fim {end}")]
    InvalidDateRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    #[error("Backend '{0}' não encontrado ou não disponível")]
    BackendUnavailable(String),

    #[error("Backend '{0}' falhou: {1}")]
    BackendFailed(String, String),

    #[error("Timeout ao executar query no backend '{0}'")]
    BackendTimeout(String),

    #[error("Erro de credenciais: {0}")]
    Credentials(String),

    #[cfg(feature = "cli")]
    #[error("Erro de prompt interativo: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    #[error("Configuração não encontrada em: {0}")]
    ConfigNotFound(String),

    #[error("{0}")]
    Other(String),
}

impl QuadroError {
    /// Cria um erro genérico.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }

    /// Cria um erro de configuração.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Cria um erro de credenciais.
    pub fn credentials<S: Into<String>>(msg: S) -> Self {
        Self::Credentials(msg.into())
    }
}
