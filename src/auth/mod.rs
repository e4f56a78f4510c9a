//! Resolução de credenciais GCP.
//!
//! A autenticação real é delegada ao Google Cloud SDK; aqui só é
//! resolvido de onde vem a identidade e qual o project id associado.

mod credentials;

pub use credentials::{adc_path, CredentialKind, CredentialSource, Credentials};
