use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeystoreError {
    #[error("credential load error: {0}")]
    CredentialLoad(String),

    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    #[error("key derivation failed: {0}")]
    DerivationFailed(String),
}
