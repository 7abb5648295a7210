use thiserror::Error;

/// Ethereum transaction operation errors.
#[derive(Debug, Error)]
pub enum EthError {
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("transaction build error: {0}")]
    TransactionBuild(String),

    #[error("signing error: {0}")]
    Signing(String),
}
