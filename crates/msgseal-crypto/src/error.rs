use thiserror::Error;

/// Errors produced while building keyed-hash state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("invalid key length: {0}")]
    InvalidKeyLength(String),
}

pub type CryptoResult<T> = Result<T, CryptoError>;
