use msgseal_codec::CodecError;
use msgseal_crypto::CryptoError;
use thiserror::Error;

/// Errors returned by [`MessageVerifier`](crate::MessageVerifier).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifierError {
    /// No serializer configured. Checked before anything else.
    #[error("serializer not set")]
    SerializerNotSet,

    /// Empty signing secret. Checked right after the serializer.
    #[error("secret not set")]
    SecretNotSet,

    /// The token has no `--` separator or no digest after it.
    #[error("invalid signature - bad data --")]
    MalformedToken,

    /// The digest does not match the data. Tampering with either half of the
    /// token lands here.
    #[error("invalid signature - bad data (compare)")]
    InvalidSignature,

    /// Payload encode or decode failure, passed through unchanged.
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type VerifierResult<T> = Result<T, VerifierError>;
