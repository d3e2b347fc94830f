use thiserror::Error;

/// Errors raised by payload serializers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// The pass-through serializer was handed a value that is not text.
    #[error("value is not text: found {found}")]
    NotText { found: &'static str },

    #[error("encode error: {0}")]
    Encode(String),

    #[error("decode error: {0}")]
    Decode(String),
}

pub type CodecResult<T> = Result<T, CodecError>;
