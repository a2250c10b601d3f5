//! Error type for the invocation wire codec.

/// Failure to decode or interpret an invocation envelope.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The protobuf bytes could not be decoded.
    #[error("malformed envelope: {0}")]
    Malformed(String),

    /// The input carried no arguments, so there is no function name.
    #[error("invocation has no function name")]
    EmptyInput,

    /// An argument was not valid UTF-8.
    #[error("argument {index} is not valid UTF-8")]
    InvalidUtf8 { index: usize },

    /// A transaction id was not 64 hex digits.
    #[error("invalid transaction id: {0}")]
    InvalidTxId(String),
}

impl From<prost::DecodeError> for CodecError {
    fn from(err: prost::DecodeError) -> Self {
        Self::Malformed(err.to_string())
    }
}
