//! Contract and dispatcher error types.
//!
//! `ContractError` carries the record operations' failure taxonomy. Every
//! kind reaches the caller as a typed error; none is retried or replaced
//! with a default value.

use core::fmt;

use chaincode_hostapi::StateError;
use chaincode_primitives::CodecError;

/// The store call that failed inside a contract operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    Read,
    Write,
    Delete,
}

impl fmt::Display for StoreOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "read from"),
            Self::Write => write!(f, "write to"),
            Self::Delete => write!(f, "delete from"),
        }
    }
}

/// Failure of a record operation.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// The world state itself failed.
    #[error("could not {op} world state: {source}")]
    StoreFault {
        op: StoreOp,
        #[source]
        source: StateError,
    },

    /// `create` was called for an id that is already present.
    #[error("the record {0} already exists")]
    AlreadyExists(String),

    /// `read`, `update` or `delete` was called for an absent id.
    #[error("the record {0} does not exist")]
    NotFound(String),

    /// Stored bytes are not a valid record encoding.
    #[error("could not deserialize world state data for record {id}: {source}")]
    DecodeFault {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    /// A record could not be serialized.
    #[error("could not serialize record {id}: {source}")]
    Encode {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Discriminant of [`ContractError`], for matching without payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    StoreFault,
    AlreadyExists,
    NotFound,
    DecodeFault,
    Encode,
}

impl ContractError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::StoreFault { .. } => ErrorKind::StoreFault,
            Self::AlreadyExists(_) => ErrorKind::AlreadyExists,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::DecodeFault { .. } => ErrorKind::DecodeFault,
            Self::Encode { .. } => ErrorKind::Encode,
        }
    }

    /// The underlying store error, if this is a store fault.
    pub fn store_cause(&self) -> Option<&StateError> {
        match self {
            Self::StoreFault { source, .. } => Some(source),
            _ => None,
        }
    }

    pub(crate) fn read_fault(source: StateError) -> Self {
        Self::StoreFault {
            op: StoreOp::Read,
            source,
        }
    }
}

/// Convenience result type for record operations.
pub type ContractResult<T> = Result<T, ContractError>;

/// Failure of the chaincode entry point.
#[derive(Debug, thiserror::Error)]
pub enum ChaincodeError {
    /// The invocation envelope could not be interpreted.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// No transaction with this name exists.
    #[error("function {function} not found in contract {contract}")]
    UnknownFunction { function: String, contract: String },

    /// The transaction was called with the wrong number of parameters.
    #[error("incorrect number of params for {function}: expected {expected}, received {received}")]
    ArgumentCount {
        function: String,
        expected: usize,
        received: usize,
    },

    /// Bootstrap metadata was rejected.
    #[error("invalid chaincode info: {0}")]
    InvalidInfo(String),

    /// The metadata document could not be serialized.
    #[error("could not serialize metadata: {0}")]
    Metadata(#[source] serde_json::Error),

    /// The record operation failed.
    #[error(transparent)]
    Contract(#[from] ContractError),
}

impl ChaincodeError {
    /// Whether the failure is an ordinary rejection of the caller's request
    /// rather than a fault in the store or the chaincode itself.
    pub fn is_rejection(&self) -> bool {
        match self {
            Self::Codec(_) | Self::UnknownFunction { .. } | Self::ArgumentCount { .. } => true,
            Self::Contract(err) => matches!(err.kind(), ErrorKind::AlreadyExists | ErrorKind::NotFound),
            Self::InvalidInfo(_) | Self::Metadata(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error() -> serde_json::Error {
        serde_json::from_slice::<serde_json::Value>(b"{").unwrap_err()
    }

    #[test]
    fn test_store_fault_display() {
        let err = ContractError::read_fault(StateError::unavailable("world state get error"));
        assert_eq!(
            err.to_string(),
            "could not read from world state: world state get error"
        );
        assert_eq!(err.kind(), ErrorKind::StoreFault);
        assert_eq!(
            err.store_cause(),
            Some(&StateError::unavailable("world state get error"))
        );

        let err = ContractError::StoreFault {
            op: StoreOp::Delete,
            source: StateError::unavailable("gone"),
        };
        assert_eq!(err.to_string(), "could not delete from world state: gone");
    }

    #[test]
    fn test_guard_rejection_display() {
        assert_eq!(
            ContractError::AlreadyExists("existingkey".into()).to_string(),
            "the record existingkey already exists"
        );
        assert_eq!(
            ContractError::NotFound("missingkey".into()).to_string(),
            "the record missingkey does not exist"
        );
    }

    #[test]
    fn test_decode_fault_is_distinct_from_not_found() {
        let err = ContractError::DecodeFault {
            id: "y".into(),
            source: decode_error(),
        };
        assert_eq!(err.kind(), ErrorKind::DecodeFault);
        assert_ne!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().starts_with("could not deserialize world state data for record y"));
        assert!(err.store_cause().is_none());
    }

    #[test]
    fn test_rejections_are_not_faults() {
        assert!(ChaincodeError::from(ContractError::AlreadyExists("a".into())).is_rejection());
        assert!(ChaincodeError::from(ContractError::NotFound("a".into())).is_rejection());
        assert!(ChaincodeError::from(CodecError::EmptyInput).is_rejection());
        assert!(ChaincodeError::UnknownFunction {
            function: "Transfer".into(),
            contract: "RecordContract".into(),
        }
        .is_rejection());

        let store = ContractError::read_fault(StateError::unavailable("boom"));
        assert!(!ChaincodeError::from(store).is_rejection());
        let decode = ContractError::DecodeFault {
            id: "y".into(),
            source: decode_error(),
        };
        assert!(!ChaincodeError::from(decode).is_rejection());
        assert!(!ChaincodeError::InvalidInfo("empty title".into()).is_rejection());
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error;

        let err = ContractError::read_fault(StateError::unavailable("boom"));
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "boom");
    }

    #[test]
    fn test_chaincode_error_transparent() {
        let err: ChaincodeError = ContractError::NotFound("a".into()).into();
        assert_eq!(err.to_string(), "the record a does not exist");

        let err: ChaincodeError = CodecError::EmptyInput.into();
        assert_eq!(err.to_string(), "invocation has no function name");
    }

    #[test]
    fn test_argument_count_display() {
        let err = ChaincodeError::ArgumentCount {
            function: "CreateRecord".into(),
            expected: 2,
            received: 1,
        };
        assert_eq!(
            err.to_string(),
            "incorrect number of params for CreateRecord: expected 2, received 1"
        );
    }
}
