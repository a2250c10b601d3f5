//! `chaincode-primitives` — foundational types for the record chaincode.
//!
//! This crate provides the limits, transaction identifiers, response status
//! codes, and invocation wire codec shared by the world state host API and
//! the record contract.

pub mod types;
pub mod error;
pub mod status;
pub mod codec;

// Re-export commonly used types at the crate root for convenience.
pub use types::{TxId, COMPOSITE_KEY_NAMESPACE, MAX_KEY_LEN, MAX_VALUE_LEN};
pub use error::CodecError;
pub use codec::{ChaincodeInput, ChaincodeResponse};
