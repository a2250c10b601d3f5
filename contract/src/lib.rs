//! `chaincode-contract` — existence-guarded record contract.
//!
//! This crate implements create/read/update/delete over records kept in
//! the world state, each gated by an existence check, and the chaincode
//! entry point the ledger runtime invokes.
//!
//! ## Architecture
//!
//! - [`record::Record`]: the persisted entity and its JSON encoding
//! - [`guard`]: the existence check every operation runs first
//! - [`contract::RecordContract`]: the five record operations
//! - [`metadata`]: contract and chaincode descriptive metadata
//! - [`validation`]: metadata checks run at bootstrap
//! - [`chaincode::Chaincode`]: function-name dispatch over the contract
//!
//! The contract is stateless. All state lives in the `WorldState` reached
//! through a `TransactionContext`.

pub mod error;
pub mod record;
pub mod guard;
pub mod contract;
pub mod metadata;
pub mod validation;
pub mod chaincode;

// Re-export key types for convenience
pub use error::{ChaincodeError, ContractError, ContractResult, ErrorKind, StoreOp};
pub use record::Record;
pub use contract::RecordContract;
pub use metadata::{ChaincodeInfo, ChaincodeMetadata, ContactInfo, ContractInfo, LicenseInfo};
pub use chaincode::{Chaincode, Transaction};
