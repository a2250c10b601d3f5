//! `chaincode-hostapi` — world state host API for the record chaincode.
//!
//! This crate defines the host-side interface the contract runs against.
//! It provides:
//!
//! - `WorldState` trait: the key-value store the contract reads and writes
//! - `TransactionContext` trait: per-invocation access to the store
//! - `MemStore`: in-memory `WorldState` with key/value validation
//! - `MockStub`: scripted `WorldState` that injects faults and records writes
//! - `StubConfig`: key/value limits enforced by the in-memory stores
//! - `StateError`: store fault type

pub mod error;
pub mod types;
pub mod state_store;
pub mod mem_store;
pub mod mock;
pub mod context;

// Re-export commonly used types at the crate root.
pub use error::StateError;
pub use types::StubConfig;
pub use state_store::WorldState;
pub use mem_store::MemStore;
pub use mock::{MockStub, StubCall};
pub use context::{TransactionContext, TxContext};
