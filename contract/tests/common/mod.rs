//! Shared test helpers for integration tests.
//!
//! Provides deterministic transaction contexts, scripted stubs, and
//! chaincode invocation helpers used across all integration test files.

#![allow(dead_code)]

use std::collections::BTreeMap;

use chaincode_contract::{Chaincode, ChaincodeInfo};
use chaincode_hostapi::{MemStore, MockStub, TxContext};
use chaincode_primitives::{ChaincodeInput, ChaincodeResponse, TxId};

/// Message returned by every scripted `get_state` fault.
pub const GET_STATE_ERROR: &str = "world state get error";

/// Channel used by every test context.
pub const CHANNEL: &str = "mychannel";

/// Deterministic transaction id from a single seed byte.
pub fn tx_id(seed: u8) -> TxId {
    TxId::derive(&[seed; 24], b"test-creator")
}

/// Context over an empty in-memory store.
pub fn mem_ctx() -> TxContext<MemStore> {
    TxContext::new(MemStore::new(), CHANNEL, tx_id(1))
}

/// Context over an in-memory store seeded with raw entries.
pub fn seeded_ctx(entries: &[(&str, &str)]) -> TxContext<MemStore> {
    let data: BTreeMap<String, Vec<u8>> = entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.as_bytes().to_vec()))
        .collect();
    TxContext::new(MemStore::with_data(data), CHANNEL, tx_id(1))
}

/// Context over the standard scripted stub:
///
/// - `statebad`: every read faults
/// - `missingkey`: absent
/// - `existingkey`: holds bytes that are not a record
/// - `recordkey`: holds `{"value":"set value"}`
pub fn mock_ctx() -> TxContext<MockStub> {
    let stub = MockStub::new()
        .with_get_fault("statebad", GET_STATE_ERROR)
        .with_value("existingkey", b"some value".to_vec())
        .with_value("recordkey", br#"{"value":"set value"}"#.to_vec());
    TxContext::new(stub, CHANNEL, tx_id(2))
}

/// Chaincode with default metadata.
pub fn chaincode() -> Chaincode {
    Chaincode::new(ChaincodeInfo::default()).expect("default info is valid")
}

/// Invoke `args[0]` with the remaining args.
pub fn call(
    cc: &Chaincode,
    ctx: &mut dyn chaincode_hostapi::TransactionContext,
    args: &[&str],
) -> ChaincodeResponse {
    cc.invoke(ctx, &ChaincodeInput::from_args(args))
}

/// Payload of a successful response as UTF-8.
pub fn payload_str(response: &ChaincodeResponse) -> String {
    String::from_utf8(response.payload.to_vec()).expect("payload is UTF-8")
}
