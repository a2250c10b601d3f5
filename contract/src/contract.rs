//! The record contract: existence-guarded create/read/update/delete.
//!
//! Every operation except `exists` runs the guard first and touches the
//! store again only if the guard lets it proceed, so a rejected or faulted
//! call performs no write. There is no partial success: an operation
//! either issues its single write/delete or none at all.

use chaincode_hostapi::{StateError, TransactionContext};
use tracing::{info, warn};

use crate::error::{ContractError, ContractResult, StoreOp};
use crate::guard::{self, Expect, Presence};
use crate::record::Record;

/// Stateless record contract.
///
/// Holds nothing between calls; the world state reached through the
/// context is the only source of truth.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordContract;

impl RecordContract {
    pub fn new() -> Self {
        Self
    }

    /// Returns true when a value is stored under `id`.
    ///
    /// Store failures are returned unchanged, never reported as `false`.
    pub fn exists(&self, ctx: &dyn TransactionContext, id: &str) -> Result<bool, StateError> {
        Ok(ctx.stub().get_state(id)?.is_some())
    }

    /// Store a new record under `id`. Fails if `id` is already present.
    pub fn create(
        &self,
        ctx: &mut dyn TransactionContext,
        id: &str,
        value: &str,
    ) -> ContractResult<()> {
        guard::enforce(ctx.stub(), id, Expect::Absent)?;
        self.write(ctx, id, value)?;
        info!(target: "chaincode::contract", id, tx_id = %ctx.tx_id(), "record created");
        Ok(())
    }

    /// Fetch and decode the record under `id`.
    ///
    /// Uses the bytes observed by the guard, so a single `get_state` call
    /// serves both the existence check and the fetch.
    pub fn read(&self, ctx: &dyn TransactionContext, id: &str) -> ContractResult<Record> {
        let bytes = match guard::enforce(ctx.stub(), id, Expect::Present)? {
            Presence::Present(bytes) => bytes,
            Presence::Absent => return Err(ContractError::NotFound(id.to_string())),
        };
        Record::from_bytes(&bytes).map_err(|source| {
            warn!(target: "chaincode::contract", id, error = %source, "stored record is malformed");
            ContractError::DecodeFault {
                id: id.to_string(),
                source,
            }
        })
    }

    /// Replace the record under `id` with one holding only `new_value`.
    pub fn update(
        &self,
        ctx: &mut dyn TransactionContext,
        id: &str,
        new_value: &str,
    ) -> ContractResult<()> {
        guard::enforce(ctx.stub(), id, Expect::Present)?;
        self.write(ctx, id, new_value)?;
        info!(target: "chaincode::contract", id, tx_id = %ctx.tx_id(), "record updated");
        Ok(())
    }

    /// Remove the record under `id`.
    pub fn delete(&self, ctx: &mut dyn TransactionContext, id: &str) -> ContractResult<()> {
        guard::enforce(ctx.stub(), id, Expect::Present)?;
        ctx.stub_mut().del_state(id).map_err(|source| {
            warn!(target: "chaincode::contract", id, error = %source, "world state delete failed");
            ContractError::StoreFault {
                op: StoreOp::Delete,
                source,
            }
        })?;
        info!(target: "chaincode::contract", id, tx_id = %ctx.tx_id(), "record deleted");
        Ok(())
    }

    fn write(&self, ctx: &mut dyn TransactionContext, id: &str, value: &str) -> ContractResult<()> {
        let bytes = Record::new(value)
            .to_bytes()
            .map_err(|source| ContractError::Encode {
                id: id.to_string(),
                source,
            })?;
        ctx.stub_mut().put_state(id, &bytes).map_err(|source| {
            warn!(target: "chaincode::contract", id, error = %source, "world state write failed");
            ContractError::StoreFault {
                op: StoreOp::Write,
                source,
            }
        })
    }
}
