//! Existence guard run before every record operation.
//!
//! Each operation first checks the world state for its id, then either
//! acts or rejects:
//!
//! ```text
//! CHECKING --get fault--> STORE_FAULT            (every operation fails)
//! CHECKING --answer-----> CHECKED --expected---> ACTING
//!                                 --otherwise--> REJECTED
//! ```
//!
//! | Operation | store fault | absent | present |
//! |---|---|---|---|
//! | create | fault | act | `AlreadyExists` |
//! | read   | fault | `NotFound` | act |
//! | update | fault | `NotFound` | act |
//! | delete | fault | `NotFound` | act |
//!
//! The check does no locking. Two invocations racing between check and
//! write are resolved (or not) by the store.

use chaincode_hostapi::WorldState;
use tracing::{debug, warn};

use crate::error::{ContractError, ContractResult};

/// What the check observed under an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presence {
    Absent,
    /// Present, with the stored bytes as observed.
    Present(Vec<u8>),
}

impl Presence {
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}

/// Which presence an operation requires to proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    /// `create`: the id must be unused.
    Absent,
    /// `read`, `update`, `delete`: the id must hold a record.
    Present,
}

/// Run the `CHECKING` state: one `get_state` call.
pub fn check(stub: &dyn WorldState, id: &str) -> ContractResult<Presence> {
    match stub.get_state(id) {
        Ok(Some(bytes)) => Ok(Presence::Present(bytes)),
        Ok(None) => Ok(Presence::Absent),
        Err(err) => {
            warn!(target: "chaincode::contract", id, error = %err, "world state read failed");
            Err(ContractError::read_fault(err))
        }
    }
}

/// Check `id` and apply the decision table for `expect`.
///
/// On success returns what was observed, so `read` can decode it without
/// fetching again.
pub fn enforce(stub: &dyn WorldState, id: &str, expect: Expect) -> ContractResult<Presence> {
    let presence = check(stub, id)?;
    let decision = match (expect, &presence) {
        (Expect::Absent, Presence::Absent) | (Expect::Present, Presence::Present(_)) => Ok(()),
        (Expect::Absent, Presence::Present(_)) => {
            Err(ContractError::AlreadyExists(id.to_string()))
        }
        (Expect::Present, Presence::Absent) => Err(ContractError::NotFound(id.to_string())),
    };
    debug!(
        target: "chaincode::contract",
        id,
        present = presence.is_present(),
        ?expect,
        proceed = decision.is_ok(),
        "guard decision"
    );
    decision.map(|()| presence)
}
