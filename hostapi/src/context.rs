//! Transaction context — per-invocation access to the world state.
//!
//! The host creates one context for each invocation. The contract reaches
//! the store only through it and keeps nothing once the call returns.

use chaincode_primitives::TxId;

use crate::state_store::WorldState;

/// Host-side view of a single invocation.
pub trait TransactionContext {
    /// The world state for reads.
    fn stub(&self) -> &dyn WorldState;

    /// The world state for writes.
    fn stub_mut(&mut self) -> &mut dyn WorldState;

    /// Identifier of the transaction being executed.
    fn tx_id(&self) -> &TxId;

    /// Channel the transaction was submitted on.
    fn channel_id(&self) -> &str;
}

/// Concrete context owning its stub.
#[derive(Debug, Clone)]
pub struct TxContext<S: WorldState> {
    stub: S,
    channel_id: String,
    tx_id: TxId,
}

impl<S: WorldState> TxContext<S> {
    pub fn new(stub: S, channel_id: impl Into<String>, tx_id: TxId) -> Self {
        Self {
            stub,
            channel_id: channel_id.into(),
            tx_id,
        }
    }

    /// Borrow the concrete stub, e.g. to inspect a `MockStub` call log.
    pub fn inner(&self) -> &S {
        &self.stub
    }

    /// Consume the context and return the stub.
    pub fn into_stub(self) -> S {
        self.stub
    }
}

impl<S: WorldState> TransactionContext for TxContext<S> {
    fn stub(&self) -> &dyn WorldState {
        &self.stub
    }

    fn stub_mut(&mut self) -> &mut dyn WorldState {
        &mut self.stub
    }

    fn tx_id(&self) -> &TxId {
        &self.tx_id
    }

    fn channel_id(&self) -> &str {
        &self.channel_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemStore;

    #[test]
    fn test_context_routes_to_stub() {
        let tx_id = TxId::derive(b"nonce", b"creator");
        let mut ctx = TxContext::new(MemStore::new(), "mychannel", tx_id);

        ctx.stub_mut().put_state("k", b"v").unwrap();
        assert_eq!(ctx.stub().get_state("k").unwrap(), Some(b"v".to_vec()));
        assert_eq!(ctx.channel_id(), "mychannel");
        assert_eq!(*ctx.tx_id(), tx_id);

        let store = ctx.into_stub();
        assert_eq!(store.len(), 1);
    }
}
