//! Chaincode entry point — routes invocations to the record contract.
//!
//! The ledger runtime calls [`Chaincode::invoke`] once per transaction
//! with a function name and string arguments. Function names may be
//! namespaced as `<ContractName>:<Function>`; the system namespace serves
//! the metadata document.
//!
//! | Function | Params | Payload on success |
//! |---|---|---|
//! | `RecordExists` | recordID | `true` / `false` |
//! | `CreateRecord` | recordID, value | empty |
//! | `ReadRecord` | recordID | record JSON |
//! | `UpdateRecord` | recordID, newValue | empty |
//! | `DeleteRecord` | recordID | empty |
//! | `org.hyperledger.fabric:GetMetadata` | none | metadata JSON |
//!
//! Every failure becomes a status-500 response carrying the error text.

use bytes::Bytes;
use chaincode_hostapi::TransactionContext;
use chaincode_primitives::codec::{decode_input, encode_response};
use chaincode_primitives::{ChaincodeInput, ChaincodeResponse};
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::contract::RecordContract;
use crate::error::{ChaincodeError, ContractError};
use crate::metadata::{ChaincodeInfo, ChaincodeMetadata};
use crate::validation::validate_info;

/// Namespace of runtime-level functions.
pub const SYSTEM_NAMESPACE: &str = "org.hyperledger.fabric";

/// System function returning the metadata document.
pub const GET_METADATA: &str = "GetMetadata";

/// A record contract transaction addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Exists,
    Create,
    Read,
    Update,
    Delete,
}

impl Transaction {
    pub const ALL: [Transaction; 5] = [
        Self::Exists,
        Self::Create,
        Self::Read,
        Self::Update,
        Self::Delete,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Exists => "RecordExists",
            Self::Create => "CreateRecord",
            Self::Read => "ReadRecord",
            Self::Update => "UpdateRecord",
            Self::Delete => "DeleteRecord",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tx| tx.name() == name)
    }

    /// Parameter names, in call order.
    pub fn params(self) -> &'static [&'static str] {
        match self {
            Self::Exists | Self::Read | Self::Delete => &["recordID"],
            Self::Create => &["recordID", "value"],
            Self::Update => &["recordID", "newValue"],
        }
    }

    /// Whether the transaction writes and must be submitted for ordering.
    pub fn is_submit(self) -> bool {
        matches!(self, Self::Create | Self::Update | Self::Delete)
    }

    /// `submit` or `evaluate`, as listed in the metadata.
    pub fn tag(self) -> &'static str {
        if self.is_submit() {
            "submit"
        } else {
            "evaluate"
        }
    }

    /// Schema of the success payload, if any.
    pub fn returns(self) -> Option<Value> {
        match self {
            Self::Exists => Some(json!({ "type": "boolean" })),
            Self::Read => Some(json!({ "$ref": "#/components/schemas/Record" })),
            Self::Create | Self::Update | Self::Delete => None,
        }
    }
}

/// The chaincode: validated metadata plus the contract it serves.
#[derive(Debug, Clone)]
pub struct Chaincode {
    contract: RecordContract,
    info: ChaincodeInfo,
}

impl Chaincode {
    /// Build the chaincode, rejecting invalid metadata.
    pub fn new(info: ChaincodeInfo) -> Result<Self, ChaincodeError> {
        validate_info(&info)?;
        info!(
            target: "chaincode::dispatch",
            title = %info.title,
            version = %info.version,
            contract = %info.contract.name,
            "chaincode ready"
        );
        Ok(Self {
            contract: RecordContract::new(),
            info,
        })
    }

    pub fn info(&self) -> &ChaincodeInfo {
        &self.info
    }

    pub fn contract(&self) -> &RecordContract {
        &self.contract
    }

    pub fn metadata(&self) -> ChaincodeMetadata {
        ChaincodeMetadata::build(&self.info)
    }

    /// Instantiate the chaincode.
    ///
    /// The contract keeps no instantiation state, so an init without
    /// arguments is a no-op. An init naming a function runs it exactly as
    /// [`Chaincode::invoke`] would.
    pub fn init(&self, ctx: &mut dyn TransactionContext, input: &ChaincodeInput) -> ChaincodeResponse {
        if input.args.is_empty() {
            debug!(target: "chaincode::dispatch", tx_id = %ctx.tx_id(), "init without function");
            return ChaincodeResponse::success(Bytes::new());
        }
        self.invoke(ctx, input)
    }

    /// Run one invocation and build its response.
    pub fn invoke(&self, ctx: &mut dyn TransactionContext, input: &ChaincodeInput) -> ChaincodeResponse {
        match self.dispatch(ctx, input) {
            Ok(payload) => ChaincodeResponse::success(payload),
            Err(err) => {
                if err.is_rejection() {
                    debug!(
                        target: "chaincode::dispatch",
                        tx_id = %ctx.tx_id(),
                        error = %err,
                        "invocation rejected"
                    );
                } else {
                    warn!(
                        target: "chaincode::dispatch",
                        tx_id = %ctx.tx_id(),
                        channel = ctx.channel_id(),
                        error = %err,
                        "invocation failed"
                    );
                }
                ChaincodeResponse::error(err.to_string())
            }
        }
    }

    /// Decode a protobuf `ChaincodeInput`, run it as an init or an invoke
    /// according to `is_init`, and encode the response.
    pub fn invoke_bytes(&self, ctx: &mut dyn TransactionContext, raw: &[u8]) -> Vec<u8> {
        let response = match decode_input(raw) {
            Ok(input) if input.is_init => self.init(ctx, &input),
            Ok(input) => self.invoke(ctx, &input),
            Err(err) => {
                debug!(target: "chaincode::dispatch", error = %err, "undecodable invocation");
                ChaincodeResponse::error(err.to_string())
            }
        };
        encode_response(&response)
    }

    fn dispatch(
        &self,
        ctx: &mut dyn TransactionContext,
        input: &ChaincodeInput,
    ) -> Result<Vec<u8>, ChaincodeError> {
        let (function, args) = input.function_and_args()?;
        let (namespace, name) = match function.split_once(':') {
            Some((ns, name)) => (Some(ns), name),
            None => (None, function.as_str()),
        };

        if namespace == Some(SYSTEM_NAMESPACE) {
            if name != GET_METADATA {
                return Err(ChaincodeError::UnknownFunction {
                    function: name.to_string(),
                    contract: SYSTEM_NAMESPACE.to_string(),
                });
            }
            expect_args(name, &args, 0)?;
            return serde_json::to_vec(&self.metadata()).map_err(ChaincodeError::Metadata);
        }

        let contract_name = &self.info.contract.name;
        if let Some(ns) = namespace {
            if ns != contract_name {
                return Err(ChaincodeError::UnknownFunction {
                    function: name.to_string(),
                    contract: ns.to_string(),
                });
            }
        }

        let tx = Transaction::from_name(name).ok_or_else(|| ChaincodeError::UnknownFunction {
            function: name.to_string(),
            contract: contract_name.clone(),
        })?;
        expect_args(tx.name(), &args, tx.params().len())?;

        debug!(
            target: "chaincode::dispatch",
            function = tx.name(),
            tx_id = %ctx.tx_id(),
            channel = ctx.channel_id(),
            "dispatching"
        );

        let payload = match tx {
            Transaction::Exists => {
                let exists = self
                    .contract
                    .exists(ctx, &args[0])
                    .map_err(ContractError::read_fault)?;
                exists.to_string().into_bytes()
            }
            Transaction::Create => {
                self.contract.create(ctx, &args[0], &args[1])?;
                Vec::new()
            }
            Transaction::Read => {
                let record = self.contract.read(ctx, &args[0])?;
                record.to_bytes().map_err(|source| ContractError::Encode {
                    id: args[0].clone(),
                    source,
                })?
            }
            Transaction::Update => {
                self.contract.update(ctx, &args[0], &args[1])?;
                Vec::new()
            }
            Transaction::Delete => {
                self.contract.delete(ctx, &args[0])?;
                Vec::new()
            }
        };
        Ok(payload)
    }
}

fn expect_args(function: &str, args: &[String], expected: usize) -> Result<(), ChaincodeError> {
    if args.len() != expected {
        return Err(ChaincodeError::ArgumentCount {
            function: function.to_string(),
            expected,
            received: args.len(),
        });
    }
    Ok(())
}
