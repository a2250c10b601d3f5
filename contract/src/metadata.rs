//! Descriptive metadata for the contract and its chaincode.
//!
//! `ChaincodeInfo` is supplied once at bootstrap. `ChaincodeMetadata` is
//! the document the system `GetMetadata` function returns: it describes
//! the chaincode, the contract, every transaction with its parameters,
//! and the JSON schema of a stored record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::chaincode::Transaction;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Metadata for the record contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractInfo {
    /// Namespace used in `<name>:<function>` invocations.
    pub name: String,
    pub version: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<LicenseInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfo>,
}

impl Default for ContractInfo {
    fn default() -> Self {
        Self {
            name: "RecordContract".to_string(),
            version: "0.0.1".to_string(),
            description: "Existence-guarded record contract".to_string(),
            license: Some(LicenseInfo {
                name: "Apache-2.0".to_string(),
                url: None,
            }),
            contact: None,
        }
    }
}

/// Bootstrap configuration for the chaincode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaincodeInfo {
    pub title: String,
    pub version: String,
    pub contract: ContractInfo,
}

impl Default for ChaincodeInfo {
    fn default() -> Self {
        Self {
            title: "record chaincode".to_string(),
            version: "0.0.1".to_string(),
            contract: ContractInfo::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoSummary {
    pub title: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterMetadata {
    pub name: String,
    pub schema: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionMetadata {
    pub name: String,
    pub tag: Vec<String>,
    pub parameters: Vec<ParameterMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractMetadata {
    pub name: String,
    pub info: ContractInfo,
    pub transactions: Vec<TransactionMetadata>,
    pub default: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Components {
    pub schemas: BTreeMap<String, Value>,
}

/// Document returned by `org.hyperledger.fabric:GetMetadata`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChaincodeMetadata {
    pub info: InfoSummary,
    pub contracts: BTreeMap<String, ContractMetadata>,
    pub components: Components,
}

impl ChaincodeMetadata {
    pub fn build(info: &ChaincodeInfo) -> Self {
        let transactions = Transaction::ALL
            .iter()
            .map(|tx| TransactionMetadata {
                name: tx.name().to_string(),
                tag: vec![tx.tag().to_string()],
                parameters: tx
                    .params()
                    .iter()
                    .map(|p| ParameterMetadata {
                        name: (*p).to_string(),
                        schema: json!({ "type": "string" }),
                    })
                    .collect(),
                returns: tx.returns(),
            })
            .collect();

        let mut contracts = BTreeMap::new();
        contracts.insert(
            info.contract.name.clone(),
            ContractMetadata {
                name: info.contract.name.clone(),
                info: info.contract.clone(),
                transactions,
                default: true,
            },
        );

        let mut schemas = BTreeMap::new();
        schemas.insert("Record".to_string(), record_schema());

        Self {
            info: InfoSummary {
                title: info.title.clone(),
                version: info.version.clone(),
            },
            contracts,
            components: Components { schemas },
        }
    }
}

fn record_schema() -> Value {
    json!({
        "$id": "Record",
        "type": "object",
        "properties": {
            "value": { "type": "string" }
        },
        "required": ["value"],
        "additionalProperties": true
    })
}
