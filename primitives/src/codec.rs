//! Wire codec for chaincode invocations.
//!
//! The ledger runtime delivers each invocation as a protobuf
//! `ChaincodeInput` and expects a protobuf `ChaincodeResponse` back. Field
//! tags match the runtime's shim definitions:
//!
//! ```text
//! ChaincodeInput    { repeated bytes args = 1; bool is_init = 3; }
//! ChaincodeResponse { int32 status = 1; string message = 2; bytes payload = 3; }
//! ```
//!
//! The first argument of an input is the function name, the rest are its
//! string parameters.

use bytes::Bytes;
use prost::Message;

use crate::error::CodecError;
use crate::status;

/// Invocation envelope: function name followed by its arguments.
#[derive(Clone, PartialEq, Message)]
pub struct ChaincodeInput {
    #[prost(bytes = "vec", repeated, tag = "1")]
    pub args: Vec<Vec<u8>>,
    #[prost(bool, tag = "3")]
    pub is_init: bool,
}

impl ChaincodeInput {
    /// Build an input from string arguments.
    pub fn from_args(args: &[&str]) -> Self {
        Self {
            args: args.iter().map(|a| a.as_bytes().to_vec()).collect(),
            is_init: false,
        }
    }

    /// Split the input into its function name and string parameters.
    pub fn function_and_args(&self) -> Result<(String, Vec<String>), CodecError> {
        let mut strings = Vec::with_capacity(self.args.len());
        for (index, raw) in self.args.iter().enumerate() {
            let s = String::from_utf8(raw.clone())
                .map_err(|_| CodecError::InvalidUtf8 { index })?;
            strings.push(s);
        }
        if strings.is_empty() {
            return Err(CodecError::EmptyInput);
        }
        let function = strings.remove(0);
        Ok((function, strings))
    }
}

/// Result of an invocation as reported to the ledger runtime.
#[derive(Clone, PartialEq, Message)]
pub struct ChaincodeResponse {
    #[prost(int32, tag = "1")]
    pub status: i32,
    #[prost(string, tag = "2")]
    pub message: String,
    #[prost(bytes = "bytes", tag = "3")]
    pub payload: Bytes,
}

impl ChaincodeResponse {
    /// Successful response carrying `payload`.
    pub fn success(payload: impl Into<Bytes>) -> Self {
        Self {
            status: status::OK,
            message: String::new(),
            payload: payload.into(),
        }
    }

    /// Failed response with a human-readable message and no payload.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: status::ERROR,
            message: message.into(),
            payload: Bytes::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        status::is_success(self.status)
    }
}

/// Encode a `ChaincodeInput` to protobuf bytes.
pub fn encode_input(input: &ChaincodeInput) -> Vec<u8> {
    input.encode_to_vec()
}

/// Decode a `ChaincodeInput` from protobuf bytes.
pub fn decode_input(data: &[u8]) -> Result<ChaincodeInput, CodecError> {
    Ok(ChaincodeInput::decode(data)?)
}

/// Encode a `ChaincodeResponse` to protobuf bytes.
pub fn encode_response(response: &ChaincodeResponse) -> Vec<u8> {
    response.encode_to_vec()
}

/// Decode a `ChaincodeResponse` from protobuf bytes.
pub fn decode_response(data: &[u8]) -> Result<ChaincodeResponse, CodecError> {
    Ok(ChaincodeResponse::decode(data)?)
}
