//! Core constants and the transaction identifier.
//!
//! These types are used across the world state host API and the contract.

use core::fmt;

use sha2::{Digest, Sha256};

use crate::error::CodecError;

/// Maximum key length accepted by the world state for writes.
pub const MAX_KEY_LEN: usize = 256;

/// Maximum value length accepted by the world state.
pub const MAX_VALUE_LEN: usize = 65_536; // 64 KiB

/// Leading character reserved for composite keys.
///
/// Simple keys must not start with it; the store rejects such writes.
pub const COMPOSITE_KEY_NAMESPACE: char = '\u{0}';

/// Transaction identifier: `sha256(nonce || creator)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TxId([u8; 32]);

impl TxId {
    /// Derive the identifier for a proposal from its nonce and the
    /// serialized identity of its creator.
    pub fn derive(nonce: &[u8], creator: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(nonce);
        hasher.update(creator);
        Self(hasher.finalize().into())
    }

    /// Wrap a raw 32-byte digest.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse 64 hex digits (either case).
    pub fn from_hex(s: &str) -> Result<Self, CodecError> {
        let raw = s.as_bytes();
        if raw.len() != 64 {
            return Err(CodecError::InvalidTxId(format!(
                "expected 64 hex digits, got {}",
                raw.len()
            )));
        }
        let mut out = [0u8; 32];
        for (i, pair) in raw.chunks_exact(2).enumerate() {
            let hi = hex_nibble(pair[0])?;
            let lo = hex_nibble(pair[1])?;
            out[i] = (hi << 4) | lo;
        }
        Ok(Self(out))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lower-case hex rendering, as the ledger runtime reports it.
    pub fn to_hex(&self) -> String {
        let mut s = String::with_capacity(64);
        for byte in &self.0 {
            use core::fmt::Write;
            let _ = write!(s, "{:02x}", byte);
        }
        s
    }
}

fn hex_nibble(c: u8) -> Result<u8, CodecError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(CodecError::InvalidTxId(format!(
            "invalid hex digit {:?}",
            c as char
        ))),
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxId({})", self.to_hex())
    }
}
