//! Document identifiers
//!
//! Lookup keys are fixed-format tokens: 24 hexadecimal characters
//! encoding 12 bytes (a 4-byte big-endian unix timestamp followed by
//! 8 random bytes). The store assigns one on insert; clients only ever
//! see the hex form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Byte length of a decoded identifier.
const ID_BYTES: usize = 12;

/// Character length of the hex form.
pub const ID_HEX_LEN: usize = 2 * ID_BYTES;

/// A token that is not a well-formed document identifier.
///
/// Distinct from not-found: a malformed token can never name a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed document id: {0:?}")]
pub struct MalformedId(pub String);

/// Identifier of a stored document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentId([u8; ID_BYTES]);

impl DocumentId {
    /// Generate a fresh identifier (current time + random tail).
    pub fn generate() -> Self {
        let mut bytes = [0u8; ID_BYTES];
        let secs = chrono::Utc::now().timestamp().max(0) as u32;
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        let tail: [u8; 8] = rand::random();
        bytes[4..].copy_from_slice(&tail);
        Self(bytes)
    }

    /// Raw identifier bytes.
    pub fn as_bytes(&self) -> &[u8; ID_BYTES] {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl FromStr for DocumentId {
    type Err = MalformedId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != ID_HEX_LEN || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(MalformedId(s.to_string()));
        }

        let mut bytes = [0u8; ID_BYTES];
        for (i, chunk) in s.as_bytes().chunks_exact(2).enumerate() {
            // Safe: chunk is two ASCII hex digits by the check above.
            let pair = std::str::from_utf8(chunk).map_err(|_| MalformedId(s.to_string()))?;
            bytes[i] =
                u8::from_str_radix(pair, 16).map_err(|_| MalformedId(s.to_string()))?;
        }
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for DocumentId {
    type Error = MalformedId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DocumentId> for String {
    fn from(id: DocumentId) -> Self {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_round_trips() {
        let id = DocumentId::generate();
        let hex = id.to_string();
        assert_eq!(hex.len(), ID_HEX_LEN);
        assert_eq!(hex.parse::<DocumentId>().unwrap(), id);
    }

    #[test]
    fn test_well_formed_token_parses() {
        let id: DocumentId = "5f43ef20c1d4a133e4628181".parse().unwrap();
        assert_eq!(id.to_string(), "5f43ef20c1d4a133e4628181");
    }

    #[test]
    fn test_uppercase_hex_accepted() {
        let id: DocumentId = "5F43EF20C1D4A133E4628181".parse().unwrap();
        assert_eq!(id.to_string(), "5f43ef20c1d4a133e4628181");
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        for raw in ["1", "", "5f43ef20c1d4a133e462818", "5f43ef20c1d4a133e4628181ff", "zz43ef20c1d4a133e4628181"] {
            assert_eq!(
                raw.parse::<DocumentId>(),
                Err(MalformedId(raw.to_string())),
                "expected {:?} to be malformed",
                raw
            );
        }
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let id: DocumentId = "5f43ef20c1d4a133e4628181".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"5f43ef20c1d4a133e4628181\"");
        let back: DocumentId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_serde_rejects_malformed() {
        assert!(serde_json::from_str::<DocumentId>("\"1\"").is_err());
    }
}
