//! Fault domain types.
//!
//! These types represent defect detections on manufactured products,
//! independent of any infrastructure concerns.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a persisted fault record.
///
/// The wire and storage format is a 24-character lowercase hexadecimal
/// string encoding a 12-byte object identifier: a 4-byte big-endian
/// unix-seconds timestamp followed by 8 random bytes. This keeps
/// identifiers compatible with the object-id scheme of the storage
/// backend the service was originally deployed against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaultId(String);

impl FaultId {
    /// Parse an identifier from its hex string form.
    ///
    /// Accepts mixed-case hex and normalizes to lowercase. Returns `None`
    /// for anything that is not exactly 24 hex characters.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.len() == 24 && s.bytes().all(|b| b.is_ascii_hexdigit()) {
            Some(Self(s.to_ascii_lowercase()))
        } else {
            None
        }
    }

    /// Generate a fresh identifier.
    ///
    /// Layout: 4-byte big-endian unix-seconds timestamp + 8 random bytes.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0u8; 12];
        let secs = u32::try_from(Utc::now().timestamp()).unwrap_or(u32::MAX);
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..].copy_from_slice(&Uuid::new_v4().as_bytes()[..8]);

        let mut hex = String::with_capacity(24);
        for b in bytes {
            // Writing to a String cannot fail
            let _ = write!(hex, "{b:02x}");
        }
        Self(hex)
    }

    /// The identifier as its hex string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FaultId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted fault record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fault {
    pub id: FaultId,
    pub product_id: String,
    /// Free-form category label, e.g. "crack", "scratch".
    pub fault_type: String,
    /// Detection confidence. Not constrained to a range.
    pub confidence: f64,
    pub detected_at: DateTime<Utc>,
    /// Reference URL to supporting image evidence.
    pub image_url: Option<String>,
}

/// Data for creating a new fault record.
///
/// The identifier is assigned by the storage layer at insert time, so it
/// has no place in the creation payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFault {
    pub product_id: String,
    pub fault_type: String,
    pub confidence: f64,
    pub detected_at: DateTime<Utc>,
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_id_is_24_lowercase_hex() {
        let id = FaultId::generate();
        assert_eq!(id.as_str().len(), 24);
        assert!(
            id.as_str()
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
        );
    }

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(FaultId::generate(), FaultId::generate());
    }

    #[test]
    fn parse_roundtrips_generated_ids() {
        let id = FaultId::generate();
        assert_eq!(FaultId::parse(id.as_str()), Some(id));
    }

    #[test]
    fn parse_normalizes_case() {
        let id = FaultId::parse("5F9D88B1C2A34E0012AB34CD").unwrap();
        assert_eq!(id.as_str(), "5f9d88b1c2a34e0012ab34cd");
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(FaultId::parse(""), None);
        assert_eq!(FaultId::parse("abc123"), None);
        assert_eq!(FaultId::parse("5f9d88b1c2a34e0012ab34cd0"), None);
    }

    #[test]
    fn parse_rejects_non_hex() {
        assert_eq!(FaultId::parse("not-a-valid-id-but-24ch!"), None);
        assert_eq!(FaultId::parse("5f9d88b1c2a34e0012ab34cg"), None);
    }
}
