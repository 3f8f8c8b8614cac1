//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifiers used by the ownership engine.
//! These prevent accidental identifier confusion — you cannot pass an
//! `OwnerId` where a `GroupId` is expected.
//!
//! Owner and group ids are small integers assigned per snapshot, matching
//! the registry wire format. Transaction ids are random UUIDs assigned when
//! a registration or transfer flow begins.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an owner within a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OwnerId(pub u32);

/// Unique identifier for an ownership group within a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupId(pub u32);

/// Unique identifier for a registration or transfer transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(pub Uuid);

impl OwnerId {
    /// Access the inner numeric id.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl GroupId {
    /// Access the inner numeric id.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl TransactionId {
    /// Generate a new random transaction identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "owner:{}", self.0)
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "group:{}", self.0)
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "transaction:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        assert_eq!(OwnerId(7).to_string(), "owner:7");
        assert_eq!(GroupId(2).to_string(), "group:2");
        assert!(TransactionId::new().to_string().starts_with("transaction:"));
    }

    #[test]
    fn test_owner_id_serde_is_bare_integer() {
        let json = serde_json::to_string(&OwnerId(12)).unwrap();
        assert_eq!(json, "12");
        let parsed: OwnerId = serde_json::from_str("12").unwrap();
        assert_eq!(parsed, OwnerId(12));
    }
}
