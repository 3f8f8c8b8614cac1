//! # Ownership Group Records
//!
//! An ownership group is a partition of owners sharing one fractional
//! interest in the home. Interest is a property of the group, not of its
//! members — a group keeps its fraction even while it has no surviving
//! owners.

use serde::{Deserialize, Serialize};

use mhr_core::{ActionTag, Fraction, GroupId};

/// An ownership group within a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipGroup {
    /// Stable group identifier, unique within the snapshot.
    pub id: GroupId,
    /// Declared fractional interest; absent when group-interest tracking
    /// is not in use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest: Option<Fraction>,
    /// Lifecycle action relative to the previous snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionTag>,
}

impl OwnershipGroup {
    /// Whether this group is pending removal.
    pub fn is_removed(&self) -> bool {
        self.action == Some(ActionTag::Removed)
    }
}

/// A single named mutation of a group record.
#[derive(Debug, Clone)]
pub enum GroupPatch {
    /// Set or clear the declared fractional interest.
    Interest(Option<Fraction>),
}

impl GroupPatch {
    /// Apply the patch to a group record.
    pub fn apply(self, group: &mut OwnershipGroup) {
        match self {
            GroupPatch::Interest(interest) => group.interest = interest,
        }
    }
}
