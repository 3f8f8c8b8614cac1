//! # Structural Checks
//!
//! Shape requirements independent of any transfer type: every surviving
//! group must hold at least one surviving owner, and the snapshot as a
//! whole must retain at least one surviving owner.
//!
//! Structural findings take precedence over role and transfer findings
//! for the same group — a role-mixture message on a group with no owners
//! is not actionable. The aggregator enforces that ordering.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use mhr_core::GroupId;
use mhr_registry::Snapshot;

/// A structural defect in one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StructuralFinding {
    /// A surviving group holds zero surviving owners.
    GroupMustContainAtLeastOneOwner,
}

/// Per-group structural findings plus the snapshot-level owner check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralOutcome {
    /// Offending groups.
    pub groups: BTreeMap<GroupId, StructuralFinding>,
    /// Whether at least one surviving owner remains in the snapshot.
    pub at_least_one_owner: bool,
}

/// Evaluate the structural requirements of a snapshot.
pub fn check(snapshot: &Snapshot) -> StructuralOutcome {
    let mut groups = BTreeMap::new();
    for group in snapshot.surviving_groups() {
        let has_survivor = snapshot
            .owners_in_group(group.id)
            .any(|o| !o.is_removed());
        if !has_survivor {
            groups.insert(group.id, StructuralFinding::GroupMustContainAtLeastOneOwner);
        }
    }
    StructuralOutcome {
        groups,
        at_least_one_owner: snapshot.surviving_owners().next().is_some(),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
