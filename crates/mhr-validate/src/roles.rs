//! # Role Consistency Validator
//!
//! Detects illegal mixtures of party types within a group.
//!
//! Legal shapes: all basic owners; or a single representative role held
//! uniformly (all executors, all administrators, or all trustees). A
//! basic owner sharing a group with a representative is legal only while
//! that owner is marked removed — the death-in-progress editing state.
//!
//! The two finding kinds are distinct because the host renders different
//! remediation copy for each.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use mhr_core::{GroupId, PartyType};
use mhr_registry::Snapshot;

/// An illegal role mixture within one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleMixtureFinding {
    /// A not-yet-removed basic owner shares the group with a
    /// representative role.
    MixedOwnerTypes,
    /// More than one distinct representative role is present in the
    /// group (e.g. executor and administrator).
    MixedOwnerTypesInGroup,
}

/// Check every group for illegal role mixtures.
///
/// Evaluated per group; each offending group reports independently.
pub fn check(snapshot: &Snapshot) -> BTreeMap<GroupId, RoleMixtureFinding> {
    let mut findings = BTreeMap::new();
    for group in snapshot.surviving_groups() {
        if let Some(finding) = check_group(snapshot, group.id) {
            findings.insert(group.id, finding);
        }
    }
    findings
}

fn check_group(snapshot: &Snapshot, group_id: GroupId) -> Option<RoleMixtureFinding> {
    let representative_roles: BTreeSet<PartyType> = snapshot
        .owners_in_group(group_id)
        .filter(|o| o.party_type.is_representative())
        .map(|o| o.party_type)
        .collect();

    if representative_roles.len() > 1 {
        return Some(RoleMixtureFinding::MixedOwnerTypesInGroup);
    }

    let has_active_basic_owner = snapshot
        .owners_in_group(group_id)
        .any(|o| o.party_type == PartyType::Owner && !o.is_removed());

    if has_active_basic_owner && !representative_roles.is_empty() {
        return Some(RoleMixtureFinding::MixedOwnerTypes);
    }

    None
}

// ─── Tests ───────────────────────────────────────────────────────────
