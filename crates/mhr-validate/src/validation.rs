//! # Validation Aggregator
//!
//! Composes the structural, allocation, role, and transfer validators
//! into one `ValidationState` — the single value the host renders from.
//!
//! Structural findings take precedence: a group flagged as structurally
//! invalid suppresses its role-mixture finding and any group-scoped
//! transfer finding, so the user is asked to fix the group's shape before
//! anything layered on top of it.

use serde::Serialize;
use std::collections::BTreeMap;

use mhr_core::{GroupId, TransferType};
use mhr_registry::Snapshot;

use crate::allocation::{self, AllocationOutcome};
use crate::roles::{self, RoleMixtureFinding};
use crate::structural::{self, StructuralFinding};
use crate::transfer::{self, TransferFinding};

/// The complete validation verdict for one snapshot.
///
/// Recomputed from scratch on every evaluation; findings are data, never
/// errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationState {
    /// Structurally invalid groups.
    pub structural: BTreeMap<GroupId, StructuralFinding>,
    /// Whether the snapshot retains at least one surviving owner.
    pub at_least_one_owner: bool,
    /// Fractional-interest allocation verdict.
    pub allocation: AllocationOutcome,
    /// Illegal role mixtures, keyed by group.
    pub role_mixture: BTreeMap<GroupId, RoleMixtureFinding>,
    /// Transfer-legality findings for the active transfer type; empty
    /// when no transfer is in progress.
    pub transfer: Vec<TransferFinding>,
}

impl ValidationState {
    /// Whether the snapshot is submittable as it stands.
    pub fn is_valid(&self) -> bool {
        self.structural.is_empty()
            && self.at_least_one_owner
            && self.allocation.is_acceptable()
            && self.role_mixture.is_empty()
            && self.transfer.is_empty()
    }
}

/// Run every validator and compose the verdict.
///
/// Transfer rules run only when both a baseline and an active transfer
/// type are present; new registrations have neither.
pub fn aggregate(
    current: &Snapshot,
    previous: Option<&Snapshot>,
    transfer_type: Option<TransferType>,
) -> ValidationState {
    let structural_outcome = structural::check(current);

    let mut role_mixture = roles::check(current);
    role_mixture.retain(|group, _| !structural_outcome.groups.contains_key(group));

    let mut transfer_findings = match (previous, transfer_type) {
        (Some(previous), Some(transfer)) => transfer::evaluate(current, previous, transfer),
        _ => Vec::new(),
    };
    transfer_findings.retain(|finding| match finding.group() {
        Some(group) => !structural_outcome.groups.contains_key(&group),
        None => true,
    });

    ValidationState {
        structural: structural_outcome.groups,
        at_least_one_owner: structural_outcome.at_least_one_owner,
        allocation: allocation::evaluate(current),
        role_mixture,
        transfer: transfer_findings,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use mhr_core::{ActionTag, Fraction, OwnerId, PartyType, SupportingDocument};
    use mhr_registry::{NewOwner, OwnerPatch};

    fn valid_snapshot() -> Snapshot {
        let mut snap = Snapshot::new(false);
        let gid = snap.add_group(None, None);
        snap.add_owner(NewOwner::individual("MARY", "HOLT", PartyType::Owner), gid, None)
            .unwrap();
        snap
    }

    #[test]
    fn test_clean_snapshot_is_valid() {
        let state = aggregate(&valid_snapshot(), None, None);
        assert!(state.is_valid());
        assert!(state.transfer.is_empty());
    }

    #[test]
    fn test_empty_snapshot_fails_owner_requirement() {
        let state = aggregate(&Snapshot::new(false), None, None);
        assert!(!state.at_least_one_owner);
        assert!(!state.is_valid());
    }

    #[test]
    fn test_transfer_rules_need_baseline_and_type() {
        // Identical snapshots would flag OwnershipChangeRequired, but no
        // transfer type is active.
        let snap = valid_snapshot();
        let state = aggregate(&snap, Some(&snap), None);
        assert!(state.transfer.is_empty());
        assert!(state.is_valid());
    }

    #[test]
    fn test_structural_finding_suppresses_role_mixture() {
        // Two representative roles, both removed: the group is both
        // structurally empty and role-mixed. Only the structural finding
        // survives aggregation.
        let mut snap = Snapshot::new(false);
        let gid = snap.add_group(None, None);
        snap.add_owner(
            NewOwner::individual("E", "X", PartyType::Executor),
            gid,
            None,
        )
        .unwrap();
        snap.add_owner(
            NewOwner::individual("A", "D", PartyType::Administrator),
            gid,
            None,
        )
        .unwrap();
        snap.mark_owner_removed(OwnerId(1)).unwrap();
        snap.mark_owner_removed(OwnerId(2)).unwrap();

        let state = aggregate(&snap, None, None);
        assert_eq!(
            state.structural.get(&gid),
            Some(&StructuralFinding::GroupMustContainAtLeastOneOwner)
        );
        assert!(state.role_mixture.is_empty());
    }

    #[test]
    fn test_structural_finding_suppresses_group_scoped_transfer_finding() {
        let previous = valid_snapshot();
        let mut current = previous.clone();
        current.mark_owner_removed(OwnerId(1)).unwrap();
        current
            .update_owner(
                OwnerId(1),
                OwnerPatch::SupportingDocument(Some(SupportingDocument::GrantOfProbate)),
            )
            .unwrap();

        let state = aggregate(
            &current,
            Some(&previous),
            Some(TransferType::ToExecutorProbateWill),
        );
        // The missing-executor finding is scoped to a structurally empty
        // group and is suppressed; the structural finding stands in.
        assert!(state.transfer.is_empty());
        assert_eq!(state.structural.len(), 1);
        assert!(!state.is_valid());
    }

    #[test]
    fn test_snapshot_scoped_transfer_findings_are_not_suppressed() {
        let previous = valid_snapshot();
        let current = previous.clone();
        let state = aggregate(&current, Some(&previous), Some(TransferType::SaleOrGift));
        assert_eq!(state.transfer, vec![TransferFinding::OwnershipChangeRequired]);
        assert!(!state.is_valid());
    }

    #[test]
    fn test_allocation_blocks_validity() {
        let mut snap = Snapshot::new(true);
        let g1 = snap.add_group(Some(Fraction::new(1, 4).unwrap()), None);
        let g2 = snap.add_group(Some(Fraction::new(1, 4).unwrap()), None);
        snap.add_owner(NewOwner::individual("A", "B", PartyType::Owner), g1, None)
            .unwrap();
        snap.add_owner(NewOwner::individual("C", "D", PartyType::Owner), g2, None)
            .unwrap();

        let state = aggregate(&snap, None, None);
        assert!(!state.allocation.is_acceptable());
        assert!(!state.is_valid());
    }

    #[test]
    fn test_complete_transfer_scenario_is_valid() {
        let previous = valid_snapshot();
        let mut current = previous.clone();
        current.mark_owner_removed(OwnerId(1)).unwrap();
        current
            .update_owner(
                OwnerId(1),
                OwnerPatch::SupportingDocument(Some(SupportingDocument::GrantOfProbate)),
            )
            .unwrap();
        current
            .add_owner(
                NewOwner::individual("EDNA", "HOLT", PartyType::Executor),
                mhr_core::GroupId(1),
                Some(ActionTag::Added),
            )
            .unwrap();

        let state = aggregate(
            &current,
            Some(&previous),
            Some(TransferType::ToExecutorProbateWill),
        );
        assert!(state.is_valid(), "unexpected findings: {state:?}");
    }

    #[test]
    fn test_state_serializes_camel_case() {
        let state = aggregate(&valid_snapshot(), None, None);
        let json = serde_json::to_value(&state).unwrap();
        assert!(json.get("atLeastOneOwner").is_some());
        assert!(json.get("roleMixture").is_some());
    }
}
