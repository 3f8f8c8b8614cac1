//! # Ownership Engine
//!
//! `OwnershipEngine` is the stateful facade the host UI drives: it owns
//! the current editable snapshot, the optional pre-transfer baseline, the
//! active transfer type, and the transaction id, and it exposes the full
//! mutation and read contract.
//!
//! ## Removal semantics
//!
//! Whether removing an owner deletes the record or marks it pending
//! removal is decided here, not by the caller: records present in the
//! baseline are marked (the diff must stay auditable), records introduced
//! within this transaction are deleted outright. New registrations have
//! no baseline, so every removal is physical.
//!
//! ## Freezing
//!
//! `freeze` seals the snapshot into a submission payload. Every mutation
//! after that fails with `RegistryError::Frozen`; reads remain available.

use tracing::debug;

use mhr_core::{ActionTag, Fraction, GroupId, OwnerId, TenancyType, TransactionId, TransferType};
use mhr_registry::{
    refresh_actions, summarize, undo_owner_removal, ChangeSummary, GroupPatch, NewOwner,
    OwnerPatch, RegistryError, Snapshot,
};

use crate::allocation::{self, AllocationOutcome};
use crate::tenancy;
use crate::validation::{self, ValidationState};

/// The stateful validation facade for one ownership transaction.
#[derive(Debug, Clone)]
pub struct OwnershipEngine {
    transaction_id: TransactionId,
    current: Snapshot,
    previous: Option<Snapshot>,
    transfer_type: Option<TransferType>,
    frozen: bool,
}

impl OwnershipEngine {
    /// Start a new-registration transaction over an empty snapshot.
    pub fn new(group_display: bool) -> Self {
        Self {
            transaction_id: TransactionId::new(),
            current: Snapshot::new(group_display),
            previous: None,
            transfer_type: None,
            frozen: false,
        }
    }

    /// Start a registration transaction over a backend-seeded snapshot.
    ///
    /// Unlike `load_snapshot` there is no baseline to diff against:
    /// records never carry action tags and removal is physical, exactly
    /// as with `new`.
    pub fn from_snapshot(current: Snapshot) -> Self {
        let engine = Self {
            transaction_id: TransactionId::new(),
            current,
            previous: None,
            transfer_type: None,
            frozen: false,
        };
        debug!(transaction = %engine.transaction_id, "loaded registration snapshot");
        engine
    }

    /// Start a transfer transaction over a backend-seeded baseline.
    ///
    /// The baseline is retained for change tracking; the editable copy
    /// starts identical to it.
    pub fn load_snapshot(baseline: Snapshot) -> Self {
        let engine = Self {
            transaction_id: TransactionId::new(),
            current: baseline.clone(),
            previous: Some(baseline),
            transfer_type: None,
            frozen: false,
        };
        debug!(transaction = %engine.transaction_id, "loaded transfer baseline");
        engine
    }

    // ── Transaction configuration ────────────────────────────────────

    /// Select (or clear) the active transfer type.
    ///
    /// Supporting-document selections belong to the transfer type they
    /// were made under, so switching wipes all of them.
    pub fn set_transfer_type(
        &mut self,
        transfer: Option<TransferType>,
    ) -> Result<(), RegistryError> {
        self.check_mutable()?;
        if self.transfer_type == transfer {
            return Ok(());
        }
        let ids: Vec<OwnerId> = self.current.owners().iter().map(|o| o.id).collect();
        for id in ids {
            self.current
                .update_owner(id, OwnerPatch::SupportingDocument(None))?;
        }
        debug!(transaction = %self.transaction_id, ?transfer, "transfer type changed; document selections cleared");
        self.transfer_type = transfer;
        Ok(())
    }

    /// Enable or disable grouped (tenants-in-common) display mode.
    pub fn set_group_display_enabled(&mut self, enabled: bool) -> Result<(), RegistryError> {
        self.check_mutable()?;
        self.current.set_group_display(enabled);
        Ok(())
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Add a group; tagged `Added` within a transfer.
    pub fn add_group(&mut self, interest: Option<Fraction>) -> Result<GroupId, RegistryError> {
        self.check_mutable()?;
        let action = self.previous.is_some().then_some(ActionTag::Added);
        let id = self.current.add_group(interest, action);
        self.refresh();
        Ok(id)
    }

    /// Add an owner to a group; tagged `Added` within a transfer.
    pub fn add_owner(
        &mut self,
        new: NewOwner,
        group_id: GroupId,
    ) -> Result<OwnerId, RegistryError> {
        self.check_mutable()?;
        let action = self.previous.is_some().then_some(ActionTag::Added);
        let id = self.current.add_owner(new, group_id, action)?;
        self.refresh();
        debug!(transaction = %self.transaction_id, owner = %id, group = %group_id, "owner added");
        Ok(id)
    }

    /// Remove an owner.
    ///
    /// Baseline owners are marked pending removal; owners introduced by
    /// this transaction are deleted outright.
    pub fn remove_owner(&mut self, id: OwnerId) -> Result<(), RegistryError> {
        self.check_mutable()?;
        match &self.previous {
            Some(previous) if previous.owner(id).is_ok() => {
                self.current.mark_owner_removed(id)?;
            }
            _ => self.current.delete_owner(id)?,
        }
        self.refresh();
        debug!(transaction = %self.transaction_id, owner = %id, "owner removed");
        Ok(())
    }

    /// Reverse a pending owner removal. A no-op outside a transfer, and
    /// for owners not pending removal.
    pub fn undo_remove_owner(&mut self, id: OwnerId) -> Result<(), RegistryError> {
        self.check_mutable()?;
        let Some(previous) = &self.previous else {
            return Ok(());
        };
        undo_owner_removal(&mut self.current, previous, id)?;
        self.refresh();
        Ok(())
    }

    /// Apply a patch to an owner.
    pub fn update_owner(&mut self, id: OwnerId, patch: OwnerPatch) -> Result<(), RegistryError> {
        self.check_mutable()?;
        self.current.update_owner(id, patch)?;
        self.refresh();
        Ok(())
    }

    /// Apply a patch to a group.
    pub fn update_group(&mut self, id: GroupId, patch: GroupPatch) -> Result<(), RegistryError> {
        self.check_mutable()?;
        self.current.update_group(id, patch)?;
        self.refresh();
        Ok(())
    }

    /// Remove a group and all of its owners, with the same
    /// mark-versus-delete split as owner removal.
    pub fn remove_group(&mut self, id: GroupId) -> Result<(), RegistryError> {
        self.check_mutable()?;
        match &self.previous {
            Some(previous) if previous.group(id).is_ok() => {
                self.current.mark_group_removed(id)?;
            }
            _ => self.current.delete_group(id)?,
        }
        self.refresh();
        debug!(transaction = %self.transaction_id, group = %id, "group removed");
        Ok(())
    }

    /// Seal the snapshot into a submission payload. Further mutation
    /// fails with `RegistryError::Frozen`.
    pub fn freeze(&mut self) -> &Snapshot {
        self.frozen = true;
        debug!(transaction = %self.transaction_id, "snapshot frozen");
        &self.current
    }

    // ── Reads ────────────────────────────────────────────────────────

    /// The complete validation verdict for the current snapshot.
    pub fn validation_state(&self) -> ValidationState {
        validation::aggregate(&self.current, self.previous.as_ref(), self.transfer_type)
    }

    /// The current tenancy display label.
    pub fn tenancy(&self) -> TenancyType {
        tenancy::classify_snapshot(&self.current)
    }

    /// The current fractional-interest allocation verdict.
    pub fn allocation_status(&self) -> AllocationOutcome {
        allocation::evaluate(&self.current)
    }

    /// The itemized diff against the baseline.
    pub fn change_summary(&self) -> ChangeSummary {
        summarize(&self.current)
    }

    /// The current editable snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.current
    }

    /// The pre-transfer baseline, if this is a transfer transaction.
    pub fn previous(&self) -> Option<&Snapshot> {
        self.previous.as_ref()
    }

    /// This transaction's id.
    pub fn transaction_id(&self) -> TransactionId {
        self.transaction_id
    }

    /// The active transfer type.
    pub fn transfer_type(&self) -> Option<TransferType> {
        self.transfer_type
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn check_mutable(&self) -> Result<(), RegistryError> {
        if self.frozen {
            return Err(RegistryError::Frozen);
        }
        Ok(())
    }

    /// Action tags are derived, not maintained; recompute after every
    /// mutation of a transfer transaction. Registrations have no baseline
    /// to diff against, so their records never carry tags.
    fn refresh(&mut self) {
        if let Some(previous) = &self.previous {
            refresh_actions(&mut self.current, previous);
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::AllocationStatus;
    use crate::transfer::TransferFinding;
    use mhr_core::{PartyType, SupportingDocument};

    fn seeded_baseline() -> Snapshot {
        let mut snap = Snapshot::new(false);
        let gid = snap.add_group(Some(Fraction::ONE), None);
        snap.add_owner(NewOwner::individual("MARY", "HOLT", PartyType::Owner), gid, None)
            .unwrap();
        snap
    }

    // ── Registration semantics ───────────────────────────────────────

    #[test]
    fn test_registration_has_no_action_tags() {
        let mut engine = OwnershipEngine::new(false);
        let gid = engine.add_group(None).unwrap();
        let oid = engine
            .add_owner(NewOwner::individual("A", "B", PartyType::Owner), gid)
            .unwrap();
        assert_eq!(engine.snapshot().owner(oid).unwrap().action, None);
        assert_eq!(engine.snapshot().group(gid).unwrap().action, None);
        assert!(engine.change_summary().is_unchanged());
    }

    #[test]
    fn test_registration_removal_is_physical() {
        let mut engine = OwnershipEngine::new(false);
        let gid = engine.add_group(None).unwrap();
        let oid = engine
            .add_owner(NewOwner::individual("A", "B", PartyType::Owner), gid)
            .unwrap();
        engine.remove_owner(oid).unwrap();
        assert!(engine.snapshot().owners().is_empty());
    }

    #[test]
    fn test_registration_edit_leaves_owner_untagged() {
        let mut engine = OwnershipEngine::new(false);
        let gid = engine.add_group(None).unwrap();
        let oid = engine
            .add_owner(NewOwner::individual("A", "B", PartyType::Owner), gid)
            .unwrap();
        engine
            .update_owner(oid, OwnerPatch::Suffix(Some("JR".to_string())))
            .unwrap();
        assert_eq!(engine.snapshot().owner(oid).unwrap().action, None);
    }

    #[test]
    fn test_registration_edit_leaves_group_untagged() {
        let mut engine = OwnershipEngine::new(true);
        let gid = engine.add_group(None).unwrap();
        engine
            .add_owner(NewOwner::individual("A", "B", PartyType::Owner), gid)
            .unwrap();
        engine
            .update_group(gid, GroupPatch::Interest(Some(Fraction::new(1, 2).unwrap())))
            .unwrap();
        assert_eq!(engine.snapshot().group(gid).unwrap().action, None);
    }

    #[test]
    fn test_seeded_registration_behaves_like_new() {
        let mut engine = OwnershipEngine::from_snapshot(seeded_baseline());
        assert!(engine.previous().is_none());

        engine
            .update_owner(OwnerId(1), OwnerPatch::Suffix(Some("SR".to_string())))
            .unwrap();
        assert_eq!(engine.snapshot().owner(OwnerId(1)).unwrap().action, None);
        assert!(engine.change_summary().is_unchanged());

        // No baseline, so removal is physical.
        engine.remove_owner(OwnerId(1)).unwrap();
        assert!(engine.snapshot().owner(OwnerId(1)).is_err());
    }

    // ── Transfer semantics ───────────────────────────────────────────

    #[test]
    fn test_transfer_mutations_carry_action_tags() {
        let mut engine = OwnershipEngine::load_snapshot(seeded_baseline());
        let oid = engine
            .add_owner(
                NewOwner::individual("EDNA", "HOLT", PartyType::Owner),
                GroupId(1),
            )
            .unwrap();
        assert_eq!(
            engine.snapshot().owner(oid).unwrap().action,
            Some(ActionTag::Added)
        );
        // Group tag is derived from membership change.
        assert_eq!(
            engine.snapshot().group(GroupId(1)).unwrap().action,
            Some(ActionTag::Changed)
        );
    }

    #[test]
    fn test_transfer_edit_derives_changed_and_revert_clears_it() {
        let mut engine = OwnershipEngine::load_snapshot(seeded_baseline());
        engine
            .update_owner(OwnerId(1), OwnerPatch::Suffix(Some("JR".to_string())))
            .unwrap();
        assert_eq!(
            engine.snapshot().owner(OwnerId(1)).unwrap().action,
            Some(ActionTag::Changed)
        );

        engine
            .update_owner(OwnerId(1), OwnerPatch::Suffix(None))
            .unwrap();
        assert_eq!(engine.snapshot().owner(OwnerId(1)).unwrap().action, None);
        assert!(engine.change_summary().is_unchanged());
    }

    #[test]
    fn test_transfer_removal_of_baseline_owner_marks() {
        let mut engine = OwnershipEngine::load_snapshot(seeded_baseline());
        engine.remove_owner(OwnerId(1)).unwrap();
        assert!(engine.snapshot().owner(OwnerId(1)).unwrap().is_removed());
    }

    #[test]
    fn test_transfer_removal_of_added_owner_deletes() {
        let mut engine = OwnershipEngine::load_snapshot(seeded_baseline());
        let oid = engine
            .add_owner(
                NewOwner::individual("EDNA", "HOLT", PartyType::Owner),
                GroupId(1),
            )
            .unwrap();
        engine.remove_owner(oid).unwrap();
        assert!(engine.snapshot().owner(oid).is_err());
    }

    #[test]
    fn test_undo_remove_round_trips_to_baseline() {
        let mut engine = OwnershipEngine::load_snapshot(seeded_baseline());
        engine.remove_owner(OwnerId(1)).unwrap();
        engine
            .update_owner(
                OwnerId(1),
                OwnerPatch::SupportingDocument(Some(SupportingDocument::DeathCertificate)),
            )
            .unwrap();
        engine.undo_remove_owner(OwnerId(1)).unwrap();

        assert_eq!(engine.snapshot(), engine.previous().unwrap());
        assert!(engine.change_summary().is_unchanged());
    }

    #[test]
    fn test_undo_remove_outside_transfer_is_noop() {
        let mut engine = OwnershipEngine::new(false);
        let gid = engine.add_group(None).unwrap();
        let oid = engine
            .add_owner(NewOwner::individual("A", "B", PartyType::Owner), gid)
            .unwrap();
        engine.undo_remove_owner(oid).unwrap();
        assert_eq!(engine.snapshot().owner(oid).unwrap().action, None);
    }

    #[test]
    fn test_switching_transfer_type_clears_document_selections() {
        let mut engine = OwnershipEngine::load_snapshot(seeded_baseline());
        engine
            .set_transfer_type(Some(TransferType::ToExecutorProbateWill))
            .unwrap();
        engine.remove_owner(OwnerId(1)).unwrap();
        engine
            .update_owner(
                OwnerId(1),
                OwnerPatch::SupportingDocument(Some(SupportingDocument::GrantOfProbate)),
            )
            .unwrap();

        engine
            .set_transfer_type(Some(TransferType::ToAdminNoWill))
            .unwrap();
        assert_eq!(
            engine.snapshot().owner(OwnerId(1)).unwrap().supporting_document,
            None
        );
        // The removal itself is preserved.
        assert!(engine.snapshot().owner(OwnerId(1)).unwrap().is_removed());
    }

    #[test]
    fn test_reselecting_same_transfer_type_keeps_selections() {
        let mut engine = OwnershipEngine::load_snapshot(seeded_baseline());
        engine
            .set_transfer_type(Some(TransferType::ToExecutorProbateWill))
            .unwrap();
        engine.remove_owner(OwnerId(1)).unwrap();
        engine
            .update_owner(
                OwnerId(1),
                OwnerPatch::SupportingDocument(Some(SupportingDocument::GrantOfProbate)),
            )
            .unwrap();
        engine
            .set_transfer_type(Some(TransferType::ToExecutorProbateWill))
            .unwrap();
        assert_eq!(
            engine.snapshot().owner(OwnerId(1)).unwrap().supporting_document,
            Some(SupportingDocument::GrantOfProbate)
        );
    }

    // ── Freeze ───────────────────────────────────────────────────────

    #[test]
    fn test_frozen_engine_rejects_mutation_but_allows_reads() {
        let mut engine = OwnershipEngine::load_snapshot(seeded_baseline());
        engine.freeze();
        assert_eq!(
            engine.remove_owner(OwnerId(1)).unwrap_err(),
            RegistryError::Frozen
        );
        assert_eq!(
            engine.set_transfer_type(Some(TransferType::SaleOrGift)).unwrap_err(),
            RegistryError::Frozen
        );
        // Reads still work.
        assert_eq!(engine.tenancy(), TenancyType::Sole);
        assert!(engine.validation_state().is_valid());
    }

    // ── Full-flow reads ──────────────────────────────────────────────

    #[test]
    fn test_executor_transfer_flow_validates_end_to_end() {
        let mut engine = OwnershipEngine::load_snapshot(seeded_baseline());
        engine
            .set_transfer_type(Some(TransferType::ToExecutorProbateWill))
            .unwrap();
        engine.remove_owner(OwnerId(1)).unwrap();

        // Incomplete: document and executor both missing.
        let state = engine.validation_state();
        assert!(state
            .transfer
            .contains(&TransferFinding::SupportingDocumentRequired { owner: OwnerId(1) }));

        engine
            .update_owner(
                OwnerId(1),
                OwnerPatch::SupportingDocument(Some(SupportingDocument::GrantOfProbate)),
            )
            .unwrap();
        engine
            .add_owner(
                NewOwner::individual("EDNA", "HOLT", PartyType::Executor),
                GroupId(1),
            )
            .unwrap();

        let state = engine.validation_state();
        assert!(state.is_valid(), "unexpected findings: {state:?}");
        assert_eq!(engine.tenancy(), TenancyType::Sole);

        let summary = engine.change_summary();
        assert_eq!(summary.owners_removed, vec![OwnerId(1)]);
        assert_eq!(summary.owners_added, vec![OwnerId(2)]);
    }

    #[test]
    fn test_grouped_allocation_reads() {
        let mut engine = OwnershipEngine::new(true);
        let g1 = engine.add_group(Some(Fraction::new(1, 4).unwrap())).unwrap();
        let g2 = engine.add_group(Some(Fraction::new(3, 4).unwrap())).unwrap();
        engine
            .add_owner(NewOwner::individual("A", "B", PartyType::Owner), g1)
            .unwrap();
        engine
            .add_owner(NewOwner::individual("C", "D", PartyType::Owner), g2)
            .unwrap();

        assert_eq!(
            engine.allocation_status().status,
            AllocationStatus::FullyAllocated
        );
        assert_eq!(engine.tenancy(), TenancyType::Common);
        assert!(engine.validation_state().is_valid());
    }

    #[test]
    fn test_transaction_ids_are_unique() {
        let a = OwnershipEngine::new(false);
        let b = OwnershipEngine::new(false);
        assert_ne!(a.transaction_id(), b.transaction_id());
    }
}
