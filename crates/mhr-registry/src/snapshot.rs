//! # Snapshot — The Editable Ownership State
//!
//! The snapshot is the current editable set of owners and groups plus the
//! group-display flag. It is the only mutable state in the engine: the
//! registry owns it exclusively, every mutation is applied atomically
//! through a named operation here, and all validators treat it as
//! read-only input.
//!
//! Two removal semantics coexist, chosen by the caller per host flow:
//!
//! - `delete_owner` / `delete_group` physically remove the record — new
//!   registrations have no baseline to diff against.
//! - `mark_owner_removed` / `mark_group_removed` keep the record with
//!   `action = REMOVED` — transfers retain removed records so audit
//!   badges and supporting-document requirements stay attached.
//!
//! Unknown ids are caller faults and fail with `RegistryError` at the
//! call site; they are never validation findings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use mhr_core::{ActionTag, Fraction, GroupId, OwnerId};

use crate::group::{GroupPatch, OwnershipGroup};
use crate::owner::{NewOwner, Owner, OwnerPatch};

// ─── Errors ──────────────────────────────────────────────────────────

/// Caller faults raised by registry operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// No owner with the given id exists in the snapshot.
    #[error("owner not found: {0}")]
    OwnerNotFound(OwnerId),

    /// No group with the given id exists in the snapshot.
    #[error("group not found: {0}")]
    GroupNotFound(GroupId),

    /// The snapshot has been frozen into a submission payload and can no
    /// longer be mutated.
    #[error("snapshot is frozen; mutation is not permitted")]
    Frozen,
}

// ─── Snapshot ────────────────────────────────────────────────────────

/// The current editable ownership state.
///
/// Owners and groups are kept in insertion order — ordering is relevant
/// only for display; validation never depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    owners: Vec<Owner>,
    groups: Vec<OwnershipGroup>,
    #[serde(default)]
    group_display: bool,
}

impl Snapshot {
    /// Create an empty snapshot.
    pub fn new(group_display: bool) -> Self {
        Self {
            owners: Vec::new(),
            groups: Vec::new(),
            group_display,
        }
    }

    /// Assemble a snapshot from backend-seeded parts.
    ///
    /// Every owner must reference a group present in `groups`.
    pub fn from_parts(
        owners: Vec<Owner>,
        groups: Vec<OwnershipGroup>,
        group_display: bool,
    ) -> Result<Self, RegistryError> {
        for owner in &owners {
            if !groups.iter().any(|g| g.id == owner.group_id) {
                return Err(RegistryError::GroupNotFound(owner.group_id));
            }
        }
        Ok(Self {
            owners,
            groups,
            group_display,
        })
    }

    // ── Flags ────────────────────────────────────────────────────────

    /// Whether grouped (tenants-in-common) display mode is enabled.
    pub fn group_display(&self) -> bool {
        self.group_display
    }

    /// Enable or disable grouped display mode.
    pub fn set_group_display(&mut self, enabled: bool) {
        self.group_display = enabled;
    }

    // ── Lookups ──────────────────────────────────────────────────────

    /// All owners in insertion order.
    pub fn owners(&self) -> &[Owner] {
        &self.owners
    }

    /// All groups in insertion order.
    pub fn groups(&self) -> &[OwnershipGroup] {
        &self.groups
    }

    /// The owner with the given id.
    pub fn owner(&self, id: OwnerId) -> Result<&Owner, RegistryError> {
        self.owners
            .iter()
            .find(|o| o.id == id)
            .ok_or(RegistryError::OwnerNotFound(id))
    }

    /// The group with the given id.
    pub fn group(&self, id: GroupId) -> Result<&OwnershipGroup, RegistryError> {
        self.groups
            .iter()
            .find(|g| g.id == id)
            .ok_or(RegistryError::GroupNotFound(id))
    }

    /// Owners belonging to a group, in insertion order.
    pub fn owners_in_group(&self, group_id: GroupId) -> impl Iterator<Item = &Owner> {
        self.owners.iter().filter(move |o| o.group_id == group_id)
    }

    /// Owners not pending removal.
    pub fn surviving_owners(&self) -> impl Iterator<Item = &Owner> {
        self.owners.iter().filter(|o| !o.is_removed())
    }

    /// Groups not pending removal.
    pub fn surviving_groups(&self) -> impl Iterator<Item = &OwnershipGroup> {
        self.groups.iter().filter(|g| !g.is_removed())
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Add a group with an optional declared interest.
    ///
    /// `action` is `Added` during a transfer and absent for new
    /// registrations; the caller supplies it.
    pub fn add_group(&mut self, interest: Option<Fraction>, action: Option<ActionTag>) -> GroupId {
        let id = self.next_group_id();
        self.groups.push(OwnershipGroup {
            id,
            interest,
            action,
        });
        id
    }

    /// Add an owner to an existing group.
    pub fn add_owner(
        &mut self,
        new: NewOwner,
        group_id: GroupId,
        action: Option<ActionTag>,
    ) -> Result<OwnerId, RegistryError> {
        self.group(group_id)?;
        let id = self.next_owner_id();
        self.owners.push(Owner {
            id,
            group_id,
            kind: new.kind,
            party_type: new.party_type,
            suffix: new.suffix,
            action,
            supporting_document: None,
            address: new.address,
            phone: new.phone,
        });
        Ok(id)
    }

    /// Apply a patch to an owner.
    ///
    /// Action tags are not touched here: during a transfer the change
    /// tracker derives `Changed` by diffing against the previous
    /// snapshot, and registration-time records never carry tags at all.
    pub fn update_owner(&mut self, id: OwnerId, patch: OwnerPatch) -> Result<(), RegistryError> {
        let owner = self.owner_mut(id)?;
        patch.apply(owner);
        Ok(())
    }

    /// Apply a patch to a group. As with owners, any `Changed` tag is
    /// derived by the change tracker, not set here.
    pub fn update_group(&mut self, id: GroupId, patch: GroupPatch) -> Result<(), RegistryError> {
        let group = self
            .groups
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(RegistryError::GroupNotFound(id))?;
        patch.apply(group);
        Ok(())
    }

    /// Physically delete an owner (new-registration semantics).
    pub fn delete_owner(&mut self, id: OwnerId) -> Result<(), RegistryError> {
        let pos = self
            .owners
            .iter()
            .position(|o| o.id == id)
            .ok_or(RegistryError::OwnerNotFound(id))?;
        self.owners.remove(pos);
        Ok(())
    }

    /// Mark an owner as pending removal (transfer semantics). The record
    /// is retained so audit badges and document requirements stay
    /// attached. Marking an already-removed owner is a no-op.
    pub fn mark_owner_removed(&mut self, id: OwnerId) -> Result<(), RegistryError> {
        let owner = self.owner_mut(id)?;
        owner.action = Some(ActionTag::Removed);
        Ok(())
    }

    /// Physically delete a group and all of its owners.
    pub fn delete_group(&mut self, id: GroupId) -> Result<(), RegistryError> {
        let pos = self
            .groups
            .iter()
            .position(|g| g.id == id)
            .ok_or(RegistryError::GroupNotFound(id))?;
        self.groups.remove(pos);
        self.owners.retain(|o| o.group_id != id);
        Ok(())
    }

    /// Mark a group and all of its owners as pending removal.
    pub fn mark_group_removed(&mut self, id: GroupId) -> Result<(), RegistryError> {
        let group = self
            .groups
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(RegistryError::GroupNotFound(id))?;
        group.action = Some(ActionTag::Removed);
        for owner in self.owners.iter_mut().filter(|o| o.group_id == id) {
            owner.action = Some(ActionTag::Removed);
        }
        Ok(())
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Mutable group list for the change tracker's tag recomputation.
    pub(crate) fn groups_mut(&mut self) -> &mut [OwnershipGroup] {
        &mut self.groups
    }

    /// Mutable owner access for the change tracker's undo path.
    pub(crate) fn owner_record_mut(&mut self, id: OwnerId) -> Result<&mut Owner, RegistryError> {
        self.owner_mut(id)
    }

    fn owner_mut(&mut self, id: OwnerId) -> Result<&mut Owner, RegistryError> {
        self.owners
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(RegistryError::OwnerNotFound(id))
    }

    /// Monotonic id assignment: one past the largest id ever observed in
    /// the snapshot. Removed-but-retained records still occupy their ids.
    fn next_owner_id(&self) -> OwnerId {
        OwnerId(self.owners.iter().map(|o| o.id.0).max().unwrap_or(0) + 1)
    }

    fn next_group_id(&self) -> GroupId {
        GroupId(self.groups.iter().map(|g| g.id.0).max().unwrap_or(0) + 1)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
