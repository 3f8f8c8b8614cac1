//! # Change Tracking
//!
//! Maintains the added/removed/changed tags that make the diff between
//! the previous (pre-transfer) snapshot and the current editable snapshot
//! auditable and submittable.
//!
//! `Removed` is the only tag set at mutation time (removal intent cannot
//! be derived); everything else — owner `Added`/`Changed` and all group
//! tags — is recomputed here against the previous snapshot after every
//! mutation rather than maintained incrementally. Editing a record and
//! then editing it back therefore clears its `Changed` tag.
//!
//! For new registrations there is no previous snapshot: all tags stay
//! absent and deletion is physical, so nothing in this module applies.

use std::collections::BTreeSet;

use mhr_core::{ActionTag, GroupId, OwnerId};

use crate::owner::Owner;
use crate::snapshot::{RegistryError, Snapshot};

// ─── Action derivation ───────────────────────────────────────────────

/// Recompute every owner's and group's action tag against the previous
/// snapshot.
///
/// Owner tags:
/// - `Removed` — preserved as set by the registry's removal operation.
/// - `Added` — the owner did not exist in the previous snapshot.
/// - `Changed` — a substantive field differs from the previous record.
/// - none — the owner is untouched.
///
/// Group tags:
/// - `Added` — the group did not exist in the previous snapshot.
/// - `Removed` — every owner the group holds is removed and none was
///   added to it.
/// - `Changed` — the interest or the membership differs from the
///   previous snapshot without the group being fully emptied.
/// - none — the group is untouched.
pub fn refresh_actions(current: &mut Snapshot, previous: &Snapshot) {
    let owner_actions: Vec<(OwnerId, Option<ActionTag>)> = current
        .owners()
        .iter()
        .map(|o| (o.id, derive_owner_action(previous, o)))
        .collect();
    for (id, action) in owner_actions {
        if let Ok(owner) = current.owner_record_mut(id) {
            owner.action = action;
        }
    }

    let derived: Vec<(GroupId, Option<ActionTag>)> = current
        .groups()
        .iter()
        .map(|g| (g.id, derive_group_action(current, previous, g)))
        .collect();
    for (id, action) in derived {
        if let Some(group) = current.groups_mut().iter_mut().find(|g| g.id == id) {
            group.action = action;
        }
    }
}

fn derive_owner_action(previous: &Snapshot, owner: &Owner) -> Option<ActionTag> {
    if owner.is_removed() {
        return Some(ActionTag::Removed);
    }
    match previous.owner(owner.id) {
        Err(_) => Some(ActionTag::Added),
        Ok(prev) if !owner.same_fields(prev) => Some(ActionTag::Changed),
        Ok(_) => None,
    }
}

fn derive_group_action(
    current: &Snapshot,
    previous: &Snapshot,
    group: &crate::group::OwnershipGroup,
) -> Option<ActionTag> {
    let prev_group = match previous.group(group.id) {
        Ok(g) => g,
        Err(_) => return Some(ActionTag::Added),
    };

    let members: Vec<_> = current.owners_in_group(group.id).collect();
    let any_added = members.iter().any(|o| o.is_added());
    let all_removed = !members.is_empty() && members.iter().all(|o| o.is_removed());
    if all_removed && !any_added {
        return Some(ActionTag::Removed);
    }

    let interest_changed = group.interest != prev_group.interest;

    let member_ids: BTreeSet<OwnerId> = members.iter().map(|o| o.id).collect();
    let prev_member_ids: BTreeSet<OwnerId> =
        previous.owners_in_group(group.id).map(|o| o.id).collect();
    let membership_changed =
        member_ids != prev_member_ids || members.iter().any(|o| o.action.is_some());

    if interest_changed || membership_changed {
        Some(ActionTag::Changed)
    } else {
        None
    }
}

// ─── Undo ────────────────────────────────────────────────────────────

/// Reverse a pending owner removal.
///
/// The action reverts to none, or to `Changed` when other fields were
/// altered relative to the previous record, and the supporting-document
/// selection attached to the removal is cleared. Undoing an owner that is
/// not pending removal is a no-op, so repeated undo is idempotent.
pub fn undo_owner_removal(
    current: &mut Snapshot,
    previous: &Snapshot,
    id: OwnerId,
) -> Result<(), RegistryError> {
    let restored_action = {
        let owner = current.owner(id)?;
        if !owner.is_removed() {
            return Ok(());
        }
        match previous.owner(id) {
            Ok(prev) if owner.same_fields(prev) => None,
            // Altered relative to baseline, or introduced then removed in
            // the same transaction.
            Ok(_) => Some(ActionTag::Changed),
            Err(_) => Some(ActionTag::Added),
        }
    };
    let owner = current.owner_record_mut(id)?;
    owner.action = restored_action;
    owner.supporting_document = None;
    Ok(())
}

// ─── Audit summary ───────────────────────────────────────────────────

/// Itemized diff between the previous and current snapshots, for audit
/// badge display and submission shaping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSummary {
    /// Owners introduced by this transaction.
    pub owners_added: Vec<OwnerId>,
    /// Owners pending removal.
    pub owners_removed: Vec<OwnerId>,
    /// Owners with altered fields.
    pub owners_changed: Vec<OwnerId>,
    /// Groups introduced by this transaction.
    pub groups_added: Vec<GroupId>,
    /// Groups pending removal.
    pub groups_removed: Vec<GroupId>,
    /// Groups with altered interest or membership.
    pub groups_changed: Vec<GroupId>,
}

impl ChangeSummary {
    /// Whether the transaction contains no ownership change at all.
    pub fn is_unchanged(&self) -> bool {
        self.owners_added.is_empty()
            && self.owners_removed.is_empty()
            && self.owners_changed.is_empty()
            && self.groups_added.is_empty()
            && self.groups_removed.is_empty()
            && self.groups_changed.is_empty()
    }
}

/// Summarize the current snapshot's action tags.
pub fn summarize(current: &Snapshot) -> ChangeSummary {
    let mut summary = ChangeSummary::default();
    for owner in current.owners() {
        match owner.action {
            Some(ActionTag::Added) => summary.owners_added.push(owner.id),
            Some(ActionTag::Removed) => summary.owners_removed.push(owner.id),
            Some(ActionTag::Changed) => summary.owners_changed.push(owner.id),
            None => {}
        }
    }
    for group in current.groups() {
        match group.action {
            Some(ActionTag::Added) => summary.groups_added.push(group.id),
            Some(ActionTag::Removed) => summary.groups_removed.push(group.id),
            Some(ActionTag::Changed) => summary.groups_changed.push(group.id),
            None => {}
        }
    }
    summary
}

// ─── Tests ───────────────────────────────────────────────────────────
