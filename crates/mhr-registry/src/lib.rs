//! # mhr-registry — Owner Registry and Change Tracker
//!
//! The canonical in-memory representation of owners and ownership groups,
//! plus the change-tracking logic that diffs the current editable snapshot
//! against the pre-transfer baseline.
//!
//! ## Modules
//!
//! - **Owner** (`owner.rs`): owner records, the individual/organization
//!   kind split, and the tagged-variant `OwnerPatch` mutation type.
//!
//! - **Group** (`group.rs`): ownership group records carrying an optional
//!   fractional interest, and `GroupPatch`.
//!
//! - **Snapshot** (`snapshot.rs`): the editable state — owners, groups,
//!   and the group-display flag — with all mutation and lookup
//!   operations. Mutations are confined to the snapshot; there is no
//!   external I/O.
//!
//! - **Changes** (`changes.rs`): derives owner and group action tags
//!   from the diff against the previous snapshot, reverses pending
//!   removals, and summarizes the diff for audit badges and submission
//!   shaping.
//!
//! ## Design
//!
//! All mutation is through named operations on `Snapshot` — there is no
//! dynamic keyed field access. Every patch is a variant of a closed sum
//! type handled by exhaustive `match`, so adding a patchable field forces
//! every consumer to handle it at compile time.
//!
//! Validation never happens here. The registry stores and looks up;
//! unknown ids are caller faults (`RegistryError`), and everything else
//! is reported by the validators in `mhr-validate` as findings, not
//! errors.

pub mod changes;
pub mod group;
pub mod owner;
pub mod snapshot;

// ─── Owner re-exports ───────────────────────────────────────────────

pub use owner::{NewOwner, OrganizationName, Owner, OwnerKind, OwnerPatch, PersonName};

// ─── Group re-exports ───────────────────────────────────────────────

pub use group::{GroupPatch, OwnershipGroup};

// ─── Snapshot re-exports ────────────────────────────────────────────

pub use snapshot::{RegistryError, Snapshot};

// ─── Change tracking re-exports ─────────────────────────────────────

pub use changes::{refresh_actions, summarize, undo_owner_removal, ChangeSummary};
