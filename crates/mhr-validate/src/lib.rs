//! # mhr-validate — Ownership Validation Engine
//!
//! The validators that run over an ownership snapshot, and the facade the
//! host UI drives. Each validator is a pure function of the snapshot (and,
//! for transfer rules, the pre-transfer baseline): no hidden state, no
//! memoization, no I/O. Recomputation is total — given the same snapshot,
//! transfer type, and baseline, the output is always identical.
//!
//! ## Modules
//!
//! - **Allocation** (`allocation.rs`): exact fractional-interest sum over
//!   surviving groups and the aggregate allocation status.
//!
//! - **Tenancy** (`tenancy.rs`): the Sole/Joint/Common/NA display label,
//!   a pure function of owner count, group count, and display mode.
//!
//! - **Roles** (`roles.rs`): illegal party-type mixtures within a group.
//!
//! - **Structural** (`structural.rs`): group emptiness and the
//!   at-least-one-owner requirement.
//!
//! - **Transfer** (`transfer.rs`): the per-transfer-type legality rules,
//!   dispatched through a rule-profile lookup table keyed by
//!   `TransferType`.
//!
//! - **Validation** (`validation.rs`): the aggregator composing all of the
//!   above into one `ValidationState`, applying the structural-first
//!   short-circuit.
//!
//! - **Engine** (`engine.rs`): `OwnershipEngine`, the stateful facade
//!   owning the current and previous snapshots and exposing the mutation
//!   and read contract to the host UI.
//!
//! ## Error Policy
//!
//! Everything a user can cause is a *finding*, returned as data inside
//! `ValidationState`. Only caller bugs — unknown ids, mutating a frozen
//! engine — fail with `RegistryError` at the call site.

pub mod allocation;
pub mod engine;
pub mod roles;
pub mod structural;
pub mod tenancy;
pub mod transfer;
pub mod validation;

// ─── Allocation re-exports ──────────────────────────────────────────

pub use allocation::{AllocationOutcome, AllocationStatus};

// ─── Finding re-exports ─────────────────────────────────────────────

pub use roles::RoleMixtureFinding;
pub use structural::{StructuralFinding, StructuralOutcome};
pub use transfer::{TransferFinding, TransferRuleProfile};

// ─── Aggregate re-exports ───────────────────────────────────────────

pub use validation::ValidationState;

// ─── Engine re-exports ──────────────────────────────────────────────

pub use engine::OwnershipEngine;
