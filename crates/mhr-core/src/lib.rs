//! # mhr-core — Foundational Types for the MHR Ownership Engine
//!
//! This crate is the bedrock of the ownership engine workspace. It defines
//! the type-system primitives shared by the registry and the validators.
//! Every other crate in the workspace depends on `mhr-core`; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain identifiers.** `OwnerId`, `GroupId`,
//!    `TransactionId` — no bare integers across API seams, so an owner id
//!    cannot be passed where a group id is expected.
//!
//! 2. **Single definition per wire enumeration.** `PartyType`, `ActionTag`,
//!    `TransferType`, `SupportingDocument`, and `TenancyType` each have one
//!    definition with exhaustive `match` everywhere. Adding a transfer type
//!    forces every consumer to handle it at compile time.
//!
//! 3. **Exact rational arithmetic.** Fractional interests are compared by
//!    u128 cross-multiplication, never floating point. `1/4 + 1/4 + 1/2`
//!    equals `1` exactly or the allocation is wrong.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `mhr-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize` where they appear on the wire.

pub mod domain;
pub mod fraction;
pub mod identity;

// Re-export primary types for ergonomic imports.
pub use domain::{
    ActionTag, PartyType, SupportingDocument, TenancyType, TransferType, UnknownVariant,
};
pub use fraction::{Fraction, FractionError};
pub use identity::{GroupId, OwnerId, TransactionId};
