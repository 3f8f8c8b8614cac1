//! # mhr-cli — Ownership Engine Command-Line Interface
//!
//! A thin shell over the validation engine for batch and CI use: load a
//! snapshot (and optionally a transfer baseline), run the validators,
//! and report the verdict.
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to the domain crates — no rules live here.
//! - The `--json` output is the serialized `ValidationState`, stable for
//!   machine consumption.

pub mod validate;
