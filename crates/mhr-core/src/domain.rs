//! # Registry Wire Enumerations — Single Source of Truth
//!
//! Defines the closed sum types for party types, lifecycle action tags,
//! transfer types, supporting-document selections, and tenancy labels.
//! These are the ONE definition used across the workspace. Every `match`
//! on them must be exhaustive — adding a transfer type forces every
//! consumer to handle it at compile time.
//!
//! The serialized forms reproduce the registry's wire enumerations exactly
//! (`OWNER`, `EXECUTOR`, `ADDED`, `SALE_OR_GIFT`, `SOLE`, …). Submission
//! payloads must round-trip byte-for-byte against the backend's fixed
//! field values, so the serde renames here are a compatibility contract,
//! not a style choice.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing a wire enumeration from a string.
#[derive(Error, Debug)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownVariant {
    /// The enumeration being parsed.
    pub kind: &'static str,
    /// The unrecognized input.
    pub value: String,
}

// ─── Party Type ──────────────────────────────────────────────────────

/// The legal capacity in which an owner holds an interest in the home.
///
/// `Owner` is the basic living-owner capacity; the other three are
/// death- or insolvency-representative roles whose legality depends on
/// the active transfer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartyType {
    /// A living person or organization holding an interest directly.
    Owner,
    /// Executor of a deceased owner's estate (will-based transfers).
    Executor,
    /// Administrator of a deceased owner's estate (no will).
    Administrator,
    /// Trustee (bankruptcy or trust arrangements).
    Trustee,
}

impl PartyType {
    /// Whether this is a death- or insolvency-representative role rather
    /// than a basic owner.
    pub fn is_representative(&self) -> bool {
        !matches!(self, Self::Owner)
    }
}

impl std::fmt::Display for PartyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Owner => "OWNER",
            Self::Executor => "EXECUTOR",
            Self::Administrator => "ADMINISTRATOR",
            Self::Trustee => "TRUSTEE",
        };
        f.write_str(s)
    }
}

impl FromStr for PartyType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OWNER" => Ok(Self::Owner),
            "EXECUTOR" => Ok(Self::Executor),
            "ADMINISTRATOR" => Ok(Self::Administrator),
            "TRUSTEE" => Ok(Self::Trustee),
            other => Err(UnknownVariant {
                kind: "party type",
                value: other.to_string(),
            }),
        }
    }
}

// ─── Action Tag ──────────────────────────────────────────────────────

/// Per-owner/per-group lifecycle marker relative to the previous snapshot.
///
/// Registration-time records with no prior state carry no tag at all
/// (`Option<ActionTag>` is `None` and the field is absent on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionTag {
    /// The record did not exist in the previous snapshot.
    Added,
    /// The record is pending removal; it is retained for audit display
    /// and supporting-document requirements rather than deleted.
    Removed,
    /// The record differs from its previous-snapshot counterpart.
    Changed,
}

impl std::fmt::Display for ActionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Added => "ADDED",
            Self::Removed => "REMOVED",
            Self::Changed => "CHANGED",
        };
        f.write_str(s)
    }
}

// ─── Transfer Type ───────────────────────────────────────────────────

/// The enumerated category of an ownership-transfer transaction.
///
/// Chosen once per transaction; each type carries its own legality
/// predicate set (see `mhr-validate`). Selecting or clearing the type
/// resets transfer-scoped state but not the owner/group edits already
/// made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferType {
    /// Conveyance by sale or gift between living parties.
    SaleOrGift,
    /// Death of a joint tenant; interest passes to the survivor(s).
    SurvivingJointTenant,
    /// Death with a will, estate over the small-estate threshold;
    /// transfer to executor under grant of probate.
    ToExecutorProbateWill,
    /// Death with a will, estate under the small-estate threshold;
    /// transfer to executor under affidavit.
    // rename_all would drop the underscore before "25K".
    #[serde(rename = "TO_EXECUTOR_UNDER_25K_WILL")]
    ToExecutorUnder25kWill,
    /// Death without a will; transfer to administrator under grant of
    /// administration.
    ToAdminNoWill,
    /// Bankruptcy; interest vests in the trustee.
    Bankruptcy,
}

impl std::fmt::Display for TransferType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::SaleOrGift => "SALE_OR_GIFT",
            Self::SurvivingJointTenant => "SURVIVING_JOINT_TENANT",
            Self::ToExecutorProbateWill => "TO_EXECUTOR_PROBATE_WILL",
            Self::ToExecutorUnder25kWill => "TO_EXECUTOR_UNDER_25K_WILL",
            Self::ToAdminNoWill => "TO_ADMIN_NO_WILL",
            Self::Bankruptcy => "BANKRUPTCY",
        };
        f.write_str(s)
    }
}

impl FromStr for TransferType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SALE_OR_GIFT" => Ok(Self::SaleOrGift),
            "SURVIVING_JOINT_TENANT" => Ok(Self::SurvivingJointTenant),
            "TO_EXECUTOR_PROBATE_WILL" => Ok(Self::ToExecutorProbateWill),
            "TO_EXECUTOR_UNDER_25K_WILL" => Ok(Self::ToExecutorUnder25kWill),
            "TO_ADMIN_NO_WILL" => Ok(Self::ToAdminNoWill),
            "BANKRUPTCY" => Ok(Self::Bankruptcy),
            other => Err(UnknownVariant {
                kind: "transfer type",
                value: other.to_string(),
            }),
        }
    }
}

// ─── Supporting Document ─────────────────────────────────────────────

/// The supporting-document selection attached to a removed owner in a
/// death-driven transfer.
///
/// The engine requires only that the selection exists and is permitted
/// for the active transfer type; document content is collected elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SupportingDocument {
    /// Death certificate for the removed owner.
    DeathCertificate,
    /// Grant of probate naming the executor.
    GrantOfProbate,
    /// Grant of administration naming the administrator.
    GrantOfAdministration,
    /// Small-estate affidavit sworn by the executor.
    AffidavitOfExecutor,
}

impl std::fmt::Display for SupportingDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::DeathCertificate => "DEATH_CERTIFICATE",
            Self::GrantOfProbate => "GRANT_OF_PROBATE",
            Self::GrantOfAdministration => "GRANT_OF_ADMINISTRATION",
            Self::AffidavitOfExecutor => "AFFIDAVIT_OF_EXECUTOR",
        };
        f.write_str(s)
    }
}

// ─── Tenancy Type ────────────────────────────────────────────────────

/// Derived tenancy classification for display.
///
/// A label, not a submission gate — classification is a pure function of
/// surviving owner count, surviving group count, and the group-display
/// flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenancyType {
    /// Exactly one surviving owner.
    #[serde(rename = "SOLE")]
    Sole,
    /// Two or more surviving owners within conceptually one group.
    #[serde(rename = "JOINT")]
    Joint,
    /// Tenants in common: two or more surviving groups with fractional
    /// interests.
    #[serde(rename = "COMMON")]
    Common,
    /// No clean classification (e.g. zero surviving owners).
    #[serde(rename = "NA")]
    NotApplicable,
}

impl std::fmt::Display for TenancyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Sole => "SOLE",
            Self::Joint => "JOINT",
            Self::Common => "COMMON",
            Self::NotApplicable => "NA",
        };
        f.write_str(s)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
