//! # Transfer Type Rule Engine
//!
//! The legality rules specific to the active transfer type, evaluated
//! over the current snapshot and the pre-transfer baseline.
//!
//! Each transfer type maps to a `TransferRuleProfile` through a single
//! lookup table — the engine itself evaluates one generic predicate set
//! parameterized by the profile, so adding a transfer type means adding
//! a table row, not another conditional chain.
//!
//! ## Predicates
//!
//! - Every transfer must contain at least one ownership change.
//! - A representative role may be introduced only when the profile names
//!   it as the required representative for the flow.
//! - When a representative is required, each group is checked for the
//!   death-transfer shape: removals must cover all prior basic owners of
//!   the group, at least one required representative must remain, and a
//!   representative without any removal is ambiguous transfer intent.
//! - In death-driven flows every removed prior owner must carry a
//!   supporting-document selection drawn from the profile's permitted
//!   set. The engine requires only that the selection exists; document
//!   content is collected elsewhere.

use serde::{Deserialize, Serialize};

use mhr_core::{GroupId, OwnerId, PartyType, SupportingDocument, TransferType};
use mhr_registry::{summarize, Snapshot};

// ─── Rule profiles ───────────────────────────────────────────────────

/// The per-transfer-type rule parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferRuleProfile {
    /// Whether removals under this type represent deaths (and therefore
    /// demand supporting documents) rather than divestiture.
    pub death_driven: bool,
    /// The representative role this flow transfers interest to, if any.
    /// Only this role may be newly introduced.
    pub required_representative: Option<PartyType>,
    /// Supporting-document selections acceptable for removed owners.
    pub permitted_documents: &'static [SupportingDocument],
}

impl TransferRuleProfile {
    /// The rule profile for a transfer type.
    pub const fn for_transfer(transfer: TransferType) -> Self {
        match transfer {
            TransferType::SaleOrGift => Self {
                death_driven: false,
                required_representative: None,
                permitted_documents: &[],
            },
            TransferType::SurvivingJointTenant => Self {
                death_driven: true,
                required_representative: None,
                permitted_documents: &[SupportingDocument::DeathCertificate],
            },
            TransferType::ToExecutorProbateWill => Self {
                death_driven: true,
                required_representative: Some(PartyType::Executor),
                permitted_documents: &[
                    SupportingDocument::GrantOfProbate,
                    SupportingDocument::DeathCertificate,
                ],
            },
            TransferType::ToExecutorUnder25kWill => Self {
                death_driven: true,
                required_representative: Some(PartyType::Executor),
                permitted_documents: &[
                    SupportingDocument::AffidavitOfExecutor,
                    SupportingDocument::DeathCertificate,
                ],
            },
            TransferType::ToAdminNoWill => Self {
                death_driven: true,
                required_representative: Some(PartyType::Administrator),
                permitted_documents: &[
                    SupportingDocument::GrantOfAdministration,
                    SupportingDocument::DeathCertificate,
                ],
            },
            TransferType::Bankruptcy => Self {
                death_driven: false,
                required_representative: Some(PartyType::Trustee),
                permitted_documents: &[],
            },
        }
    }
}

// ─── Findings ────────────────────────────────────────────────────────

/// A transfer-legality defect, keyed so the host can render
/// transfer-specific remediation copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferFinding {
    /// The transaction contains no ownership change at all.
    OwnershipChangeRequired,
    /// A representative role was introduced that this transfer type does
    /// not permit.
    RepresentativeAdditionNotAllowed {
        /// The offending added owner.
        owner: OwnerId,
    },
    /// Some prior owners of the group were removed while others were
    /// left in place — a will-based transfer requires all of the group's
    /// owners to be deceased.
    OwnersMustBeDeceased {
        /// The offending group.
        group: GroupId,
    },
    /// A group with removed owners retains no executor.
    MustContainOneExecutor {
        /// The offending group.
        group: GroupId,
    },
    /// A group with removed owners retains no administrator.
    MustContainOneAdministrator {
        /// The offending group.
        group: GroupId,
    },
    /// A group with removed owners retains no trustee.
    MustContainOneTrustee {
        /// The offending group.
        group: GroupId,
    },
    /// A representative was added to a group in which no owner was
    /// removed — ambiguous transfer intent.
    AllOwnersHaveDeathCerts {
        /// The offending group.
        group: GroupId,
    },
    /// A removed owner in a death-driven flow carries no
    /// supporting-document selection.
    SupportingDocumentRequired {
        /// The removed owner.
        owner: OwnerId,
    },
    /// The selected supporting document is not permitted for the active
    /// transfer type.
    UnsupportedDocument {
        /// The removed owner.
        owner: OwnerId,
        /// The impermissible selection.
        document: SupportingDocument,
    },
}

impl TransferFinding {
    /// The group this finding is scoped to, if any — used by the
    /// aggregator's structural short-circuit.
    pub fn group(&self) -> Option<GroupId> {
        match self {
            Self::OwnersMustBeDeceased { group }
            | Self::MustContainOneExecutor { group }
            | Self::MustContainOneAdministrator { group }
            | Self::MustContainOneTrustee { group }
            | Self::AllOwnersHaveDeathCerts { group } => Some(*group),
            Self::OwnershipChangeRequired
            | Self::RepresentativeAdditionNotAllowed { .. }
            | Self::SupportingDocumentRequired { .. }
            | Self::UnsupportedDocument { .. } => None,
        }
    }
}

fn must_contain_finding(representative: PartyType, group: GroupId) -> Option<TransferFinding> {
    match representative {
        PartyType::Executor => Some(TransferFinding::MustContainOneExecutor { group }),
        PartyType::Administrator => Some(TransferFinding::MustContainOneAdministrator { group }),
        PartyType::Trustee => Some(TransferFinding::MustContainOneTrustee { group }),
        PartyType::Owner => None,
    }
}

// ─── Evaluation ──────────────────────────────────────────────────────

/// Evaluate the active transfer type's predicates.
///
/// Pure over its inputs; only the active type's rules run.
pub fn evaluate(
    current: &Snapshot,
    previous: &Snapshot,
    transfer: TransferType,
) -> Vec<TransferFinding> {
    let profile = TransferRuleProfile::for_transfer(transfer);
    let mut findings = Vec::new();

    if summarize(current).is_unchanged() {
        findings.push(TransferFinding::OwnershipChangeRequired);
    }

    for owner in current.owners() {
        if owner.is_added()
            && owner.party_type.is_representative()
            && profile.required_representative != Some(owner.party_type)
        {
            findings.push(TransferFinding::RepresentativeAdditionNotAllowed { owner: owner.id });
        }
    }

    if let Some(representative) = profile.required_representative {
        for group in current.groups() {
            evaluate_death_shape(current, previous, group.id, representative, &mut findings);
        }
    }

    if profile.death_driven {
        for owner in current.owners() {
            // Only deaths of prior owners demand documents; an owner
            // added and removed within the same transaction does not.
            if !owner.is_removed() || previous.owner(owner.id).is_err() {
                continue;
            }
            match owner.supporting_document {
                None => {
                    findings.push(TransferFinding::SupportingDocumentRequired { owner: owner.id });
                }
                Some(document) if !profile.permitted_documents.contains(&document) => {
                    findings.push(TransferFinding::UnsupportedDocument {
                        owner: owner.id,
                        document,
                    });
                }
                Some(_) => {}
            }
        }
    }

    findings
}

fn evaluate_death_shape(
    current: &Snapshot,
    previous: &Snapshot,
    group_id: GroupId,
    representative: PartyType,
    findings: &mut Vec<TransferFinding>,
) {
    let members: Vec<_> = current.owners_in_group(group_id).collect();
    let removed_prior = members
        .iter()
        .filter(|o| o.is_removed() && previous.owner(o.id).is_ok())
        .count();
    let surviving_representatives = members
        .iter()
        .filter(|o| !o.is_removed() && o.party_type == representative)
        .count();

    if removed_prior > 0 {
        let active_prior_basic = members.iter().any(|o| {
            !o.is_removed()
                && o.party_type == PartyType::Owner
                && previous.owner(o.id).is_ok()
        });
        if active_prior_basic {
            findings.push(TransferFinding::OwnersMustBeDeceased { group: group_id });
        }
        if surviving_representatives == 0 {
            if let Some(finding) = must_contain_finding(representative, group_id) {
                findings.push(finding);
            }
        }
    } else if surviving_representatives > 0
        && members
            .iter()
            .any(|o| o.is_added() && o.party_type == representative)
    {
        findings.push(TransferFinding::AllOwnersHaveDeathCerts { group: group_id });
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
