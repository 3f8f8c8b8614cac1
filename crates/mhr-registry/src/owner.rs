//! # Owner Records
//!
//! An owner is a person or organization holding an interest in the home,
//! in one of four legal capacities (`PartyType`). Owners always belong to
//! exactly one ownership group.
//!
//! Contact fields (address, phone) are opaque pass-through data — the
//! engine stores and submits them but never validates them.

use serde::{Deserialize, Serialize};

use mhr_core::{ActionTag, GroupId, OwnerId, PartyType, SupportingDocument};

// ─── Names ───────────────────────────────────────────────────────────

/// Structured name for an individual owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    /// Given name.
    pub first: String,
    /// Middle name, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle: Option<String>,
    /// Family name.
    pub last: String,
}

/// Name for an organization owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationName {
    /// Registered organization name.
    pub name: String,
}

/// The individual/organization split of an owner record.
///
/// Serialized as the registry's polymorphic name field: either
/// `"individualName": {...}` or `"organizationName": {...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OwnerKind {
    /// A natural person with a structured name.
    #[serde(rename = "individualName")]
    Individual(PersonName),
    /// An organization with a registered name.
    #[serde(rename = "organizationName")]
    Organization(OrganizationName),
}

// ─── Owner ───────────────────────────────────────────────────────────

/// An owner record within a snapshot.
///
/// Identity is stable: the id is assigned on creation and never changes.
/// The party type is mutable while the record sits in the current
/// editable snapshot and immutable once persisted by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    /// Stable owner identifier.
    pub id: OwnerId,
    /// The group this owner belongs to (exactly one at any time).
    pub group_id: GroupId,
    /// Individual or organization name.
    #[serde(flatten)]
    pub kind: OwnerKind,
    /// The legal capacity in which the interest is held.
    pub party_type: PartyType,
    /// Name suffix (e.g. "JR", "ESTATE OF").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// Lifecycle action relative to the previous snapshot; absent for
    /// registration-time owners with no prior state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionTag>,
    /// Supporting-document selection attached to a pending removal in a
    /// death-driven transfer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supporting_document: Option<SupportingDocument>,
    /// Mailing address — opaque to this engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Phone number — opaque to this engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Owner {
    /// Whether this owner is pending removal.
    pub fn is_removed(&self) -> bool {
        self.action == Some(ActionTag::Removed)
    }

    /// Whether this owner was introduced by the current transaction.
    pub fn is_added(&self) -> bool {
        self.action == Some(ActionTag::Added)
    }

    /// Whether the record carries the same substantive fields as another,
    /// ignoring lifecycle bookkeeping (action tag and document selection).
    pub fn same_fields(&self, other: &Owner) -> bool {
        self.group_id == other.group_id
            && self.kind == other.kind
            && self.party_type == other.party_type
            && self.suffix == other.suffix
            && self.address == other.address
            && self.phone == other.phone
    }
}

// ─── New-owner input ─────────────────────────────────────────────────

/// Input for creating an owner; the registry assigns the id and group
/// linkage.
#[derive(Debug, Clone)]
pub struct NewOwner {
    /// Individual or organization name.
    pub kind: OwnerKind,
    /// The legal capacity in which the interest is held.
    pub party_type: PartyType,
    /// Name suffix, if any.
    pub suffix: Option<String>,
    /// Mailing address — opaque.
    pub address: Option<String>,
    /// Phone number — opaque.
    pub phone: Option<String>,
}

impl NewOwner {
    /// Convenience constructor for an individual basic owner.
    pub fn individual(first: &str, last: &str, party_type: PartyType) -> Self {
        Self {
            kind: OwnerKind::Individual(PersonName {
                first: first.to_string(),
                middle: None,
                last: last.to_string(),
            }),
            party_type,
            suffix: None,
            address: None,
            phone: None,
        }
    }

    /// Convenience constructor for an organization owner.
    pub fn organization(name: &str, party_type: PartyType) -> Self {
        Self {
            kind: OwnerKind::Organization(OrganizationName {
                name: name.to_string(),
            }),
            party_type,
            suffix: None,
            address: None,
            phone: None,
        }
    }
}

// ─── Patch ───────────────────────────────────────────────────────────

/// A single named mutation of an owner record.
///
/// A closed sum type — every mutation the host UI can issue is a variant
/// here, applied by exhaustive `match`. There is no dynamic keyed field
/// access.
#[derive(Debug, Clone)]
pub enum OwnerPatch {
    /// Replace the individual/organization name.
    Name(OwnerKind),
    /// Set or clear the name suffix.
    Suffix(Option<String>),
    /// Change the legal capacity.
    PartyType(PartyType),
    /// Set or clear the supporting-document selection.
    SupportingDocument(Option<SupportingDocument>),
    /// Set or clear the mailing address.
    Address(Option<String>),
    /// Set or clear the phone number.
    Phone(Option<String>),
}

impl OwnerPatch {
    /// Apply the patch to an owner record.
    ///
    /// Patches mutate fields only; action tags are derived from the
    /// previous snapshot by the change tracker, never set here.
    pub fn apply(self, owner: &mut Owner) {
        match self {
            OwnerPatch::Name(kind) => owner.kind = kind,
            OwnerPatch::Suffix(suffix) => owner.suffix = suffix,
            OwnerPatch::PartyType(party_type) => owner.party_type = party_type,
            OwnerPatch::SupportingDocument(doc) => owner.supporting_document = doc,
            OwnerPatch::Address(address) => owner.address = address,
            OwnerPatch::Phone(phone) => owner.phone = phone,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_owner() -> Owner {
        Owner {
            id: OwnerId(1),
            group_id: GroupId(1),
            kind: OwnerKind::Individual(PersonName {
                first: "MARY".to_string(),
                middle: None,
                last: "HOLT".to_string(),
            }),
            party_type: PartyType::Owner,
            suffix: None,
            action: None,
            supporting_document: None,
            address: None,
            phone: None,
        }
    }

    #[test]
    fn test_individual_serializes_with_individual_name_key() {
        let owner = make_owner();
        let json = serde_json::to_value(&owner).unwrap();
        assert_eq!(json["individualName"]["first"], "MARY");
        assert_eq!(json["partyType"], "OWNER");
        assert!(json.get("organizationName").is_none());
        assert!(json.get("action").is_none());
    }

    #[test]
    fn test_organization_serializes_with_organization_name_key() {
        let mut owner = make_owner();
        owner.kind = OwnerKind::Organization(OrganizationName {
            name: "COAST HOMES LTD".to_string(),
        });
        let json = serde_json::to_value(&owner).unwrap();
        assert_eq!(json["organizationName"]["name"], "COAST HOMES LTD");
        assert!(json.get("individualName").is_none());
    }

    #[test]
    fn test_owner_round_trips() {
        let mut owner = make_owner();
        owner.action = Some(ActionTag::Removed);
        owner.supporting_document = Some(SupportingDocument::DeathCertificate);
        let json = serde_json::to_string(&owner).unwrap();
        let parsed: Owner = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, owner);
    }

    #[test]
    fn test_patch_sets_party_type() {
        let mut owner = make_owner();
        OwnerPatch::PartyType(PartyType::Executor).apply(&mut owner);
        assert_eq!(owner.party_type, PartyType::Executor);
        assert_eq!(owner.action, None);
    }

    #[test]
    fn test_patch_sets_supporting_document() {
        let mut owner = make_owner();
        OwnerPatch::SupportingDocument(Some(SupportingDocument::GrantOfProbate))
            .apply(&mut owner);
        assert_eq!(
            owner.supporting_document,
            Some(SupportingDocument::GrantOfProbate)
        );
        assert_eq!(owner.action, None);
    }

    #[test]
    fn test_same_fields_ignores_bookkeeping() {
        let a = make_owner();
        let mut b = make_owner();
        b.action = Some(ActionTag::Removed);
        b.supporting_document = Some(SupportingDocument::DeathCertificate);
        assert!(a.same_fields(&b));

        let mut c = make_owner();
        c.suffix = Some("JR".to_string());
        assert!(!a.same_fields(&c));
    }
}
