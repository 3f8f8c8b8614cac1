//! # Tenancy Classifier
//!
//! Derives the Sole/Joint/Common/NA display label from owner and group
//! cardinality. A label, never a submission gate — the classifier is a
//! pure function with no hidden state.

use mhr_core::TenancyType;
use mhr_registry::Snapshot;

/// Classify tenancy from surviving cardinalities.
///
/// Priority order:
/// 1. grouped display with two or more surviving groups → `Common`;
/// 2. exactly one surviving owner → `Sole`;
/// 3. two or more surviving owners in conceptually one group → `Joint`;
/// 4. anything else → `NotApplicable`.
pub fn classify(
    surviving_owners: usize,
    surviving_groups: usize,
    group_display: bool,
) -> TenancyType {
    if group_display && surviving_groups >= 2 {
        TenancyType::Common
    } else if surviving_owners == 1 {
        TenancyType::Sole
    } else if surviving_owners >= 2 {
        TenancyType::Joint
    } else {
        TenancyType::NotApplicable
    }
}

/// Classify a snapshot's tenancy.
pub fn classify_snapshot(snapshot: &Snapshot) -> TenancyType {
    classify(
        snapshot.surviving_owners().count(),
        snapshot.surviving_groups().count(),
        snapshot.group_display(),
    )
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use mhr_core::{Fraction, PartyType};
    use mhr_registry::NewOwner;

    #[test]
    fn test_one_owner_group_mode_off_is_sole() {
        assert_eq!(classify(1, 1, false), TenancyType::Sole);
    }

    #[test]
    fn test_two_owners_single_group_is_joint() {
        assert_eq!(classify(2, 1, false), TenancyType::Joint);
    }

    #[test]
    fn test_two_owners_two_groups_grouped_is_common() {
        assert_eq!(classify(2, 2, true), TenancyType::Common);
    }

    #[test]
    fn test_zero_owners_is_not_applicable() {
        assert_eq!(classify(0, 0, false), TenancyType::NotApplicable);
        assert_eq!(classify(0, 1, false), TenancyType::NotApplicable);
    }

    #[test]
    fn test_group_mode_off_never_common() {
        // Two groups but display disabled: conceptually one group.
        assert_eq!(classify(2, 2, false), TenancyType::Joint);
    }

    #[test]
    fn test_sole_owner_in_grouped_single_group() {
        assert_eq!(classify(1, 1, true), TenancyType::Sole);
    }

    #[test]
    fn test_classify_snapshot_counts_survivors_only() {
        let mut snap = Snapshot::new(true);
        let g1 = snap.add_group(Some(Fraction::new(1, 2).unwrap()), None);
        let g2 = snap.add_group(Some(Fraction::new(1, 2).unwrap()), None);
        snap.add_owner(NewOwner::individual("A", "B", PartyType::Owner), g1, None)
            .unwrap();
        snap.add_owner(NewOwner::individual("C", "D", PartyType::Owner), g2, None)
            .unwrap();
        assert_eq!(classify_snapshot(&snap), TenancyType::Common);

        // Removing one group drops the classification to Sole.
        snap.mark_group_removed(g2).unwrap();
        assert_eq!(classify_snapshot(&snap), TenancyType::Sole);
    }
}
