//! # Ownership Group Allocator
//!
//! Computes the aggregate allocation status across surviving groups'
//! fractional interests. Equality against the whole interest is exact
//! rational comparison — cross-multiplication, never floating point.
//!
//! A group with zero surviving owners still counts toward the arithmetic:
//! interest belongs to the group, not to its member count. Such a group
//! is flagged separately by the structural validator.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use mhr_core::Fraction;
use mhr_registry::Snapshot;

/// Aggregate fractional-interest completeness across surviving groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AllocationStatus {
    /// Group-interest tracking is not in use for this snapshot.
    NotApplicable,
    /// The surviving groups' fractions sum to less than 1.
    UnderAllocated,
    /// The surviving groups' fractions sum to exactly 1.
    FullyAllocated,
    /// The surviving groups' fractions sum to more than 1.
    OverAllocated,
}

impl std::fmt::Display for AllocationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::NotApplicable => "NOT_APPLICABLE",
            Self::UnderAllocated => "UNDER_ALLOCATED",
            Self::FullyAllocated => "FULLY_ALLOCATED",
            Self::OverAllocated => "OVER_ALLOCATED",
        };
        f.write_str(s)
    }
}

/// The allocator's output: the status plus the exact running total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationOutcome {
    /// Aggregate allocation status.
    pub status: AllocationStatus,
    /// The exact sum of surviving groups' fractions, reduced; absent when
    /// tracking is not applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Fraction>,
}

impl AllocationOutcome {
    /// Whether allocation does not block submission.
    pub fn is_acceptable(&self) -> bool {
        matches!(
            self.status,
            AllocationStatus::NotApplicable | AllocationStatus::FullyAllocated
        )
    }
}

/// Evaluate the allocation status of a snapshot.
///
/// `NotApplicable` when grouped display is off or no surviving group
/// declares a fraction; otherwise the exact rational sum classified
/// against 1.
pub fn evaluate(snapshot: &Snapshot) -> AllocationOutcome {
    if !snapshot.group_display() {
        return AllocationOutcome {
            status: AllocationStatus::NotApplicable,
            total: None,
        };
    }

    let mut declared = snapshot.surviving_groups().filter_map(|g| g.interest);
    let mut total = match declared.next() {
        Some(first) => first,
        None => {
            return AllocationOutcome {
                status: AllocationStatus::NotApplicable,
                total: None,
            };
        }
    };
    for fraction in declared {
        match total.checked_add(&fraction) {
            Ok(sum) => total = sum,
            // Overflow is only reachable past full allocation with absurd
            // denominators; report over-allocation without a total.
            Err(_) => {
                return AllocationOutcome {
                    status: AllocationStatus::OverAllocated,
                    total: None,
                };
            }
        }
    }

    let status = match total.cmp_one() {
        Ordering::Less => AllocationStatus::UnderAllocated,
        Ordering::Equal => AllocationStatus::FullyAllocated,
        Ordering::Greater => AllocationStatus::OverAllocated,
    };
    AllocationOutcome {
        status,
        total: Some(total),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use mhr_core::{ActionTag, PartyType};
    use mhr_registry::NewOwner;

    fn snapshot_with_fractions(fractions: &[(u64, u64)]) -> Snapshot {
        let mut snap = Snapshot::new(true);
        for &(n, d) in fractions {
            let gid = snap.add_group(Some(Fraction::new(n, d).unwrap()), None);
            snap.add_owner(NewOwner::individual("A", "B", PartyType::Owner), gid, None)
                .unwrap();
        }
        snap
    }

    #[test]
    fn test_quarters_and_half_fully_allocated() {
        let snap = snapshot_with_fractions(&[(1, 4), (1, 4), (1, 2)]);
        let outcome = evaluate(&snap);
        assert_eq!(outcome.status, AllocationStatus::FullyAllocated);
        assert_eq!(outcome.total, Some(Fraction::ONE));
        assert!(outcome.is_acceptable());
    }

    #[test]
    fn test_two_quarters_under_allocated() {
        let outcome = evaluate(&snapshot_with_fractions(&[(1, 4), (1, 4)]));
        assert_eq!(outcome.status, AllocationStatus::UnderAllocated);
        assert_eq!(outcome.total, Some(Fraction::new(1, 2).unwrap()));
        assert!(!outcome.is_acceptable());
    }

    #[test]
    fn test_five_quarters_over_allocated() {
        let outcome =
            evaluate(&snapshot_with_fractions(&[(1, 4), (1, 4), (1, 4), (1, 4), (1, 4)]));
        assert_eq!(outcome.status, AllocationStatus::OverAllocated);
        assert_eq!(outcome.total, Some(Fraction::new(5, 4).unwrap()));
    }

    #[test]
    fn test_mixed_denominators_exact() {
        // 1/3 + 1/3 + 1/3 is exactly 1 — no drift permitted.
        let outcome = evaluate(&snapshot_with_fractions(&[(1, 3), (1, 3), (1, 3)]));
        assert_eq!(outcome.status, AllocationStatus::FullyAllocated);
    }

    #[test]
    fn test_group_display_off_is_not_applicable() {
        let mut snap = snapshot_with_fractions(&[(1, 2), (1, 2)]);
        snap.set_group_display(false);
        let outcome = evaluate(&snap);
        assert_eq!(outcome.status, AllocationStatus::NotApplicable);
        assert_eq!(outcome.total, None);
    }

    #[test]
    fn test_no_declared_fraction_is_not_applicable() {
        let mut snap = Snapshot::new(true);
        let gid = snap.add_group(None, None);
        snap.add_owner(NewOwner::individual("A", "B", PartyType::Owner), gid, None)
            .unwrap();
        assert_eq!(evaluate(&snap).status, AllocationStatus::NotApplicable);
    }

    #[test]
    fn test_removed_group_excluded_from_sum() {
        let mut snap = snapshot_with_fractions(&[(1, 2), (1, 2)]);
        // Removing one half leaves the other under-allocated.
        snap.mark_group_removed(mhr_core::GroupId(2)).unwrap();
        let outcome = evaluate(&snap);
        assert_eq!(outcome.status, AllocationStatus::UnderAllocated);
    }

    #[test]
    fn test_emptied_group_still_counts() {
        let mut snap = snapshot_with_fractions(&[(1, 2), (1, 2)]);
        // Remove the owner but not the group: interest is group property.
        snap.mark_owner_removed(mhr_core::OwnerId(2)).unwrap();
        let outcome = evaluate(&snap);
        assert_eq!(outcome.status, AllocationStatus::FullyAllocated);
    }

    #[test]
    fn test_added_group_counts_once_declared() {
        let mut snap = snapshot_with_fractions(&[(1, 2)]);
        snap.add_group(
            Some(Fraction::new(1, 2).unwrap()),
            Some(ActionTag::Added),
        );
        assert_eq!(evaluate(&snap).status, AllocationStatus::FullyAllocated);
    }
}
