//! # Fractional Interest Arithmetic — Exact Rationals
//!
//! Defines `Fraction`, the exact rational type used for ownership group
//! interests. Allocation correctness depends on exact equality — a set of
//! groups is fully allocated iff the sum of their fractions equals 1
//! computed as rationals, so every comparison here is u128
//! cross-multiplication and there is no floating-point path at all.
//!
//! Invalid fractions are **rejected at construction**: numerator and
//! denominator must both be positive, so a `Fraction` value is always a
//! well-formed positive rational.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

/// Error constructing or combining fractions.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FractionError {
    /// The numerator was zero; interests are positive.
    #[error("fraction numerator must be positive")]
    ZeroNumerator,

    /// The denominator was zero.
    #[error("fraction denominator must be positive")]
    ZeroDenominator,

    /// The reduced result does not fit in u64.
    #[error("fraction arithmetic overflow: {0}")]
    Overflow(String),
}

/// An exact positive rational: a group's fractional interest in the home.
///
/// Serialized as `{"numerator": n, "denominator": d}` to match the
/// registry's interest fields. Deserialization goes through `new()`, so a
/// wire fraction with a zero term is a parse error, not a latent divide
/// by zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawFraction")]
pub struct Fraction {
    numerator: u64,
    denominator: u64,
}

/// Unvalidated wire shape; promoted to `Fraction` via `new()`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFraction {
    numerator: u64,
    denominator: u64,
}

impl TryFrom<RawFraction> for Fraction {
    type Error = FractionError;

    fn try_from(raw: RawFraction) -> Result<Self, Self::Error> {
        Fraction::new(raw.numerator, raw.denominator)
    }
}

impl Fraction {
    /// The whole interest, `1/1`.
    pub const ONE: Fraction = Fraction {
        numerator: 1,
        denominator: 1,
    };

    /// Create a fraction, rejecting zero numerator or denominator.
    pub fn new(numerator: u64, denominator: u64) -> Result<Self, FractionError> {
        if numerator == 0 {
            return Err(FractionError::ZeroNumerator);
        }
        if denominator == 0 {
            return Err(FractionError::ZeroDenominator);
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// The numerator.
    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    /// The denominator.
    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    /// The fraction in lowest terms.
    pub fn reduce(&self) -> Fraction {
        let g = gcd(self.numerator, self.denominator);
        Fraction {
            numerator: self.numerator / g,
            denominator: self.denominator / g,
        }
    }

    /// Exact sum of two fractions, reduced to lowest terms.
    ///
    /// Intermediate arithmetic is u128 so the only failure is a reduced
    /// result whose terms exceed u64.
    pub fn checked_add(&self, other: &Fraction) -> Result<Fraction, FractionError> {
        let n = u128::from(self.numerator) * u128::from(other.denominator)
            + u128::from(other.numerator) * u128::from(self.denominator);
        let d = u128::from(self.denominator) * u128::from(other.denominator);
        let g = gcd_u128(n, d);
        let (n, d) = (n / g, d / g);
        let numerator =
            u64::try_from(n).map_err(|_| FractionError::Overflow(format!("{n}/{d}")))?;
        let denominator =
            u64::try_from(d).map_err(|_| FractionError::Overflow(format!("{n}/{d}")))?;
        Ok(Fraction {
            numerator,
            denominator,
        })
    }

    /// Exact comparison against the whole interest.
    pub fn cmp_one(&self) -> Ordering {
        self.cmp(&Fraction::ONE)
    }
}

// Equality and ordering are by rational value, not stored terms: 2/4
// equals 1/2. The stored terms survive only for display round-tripping.

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // Cross-multiplication in u128; denominators are nonzero by
        // construction.
        let lhs = u128::from(self.numerator) * u128::from(other.denominator);
        let rhs = u128::from(other.numerator) * u128::from(self.denominator);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Fraction {}

impl std::hash::Hash for Fraction {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        let reduced = self.reduce();
        reduced.numerator.hash(state);
        reduced.denominator.hash(state);
    }
}

impl std::fmt::Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

fn gcd_u128(a: u128, b: u128) -> u128 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

// ─── Tests ───────────────────────────────────────────────────────────
