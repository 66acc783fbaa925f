//! Strength classification - combines criteria, pattern flag and cracking estimate.

use std::fmt;

use crate::sections::CriteriaResult;

/// Cracking estimate (years) above which a fully compliant password is strong.
pub const STRONG_MIN_YEARS: f64 = 1000.0;

/// Cracking estimate (years) above which a mostly compliant password is medium.
pub const MEDIUM_MIN_YEARS: f64 = 1.0;

/// Fulfilled criteria needed for a medium verdict.
pub const MEDIUM_MIN_FULFILLED: u8 = 4;

/// Maximum fulfilled count: five criteria plus "no weak pattern".
pub const MAX_FULFILLED: u8 = 6;

/// Three-level verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counts fulfilled criteria. The absence of a weak pattern counts as one.
pub fn fulfilled_count(criteria: &CriteriaResult, has_common_pattern: bool) -> u8 {
    criteria.fulfilled() + u8::from(!has_common_pattern)
}

/// Maps a fulfilled count and cracking estimate to a verdict.
pub fn strength_from_fulfilled(fulfilled: u8, years: f64) -> Strength {
    if fulfilled == MAX_FULFILLED && years > STRONG_MIN_YEARS {
        Strength::Strong
    } else if fulfilled >= MEDIUM_MIN_FULFILLED && years > MEDIUM_MIN_YEARS {
        Strength::Medium
    } else {
        Strength::Weak
    }
}

/// Classifies a password from its analysis results.
pub fn classify_strength(criteria: &CriteriaResult, has_common_pattern: bool, years: f64) -> Strength {
    strength_from_fulfilled(fulfilled_count(criteria, has_common_pattern), years)
}
