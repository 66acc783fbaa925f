//! Password evaluation sections
//!
//! Each section analyzes a specific aspect of password strength. Sections
//! are pure functions of the password and cannot fail.

mod cracking;
mod length;
mod pattern;
mod variety;

pub use cracking::{
    GUESSES_PER_SECOND, charset_size, cracking_time_section, estimate_cracking_years,
    format_cracking_time,
};
pub use length::{MIN_LENGTH, length_section};
pub use pattern::{
    COMMON_PASSWORDS, KEYBOARD_PATTERNS, WeakPattern, detect_pattern, find_weak_pattern,
    pattern_analysis_section,
};
pub use variety::{CharacterVariety, SPECIAL_CHARS, character_variety_section};

use secrecy::SecretString;

/// The five binary quality criteria of a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CriteriaResult {
    pub length_valid: bool,
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_number: bool,
    pub has_special: bool,
}

impl CriteriaResult {
    /// Number of criteria met, 0 to 5.
    pub fn fulfilled(&self) -> u8 {
        [
            self.length_valid,
            self.has_upper,
            self.has_lower,
            self.has_number,
            self.has_special,
        ]
        .into_iter()
        .filter(|&met| met)
        .count() as u8
    }

    /// Human-readable reasons for each unmet criterion.
    pub fn reasons(&self) -> Vec<String> {
        let mut reasons = Vec::new();
        if !self.length_valid {
            reasons.push(format!("Password must be at least {} characters", MIN_LENGTH));
        }
        let missing = self.variety().missing();
        if !missing.is_empty() {
            reasons.push(format!("Missing: {}", missing.join(", ")));
        }
        reasons
    }

    fn variety(&self) -> CharacterVariety {
        CharacterVariety {
            has_upper: self.has_upper,
            has_lower: self.has_lower,
            has_number: self.has_number,
            has_special: self.has_special,
        }
    }
}

/// Runs the length and variety sections.
pub fn check_criteria(password: &SecretString) -> CriteriaResult {
    let variety = character_variety_section(password);
    CriteriaResult {
        length_valid: length_section(password),
        has_upper: variety.has_upper,
        has_lower: variety.has_lower,
        has_number: variety.has_number,
        has_special: variety.has_special,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pwd(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_check_criteria_password() {
        assert_eq!(
            check_criteria(&pwd("password")),
            CriteriaResult {
                length_valid: false,
                has_upper: false,
                has_lower: true,
                has_number: false,
                has_special: false,
            }
        );
    }

    #[test]
    fn test_check_criteria_all_met() {
        let criteria = check_criteria(&pwd("Hello@World2024"));
        assert_eq!(criteria.fulfilled(), 5);
        assert!(criteria.reasons().is_empty());
    }

    #[test]
    fn test_check_criteria_ampersand_not_special() {
        let criteria = check_criteria(&pwd("Tr0ub4dor&3"));
        assert!(!criteria.has_special);
        assert!(!criteria.length_valid);
        assert_eq!(criteria.fulfilled(), 3);
    }

    #[test]
    fn test_check_criteria_idempotent() {
        let p = pwd("Tr0ub4dor&3");
        assert_eq!(check_criteria(&p), check_criteria(&p));
    }

    #[test]
    fn test_check_criteria_multibyte_length() {
        let criteria = check_criteria(&pwd("éééééé"));
        assert!(criteria.length_valid);
        assert_eq!(criteria.fulfilled(), 1);
    }

    #[test]
    fn test_criteria_reasons() {
        let reasons = check_criteria(&pwd("short")).reasons();
        assert_eq!(reasons.len(), 2);
        assert_eq!(reasons[0], "Password must be at least 12 characters");
        assert!(reasons[1].starts_with("Missing: uppercase"));
        assert!(!reasons[1].contains("lowercase"));
    }

    #[test]
    fn test_criteria_agrees_with_charset_size() {
        for s in ["abc", "ABC123", "x@y", "!!!", "Aa1$"] {
            let c = check_criteria(&pwd(s));
            let mut expected: u32 = 0;
            if c.has_upper {
                expected += 26;
            }
            if c.has_lower {
                expected += 26;
            }
            if c.has_number {
                expected += 10;
            }
            if c.has_special {
                expected += 3;
            }
            assert_eq!(charset_size(s), expected.max(1), "mismatch for {s}");
        }
    }
}
