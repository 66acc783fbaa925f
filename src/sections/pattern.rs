//! Pattern analysis section - detects common passwords, repetitive runs and keyboard sequences.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// Well-known weak passwords, matched as case-insensitive substrings.
pub const COMMON_PASSWORDS: [&str; 4] = ["password", "123456", "qwerty", "admin123"];

/// Keyboard-adjacent runs, matched as case-insensitive substrings.
///
/// `qwerty` also appears in [`COMMON_PASSWORDS`]; both lists are kept as-is.
pub const KEYBOARD_PATTERNS: [&str; 3] = ["qwerty", "asdf", "zxcv"];

const MAX_REPEAT: usize = 3;

/// The first weak pattern found in a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeakPattern {
    CommonPassword(&'static str),
    RepeatedCharacters,
    KeyboardSequence(&'static str),
}

impl fmt::Display for WeakPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeakPattern::CommonPassword(word) => {
                write!(f, "Password contains the common password \"{}\"", word)
            }
            WeakPattern::RepeatedCharacters => write!(
                f,
                "Password contains {} or more identical consecutive characters",
                MAX_REPEAT
            ),
            WeakPattern::KeyboardSequence(seq) => {
                write!(f, "Password contains the keyboard sequence \"{}\"", seq)
            }
        }
    }
}

/// Returns the first weak pattern in the password, if any.
///
/// Checks run in order: common passwords, repeated characters, keyboard
/// sequences.
pub fn find_weak_pattern(pwd: &str) -> Option<WeakPattern> {
    let lower = pwd.to_lowercase();

    if let Some(word) = COMMON_PASSWORDS.into_iter().find(|w| lower.contains(w)) {
        return Some(WeakPattern::CommonPassword(word));
    }

    if has_repeated_run(pwd.as_bytes()) {
        return Some(WeakPattern::RepeatedCharacters);
    }

    KEYBOARD_PATTERNS
        .into_iter()
        .find(|seq| lower.contains(seq))
        .map(WeakPattern::KeyboardSequence)
}

// Case-sensitive, byte-wise.
fn has_repeated_run(bytes: &[u8]) -> bool {
    let mut repeated_count = 1;
    for i in 1..bytes.len() {
        if bytes[i] == bytes[i - 1] {
            repeated_count += 1;
            if repeated_count >= MAX_REPEAT {
                return true;
            }
        } else {
            repeated_count = 1;
        }
    }
    false
}

/// Analyzes password for common passwords, repetitive and keyboard patterns.
pub fn pattern_analysis_section(password: &SecretString) -> Option<WeakPattern> {
    find_weak_pattern(password.expose_secret())
}

/// Returns `true` if any weak pattern is present.
pub fn detect_pattern(password: &SecretString) -> bool {
    pattern_analysis_section(password).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pwd(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_pattern_section_common_password() {
        assert!(detect_pattern(&pwd("password")));
        assert_eq!(
            pattern_analysis_section(&pwd("password")),
            Some(WeakPattern::CommonPassword("password"))
        );
    }

    #[test]
    fn test_pattern_section_common_password_case_insensitive() {
        assert_eq!(
            find_weak_pattern("MyADMIN123site"),
            Some(WeakPattern::CommonPassword("admin123"))
        );
    }

    #[test]
    fn test_pattern_section_repetitive_chars() {
        assert!(detect_pattern(&pwd("aaabbbccc")));
        assert_eq!(
            find_weak_pattern("Xy111z"),
            Some(WeakPattern::RepeatedCharacters)
        );
    }

    #[test]
    fn test_pattern_section_repeat_is_case_sensitive() {
        assert_eq!(find_weak_pattern("aAaBbB"), None);
    }

    #[test]
    fn test_pattern_section_two_repeats_allowed() {
        assert_eq!(find_weak_pattern("aabbccdd"), None);
    }

    #[test]
    fn test_pattern_section_keyboard_sequence() {
        assert_eq!(
            find_weak_pattern("my-ASDF-key"),
            Some(WeakPattern::KeyboardSequence("asdf"))
        );
        assert_eq!(
            find_weak_pattern("zxcv"),
            Some(WeakPattern::KeyboardSequence("zxcv"))
        );
    }

    #[test]
    fn test_pattern_section_qwerty_hits_common_list_first() {
        assert_eq!(
            find_weak_pattern("QwErTy"),
            Some(WeakPattern::CommonPassword("qwerty"))
        );
    }

    #[test]
    fn test_pattern_section_clean_password() {
        assert!(!detect_pattern(&pwd("Tr0ub4dor&3")));
    }

    #[test]
    fn test_pattern_section_short_and_empty() {
        assert!(!detect_pattern(&pwd("")));
        assert!(!detect_pattern(&pwd("ab")));
    }

    #[test]
    fn test_pattern_section_idempotent() {
        let p = pwd("Hello@World2024");
        assert_eq!(pattern_analysis_section(&p), pattern_analysis_section(&p));
    }

    #[test]
    fn test_weak_pattern_display() {
        assert!(WeakPattern::RepeatedCharacters.to_string().contains("identical"));
        assert!(
            WeakPattern::KeyboardSequence("zxcv")
                .to_string()
                .contains("zxcv")
        );
    }
}
