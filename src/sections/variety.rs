//! Character variety section - checks for uppercase, lowercase, numbers, special chars.
//!
//! Classification is ASCII-only: `A-Z`, `a-z`, `0-9` and the three
//! recognized specials `@`, `#`, `$`. Everything else belongs to no class.

use secrecy::{ExposeSecret, SecretString};

pub const SPECIAL_CHARS: &str = "@#$";

/// Which character classes appear at least once in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterVariety {
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_number: bool,
    pub has_special: bool,
}

impl CharacterVariety {
    /// Scans the string once, flagging every class seen.
    pub fn scan(pwd: &str) -> Self {
        let mut variety = Self::default();
        for c in pwd.chars() {
            match c {
                'A'..='Z' => variety.has_upper = true,
                'a'..='z' => variety.has_lower = true,
                '0'..='9' => variety.has_number = true,
                c if SPECIAL_CHARS.contains(c) => variety.has_special = true,
                _ => {}
            }
        }
        variety
    }

    /// Names of the classes that are absent, in a fixed order.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (self.has_upper, "uppercase"),
            (self.has_lower, "lowercase"),
            (self.has_number, "numbers"),
            (self.has_special, "special characters (@, #, $)"),
        ]
        .into_iter()
        .filter_map(|(present, name)| (!present).then_some(name))
        .collect()
    }
}

/// Checks which character types the password contains.
pub fn character_variety_section(password: &SecretString) -> CharacterVariety {
    CharacterVariety::scan(password.expose_secret())
}
