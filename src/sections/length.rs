//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

pub const MIN_LENGTH: usize = 12;

/// Checks if the password meets minimum length requirements.
///
/// Length is counted in UTF-8 bytes.
pub fn length_section(password: &SecretString) -> bool {
    password.expose_secret().len() >= MIN_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        let pwd = SecretString::new("password".to_string().into());
        assert!(!length_section(&pwd));
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let pwd = SecretString::new("123456789012".to_string().into());
        assert!(length_section(&pwd));
    }

    #[test]
    fn test_length_section_one_below_minimum() {
        let pwd = SecretString::new("12345678901".to_string().into());
        assert!(!length_section(&pwd));
    }

    #[test]
    fn test_length_section_counts_bytes() {
        // 6 chars, 12 bytes
        let pwd = SecretString::new("éééééé".to_string().into());
        assert!(length_section(&pwd));

        // 5 chars, 10 bytes
        let pwd = SecretString::new("ééééé".to_string().into());
        assert!(!length_section(&pwd));
    }

    #[test]
    fn test_length_section_empty() {
        let pwd = SecretString::new("".to_string().into());
        assert!(!length_section(&pwd));
    }
}
