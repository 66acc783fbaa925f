//! Cracking time section - closed-form brute-force estimate.

use secrecy::{ExposeSecret, SecretString};

/// Guesses per second assumed for the attacker.
pub const GUESSES_PER_SECOND: f64 = 1e10;

const SECONDS_PER_YEAR: f64 = 365.0 * 24.0 * 3600.0;

/// Size of the alphabet an attacker would have to search.
///
/// Sums the sizes of the ASCII classes present (26 upper, 26 lower,
/// 10 digits, 3 specials). Floors to 1 when no class is present.
pub fn charset_size(pwd: &str) -> u32 {
    let (mut upper, mut lower, mut digit, mut special) = (false, false, false, false);
    for c in pwd.chars() {
        if c.is_ascii_uppercase() {
            upper = true;
        } else if c.is_ascii_lowercase() {
            lower = true;
        } else if c.is_ascii_digit() {
            digit = true;
        } else if matches!(c, '@' | '#' | '$') {
            special = true;
        }
    }

    let size: u32 = [(upper, 26), (lower, 26), (digit, 10), (special, 3)]
        .into_iter()
        .filter(|(present, _)| *present)
        .map(|(_, n)| n)
        .sum();

    if size == 0 { 1 } else { size }
}

/// Estimated years to exhaust the password's search space.
///
/// Overflows to `f64::INFINITY` for long, varied passwords.
pub fn estimate_cracking_years(pwd: &str) -> f64 {
    let length = pwd.chars().count();
    let combinations = f64::from(charset_size(pwd)).powf(length as f64);
    combinations / GUESSES_PER_SECOND / SECONDS_PER_YEAR
}

/// Estimates brute-force time for the password, in years.
pub fn cracking_time_section(password: &SecretString) -> f64 {
    estimate_cracking_years(password.expose_secret())
}

/// Renders a cracking estimate the way a person would say it.
pub fn format_cracking_time(years: f64) -> String {
    if !years.is_finite() {
        return "longer than the universe will exist".to_string();
    }
    if years < 0.000001 {
        return "less than a second".to_string();
    }

    let seconds = years * SECONDS_PER_YEAR;
    if seconds < 60.0 {
        return format!("{} seconds", seconds.round());
    }
    let minutes = seconds / 60.0;
    if minutes < 60.0 {
        return format!("{} minutes", minutes.round());
    }
    let hours = minutes / 60.0;
    if hours < 24.0 {
        return format!("{} hours", hours.round());
    }
    let days = hours / 24.0;
    if days < 365.0 {
        return format!("{} days", days.round());
    }
    format!("{} years", years.round())
}
