//! Password suggestion generator.
//!
//! The random source is passed in by the caller so generation is
//! deterministic under a seeded RNG. [`generate_suggestion`] uses the
//! thread-local RNG, which keeps concurrent callers independent.
//!
//! Suggestions are not re-checked against the pattern section; a random
//! string may, rarely, contain a weak pattern.

use rand::Rng;
use rand::seq::SliceRandom;
use secrecy::SecretString;

pub const SUGGESTION_LENGTH: usize = 16;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SPECIALS: &[u8] = b"@#$";

fn pick<R: Rng + ?Sized>(rng: &mut R, charset: &[u8]) -> u8 {
    charset[rng.gen_range(0..charset.len())]
}

/// Generates a 16-character password meeting all five criteria.
///
/// One character is drawn from each class, the rest from the union of
/// all classes, then the whole sequence is shuffled.
pub fn generate_suggestion_with_rng<R: Rng + ?Sized>(rng: &mut R) -> SecretString {
    let all: Vec<u8> = [UPPERCASE, LOWERCASE, DIGITS, SPECIALS].concat();

    let mut password: Vec<u8> = Vec::with_capacity(SUGGESTION_LENGTH);
    for charset in [UPPERCASE, LOWERCASE, DIGITS, SPECIALS] {
        password.push(pick(rng, charset));
    }
    while password.len() < SUGGESTION_LENGTH {
        password.push(pick(rng, &all));
    }
    password.shuffle(rng);

    #[cfg(feature = "tracing")]
    tracing::debug!("generated password suggestion of {} characters", password.len());

    let suggestion: String = password.into_iter().map(char::from).collect();
    SecretString::new(suggestion.into())
}

/// Generates a suggestion using the thread-local RNG.
pub fn generate_suggestion() -> SecretString {
    generate_suggestion_with_rng(&mut rand::thread_rng())
}
