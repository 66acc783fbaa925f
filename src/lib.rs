//! Password strength evaluation library
//!
//! Scores a password with a handful of heuristics: minimum length,
//! character variety, weak-pattern detection and a brute-force cracking
//! time estimate. Weak passwords come back with a generated replacement.
//!
//! # Features
//!
//! - `server` (default): HTTP API and the `pwd-evaluator` binary
//! - `serde`: Serialize/Deserialize for [`Strength`]
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_evaluator::{evaluate_password, Strength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Hello@World2024".to_string().into());
//! let evaluation = evaluate_password(&password).expect("non-empty password");
//!
//! assert_eq!(evaluation.strength, Strength::Strong);
//! assert!(evaluation.suggested_password.is_none());
//! ```

mod error;
mod evaluator;
mod generator;
mod sections;
mod strength;

#[cfg(feature = "server")]
pub mod server;

// Public API
pub use error::EvaluationError;
pub use evaluator::{PasswordEvaluation, evaluate_password, evaluate_password_with_rng};
pub use generator::{SUGGESTION_LENGTH, generate_suggestion, generate_suggestion_with_rng};
pub use sections::{
    COMMON_PASSWORDS, CharacterVariety, CriteriaResult, GUESSES_PER_SECOND, KEYBOARD_PATTERNS,
    MIN_LENGTH, SPECIAL_CHARS, WeakPattern, charset_size, check_criteria, detect_pattern,
    estimate_cracking_years, find_weak_pattern, format_cracking_time,
};
pub use strength::{Strength, classify_strength, fulfilled_count, strength_from_fulfilled};
