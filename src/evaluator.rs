//! Password evaluator - main evaluation logic.

use rand::Rng;
use secrecy::{ExposeSecret, SecretString};

use crate::error::EvaluationError;
use crate::generator::generate_suggestion_with_rng;
use crate::sections::{
    CriteriaResult, WeakPattern, check_criteria, cracking_time_section, format_cracking_time,
    pattern_analysis_section,
};
use crate::strength::{Strength, classify_strength, fulfilled_count};

/// Full result of evaluating one password.
#[derive(Debug)]
pub struct PasswordEvaluation {
    pub criteria: CriteriaResult,
    pub weak_pattern: Option<WeakPattern>,
    pub cracking_time_years: f64,
    pub strength: Strength,
    /// Present only when `strength` is [`Strength::Weak`].
    pub suggested_password: Option<SecretString>,
}

impl PasswordEvaluation {
    pub fn has_common_pattern(&self) -> bool {
        self.weak_pattern.is_some()
    }

    /// Fulfilled criteria count, 0 to 6.
    pub fn fulfilled(&self) -> u8 {
        fulfilled_count(&self.criteria, self.has_common_pattern())
    }

    pub fn cracking_time_text(&self) -> String {
        format_cracking_time(self.cracking_time_years)
    }

    /// One message per unmet criterion, plus the weak pattern if any.
    pub fn reasons(&self) -> Vec<String> {
        let mut reasons = self.criteria.reasons();
        if let Some(pattern) = self.weak_pattern {
            reasons.push(pattern.to_string());
        }
        reasons
    }
}

/// Evaluates password strength using the thread-local RNG for suggestions.
///
/// # Errors
/// Returns [`EvaluationError::EmptyPassword`] for an empty password.
pub fn evaluate_password(password: &SecretString) -> Result<PasswordEvaluation, EvaluationError> {
    evaluate_password_with_rng(password, &mut rand::thread_rng())
}

/// Evaluates password strength, drawing any suggestion from `rng`.
///
/// # Errors
/// Returns [`EvaluationError::EmptyPassword`] for an empty password.
pub fn evaluate_password_with_rng<R: Rng + ?Sized>(
    password: &SecretString,
    rng: &mut R,
) -> Result<PasswordEvaluation, EvaluationError> {
    if password.expose_secret().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::debug!("rejected empty password");
        return Err(EvaluationError::EmptyPassword);
    }

    // Sections are independent of each other
    let criteria = check_criteria(password);
    let weak_pattern = pattern_analysis_section(password);
    let cracking_time_years = cracking_time_section(password);

    let strength = classify_strength(&criteria, weak_pattern.is_some(), cracking_time_years);

    let suggested_password = match strength {
        Strength::Weak => Some(generate_suggestion_with_rng(rng)),
        Strength::Medium | Strength::Strong => None,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        strength = %strength,
        fulfilled = fulfilled_count(&criteria, weak_pattern.is_some()),
        years = cracking_time_years,
        "password evaluated"
    );

    Ok(PasswordEvaluation {
        criteria,
        weak_pattern,
        cracking_time_years,
        strength,
        suggested_password,
    })
}
