//! Error types.

use thiserror::Error;

/// Input rejected before evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("Password cannot be empty")]
    EmptyPassword,
}
