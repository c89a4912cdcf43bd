//! # Error Types
//!
//! Classified outcomes for the two stages of a calculation. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! Each error carries two user-facing strings: a short `message()` label and
//! a longer `details()` explanation. Both are fixed text (apart from the
//! configured ceiling), so nothing about the process leaks through them.

use thiserror::Error;

/// Top-level error type for a Nigel Number request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NigelError {
    /// The raw input was rejected before any computation started.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The engine failed on an input that had already been validated.
    #[error(transparent)]
    Calculation(#[from] CalculationError),
}

/// Input rejected by the [`Validator`](crate::Validator).
///
/// All variants are recoverable by the caller correcting the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The parameter was not supplied at all.
    #[error("Missing required parameter")]
    MissingParameter,

    /// The parameter is present but is not a base-10 integer.
    #[error("Invalid input type")]
    InvalidType,

    /// The parameter is an integer ≤ 0.
    #[error("Invalid input value")]
    NonPositive,

    /// The parameter is an integer above the configured ceiling.
    #[error("Invalid input value")]
    ExceedsMaximum {
        /// The ceiling in force when the input was rejected.
        max_n: u64,
    },
}

impl ValidationError {
    /// Short human-readable label.
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingParameter => "Missing required parameter",
            Self::InvalidType => "Invalid input type",
            Self::NonPositive | Self::ExceedsMaximum { .. } => "Invalid input value",
        }
    }

    /// Longer explanation naming the parameter and the constraint it broke.
    pub fn details(&self) -> String {
        match self {
            Self::MissingParameter => "Parameter 'n' is required".to_string(),
            Self::InvalidType => "Parameter 'n' must be a positive integer".to_string(),
            Self::NonPositive => "Parameter 'n' must be greater than 0".to_string(),
            Self::ExceedsMaximum { max_n } => format!("Parameter 'n' must not exceed {max_n}"),
        }
    }

    /// Machine-readable kind, stable across releases. Intended for logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingParameter => "MISSING_PARAMETER",
            Self::InvalidType => "INVALID_TYPE",
            Self::NonPositive => "NON_POSITIVE",
            Self::ExceedsMaximum { .. } => "EXCEEDS_MAXIMUM",
        }
    }
}

/// Unexpected failure inside the [`PrimeSumEngine`](crate::PrimeSumEngine).
///
/// The engine only sees validated input, so the sole kind is an internal
/// failure (allocation refused, arithmetic overflow, a crashed worker). The
/// carried reason is for operators; clients only ever see the fixed
/// `message()` and `details()`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculationError {
    /// Resource exhaustion or any other unexpected fault.
    #[error("internal failure: {0}")]
    InternalFailure(String),
}

impl CalculationError {
    /// Short human-readable label.
    pub fn message(&self) -> &'static str {
        "Internal server error"
    }

    /// Fixed explanation. Never includes the internal reason.
    pub fn details(&self) -> String {
        "An unexpected error occurred during calculation".to_string()
    }

    /// Machine-readable kind. Intended for logs.
    pub fn code(&self) -> &'static str {
        "INTERNAL_FAILURE"
    }

    /// Operator-facing reason for the failure.
    pub fn reason(&self) -> &str {
        match self {
            Self::InternalFailure(reason) => reason,
        }
    }
}
