//! statistical_tests::errors — error types for histograms and fit tests.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the empirical histogram and
//! the chi-square goodness-of-fit test. Input-shape failures reuse
//! [`DistributionError`] so that a malformed sequence is reported the same
//! way everywhere in the crate.
//!
//! Key behaviors
//! -------------
//! - Define [`TestResult`] and [`TestError`] as the canonical result and
//!   error types for this subtree.
//! - Wrap [`DistributionError`] via `From`, so guards from
//!   `distribution::validation` compose with `?`.
//!
//! Conventions
//! -----------
//! - Error messages are phrased in terms of the statistical constraint
//!   ("expected frequency must be positive") rather than the arithmetic that
//!   would have failed.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that `Display` messages embed their payloads and that
//!   wrapped input errors keep their original message.

use crate::distribution::DistributionError;

pub type TestResult<T> = Result<T, TestError>;

/// TestError — failures of the histogram builder and the chi-square test.
///
/// Variants
/// --------
/// - `Input(DistributionError)`
///   Observed samples or expected probabilities are malformed (non-finite,
///   empty, negative).
/// - `ZeroExpectedFrequency { value }`
///   The expected count for observed category `value` is zero, so the
///   chi-square term `(O − E)² / E` is undefined.
/// - `CategoryCountMismatch { observed, expected }`
///   Positional alignment was requested but fewer expected probabilities
///   than observed categories were supplied.
/// - `InvalidAlpha(alpha)`
///   The significance level is outside the open interval (0, 1).
#[derive(Debug, Clone, PartialEq)]
pub enum TestError {
    Input(DistributionError),
    ZeroExpectedFrequency { value: f64 },
    CategoryCountMismatch { observed: usize, expected: usize },
    InvalidAlpha(f64),
}

impl std::error::Error for TestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TestError::Input(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for TestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestError::Input(err) => write!(f, "{err}"),
            TestError::ZeroExpectedFrequency { value } => {
                write!(f, "Expected frequency for category {value} is zero; chi-square is undefined.")
            }
            TestError::CategoryCountMismatch { observed, expected } => {
                write!(
                    f,
                    "Observed {observed} distinct categories but only {expected} expected probabilities."
                )
            }
            TestError::InvalidAlpha(alpha) => {
                write!(f, "Invalid significance level: {alpha}. Must satisfy 0 < alpha < 1.")
            }
        }
    }
}

impl From<DistributionError> for TestError {
    fn from(err: DistributionError) -> Self {
        TestError::Input(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Payload-carrying variants embed their values in `Display`.
    fn test_error_display_embeds_payloads() {
        // Arrange
        let zero = TestError::ZeroExpectedFrequency { value: 4.0 };
        let mismatch = TestError::CategoryCountMismatch { observed: 6, expected: 2 };
        let alpha = TestError::InvalidAlpha(1.5);

        // Act & Assert
        assert!(zero.to_string().contains('4'));
        let msg = mismatch.to_string();
        assert!(msg.contains('6') && msg.contains('2'), "Got: {msg}");
        assert!(alpha.to_string().contains("1.5"));
    }

    #[test]
    // Purpose
    // -------
    // A wrapped input error keeps its original message and exposes it as
    // the error source.
    fn test_error_input_preserves_distribution_message() {
        // Arrange
        let inner = DistributionError::Empty { field: "samples" };

        // Act
        let err: TestError = inner.clone().into();

        // Assert
        assert_eq!(err.to_string(), inner.to_string());
        assert!(std::error::Error::source(&err).is_some());
    }
}
