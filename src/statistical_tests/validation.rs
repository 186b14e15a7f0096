//! statistical_tests::validation — input guards for fit tests.
//!
//! Purpose
//! -------
//! Check the inputs of the goodness-of-fit routines before any counting is
//! done. The guards delegate the per-sequence rules to
//! `distribution::validation` so that malformed data is reported with the
//! same error kinds as a malformed distribution.
//!
//! Invariants & assumptions
//! ------------------------
//! - Observed samples: finite and non-empty.
//! - Expected probabilities: finite, non-empty, and non-negative. They are
//!   *not* required to sum to one here; callers comparing against a subset
//!   of categories may pass a partial vector.
//! - Significance level: `0 < alpha < 1`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover each rejection branch and a simple success path.

use crate::distribution::validation::{check_non_negative, validate_sequence, PROBABILITIES_FIELD};
use crate::statistical_tests::errors::{TestError, TestResult};

/// Field label for observed samples.
pub const SAMPLES_FIELD: &str = "samples";

/// Validate observed samples: finite members, then non-empty.
///
/// Errors
/// ------
/// - `TestError::Input(DistributionError::Type)` for a non-finite sample.
/// - `TestError::Input(DistributionError::Empty)` for no samples.
pub fn validate_observed(samples: &[f64]) -> TestResult<()> {
    validate_sequence(samples, SAMPLES_FIELD)?;
    Ok(())
}

/// Validate expected probabilities: finite, non-empty, non-negative.
pub fn validate_expected(probabilities: &[f64]) -> TestResult<()> {
    validate_sequence(probabilities, PROBABILITIES_FIELD)?;
    check_non_negative(probabilities)?;
    Ok(())
}

/// Validate a significance level.
///
/// Errors
/// ------
/// - `TestError::InvalidAlpha(alpha)` unless `0 < alpha < 1` (NaN included).
pub fn validate_alpha(alpha: f64) -> TestResult<()> {
    if alpha > 0.0 && alpha < 1.0 { Ok(()) } else { Err(TestError::InvalidAlpha(alpha)) }
}
