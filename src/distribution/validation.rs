//! distribution::validation — shared input guards for numeric sequences.
//!
//! Purpose
//! -------
//! Centralize the checks applied to every numeric sequence entering the
//! crate, whether it becomes a distribution, a histogram, or the input of a
//! goodness-of-fit test. Keeping the guards here gives all callers the same
//! error kinds and the same precedence.
//!
//! Key behaviors
//! -------------
//! - Turn untyped JSON payloads into `Vec<f64>` with
//!   [`extract_numeric_sequence`], rejecting anything that is not a flat
//!   array of numbers.
//! - Validate a `(values, probabilities)` pair with [`validate_pair`] using a
//!   single, fixed precedence:
//!   1. type (finite numbers) on values, then on probabilities,
//!   2. emptiness on values, then on probabilities,
//!   3. negative probabilities,
//!   4. length mismatch,
//!   5. probability sum (rounded to three decimals).
//! - Validate a lone sequence with [`validate_sequence`] (type, then
//!   emptiness).
//!
//! Conventions
//! -----------
//! - Non-finite floats (NaN, ±∞) are treated as non-numeric and reported as
//!   [`DistributionError::Type`].
//! - Field names in errors are `"numbers"` and `"probabilities"` to match
//!   the wire vocabulary of the HTTP layer.
//!
//! Testing notes
//! -------------
//! - Unit tests cover each branch of [`validate_pair`] and its precedence,
//!   plus every rejection path of [`extract_numeric_sequence`].

use serde_json::Value;

use crate::distribution::errors::{DistributionError, DistributionResult};

/// Field label for the category values.
pub const VALUES_FIELD: &str = "numbers";

/// Field label for the probabilities.
pub const PROBABILITIES_FIELD: &str = "probabilities";

/// Number of decimals kept when checking that probabilities sum to one.
pub const SUM_DECIMALS: usize = 3;

/// Convert an untyped JSON value into a numeric sequence.
///
/// Parameters
/// ----------
/// - `raw`: `&Value`
///   Candidate sequence as received on the wire.
/// - `field`: `&'static str`
///   Name used in the error message.
///
/// Returns
/// -------
/// `DistributionResult<Vec<f64>>`
///   The elements as `f64`, in order. Emptiness is *not* checked here so that
///   callers can run type checks on all inputs before emptiness checks.
///
/// Errors
/// ------
/// - `DistributionError::Type`
///   When `raw` is `null`, an object, a scalar, or an array with any member
///   that is not a finite number (booleans and strings included).
pub fn extract_numeric_sequence(raw: &Value, field: &'static str) -> DistributionResult<Vec<f64>> {
    let items = match raw {
        Value::Null => return Err(DistributionError::Type { field, reason: "got null" }),
        Value::Object(_) => {
            return Err(DistributionError::Type { field, reason: "got a mapping" });
        }
        Value::Array(items) => items,
        _ => return Err(DistributionError::Type { field, reason: "expected an array" }),
    };

    items
        .iter()
        .map(|item| match item {
            Value::Number(n) => n
                .as_f64()
                .filter(|v| v.is_finite())
                .ok_or(DistributionError::Type { field, reason: "non-finite member" }),
            _ => Err(DistributionError::Type { field, reason: "non-numeric member" }),
        })
        .collect()
}

/// Validate a lone numeric sequence: finite members, then non-empty.
///
/// Errors
/// ------
/// - `DistributionError::Type` for a NaN or infinite member.
/// - `DistributionError::Empty` for a zero-length sequence.
pub fn validate_sequence(data: &[f64], field: &'static str) -> DistributionResult<()> {
    check_finite(data, field)?;
    check_non_empty(data, field)
}

/// Validate a `(values, probabilities)` pair.
///
/// Parameters
/// ----------
/// - `values`: `&[f64]`
///   Category values; duplicates are allowed.
/// - `probabilities`: `&[f64]`
///   Probability of each value, aligned by index.
///
/// Returns
/// -------
/// `DistributionResult<()>`
///   `Ok(())` when every rule holds; otherwise the first violation in the
///   precedence documented at module level.
///
/// Errors
/// ------
/// - `Type`, `Empty`, `NegativeProbability`, `LengthMismatch`,
///   `ProbabilitySum`, in that precedence.
///
/// Examples
/// --------
/// ```rust
/// # use randomgen::distribution::validation::validate_pair;
/// # use randomgen::distribution::errors::DistributionError;
/// assert!(validate_pair(&[1.0, 2.0], &[0.5, 0.5]).is_ok());
///
/// match validate_pair(&[1.0, 2.0], &[0.5, 0.4]) {
///     Err(DistributionError::ProbabilitySum { .. }) => (),
///     other => panic!("expected ProbabilitySum, got {other:?}"),
/// }
/// ```
pub fn validate_pair(values: &[f64], probabilities: &[f64]) -> DistributionResult<()> {
    check_finite(values, VALUES_FIELD)?;
    check_finite(probabilities, PROBABILITIES_FIELD)?;
    check_non_empty(values, VALUES_FIELD)?;
    check_non_empty(probabilities, PROBABILITIES_FIELD)?;
    check_non_negative(probabilities)?;

    if values.len() != probabilities.len() {
        return Err(DistributionError::LengthMismatch {
            values: values.len(),
            probabilities: probabilities.len(),
        });
    }

    check_probability_sum(probabilities)
}

/// Reject negative probabilities, reporting the first offender.
pub fn check_non_negative(probabilities: &[f64]) -> DistributionResult<()> {
    match probabilities.iter().position(|&p| p < 0.0) {
        Some(index) => {
            Err(DistributionError::NegativeProbability { index, value: probabilities[index] })
        }
        None => Ok(()),
    }
}

/// Require `round(sum, 3) == 1`, rounding the exact binary value of `sum`.
pub fn check_probability_sum(probabilities: &[f64]) -> DistributionResult<()> {
    let sum: f64 = probabilities.iter().sum();
    // Fixed-precision formatting rounds the exact binary value, so a sum
    // stored just below x.xxx5 rounds down rather than half away from zero.
    let rounded = format!("{sum:.prec$}", prec = SUM_DECIMALS);
    if matches!(rounded.parse::<f64>(), Ok(r) if r == 1.0) {
        Ok(())
    } else {
        Err(DistributionError::ProbabilitySum { sum })
    }
}

#[inline]
fn check_finite(data: &[f64], field: &'static str) -> DistributionResult<()> {
    if data.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(DistributionError::Type { field, reason: "non-finite member" })
    }
}

#[inline]
fn check_non_empty(data: &[f64], field: &'static str) -> DistributionResult<()> {
    if data.is_empty() { Err(DistributionError::Empty { field }) } else { Ok(()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Every rejection branch of `extract_numeric_sequence`.
    // - Every rejection branch of `validate_pair`, and the precedence between
    //   them when several rules are violated at once.
    // - The three-decimal tolerance of the sum check.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Non-array JSON shapes are rejected as type errors.
    //
    // Given
    // -----
    // - null, an object, a string, and a number.
    //
    // Expect
    // ------
    // - `DistributionError::Type` for each.
    fn extract_numeric_sequence_rejects_non_array_shapes() {
        // Arrange
        let inputs = [json!(null), json!({"1": 0.5}), json!("1,2,3"), json!(3)];

        // Act & Assert
        for raw in inputs.iter() {
            match extract_numeric_sequence(raw, VALUES_FIELD) {
                Err(DistributionError::Type { field, .. }) => assert_eq!(field, VALUES_FIELD),
                other => panic!("expected Type error for {raw}, got {other:?}"),
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Arrays with non-numeric members are rejected, and well-formed arrays
    // (including the empty one) pass through unchanged.
    fn extract_numeric_sequence_checks_members() {
        // Arrange
        let bad = [json!([1, "2", 3]), json!([1, true]), json!([1, null]), json!([[1], 2])];
        let good = json!([-1, 0, 1.5]);
        let empty = json!([]);

        // Act & Assert
        for raw in bad.iter() {
            assert!(
                matches!(extract_numeric_sequence(raw, VALUES_FIELD), Err(DistributionError::Type { .. })),
                "expected Type error for {raw}"
            );
        }
        assert_eq!(extract_numeric_sequence(&good, VALUES_FIELD), Ok(vec![-1.0, 0.0, 1.5]));
        assert_eq!(extract_numeric_sequence(&empty, VALUES_FIELD), Ok(vec![]));
    }

    #[test]
    // Purpose
    // -------
    // A valid pair, including a sum that is only correct to three decimals,
    // is accepted.
    fn validate_pair_valid_input_succeeds() {
        // Arrange
        let values = [-1.0, 0.0, 1.0, 2.0, 3.0];
        let probabilities = [0.01, 0.3, 0.58, 0.1, 0.01];
        let near_one = [0.3333, 0.3333, 0.3333];

        // Act & Assert
        assert_eq!(validate_pair(&values, &probabilities), Ok(()));
        assert_eq!(validate_pair(&[1.0, 2.0, 3.0], &near_one), Ok(()));
    }

    #[test]
    // Purpose
    // -------
    // Each rule is reported with its own error kind.
    fn validate_pair_reports_each_rule() {
        assert!(matches!(
            validate_pair(&[1.0, f64::NAN], &[0.5, 0.5]),
            Err(DistributionError::Type { field: VALUES_FIELD, .. })
        ));
        assert!(matches!(
            validate_pair(&[], &[1.0]),
            Err(DistributionError::Empty { field: VALUES_FIELD })
        ));
        assert!(matches!(
            validate_pair(&[1.0, 2.0], &[1.5, -0.5]),
            Err(DistributionError::NegativeProbability { index: 1, .. })
        ));
        assert!(matches!(
            validate_pair(&[1.0, 2.0, 3.0], &[0.5, 0.5]),
            Err(DistributionError::LengthMismatch { values: 3, probabilities: 2 })
        ));
        assert!(matches!(
            validate_pair(&[1.0, 2.0], &[0.5, 0.6]),
            Err(DistributionError::ProbabilitySum { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // When several rules are broken at once, the documented precedence
    // decides which error is reported.
    //
    // Given
    // -----
    // - Type + emptiness violations together.
    // - Emptiness + negativity violations together.
    // - Negativity + length mismatch together.
    // - Length mismatch + bad sum together.
    //
    // Expect
    // ------
    // - Type, Empty, NegativeProbability, LengthMismatch respectively.
    fn validate_pair_follows_documented_precedence() {
        assert!(matches!(
            validate_pair(&[], &[f64::INFINITY]),
            Err(DistributionError::Type { field: PROBABILITIES_FIELD, .. })
        ));
        assert!(matches!(
            validate_pair(&[1.0], &[]),
            Err(DistributionError::Empty { field: PROBABILITIES_FIELD })
        ));
        assert!(matches!(
            validate_pair(&[1.0], &[-0.2, 1.2]),
            Err(DistributionError::NegativeProbability { .. })
        ));
        assert!(matches!(
            validate_pair(&[1.0], &[0.2, 0.2]),
            Err(DistributionError::LengthMismatch { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // The sum check tolerates differences below the third decimal only.
    fn check_probability_sum_uses_three_decimals() {
        assert!(check_probability_sum(&[0.5, 0.5004]).is_ok());
        assert!(check_probability_sum(&[0.5, 0.4996]).is_ok());
        assert!(check_probability_sum(&[0.5, 0.502]).is_err());
        assert!(check_probability_sum(&[0.5, 0.498]).is_err());
    }

    #[test]
    // Purpose
    // -------
    // Rounding follows the exact binary value of the sum: the double
    // nearest 1.0005 lies just below it and rounds to 1.000.
    //
    // Given
    // -----
    // - Single-entry sums 1.0005, 1.0004, 1.0006, 0.9994.
    //
    // Expect
    // ------
    // - 1.0005 and 1.0004 pass; 1.0006 and 0.9994 fail.
    fn check_probability_sum_rounds_exact_binary_value() {
        assert!(check_probability_sum(&[1.0005]).is_ok());
        assert!(check_probability_sum(&[1.0004]).is_ok());
        assert!(matches!(
            check_probability_sum(&[1.0006]),
            Err(DistributionError::ProbabilitySum { .. })
        ));
        assert!(check_probability_sum(&[0.9994]).is_err());
    }

    #[test]
    fn validate_sequence_rejects_empty_and_non_finite() {
        assert!(matches!(validate_sequence(&[], "samples"), Err(DistributionError::Empty { .. })));
        assert!(matches!(
            validate_sequence(&[1.0, f64::NEG_INFINITY], "samples"),
            Err(DistributionError::Type { .. })
        ));
        assert_eq!(validate_sequence(&[1.0], "samples"), Ok(()));
    }
}
