//! statistical_tests::chi_square — Pearson chi-square goodness-of-fit test.
//!
//! Purpose
//! -------
//! Decide whether a sequence of draws is consistent with a categorical
//! distribution. The null hypothesis H₀ is that the draws were generated by
//! the expected probabilities.
//!
//! Key behaviors
//! -------------
//! - Count each distinct observed value (`Oₖ`, total `n`), derive expected
//!   counts `Eₖ = pₖ · n`, and compute
//!   χ² = Σₖ (Oₖ − Eₖ)² / Eₖ over the observed categories.
//! - Degrees of freedom are `k − 1`, where `k` is the number of distinct
//!   observed categories (no parameters are estimated from the data).
//! - The p-value is the χ²(k − 1) upper tail, `1 − F(χ²)`, via `statrs`.
//! - H₀ is accepted when `p_value > alpha`.
//!
//! Two ways of pairing categories with probabilities are offered:
//! - [`ChiSquareTest::calc`] looks each observed value up in a
//!   [`Distribution`], so categories that were never drawn cannot shift the
//!   alignment. The service uses this form.
//! - [`ChiSquareTest::calc_positional`] pairs the ascending observed
//!   categories with `expected_probabilities` by index. The caller must make
//!   sure both orders agree.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs pass `statistical_tests::validation` before counting.
//! - A zero expected count is an error ([`TestError::ZeroExpectedFrequency`]),
//!   never a NaN or infinite statistic.
//! - All arithmetic is `f64`; nothing is rounded.
//! - For `k = 1`, χ²(0) is the point mass at zero, so `p_value` is 1 when the
//!   statistic is zero and 0 otherwise.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the balanced and unbalanced two-category examples,
//!   zero expected counts, the one-category case, agreement between the two
//!   pairing modes, and a hand-computed statistic.

use serde::Serialize;
use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::distribution::Distribution;
use crate::statistical_tests::{
    errors::{TestError, TestResult},
    histogram::count_categories,
    validation::{validate_alpha, validate_expected, validate_observed},
};

/// Significance level used when none is configured.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// GoodnessOfFit — outcome of one chi-square test.
///
/// Fields
/// ------
/// - `accepts_null`: `bool`
///   `p_value > alpha` for the alpha the test was run with.
/// - `chi_square`: `f64`
///   Pearson statistic over the observed categories; finite and ≥ 0.
/// - `p_value`: `f64`
///   Upper-tail probability in [0, 1].
/// - `degrees_of_freedom`: `usize`
///   Distinct observed categories minus one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoodnessOfFit {
    accepts_null: bool,
    chi_square: f64,
    p_value: f64,
    degrees_of_freedom: usize,
}

impl GoodnessOfFit {
    pub fn accepts_null(&self) -> bool {
        self.accepts_null
    }

    pub fn chi_square(&self) -> f64 {
        self.chi_square
    }

    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    pub fn degrees_of_freedom(&self) -> usize {
        self.degrees_of_freedom
    }

    /// Re-evaluate the decision at another significance level.
    pub fn accepts_null_at(&self, alpha: f64) -> bool {
        self.p_value > alpha
    }
}

/// ChiSquareTest — a configured chi-square goodness-of-fit test.
///
/// Parameters
/// ----------
/// Constructed via [`ChiSquareTest::new`] with a significance level
/// `0 < alpha < 1`, or [`Default`] for `alpha = 0.05`.
///
/// Examples
/// --------
/// ```rust
/// use randomgen::statistical_tests::ChiSquareTest;
///
/// let test = ChiSquareTest::default();
/// let balanced = test.calc_positional(&[1.0, 1.0, 1.0, 2.0, 2.0, 2.0], &[0.5, 0.5]).unwrap();
/// assert!(balanced.accepts_null());
///
/// let skewed = test.calc_positional(&[1.0, 1.0, 1.0, 2.0, 2.0, 2.0], &[0.1, 0.9]).unwrap();
/// assert!(!skewed.accepts_null());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiSquareTest {
    alpha: f64,
}

impl Default for ChiSquareTest {
    fn default() -> Self {
        ChiSquareTest { alpha: DEFAULT_ALPHA }
    }
}

impl ChiSquareTest {
    /// Build a test at significance level `alpha`.
    ///
    /// Errors
    /// ------
    /// - `TestError::InvalidAlpha(alpha)` unless `0 < alpha < 1`.
    pub fn new(alpha: f64) -> TestResult<Self> {
        validate_alpha(alpha)?;
        Ok(ChiSquareTest { alpha })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Test `observed` against `expected`, matching categories by value.
    ///
    /// Parameters
    /// ----------
    /// - `observed`: `&[f64]`
    ///   Draws to test; finite and non-empty.
    /// - `expected`: `&Distribution`
    ///   Reference distribution. Each observed value's probability is
    ///   [`Distribution::probability_of`], so duplicate values aggregate.
    ///
    /// Errors
    /// ------
    /// - `TestError::Input` for malformed `observed`.
    /// - `TestError::ZeroExpectedFrequency { value }` when an observed value
    ///   has zero probability under `expected`, including values that are
    ///   not configured at all.
    pub fn calc(&self, observed: &[f64], expected: &Distribution) -> TestResult<GoodnessOfFit> {
        validate_observed(observed)?;
        let counts = count_categories(observed);
        let probabilities: Vec<f64> =
            counts.iter().map(|&(value, _)| expected.probability_of(value)).collect();
        self.evaluate(&counts, &probabilities, observed.len())
    }

    /// Test `observed` against probabilities aligned by sorted position.
    ///
    /// The `k`-th smallest distinct observed value is paired with
    /// `expected_probabilities[k]`; surplus probabilities are ignored.
    ///
    /// Errors
    /// ------
    /// - `TestError::Input` for malformed inputs (see
    ///   [`validate_expected`]).
    /// - `TestError::CategoryCountMismatch` when there are more distinct
    ///   observed values than probabilities.
    /// - `TestError::ZeroExpectedFrequency { value }` for a zero probability.
    pub fn calc_positional(
        &self, observed: &[f64], expected_probabilities: &[f64],
    ) -> TestResult<GoodnessOfFit> {
        validate_observed(observed)?;
        validate_expected(expected_probabilities)?;
        let counts = count_categories(observed);
        if counts.len() > expected_probabilities.len() {
            return Err(TestError::CategoryCountMismatch {
                observed: counts.len(),
                expected: expected_probabilities.len(),
            });
        }
        self.evaluate(&counts, &expected_probabilities[..counts.len()], observed.len())
    }

    fn evaluate(
        &self, counts: &[(f64, usize)], probabilities: &[f64], total: usize,
    ) -> TestResult<GoodnessOfFit> {
        let chi_square = calc_chi_square(counts, probabilities, total)?;
        let degrees_of_freedom = counts.len() - 1;
        let p_value = calc_p_value(chi_square, degrees_of_freedom);

        Ok(GoodnessOfFit {
            accepts_null: p_value > self.alpha,
            chi_square,
            p_value,
            degrees_of_freedom,
        })
    }
}

/// Pearson statistic Σ (Oₖ − Eₖ)² / Eₖ with Eₖ = pₖ · total.
///
/// `counts` and `probabilities` are aligned by index.
#[inline]
fn calc_chi_square(counts: &[(f64, usize)], probabilities: &[f64], total: usize) -> TestResult<f64> {
    let n = total as f64;
    counts.iter().zip(probabilities).try_fold(0.0, |acc, (&(value, count), &p)| {
        let expected = p * n;
        if expected <= 0.0 {
            return Err(TestError::ZeroExpectedFrequency { value });
        }
        Ok(acc + (count as f64 - expected).powi(2) / expected)
    })
}

/// Upper-tail probability of χ²(df) at `stat`.
///
/// χ²(0) is the point mass at zero, which `statrs` does not build; every
/// `df > 0` is accepted by `ChiSquared::new`.
#[inline]
fn calc_p_value(stat: f64, df: usize) -> f64 {
    let point_mass = || if stat == 0.0 { 1.0 } else { 0.0 };
    if df == 0 {
        return point_mass();
    }
    ChiSquared::new(df as f64).map_or_else(|_| point_mass(), |law| 1.0 - law.cdf(stat))
}
