//! distribution::categorical — validated discrete distributions.
//!
//! Purpose
//! -------
//! Represent a finite categorical distribution over numeric values together
//! with its cumulative-probability table, the input shared by both sampling
//! strategies and by the goodness-of-fit test.
//!
//! Key behaviors
//! -------------
//! - Validate `(values, probabilities)` once at construction via
//!   [`validate_pair`]; a [`Distribution`] value is always well formed.
//! - Precompute `cumulative[i] = p₀ + … + pᵢ` for inverse-CDF sampling.
//! - Expose the probability mass function keyed by value ([`Distribution::pmf`],
//!   [`Distribution::probability_of`]) so callers never have to rely on
//!   positional alignment between categories and probabilities.
//!
//! Invariants & assumptions
//! ------------------------
//! - `values.len() == probabilities.len() == cumulative.len() > 0`.
//! - Every entry is finite, probabilities are non-negative, and
//!   `round(Σ pᵢ, 3) == 1`, so `cumulative` is non-decreasing and its last
//!   entry is within 5·10⁻⁴ of one.
//! - Duplicate values are allowed; their probabilities add up in the PMF.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the cumulative table, PMF aggregation of duplicates,
//!   and construction from JSON payloads.

use std::cmp::Ordering;

use serde_json::Value;

use crate::distribution::{
    errors::DistributionResult,
    validation::{extract_numeric_sequence, validate_pair, PROBABILITIES_FIELD, VALUES_FIELD},
};

/// Distribution — a validated categorical distribution over `f64` values.
///
/// Fields
/// ------
/// - `values`: `Vec<f64>`
///   Category values, in caller order.
/// - `probabilities`: `Vec<f64>`
///   Probability of each value, aligned by index.
/// - `cumulative`: `Vec<f64>`
///   Running sum of `probabilities`.
///
/// Notes
/// -----
/// - Immutable after construction; build a new value whenever the
///   configuration changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    values: Vec<f64>,
    probabilities: Vec<f64>,
    cumulative: Vec<f64>,
}

impl Distribution {
    /// Validate a `(values, probabilities)` pair and build its cumulative table.
    ///
    /// Errors
    /// ------
    /// - Any [`DistributionError`](crate::distribution::errors::DistributionError)
    ///   raised by [`validate_pair`], in its documented precedence.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use randomgen::distribution::Distribution;
    ///
    /// let dist = Distribution::new(vec![1.0, 2.0, 3.0], vec![0.2, 0.2, 0.6]).unwrap();
    /// assert_eq!(dist.len(), 3);
    /// assert!((dist.cumulative()[2] - 1.0).abs() < 1e-12);
    /// ```
    pub fn new(values: Vec<f64>, probabilities: Vec<f64>) -> DistributionResult<Self> {
        validate_pair(&values, &probabilities)?;
        let cumulative = calc_cumulative(&probabilities);
        Ok(Distribution { values, probabilities, cumulative })
    }

    /// Build a distribution from untyped JSON sequences.
    ///
    /// Both inputs are type-checked before either is checked for emptiness,
    /// so the error precedence matches [`Distribution::new`].
    pub fn from_json(values: &Value, probabilities: &Value) -> DistributionResult<Self> {
        let values = extract_numeric_sequence(values, VALUES_FIELD)?;
        let probabilities = extract_numeric_sequence(probabilities, PROBABILITIES_FIELD)?;
        Distribution::new(values, probabilities)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Total probability assigned to `value` (0.0 when the value is absent).
    pub fn probability_of(&self, value: f64) -> f64 {
        self.values
            .iter()
            .zip(&self.probabilities)
            .filter(|(v, _)| **v == value)
            .map(|(_, &p)| p)
            .sum()
    }

    /// Probability mass function in ascending value order.
    ///
    /// Returns
    /// -------
    /// `Vec<(f64, f64)>`
    ///   One `(value, probability)` entry per distinct value; probabilities of
    ///   duplicate values are summed.
    pub fn pmf(&self) -> Vec<(f64, f64)> {
        let mut pairs: Vec<(f64, f64)> = self
            .values
            .iter()
            .map(|&v| canonical(v))
            .zip(self.probabilities.iter().copied())
            .collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut merged: Vec<(f64, f64)> = Vec::with_capacity(pairs.len());
        for (value, probability) in pairs {
            match merged.last_mut() {
                Some(last) if last.0.total_cmp(&value) == Ordering::Equal => last.1 += probability,
                _ => merged.push((value, probability)),
            }
        }
        merged
    }
}

/// Fold `-0.0` into `0.0` so equal values share one category key.
#[inline]
pub(crate) fn canonical(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

#[inline]
fn calc_cumulative(probabilities: &[f64]) -> Vec<f64> {
    probabilities
        .iter()
        .scan(0.0, |acc, &p| {
            *acc += p;
            Some(*acc)
        })
        .collect()
}
