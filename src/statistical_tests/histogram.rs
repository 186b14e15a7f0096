//! statistical_tests::histogram — empirical probability mass functions.
//!
//! Purpose
//! -------
//! Summarize a sequence of draws as an empirical PMF: one bin per distinct
//! observed value holding its count and relative frequency.
//!
//! Key behaviors
//! -------------
//! - [`Histogram::build`] validates the samples, counts occurrences, and
//!   sorts bins by ascending value.
//! - Only observed categories appear; values never drawn are absent rather
//!   than zero-filled.
//! - Serializes as a JSON object `{"<value>": frequency, ...}` in ascending
//!   value order, the shape returned by the HTTP layer.
//!
//! Invariants & assumptions
//! ------------------------
//! - `bins` is strictly ascending by value and non-empty.
//! - `Σ count == total` and `Σ frequency ≈ 1`.
//! - `-0.0` and `0.0` are the same category.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the uniform five-value example, ordering, idempotence,
//!   input rejection, and the JSON shape.

use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::distribution::categorical::canonical;
use crate::statistical_tests::{errors::TestResult, validation::validate_observed};

/// One histogram bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub value: f64,
    pub count: usize,
    pub frequency: f64,
}

/// Histogram — empirical PMF over the distinct observed values.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    bins: Vec<Bin>,
    total: usize,
}

impl Histogram {
    /// Build the histogram of `samples`.
    ///
    /// Parameters
    /// ----------
    /// - `samples`: `&[f64]`
    ///   Observed draws; must be non-empty and finite.
    ///
    /// Returns
    /// -------
    /// `TestResult<Histogram>`
    ///   Bins sorted by ascending value with `frequency = count / total`.
    ///
    /// Errors
    /// ------
    /// - `TestError::Input(DistributionError::Type)` for a non-finite sample.
    /// - `TestError::Input(DistributionError::Empty)` for no samples.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use randomgen::statistical_tests::Histogram;
    ///
    /// let hist = Histogram::build(&[2.0, 1.0, 2.0, 2.0]).unwrap();
    /// assert_eq!(hist.frequency(1.0), Some(0.25));
    /// assert_eq!(hist.frequency(2.0), Some(0.75));
    /// assert_eq!(hist.frequency(3.0), None);
    /// ```
    pub fn build(samples: &[f64]) -> TestResult<Self> {
        validate_observed(samples)?;
        let total = samples.len();
        let bins = count_categories(samples)
            .into_iter()
            .map(|(value, count)| Bin { value, count, frequency: count as f64 / total as f64 })
            .collect();
        Ok(Histogram { bins, total })
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Number of samples the histogram was built from.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct observed values.
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn count(&self, value: f64) -> Option<usize> {
        self.find(value).map(|bin| bin.count)
    }

    pub fn frequency(&self, value: f64) -> Option<f64> {
        self.find(value).map(|bin| bin.frequency)
    }

    /// `(value, frequency)` pairs in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.bins.iter().map(|bin| (bin.value, bin.frequency))
    }

    fn find(&self, value: f64) -> Option<&Bin> {
        let key = canonical(value);
        self.bins
            .binary_search_by(|bin| bin.value.total_cmp(&key))
            .ok()
            .map(|i| &self.bins[i])
    }
}

impl Serialize for Histogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_pmf(self.iter(), self.len(), serializer)
    }
}

/// Count each distinct value, ascending by value.
///
/// Assumes `samples` already passed validation (finite members).
pub(crate) fn count_categories(samples: &[f64]) -> Vec<(f64, usize)> {
    let mut sorted: Vec<f64> = samples.iter().map(|&v| canonical(v)).collect();
    sorted.sort_by(f64::total_cmp);

    let mut counts: Vec<(f64, usize)> = Vec::new();
    for value in sorted {
        match counts.last_mut() {
            Some((last, count)) if *last == value => *count += 1,
            _ => counts.push((value, 1)),
        }
    }
    counts
}

/// Serialize `(value, probability)` pairs as a JSON-style map keyed by the
/// value's decimal text.
pub(crate) fn serialize_pmf<S, I>(entries: I, len: usize, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut map = serializer.serialize_map(Some(len))?;
    for (value, probability) in entries {
        map.serialize_entry(&value.to_string(), &probability)?;
    }
    map.end()
}
