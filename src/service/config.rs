//! service::config — stored configuration and start-up options.
//!
//! Purpose
//! -------
//! Hold the built-in defaults and the two configuration carriers of the
//! service:
//! - [`ServiceConfiguration`], the mutable `(values, probabilities,
//!   max_quantity)` triple read by every generate call, and
//! - [`ServiceOptions`], the immutable start-up choices (defaults to reset
//!   to, significance level, RNG seed).
//!
//! Invariants & assumptions
//! ------------------------
//! - A `ServiceConfiguration` built through [`ServiceConfiguration::new`]
//!   or [`Default`] always holds a valid distribution and
//!   `max_quantity ≥ 1`.
//! - `ServiceOptions` values are validated at construction; the service
//!   trusts them afterwards.
//!
//! Testing notes
//! -------------
//! - Unit tests check the built-in defaults and option validation.

use crate::distribution::{Distribution, DistributionResult};
use crate::service::errors::{ServiceError, ServiceResult};
use crate::statistical_tests::ChiSquareTest;

/// Built-in category values.
pub const DEFAULT_VALUES: [f64; 5] = [-1.0, 0.0, 1.0, 2.0, 3.0];

/// Built-in probabilities, aligned with [`DEFAULT_VALUES`].
pub const DEFAULT_PROBABILITIES: [f64; 5] = [0.01, 0.3, 0.58, 0.1, 0.01];

/// Built-in ceiling on draws per generate call.
pub const DEFAULT_MAX_QUANTITY: usize = 10_000;

/// ServiceConfiguration — the distribution and limit used by generate.
///
/// Fields
/// ------
/// - `values`, `probabilities`: the configured distribution, in caller
///   order.
/// - `max_quantity`: largest accepted `quantity` for a generate call.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfiguration {
    pub values: Vec<f64>,
    pub probabilities: Vec<f64>,
    pub max_quantity: usize,
}

impl Default for ServiceConfiguration {
    fn default() -> Self {
        ServiceConfiguration {
            values: DEFAULT_VALUES.to_vec(),
            probabilities: DEFAULT_PROBABILITIES.to_vec(),
            max_quantity: DEFAULT_MAX_QUANTITY,
        }
    }
}

impl ServiceConfiguration {
    /// Build a validated configuration.
    ///
    /// Errors
    /// ------
    /// - `ServiceError::Distribution` if `(values, probabilities)` is not a
    ///   valid distribution.
    /// - `ServiceError::InvalidMaxQuantity(0)` if `max_quantity == 0`.
    pub fn new(
        values: Vec<f64>, probabilities: Vec<f64>, max_quantity: usize,
    ) -> ServiceResult<Self> {
        if max_quantity == 0 {
            return Err(ServiceError::InvalidMaxQuantity(max_quantity));
        }
        let dist = Distribution::new(values, probabilities)?;
        Ok(ServiceConfiguration::from_distribution(dist, max_quantity))
    }

    pub(crate) fn from_distribution(dist: Distribution, max_quantity: usize) -> Self {
        ServiceConfiguration {
            values: dist.values().to_vec(),
            probabilities: dist.probabilities().to_vec(),
            max_quantity,
        }
    }

    /// Rebuild the validated distribution from the stored pair.
    pub fn distribution(&self) -> DistributionResult<Distribution> {
        Distribution::new(self.values.clone(), self.probabilities.clone())
    }
}

/// ServiceOptions — start-up configuration for a `SamplingService`.
///
/// Fields
/// ------
/// - `defaults`: configuration installed at start-up and restored by
///   `reset`.
/// - `test`: chi-square test (significance level) applied to every report.
/// - `seed`: `Some(seed)` makes the draw sequence reproducible across
///   restarts; `None` seeds from OS entropy.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceOptions {
    pub defaults: ServiceConfiguration,
    pub test: ChiSquareTest,
    pub seed: Option<u64>,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        ServiceOptions {
            defaults: ServiceConfiguration::default(),
            test: ChiSquareTest::default(),
            seed: None,
        }
    }
}

impl ServiceOptions {
    /// Options with built-in values/probabilities and the given knobs.
    ///
    /// Errors
    /// ------
    /// - `ServiceError::InvalidMaxQuantity` for `max_quantity == 0`.
    /// - `ServiceError::Test(TestError::InvalidAlpha)` unless `0 < alpha < 1`.
    pub fn new(max_quantity: usize, alpha: f64, seed: Option<u64>) -> ServiceResult<Self> {
        let defaults = ServiceConfiguration::new(
            DEFAULT_VALUES.to_vec(),
            DEFAULT_PROBABILITIES.to_vec(),
            max_quantity,
        )?;
        let test = ChiSquareTest::new(alpha)?;
        Ok(ServiceOptions { defaults, test, seed })
    }

    pub fn alpha(&self) -> f64 {
        self.test.alpha()
    }
}
