//! service::engine — the sampling service orchestrating draw and test.
//!
//! Purpose
//! -------
//! Own the current [`ServiceConfiguration`] and expose the four operations
//! of the service: describe, configure, reset, and generate. A generate
//! call wires a [`SamplerKind`] strategy, the empirical [`Histogram`], and
//! the [`ChiSquareTest`] into one [`GenerateReport`].
//!
//! Key behaviors
//! -------------
//! - `configure` validates the new pair before touching shared state; on
//!   failure the stored configuration is unchanged.
//! - `reset` reinstalls the start-up defaults and always succeeds.
//! - `generate` enforces `1 ≤ quantity ≤ max_quantity`, then draws from a
//!   snapshot of the configuration taken under the read lock.
//!
//! Invariants & assumptions
//! ------------------------
//! - The stored configuration is only ever replaced as a whole; readers
//!   never observe a half-updated values/probabilities pair.
//! - The RNG is shared behind a mutex; with a fixed seed the sequence of
//!   draws across calls is reproducible for a given call order.
//! - A poisoned lock is recovered rather than propagated: every writer
//!   replaces the whole value, so the guarded data is never left partial.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use randomgen::sampling::SamplerKind;
//! use randomgen::service::SamplingService;
//!
//! let service = SamplingService::default();
//! let report = service.generate(SamplerKind::InverseCdf, 100).unwrap();
//! assert_eq!(report.draws.len(), 100);
//! ```
//!
//! Testing notes
//! -------------
//! - Unit tests cover the quantity limits, the configure/reset state
//!   machine, and seeded reproducibility; HTTP behaviour is tested in
//!   `server::routes`.

use std::sync::{Mutex, PoisonError, RwLock};

use rand::rngs::StdRng;
use rand::Rng;
use serde_json::Value;
use tracing::{debug, info};

use crate::distribution::Distribution;
use crate::sampling::{seeded_rng, SamplerKind};
use crate::service::config::{ServiceConfiguration, ServiceOptions};
use crate::service::errors::{ServiceError, ServiceResult};
use crate::service::report::{ExpectedHistogram, GenerateReport, Quality};
use crate::statistical_tests::{ChiSquareTest, Histogram};

const DESCRIPTION: &str = "\
Weighted random number generator.

Draws numbers from a configurable discrete distribution and checks each batch \
with a chi-square goodness-of-fit test.

  GET  /api/v1/randomgen?numbers=N   draw N numbers (inverse-CDF sampler)
  GET  /api/v2/randomgen?numbers=N   draw N numbers (weighted-choice sampler)
  POST /api/config                   set {\"numbers\": [...], \"probabilities\": [...]}
  POST /api/reset                    restore the default distribution
";

/// SamplingService — shared, thread-safe sampling engine.
///
/// Fields
/// ------
/// - `config`: current configuration, swapped whole under the write lock.
/// - `defaults`: configuration restored by [`SamplingService::reset`].
/// - `test`: goodness-of-fit test applied to every batch.
/// - `rng`: the service's random source.
#[derive(Debug)]
pub struct SamplingService {
    config: RwLock<ServiceConfiguration>,
    defaults: ServiceConfiguration,
    test: ChiSquareTest,
    rng: Mutex<StdRng>,
}

impl Default for SamplingService {
    fn default() -> Self {
        SamplingService::new(ServiceOptions::default())
    }
}

impl SamplingService {
    /// Create a service in the `Default` state described by `options`.
    pub fn new(options: ServiceOptions) -> Self {
        let ServiceOptions { defaults, test, seed } = options;
        SamplingService {
            config: RwLock::new(defaults.clone()),
            defaults,
            test,
            rng: Mutex::new(seeded_rng(seed)),
        }
    }

    /// Static capability summary; no side effects.
    pub fn describe(&self) -> &'static str {
        DESCRIPTION
    }

    /// Snapshot of the current configuration.
    pub fn configuration(&self) -> ServiceConfiguration {
        self.config.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Replace the stored distribution with `(values, probabilities)`.
    ///
    /// Parameters
    /// ----------
    /// - `values`: `Vec<f64>`
    ///   Category values, in caller order.
    /// - `probabilities`: `Vec<f64>`
    ///   Probabilities aligned with `values`.
    ///
    /// Returns
    /// -------
    /// `ServiceResult<ServiceConfiguration>`
    ///   The newly stored configuration (`max_quantity` is kept).
    ///
    /// Errors
    /// ------
    /// - `ServiceError::Distribution` with the first failing rule
    ///   (empty, negative, length mismatch, sum). The stored configuration
    ///   is left untouched.
    pub fn configure(
        &self, values: Vec<f64>, probabilities: Vec<f64>,
    ) -> ServiceResult<ServiceConfiguration> {
        let dist = Distribution::new(values, probabilities)?;
        Ok(self.install(dist))
    }

    /// As [`SamplingService::configure`], from untyped JSON payloads.
    ///
    /// Errors
    /// ------
    /// - `ServiceError::Distribution(DistributionError::Type)` if either
    ///   payload is not an array of finite numbers; otherwise as
    ///   `configure`.
    pub fn configure_json(
        &self, values: &Value, probabilities: &Value,
    ) -> ServiceResult<ServiceConfiguration> {
        let dist = Distribution::from_json(values, probabilities)?;
        Ok(self.install(dist))
    }

    fn install(&self, dist: Distribution) -> ServiceConfiguration {
        let mut guard = self.config.write().unwrap_or_else(PoisonError::into_inner);
        let next = ServiceConfiguration::from_distribution(dist, guard.max_quantity);
        *guard = next.clone();
        info!(values = ?next.values, probabilities = ?next.probabilities, "distribution configured");
        next
    }

    /// Restore the start-up defaults. Idempotent.
    pub fn reset(&self) -> ServiceConfiguration {
        let mut guard = self.config.write().unwrap_or_else(PoisonError::into_inner);
        *guard = self.defaults.clone();
        info!("configuration reset to defaults");
        self.defaults.clone()
    }

    /// Draw `quantity` numbers with `kind` and test them against the
    /// configured distribution, using the service's own RNG.
    ///
    /// Errors
    /// ------
    /// - `ServiceError::MinimumQuantity` if `quantity <= 0`.
    /// - `ServiceError::MaximumQuantity` if `quantity > max_quantity`.
    /// - `ServiceError::Distribution` / `ServiceError::Test` if the stored
    ///   configuration cannot be sampled or tested.
    pub fn generate(&self, kind: SamplerKind, quantity: i64) -> ServiceResult<GenerateReport> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        self.generate_with_rng(kind, quantity, &mut *rng)
    }

    /// As [`SamplingService::generate`], drawing from a caller-supplied RNG.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self, kind: SamplerKind, quantity: i64, rng: &mut R,
    ) -> ServiceResult<GenerateReport> {
        let config = self.configuration();
        let amount = check_quantity(quantity, config.max_quantity)?;
        let dist = config.distribution()?;

        let draws = kind.draw(&dist, amount, rng)?;
        let observed_histogram = Histogram::build(&draws)?;
        let chi_square_test = self.test.calc(&draws, &dist)?;
        debug!(
            sampler = %kind,
            quantity = amount,
            chi_square = chi_square_test.chi_square(),
            p_value = chi_square_test.p_value(),
            accepts_null = chi_square_test.accepts_null(),
            "generated draws"
        );

        Ok(GenerateReport {
            draws,
            quality: Quality {
                chi_square_test,
                expected_histogram: ExpectedHistogram::from_distribution(&dist),
                observed_histogram,
            },
        })
    }
}

fn check_quantity(quantity: i64, max_quantity: usize) -> ServiceResult<usize> {
    if quantity <= 0 {
        return Err(ServiceError::MinimumQuantity { requested: quantity });
    }
    match usize::try_from(quantity) {
        Ok(amount) if amount <= max_quantity => Ok(amount),
        _ => Err(ServiceError::MaximumQuantity { requested: quantity, max: max_quantity }),
    }
}
