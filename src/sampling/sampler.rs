//! sampling::sampler — weighted draws from a categorical distribution.
//!
//! Purpose
//! -------
//! Provide two interchangeable strategies for drawing values from a
//! [`Distribution`], behind a single [`Sampler`] trait, plus the
//! [`SamplerKind`] selector used by the service and the HTTP routes.
//!
//! Key behaviors
//! -------------
//! - [`InverseCdfSampler`] (strategy A): draw `r ~ U[0, 1)`, scale it by the
//!   table total, and return the value at the first index whose cumulative
//!   probability is `≥` the scaled draw. Probabilities only have to sum to 1
//!   within three decimals, so the table may end slightly below or above 1;
//!   scaling keeps every draw inside it.
//! - [`WeightedChoiceSampler`] (strategy B): delegate to
//!   `rand::distributions::WeightedIndex`, built once per sampler.
//! - [`Sampler::generate`] repeats single draws; it performs no bounds checks
//!   on `amount` (the service owns those).
//!
//! Invariants & assumptions
//! ------------------------
//! - The distribution has already been validated, so every strategy only ever
//!   returns one of its configured values.
//! - The RNG is passed in explicitly; a seeded `StdRng` gives reproducible
//!   draws.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the inverse-CDF selection rule (first index wins,
//!   tables ending below or above 1), seeded reproducibility, and that both strategies only
//!   emit configured values. Long-run agreement of the two strategies is
//!   exercised in `tests/`.

use std::str::FromStr;

use rand::{
    distributions::{Distribution as RandDistribution, WeightedIndex},
    rngs::StdRng,
    Rng, SeedableRng,
};
use serde::{Deserialize, Serialize};

use crate::distribution::{Distribution, DistributionError, DistributionResult};

/// Capability shared by both sampling strategies: draw one value.
pub trait Sampler {
    /// Draw a single value.
    fn next_value<R: Rng + ?Sized>(&self, rng: &mut R) -> f64;

    /// Draw `amount` independent values.
    fn generate<R: Rng + ?Sized>(&self, amount: usize, rng: &mut R) -> Vec<f64> {
        (0..amount).map(|_| self.next_value(rng)).collect()
    }
}

/// Strategy A — linear scan over the cumulative table.
#[derive(Debug, Clone, Copy)]
pub struct InverseCdfSampler<'a> {
    distribution: &'a Distribution,
}

impl<'a> InverseCdfSampler<'a> {
    pub fn new(distribution: &'a Distribution) -> Self {
        InverseCdfSampler { distribution }
    }
}

impl Sampler for InverseCdfSampler<'_> {
    fn next_value<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let r: f64 = rng.gen();
        let index = select_inverse_cdf(self.distribution.cumulative(), r);
        self.distribution.values()[index]
    }
}

/// Strategy B — library-backed weighted choice.
///
/// Notes
/// -----
/// - `WeightedIndex` precomputes its own cumulative weights and samples by
///   binary search, so each draw is O(log n) instead of O(n).
#[derive(Debug, Clone)]
pub struct WeightedChoiceSampler<'a> {
    distribution: &'a Distribution,
    index: WeightedIndex<f64>,
}

impl<'a> WeightedChoiceSampler<'a> {
    /// Build the weighted-choice table.
    ///
    /// Errors
    /// ------
    /// - `DistributionError::WeightTable` if `rand` rejects the weights. This
    ///   cannot happen for a validated distribution (weights are finite,
    ///   non-negative, and sum to ≈1) but is still propagated, not unwrapped.
    pub fn new(distribution: &'a Distribution) -> DistributionResult<Self> {
        let index = WeightedIndex::new(distribution.probabilities())
            .map_err(|e| DistributionError::WeightTable { reason: e.to_string() })?;
        Ok(WeightedChoiceSampler { distribution, index })
    }
}

impl Sampler for WeightedChoiceSampler<'_> {
    fn next_value<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.distribution.values()[self.index.sample(rng)]
    }
}

/// Index of the first cumulative entry `≥ r · total`, where `total` is the
/// last entry of the table and `r ∈ [0, 1)`.
///
/// The scaled target never exceeds `total`, so the scan always stops on a
/// category with positive probability: ties (equal cumulative entries from
/// zero probabilities) resolve to the first index, and a trailing
/// zero-probability category is unreachable even when the table ends below 1.
#[inline]
pub fn select_inverse_cdf(cumulative: &[f64], r: f64) -> usize {
    let Some(&total) = cumulative.last() else {
        return 0;
    };
    let target = (r * total).min(total);
    cumulative
        .iter()
        .position(|&c| target <= c)
        .unwrap_or(cumulative.len() - 1)
}

/// SamplerKind — caller-facing selector for the two strategies.
///
/// Parsing accepts the historical route versions (`"v1"`, `"v2"`), the
/// strategy letters (`"a"`, `"b"`), and the descriptive names
/// (`"inverse_cdf"`, `"weighted_choice"`), case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplerKind {
    InverseCdf,
    WeightedChoice,
}

impl SamplerKind {
    /// Draw `amount` values from `distribution` with this strategy.
    pub fn draw<R: Rng + ?Sized>(
        self, distribution: &Distribution, amount: usize, rng: &mut R,
    ) -> DistributionResult<Vec<f64>> {
        match self {
            SamplerKind::InverseCdf => Ok(InverseCdfSampler::new(distribution).generate(amount, rng)),
            SamplerKind::WeightedChoice => {
                Ok(WeightedChoiceSampler::new(distribution)?.generate(amount, rng))
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SamplerKind::InverseCdf => "inverse_cdf",
            SamplerKind::WeightedChoice => "weighted_choice",
        }
    }
}

impl std::fmt::Display for SamplerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a sampler name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSamplerKind {
    pub name: String,
}

impl std::error::Error for UnknownSamplerKind {}

impl std::fmt::Display for UnknownSamplerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid sampler {:?} (expected 'v1', 'v2', 'inverse_cdf', or 'weighted_choice')",
            self.name
        )
    }
}

impl FromStr for SamplerKind {
    type Err = UnknownSamplerKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "v1" | "a" | "inverse_cdf" | "inverse-cdf" => Ok(SamplerKind::InverseCdf),
            "v2" | "b" | "weighted_choice" | "weighted-choice" => Ok(SamplerKind::WeightedChoice),
            _ => Err(UnknownSamplerKind { name: s.to_string() }),
        }
    }
}

/// Build the RNG used for draws: seeded when `seed` is given, from OS
/// entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The inverse-CDF selection rule, including ties and tables whose
    //   total is not exactly 1.
    // - Membership of every draw in the configured values, for both
    //   strategies.
    // - Reproducibility under a fixed seed.
    // - Parsing of `SamplerKind`.
    //
    // They intentionally DO NOT cover:
    // - Long-run frequency agreement, which is statistical and lives in the
    //   integration tests.
    // -------------------------------------------------------------------------

    fn default_distribution() -> Distribution {
        Distribution::new(vec![-1.0, 0.0, 1.0, 2.0, 3.0], vec![0.01, 0.3, 0.58, 0.1, 0.01])
            .expect("default distribution is valid")
    }

    #[test]
    // Purpose
    // -------
    // The first index whose cumulative value is ≥ r wins, with ties going
    // to the earliest index.
    //
    // Given
    // -----
    // - cumulative = [0.2, 0.2, 0.5, 1.0].
    //
    // Expect
    // ------
    // - r = 0.0 → 0, r = 0.2 → 0 (tie), r = 0.3 → 2, r = 0.9999 → 3.
    fn select_inverse_cdf_picks_first_satisfying_index() {
        // Arrange
        let cumulative = [0.2, 0.2, 0.5, 1.0];

        // Act & Assert
        assert_eq!(select_inverse_cdf(&cumulative, 0.0), 0);
        assert_eq!(select_inverse_cdf(&cumulative, 0.2), 0);
        assert_eq!(select_inverse_cdf(&cumulative, 0.3), 2);
        assert_eq!(select_inverse_cdf(&cumulative, 0.9999), 3);
    }

    #[test]
    // Purpose
    // -------
    // A table ending below 1 with a trailing zero-probability category
    // never selects that category, however close r gets to 1.
    //
    // Given
    // -----
    // - cumulative = [0.9996, 0.9996] (probabilities [0.9996, 0.0]).
    //
    // Expect
    // ------
    // - r = 0.5, 0.9997 and the largest f64 below 1 all select index 0.
    fn select_inverse_cdf_skips_trailing_zero_when_table_ends_below_one() {
        // Arrange
        let cumulative = [0.9996, 0.9996];
        let largest_below_one = 1.0 - f64::EPSILON / 2.0;

        // Act & Assert
        assert_eq!(select_inverse_cdf(&cumulative, 0.5), 0);
        assert_eq!(select_inverse_cdf(&cumulative, 0.9997), 0);
        assert_eq!(select_inverse_cdf(&cumulative, largest_below_one), 0);
    }

    #[test]
    // Purpose
    // -------
    // A table ending above 1 still reaches its last category.
    fn select_inverse_cdf_reaches_last_category_when_table_ends_above_one() {
        let cumulative = [0.5, 1.0004];
        assert_eq!(select_inverse_cdf(&cumulative, 0.9999), 1);
        assert_eq!(select_inverse_cdf(&cumulative, 0.25), 0);
    }

    #[test]
    // Purpose
    // -------
    // Strategy A only ever draws the positive-probability value of a valid
    // configuration whose probabilities sum to 0.9996 and end in a zero.
    fn inverse_cdf_sampler_never_draws_trailing_zero_category() {
        // Arrange
        let dist = Distribution::new(vec![1.0, 2.0], vec![0.9996, 0.0]).unwrap();
        let mut rng = seeded_rng(Some(5));

        // Act
        let draws = InverseCdfSampler::new(&dist).generate(50_000, &mut rng);

        // Assert
        assert!(draws.iter().all(|&v| v == 1.0));
    }

    #[test]
    // Purpose
    // -------
    // Both strategies only ever return configured values and honour the
    // requested amount.
    fn samplers_only_emit_configured_values() {
        // Arrange
        let dist = default_distribution();
        let mut rng = seeded_rng(Some(7));

        // Act
        let a = SamplerKind::InverseCdf.draw(&dist, 2_000, &mut rng).unwrap();
        let b = SamplerKind::WeightedChoice.draw(&dist, 2_000, &mut rng).unwrap();

        // Assert
        assert_eq!(a.len(), 2_000);
        assert_eq!(b.len(), 2_000);
        for v in a.iter().chain(b.iter()) {
            assert!(dist.values().contains(v), "unexpected draw {v}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Zero-probability categories are never drawn by either strategy.
    fn samplers_never_draw_zero_probability_values() {
        // Arrange
        let dist = Distribution::new(vec![1.0, 2.0, 3.0], vec![0.5, 0.0, 0.5]).unwrap();
        let mut rng = seeded_rng(Some(11));

        // Act
        let a = InverseCdfSampler::new(&dist).generate(5_000, &mut rng);
        let b = WeightedChoiceSampler::new(&dist).unwrap().generate(5_000, &mut rng);

        // Assert
        assert!(a.iter().chain(b.iter()).all(|&v| v != 2.0));
    }

    #[test]
    // Purpose
    // -------
    // A fixed seed reproduces the same draws.
    fn samplers_are_reproducible_under_seed() {
        // Arrange
        let dist = default_distribution();

        // Act
        let first = SamplerKind::InverseCdf.draw(&dist, 100, &mut seeded_rng(Some(42))).unwrap();
        let second = SamplerKind::InverseCdf.draw(&dist, 100, &mut seeded_rng(Some(42))).unwrap();

        // Assert
        assert_eq!(first, second);
    }

    #[test]
    fn sampler_kind_parses_known_names() {
        assert_eq!("v1".parse::<SamplerKind>(), Ok(SamplerKind::InverseCdf));
        assert_eq!("A".parse::<SamplerKind>(), Ok(SamplerKind::InverseCdf));
        assert_eq!("weighted_choice".parse::<SamplerKind>(), Ok(SamplerKind::WeightedChoice));
        assert_eq!("V2".parse::<SamplerKind>(), Ok(SamplerKind::WeightedChoice));
        assert!("v3".parse::<SamplerKind>().is_err());
    }
}
