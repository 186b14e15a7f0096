//! sampling — weighted-random draws from validated distributions.
//!
//! Purpose
//! -------
//! Host the [`Sampler`] trait and its two strategies. The strategies are pure
//! functions of a [`Distribution`](crate::distribution::Distribution) and an
//! RNG; quantity limits and configuration live in [`crate::service`].
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use randomgen::distribution::Distribution;
//! use randomgen::sampling::{seeded_rng, SamplerKind};
//!
//! let dist = Distribution::new(vec![1.0, 2.0], vec![0.25, 0.75]).unwrap();
//! let draws = SamplerKind::WeightedChoice.draw(&dist, 10, &mut seeded_rng(Some(1))).unwrap();
//! assert_eq!(draws.len(), 10);
//! ```

pub mod sampler;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::sampler::{
    seeded_rng, InverseCdfSampler, Sampler, SamplerKind, UnknownSamplerKind, WeightedChoiceSampler,
};
