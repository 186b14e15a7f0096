//! distribution — validated categorical distributions and their input guards.
//!
//! Purpose
//! -------
//! Own the leaf of the crate: turning raw `(values, probabilities)` input
//! into a [`Distribution`] that the samplers and the goodness-of-fit test can
//! trust without re-checking.
//!
//! Key behaviors
//! -------------
//! - [`Distribution`] validates once and precomputes its cumulative table.
//! - [`validation`] holds the guards reused by the histogram and chi-square
//!   modules so that every numeric input is rejected with the same error
//!   kinds.
//! - [`DistributionError`] / [`DistributionResult`] are the error surface for
//!   all of the above.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use randomgen::distribution::{Distribution, DistributionResult};
//!
//! fn build() -> DistributionResult<Distribution> {
//!     Distribution::new(vec![-1.0, 0.0, 1.0], vec![0.25, 0.5, 0.25])
//! }
//! # assert!(build().is_ok());
//! ```

pub mod categorical;
pub mod errors;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::categorical::Distribution;
pub use self::errors::{DistributionError, DistributionResult};
