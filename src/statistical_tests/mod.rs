//! statistical_tests — empirical histograms and goodness-of-fit testing.
//!
//! Purpose
//! -------
//! Collect the routines that judge a sampler's output: the empirical
//! [`Histogram`] of a draw sequence and the Pearson chi-square test
//! ([`ChiSquareTest`]) comparing those draws with the configured
//! probabilities.
//!
//! Key behaviors
//! -------------
//! - [`Histogram::build`] turns draws into an ascending, value-keyed PMF.
//! - [`ChiSquareTest::calc`] returns a [`GoodnessOfFit`] with the statistic,
//!   degrees of freedom, p-value, and accept/reject decision.
//! - Shared input guards live in [`validation`]; failures are reported as
//!   [`TestError`] via [`TestResult`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are finite, non-empty numeric sequences; anything else is
//!   rejected before counting.
//! - Routines never panic on user-facing invalid input.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use randomgen::distribution::Distribution;
//! use randomgen::statistical_tests::{ChiSquareTest, Histogram};
//!
//! let dist = Distribution::new(vec![1.0, 2.0], vec![0.5, 0.5]).unwrap();
//! let draws = [1.0, 2.0, 2.0, 1.0];
//! let hist = Histogram::build(&draws).unwrap();
//! let fit = ChiSquareTest::default().calc(&draws, &dist).unwrap();
//! assert_eq!(hist.len(), 2);
//! assert!(fit.accepts_null());
//! ```
//!
//! Testing notes
//! -------------
//! - Unit tests live beside each module; the statistical behaviour of the
//!   test under repeated sampling is covered in `tests/`.

pub mod chi_square;
pub mod errors;
pub mod histogram;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::chi_square::{ChiSquareTest, GoodnessOfFit, DEFAULT_ALPHA};
pub use self::errors::{TestError, TestResult};
pub use self::histogram::{Bin, Histogram};
