//! randomgen — weighted discrete sampling with goodness-of-fit validation.
//!
//! Purpose
//! -------
//! Serve as the crate root for the sampling engine and its HTTP surface.
//! The engine draws numbers from a small categorical distribution with one
//! of two interchangeable strategies and judges every batch with a Pearson
//! chi-square test against the configured probabilities.
//!
//! Key behaviors
//! -------------
//! - [`distribution`]: validated `(values, probabilities)` pairs with their
//!   cumulative table.
//! - [`sampling`]: the [`Sampler`](sampling::Sampler) trait with the
//!   inverse-CDF and weighted-choice strategies, selected by
//!   [`SamplerKind`](sampling::SamplerKind).
//! - [`statistical_tests`]: empirical histograms and the chi-square test.
//! - [`service`]: the [`SamplingService`](service::SamplingService) owning
//!   the configuration and producing generate reports.
//! - [`server`]: axum routes over the service.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every public constructor validates its inputs and returns a `Result`;
//!   no routine panics on user-supplied data.
//! - Numbers are `f64` throughout; results are never rounded internally.
//!
//! Conventions
//! -----------
//! - Each module subtree owns an `errors.rs` with a hand-written error enum
//!   and a `Result` alias; lower-layer errors convert upward with `From`.
//! - Randomness is always injected as `&mut impl Rng`; only the service owns
//!   an RNG.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use randomgen::distribution::Distribution;
//! use randomgen::sampling::{seeded_rng, SamplerKind};
//! use randomgen::statistical_tests::ChiSquareTest;
//!
//! let dist = Distribution::new(vec![0.0, 1.0], vec![0.3, 0.7]).unwrap();
//! let mut rng = seeded_rng(Some(5));
//! let draws = SamplerKind::WeightedChoice.draw(&dist, 1_000, &mut rng).unwrap();
//! let fit = ChiSquareTest::default().calc(&draws, &dist).unwrap();
//! assert_eq!(fit.degrees_of_freedom(), 1);
//! ```
//!
//! Testing notes
//! -------------
//! - Unit tests live beside each module; end-to-end and statistical
//!   behaviour is covered in `tests/`.

pub mod distribution;
pub mod sampling;
pub mod server;
pub mod service;
pub mod statistical_tests;
