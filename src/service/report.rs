//! service::report — response payloads of the sampling service.
//!
//! The shapes here are what the HTTP layer serializes verbatim:
//!
//! ```text
//! GenerateReport      { draws, quality: { chi_square_test, expected_histogram, observed_histogram } }
//! ConfigurationReport { values, probabilities }
//! ```
//!
//! Both histograms serialize as `{"<value>": probability}` objects.

use serde::{Serialize, Serializer};

use crate::distribution::Distribution;
use crate::service::config::ServiceConfiguration;
use crate::statistical_tests::histogram::serialize_pmf;
use crate::statistical_tests::{GoodnessOfFit, Histogram};

/// Result of one generate call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateReport {
    pub draws: Vec<f64>,
    pub quality: Quality,
}

/// Goodness-of-fit summary attached to every draw batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quality {
    pub chi_square_test: GoodnessOfFit,
    pub expected_histogram: ExpectedHistogram,
    pub observed_histogram: Histogram,
}

/// Configured values zipped with their probabilities, ascending by value
/// with duplicate values merged.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedHistogram(Vec<(f64, f64)>);

impl ExpectedHistogram {
    pub fn from_distribution(dist: &Distribution) -> Self {
        ExpectedHistogram(dist.pmf())
    }

    pub fn entries(&self) -> &[(f64, f64)] {
        &self.0
    }

    pub fn probability(&self, value: f64) -> Option<f64> {
        self.0.iter().find(|(v, _)| *v == value).map(|&(_, p)| p)
    }
}

impl Serialize for ExpectedHistogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_pmf(self.0.iter().copied(), self.0.len(), serializer)
    }
}

/// The `{values, probabilities}` pair returned by configure and reset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigurationReport {
    pub values: Vec<f64>,
    pub probabilities: Vec<f64>,
}

impl From<ServiceConfiguration> for ConfigurationReport {
    fn from(config: ServiceConfiguration) -> Self {
        ConfigurationReport { values: config.values, probabilities: config.probabilities }
    }
}
