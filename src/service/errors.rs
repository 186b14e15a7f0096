//! service::errors — failures surfaced at the sampling-service boundary.
//!
//! Purpose
//! -------
//! Aggregate the error types of the lower layers and add the quantity
//! limits enforced by the service itself. This is the only error type the
//! HTTP layer has to translate.
//!
//! Key behaviors
//! -------------
//! - Wrap [`DistributionError`] and [`TestError`] through `From`, so the
//!   orchestration code propagates them with `?`.
//! - Report quantity-limit violations with the offending request and limit.
//!
//! Conventions
//! -----------
//! - `Display` forwards the wrapped message verbatim for lower-layer errors;
//!   HTTP error bodies are exactly these strings.

use crate::distribution::DistributionError;
use crate::statistical_tests::TestError;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// ServiceError — everything `SamplingService` can fail with.
///
/// Variants
/// --------
/// - `Distribution(DistributionError)`
///   Invalid values/probabilities on configure (or a corrupt stored
///   configuration on generate).
/// - `Test(TestError)`
///   The goodness-of-fit test could not be evaluated.
/// - `MinimumQuantity { requested }`
///   A generate request asked for `requested ≤ 0` draws.
/// - `MaximumQuantity { requested, max }`
///   A generate request exceeded the configured ceiling.
/// - `InvalidMaxQuantity(max)`
///   The ceiling itself is zero at start-up.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceError {
    Distribution(DistributionError),
    Test(TestError),
    MinimumQuantity { requested: i64 },
    MaximumQuantity { requested: i64, max: usize },
    InvalidMaxQuantity(usize),
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServiceError::Distribution(err) => Some(err),
            ServiceError::Test(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::Distribution(err) => write!(f, "{err}"),
            ServiceError::Test(err) => write!(f, "{err}"),
            ServiceError::MinimumQuantity { requested } => {
                write!(f, "The quantity of random numbers must be positive; got {requested}.")
            }
            ServiceError::MaximumQuantity { requested, max } => {
                write!(
                    f,
                    "The quantity of random numbers exceeds the maximum limit: {requested} > {max}."
                )
            }
            ServiceError::InvalidMaxQuantity(max) => {
                write!(f, "Maximum quantity must be at least 1; got {max}.")
            }
        }
    }
}

impl From<DistributionError> for ServiceError {
    fn from(err: DistributionError) -> Self {
        ServiceError::Distribution(err)
    }
}

impl From<TestError> for ServiceError {
    fn from(err: TestError) -> Self {
        ServiceError::Test(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Quantity errors embed the request and the limit.
    fn service_error_quantity_messages_embed_payloads() {
        let max = ServiceError::MaximumQuantity { requested: 10_001, max: 10_000 };
        let min = ServiceError::MinimumQuantity { requested: -3 };

        let max_msg = max.to_string();
        assert!(max_msg.contains("10001") && max_msg.contains("10000"), "Got: {max_msg}");
        assert!(min.to_string().contains("-3"));
    }

    #[test]
    fn service_error_wraps_lower_layers_verbatim() {
        let inner = DistributionError::ProbabilitySum { sum: 0.5 };
        let err: ServiceError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
        assert!(std::error::Error::source(&err).is_some());
    }
}
