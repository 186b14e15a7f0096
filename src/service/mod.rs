//! service — configuration ownership and the generate/configure/reset flow.
//!
//! [`SamplingService`] is the single entry point used by the HTTP layer; it
//! owns a [`ServiceConfiguration`], returns [`GenerateReport`]s, and fails
//! with [`ServiceError`].

pub mod config;
pub mod engine;
pub mod errors;
pub mod report;

pub use self::config::{
    ServiceConfiguration, ServiceOptions, DEFAULT_MAX_QUANTITY, DEFAULT_PROBABILITIES,
    DEFAULT_VALUES,
};
pub use self::engine::SamplingService;
pub use self::errors::{ServiceError, ServiceResult};
pub use self::report::{ConfigurationReport, ExpectedHistogram, GenerateReport, Quality};
