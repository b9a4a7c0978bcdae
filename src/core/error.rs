//! The error type shared by all integrators.
use thiserror::Error;

/// Error type returned by integrands that can fail. The integrators never inspect it; it is
/// handed back to the caller inside [`Error::Integrand`].
pub type IntegrandError = Box<dyn std::error::Error + Send + Sync>;

/// Errors produced while setting up or running an integration.
#[derive(Debug, Error)]
pub enum Error {
    /// The number of calls was zero; at least one sample is needed to form an estimate.
    #[error("the number of calls must be positive")]
    InvalidSampleCount,

    /// The lower bound of an interval is larger than its upper bound, or one of them is NaN.
    #[error("invalid interval [{lower}, {upper}]")]
    InvalidInterval {
        /// Lower bound as given.
        lower: f64,
        /// Upper bound as given.
        upper: f64,
    },

    /// A domain needs at least one dimension.
    #[error("the integration domain has no dimensions")]
    EmptyDomain,

    /// A sweep configuration failed validation.
    #[error("invalid sweep configuration: {0}")]
    InvalidConfig(String),

    /// The integrand returned an error.
    #[error("integrand evaluation failed")]
    Integrand(#[source] IntegrandError),

    /// A count could not be represented in the numeric type of the integration.
    #[error("the number of calls is not representable in the numeric type")]
    Conversion,

    /// A configuration could not be (de)serialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shorthand for results with the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
