//! The core module. You don't need to import this module since all of its public members are part
//! of the crate namespace.
pub mod domain;
pub mod error;
pub mod estimators;
pub mod source;

pub use self::domain::{Domain, Interval};
pub use self::error::{Error, IntegrandError, Result};
pub use self::estimators::{BasicEstimators, Estimate, Estimators};
pub use self::source::PointSource;

/// A function of a single real variable that can be integrated over an [`Interval`].
///
/// Every closure `Fn(T) -> T` is a univariate integrand; implement this trait directly for
/// integrands that can fail.
pub trait UnivariateIntegrand<T>: Send + Sync {
    /// Evaluates the integrand at `x`.
    ///
    /// # Errors
    ///
    /// Any error is passed on unchanged to the caller of the integrator.
    fn call(&self, x: T) -> std::result::Result<T, IntegrandError>;
}

impl<T, F> UnivariateIntegrand<T> for F
where
    F: Fn(T) -> T + Send + Sync,
{
    fn call(&self, x: T) -> std::result::Result<T, IntegrandError> {
        Ok(self(x))
    }
}

/// A function of several real variables that can be integrated over a [`Domain`].
///
/// The integrators call it with points that have as many coordinates as the domain has
/// dimensions; the integrand is not asked to check this. Every closure `Fn(&[T]) -> T` is an
/// integrand.
pub trait Integrand<T>: Send + Sync {
    /// Evaluates the integrand at the point `x`.
    ///
    /// # Errors
    ///
    /// Any error is passed on unchanged to the caller of the integrator.
    fn call(&self, x: &[T]) -> std::result::Result<T, IntegrandError>;
}

impl<T, F> Integrand<T> for F
where
    F: Fn(&[T]) -> T + Send + Sync,
{
    fn call(&self, x: &[T]) -> std::result::Result<T, IntegrandError> {
        Ok(self(x))
    }
}
