//! Plain Monte Carlo integrators for one-dimensional intervals and multi-dimensional boxes.
pub mod scalar;
pub mod volume;

use crate::core::{Estimate, PointSource, Result};
use rand::Rng;

pub use self::scalar::ScalarEstimator;
pub use self::volume::VolumeEstimator;

/// An integration problem, i.e. an integrand bundled with its domain, that can be estimated with
/// a given number of calls. Sweeps use this to recompute the estimate with growing sample sizes.
pub trait Estimator<T> {
    /// Estimates the integral with `calls` integrand evaluations, drawing the points from
    /// `source`.
    ///
    /// # Errors
    ///
    /// Fails if `calls` is zero or if the integrand returns an error.
    fn estimate<R: Rng>(&self, calls: usize, source: &mut PointSource<R>) -> Result<Estimate<T>>;

    /// The number of dimensions of the integration domain.
    fn dim(&self) -> usize;
}

/// Log what is needed to judge whether an estimate can be trusted.
fn trace_estimate<T: num_traits::Float>(estimate: &Estimate<T>, dim: usize) {
    use crate::core::Estimators;

    tracing::trace!(
        calls = estimate.calls(),
        non_zero_calls = estimate.non_zero_calls(),
        dim,
        "estimate finished"
    );

    if estimate.non_finite_calls() > 0 {
        tracing::warn!(
            non_finite_calls = estimate.non_finite_calls(),
            calls = estimate.calls(),
            "integrand returned non-finite values"
        );
    }
}
