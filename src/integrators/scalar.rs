//! Monte Carlo integration over an interval.
use super::{trace_estimate, Estimator};
use crate::core::estimators::Accumulator;
use crate::core::*;

use num_traits::{Float, FromPrimitive};
use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// Integrate the `integrand` over `interval` using `calls` points drawn from `source`.
///
/// The estimate is
///
/// $$ \int_a^b \mathrm{d} x f(x) \approx \frac{b - a}{N} \sum_{j=1}^N f \left( x^{(j)} \right) $$
///
/// with $x^{(j)}$ uniformly distributed in $[a, b]$. For $a = b$ the estimate is exactly zero,
/// whatever the integrand returns.
///
/// # Errors
///
/// Returns [`Error::InvalidSampleCount`] without touching `source` if `calls` is zero, and
/// [`Error::Integrand`] as soon as the integrand fails.
pub fn integrate<T, R, I>(
    interval: &Interval<T>,
    calls: usize,
    integrand: &I,
    source: &mut PointSource<R>,
) -> Result<Estimate<T>>
where
    I: UnivariateIntegrand<T> + ?Sized,
    T: Float + FromPrimitive,
    R: Rng,
    Standard: Distribution<T>,
{
    if calls == 0 {
        return Err(Error::InvalidSampleCount);
    }

    let mut acc = Accumulator::default();

    for _ in 0..calls {
        let x = source.draw_scalar(interval);
        acc.update(integrand.call(x).map_err(Error::Integrand)?);
    }

    let estimate = acc.finish(interval.length())?;
    trace_estimate(&estimate, 1);

    Ok(estimate)
}

/// A univariate integrand together with the interval it is integrated over.
pub struct ScalarEstimator<'a, T, I: ?Sized> {
    interval: Interval<T>,
    integrand: &'a I,
}

impl<'a, T, I: ?Sized> ScalarEstimator<'a, T, I> {
    /// Constructor.
    pub const fn new(interval: Interval<T>, integrand: &'a I) -> Self {
        Self {
            interval,
            integrand,
        }
    }

    /// Returns the integration interval.
    pub const fn interval(&self) -> &Interval<T> {
        &self.interval
    }
}

impl<'a, T, I> Estimator<T> for ScalarEstimator<'a, T, I>
where
    I: UnivariateIntegrand<T> + ?Sized,
    T: Float + FromPrimitive,
    Standard: Distribution<T>,
{
    fn estimate<R: Rng>(&self, calls: usize, source: &mut PointSource<R>) -> Result<Estimate<T>> {
        integrate(&self.interval, calls, self.integrand, source)
    }

    fn dim(&self) -> usize {
        1
    }
}
