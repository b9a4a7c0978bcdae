//! Monte Carlo integration over an axis-aligned box.
use super::{trace_estimate, Estimator};
use crate::core::estimators::Accumulator;
use crate::core::*;

use num_traits::{Float, FromPrimitive};
use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// Integrate the `integrand` over `domain` using `calls` points drawn from `source`.
///
/// With $V = \prod_{i=1}^d (b_i - a_i)$ the volume of the domain, the estimate is
///
/// $$ I \approx \frac{V}{N} \sum_{j=1}^N f \left( x_1^{(j)}, x_2^{(j)}, \ldots, x_d^{(j)} \right) $$
///
/// where each coordinate $x_i^{(j)}$ is uniformly distributed in $[a_i, b_i]$. If one of the
/// intervals is degenerate the volume, and with it the estimate, is exactly zero.
///
/// The integrand is called with slices of length `domain.dim()`.
///
/// # Errors
///
/// Returns [`Error::InvalidSampleCount`] without touching `source` if `calls` is zero, and
/// [`Error::Integrand`] as soon as the integrand fails.
pub fn integrate<T, R, I>(
    domain: &Domain<T>,
    calls: usize,
    integrand: &I,
    source: &mut PointSource<R>,
) -> Result<Estimate<T>>
where
    I: Integrand<T> + ?Sized,
    T: Float + FromPrimitive,
    R: Rng,
    Standard: Distribution<T>,
{
    if calls == 0 {
        return Err(Error::InvalidSampleCount);
    }

    // buffer for the sampled point, reused for every call
    let mut x = vec![T::zero(); domain.dim()];
    let mut acc = Accumulator::default();

    for _ in 0..calls {
        source.draw_vector(domain, &mut x);
        acc.update(integrand.call(&x).map_err(Error::Integrand)?);
    }

    let estimate = acc.finish(domain.volume())?;
    trace_estimate(&estimate, domain.dim());

    Ok(estimate)
}

/// A multi-dimensional integrand together with the box it is integrated over.
pub struct VolumeEstimator<'a, T, I: ?Sized> {
    domain: Domain<T>,
    integrand: &'a I,
}

impl<'a, T, I: ?Sized> VolumeEstimator<'a, T, I> {
    /// Constructor.
    pub const fn new(domain: Domain<T>, integrand: &'a I) -> Self {
        Self { domain, integrand }
    }

    /// Returns the integration domain.
    pub const fn domain(&self) -> &Domain<T> {
        &self.domain
    }
}

impl<'a, T, I> Estimator<T> for VolumeEstimator<'a, T, I>
where
    I: Integrand<T> + ?Sized,
    T: Float + FromPrimitive,
    Standard: Distribution<T>,
{
    fn estimate<R: Rng>(&self, calls: usize, source: &mut PointSource<R>) -> Result<Estimate<T>> {
        integrate(&self.domain, calls, self.integrand, source)
    }

    fn dim(&self) -> usize {
        self.domain.dim()
    }
}
