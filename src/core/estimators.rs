//! This module contains everything related to estimators.
use super::error::{Error, Result};
use num_traits::{Float, FromPrimitive};
use serde::{Deserialize, Serialize};

/// Basic estimators, like the mean, variance, and the standard deviation.
pub trait BasicEstimators<T: Float> {
    /// Returns the mean value.
    fn mean(&self) -> T;

    /// Returns the variance, $V$.
    fn var(&self) -> T;

    /// Returns the standard deviation, $\sigma = \sqrt{V}$.
    fn std(&self) -> T {
        self.var().sqrt()
    }
}

/// More estimators.
pub trait Estimators<T: Float>: BasicEstimators<T> {
    /// Returns the number of times $N$, the integrand has been called.
    fn calls(&self) -> usize;

    /// Returns the number of times, $N_\mathrm{nf}$, the integrand has been called
    /// and its return value was non-finite.
    fn non_finite_calls(&self) -> usize;

    /// Returns the number of times, $N_\mathrm{nz}$, the integrand has been called
    /// and its return value was non-zero.
    fn non_zero_calls(&self) -> usize;
}

/// Running sums of integrand values, collected while sampling.
#[derive(Clone, Debug)]
pub(crate) struct Accumulator<T> {
    sum: T,
    sumsq: T,
    calls: usize,
    non_finite_calls: usize,
    non_zero_calls: usize,
}

impl<T: Float> Default for Accumulator<T> {
    fn default() -> Self {
        Self {
            sum: T::zero(),
            sumsq: T::zero(),
            calls: 0,
            non_finite_calls: 0,
            non_zero_calls: 0,
        }
    }
}

impl<T: Float + FromPrimitive> Accumulator<T> {
    /// Adds the integrand value of a single call.
    pub(crate) fn update(&mut self, value: T) {
        self.calls += 1;

        if value != T::zero() {
            self.non_zero_calls += 1;

            if !value.is_finite() {
                self.non_finite_calls += 1;
            }
        }

        self.sum = self.sum + value;
        self.sumsq = self.sumsq + value * value;
    }

    /// Turns the sums into an estimate of the integral over a domain with the given `volume`.
    pub(crate) fn finish(self, volume: T) -> Result<Estimate<T>> {
        if self.calls == 0 {
            return Err(Error::InvalidSampleCount);
        }

        let (value, var) = if volume == T::zero() {
            (T::zero(), T::zero())
        } else {
            let calls = T::from_usize(self.calls).ok_or(Error::Conversion)?;
            let mean = self.sum / calls;
            // a single call carries no information about the spread
            let var = if self.calls == 1 {
                T::zero()
            } else {
                // rounding can push the variance of (nearly) constant integrands below zero
                ((self.sumsq - self.sum * mean) / calls / (calls - T::one())).max(T::zero())
            };

            (volume * mean, volume * volume * var)
        };

        Ok(Estimate {
            value,
            var,
            volume,
            calls: self.calls,
            non_finite_calls: self.non_finite_calls,
            non_zero_calls: self.non_zero_calls,
        })
    }
}

/// The result of a single integration: the integral estimate together with its variance.
///
/// The estimate is $V \bar{f}$, where $V$ is the volume of the integration domain and $\bar{f}$
/// the mean of the integrand over $N$ uniformly distributed points. Its variance is estimated by
/// $V^2 \left( \overline{f^2} - \bar{f}^2 \right) / (N - 1)$.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Estimate<T> {
    value: T,
    var: T,
    volume: T,
    calls: usize,
    non_finite_calls: usize,
    non_zero_calls: usize,
}

impl<T: Float> Estimate<T> {
    /// Returns the estimate of the integral. Same as [`BasicEstimators::mean`].
    pub fn value(&self) -> T {
        self.value
    }

    /// Returns the volume of the domain the integrand was sampled in.
    pub fn volume(&self) -> T {
        self.volume
    }
}

impl<T: Float> BasicEstimators<T> for Estimate<T> {
    fn mean(&self) -> T {
        self.value
    }

    fn var(&self) -> T {
        self.var
    }
}

impl<T: Float> Estimators<T> for Estimate<T> {
    fn calls(&self) -> usize {
        self.calls
    }

    fn non_finite_calls(&self) -> usize {
        self.non_finite_calls
    }

    fn non_zero_calls(&self) -> usize {
        self.non_zero_calls
    }
}
