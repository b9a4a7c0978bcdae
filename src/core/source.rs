//! Uniform sampling of points inside an integration domain.
use super::domain::{Domain, Interval};
use num_traits::Float;
use rand::distributions::{Distribution, Standard};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};

/// Produces uniformly distributed points from a random number generator it owns.
///
/// Every draw advances the generator by exactly one number per dimension, so the state after a
/// number of draws can always be replayed from a clone of the initial generator.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PointSource<R> {
    rng: R,
}

impl PointSource<Pcg64> {
    /// Creates a source backed by a PCG generator seeded with `seed`.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::new(Pcg64::seed_from_u64(seed))
    }
}

impl<R: Rng> PointSource<R> {
    /// Wraps the random number generator `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the generator in its current state.
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Destructure the source and return the generator.
    pub fn into_inner(self) -> R {
        self.rng
    }

    /// Draws a number uniformly distributed in `interval`. For a degenerate interval this is its
    /// lower bound.
    pub fn draw_scalar<T>(&mut self, interval: &Interval<T>) -> T
    where
        T: Float,
        Standard: Distribution<T>,
    {
        let u: T = self.rng.gen();
        interval.lower() + u * interval.length()
    }

    /// Fills `x` with a point uniformly distributed in `domain`, one coordinate per dimension.
    ///
    /// `x` must have exactly `domain.dim()` elements.
    pub fn draw_vector<T>(&mut self, domain: &Domain<T>, x: &mut [T])
    where
        T: Float,
        Standard: Distribution<T>,
    {
        debug_assert_eq!(x.len(), domain.dim());

        for (v, interval) in x.iter_mut().zip(domain.intervals()) {
            *v = self.draw_scalar(interval);
        }
    }

    /// Same as [`PointSource::draw_vector`], but allocates the point.
    pub fn draw_point<T>(&mut self, domain: &Domain<T>) -> Vec<T>
    where
        T: Float,
        Standard: Distribution<T>,
    {
        let mut x = vec![T::zero(); domain.dim()];
        self.draw_vector(domain, &mut x);
        x
    }
}
