//! Convergence sweeps: the error of an estimator for a growing number of calls.
//!
//! A sweep starts with [`SweepConfig::floor`] calls and adds
//! $\max(\lfloor N_\mathrm{max} / \mathrm{divisions} \rfloor, 1)$ calls per step until the
//! requested maximum $N_\mathrm{max}$ is exceeded. Each step computes a fresh estimate and records
//! its distance to a reference value. If the steps do not land exactly on $N_\mathrm{max}$, a last
//! point with $N_\mathrm{max}$ calls is appended, so every series ends there. A maximum below the
//! floor therefore gives a series with a single point.
//!
//! The errors of a single sweep are not monotonic, since every point is an independent
//! statistical estimate.
use crate::callbacks::{Callback, SinkCallback};
use crate::core::{Error, PointSource, Result};
use crate::integrators::Estimator;
use crate::series::{ConvergencePoint, ConvergenceSeries};

use num_traits::Float;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

const fn default_floor() -> usize {
    100
}

const fn default_divisions() -> usize {
    20
}

/// Controls which numbers of calls a sweep visits.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SweepConfig {
    /// The number of calls of the first point.
    #[serde(default = "default_floor")]
    pub floor: usize,
    /// The maximum number of calls is divided by this number to obtain the step size.
    #[serde(default = "default_divisions")]
    pub divisions: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            floor: default_floor(),
            divisions: default_divisions(),
        }
    }
}

impl SweepConfig {
    /// Reads a configuration from JSON. Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Fails if `json` can not be parsed or the configuration is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that both `floor` and `divisions` are positive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] otherwise.
    pub fn validate(&self) -> Result<()> {
        if self.floor == 0 {
            return Err(Error::InvalidConfig("floor must be positive".to_string()));
        }

        if self.divisions == 0 {
            return Err(Error::InvalidConfig("divisions must be positive".to_string()));
        }

        Ok(())
    }

    /// Returns the step size for a sweep up to `max_calls`, which is at least one.
    pub fn step(&self, max_calls: usize) -> usize {
        (max_calls / self.divisions.max(1)).max(1)
    }

    /// Returns the numbers of calls a sweep up to `max_calls` visits, in increasing order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the configuration is invalid and
    /// [`Error::InvalidSampleCount`] if `max_calls` is zero.
    pub fn sample_counts(&self, max_calls: usize) -> Result<Vec<usize>> {
        self.validate()?;

        if max_calls == 0 {
            return Err(Error::InvalidSampleCount);
        }

        let step = self.step(max_calls);
        let mut counts = Vec::new();
        let mut calls = self.floor;

        while calls <= max_calls {
            counts.push(calls);

            calls = match calls.checked_add(step) {
                Some(calls) => calls,
                None => break,
            };
        }

        if counts.last() != Some(&max_calls) {
            counts.push(max_calls);
        }

        Ok(counts)
    }
}

/// Run a sweep of `estimator` up to `max_calls` calls, measuring errors against `reference`.
///
/// Points are drawn from `source`, which is advanced by the total number of calls of all points
/// times the dimension of the estimator. The `callback` is notified after each point.
///
/// # Errors
///
/// Returns [`Error::InvalidSampleCount`] if `max_calls` is zero, [`Error::InvalidConfig`] for an
/// invalid `config`, and passes on every error of the estimator. In any case no partial series
/// is returned.
pub fn run<T, R, E, C>(
    estimator: &E,
    max_calls: usize,
    reference: T,
    config: &SweepConfig,
    source: &mut PointSource<R>,
    callback: &C,
) -> Result<ConvergenceSeries<T>>
where
    T: Float + Debug,
    R: Rng,
    E: Estimator<T>,
    C: Callback<T> + ?Sized,
{
    let counts = config.sample_counts(max_calls)?;
    let mut series = ConvergenceSeries::default();

    for calls in counts {
        let estimate = estimator.estimate(calls, source)?;
        let point = ConvergencePoint::new(calls, estimate.value(), reference);

        tracing::debug!(
            calls,
            estimate = ?point.estimate(),
            error = ?point.error(),
            "sweep point"
        );

        series.push(point);
        callback.print(series.points());
    }

    Ok(series)
}

/// Same as [`run`] with the default configuration and without callback.
///
/// # Errors
///
/// See [`run`].
pub fn run_default<T, R, E>(
    estimator: &E,
    max_calls: usize,
    reference: T,
    source: &mut PointSource<R>,
) -> Result<ConvergenceSeries<T>>
where
    T: Float + Debug,
    R: Rng,
    E: Estimator<T>,
{
    run(
        estimator,
        max_calls,
        reference,
        &SweepConfig::default(),
        source,
        &SinkCallback {},
    )
}
