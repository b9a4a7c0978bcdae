//! The result of a convergence sweep.
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::io::{self, Write};

/// The absolute error of an estimate computed with a given number of calls.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct ConvergencePoint<T> {
    calls: usize,
    estimate: T,
    error: T,
}

impl<T: Float> ConvergencePoint<T> {
    /// Creates the point for an `estimate` obtained with `calls` calls, compared against the
    /// `reference` value of the integral.
    pub fn new(calls: usize, estimate: T, reference: T) -> Self {
        Self {
            calls,
            estimate,
            error: (estimate - reference).abs(),
        }
    }

    /// Returns the number of calls used for the estimate.
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// Returns the estimate of the integral.
    pub fn estimate(&self) -> T {
        self.estimate
    }

    /// Returns $|I_N - I|$.
    pub fn error(&self) -> T {
        self.error
    }
}

/// Errors for strictly increasing numbers of calls. The last point always has the number of calls
/// the sweep was asked for.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ConvergenceSeries<T> {
    points: Vec<ConvergencePoint<T>>,
}

impl<T> Default for ConvergenceSeries<T> {
    fn default() -> Self {
        Self { points: Vec::new() }
    }
}

impl<T: Float> ConvergenceSeries<T> {
    pub(crate) fn push(&mut self, point: ConvergencePoint<T>) {
        debug_assert!(self.points.last().map_or(true, |p| p.calls < point.calls));
        self.points.push(point);
    }

    /// Returns all points, ordered by the number of calls.
    pub fn points(&self) -> &[ConvergencePoint<T>] {
        &self.points
    }

    /// Returns the point with the most calls.
    pub fn last(&self) -> Option<&ConvergencePoint<T>> {
        self.points.last()
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The x values of an error plot.
    pub fn sample_counts(&self) -> Vec<usize> {
        self.points.iter().map(ConvergencePoint::calls).collect()
    }

    /// The y values of an error plot, aligned with [`ConvergenceSeries::sample_counts`].
    pub fn errors(&self) -> Vec<T> {
        self.points.iter().map(ConvergencePoint::error).collect()
    }

    /// Writes one line `calls error` per point, which is what plotting programs such as gnuplot
    /// read as a two-column data file.
    ///
    /// # Errors
    ///
    /// Passes on errors of `writer`.
    pub fn write_columns<W: Write>(&self, mut writer: W) -> io::Result<()>
    where
        T: Display,
    {
        for point in &self.points {
            writeln!(writer, "{} {}", point.calls, point.error)?;
        }

        writer.flush()
    }
}
