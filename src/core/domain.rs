//! Integration domains: one-dimensional intervals and axis-aligned boxes.
use super::error::{Error, Result};
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// A closed interval $[a, b]$ with finite bounds and $a \le b$.
///
/// Intervals with $a = b$ are allowed; they have zero length and every integral over them
/// vanishes.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(try_from = "RawInterval<T>")]
#[serde(bound(deserialize = "T: Float + Deserialize<'de>"))]
pub struct Interval<T> {
    lower: T,
    upper: T,
}

#[derive(Deserialize)]
struct RawInterval<T> {
    lower: T,
    upper: T,
}

impl<T: Float> TryFrom<RawInterval<T>> for Interval<T> {
    type Error = Error;

    fn try_from(raw: RawInterval<T>) -> Result<Self> {
        Self::new(raw.lower, raw.upper)
    }
}

impl<T: Float> Interval<T> {
    /// Constructs the interval from `lower` to `upper`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] if `lower > upper` or if one of the bounds is not finite.
    pub fn new(lower: T, upper: T) -> Result<Self> {
        if !lower.is_finite() || !upper.is_finite() || lower > upper {
            return Err(Error::InvalidInterval {
                lower: lower.to_f64().unwrap_or(f64::NAN),
                upper: upper.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self { lower, upper })
    }

    /// Returns the lower bound.
    pub fn lower(&self) -> T {
        self.lower
    }

    /// Returns the upper bound.
    pub fn upper(&self) -> T {
        self.upper
    }

    /// Returns $b - a$, the one-dimensional volume of the interval.
    pub fn length(&self) -> T {
        self.upper - self.lower
    }

    /// Returns `true` if both bounds coincide.
    pub fn is_degenerate(&self) -> bool {
        self.lower == self.upper
    }
}

/// An axis-aligned box, given as one [`Interval`] per dimension.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(try_from = "RawDomain<T>")]
#[serde(bound(deserialize = "T: Float + Deserialize<'de>"))]
pub struct Domain<T> {
    intervals: Vec<Interval<T>>,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Float + Deserialize<'de>"))]
struct RawDomain<T> {
    intervals: Vec<Interval<T>>,
}

impl<T: Float> TryFrom<RawDomain<T>> for Domain<T> {
    type Error = Error;

    fn try_from(raw: RawDomain<T>) -> Result<Self> {
        Self::new(raw.intervals)
    }
}

impl<T: Float> Domain<T> {
    /// Constructs a domain whose dimension is the number of `intervals`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDomain`] if `intervals` is empty.
    pub fn new(intervals: Vec<Interval<T>>) -> Result<Self> {
        if intervals.is_empty() {
            return Err(Error::EmptyDomain);
        }

        Ok(Self { intervals })
    }

    /// Constructs a domain from `(lower, upper)` pairs.
    ///
    /// # Errors
    ///
    /// Fails if one of the pairs is not a valid [`Interval`] or if `bounds` is empty.
    pub fn from_bounds(bounds: &[(T, T)]) -> Result<Self> {
        bounds
            .iter()
            .map(|&(lower, upper)| Interval::new(lower, upper))
            .collect::<Result<Vec<_>>>()
            .and_then(Self::new)
    }

    /// Returns the number of dimensions.
    pub fn dim(&self) -> usize {
        self.intervals.len()
    }

    /// Returns the intervals, one for each dimension.
    pub fn intervals(&self) -> &[Interval<T>] {
        &self.intervals
    }

    /// Returns `true` if at least one of the intervals is degenerate.
    pub fn is_degenerate(&self) -> bool {
        self.intervals.iter().any(Interval::is_degenerate)
    }

    /// Returns the volume $\prod_{i=1}^d (b_i - a_i)$. The volume of a degenerate domain is exactly
    /// zero.
    pub fn volume(&self) -> T {
        if self.is_degenerate() {
            return T::zero();
        }

        self.intervals
            .iter()
            .fold(T::one(), |volume, interval| volume * interval.length())
    }
}

impl<T: Float> From<Interval<T>> for Domain<T> {
    fn from(interval: Interval<T>) -> Self {
        Self {
            intervals: vec![interval],
        }
    }
}
