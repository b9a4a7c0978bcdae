#![warn(clippy::all, clippy::cargo, clippy::nursery, clippy::pedantic)]
#![warn(missing_docs)]

//! The crate `mcconv` provides plain [Monte Carlo integration] of one- and multi-dimensional
//! definite [integrals] over axis-aligned boxes, together with *convergence sweeps* that show how
//! the error of the estimate shrinks when the number of samples grows.
//!
//! # Features
//!
//! - **Generic numeric type**. The numeric type used in this library is not fixed, but instead a
//! generic parameter, so that the integration routines can be used with either `f32`, `f64`, or a
//! custom numeric type that implements the `Float` trait from the `num-traits` crate.
//! - **Generic random number generator**. Every random number generator that implements the `Rng`
//! trait from the `rand` crate can be used. The generator is owned by a [`PointSource`] that is
//! passed explicitly to every integration, so there is no hidden global state and results only
//! depend on the chosen generator and its seed.
//! - **Exact zeros**. Integrals over domains where one of the intervals has zero length are exactly
//! zero, independently of the integrand.
//! - **Fallible integrands**. Integrands may return errors, which abort the integration and are
//! handed back to the caller unchanged.
//! - **Convergence sweeps**. [`sweep::run`] recomputes an estimate for a growing number of calls
//! and records its distance to a reference value, ready to be plotted.
//!
//! # How do I get started?
//!
//! ```
//! use mcconv::integrators::{scalar, ScalarEstimator};
//! use mcconv::{sweep, Interval, PointSource};
//!
//! let interval = Interval::new(0.0, 1.0)?;
//! let mut source = PointSource::seed_from_u64(42);
//!
//! let square = |x: f64| x * x;
//! let estimate = scalar::integrate(&interval, 10_000, &square, &mut source)?;
//! assert!((estimate.value() - 1.0 / 3.0).abs() < 0.05);
//!
//! let series = sweep::run_default(&ScalarEstimator::new(interval, &square), 2_000, 1.0 / 3.0, &mut source)?;
//! assert_eq!(series.last().map(|p| p.calls()), Some(2_000));
//! # Ok::<(), mcconv::Error>(())
//! ```
//!
//! # What is ...?
//!
//! This section is a dictionary of terms that are used in this documentation. Given
//!
//! $$ I = \int_{a_1}^{b_1} \mathrm{d} x_1 \cdots \int_{a_d}^{b_d} \mathrm{d} x_d \, f(x_1, \ldots, x_d) $$
//!
//! we approximate $I$ using PLAIN Monte Carlo integration with
//!
//! $$ I \approx \frac{V}{N} \sum_{j=1}^N f \left( x_1^{(j)}, x_2^{(j)}, \ldots, x_d^{(j)} \right),
//! \quad V = \prod_{i=1}^d (b_i - a_i) $$
//!
//! where for each $j$ the value of $x_i^{(j)}$ is uniformly distributed in $[a_i, b_i]$. We use the
//! following terms:
//!
//! - the number of *calls* or the *sample size* is $N$, which is the number of times the integrand
//! is evaluated,
//! - the *integrand* is the function, $f(x_1, x_2, \ldots, x_d)$, that is being integrated,
//! - the number of *dimensions*, $d$, is number of dimensions of the integration domain,
//! - the *volume* is $V$; a domain is *degenerate* if one of its intervals has $a_i = b_i$, which
//! makes its volume zero,
//! - a *convergence series* is the list of pairs $(N, |I_N - I_\mathrm{ref}|)$ produced by a sweep.
//!
//! [Monte Carlo integration]: https://en.wikipedia.org/wiki/Monte_Carlo_integration
//! [integrals]: https://en.wikipedia.org/wiki/Integral

pub mod callbacks;
pub mod core;
pub mod functions;
pub mod integrators;
pub mod series;
pub mod sweep;

pub use crate::core::*;
