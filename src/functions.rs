//! Built-in integrands with known integrals, useful as references for convergence sweeps.
use crate::core::{Domain, IntegrandError, Integrand, Interval, UnivariateIntegrand};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Elementary functions of one variable.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Function {
    /// $f(x) = x^2$
    Square,
    /// $f(x) = \sin x$
    Sin,
    /// $f(x) = e^x$
    Exp,
}

impl Function {
    /// All built-in functions.
    pub const ALL: [Self; 3] = [Self::Square, Self::Sin, Self::Exp];

    /// Evaluates the function at `x`.
    pub fn eval(self, x: f64) -> f64 {
        match self {
            Self::Square => x * x,
            Self::Sin => x.sin(),
            Self::Exp => x.exp(),
        }
    }

    /// Evaluates an antiderivative at `x`.
    pub fn antiderivative(self, x: f64) -> f64 {
        match self {
            Self::Square => x * x * x / 3.0,
            Self::Sin => -x.cos(),
            Self::Exp => x.exp(),
        }
    }

    /// Returns the exact integral over `interval`.
    pub fn exact_integral(self, interval: &Interval<f64>) -> f64 {
        if interval.is_degenerate() {
            return 0.0;
        }

        self.antiderivative(interval.upper()) - self.antiderivative(interval.lower())
    }
}

impl UnivariateIntegrand<f64> for Function {
    fn call(&self, x: f64) -> Result<f64, IntegrandError> {
        Ok(self.eval(x))
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Square => "x^2",
            Self::Sin => "sin",
            Self::Exp => "exp",
        })
    }
}

/// Error returned when parsing an unknown function name.
#[derive(Debug, thiserror::Error)]
#[error("unknown function `{0}`, expected one of `x^2`, `sin`, `exp`")]
pub struct UnknownFunction(String);

impl FromStr for Function {
    type Err = UnknownFunction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x^2" | "square" => Ok(Self::Square),
            "sin" | "sin(x)" => Ok(Self::Sin),
            "exp" | "exp(x)" => Ok(Self::Exp),
            other => Err(UnknownFunction(other.to_string())),
        }
    }
}

/// The multi-dimensional integrand $f(x_1, \ldots, x_d) = \sin x_1$.
#[derive(Clone, Copy, Debug, Default)]
pub struct SinOfFirst;

impl SinOfFirst {
    /// Returns the exact integral
    /// $(\cos a_1 - \cos b_1) \prod_{i=2}^d (b_i - a_i)$ over `domain`.
    pub fn exact_integral(self, domain: &Domain<f64>) -> f64 {
        if domain.is_degenerate() {
            return 0.0;
        }

        let (first, rest) = match domain.intervals().split_first() {
            Some(split) => split,
            None => return 0.0,
        };

        rest.iter().fold(Function::Sin.exact_integral(first), |acc, interval| {
            acc * interval.length()
        })
    }
}

impl Integrand<f64> for SinOfFirst {
    fn call(&self, x: &[f64]) -> Result<f64, IntegrandError> {
        x.first()
            .map(|x| x.sin())
            .ok_or_else(|| "sin of the first coordinate needs at least one coordinate".into())
    }
}
