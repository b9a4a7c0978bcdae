use mcconv::functions::{Function, SinOfFirst};
use mcconv::integrators::{scalar, volume};
use mcconv::*;

use assert_approx_eq::assert_approx_eq;
use rand::Rng;
use rand_pcg::Pcg64;
use serde::Serialize;
use std::f64::consts::PI;
use std::sync::atomic::{AtomicUsize, Ordering};

fn assert_eq_rng<R>(lhs: &R, rhs: &R)
where
    R: Rng + Serialize,
{
    assert_eq!(
        serde_json::to_string(lhs).unwrap(),
        serde_json::to_string(rhs).unwrap()
    );
}

fn rng() -> Pcg64 {
    Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96)
}

#[derive(Debug, thiserror::Error)]
#[error("singular at {0}")]
struct Singular(f64);

/// $1/(x - 1/2)$ is not integrable across $x = 1/2$; this integrand refuses to be evaluated there.
struct Pole;

impl UnivariateIntegrand<f64> for Pole {
    fn call(&self, x: f64) -> std::result::Result<f64, IntegrandError> {
        if x > 0.5 {
            Err(Box::new(Singular(x)))
        } else {
            Ok(1.0 / (x - 0.5))
        }
    }
}

impl Integrand<f64> for Pole {
    fn call(&self, x: &[f64]) -> std::result::Result<f64, IntegrandError> {
        UnivariateIntegrand::call(self, x[0])
    }
}

#[test]
fn square() {
    let interval = Interval::new(0.0, 1.0).unwrap();
    let estimate =
        scalar::integrate(&interval, 100_000, &|x: f64| x * x, &mut PointSource::new(rng()))
            .unwrap();

    assert_approx_eq!(estimate.value(), 1.0 / 3.0, 0.01);
}

#[test]
fn sin() {
    let interval = Interval::new(0.0, PI).unwrap();
    let estimate =
        scalar::integrate(&interval, 1_000_000, &Function::Sin, &mut PointSource::new(rng()))
            .unwrap();

    assert_approx_eq!(estimate.value(), 2.0, 0.01);
}

#[test]
fn exp() {
    let interval = Interval::new(0.0, 1.0).unwrap();
    let estimate =
        scalar::integrate(&interval, 100_000, &Function::Exp, &mut PointSource::new(rng()))
            .unwrap();

    assert_approx_eq!(
        estimate.value(),
        Function::Exp.exact_integral(&interval),
        0.01
    );
}

#[test]
fn unit_cube() {
    let domain = Domain::from_bounds(&[(0.0, 1.0), (0.0, 1.0), (0.0, 1.0)]).unwrap();
    let estimate =
        volume::integrate(&domain, 10_000, &|_: &[f64]| 1.0, &mut PointSource::new(rng()))
            .unwrap();

    assert_approx_eq!(estimate.value(), 1.0, 0.01);
}

#[test]
fn product_on_unit_square() {
    let domain = Domain::from_bounds(&[(0.0, 1.0), (0.0, 1.0)]).unwrap();
    let estimate = volume::integrate(
        &domain,
        10_000,
        &|x: &[f64]| x[0] * x[1],
        &mut PointSource::new(rng()),
    )
    .unwrap();

    assert_approx_eq!(estimate.value(), 0.25, 0.01);
}

#[test]
fn sin_of_first_coordinate() {
    let domain = Domain::from_bounds(&[(0.0, PI), (-1.0, 1.0)]).unwrap();
    let estimate =
        volume::integrate(&domain, 200_000, &SinOfFirst, &mut PointSource::new(rng())).unwrap();

    assert_approx_eq!(estimate.value(), SinOfFirst.exact_integral(&domain), 0.03);
}

#[test]
fn peaked_integrands() {
    let interval = Interval::new(0.0, 1.0).unwrap();
    let step = |x: f64| if x < 0.5 { 1000.0 } else { 0.0 };
    let estimate = scalar::integrate(&interval, 10_000, &step, &mut PointSource::new(rng())).unwrap();

    assert!(estimate.value() > 450.0 && estimate.value() < 550.0);
    assert!(estimate.non_zero_calls() < estimate.calls());

    let domain = Domain::from_bounds(&[(0.0, 1.0), (0.0, 1.0)]).unwrap();
    let corner = |x: &[f64]| if x[0] < 0.5 && x[1] < 0.5 { 1000.0 } else { 0.0 };
    let estimate = volume::integrate(&domain, 10_000, &corner, &mut PointSource::new(rng())).unwrap();

    assert!(estimate.value() > 200.0 && estimate.value() < 300.0);
}

#[test]
fn zero_integrand() {
    let interval = Interval::new(0.0, 1.0).unwrap();
    let estimate =
        scalar::integrate(&interval, 10_000, &|_: f64| 0.0, &mut PointSource::new(rng())).unwrap();

    assert_eq!(estimate.value(), 0.0);
    assert_eq!(estimate.non_zero_calls(), 0);
}

#[test]
fn single_call_is_far_off() {
    let interval = Interval::new(0.0, 1.0).unwrap();
    let mut source = PointSource::new(rng());

    // with a single sample the estimate is x^2 for one random x, the mean error is about 0.26
    let mean_error = (0..100)
        .map(|_| {
            scalar::integrate(&interval, 1, &|x: f64| x * x, &mut source)
                .unwrap()
                .value()
        })
        .map(|v| (v - 1.0 / 3.0).abs())
        .sum::<f64>()
        / 100.0;

    assert!(mean_error > 0.1);
}

#[test]
fn degenerate_interval_is_exactly_zero() {
    let interval = Interval::new(1.0, 1.0).unwrap();
    let mut source = PointSource::new(rng());

    for &calls in &[1, 2, 17, 10_000] {
        assert_eq!(
            scalar::integrate(&interval, calls, &|x: f64| x * x, &mut source)
                .unwrap()
                .value(),
            0.0
        );
        assert_eq!(
            scalar::integrate(&interval, calls, &|_: f64| 1e300, &mut source)
                .unwrap()
                .value(),
            0.0
        );
        assert_eq!(
            scalar::integrate(&interval, calls, &|_: f64| f64::INFINITY, &mut source)
                .unwrap()
                .value(),
            0.0
        );
    }
}

#[test]
fn degenerate_domain_is_exactly_zero() {
    let domain = Domain::from_bounds(&[(0.0, 1.0), (2.0, 2.0), (-5.0, 5.0)]).unwrap();
    let mut source = PointSource::new(rng());

    for &calls in &[1, 10, 10_000] {
        let estimate = volume::integrate(&domain, calls, &|_: &[f64]| -3.5, &mut source).unwrap();

        assert_eq!(estimate.value(), 0.0);
        assert_eq!(estimate.var(), 0.0);
    }
}

#[test]
fn zero_calls_draw_nothing() {
    let count = AtomicUsize::new(0);
    let scalar_integrand = |x: f64| {
        count.fetch_add(1, Ordering::Relaxed);
        x
    };
    let vector_integrand = |x: &[f64]| {
        count.fetch_add(1, Ordering::Relaxed);
        x[0]
    };

    let interval = Interval::new(0.0, 1.0).unwrap();
    let domain = Domain::from_bounds(&[(0.0, 1.0), (0.0, 1.0)]).unwrap();
    let mut source = PointSource::new(rng());

    assert!(matches!(
        scalar::integrate(&interval, 0, &scalar_integrand, &mut source),
        Err(Error::InvalidSampleCount)
    ));
    assert!(matches!(
        volume::integrate(&domain, 0, &vector_integrand, &mut source),
        Err(Error::InvalidSampleCount)
    ));

    assert_eq!(count.load(Ordering::Relaxed), 0);
    assert_eq_rng(source.rng(), &rng());
}

#[test]
fn generator_advances_by_calls_times_dimension() {
    let domain = Domain::from_bounds(&[(0.0, 1.0), (0.0, 1.0), (0.0, 1.0)]).unwrap();
    let mut source = PointSource::new(rng());
    volume::integrate(&domain, 250, &|x: &[f64]| x[2], &mut source).unwrap();

    let mut replay = rng();
    for _ in 0..250 * 3 {
        let _: f64 = replay.gen();
    }

    assert_eq_rng(source.rng(), &replay);
}

#[test]
fn same_seed_same_estimate() {
    let interval = Interval::new(-2.0, 3.0).unwrap();
    let first = scalar::integrate(&interval, 5_000, &Function::Exp, &mut PointSource::new(rng()))
        .unwrap();
    let second = scalar::integrate(&interval, 5_000, &Function::Exp, &mut PointSource::new(rng()))
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn integrand_errors_are_passed_on() {
    let interval = Interval::new(0.0, 1.0).unwrap();
    let domain = Domain::from(interval);
    let mut source = PointSource::new(rng());

    for result in vec![
        scalar::integrate(&interval, 1_000, &Pole, &mut source),
        volume::integrate(&domain, 1_000, &Pole, &mut source),
    ] {
        match result {
            Err(Error::Integrand(err)) => {
                let singular = err.downcast_ref::<Singular>().expect("wrong error type");
                assert!(singular.0 > 0.5);
            }
            other => panic!("expected an integrand error, got {:?}", other),
        }
    }
}

#[test]
fn error_shrinks_with_calls() {
    // The number of independent estimates per sample size
    const TRIALS: usize = 200;

    let interval = Interval::new(0.0, 1.0).unwrap();
    let exact = Function::Square.exact_integral(&interval);
    let mut source = PointSource::new(rng());

    let mean_errors = [10, 100, 1_000, 10_000]
        .iter()
        .map(|&calls| {
            (0..TRIALS)
                .map(|_| {
                    let estimate =
                        scalar::integrate(&interval, calls, &Function::Square, &mut source)
                            .unwrap();
                    (estimate.value() - exact).abs()
                })
                .sum::<f64>()
                / TRIALS as f64
        })
        .collect::<Vec<_>>();

    for pair in mean_errors.windows(2) {
        assert!(pair[1] < pair[0], "{:?}", mean_errors);
    }
}
