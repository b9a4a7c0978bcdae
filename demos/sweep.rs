//! Integrates a built-in function and writes the convergence series as a two-column data file.
//!
//! Usage: `cargo run --example sweep -- [function] [lower] [upper] [calls] [output]`, for example
//! `cargo run --example sweep -- sin 0 3.14159 10000 errors.dat`. Set `RUST_LOG=debug` to see
//! every point of the sweep.
use mcconv::callbacks::SimpleCallback;
use mcconv::functions::Function;
use mcconv::integrators::{scalar, ScalarEstimator};
use mcconv::sweep::{self, SweepConfig};
use mcconv::{BasicEstimators, Interval, PointSource};

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), Box<dyn Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let function: Function = args.next().as_deref().unwrap_or("x^2").parse()?;
    let lower: f64 = args.next().as_deref().unwrap_or("0").parse()?;
    let upper: f64 = args.next().as_deref().unwrap_or("1").parse()?;
    let calls: usize = args.next().as_deref().unwrap_or("10000").parse()?;
    let output = args.next().unwrap_or_else(|| "errors.dat".to_string());

    let interval = Interval::new(lower, upper)?;
    let mut source = PointSource::seed_from_u64(0xcafe_f00d);

    let estimate = scalar::integrate(&interval, calls, &function, &mut source)?;
    let exact = function.exact_integral(&interval);

    println!(
        "integral of {} over [{}, {}]: {} \u{b1} {} (exact: {})",
        function,
        lower,
        upper,
        estimate.mean(),
        estimate.std(),
        exact
    );

    let series = sweep::run(
        &ScalarEstimator::new(interval, &function),
        calls,
        exact,
        &SweepConfig::default(),
        &mut source,
        &SimpleCallback {},
    )?;

    series.write_columns(BufWriter::new(File::create(&output)?))?;
    println!("plot with: gnuplot -p -e \"set logscale xy; plot '{}' with linespoints\"", output);

    Ok(())
}
