//! Implementation of different callback functions.
use crate::series::ConvergencePoint;
use num_traits::Float;
use serde::Serialize;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Trait for implementing callbacks for convergence sweeps.
pub trait Callback<T> {
    /// This method is called after each point of a sweep has been computed and may print
    /// information about it. `points` contains all points computed so far.
    fn print(&self, points: &[ConvergencePoint<T>]);
}

/// A callback function that does nothing
pub struct SinkCallback {}

impl<T> Callback<T> for SinkCallback {
    fn print(&self, _: &[ConvergencePoint<T>]) {}
}

/// A callback function that prints the result of each individual point
pub struct SimpleCallback {}

impl<T> Callback<T> for SimpleCallback
where
    T: Display + Float,
{
    fn print(&self, points: &[ConvergencePoint<T>]) {
        // Make sure that there is at least one point
        // otherwise do nothing.
        if let Some(point) = points.last() {
            println!(
                "point {}: N={} E={} error={}",
                points.len() - 1,
                point.calls(),
                point.estimate(),
                point.error()
            );
        }
    }
}

/// Writes all points computed so far as JSON into a file, replacing its previous content. This
/// lets an external program plot the error while the sweep is still running.
pub struct FileWriterCallback {
    path: PathBuf,
}

impl FileWriterCallback {
    /// Create a callback that writes into `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn write<T: Serialize>(&self, points: &[ConvergencePoint<T>]) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer(&mut writer, points)?;
        writer.flush()
    }
}

impl<T> Callback<T> for FileWriterCallback
where
    T: Serialize,
{
    fn print(&self, points: &[ConvergencePoint<T>]) {
        // a failing callback must not abort the sweep
        if let Err(err) = self.write(points) {
            tracing::warn!(path = %self.path.display(), error = %err, "could not write points");
        }
    }
}
