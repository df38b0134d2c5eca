//! Benchmark runner
//!
//! Times one encode per codec and collects the results into a [`Report`].
//! There is no warm-up, repetition, or outlier rejection; see the criterion
//! benches for repeated-sample measurements.

pub mod report;
pub mod runner;

// Re-export main types for convenience
pub use report::{Measurement, Outcome, OutputFormat, Report};
pub use runner::Runner;

use crate::config::BenchConfig;
use crate::error::Result;
use crate::record::{generate, seeded_rng};
use std::time::{Duration, Instant};

/// What the runner does when a codec fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop at the first failure and return it
    #[default]
    Abort,
    /// Record the failure in the report and move on to the next codec
    Continue,
}

/// Wall-clock time taken by a single call of `op`
pub fn measure(op: impl FnOnce()) -> Duration {
    let start = Instant::now();
    op();
    start.elapsed()
}

/// Like [`measure`], also handing back what `op` returned
pub fn measure_with<T>(op: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = op();
    (value, start.elapsed())
}

/// Generate the configured records and measure every configured codec
#[tracing::instrument(skip_all, fields(records = config.record_count))]
pub fn run(config: &BenchConfig) -> Result<Report> {
    let mut rng = seeded_rng(config.seed);
    let (records, elapsed) = measure_with(|| generate(config.record_count, &mut rng));
    tracing::info!(count = records.len(), ?elapsed, "generated records");

    let mut codecs: Vec<_> = config.codecs.iter().map(|kind| kind.build()).collect();
    Runner::from_config(config).run(&records, &mut codecs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_measure_fixed_sleep() {
        let interval = Duration::from_millis(50);
        let elapsed = measure(|| thread::sleep(interval));

        assert!(elapsed >= interval);
        assert!(elapsed < interval + Duration::from_millis(250), "took {:?}", elapsed);
    }

    #[test]
    fn test_measure_with_returns_value() {
        let (value, elapsed) = measure_with(|| 6 * 7);
        assert_eq!(value, 42);
        assert!(elapsed < Duration::from_secs(1));
    }

    #[test]
    fn test_measure_runs_op_once() {
        let mut calls = 0;
        measure(|| calls += 1);
        assert_eq!(calls, 1);
    }
}
