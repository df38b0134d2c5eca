//! Benchmark results and their rendering

use serde::{Serialize, Serializer};
use std::fmt;
use std::time::Duration;

/// How the report is written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per codec
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Result of benchmarking one codec
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    /// Encoding succeeded
    Measured {
        /// Length of the encoded output in bytes
        encoded_len: usize,
        /// Time taken by the timed encode
        #[serde(rename = "elapsed_secs", serialize_with = "as_secs_f64")]
        elapsed: Duration,
    },
    /// The codec failed and the run continued
    Failed {
        /// Error message naming the codec
        reason: String,
    },
}

/// One line of the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    /// Codec label
    pub codec: &'static str,
    /// What happened
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl Measurement {
    /// A successful measurement
    pub fn measured(codec: &'static str, encoded_len: usize, elapsed: Duration) -> Self {
        Self {
            codec,
            outcome: Outcome::Measured {
                encoded_len,
                elapsed,
            },
        }
    }

    /// A recorded failure
    pub fn failed(codec: &'static str, reason: impl fmt::Display) -> Self {
        Self {
            codec,
            outcome: Outcome::Failed {
                reason: reason.to_string(),
            },
        }
    }

    /// Encoded size, when the codec succeeded
    pub fn encoded_len(&self) -> Option<usize> {
        match self.outcome {
            Outcome::Measured { encoded_len, .. } => Some(encoded_len),
            Outcome::Failed { .. } => None,
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Measured {
                encoded_len,
                elapsed,
            } => write!(
                f,
                "{} Size: {} bytes, Time: {:?}",
                self.codec, encoded_len, elapsed
            ),
            Outcome::Failed { reason } => write!(f, "{} failed: {}", self.codec, reason),
        }
    }
}

/// All measurements of one run, in report order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Number of records every codec encoded
    pub records: usize,
    /// One entry per codec
    pub measurements: Vec<Measurement>,
}

impl Report {
    /// Measurement for the codec with the given label
    pub fn get(&self, codec: &str) -> Option<&Measurement> {
        self.measurements.iter().find(|m| m.codec == codec)
    }

    /// Measurements whose codec failed
    pub fn failures(&self) -> impl Iterator<Item = &Measurement> {
        self.measurements
            .iter()
            .filter(|m| matches!(m.outcome, Outcome::Failed { .. }))
    }

    /// Whether any codec failed
    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for measurement in &self.measurements {
            writeln!(f, "{}", measurement)?;
        }
        Ok(())
    }
}

fn as_secs_f64<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}
