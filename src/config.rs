//! Run configuration
//!
//! Every option can be given as a command-line flag or through the
//! environment variable listed next to it.

use crate::bench::{FailurePolicy, OutputFormat};
use crate::codec::CodecKind;
use crate::record::constants::DEFAULT_RECORD_COUNT;
use clap::Parser;

/// Command-line arguments
#[derive(Debug, Clone, Parser)]
#[command(name = "record-codec-bench")]
#[command(version, about = "Compare encoded size and encode time of JSON, bincode and Protocol Buffers")]
#[command(long_about = None)]
pub struct Cli {
    /// Number of records to generate
    #[arg(long, env = "CODEC_BENCH_RECORDS", default_value_t = DEFAULT_RECORD_COUNT)]
    pub records: usize,

    /// Seed for record ages (drawn from OS entropy when omitted)
    #[arg(long, env = "CODEC_BENCH_SEED")]
    pub seed: Option<u64>,

    /// Codec to measure, repeatable (default: all)
    #[arg(long = "codec", value_enum, env = "CODEC_BENCH_CODECS", value_delimiter = ',')]
    pub codecs: Vec<CodecKind>,

    /// What to do when a codec fails
    #[arg(long, value_enum, env = "CODEC_BENCH_ON_ERROR", default_value_t = FailurePolicy::Abort)]
    pub on_error: FailurePolicy,

    /// Decode each codec's output and compare it with the generated records
    #[arg(long, env = "CODEC_BENCH_VERIFY")]
    pub verify: bool,

    /// Report format on stdout
    #[arg(long, value_enum, env = "CODEC_BENCH_OUTPUT", default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

/// Settings for one benchmark run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Number of records to generate
    pub record_count: usize,
    /// Seed for record ages
    pub seed: Option<u64>,
    /// Codecs to measure, in report order and without duplicates
    pub codecs: Vec<CodecKind>,
    /// Handling of codec failures
    pub failure_policy: FailurePolicy,
    /// Round-trip check after timing
    pub verify: bool,
    /// Report format
    pub output: OutputFormat,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            record_count: DEFAULT_RECORD_COUNT,
            seed: None,
            codecs: CodecKind::ALL.to_vec(),
            failure_policy: FailurePolicy::Abort,
            verify: false,
            output: OutputFormat::Text,
        }
    }
}

impl BenchConfig {
    /// Config for `record_count` records with every other setting at its default
    pub fn with_records(record_count: usize) -> Self {
        Self {
            record_count,
            ..Self::default()
        }
    }
}

impl From<Cli> for BenchConfig {
    fn from(cli: Cli) -> Self {
        let mut codecs = cli.codecs;
        if codecs.is_empty() {
            codecs = CodecKind::ALL.to_vec();
        }
        codecs.sort();
        codecs.dedup();

        Self {
            record_count: cli.records,
            seed: cli.seed,
            codecs,
            failure_policy: cli.on_error,
            verify: cli.verify,
            output: cli.output,
        }
    }
}
