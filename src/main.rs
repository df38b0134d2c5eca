//! Command-line entry point
//!
//! ```bash
//! # default run: one million records, all three codecs
//! record-codec-bench
//!
//! # reproducible smaller run with round-trip verification
//! record-codec-bench --records 10000 --seed 42 --verify
//!
//! # only the binary formats, JSON report, keep going on failure
//! CODEC_BENCH_CODECS=bincode,protobuf record-codec-bench --output json --on-error continue
//! ```

use clap::Parser;
use color_eyre::eyre::{bail, Result};
use record_codec_bench::bench::{self, OutputFormat};
use record_codec_bench::config::{BenchConfig, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = BenchConfig::from(Cli::parse());
    tracing::info!(?config, "starting benchmark");

    let report = bench::run(&config)?;

    match config.output {
        OutputFormat::Text => print!("{}", report),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    if report.has_failures() {
        bail!("{} codec(s) failed", report.failures().count());
    }

    Ok(())
}
