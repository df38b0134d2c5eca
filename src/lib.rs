//! # Record Codec Bench
//!
//! A small harness comparing serialization formats on one synthetic data set:
//! how many bytes each format produces and how long one encode takes.
//!
//! ## Modules
//!
//! - **Record Module**: the [`Record`](record::Record) type and its generator
//! - **Codec Module**: the [`Codec`](codec::Codec) trait with JSON, bincode
//!   and Protocol Buffers adapters
//! - **Bench Module**: timing primitive, runner and report
//! - **Config Module**: command-line and environment configuration
//!
//! ## Example
//!
//! ```rust
//! use record_codec_bench::prelude::*;
//!
//! let mut rng = seeded_rng(Some(7));
//! let records = generate(1_000, &mut rng);
//!
//! let mut codecs: Vec<_> = CodecKind::ALL.iter().map(|kind| kind.build()).collect();
//! let report = Runner::new(FailurePolicy::Abort).run(&records, &mut codecs)?;
//!
//! assert_eq!(report.measurements.len(), 3);
//! print!("{}", report);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

// Re-export core error types
pub use error::{Error, Result};

// Core modules
pub mod error;
pub mod record;
pub mod codec;
pub mod bench;
pub mod config;

// Utility modules
mod utils;

// Re-export commonly used types
pub mod prelude {
    //! Common types and traits for convenient importing

    pub use crate::error::{DecodeFailure, EncodeFailure, Error, Result};
    pub use crate::record::{generate, seeded_rng, Record};
    pub use crate::codec::{BincodeCodec, Codec, CodecKind, JsonCodec, ProstSchema, SchemaCodec};
    pub use crate::bench::{measure, measure_with, FailurePolicy, OutputFormat, Report, Runner};
    pub use crate::config::{BenchConfig, Cli};
}

// Version information
/// The version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of this crate
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
