//! Codec adapters
//!
//! Each serialization strategy sits behind the [`Codec`] trait so the runner
//! can treat them uniformly. Three strategies are provided:
//!
//! - **JSON** ([`JsonCodec`]) - self-describing text, field names repeated
//!   for every record
//! - **Bincode** ([`BincodeCodec`]) - Rust-native length-prefixed binary
//! - **Protocol Buffers** ([`SchemaCodec`] over [`ProstSchema`]) - compact
//!   wire format driven by the schema in `proto/records.proto`
//!
//! # Example
//!
//! ```rust
//! use record_codec_bench::codec::{Codec, JsonCodec};
//! use record_codec_bench::record::Record;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let records = vec![Record::for_index(0, 30)];
//! let mut codec = JsonCodec::new();
//!
//! let encoded = codec.encode(&records)?.to_vec();
//! assert_eq!(codec.decode(&encoded)?, records);
//! # Ok(())
//! # }
//! ```

pub mod bincode_codec;
pub mod json_codec;
pub mod protobuf_schema;
pub mod schema_codec;

// Re-export main types for convenience
pub use bincode_codec::BincodeCodec;
pub use json_codec::JsonCodec;
pub use protobuf_schema::{ProstSchema, WireDecodeError, WireRecord, WireRecordBatch};
pub use schema_codec::{SchemaCodec, WireSchema};

use crate::error::{DecodeResult, EncodeResult};
use crate::record::Record;
use serde::Serialize;

/// A named encode strategy over a collection of records
pub trait Codec {
    /// Label used in reports and error messages
    fn name(&self) -> &'static str;

    /// Encode `records` from scratch
    ///
    /// The returned slice borrows the codec's output buffer, which is reset
    /// on every call. Nothing from a previous call is reused.
    fn encode(&mut self, records: &[Record]) -> EncodeResult<&[u8]>;

    /// Decode bytes produced by [`Codec::encode`]
    fn decode(&self, bytes: &[u8]) -> DecodeResult<Vec<Record>>;
}

/// The serialization strategies known to the harness
///
/// Variant order is the order codecs are measured and reported in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum CodecKind {
    /// Tagged text (JSON)
    Json,
    /// Native binary (bincode)
    Bincode,
    /// Schema binary (Protocol Buffers)
    Protobuf,
}

impl CodecKind {
    /// Every strategy, in report order
    pub const ALL: [CodecKind; 3] = [CodecKind::Json, CodecKind::Bincode, CodecKind::Protobuf];

    /// Label printed in the report
    pub const fn label(self) -> &'static str {
        match self {
            CodecKind::Json => "JSON",
            CodecKind::Bincode => "Bincode",
            CodecKind::Protobuf => "Protocol Buffers",
        }
    }

    /// Construct a fresh codec of this kind
    pub fn build(self) -> Box<dyn Codec> {
        match self {
            CodecKind::Json => Box::new(JsonCodec::new()),
            CodecKind::Bincode => Box::new(BincodeCodec::new()),
            CodecKind::Protobuf => Box::new(SchemaCodec::<ProstSchema>::new()),
        }
    }
}
