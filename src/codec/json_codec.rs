//! Tagged-text codec backed by `serde_json`

use super::{Codec, CodecKind};
use crate::error::{DecodeFailure, DecodeResult, EncodeFailure, EncodeResult};
use crate::record::Record;

/// Encodes records as a JSON array of objects
#[derive(Debug, Default)]
pub struct JsonCodec {
    buffer: Vec<u8>,
}

impl JsonCodec {
    /// Create a codec with an empty output buffer
    pub fn new() -> Self {
        Self::default()
    }
}

impl Codec for JsonCodec {
    fn name(&self) -> &'static str {
        CodecKind::Json.label()
    }

    fn encode(&mut self, records: &[Record]) -> EncodeResult<&[u8]> {
        self.buffer.clear();
        serde_json::to_writer(&mut self.buffer, records)
            .map_err(|e| EncodeFailure::new(self.name(), e))?;
        Ok(&self.buffer)
    }

    fn decode(&self, bytes: &[u8]) -> DecodeResult<Vec<Record>> {
        serde_json::from_slice(bytes).map_err(|e| DecodeFailure::new(self.name(), e))
    }
}
