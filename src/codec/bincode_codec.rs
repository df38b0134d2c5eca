//! Native-binary codec backed by bincode 2

use super::{Codec, CodecKind};
use crate::error::{DecodeFailure, DecodeResult, EncodeFailure, EncodeResult};
use crate::record::Record;
use bincode::config::Configuration;

const CONFIG: Configuration = bincode::config::standard();

/// Encodes records with bincode's standard configuration
///
/// The sequence and every string carry a varint length prefix; integers are
/// varint encoded.
#[derive(Debug, Default)]
pub struct BincodeCodec {
    buffer: Vec<u8>,
}

impl BincodeCodec {
    /// Create a codec with an empty output buffer
    pub fn new() -> Self {
        Self::default()
    }
}

impl Codec for BincodeCodec {
    fn name(&self) -> &'static str {
        CodecKind::Bincode.label()
    }

    fn encode(&mut self, records: &[Record]) -> EncodeResult<&[u8]> {
        self.buffer.clear();
        bincode::encode_into_std_write(records, &mut self.buffer, CONFIG)
            .map_err(|e| EncodeFailure::new(self.name(), e))?;
        Ok(&self.buffer)
    }

    fn decode(&self, bytes: &[u8]) -> DecodeResult<Vec<Record>> {
        let (records, read): (Vec<Record>, usize) =
            bincode::decode_from_slice(bytes, CONFIG)
                .map_err(|e| DecodeFailure::new(self.name(), e))?;

        if read != bytes.len() {
            return Err(DecodeFailure::new(
                self.name(),
                format!("{} trailing bytes", bytes.len() - read),
            ));
        }

        Ok(records)
    }
}
