//! Schema-binary codec
//!
//! [`SchemaCodec`] does not know which schema compiler produced its message
//! type. It only needs a [`WireSchema`]: something that can build a wire
//! message from records, serialize it, and parse it back.

use super::Codec;
use crate::error::{DecodeFailure, DecodeResult, EncodeFailure, EncodeResult};
use crate::record::Record;
use std::fmt::Display;
use std::marker::PhantomData;

/// Construct-and-serialize capability of a compiled message schema
pub trait WireSchema {
    /// Report label of the wire format
    const NAME: &'static str;

    /// Message holding a whole record collection
    type Message;

    /// Error produced while serializing a message
    type EncodeError: Display;

    /// Error produced while parsing bytes or converting back to records
    type DecodeError: Display;

    /// Convert records into the schema's message type
    fn build(records: &[Record]) -> Self::Message;

    /// Append the wire representation of `message` to `buffer`
    fn serialize(message: &Self::Message, buffer: &mut Vec<u8>) -> Result<(), Self::EncodeError>;

    /// Parse a message from its wire representation
    fn parse(bytes: &[u8]) -> Result<Self::Message, Self::DecodeError>;

    /// Convert a parsed message back into records
    fn into_records(message: Self::Message) -> Result<Vec<Record>, Self::DecodeError>;
}

/// Codec encoding through a [`WireSchema`]
///
/// Every call to [`Codec::encode`] converts the records to a fresh wire
/// message before serializing it.
#[derive(Debug)]
pub struct SchemaCodec<S> {
    buffer: Vec<u8>,
    _schema: PhantomData<S>,
}

impl<S: WireSchema> Default for SchemaCodec<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: WireSchema> SchemaCodec<S> {
    /// Create a codec with an empty output buffer
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            _schema: PhantomData,
        }
    }
}

impl<S: WireSchema> Codec for SchemaCodec<S> {
    fn name(&self) -> &'static str {
        S::NAME
    }

    fn encode(&mut self, records: &[Record]) -> EncodeResult<&[u8]> {
        self.buffer.clear();
        let message = S::build(records);
        S::serialize(&message, &mut self.buffer).map_err(|e| EncodeFailure::new(S::NAME, e))?;
        Ok(&self.buffer)
    }

    fn decode(&self, bytes: &[u8]) -> DecodeResult<Vec<Record>> {
        let message = S::parse(bytes).map_err(|e| DecodeFailure::new(S::NAME, e))?;
        S::into_records(message).map_err(|e| DecodeFailure::new(S::NAME, e))
    }
}
