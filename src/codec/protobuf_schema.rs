//! Protocol Buffers schema for records
//!
//! The message types mirror `proto/records.proto` field for field, in the
//! form `prost-build` generates for that file.

use super::schema_codec::WireSchema;
use super::CodecKind;
use crate::record::Record;
use prost::Message;
use thiserror::Error;

/// Wire counterpart of [`Record`]
#[derive(Clone, PartialEq, Message)]
pub struct WireRecord {
    /// Display name
    #[prost(string, tag = "1")]
    pub name: String,
    /// Age in years
    #[prost(int32, tag = "2")]
    pub age: i32,
    /// Contact address
    #[prost(string, tag = "3")]
    pub email: String,
}

/// A whole record collection on the wire
#[derive(Clone, PartialEq, Message)]
pub struct WireRecordBatch {
    /// Records in generation order
    #[prost(message, repeated, tag = "1")]
    pub records: Vec<WireRecord>,
}

impl From<&Record> for WireRecord {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            age: i32::from(record.age),
            email: record.email.clone(),
        }
    }
}

impl TryFrom<WireRecord> for Record {
    type Error = WireDecodeError;

    fn try_from(wire: WireRecord) -> Result<Self, Self::Error> {
        let age = u8::try_from(wire.age).map_err(|_| WireDecodeError::AgeOutOfRange(wire.age))?;
        Ok(Self {
            name: wire.name,
            age,
            email: wire.email,
        })
    }
}

/// Failure turning protobuf bytes back into records
#[derive(Error, Debug)]
pub enum WireDecodeError {
    /// Malformed protobuf input
    #[error(transparent)]
    Protobuf(#[from] prost::DecodeError),

    /// Age field does not fit a record
    #[error("age {0} out of range")]
    AgeOutOfRange(i32),
}

/// [`WireSchema`] implementation backed by `prost`
#[derive(Debug)]
pub struct ProstSchema;

impl WireSchema for ProstSchema {
    const NAME: &'static str = CodecKind::Protobuf.label();
    type Message = WireRecordBatch;
    type EncodeError = prost::EncodeError;
    type DecodeError = WireDecodeError;

    fn build(records: &[Record]) -> Self::Message {
        WireRecordBatch {
            records: records.iter().map(WireRecord::from).collect(),
        }
    }

    fn serialize(message: &Self::Message, buffer: &mut Vec<u8>) -> Result<(), Self::EncodeError> {
        buffer.reserve(message.encoded_len());
        message.encode(buffer)
    }

    fn parse(bytes: &[u8]) -> Result<Self::Message, Self::DecodeError> {
        Ok(WireRecordBatch::decode(bytes)?)
    }

    fn into_records(message: Self::Message) -> Result<Vec<Record>, Self::DecodeError> {
        message.records.into_iter().map(Record::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Codec, SchemaCodec};

    #[test]
    fn test_conversion_is_lossless() {
        let record = Record::for_index(9, 99);
        let wire = WireRecord::from(&record);
        assert_eq!(wire.name, "User9");
        assert_eq!(wire.age, 99);
        assert_eq!(Record::try_from(wire).unwrap(), record);
    }

    #[test]
    fn test_age_out_of_range() {
        let wire = WireRecord {
            name: "User0".to_string(),
            age: 300,
            email: "user0@example.com".to_string(),
        };
        assert!(matches!(
            Record::try_from(wire),
            Err(WireDecodeError::AgeOutOfRange(300))
        ));
    }

    #[test]
    fn test_record_layout() {
        let mut codec = SchemaCodec::<ProstSchema>::new();
        let encoded = codec.encode(&[Record::for_index(0, 10)]).unwrap();

        // field 1 (batch.records, length-delimited), then the nested record
        assert_eq!(encoded[0], 0x0a);
        assert_eq!(encoded[1] as usize, encoded.len() - 2);
        assert_eq!(encoded[2], 0x0a);
        assert_eq!(encoded[3], 5);
        assert_eq!(&encoded[4..9], b"User0");
        assert_eq!(&encoded[9..11], &[0x10, 10]);
    }

    #[test]
    fn test_empty_batch_is_empty() {
        let mut codec = SchemaCodec::<ProstSchema>::new();
        assert!(codec.encode(&[]).unwrap().is_empty());
        assert!(codec.decode(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_decode_garbage() {
        let codec = SchemaCodec::<ProstSchema>::new();
        let err = codec.decode(&[0x0a, 0xff]).unwrap_err();
        assert_eq!(err.codec, "Protocol Buffers");
    }
}
