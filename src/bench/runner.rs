//! Drives each codec through a reference encode and a timed encode

use super::report::{Measurement, Report};
use super::{measure_with, FailurePolicy};
use crate::codec::Codec;
use crate::config::BenchConfig;
use crate::error::{Error, Result};
use crate::record::Record;
use crate::utils::hex_preview;
use tracing::{debug, info, warn};

/// Bytes of encoded output shown in debug logs
const PREVIEW_BYTES: usize = 16;

/// Measures codecs one after another on the same record collection
#[derive(Debug, Clone, Default)]
pub struct Runner {
    policy: FailurePolicy,
    verify: bool,
}

impl Runner {
    /// Create a runner with the given failure policy
    pub fn new(policy: FailurePolicy) -> Self {
        Self {
            policy,
            verify: false,
        }
    }

    /// Create a runner from a run configuration
    pub fn from_config(config: &BenchConfig) -> Self {
        Self::new(config.failure_policy).with_verify(config.verify)
    }

    /// Decode each codec's output after timing and compare it with the input
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Measure every codec in the order given
    ///
    /// Under [`FailurePolicy::Abort`] the first failing codec ends the run
    /// with its error. Under [`FailurePolicy::Continue`] the failure is
    /// recorded and the remaining codecs still run.
    #[tracing::instrument(skip_all, fields(records = records.len(), codecs = codecs.len()))]
    pub fn run(&self, records: &[Record], codecs: &mut [Box<dyn Codec>]) -> Result<Report> {
        let mut measurements = Vec::with_capacity(codecs.len());

        for codec in codecs.iter_mut() {
            let name = codec.name();
            match self.measure_codec(records, codec.as_mut()) {
                Ok(measurement) => measurements.push(measurement),
                Err(error) if self.policy == FailurePolicy::Continue => {
                    warn!(codec = name, %error, "codec failed, continuing");
                    measurements.push(Measurement::failed(name, error));
                }
                Err(error) => return Err(error),
            }
        }

        Ok(Report {
            records: records.len(),
            measurements,
        })
    }

    fn measure_codec(&self, records: &[Record], codec: &mut dyn Codec) -> Result<Measurement> {
        let name = codec.name();

        let reference = codec.encode(records)?;
        let reference_len = reference.len();
        debug!(
            codec = name,
            len = reference_len,
            preview = %hex_preview(reference, PREVIEW_BYTES),
            "reference encode"
        );

        let (encoded, elapsed) = measure_with(|| codec.encode(records).map(<[u8]>::len));
        let encoded_len = encoded?;
        if encoded_len != reference_len {
            warn!(codec = name, reference_len, encoded_len, "encoded size changed between calls");
        }

        if self.verify {
            Self::verify(records, codec)?;
        }

        info!(codec = name, encoded_len, ?elapsed, "measured");
        Ok(Measurement::measured(name, encoded_len, elapsed))
    }

    fn verify(records: &[Record], codec: &mut dyn Codec) -> Result<()> {
        let name = codec.name();
        let encoded = codec.encode(records)?.to_vec();
        let decoded = codec.decode(&encoded)?;

        if decoded.len() != records.len() {
            return Err(Error::Verification {
                codec: name,
                reason: format!("decoded {} records, expected {}", decoded.len(), records.len()),
            });
        }
        if let Some(index) = records.iter().zip(&decoded).position(|(a, b)| a != b) {
            return Err(Error::Verification {
                codec: name,
                reason: format!("record {} differs after decoding", index),
            });
        }

        debug!(codec = name, "verified round trip");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{CodecKind, JsonCodec};
    use crate::error::{DecodeResult, EncodeFailure, EncodeResult};

    /// Fails every encode
    struct Broken;

    impl Codec for Broken {
        fn name(&self) -> &'static str {
            "Broken"
        }

        fn encode(&mut self, _records: &[Record]) -> EncodeResult<&[u8]> {
            Err(EncodeFailure::new("Broken", "unsupported field type"))
        }

        fn decode(&self, _bytes: &[u8]) -> DecodeResult<Vec<Record>> {
            Ok(Vec::new())
        }
    }

    /// Encodes with JSON but loses every age on the way back
    struct Lossy(JsonCodec);

    impl Codec for Lossy {
        fn name(&self) -> &'static str {
            "Lossy"
        }

        fn encode(&mut self, records: &[Record]) -> EncodeResult<&[u8]> {
            self.0.encode(records)
        }

        fn decode(&self, bytes: &[u8]) -> DecodeResult<Vec<Record>> {
            let mut records = self.0.decode(bytes)?;
            records.iter_mut().for_each(|r| r.age = 0);
            Ok(records)
        }
    }

    fn records() -> Vec<Record> {
        vec![
            Record::for_index(0, 10),
            Record::for_index(1, 20),
            Record::for_index(2, 30),
        ]
    }

    #[test]
    fn test_measures_in_given_order() {
        let mut codecs: Vec<_> = CodecKind::ALL.iter().map(|k| k.build()).collect();
        let report = Runner::default().run(&records(), &mut codecs).unwrap();

        let names: Vec<_> = report.measurements.iter().map(|m| m.codec).collect();
        assert_eq!(names, ["JSON", "Bincode", "Protocol Buffers"]);
        assert_eq!(report.records, 3);
        assert!(!report.has_failures());
    }

    #[test]
    fn test_abort_returns_first_failure() {
        let mut codecs: Vec<Box<dyn Codec>> = vec![Box::new(JsonCodec::new()), Box::new(Broken)];
        let err = Runner::new(FailurePolicy::Abort)
            .run(&records(), &mut codecs)
            .unwrap_err();

        match err {
            Error::Encode(failure) => assert_eq!(failure.codec, "Broken"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_continue_records_failure() {
        let mut codecs: Vec<Box<dyn Codec>> = vec![
            Box::new(Broken),
            Box::new(JsonCodec::new()),
        ];
        let report = Runner::new(FailurePolicy::Continue)
            .run(&records(), &mut codecs)
            .unwrap();

        assert_eq!(report.measurements.len(), 2);
        assert_eq!(report.failures().count(), 1);
        assert!(report.to_string().starts_with("Broken failed: "));
        assert!(report.get("JSON").unwrap().encoded_len().is_some());
    }

    #[test]
    fn test_verify_catches_lossy_codec() {
        let mut codecs: Vec<Box<dyn Codec>> = vec![Box::new(Lossy(JsonCodec::new()))];
        let err = Runner::default()
            .with_verify(true)
            .run(&records(), &mut codecs)
            .unwrap_err();

        assert!(matches!(err, Error::Verification { codec: "Lossy", .. }));
    }

    #[test]
    fn test_verify_passes_for_real_codecs() {
        let mut codecs: Vec<_> = CodecKind::ALL.iter().map(|k| k.build()).collect();
        let report = Runner::default()
            .with_verify(true)
            .run(&records(), &mut codecs)
            .unwrap();
        assert_eq!(report.measurements.len(), 3);
    }
}
