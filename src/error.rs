//! Error types for the record codec benchmark
//!
//! Every codec reports failures through the same two types, [`EncodeFailure`]
//! and [`DecodeFailure`], so the runner can apply one policy to all of them.

use std::fmt::Display;
use thiserror::Error;

/// The main error type for the benchmark harness
#[derive(Error, Debug)]
pub enum Error {
    /// A codec could not encode the record collection
    #[error("Encode error: {0}")]
    Encode(#[from] EncodeFailure),

    /// A codec could not decode its own output
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeFailure),

    /// Decoded records differ from the records that were encoded
    #[error("Verification failed for {codec}: {reason}")]
    Verification {
        /// Label of the codec under verification
        codec: &'static str,
        /// What did not match
        reason: String,
    },
}

/// Raised by a codec when the underlying encoder cannot complete
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{codec} encoding failed: {reason}")]
pub struct EncodeFailure {
    /// Label of the failing codec
    pub codec: &'static str,
    /// Message from the underlying encoder
    pub reason: String,
}

impl EncodeFailure {
    /// Wrap an encoder error for the named codec
    pub fn new(codec: &'static str, reason: impl Display) -> Self {
        Self {
            codec,
            reason: reason.to_string(),
        }
    }
}

/// Raised by a codec when its input bytes cannot be turned back into records
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{codec} decoding failed: {reason}")]
pub struct DecodeFailure {
    /// Label of the failing codec
    pub codec: &'static str,
    /// Message from the underlying decoder
    pub reason: String,
}

impl DecodeFailure {
    /// Wrap a decoder error for the named codec
    pub fn new(codec: &'static str, reason: impl Display) -> Self {
        Self {
            codec,
            reason: reason.to_string(),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

/// Convenience type alias for encode Results
pub type EncodeResult<T> = std::result::Result<T, EncodeFailure>;

/// Convenience type alias for decode Results
pub type DecodeResult<T> = std::result::Result<T, DecodeFailure>;
