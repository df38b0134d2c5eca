//! Benchmark input data
//!
//! This module defines the [`Record`] type every codec encodes and the
//! generator that fills a collection of them.

pub mod generator;
pub mod record_types;

// Re-export main types for convenience
pub use generator::{generate, seeded_rng};
pub use record_types::Record;

/// Record generation constants
pub mod constants {
    //! Constants used when generating records

    /// Exclusive upper bound of generated ages
    pub const AGE_UPPER_BOUND: u8 = 100;

    /// Record count used when none is configured
    pub const DEFAULT_RECORD_COUNT: usize = 1_000_000;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(constants::AGE_UPPER_BOUND, 100);
        assert_eq!(constants::DEFAULT_RECORD_COUNT, 1_000_000);
    }
}
