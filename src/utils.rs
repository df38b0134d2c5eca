//! Utility functions for the benchmark harness

/// Hex rendering of at most `limit` leading bytes, with `...` when truncated
pub(crate) fn hex_preview(bytes: &[u8], limit: usize) -> String {
    if bytes.len() > limit {
        format!("{}...", hex::encode(&bytes[..limit]))
    } else {
        hex::encode(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_preview() {
        let bytes = vec![0x01, 0x02, 0x03, 0x04];
        assert_eq!(hex_preview(&bytes, 8), "01020304");
        assert_eq!(hex_preview(&bytes, 2), "0102...");
        assert_eq!(hex_preview(&[], 2), "");
    }
}
