//! Legacy Big5 (CP950) code page support.
//!
//! BBS art files store East-Asian text as two-byte sequences: a high byte
//! with the top bit set followed by a low byte. This module maps those pairs
//! to Unicode through a generated static table and provides the raw-byte
//! fallback used when a pair is not in the table.

mod table;

/// Look up the Unicode string for an exact (high, low) byte pair.
///
/// The table is keyed by the packed pair `(high << 8) | low`, so pairs can
/// never alias each other regardless of the low byte's value.
pub fn lookup(high: u8, low: u8) -> Option<&'static str> {
    let key = u16::from_be_bytes([high, low]);
    table::BIG5_TABLE
        .binary_search_by_key(&key, |&(k, _)| k)
        .ok()
        .map(|i| table::BIG5_TABLE[i].1)
}

/// Decode one byte pair, falling back to two raw-byte characters when the
/// pair is unmapped.
///
/// The fallback is deliberately lossy rather than an error: art files in the
/// wild contain pairs outside the code page, and dropping them would shift
/// every following column.
pub fn decode_pair(high: u8, low: u8) -> String {
    match lookup(high, low) {
        Some(mapped) => mapped.to_owned(),
        None => {
            let mut text = String::with_capacity(2);
            text.push(high as char);
            text.push(low as char);
            text
        }
    }
}

/// Decode a whole buffer of text bytes (no escape sequences).
///
/// Bytes with the top bit set start a pair; the following byte completes it.
/// A trailing unpaired high byte is dropped.
pub fn decode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut pending_high: Option<u8> = None;

    for &byte in bytes {
        if let Some(high) = pending_high.take() {
            out.push_str(&decode_pair(high, byte));
        } else if byte >= 0x80 {
            pending_high = Some(byte);
        } else {
            out.push(byte as char);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_pairs() {
        assert_eq!(lookup(0xA2, 0x69), Some("█"));
        assert_eq!(lookup(0xA2, 0x62), Some("▁"));
        assert_eq!(lookup(0xA1, 0x40), Some("　"));
        assert_eq!(lookup(0xA4, 0x40), Some("一"));
    }

    #[test]
    fn test_lookup_unmapped_pair() {
        // 0x80 rows are outside CP950
        assert_eq!(lookup(0x80, 0x41), None);
        // low byte in the gap between 0x7E and 0xA1
        assert_eq!(lookup(0xA4, 0x80), None);
    }

    #[test]
    fn test_decode_pair_fallback_uses_raw_bytes() {
        let text = decode_pair(0x80, 0x41);
        let chars: Vec<char> = text.chars().collect();
        assert_eq!(chars, vec!['\u{80}', 'A']);
    }

    #[test]
    fn test_decode_mixed_buffer() {
        let bytes = [b'a', 0xA4, 0x40, b'b'];
        assert_eq!(decode(&bytes), "a一b");
    }

    #[test]
    fn test_decode_drops_trailing_high_byte() {
        let bytes = [b'a', 0xA4];
        assert_eq!(decode(&bytes), "a");
    }

    #[test]
    fn test_table_is_sorted_and_unique() {
        for pair in table::BIG5_TABLE.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }
}
