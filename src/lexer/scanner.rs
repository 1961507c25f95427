//! The byte scanner state machine.
//!
//! Scans the input a byte at a time. Escape sequences are parsed with a
//! strict `ESC '[' digits (';' digits)* 'm'` grammar; anything else after an
//! escape introducer is a fatal [`DecodeError`]. Text bytes close over a
//! three-state machine so that control tokens landing between the two halves
//! of a double-byte character end up in the cell's right-control list.

use thiserror::Error;
use tracing::debug;

use super::token::{Cell, CellBytes, ControlToken};
use crate::codepage;

const ESC: u8 = 0x1B;

/// Fatal decode failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The escape grammar was violated. `found` is `None` when the input
    /// ended inside the sequence.
    #[error("malformed control sequence at byte offset {offset:#x} ({})", describe_found(.found))]
    MalformedControlSequence { offset: usize, found: Option<u8> },
}

fn describe_found(found: &Option<u8>) -> String {
    match found {
        Some(byte) => format!("found byte {byte:#04x}"),
        None => "unexpected end of input".to_string(),
    }
}

/// Everything the lexer produces for one input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexOutput {
    /// Cells in stream order; every non-escape byte belongs to exactly one.
    pub cells: Vec<Cell>,
    /// The fully decoded text of the stream, escape sequences stripped.
    pub text: String,
}

/// Where the scanner is relative to the cell under construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// No cell in progress and no buffered control tokens.
    Idle,
    /// Control tokens buffered; waiting for the first byte of the next cell.
    AwaitingByte,
    /// A high byte was consumed; the next text byte completes the pair.
    AwaitingLowByte,
}

struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
    state: ScanState,
    /// High byte of the pair in progress. Only meaningful in AwaitingLowByte.
    pending_high: u8,
    /// Tokens seen before the current cell's first byte.
    left: Vec<ControlToken>,
    /// Tokens seen between the two bytes of the pair in progress.
    right: Vec<ControlToken>,
    cells: Vec<Cell>,
    /// All text (non-escape) bytes in stream order.
    text_bytes: Vec<u8>,
}

/// Lex a raw art-file buffer into cells and its decoded text.
pub fn lex(bytes: &[u8]) -> Result<LexOutput, DecodeError> {
    let mut scanner = Scanner {
        bytes,
        pos: 0,
        state: ScanState::Idle,
        pending_high: 0,
        left: Vec::new(),
        right: Vec::new(),
        cells: Vec::new(),
        text_bytes: Vec::new(),
    };

    while scanner.pos < scanner.bytes.len() {
        if scanner.bytes[scanner.pos] == ESC {
            let token = scanner.read_control()?;
            scanner.push_token(token);
        } else {
            scanner.read_text_byte();
        }
    }

    scanner.finish();

    let text = codepage::decode(&scanner.text_bytes);
    Ok(LexOutput {
        cells: scanner.cells,
        text,
    })
}

impl Scanner<'_> {
    /// Parse one `ESC [ digits (';' digits)* m` sequence at the cursor.
    fn read_control(&mut self) -> Result<ControlToken, DecodeError> {
        // ESC
        self.pos += 1;

        // '['
        match self.bytes.get(self.pos) {
            Some(b'[') => self.pos += 1,
            found => {
                return Err(DecodeError::MalformedControlSequence {
                    offset: self.pos,
                    found: found.copied(),
                })
            }
        }

        let mut params = Vec::new();
        loop {
            let digits_start = self.pos;
            while matches!(self.bytes.get(self.pos), Some(b'0'..=b'9')) {
                self.pos += 1;
            }
            // An empty digit run is a valid (omitted) parameter.
            params.push(
                self.bytes[digits_start..self.pos]
                    .iter()
                    .map(|&b| b as char)
                    .collect(),
            );

            match self.bytes.get(self.pos) {
                Some(b';') => self.pos += 1,
                Some(b'm') => {
                    self.pos += 1;
                    return Ok(ControlToken { params });
                }
                found => {
                    return Err(DecodeError::MalformedControlSequence {
                        offset: self.pos,
                        found: found.copied(),
                    })
                }
            }
        }
    }

    /// Attach a parsed token to the correct side of the current cell.
    fn push_token(&mut self, token: ControlToken) {
        match self.state {
            ScanState::AwaitingLowByte => self.right.push(token),
            ScanState::Idle | ScanState::AwaitingByte => {
                self.left.push(token);
                self.state = ScanState::AwaitingByte;
            }
        }
    }

    /// Consume one text byte, closing a cell when it completes one.
    fn read_text_byte(&mut self) {
        let byte = self.bytes[self.pos];
        self.pos += 1;
        self.text_bytes.push(byte);

        match self.state {
            ScanState::AwaitingLowByte => {
                let high = self.pending_high;
                self.close_cell(CellBytes::Pair(high, byte), codepage::decode_pair(high, byte));
            }
            ScanState::Idle | ScanState::AwaitingByte => {
                if byte >= 0x80 {
                    self.pending_high = byte;
                    self.state = ScanState::AwaitingLowByte;
                } else {
                    self.close_cell(CellBytes::Single(byte), (byte as char).to_string());
                }
            }
        }
    }

    fn close_cell(&mut self, raw: CellBytes, text: String) {
        self.cells.push(Cell {
            raw,
            text,
            left_controls: std::mem::take(&mut self.left),
            right_controls: std::mem::take(&mut self.right),
        });
        self.state = ScanState::Idle;
    }

    /// Report (and drop) whatever the stream left unfinished.
    fn finish(&mut self) {
        if self.state == ScanState::AwaitingLowByte {
            debug!(
                high = format_args!("{:#04x}", self.pending_high),
                "dropping unpaired high byte at end of input"
            );
        }
        if !self.left.is_empty() || !self.right.is_empty() {
            debug!(
                count = self.left.len() + self.right.len(),
                "dropping control tokens after the final text byte"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn single_cells(output: &LexOutput) -> Vec<char> {
        output
            .cells
            .iter()
            .filter_map(|c| c.text.chars().next())
            .collect()
    }

    #[test]
    fn test_plain_text_one_cell_per_byte() {
        let out = lex(b"abc").unwrap();
        assert_eq!(out.cells.len(), 3);
        assert_eq!(single_cells(&out), vec!['a', 'b', 'c']);
        assert_eq!(out.text, "abc");
        assert!(out.cells.iter().all(|c| c.left_controls.is_empty()));
    }

    #[test]
    fn test_control_token_params() {
        let out = lex(b"\x1b[1;31mA").unwrap();
        assert_eq!(out.cells.len(), 1);
        assert_eq!(
            out.cells[0].left_controls,
            vec![ControlToken::new(["1", "31"])]
        );
    }

    #[test]
    fn test_empty_params_preserved() {
        let out = lex(b"\x1b[;31mA").unwrap();
        assert_eq!(
            out.cells[0].left_controls,
            vec![ControlToken::new(["", "31"])]
        );

        let out = lex(b"\x1b[mA").unwrap();
        assert_eq!(out.cells[0].left_controls, vec![ControlToken::new([""])]);
    }

    #[test]
    fn test_double_byte_cell() {
        let out = lex(&[0xA2, 0x69]).unwrap();
        assert_eq!(out.cells.len(), 1);
        assert_eq!(out.cells[0].raw, CellBytes::Pair(0xA2, 0x69));
        assert_eq!(out.cells[0].text, "█");
        assert_eq!(out.text, "█");
    }

    #[test]
    fn test_controls_between_pair_bytes_go_right() {
        // ESC[44m  high  ESC[1m  low
        let mut input = b"\x1b[44m".to_vec();
        input.push(0xA2);
        input.extend_from_slice(b"\x1b[1m");
        input.push(0x69);

        let out = lex(&input).unwrap();
        assert_eq!(out.cells.len(), 1);
        let cell = &out.cells[0];
        assert_eq!(cell.left_controls, vec![ControlToken::new(["44"])]);
        assert_eq!(cell.right_controls, vec![ControlToken::new(["1"])]);
    }

    #[test]
    fn test_multiple_tokens_accumulate_left() {
        let out = lex(b"\x1b[31m\x1b[44mA").unwrap();
        assert_eq!(
            out.cells[0].left_controls,
            vec![ControlToken::new(["31"]), ControlToken::new(["44"])]
        );
    }

    #[test]
    fn test_unmapped_pair_falls_back_to_raw_bytes() {
        let out = lex(&[0x80, 0x41]).unwrap();
        assert_eq!(out.cells.len(), 1);
        assert_eq!(out.cells[0].raw, CellBytes::Pair(0x80, 0x41));
        let chars: Vec<char> = out.cells[0].text.chars().collect();
        assert_eq!(chars, vec!['\u{80}', 'A']);
    }

    #[test]
    fn test_missing_bracket_is_fatal() {
        let err = lex(b"\x1bXm").unwrap_err();
        assert_eq!(
            err,
            DecodeError::MalformedControlSequence {
                offset: 1,
                found: Some(b'X'),
            }
        );
    }

    #[test]
    fn test_bad_terminator_is_fatal() {
        let err = lex(b"\x1b[31Hx").unwrap_err();
        assert_eq!(
            err,
            DecodeError::MalformedControlSequence {
                offset: 4,
                found: Some(b'H'),
            }
        );
    }

    #[test]
    fn test_truncated_sequence_is_fatal() {
        let err = lex(b"\x1b[31").unwrap_err();
        assert_eq!(
            err,
            DecodeError::MalformedControlSequence {
                offset: 4,
                found: None,
            }
        );

        let err = lex(b"\x1b").unwrap_err();
        assert_eq!(
            err,
            DecodeError::MalformedControlSequence {
                offset: 1,
                found: None,
            }
        );
    }

    #[test]
    fn test_trailing_high_byte_dropped() {
        let out = lex(&[b'a', 0xA2]).unwrap();
        assert_eq!(out.cells.len(), 1);
        assert_eq!(out.text, "a");
    }

    #[test]
    fn test_trailing_controls_dropped() {
        let out = lex(b"a\x1b[31m").unwrap();
        assert_eq!(out.cells.len(), 1);
        assert!(out.cells[0].left_controls.is_empty());
    }

    #[test]
    fn test_every_text_byte_consumed_by_exactly_one_cell() {
        let mut input = b"ab\x1b[31m".to_vec();
        input.extend_from_slice(&[0xA4, 0x40]);
        input.extend_from_slice(b"\ncd");

        let out = lex(&input).unwrap();
        let total: usize = out.cells.iter().map(|c| c.raw.len()).sum();
        // 2 + 2 + 1 + 2 text bytes
        assert_eq!(total, 7);
    }

    proptest! {
        #[test]
        fn prop_escape_free_input_never_fails(bytes in proptest::collection::vec(0u8..=0xFF, 0..256)) {
            let cleaned: Vec<u8> = bytes.into_iter().filter(|&b| b != ESC).collect();
            let out = lex(&cleaned).unwrap();
            // every cell's bytes came from the input, in order
            let consumed: usize = out.cells.iter().map(|c| c.raw.len()).sum();
            prop_assert!(consumed <= cleaned.len());
            // at most one trailing high byte may be dropped
            prop_assert!(cleaned.len() - consumed <= 1);
        }

        #[test]
        fn prop_arbitrary_input_never_panics(bytes in proptest::collection::vec(0u8..=0xFF, 0..256)) {
            let _ = lex(&bytes);
        }
    }
}
