//! Lexer output types: control tokens and cells.

/// One SGR control token: the parameter list of an `ESC [ params m` sequence.
///
/// Parameters are kept as the strings written in the stream, so an omitted
/// parameter stays an empty string: `ESC[;31m` yields `["", "31"]`. The
/// distinction matters to the style fold, which treats a lone `""`/`"0"`
/// token differently from the same parameter inside a longer list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlToken {
    /// Parameters in written order; each is empty or a run of ASCII digits.
    pub params: Vec<String>,
}

impl ControlToken {
    /// Build a token from parameter strings. Handy in tests.
    pub fn new<I, S>(params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            params: params.into_iter().map(Into::into).collect(),
        }
    }
}

/// The raw byte(s) backing one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellBytes {
    /// A plain single byte (< 0x80).
    Single(u8),
    /// A double-byte pair: high byte (>= 0x80) then low byte.
    Pair(u8, u8),
}

#[allow(clippy::len_without_is_empty)]
impl CellBytes {
    /// Number of raw bytes in this cell. Never zero.
    pub fn len(&self) -> usize {
        match self {
            CellBytes::Single(_) => 1,
            CellBytes::Pair(_, _) => 2,
        }
    }
}

/// One decoded text unit together with the control tokens around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// The raw input byte(s) this cell consumed.
    pub raw: CellBytes,
    /// The decoded text: the byte value itself for single bytes, the code
    /// page mapping (or two raw-byte characters) for pairs.
    pub text: String,
    /// Control tokens seen before the cell's first byte.
    pub left_controls: Vec<ControlToken>,
    /// Control tokens seen between the two bytes of a pair. Always empty for
    /// single-byte cells.
    pub right_controls: Vec<ControlToken>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_token_preserves_empty_params() {
        let token = ControlToken::new(["", "31"]);
        assert_eq!(token.params, vec!["".to_string(), "31".to_string()]);
    }

    #[test]
    fn test_cell_bytes_len() {
        assert_eq!(CellBytes::Single(b'A').len(), 1);
        assert_eq!(CellBytes::Pair(0xA2, 0x69).len(), 2);
    }
}
