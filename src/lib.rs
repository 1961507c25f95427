//! Legacy BBS ANSI art converter library.
//!
//! Decodes Big5 text interleaved with ANSI SGR color sequences into a styled
//! character grid, then rasterizes the grid to pixels:
//!
//! - `codepage`: Big5/CP950 double-byte to Unicode mapping
//! - `lexer`: byte scanner splitting input into cells and control tokens
//! - `style`: SGR folding and the fixed 16-color palette
//! - `grid`: the styled character grid model
//! - `render`: shape classification, rasterization, and PNG output

pub mod codepage;
pub mod grid;
pub mod lexer;
pub mod render;
pub mod style;

pub use grid::{CharStyles, Character, Grid, Line};
pub use lexer::DecodeError;

/// Decode a raw art file into a styled grid.
///
/// Convenience wrapper over [`lexer::lex`] followed by [`style::resolve`].
pub fn decode(bytes: &[u8]) -> Result<Grid, DecodeError> {
    let output = lexer::lex(bytes)?;
    Ok(style::resolve(&output.cells))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Rgb;

    #[test]
    fn test_decode_plain_ascii() {
        let grid = decode(b"hi\n").unwrap();
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.lines[0].chars.len(), 2);
        assert_eq!(grid.lines[0].chars[0].text, "h");
    }

    #[test]
    fn test_decode_colored_text() {
        let grid = decode(b"\x1b[31mA\x1b[0m\n").unwrap();
        let ch = &grid.lines[0].chars[0];
        match &ch.styles {
            CharStyles::Single(style) => assert_eq!(style.front, Rgb(128, 0, 0)),
            other => panic!("expected single style, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_malformed_sequence() {
        assert!(decode(b"\x1bXm").is_err());
    }
}
