//! Byte-level lexer for ANSI art streams.
//!
//! Segments a raw byte buffer into [`Cell`]s, one decoded text unit each,
//! while attaching the SGR control tokens that appear around (and, for
//! double-byte characters, between) the text bytes.

mod scanner;
mod token;

pub use scanner::{lex, DecodeError, LexOutput};
pub use token::{Cell, CellBytes, ControlToken};
