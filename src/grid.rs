//! The resolved character grid.
//!
//! Output of the style resolver and input to the rasterizer. The grid owns
//! its data outright; nothing upstream keeps references into it. All types
//! serialize so the CLI can dump a resolved grid as JSON.

use serde::{Deserialize, Serialize};

use crate::style::Style;

/// Styling attached to one character, encoding its display width.
///
/// Half-width characters carry one style; full-width characters carry a
/// style per half, because an SGR token between the character's two raw
/// bytes recolors only the right half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharStyles {
    Single(Style),
    Split { left: Style, right: Style },
}

/// One styled character in a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Decoded text for the cell. Usually one char; two for the raw-byte
    /// fallback of an unmapped pair.
    pub text: String,
    pub styles: CharStyles,
}

impl Character {
    /// Number of grid columns this character occupies.
    pub fn display_width(&self) -> usize {
        match self.styles {
            CharStyles::Single(_) => 1,
            CharStyles::Split { .. } => 2,
        }
    }
}

/// One row of characters, as terminated by a decoded newline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub chars: Vec<Character>,
}

impl Line {
    /// Total column count of the line.
    pub fn columns(&self) -> usize {
        self.chars.iter().map(Character::display_width).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// The full resolved grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub lines: Vec<Line>,
}

impl Grid {
    /// Grid width in columns: the widest line.
    pub fn columns(&self) -> usize {
        self.lines.iter().map(Line::columns).max().unwrap_or(0)
    }

    /// Grid height in rows.
    pub fn rows(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;

    fn half(text: &str) -> Character {
        Character {
            text: text.to_string(),
            styles: CharStyles::Single(Style::default()),
        }
    }

    fn full(text: &str) -> Character {
        Character {
            text: text.to_string(),
            styles: CharStyles::Split {
                left: Style::default(),
                right: Style::default(),
            },
        }
    }

    #[test]
    fn test_line_columns_sums_display_widths() {
        let line = Line {
            chars: vec![half("a"), full("█"), half("b")],
        };
        assert_eq!(line.columns(), 4);
    }

    #[test]
    fn test_grid_width_is_max_line() {
        let grid = Grid {
            lines: vec![
                Line {
                    chars: vec![half("a")],
                },
                Line {
                    chars: vec![full("█"), full("█")],
                },
            ],
        };
        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.rows(), 2);
    }

    #[test]
    fn test_empty_grid_dimensions() {
        let grid = Grid::default();
        assert_eq!(grid.columns(), 0);
        assert_eq!(grid.rows(), 0);
    }
}
