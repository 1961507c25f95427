//! Mapping decoded glyphs to drawing plans.
//!
//! The block and shape characters BBS art is built from are drawn
//! procedurally instead of through a font, so adjacent cells tile without
//! seams and the per-half coloring of full-width cells stays exact.

/// Apex direction for the full-cell triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Which corner a right-triangle fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

/// The drawing plan for one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Foreground fills the whole cell.
    Solid,
    /// Bottom-anchored bar, `eighths`/8 of the cell height (1..=7).
    TallBar { eighths: u8 },
    /// Left-anchored bar, `eighths`/8 of the cell width (1..=7).
    WideBar { eighths: u8 },
    /// Full-cell triangle.
    Triangle(Direction),
    /// Right triangle filling half the cell.
    CornerTriangle(Corner),
    /// Quadrilateral on the four edge midpoints.
    Diamond,
    /// Anything else: render through the font.
    Text,
}

impl Shape {
    /// Resolve the plan for a decoded cell text.
    ///
    /// Only exact single-character matches get a procedural shape; multi-char
    /// fallbacks and ordinary text go through the font.
    pub fn for_text(text: &str) -> Shape {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::for_char(c),
            _ => Shape::Text,
        }
    }

    fn for_char(c: char) -> Shape {
        match c {
            '█' => Shape::Solid,
            '▁' => Shape::TallBar { eighths: 1 },
            '▂' => Shape::TallBar { eighths: 2 },
            '▃' => Shape::TallBar { eighths: 3 },
            '▄' => Shape::TallBar { eighths: 4 },
            '▅' => Shape::TallBar { eighths: 5 },
            '▆' => Shape::TallBar { eighths: 6 },
            '▇' => Shape::TallBar { eighths: 7 },
            '▏' => Shape::WideBar { eighths: 1 },
            '▎' => Shape::WideBar { eighths: 2 },
            '▍' => Shape::WideBar { eighths: 3 },
            '▌' => Shape::WideBar { eighths: 4 },
            '▋' => Shape::WideBar { eighths: 5 },
            '▊' => Shape::WideBar { eighths: 6 },
            '▉' => Shape::WideBar { eighths: 7 },
            '▲' => Shape::Triangle(Direction::Up),
            '▼' => Shape::Triangle(Direction::Down),
            '◤' => Shape::CornerTriangle(Corner::UpperLeft),
            '◥' => Shape::CornerTriangle(Corner::UpperRight),
            '◣' => Shape::CornerTriangle(Corner::LowerLeft),
            '◢' => Shape::CornerTriangle(Corner::LowerRight),
            '◆' => Shape::Diamond,
            _ => Shape::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_glyphs() {
        assert_eq!(Shape::for_text("█"), Shape::Solid);
        assert_eq!(Shape::for_text("▄"), Shape::TallBar { eighths: 4 });
        assert_eq!(Shape::for_text("▌"), Shape::WideBar { eighths: 4 });
    }

    #[test]
    fn test_triangles_and_diamond() {
        assert_eq!(Shape::for_text("▲"), Shape::Triangle(Direction::Up));
        assert_eq!(Shape::for_text("▼"), Shape::Triangle(Direction::Down));
        assert_eq!(
            Shape::for_text("◣"),
            Shape::CornerTriangle(Corner::LowerLeft)
        );
        assert_eq!(Shape::for_text("◆"), Shape::Diamond);
    }

    #[test]
    fn test_everything_else_is_text() {
        assert_eq!(Shape::for_text("中"), Shape::Text);
        assert_eq!(Shape::for_text("A"), Shape::Text);
        // raw-byte fallback pairs are two chars and never match a shape
        assert_eq!(Shape::for_text("\u{80}A"), Shape::Text);
        assert_eq!(Shape::for_text(""), Shape::Text);
    }
}
