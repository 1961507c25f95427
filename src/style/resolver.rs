//! Folding control tokens into styles and building the grid.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::palette::{self, Rgb};
use crate::grid::{CharStyles, Character, Grid, Line};
use crate::lexer::{Cell, ControlToken};

/// The running terminal style.
///
/// Carries both the resolved colors and the raw color codes last seen, since
/// a later `0`/`1` parameter recomputes the foreground from the stored code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    /// Resolved foreground color.
    pub front: Rgb,
    /// Resolved background color.
    pub back: Rgb,
    /// Last foreground code seen (30-37).
    pub front_code: u8,
    /// Last background code seen (40-47).
    pub back_code: u8,
    /// Bold/bright attribute; selects the light foreground palette.
    pub light: bool,
    /// Blink attribute. Toggled, not set, by SGR 5.
    pub blink: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            front: palette::foreground(37, false),
            back: palette::background(40),
            front_code: 37,
            back_code: 40,
            light: false,
            blink: false,
        }
    }
}

/// Apply one control token to a style, returning the new style.
///
/// Parameters apply strictly left to right; the order matters because color
/// codes resolve against whatever the light flag is at that moment. A token
/// consisting of exactly one `""` or `"0"` parameter is a full reset; the
/// same parameter inside a longer token only clears the light flag.
///
/// `"1"` brightens the stored foreground code, but never retroactively: a
/// color set earlier in the same token keeps its non-light value, so
/// `ESC[1;31m` is light red while `ESC[31;1m` is non-light red with the
/// light flag raised.
pub fn fold(style: Style, token: &ControlToken) -> Style {
    if token.params.len() == 1 && matches!(token.params[0].as_str(), "" | "0") {
        return Style::default();
    }

    let mut style = style;
    let mut code_set_in_token = false;
    for param in &token.params {
        match param.as_str() {
            "" | "0" => {
                style.light = false;
                style.front = palette::foreground(style.front_code, false);
            }
            "1" => {
                style.light = true;
                if !code_set_in_token {
                    style.front = palette::foreground(style.front_code, true);
                }
            }
            "5" => {
                style.blink = !style.blink;
            }
            other => match other.parse::<u8>() {
                Ok(code @ 30..=37) => {
                    code_set_in_token = true;
                    style.front_code = code;
                    style.front = palette::foreground(code, style.light);
                }
                Ok(code @ 40..=47) => {
                    style.back_code = code;
                    style.back = palette::background(code);
                }
                _ => debug!(param = other, "ignoring unsupported SGR parameter"),
            },
        }
    }
    style
}

fn fold_all(style: Style, tokens: &[ControlToken]) -> Style {
    tokens.iter().fold(style, fold)
}

/// Resolve a cell sequence into the styled grid.
///
/// Pure in the running style: each fold takes the prior style and returns a
/// new one. A decoded newline closes the line and resets the running style
/// to the default; art files restate their colors per line and depend on
/// this. Carriage returns are dropped outright.
pub fn resolve(cells: &[Cell]) -> Grid {
    let mut lines = vec![Line::default()];
    let mut current = Style::default();

    for cell in cells {
        let full_width = cell
            .text
            .chars()
            .next()
            .is_some_and(|c| (c as u32) >= 0x80);

        if full_width {
            let left = fold_all(current, &cell.left_controls);
            let right = fold_all(left, &cell.right_controls);
            current = right;

            lines
                .last_mut()
                .expect("grid always has an open line")
                .chars
                .push(Character {
                    text: cell.text.clone(),
                    styles: CharStyles::Split { left, right },
                });
        } else {
            match cell.text.as_str() {
                "\r" => continue,
                "\n" => {
                    current = Style::default();
                    lines.push(Line::default());
                    continue;
                }
                _ => {}
            }

            let style = fold_all(current, &cell.left_controls);
            current = style;

            lines
                .last_mut()
                .expect("grid always has an open line")
                .chars
                .push(Character {
                    text: cell.text.clone(),
                    styles: CharStyles::Single(style),
                });
        }
    }

    // A final newline opens a line nothing ever lands on; don't render it.
    if lines.last().is_some_and(Line::is_empty) {
        lines.pop();
    }

    Grid { lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;

    fn resolve_bytes(bytes: &[u8]) -> Grid {
        resolve(&lex(bytes).unwrap().cells)
    }

    fn only_style(grid: &Grid) -> Style {
        match grid.lines[0].chars[0].styles {
            CharStyles::Single(style) => style,
            CharStyles::Split { .. } => panic!("expected half-width character"),
        }
    }

    #[test]
    fn test_no_escapes_means_default_style_everywhere() {
        let grid = resolve_bytes(b"hello\nworld");
        for line in &grid.lines {
            for ch in &line.chars {
                assert_eq!(ch.styles, CharStyles::Single(Style::default()));
            }
        }
    }

    #[test]
    fn test_reset_token_and_empty_token_are_equivalent() {
        let a = resolve_bytes(b"\x1b[31m\x1b[0mA");
        let b = resolve_bytes(b"\x1b[31m\x1b[mA");
        assert_eq!(only_style(&a), Style::default());
        assert_eq!(only_style(&b), Style::default());
    }

    #[test]
    fn test_light_before_and_after_color_differ() {
        // 1;31 brightens the red; 31;1 sets non-light red then flips the
        // flag without recoloring.
        let first = only_style(&resolve_bytes(b"\x1b[1;31mA"));
        let second = only_style(&resolve_bytes(b"\x1b[31;1mA"));

        assert_eq!(first.front, Rgb(255, 0, 0));
        assert!(first.light);

        // non-light red survives; only the flag flips
        assert_eq!(second.front, Rgb(128, 0, 0));
        assert!(second.light);
        assert_eq!(second.front_code, 31);

        assert_ne!(first, second);
    }

    #[test]
    fn test_zero_in_longer_token_only_dims() {
        // 31, then a multi-param token with 0: background survives.
        let style = only_style(&resolve_bytes(b"\x1b[44m\x1b[1;31m\x1b[0;32mA"));
        assert_eq!(style.back_code, 44);
        assert!(!style.light);
        assert_eq!(style.front_code, 32);
        assert_eq!(style.front, Rgb(0, 128, 0));
    }

    #[test]
    fn test_blink_toggles() {
        let once = only_style(&resolve_bytes(b"\x1b[5;5mA"));
        assert!(!once.blink);

        let twice = only_style(&resolve_bytes(b"\x1b[5mA"));
        assert!(twice.blink);
    }

    #[test]
    fn test_unknown_params_ignored() {
        let style = only_style(&resolve_bytes(b"\x1b[4;7;38;99mA"));
        assert_eq!(style, Style::default());
    }

    #[test]
    fn test_newline_resets_style() {
        let grid = resolve_bytes(b"\x1b[31mA\nB");
        assert_eq!(grid.rows(), 2);
        match grid.lines[1].chars[0].styles {
            CharStyles::Single(style) => assert_eq!(style, Style::default()),
            CharStyles::Split { .. } => panic!(),
        }
    }

    #[test]
    fn test_carriage_return_discarded() {
        let grid = resolve_bytes(b"A\r\nB");
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.lines[0].chars.len(), 1);
    }

    #[test]
    fn test_double_width_halves() {
        let mut input = b"\x1b[44m".to_vec();
        input.push(0xA2);
        input.extend_from_slice(b"\x1b[1m");
        input.push(0x69);
        let grid = resolve_bytes(&input);

        let ch = &grid.lines[0].chars[0];
        assert_eq!(ch.display_width(), 2);
        match ch.styles {
            CharStyles::Split { left, right } => {
                assert_eq!(left.back_code, 44);
                assert!(!left.light);
                assert!(right.light);
                assert_eq!(right.back_code, 44);
                // light recomputes from the stored code (37 by default)
                assert_eq!(right.front, Rgb(255, 255, 255));
            }
            CharStyles::Single(_) => panic!("expected split styles"),
        }
    }

    #[test]
    fn test_running_style_continues_from_right_half() {
        let mut input = Vec::new();
        input.push(0xA2);
        input.extend_from_slice(b"\x1b[31m");
        input.push(0x69);
        input.push(b'x');
        let grid = resolve_bytes(&input);

        let x_style = match grid.lines[0].chars[1].styles {
            CharStyles::Single(style) => style,
            CharStyles::Split { .. } => panic!(),
        };
        assert_eq!(x_style.front_code, 31);
    }

    #[test]
    fn test_trailing_empty_line_dropped() {
        let grid = resolve_bytes(b"A\n");
        assert_eq!(grid.rows(), 1);

        // only the final empty line is dropped
        let grid = resolve_bytes(b"A\n\n");
        assert_eq!(grid.rows(), 2);
        assert!(grid.lines[1].is_empty());
    }

    #[test]
    fn test_empty_input_gives_empty_grid() {
        let grid = resolve_bytes(b"");
        assert!(grid.is_empty());
    }

    #[test]
    fn test_leading_zero_color_code_accepted() {
        // "031" parses to 31, mirroring decimal parsing in the range rules
        let style = only_style(&resolve_bytes(b"\x1b[031mA"));
        assert_eq!(style.front_code, 31);
    }
}
