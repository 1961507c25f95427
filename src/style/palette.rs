//! The fixed 8-color terminal palette.
//!
//! SGR codes 30-37 select the foreground (with a light variant picked by the
//! bold/bright flag) and 40-47 the background. Nothing outside those ranges
//! is ever looked up. The values reproduce the palette BBS clients render
//! with, including the quirk that light cyan equals light blue.

use serde::{Deserialize, Serialize};

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
}

/// Foreground colors for codes 30-37, non-light.
const NORMAL: [Rgb; 8] = [
    Rgb(0, 0, 0),       // 30 black
    Rgb(128, 0, 0),     // 31 maroon
    Rgb(0, 128, 0),     // 32 green
    Rgb(128, 128, 0),   // 33 olive
    Rgb(0, 0, 128),     // 34 navy
    Rgb(128, 0, 128),   // 35 purple
    Rgb(0, 128, 128),   // 36 teal
    Rgb(192, 192, 192), // 37 silver
];

/// Foreground colors for codes 30-37 with the light flag set.
const LIGHT: [Rgb; 8] = [
    Rgb(128, 128, 128), // 30 grey
    Rgb(255, 0, 0),     // 31 red
    Rgb(0, 255, 0),     // 32
    Rgb(255, 255, 0),   // 33
    Rgb(0, 0, 255),     // 34
    Rgb(255, 0, 255),   // 35
    Rgb(0, 0, 255),     // 36 same as 34, kept for output parity
    Rgb(255, 255, 255), // 37
];

/// Background colors for codes 40-47.
const BACKGROUND: [Rgb; 8] = [
    Rgb(0, 0, 0),
    Rgb(128, 0, 0),
    Rgb(0, 128, 0),
    Rgb(128, 128, 0),
    Rgb(0, 0, 128),
    Rgb(128, 0, 128),
    Rgb(0, 128, 128),
    Rgb(192, 192, 192),
];

/// Foreground color for an SGR code in 30..=37.
pub(super) fn foreground(code: u8, light: bool) -> Rgb {
    let index = (code as usize).wrapping_sub(30) & 7;
    if light {
        LIGHT[index]
    } else {
        NORMAL[index]
    }
}

/// Background color for an SGR code in 40..=47.
pub(super) fn background(code: u8) -> Rgb {
    BACKGROUND[(code as usize).wrapping_sub(40) & 7]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreground_default_is_silver() {
        assert_eq!(foreground(37, false), Rgb(192, 192, 192));
    }

    #[test]
    fn test_light_variants() {
        assert_eq!(foreground(31, false), Rgb(128, 0, 0));
        assert_eq!(foreground(31, true), Rgb(255, 0, 0));
    }

    #[test]
    fn test_light_cyan_parity_quirk() {
        assert_eq!(foreground(36, true), foreground(34, true));
    }

    #[test]
    fn test_background_matches_normal_foreground() {
        for code in 0..8u8 {
            assert_eq!(background(40 + code), foreground(30 + code, false));
        }
    }
}
