//! Opaque 24-bit colors for styling mention and hashtag spans.
//!
//! Terminal output downsamples to the 256-color or 16-color palette when
//! the target cannot show true color.
//!
//! # Examples
//!
//! ```
//! use mention_hashtag_text::Color;
//!
//! let accent = Color::from_hex("#1DA1F2").unwrap();
//! assert_eq!(accent.to_rgb_u8(), (0x1D, 0xA1, 0xF2));
//! assert_eq!(Color::from_hex("f00"), Some(Color::RED));
//! ```

use crate::error::{Error, Result};
use std::fmt;

/// Opaque RGB color with 8-bit components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Standard ANSI palette used for 16-color output (approximate values).
#[rustfmt::skip]
const ANSI_16: [(u8, u8, u8); 16] = [
    (0, 0, 0),       // 0 Black
    (128, 0, 0),     // 1 Red
    (0, 128, 0),     // 2 Green
    (128, 128, 0),   // 3 Yellow
    (0, 0, 128),     // 4 Blue
    (128, 0, 128),   // 5 Magenta
    (0, 128, 128),   // 6 Cyan
    (192, 192, 192), // 7 White
    (128, 128, 128), // 8 Bright Black
    (255, 0, 0),     // 9 Bright Red
    (0, 255, 0),     // 10 Bright Green
    (255, 255, 0),   // 11 Bright Yellow
    (0, 0, 255),     // 12 Bright Blue
    (255, 0, 255),   // 13 Bright Magenta
    (0, 255, 255),   // 14 Bright Cyan
    (255, 255, 255), // 15 Bright White
];

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Create a color from 8-bit components.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Get the components as a tuple.
    #[must_use]
    pub const fn to_rgb_u8(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Parse a hex color string (e.g., "#FF0000" or "FF0000").
    ///
    /// Supports 3-char (#RGB) and 6-char (#RRGGBB) formats.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        // `from_str_radix` alone would accept a leading sign.
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        match hex.len() {
            3 => Some(Self::rgb(
                channel(0..1)? * 17,
                channel(1..2)? * 17,
                channel(2..3)? * 17,
            )),
            6 => Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            _ => None,
        }
    }

    /// Parse a hex color, reporting the offending input on failure.
    pub fn parse_hex(hex: &str) -> Result<Self> {
        Self::from_hex(hex).ok_or_else(|| Error::InvalidColor(hex.to_string()))
    }

    /// Convert to nearest 256-color palette index.
    ///
    /// Uses the grayscale ramp (232-255) for near-gray colors and the
    /// 6x6x6 cube (16-231) otherwise.
    #[must_use]
    pub fn to_256_color(self) -> u8 {
        let (r, g, b) = (u16::from(self.r), u16::from(self.g), u16::from(self.b));
        let gray = (r + g + b) / 3;
        let near = |c: u16| c.abs_diff(gray) < 10;

        if near(r) && near(g) && near(b) {
            let step = (gray * 24 / 256).min(23) as u8;
            return 232 + step;
        }

        16 + 36 * cube_index(self.r) + 6 * cube_index(self.g) + cube_index(self.b)
    }

    /// Convert to nearest 16-color (basic ANSI) palette index.
    #[must_use]
    pub fn to_16_color(self) -> u8 {
        let dist = |&(pr, pg, pb): &(u8, u8, u8)| {
            let d = |a: u8, b: u8| {
                let v = i32::from(a) - i32::from(b);
                v * v
            };
            d(self.r, pr) + d(self.g, pg) + d(self.b, pb)
        };

        ANSI_16
            .iter()
            .enumerate()
            .min_by_key(|(_, entry)| dist(entry))
            .map_or(0, |(idx, _)| idx as u8)
    }
}

/// Nearest index in the 6x6x6 cube whose levels are 0, 95, 135, 175, 215, 255.
fn cube_index(val: u8) -> u8 {
    match val {
        0..=47 => 0,
        48..=114 => 1,
        115..=154 => 2,
        155..=194 => 3,
        195..=234 => 4,
        _ => 5,
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
