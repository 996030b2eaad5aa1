//! ANSI SGR output for styled mention and hashtag spans.

mod sink;

pub use sink::{AnsiSink, render_ansi, render_ansi_to_string};

use crate::color::Color;
use crate::style::{Style, TextAttributes};
use std::env;
use std::io::{self, Write};

/// Reset all attributes to default.
pub const RESET: &str = "\x1b[0m";

/// Color output mode for ANSI sequences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// True color (24-bit RGB).
    #[default]
    TrueColor,
    /// 256-color palette.
    Color256,
    /// 16-color (basic ANSI).
    Color16,
    /// No escape sequences at all.
    NoColor,
}

impl ColorMode {
    /// Pick a mode from `NO_COLOR`, `COLORTERM` and `TERM`.
    #[must_use]
    pub fn detect() -> Self {
        let no_color = env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        let term = env::var("TERM").unwrap_or_default();
        let colorterm = env::var("COLORTERM").unwrap_or_default();
        Self::from_env_values(no_color, &term, &colorterm)
    }

    fn from_env_values(no_color: bool, term: &str, colorterm: &str) -> Self {
        if no_color || term == "dumb" {
            return Self::NoColor;
        }
        if colorterm.eq_ignore_ascii_case("truecolor") || colorterm.eq_ignore_ascii_case("24bit")
        {
            return Self::TrueColor;
        }
        if term.contains("truecolor") || term.contains("24bit") {
            return Self::TrueColor;
        }
        if term.contains("256") {
            return Self::Color256;
        }
        if term.is_empty() {
            return Self::NoColor;
        }
        Self::Color16
    }

    /// Parse a mode name as accepted on the command line.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" => Some(Self::TrueColor),
            "256" | "color256" => Some(Self::Color256),
            "16" | "color16" => Some(Self::Color16),
            "none" | "no" | "off" => Some(Self::NoColor),
            _ => None,
        }
    }
}

/// Write SGR sequence for a foreground color.
pub fn write_fg(w: &mut impl Write, color: Color, mode: ColorMode) -> io::Result<()> {
    write_color(w, color, mode, 38, 30, 90)
}

/// Write SGR sequence for a background color.
pub fn write_bg(w: &mut impl Write, color: Color, mode: ColorMode) -> io::Result<()> {
    write_color(w, color, mode, 48, 40, 100)
}

fn write_color(
    w: &mut impl Write,
    color: Color,
    mode: ColorMode,
    extended: u8,
    normal_base: u8,
    bright_base: u8,
) -> io::Result<()> {
    match mode {
        ColorMode::TrueColor => {
            let (r, g, b) = color.to_rgb_u8();
            write!(w, "\x1b[{extended};2;{r};{g};{b}m")
        }
        ColorMode::Color256 => write!(w, "\x1b[{extended};5;{}m", color.to_256_color()),
        ColorMode::Color16 => {
            let idx = color.to_16_color();
            let code = if idx < 8 {
                normal_base + idx
            } else {
                bright_base + idx - 8
            };
            write!(w, "\x1b[{code}m")
        }
        ColorMode::NoColor => Ok(()),
    }
}

/// Write SGR sequence for text attributes. Writes nothing for no attributes.
pub fn write_attributes(w: &mut impl Write, attrs: TextAttributes) -> io::Result<()> {
    const CODES: [(TextAttributes, &str); 6] = [
        (TextAttributes::BOLD, "1"),
        (TextAttributes::DIM, "2"),
        (TextAttributes::ITALIC, "3"),
        (TextAttributes::UNDERLINE, "4"),
        (TextAttributes::INVERSE, "7"),
        (TextAttributes::STRIKETHROUGH, "9"),
    ];

    let mut first = true;
    for (flag, code) in CODES {
        if !attrs.contains(flag) {
            continue;
        }
        let lead: &[u8] = if first { b"\x1b[" } else { b";" };
        w.write_all(lead)?;
        w.write_all(code.as_bytes())?;
        first = false;
    }
    if first { Ok(()) } else { w.write_all(b"m") }
}

/// Write every sequence needed to switch to `style`.
///
/// Returns whether anything was written, so callers know to reset after.
pub fn write_style(w: &mut impl Write, style: Style, mode: ColorMode) -> io::Result<bool> {
    if mode == ColorMode::NoColor || style.is_empty() {
        return Ok(false);
    }
    write_attributes(w, style.attributes)?;
    if let Some(fg) = style.fg {
        write_fg(w, fg, mode)?;
    }
    if let Some(bg) = style.bg {
        write_bg(w, bg, mode)?;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sgr(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_color_modes() {
        let c = Color::rgb(255, 0, 0);
        assert_eq!(
            sgr(|w| write_fg(w, c, ColorMode::TrueColor)),
            "\x1b[38;2;255;0;0m"
        );
        assert_eq!(sgr(|w| write_fg(w, c, ColorMode::Color256)), "\x1b[38;5;196m");
        assert_eq!(sgr(|w| write_fg(w, c, ColorMode::Color16)), "\x1b[91m");
        assert_eq!(sgr(|w| write_bg(w, c, ColorMode::Color16)), "\x1b[101m");
        assert_eq!(sgr(|w| write_fg(w, c, ColorMode::NoColor)), "");
    }

    #[test]
    fn test_attributes() {
        assert_eq!(sgr(|w| write_attributes(w, TextAttributes::empty())), "");
        assert_eq!(
            sgr(|w| write_attributes(w, TextAttributes::BOLD | TextAttributes::UNDERLINE)),
            "\x1b[1;4m"
        );
    }

    #[test]
    fn test_write_style() {
        let mut buf = Vec::new();
        let style = Style::fg(Color::BLUE).with_bold();
        assert!(write_style(&mut buf, style, ColorMode::Color256).unwrap());
        assert_eq!(String::from_utf8(buf).unwrap(), "\x1b[1m\x1b[38;5;21m");

        let mut buf = Vec::new();
        assert!(!write_style(&mut buf, Style::NONE, ColorMode::TrueColor).unwrap());
        assert!(!write_style(&mut buf, style, ColorMode::NoColor).unwrap());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_detect_from_values() {
        assert_eq!(ColorMode::from_env_values(true, "xterm-256color", ""), ColorMode::NoColor);
        assert_eq!(ColorMode::from_env_values(false, "dumb", ""), ColorMode::NoColor);
        assert_eq!(ColorMode::from_env_values(false, "xterm", "truecolor"), ColorMode::TrueColor);
        assert_eq!(ColorMode::from_env_values(false, "xterm-256color", ""), ColorMode::Color256);
        assert_eq!(ColorMode::from_env_values(false, "xterm", ""), ColorMode::Color16);
        assert_eq!(ColorMode::from_env_values(false, "", ""), ColorMode::NoColor);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(ColorMode::from_name("256"), Some(ColorMode::Color256));
        assert_eq!(ColorMode::from_name("NONE"), Some(ColorMode::NoColor));
        assert_eq!(ColorMode::from_name("rainbow"), None);
    }
}
