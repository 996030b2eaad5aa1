//! A display sink that writes SGR-styled text.

use super::{ColorMode, RESET, write_style};
use crate::config::MentionHashtagConfig;
use crate::error::Result;
use crate::render::{DisplaySink, PressHandler, render};
use crate::style::Style;
use crate::text::LINE_BREAK;
use std::io::{self, Write};

/// Writes rendered text to any [`Write`], styling pressable spans.
///
/// Control characters other than `'\n'` and `'\t'` in the input are written
/// as U+FFFD so user text cannot inject escape sequences. The first write
/// error is kept and reported by [`AnsiSink::finish`]; later writes are
/// skipped.
#[derive(Debug)]
pub struct AnsiSink<W: Write> {
    writer: W,
    color_mode: ColorMode,
    error: Option<io::Error>,
}

impl<W: Write> AnsiSink<W> {
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_color_mode(writer, ColorMode::default())
    }

    #[must_use]
    pub fn with_color_mode(writer: W, color_mode: ColorMode) -> Self {
        Self {
            writer,
            color_mode,
            error: None,
        }
    }

    #[must_use]
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Flush and return the writer, or the first error hit while rendering.
    pub fn finish(mut self) -> Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err.into());
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn attempt(&mut self, f: impl FnOnce(&mut W, ColorMode) -> io::Result<()>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = f(&mut self.writer, self.color_mode) {
            self.error = Some(err);
        }
    }
}

fn write_sanitized(w: &mut impl Write, text: &str) -> io::Result<()> {
    let is_unsafe = |c: char| c.is_control() && c != '\n' && c != '\t';
    if !text.contains(is_unsafe) {
        return w.write_all(text.as_bytes());
    }
    let cleaned: String = text
        .chars()
        .map(|c| if is_unsafe(c) { '\u{FFFD}' } else { c })
        .collect();
    w.write_all(cleaned.as_bytes())
}

impl<W: Write> DisplaySink for AnsiSink<W> {
    fn render_text(&mut self, text: &str) {
        self.attempt(|w, _| write_sanitized(w, text));
    }

    fn render_line_break(&mut self) {
        self.attempt(|w, _| w.write_all(LINE_BREAK.as_bytes()));
    }

    fn render_pressable_span(
        &mut self,
        text: &str,
        style: Style,
        _disabled: bool,
        _on_activate: PressHandler,
    ) {
        self.attempt(|w, mode| {
            let styled = write_style(w, style, mode)?;
            write_sanitized(w, text)?;
            if styled {
                w.write_all(RESET.as_bytes())?;
            }
            Ok(())
        });
    }
}

/// Render `text` with `config` straight into `writer`.
pub fn render_ansi<W: Write>(
    text: Option<&str>,
    config: &MentionHashtagConfig,
    color_mode: ColorMode,
    writer: W,
) -> Result<W> {
    let mut sink = AnsiSink::with_color_mode(writer, color_mode);
    render(text, config, &mut sink);
    sink.finish()
}

/// Render `text` with `config` into a `String`.
#[must_use]
pub fn render_ansi_to_string(
    text: Option<&str>,
    config: &MentionHashtagConfig,
    color_mode: ColorMode,
) -> String {
    let mut sink = AnsiSink::with_color_mode(Vec::new(), color_mode);
    render(text, config, &mut sink);
    // Writing into a Vec cannot fail; the input is valid UTF-8 throughout.
    let bytes = sink.finish().unwrap_or_default();
    String::from_utf8(bytes).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::error::Error;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_plain_text_passes_through() {
        let config = MentionHashtagConfig::default();
        let out = render_ansi_to_string(Some("no tokens here"), &config, ColorMode::TrueColor);
        assert_eq!(out, "no tokens here ");
    }

    #[test]
    fn test_spans_are_styled_and_reset() {
        let config =
            MentionHashtagConfig::default().hashtag_style(Style::fg(Color::RED).with_bold());
        let out = render_ansi_to_string(Some("#hot take"), &config, ColorMode::Color256);
        assert_eq!(out, "\x1b[1m\x1b[38;5;196m#hot\x1b[0m take ");
    }

    #[test]
    fn test_unstyled_span_has_no_sequences() {
        let config = MentionHashtagConfig::default();
        let out = render_ansi_to_string(Some("#hot"), &config, ColorMode::TrueColor);
        assert_eq!(out, "#hot ");
    }

    #[test]
    fn test_no_color_mode() {
        let config = MentionHashtagConfig::default().mention_style(Style::bold());
        let out = render_ansi_to_string(Some("@someone"), &config, ColorMode::NoColor);
        assert_eq!(out, "@someone ");
    }

    #[test]
    fn test_control_characters_are_replaced() {
        let config = MentionHashtagConfig::default();
        let out = render_ansi_to_string(Some("a\x1b[2Jb"), &config, ColorMode::TrueColor);
        assert_eq!(out, "a\u{FFFD}[2Jb ");
    }

    #[test]
    fn test_write_error_is_reported() {
        let config = MentionHashtagConfig::default();
        let result = render_ansi(Some("hello"), &config, ColorMode::TrueColor, FailingWriter);
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_empty_text_writes_nothing() {
        let config = MentionHashtagConfig::default();
        let out = render_ansi(None, &config, ColorMode::TrueColor, Vec::new()).unwrap();
        assert!(out.is_empty());
    }
}
