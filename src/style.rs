//! Span styles.
//!
//! A [`Style`] is what a configuration hands to the display sink for a
//! pressable mention or hashtag. Sinks decide how to show it; the tokenizer
//! never looks inside. [`Style::NONE`] means "render like the surrounding
//! text".
//!
//! # Examples
//!
//! ```
//! use mention_hashtag_text::{Color, Style, TextAttributes};
//!
//! let mention = Style::fg(Color::BLUE).with_bold();
//! let hashtag = Style::fg(Color::from_hex("#17BF63").unwrap()).with_underline();
//!
//! assert!(mention.attributes.contains(TextAttributes::BOLD));
//! assert_ne!(mention, hashtag);
//! assert!(Style::NONE.is_empty());
//! ```

use crate::color::Color;
use bitflags::bitflags;

bitflags! {
    /// SGR attributes a sink may apply to a span.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        const BOLD          = 1 << 0;
        const DIM           = 1 << 1;
        const ITALIC        = 1 << 2;
        const UNDERLINE     = 1 << 3;
        /// Foreground and background swapped.
        const INVERSE       = 1 << 4;
        const STRIKETHROUGH = 1 << 5;
    }
}

/// Colors and attributes for one kind of span.
///
/// A `None` color leaves the terminal's current color in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub attributes: TextAttributes,
}

impl Style {
    /// No colors, no attributes.
    pub const NONE: Self = Self {
        fg: None,
        bg: None,
        attributes: TextAttributes::empty(),
    };

    /// Foreground color only.
    #[must_use]
    pub const fn fg(color: Color) -> Self {
        Self::NONE.with_fg(color)
    }

    /// Bold only.
    #[must_use]
    pub const fn bold() -> Self {
        Self::NONE.with_bold()
    }

    #[must_use]
    pub const fn with_fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub const fn with_bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add `attrs` to the attributes already set.
    #[must_use]
    pub const fn with_attributes(mut self, attrs: TextAttributes) -> Self {
        self.attributes = self.attributes.union(attrs);
        self
    }

    #[must_use]
    pub const fn with_bold(self) -> Self {
        self.with_attributes(TextAttributes::BOLD)
    }

    #[must_use]
    pub const fn with_underline(self) -> Self {
        self.with_attributes(TextAttributes::UNDERLINE)
    }

    /// True when a sink has nothing to apply.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}
