//! Display segments produced by the tokenizer.

use std::ops::Range;

/// Separator re-inserted after a word when the caller renders with spaces.
pub const SEPARATOR: &str = " ";

/// Placeholder emitted for an empty word between two adjacent delimiters.
pub const LINE_BREAK: &str = "\n";

/// The two token families the tokenizer recognizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `@name`
    Mention,
    /// `#name`
    Hashtag,
}

impl TokenKind {
    /// The marker symbol that introduces this kind of token.
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Mention => '@',
            Self::Hashtag => '#',
        }
    }

    /// Event name reported through [`crate::event::emit_event`] on press.
    #[must_use]
    pub const fn press_event_name(self) -> &'static str {
        match self {
            Self::Mention => "mention_press",
            Self::Hashtag => "hashtag_press",
        }
    }
}

/// Classification of a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// A run of ordinary text.
    Plain,
    /// Placeholder for an empty word.
    LineBreak,
    /// A mention tail, pressable or not.
    Mention,
    /// A hashtag tail, pressable or not.
    Hashtag,
}

impl SegmentKind {
    /// The token family, if this segment is a mention or hashtag.
    #[must_use]
    pub const fn token_kind(self) -> Option<TokenKind> {
        match self {
            Self::Mention => Some(TokenKind::Mention),
            Self::Hashtag => Some(TokenKind::Hashtag),
            Self::Plain | Self::LineBreak => None,
        }
    }
}

impl From<TokenKind> for SegmentKind {
    fn from(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Mention => Self::Mention,
            TokenKind::Hashtag => Self::Hashtag,
        }
    }
}

/// One displayable piece of the input, borrowed from the source text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Segment<'a> {
    pub kind: SegmentKind,
    /// Literal text to display. `"\n"` for [`SegmentKind::LineBreak`].
    pub text: &'a str,
    /// Name without its marker. Only set on tokens that pass the length gate.
    pub token_name: Option<&'a str>,
    /// Whether [`SEPARATOR`] follows this segment.
    pub trailing_space: bool,
    /// Byte range of `text` in the original input. Empty for line breaks.
    pub byte_range: Range<usize>,
}

impl<'a> Segment<'a> {
    /// A plain run at `offset`.
    #[must_use]
    pub fn plain(text: &'a str, offset: usize, trailing_space: bool) -> Self {
        Self {
            kind: SegmentKind::Plain,
            text,
            token_name: None,
            trailing_space,
            byte_range: offset..offset + text.len(),
        }
    }

    /// A line-break placeholder standing in for the empty word at `offset`.
    #[must_use]
    pub fn line_break(offset: usize, trailing_space: bool) -> Self {
        Self {
            kind: SegmentKind::LineBreak,
            text: LINE_BREAK,
            token_name: None,
            trailing_space,
            byte_range: offset..offset,
        }
    }

    /// A mention or hashtag tail. `token_name` is `None` when gated out.
    #[must_use]
    pub fn token(
        kind: TokenKind,
        text: &'a str,
        token_name: Option<&'a str>,
        offset: usize,
        trailing_space: bool,
    ) -> Self {
        Self {
            kind: kind.into(),
            text,
            token_name,
            trailing_space,
            byte_range: offset..offset + text.len(),
        }
    }

    /// True only for tokens that passed the minimum-length gate.
    #[must_use]
    pub fn is_pressable(&self) -> bool {
        self.token_name.is_some()
    }

    /// The separator that follows this segment (`" "` or `""`).
    #[must_use]
    pub fn separator(&self) -> &'static str {
        if self.trailing_space { SEPARATOR } else { "" }
    }
}

/// Concatenate segments with their separators into the displayed string.
#[must_use]
pub fn display_string(segments: &[Segment<'_>]) -> String {
    let mut out = String::new();
    for segment in segments {
        out.push_str(segment.text);
        out.push_str(segment.separator());
    }
    out
}
