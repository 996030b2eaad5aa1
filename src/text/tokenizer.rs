//! Word splitting and mention/hashtag classification.
//!
//! Text is split on every `' '` and `'\n'`. Each word is classified by the
//! *last* `@` and the *last* `#` it contains: whichever symbol appears later
//! wins. Everything before that symbol is tokenized again on its own, without
//! a trailing separator, so `"x@y#z"` yields `x`, `@y`, `#z`.

use super::segment::{Segment, TokenKind};
use crate::config::MentionHashtagConfig;
use crate::event::{LogLevel, emit_log_with};

/// Characters that delimit words.
pub const DELIMITERS: [char; 2] = [' ', '\n'];

/// Split `text` into display segments.
///
/// `None` and `""` produce no segments. Any other string is accepted; the
/// function never panics and allocates only the output vector.
///
/// # Examples
///
/// ```
/// use mention_hashtag_text::{MentionHashtagConfig, SegmentKind, tokenize};
///
/// let config = MentionHashtagConfig::default();
/// let segments = tokenize(Some("Hello @world"), &config);
///
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[1].kind, SegmentKind::Mention);
/// assert_eq!(segments[1].token_name, Some("world"));
/// ```
#[must_use]
pub fn tokenize<'a>(text: Option<&'a str>, config: &MentionHashtagConfig) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    match text {
        Some(text) if !text.is_empty() => {
            tokenize_into(text, 0, config.with_space, config, &mut segments);
        }
        _ => {}
    }
    segments
}

/// Locate the marker that decides a word's classification.
///
/// Returns the token kind and the byte index of its marker, or `None` for a
/// plain word.
#[must_use]
pub fn classify(word: &str) -> Option<(TokenKind, usize)> {
    let mention_index = word.rfind(TokenKind::Mention.marker());
    let hashtag_index = word.rfind(TokenKind::Hashtag.marker());

    match (mention_index, hashtag_index) {
        (None, None) => None,
        (Some(m), Some(h)) if m > h => Some((TokenKind::Mention, m)),
        (Some(m), None) => Some((TokenKind::Mention, m)),
        (_, Some(h)) => Some((TokenKind::Hashtag, h)),
    }
}

fn tokenize_into<'a>(
    text: &'a str,
    base: usize,
    with_space: bool,
    config: &MentionHashtagConfig,
    out: &mut Vec<Segment<'a>>,
) {
    let mut offset = base;
    for word in text.split(DELIMITERS) {
        tokenize_word(word, offset, with_space, config, out);
        // Every delimiter is a single byte.
        offset += word.len() + 1;
    }
}

fn tokenize_word<'a>(
    word: &'a str,
    offset: usize,
    with_space: bool,
    config: &MentionHashtagConfig,
    out: &mut Vec<Segment<'a>>,
) {
    let Some((kind, marker)) = classify(word) else {
        let segment = if word.is_empty() {
            Segment::line_break(offset, with_space)
        } else {
            Segment::plain(word, offset, with_space)
        };
        out.push(segment);
        return;
    };

    let (prefix, tail) = word.split_at(marker);
    if !prefix.is_empty() {
        tokenize_into(prefix, offset, false, config, out);
    }

    // The marker is ASCII, so slicing one byte past it stays on a boundary.
    let name = &tail[1..];
    let token_name = passes_gate(kind, tail, config).then_some(name);
    if token_name.is_none() {
        emit_log_with(LogLevel::Debug, || {
            format!("{kind:?} {tail:?} is shorter than the minimum length; rendering as text")
        });
    }
    out.push(Segment::token(
        kind,
        tail,
        token_name,
        offset + marker,
        with_space,
    ));
}

/// The tail's length, marker included, must exceed the configured minimum.
fn passes_gate(kind: TokenKind, tail: &str, config: &MentionHashtagConfig) -> bool {
    let len = i64::try_from(config.length_method.measure(tail)).unwrap_or(i64::MAX);
    len > i64::from(config.min_length(kind))
}
