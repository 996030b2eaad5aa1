//! Pulling token names out of text without rendering it.
//!
//! Extraction runs the same tokenizer and length gate as rendering, so a
//! name is returned exactly when the renderer would make it pressable.

use crate::config::MentionHashtagConfig;
use crate::text::{TokenKind, tokenize};
use std::collections::HashSet;

/// Names of pressable mentions in `text`, in order, without the `@`.
///
/// # Examples
///
/// ```
/// use mention_hashtag_text::{MentionHashtagConfig, extract_mentions};
///
/// let config = MentionHashtagConfig::default();
/// assert_eq!(extract_mentions("cc @alice, @bo", &config), ["alice,"]);
/// ```
#[must_use]
pub fn extract_mentions<'a>(text: &'a str, config: &MentionHashtagConfig) -> Vec<&'a str> {
    extract(text, config, TokenKind::Mention)
}

/// Names of pressable hashtags in `text`, in order, without the `#`.
#[must_use]
pub fn extract_hashtags<'a>(text: &'a str, config: &MentionHashtagConfig) -> Vec<&'a str> {
    extract(text, config, TokenKind::Hashtag)
}

/// Every pressable token in `text`, marker included, in input order.
///
/// ```
/// use mention_hashtag_text::{MentionHashtagConfig, extract::extract_tokens};
///
/// let config = MentionHashtagConfig::default();
/// assert_eq!(extract_tokens("#a @someone #b", &config), ["#a", "@someone", "#b"]);
/// ```
#[must_use]
pub fn extract_tokens<'a>(text: &'a str, config: &MentionHashtagConfig) -> Vec<&'a str> {
    tokenize(Some(text), config)
        .into_iter()
        .filter(|segment| segment.is_pressable())
        .map(|segment| segment.text)
        .collect()
}

/// Drop repeated names, keeping the first occurrence of each.
#[must_use]
pub fn unique<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    names.into_iter().filter(|name| seen.insert(*name)).collect()
}

fn extract<'a>(text: &'a str, config: &MentionHashtagConfig, kind: TokenKind) -> Vec<&'a str> {
    tokenize(Some(text), config)
        .into_iter()
        .filter(|segment| segment.kind.token_kind() == Some(kind))
        .filter_map(|segment| segment.token_name)
        .collect()
}
