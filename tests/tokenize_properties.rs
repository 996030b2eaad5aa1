//! Property-based tests for the tokenizer.
//!
//! Uses proptest to check invariants that must hold for every input string.

mod common;

use common::expected_display;
use mention_hashtag_text::text::{DELIMITERS, display_string};
use mention_hashtag_text::{
    LengthMethod, MentionHashtagConfig, SegmentKind, extract_hashtags, extract_mentions, tokenize,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Short strings dense in markers and delimiters.
fn marker_heavy() -> impl Strategy<Value = String> {
    "[ab@# \n]{0,40}"
}

/// Arbitrary printable UTF-8.
fn utf8_string() -> impl Strategy<Value = String> {
    "\\PC{0,80}"
}

/// Mixed scripts and emoji glued to markers.
fn unicode_tokens() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!["@", "#", " ", "\n", "é", "😀", "漢", "a", "e\u{301}", "👨‍👩‍👧"]),
        0..30,
    )
    .prop_map(|parts| parts.concat())
}

fn any_text() -> impl Strategy<Value = String> {
    prop_oneof![marker_heavy(), utf8_string(), unicode_tokens()]
}

fn any_config() -> impl Strategy<Value = MentionHashtagConfig> {
    (
        -2i32..8,
        -2i32..8,
        prop::sample::select(vec![
            LengthMethod::Utf16,
            LengthMethod::Chars,
            LengthMethod::Graphemes,
        ]),
    )
        .prop_map(|(mention, hashtag, method)| {
            MentionHashtagConfig::default()
                .min_mention_length(mention)
                .min_hashtag_length(hashtag)
                .length_method(method)
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Display output is the input with every delimiter turned into a space,
    /// empty words shown as line breaks, and a trailing separator.
    #[test]
    fn display_is_lossless(text in any_text(), config in any_config()) {
        let segments = tokenize(Some(&text), &config);
        prop_assert_eq!(display_string(&segments), expected_display(&text));
    }

    /// Without the trailing separator the words are simply concatenated.
    #[test]
    fn display_without_space(text in "[ab@# \n]{1,40}") {
        let config = MentionHashtagConfig::default().with_space(false);
        let segments = tokenize(Some(&text), &config);
        let expected: String = text
            .split(DELIMITERS)
            .map(|w| if w.is_empty() { "\n" } else { w })
            .collect();
        prop_assert_eq!(display_string(&segments), expected);
    }

    /// Tokenizing is a pure function of its inputs.
    #[test]
    fn tokenize_is_idempotent(text in any_text(), config in any_config()) {
        prop_assert_eq!(tokenize(Some(&text), &config), tokenize(Some(&text), &config));
    }

    /// Byte ranges point back at the segment text, in order.
    #[test]
    fn byte_ranges_match_source(text in any_text()) {
        let config = MentionHashtagConfig::default();
        let mut last_end = 0;
        for segment in tokenize(Some(&text), &config) {
            prop_assert!(segment.byte_range.start >= last_end);
            if segment.kind != SegmentKind::LineBreak {
                prop_assert_eq!(&text[segment.byte_range.clone()], segment.text);
            }
            last_end = segment.byte_range.end;
        }
    }

    /// Text without markers yields no tokens at all.
    #[test]
    fn no_markers_no_tokens(text in "[a-z \n]{0,60}") {
        let config = MentionHashtagConfig::default().min_mention_length(-1);
        for segment in tokenize(Some(&text), &config) {
            prop_assert!(segment.kind.token_kind().is_none());
            prop_assert!(!segment.is_pressable());
        }
    }

    /// Token segments start with their marker, and the name is the rest.
    #[test]
    fn tokens_carry_marker_and_name(text in any_text(), config in any_config()) {
        for segment in tokenize(Some(&text), &config) {
            let Some(kind) = segment.kind.token_kind() else { continue };
            prop_assert!(segment.text.starts_with(kind.marker()));
            if let Some(name) = segment.token_name {
                prop_assert_eq!(name, &segment.text[1..]);
            }
        }
    }

    /// A non-positive minimum makes every token pressable.
    #[test]
    fn non_positive_minimum_is_always_pressable(text in marker_heavy(), min in -5i32..=0) {
        let config = MentionHashtagConfig::default()
            .min_mention_length(min)
            .min_hashtag_length(min);
        for segment in tokenize(Some(&text), &config) {
            if segment.kind.token_kind().is_some() {
                prop_assert!(segment.is_pressable());
            }
        }
    }

    /// Extraction agrees with pressable segments.
    #[test]
    fn extraction_matches_pressable_tokens(text in any_text(), config in any_config()) {
        let segments = tokenize(Some(&text), &config);
        let pressable = segments.iter().filter(|s| s.is_pressable()).count();
        let extracted = extract_mentions(&text, &config).len() + extract_hashtags(&text, &config).len();
        prop_assert_eq!(pressable, extracted);
    }
}
