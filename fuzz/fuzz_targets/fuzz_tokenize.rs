//! Fuzz target for tokenizing and rendering.
//!
//! Arbitrary text and gate settings must never panic, and the displayed
//! output must always be the input words re-joined by separators.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mention_hashtag_text::text::display_string;
use mention_hashtag_text::{
    ColorMode, LengthMethod, MentionHashtagConfig, PressMap, extract_hashtags, render,
    render_ansi_to_string, tokenize,
};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    text: &'a str,
    min_mention: i32,
    min_hashtag: i32,
    method: u8,
    with_space: bool,
}

fuzz_target!(|input: Input<'_>| {
    let method = match input.method % 3 {
        0 => LengthMethod::Utf16,
        1 => LengthMethod::Chars,
        _ => LengthMethod::Graphemes,
    };
    let config = MentionHashtagConfig::default()
        .min_mention_length(input.min_mention)
        .min_hashtag_length(input.min_hashtag)
        .length_method(method)
        .with_space(input.with_space);

    let segments = tokenize(Some(input.text), &config);

    let separator = if input.with_space { " " } else { "" };
    let mut expected = String::new();
    if !input.text.is_empty() {
        for word in input.text.split([' ', '\n']) {
            expected.push_str(if word.is_empty() { "\n" } else { word });
            expected.push_str(separator);
        }
    }
    assert_eq!(display_string(&segments), expected);

    for segment in &segments {
        if let Some(name) = segment.token_name {
            assert_eq!(&segment.text[1..], name);
        }
    }

    let _ = extract_hashtags(input.text, &config);
    let _ = render_ansi_to_string(Some(input.text), &config, ColorMode::Color16);
    let mut map = PressMap::new(64, 8);
    render(Some(input.text), &config, &mut map);
});
