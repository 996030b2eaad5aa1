//! Fuzz target for color hex parsing.
//!
//! Tests that Color::from_hex handles arbitrary strings without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use mention_hashtag_text::Color;

fuzz_target!(|data: &str| {
    let parsed = Color::from_hex(data);

    // Also try with a # prefix if not already present
    if !data.starts_with('#') {
        assert_eq!(Color::from_hex(&format!("#{data}")), parsed);
    }

    // Anything that parses must print back to an equivalent color.
    if let Some(color) = parsed {
        let digits = data.strip_prefix('#').unwrap_or(data);
        assert!(digits.bytes().all(|b| b.is_ascii_hexdigit()));
        assert_eq!(Color::from_hex(&color.to_string()), Some(color));
    }
});
