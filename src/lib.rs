//! `mention_hashtag_text` - pressable `@mentions` and `#hashtags` in plain text
//!
//! Splits a string into words, recognizes mention and hashtag tokens, and
//! renders the text through a [`DisplaySink`] with each qualifying token
//! turned into a styled, pressable span. Defaults can be provided for a
//! whole scope and overridden per render call.
//!
//! # Examples
//!
//! ```
//! use mention_hashtag_text::{ColorMode, Color, MentionHashtagConfig, Style, render_ansi_to_string};
//!
//! let config = MentionHashtagConfig::default().hashtag_style(Style::fg(Color::BLUE));
//! let out = render_ansi_to_string(Some("learning #rust"), &config, ColorMode::NoColor);
//! assert_eq!(out, "learning #rust ");
//! ```

// Crate-level lint configuration
#![forbid(unsafe_code)] // No FFI here
#![allow(clippy::cast_possible_truncation)] // Intentional width casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::cast_possible_wrap)] // Intentional coordinate conversions
#![allow(clippy::module_name_repetitions)] // Allow text::TokenKind etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::must_use_candidate)] // Builders are marked where it matters
#![allow(clippy::return_self_not_must_use)] // Builder style methods
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod ansi;
pub mod color;
pub mod config;
pub mod context;
pub mod error;
pub mod event;
pub mod extract;
pub mod render;
pub mod style;
pub mod text;

// Re-export core types at crate root
pub use color::Color;
pub use config::{ConfigPatch, MentionHashtagConfig, PressCallback};
pub use context::{ConfigStack, LayerId, ScopeGuard, provide};
pub use error::{Error, Result};
pub use event::{
    LogLevel, clear_event_callback, clear_log_callback, emit_event, emit_log, set_event_callback,
    set_log_callback,
};
pub use extract::{extract_hashtags, extract_mentions, extract_tokens};
pub use style::{Style, TextAttributes};

// Re-export tokenizer types
pub use text::{LengthMethod, Segment, SegmentKind, TokenKind, tokenize};

// Re-export rendering types
pub use render::{
    DisplaySink, MentionHashtagText, Node, NodeSink, PressEvent, PressHandler, PressMap, render,
};

// Re-export ANSI types
pub use ansi::{AnsiSink, ColorMode, render_ansi, render_ansi_to_string};
