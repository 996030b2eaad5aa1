//! Shared helpers for integration tests.

#![allow(dead_code)] // Each test binary uses a different subset
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry

use mention_hashtag_text::{LogLevel, Node, NodeSink, set_log_callback};
use std::fmt::Write;
use std::sync::Once;
use tracing::Level;

static LOGGING: Once = Once::new();

/// Install a test-writer subscriber and forward crate logs into `tracing`.
pub fn init_logging() {
    LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_test_writer()
            .try_init();
        set_log_callback(|level, message| match level {
            LogLevel::Debug => tracing::debug!(target: "mention_hashtag_text", "{message}"),
            LogLevel::Info => tracing::info!(target: "mention_hashtag_text", "{message}"),
            LogLevel::Warn => tracing::warn!(target: "mention_hashtag_text", "{message}"),
            LogLevel::Error => tracing::error!(target: "mention_hashtag_text", "{message}"),
        });
    });
}

/// One line per node: `text "..."`, `break`, or `span "..." -> name`.
pub fn describe(sink: &NodeSink) -> String {
    let mut out = String::new();
    for node in sink.nodes() {
        let written = match node {
            Node::Text(text) => writeln!(out, "text {text:?}"),
            Node::LineBreak => writeln!(out, "break"),
            Node::Span {
                text,
                disabled,
                handler,
                ..
            } => {
                let state = if *disabled { " (disabled)" } else { "" };
                writeln!(out, "span {text:?} -> {}{state}", handler.token_name())
            }
        };
        written.expect("writing to a String cannot fail");
    }
    out
}

/// Words split the way the tokenizer splits them, re-joined for display.
pub fn expected_display(text: &str) -> String {
    let mut out = String::new();
    if text.is_empty() {
        return out;
    }
    for word in text.split([' ', '\n']) {
        out.push_str(if word.is_empty() { "\n" } else { word });
        out.push(' ');
    }
    out
}
