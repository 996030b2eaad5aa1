//! Snapshot tests for the node stream produced by rendering.
//!
//! Each snapshot lists one rendered piece per line so separators, line
//! breaks and gated-out tokens are all visible.

mod common;

use common::{describe, init_logging};
use mention_hashtag_text::{ConfigPatch, MentionHashtagConfig, MentionHashtagText, NodeSink, render};

fn render_nodes(text: &str, config: &MentionHashtagConfig) -> String {
    let mut sink = NodeSink::new();
    render(Some(text), config, &mut sink);
    describe(&sink)
}

#[test]
fn snapshot_mention_and_hashtag() {
    init_logging();
    let out = render_nodes("Hello @world, meet #rust", &MentionHashtagConfig::default());
    insta::assert_snapshot!(out, @r##"
    text "Hello"
    text " "
    span "@world," -> world,
    text " "
    text "meet"
    text " "
    span "#rust" -> rust
    text " "
    "##);
}

#[test]
fn snapshot_short_mention_stays_text() {
    init_logging();
    let out = render_nodes("Hi @bob #a", &MentionHashtagConfig::default());
    insta::assert_snapshot!(out, @r##"
    text "Hi"
    text " "
    text "@bob"
    text " "
    span "#a" -> a
    text " "
    "##);
}

#[test]
fn snapshot_glued_tokens() {
    init_logging();
    let config = MentionHashtagConfig::default().min_mention_length(1);
    let out = render_nodes("x@y#z", &config);
    insta::assert_snapshot!(out, @r##"
    text "x"
    span "@y" -> y
    span "#z" -> z
    text " "
    "##);
}

#[test]
fn snapshot_line_breaks() {
    init_logging();
    let out = render_nodes("one\n\ntwo", &MentionHashtagConfig::default());
    insta::assert_snapshot!(out, @r##"
    text "one"
    text " "
    break
    text " "
    text "two"
    text " "
    "##);
}

#[test]
fn snapshot_disabled_spans() {
    init_logging();
    let config = MentionHashtagConfig::default().disabled(true);
    let out = render_nodes("#off", &config);
    insta::assert_snapshot!(out, @r##"
    span "#off" -> off (disabled)
    text " "
    "##);
}

#[test]
fn snapshot_component_with_props() {
    init_logging();
    let component = MentionHashtagText::new("ping @al and @alexander")
        .with_props(ConfigPatch::new().min_mention_length(2));
    let mut sink = NodeSink::new();
    component.render(&mut sink);
    insta::assert_snapshot!(describe(&sink), @r##"
    text "ping"
    text " "
    span "@al" -> al
    text " "
    text "and"
    text " "
    span "@alexander" -> alexander
    text " "
    "##);
}
