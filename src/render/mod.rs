//! Turning segments into output through a [`DisplaySink`].
//!
//! The tokenizer only classifies text. Rendering walks the segments and calls
//! the sink once per piece: plain runs and gated-out tokens become text, empty
//! words become line breaks, and tokens that pass the length gate become
//! pressable spans carrying a [`PressHandler`].
//!
//! Sinks shipped with the crate:
//!
//! - [`NodeSink`]: records [`Node`]s for inspection or a custom UI layer
//! - [`PressMap`]: lays spans out on a grid and dispatches presses by position
//! - [`crate::ansi::AnsiSink`]: writes SGR-styled text for terminals
//!
//! # Examples
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use mention_hashtag_text::{MentionHashtagConfig, Node, NodeSink, PressEvent, render};
//!
//! let pressed = Arc::new(Mutex::new(Vec::new()));
//! let log = Arc::clone(&pressed);
//! let config = MentionHashtagConfig::default()
//!     .on_mention_press(move |name, _| log.lock().unwrap().push(name.to_string()));
//!
//! let mut sink = NodeSink::new();
//! render(Some("Hello @world"), &config, &mut sink);
//!
//! let Node::Span { handler, .. } = &sink.nodes()[2] else { panic!("expected a span") };
//! handler.activate(&PressEvent::default());
//! assert_eq!(*pressed.lock().unwrap(), ["world"]);
//! ```

mod hitgrid;
mod nodes;
mod press_map;

pub use hitgrid::HitGrid;
pub use nodes::{Node, NodeSink};
pub use press_map::PressMap;

use crate::config::{ConfigPatch, MentionHashtagConfig, PressCallback};
use crate::context;
use crate::event::{LogLevel, emit_event, emit_log_with};
use crate::style::Style;
use crate::text::{LINE_BREAK, SEPARATOR, SegmentKind, TokenKind, tokenize};
use std::fmt;

/// Where and how a pressable span was activated.
///
/// Sinks that know nothing about positions pass [`PressEvent::default`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PressEvent {
    /// Column of the press, 0-based.
    pub x: u32,
    /// Row of the press, 0-based.
    pub y: u32,
}

impl PressEvent {
    #[must_use]
    pub const fn at(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Activation handler attached to one pressable span.
#[derive(Clone)]
pub struct PressHandler {
    kind: TokenKind,
    token_name: String,
    callback: Option<PressCallback>,
    disabled: bool,
}

impl PressHandler {
    #[must_use]
    pub fn new(
        kind: TokenKind,
        token_name: impl Into<String>,
        callback: Option<PressCallback>,
        disabled: bool,
    ) -> Self {
        Self {
            kind,
            token_name: token_name.into(),
            callback,
            disabled,
        }
    }

    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The token name without its marker.
    #[must_use]
    pub fn token_name(&self) -> &str {
        &self.token_name
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Invoke the callback once with the token name.
    ///
    /// Returns `false` without calling anything when the span is disabled or
    /// no callback is configured for its kind.
    pub fn activate(&self, event: &PressEvent) -> bool {
        if self.disabled {
            emit_log_with(LogLevel::Debug, || {
                format!("press on disabled {:?} {:?} ignored", self.kind, self.token_name)
            });
            return false;
        }
        let Some(callback) = self.callback.as_ref() else {
            return false;
        };
        emit_event(self.kind.press_event_name(), &self.token_name);
        callback(&self.token_name, event);
        true
    }
}

impl fmt::Debug for PressHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PressHandler")
            .field("kind", &self.kind)
            .field("token_name", &self.token_name)
            .field("callback", &self.callback.is_some())
            .field("disabled", &self.disabled)
            .finish()
    }
}

/// The presentation layer a render call writes into.
pub trait DisplaySink {
    /// Show a run of ordinary text.
    fn render_text(&mut self, text: &str);

    /// Show the placeholder for an empty word.
    fn render_line_break(&mut self) {
        self.render_text(LINE_BREAK);
    }

    /// Show a styled span that reacts to presses.
    fn render_pressable_span(
        &mut self,
        text: &str,
        style: Style,
        disabled: bool,
        on_activate: PressHandler,
    );
}

/// Tokenize `text` with `config` and replay the segments into `sink`.
///
/// `None` or `""` renders nothing.
pub fn render<S>(text: Option<&str>, config: &MentionHashtagConfig, sink: &mut S)
where
    S: DisplaySink + ?Sized,
{
    for segment in tokenize(text, config) {
        match (segment.kind, segment.kind.token_kind(), segment.token_name) {
            (SegmentKind::LineBreak, _, _) => sink.render_line_break(),
            (_, Some(kind), Some(name)) => {
                let handler =
                    PressHandler::new(kind, name, config.callback(kind).cloned(), config.disabled);
                sink.render_pressable_span(segment.text, config.style(kind), config.disabled, handler);
            }
            _ => sink.render_text(segment.text),
        }
        if segment.trailing_space {
            sink.render_text(SEPARATOR);
        }
    }
}

/// A text value plus the options explicitly set on it.
///
/// Rendering resolves the explicit options over the current thread's ambient
/// scope, so unset keys come from the nearest [`context::provide`] call.
#[derive(Clone, Debug, Default)]
pub struct MentionHashtagText<'a> {
    text: Option<&'a str>,
    props: ConfigPatch,
}

impl<'a> MentionHashtagText<'a> {
    #[must_use]
    pub fn new(text: impl Into<Option<&'a str>>) -> Self {
        Self {
            text: text.into(),
            props: ConfigPatch::default(),
        }
    }

    /// Replace the explicit options.
    #[must_use]
    pub fn with_props(mut self, props: ConfigPatch) -> Self {
        self.props = props;
        self
    }

    #[must_use]
    pub fn text(&self) -> Option<&'a str> {
        self.text
    }

    #[must_use]
    pub fn props(&self) -> &ConfigPatch {
        &self.props
    }

    /// The configuration a render would use right now.
    #[must_use]
    pub fn effective_config(&self) -> MentionHashtagConfig {
        context::resolve(&self.props)
    }

    /// Render into `sink` using the ambient scope plus explicit options.
    pub fn render<S>(&self, sink: &mut S)
    where
        S: DisplaySink + ?Sized,
    {
        render(self.text, &self.effective_config(), sink);
    }
}
