//! A sink that records what was rendered.

use super::{DisplaySink, PressEvent, PressHandler};
use crate::style::Style;
use crate::text::LINE_BREAK;

/// One rendered piece.
#[derive(Clone, Debug)]
pub enum Node {
    /// Ordinary text, including separators and gated-out tokens.
    Text(String),
    /// Placeholder for an empty word.
    LineBreak,
    /// A pressable mention or hashtag.
    Span {
        text: String,
        style: Style,
        disabled: bool,
        handler: PressHandler,
    },
}

impl Node {
    /// The characters this node displays.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Span { text, .. } => text,
            Self::LineBreak => LINE_BREAK,
        }
    }
}

/// Collects nodes in render order.
#[derive(Clone, Debug, Default)]
pub struct NodeSink {
    nodes: Vec<Node>,
}

impl NodeSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[must_use]
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    /// Everything displayed, concatenated.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.nodes.iter().map(Node::text).collect()
    }

    /// Handlers of every pressable span, in order.
    pub fn spans(&self) -> impl Iterator<Item = &PressHandler> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Span { handler, .. } => Some(handler),
            _ => None,
        })
    }

    /// Activate every span once; returns how many callbacks ran.
    pub fn activate_all(&self, event: &PressEvent) -> usize {
        self.spans().filter(|handler| handler.activate(event)).count()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl DisplaySink for NodeSink {
    fn render_text(&mut self, text: &str) {
        self.nodes.push(Node::Text(text.to_string()));
    }

    fn render_line_break(&mut self) {
        self.nodes.push(Node::LineBreak);
    }

    fn render_pressable_span(
        &mut self,
        text: &str,
        style: Style,
        disabled: bool,
        on_activate: PressHandler,
    ) {
        self.nodes.push(Node::Span {
            text: text.to_string(),
            style,
            disabled,
            handler: on_activate,
        });
    }
}
