//! Position-based press dispatch for rendered text.
//!
//! [`PressMap`] lays rendered pieces out left to right on a fixed-size grid,
//! measuring each piece in terminal columns. Line breaks move to the start
//! of the next row; there is no wrapping. Pressable spans are registered in
//! a [`HitGrid`] so a press at a cell can be routed to its handler.

use super::hitgrid::HitGrid;
use super::{DisplaySink, PressEvent, PressHandler};
use crate::event::{LogLevel, emit_log_with};
use crate::style::Style;
use unicode_width::UnicodeWidthStr;

/// Where a pressable span landed.
#[derive(Clone, Debug)]
pub struct SpanRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub text: String,
    pub style: Style,
    pub handler: PressHandler,
}

/// A [`DisplaySink`] that records span positions for hit testing.
#[derive(Clone, Debug)]
pub struct PressMap {
    grid: HitGrid,
    regions: Vec<SpanRegion>,
    cursor: (u32, u32),
}

impl PressMap {
    /// Create a map covering a `width` x `height` viewport.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            grid: HitGrid::new(width, height),
            regions: Vec::new(),
            cursor: (0, 0),
        }
    }

    /// Registered spans, in render order.
    #[must_use]
    pub fn regions(&self) -> &[SpanRegion] {
        &self.regions
    }

    /// The position the next piece would be placed at.
    #[must_use]
    pub fn cursor(&self) -> (u32, u32) {
        self.cursor
    }

    /// The span covering a cell, if any.
    #[must_use]
    pub fn span_at(&self, x: u32, y: u32) -> Option<&SpanRegion> {
        let id = self.grid.test(x, y)?;
        self.regions.get(id as usize)
    }

    /// Dispatch a press at the event's position.
    ///
    /// Returns `true` if a callback ran. Presses outside any span, on
    /// disabled spans, or on spans without a callback do nothing.
    pub fn press(&self, event: &PressEvent) -> bool {
        match self.span_at(event.x, event.y) {
            Some(region) => region.handler.activate(event),
            None => {
                emit_log_with(LogLevel::Debug, || {
                    format!("press at ({}, {}) hit no span", event.x, event.y)
                });
                false
            }
        }
    }

    /// Forget all spans and move the cursor home.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.regions.clear();
        self.cursor = (0, 0);
    }

    fn advance(&mut self, text: &str) -> u32 {
        let width = u32::try_from(text.width()).unwrap_or(u32::MAX);
        self.cursor.0 = self.cursor.0.saturating_add(width);
        width
    }
}

impl DisplaySink for PressMap {
    fn render_text(&mut self, text: &str) {
        self.advance(text);
    }

    fn render_line_break(&mut self) {
        self.cursor = (0, self.cursor.1.saturating_add(1));
    }

    fn render_pressable_span(
        &mut self,
        text: &str,
        style: Style,
        _disabled: bool,
        on_activate: PressHandler,
    ) {
        let (x, y) = self.cursor;
        let width = self.advance(text);
        let Ok(id) = u32::try_from(self.regions.len()) else {
            return;
        };
        self.grid.register_run(x, y, width, id);
        self.regions.push(SpanRegion {
            x,
            y,
            width,
            text: text.to_string(),
            style,
            handler: on_activate,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MentionHashtagConfig;
    use crate::render::render;
    use std::sync::{Arc, Mutex};

    fn recording_config(log: &Arc<Mutex<Vec<String>>>) -> MentionHashtagConfig {
        let mentions = Arc::clone(log);
        let hashtags = Arc::clone(log);
        MentionHashtagConfig::default()
            .on_mention_press(move |name, _| {
                mentions.lock().unwrap().push(format!("@{name}"));
            })
            .on_hashtag_press(move |name, _| {
                hashtags.lock().unwrap().push(format!("#{name}"));
            })
    }

    #[test]
    fn test_layout_positions() {
        let mut map = PressMap::new(40, 4);
        render(Some("hey @alice and #rust"), &MentionHashtagConfig::default(), &mut map);

        let regions = map.regions();
        assert_eq!(regions.len(), 2);
        assert_eq!((regions[0].x, regions[0].y, regions[0].width), (4, 0, 6));
        assert_eq!((regions[1].x, regions[1].y, regions[1].width), (15, 0, 5));
        assert_eq!(map.cursor(), (21, 0));
    }

    #[test]
    fn test_press_dispatches_by_position() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut map = PressMap::new(40, 4);
        render(Some("hey @alice\n\n#rust"), &recording_config(&log), &mut map);

        assert!(map.press(&PressEvent::at(5, 0)));
        assert!(!map.press(&PressEvent::at(1, 0)));
        assert!(!map.press(&PressEvent::at(0, 1)));
        assert!(map.press(&PressEvent::at(1, 1)));
        assert!(!map.press(&PressEvent::at(30, 3)));
        assert_eq!(*log.lock().unwrap(), ["@alice", "#rust"]);
    }

    #[test]
    fn test_line_break_placeholder_moves_down() {
        let mut map = PressMap::new(40, 4);
        render(Some("a\n\n#b"), &MentionHashtagConfig::default(), &mut map);
        // "a" then the empty word; "#b" lands on the next row after its separator.
        assert_eq!((map.regions()[0].x, map.regions()[0].y), (1, 1));
    }

    #[test]
    fn test_wide_characters() {
        let mut map = PressMap::new(40, 1);
        render(Some("漢字 #tag"), &MentionHashtagConfig::default(), &mut map);
        assert_eq!(map.regions()[0].x, 5);
    }

    #[test]
    fn test_disabled_spans_do_not_fire() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut map = PressMap::new(20, 1);
        render(Some("#rust"), &recording_config(&log).disabled(true), &mut map);
        assert!(!map.press(&PressEvent::at(0, 0)));
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_clear() {
        let mut map = PressMap::new(20, 1);
        render(Some("#rust"), &MentionHashtagConfig::default(), &mut map);
        map.clear();
        assert!(map.regions().is_empty());
        assert!(map.span_at(0, 0).is_none());
        assert_eq!(map.cursor(), (0, 0));
    }
}
