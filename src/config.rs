//! Rendering configuration and shallow merging.
//!
//! [`MentionHashtagConfig`] is the fully resolved configuration a single
//! render call runs with. [`ConfigPatch`] carries only the keys someone chose
//! to set; ambient scopes and per-call overrides are patches, and
//! [`ConfigPatch::merge_over`] applies one on top of a resolved config.
//!
//! # Examples
//!
//! ```
//! use mention_hashtag_text::{ConfigPatch, MentionHashtagConfig};
//!
//! let base = MentionHashtagConfig::default();
//! assert_eq!(base.min_mention_length, 5);
//! assert_eq!(base.min_hashtag_length, 1);
//!
//! let patch = ConfigPatch::new().min_mention_length(3);
//! let merged = patch.merge_over(&base);
//! assert_eq!(merged.min_mention_length, 3);
//! assert_eq!(merged.min_hashtag_length, 1);
//! ```

use crate::render::PressEvent;
use crate::style::Style;
use crate::text::{LengthMethod, TokenKind};
use std::fmt;
use std::sync::Arc;

/// Default minimum hashtag length, marker included in the comparison.
pub const DEFAULT_MIN_HASHTAG_LENGTH: i32 = 1;
/// Default minimum mention length, marker included in the comparison.
pub const DEFAULT_MIN_MENTION_LENGTH: i32 = 5;

/// Callback invoked with a token name (no marker) and the press event.
pub type PressCallback = Arc<dyn Fn(&str, &PressEvent) + Send + Sync + 'static>;

/// Resolved configuration for one render call.
#[derive(Clone)]
pub struct MentionHashtagConfig {
    pub on_mention_press: Option<PressCallback>,
    pub on_hashtag_press: Option<PressCallback>,
    /// A hashtag is pressable when its length exceeds this value.
    pub min_hashtag_length: i32,
    /// A mention is pressable when its length exceeds this value.
    pub min_mention_length: i32,
    pub mention_style: Style,
    pub hashtag_style: Style,
    /// Passed through to every pressable span.
    pub disabled: bool,
    pub length_method: LengthMethod,
    /// Append a separator after each top-level word. Prefixes glued to a
    /// marker are always tokenized with this off.
    pub with_space: bool,
}

impl Default for MentionHashtagConfig {
    fn default() -> Self {
        Self {
            on_mention_press: None,
            on_hashtag_press: None,
            min_hashtag_length: DEFAULT_MIN_HASHTAG_LENGTH,
            min_mention_length: DEFAULT_MIN_MENTION_LENGTH,
            mention_style: Style::NONE,
            hashtag_style: Style::NONE,
            disabled: false,
            length_method: LengthMethod::default(),
            with_space: true,
        }
    }
}

impl fmt::Debug for MentionHashtagConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MentionHashtagConfig")
            .field("on_mention_press", &self.on_mention_press.is_some())
            .field("on_hashtag_press", &self.on_hashtag_press.is_some())
            .field("min_hashtag_length", &self.min_hashtag_length)
            .field("min_mention_length", &self.min_mention_length)
            .field("mention_style", &self.mention_style)
            .field("hashtag_style", &self.hashtag_style)
            .field("disabled", &self.disabled)
            .field("length_method", &self.length_method)
            .field("with_space", &self.with_space)
            .finish()
    }
}

impl MentionHashtagConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum length for `kind`.
    #[must_use]
    pub fn min_length(&self, kind: TokenKind) -> i32 {
        match kind {
            TokenKind::Mention => self.min_mention_length,
            TokenKind::Hashtag => self.min_hashtag_length,
        }
    }

    /// Style handed to the sink for `kind`.
    #[must_use]
    pub fn style(&self, kind: TokenKind) -> Style {
        match kind {
            TokenKind::Mention => self.mention_style,
            TokenKind::Hashtag => self.hashtag_style,
        }
    }

    /// Press callback for `kind`, if any.
    #[must_use]
    pub fn callback(&self, kind: TokenKind) -> Option<&PressCallback> {
        match kind {
            TokenKind::Mention => self.on_mention_press.as_ref(),
            TokenKind::Hashtag => self.on_hashtag_press.as_ref(),
        }
    }

    #[must_use]
    pub fn on_mention_press<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str, &PressEvent) + Send + Sync + 'static,
    {
        self.on_mention_press = Some(Arc::new(callback));
        self
    }

    #[must_use]
    pub fn on_hashtag_press<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str, &PressEvent) + Send + Sync + 'static,
    {
        self.on_hashtag_press = Some(Arc::new(callback));
        self
    }

    #[must_use]
    pub fn min_mention_length(mut self, len: i32) -> Self {
        self.min_mention_length = len;
        self
    }

    #[must_use]
    pub fn min_hashtag_length(mut self, len: i32) -> Self {
        self.min_hashtag_length = len;
        self
    }

    #[must_use]
    pub fn mention_style(mut self, style: Style) -> Self {
        self.mention_style = style;
        self
    }

    #[must_use]
    pub fn hashtag_style(mut self, style: Style) -> Self {
        self.hashtag_style = style;
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn length_method(mut self, method: LengthMethod) -> Self {
        self.length_method = method;
        self
    }

    #[must_use]
    pub fn with_space(mut self, with_space: bool) -> Self {
        self.with_space = with_space;
        self
    }
}

/// A partial configuration: only the keys that are `Some` take effect.
#[derive(Clone, Default)]
pub struct ConfigPatch {
    pub on_mention_press: Option<PressCallback>,
    pub on_hashtag_press: Option<PressCallback>,
    pub min_hashtag_length: Option<i32>,
    pub min_mention_length: Option<i32>,
    pub mention_style: Option<Style>,
    pub hashtag_style: Option<Style>,
    pub disabled: Option<bool>,
    pub length_method: Option<LengthMethod>,
}

impl fmt::Debug for ConfigPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigPatch")
            .field("on_mention_press", &self.on_mention_press.is_some())
            .field("on_hashtag_press", &self.on_hashtag_press.is_some())
            .field("min_hashtag_length", &self.min_hashtag_length)
            .field("min_mention_length", &self.min_mention_length)
            .field("mention_style", &self.mention_style)
            .field("hashtag_style", &self.hashtag_style)
            .field("disabled", &self.disabled)
            .field("length_method", &self.length_method)
            .finish()
    }
}

impl ConfigPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no key is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.on_mention_press.is_none()
            && self.on_hashtag_press.is_none()
            && self.min_hashtag_length.is_none()
            && self.min_mention_length.is_none()
            && self.mention_style.is_none()
            && self.hashtag_style.is_none()
            && self.disabled.is_none()
            && self.length_method.is_none()
    }

    /// Apply this patch on top of `base`. Every key set here wins; styles are
    /// replaced whole, not merged field by field.
    #[must_use]
    pub fn merge_over(&self, base: &MentionHashtagConfig) -> MentionHashtagConfig {
        MentionHashtagConfig {
            on_mention_press: self
                .on_mention_press
                .clone()
                .or_else(|| base.on_mention_press.clone()),
            on_hashtag_press: self
                .on_hashtag_press
                .clone()
                .or_else(|| base.on_hashtag_press.clone()),
            min_hashtag_length: self.min_hashtag_length.unwrap_or(base.min_hashtag_length),
            min_mention_length: self.min_mention_length.unwrap_or(base.min_mention_length),
            mention_style: self.mention_style.unwrap_or(base.mention_style),
            hashtag_style: self.hashtag_style.unwrap_or(base.hashtag_style),
            disabled: self.disabled.unwrap_or(base.disabled),
            length_method: self.length_method.unwrap_or(base.length_method),
            with_space: base.with_space,
        }
    }

    /// Combine two patches; keys set in `over` win.
    #[must_use]
    pub fn overlay(&self, over: &Self) -> Self {
        Self {
            on_mention_press: over
                .on_mention_press
                .clone()
                .or_else(|| self.on_mention_press.clone()),
            on_hashtag_press: over
                .on_hashtag_press
                .clone()
                .or_else(|| self.on_hashtag_press.clone()),
            min_hashtag_length: over.min_hashtag_length.or(self.min_hashtag_length),
            min_mention_length: over.min_mention_length.or(self.min_mention_length),
            mention_style: over.mention_style.or(self.mention_style),
            hashtag_style: over.hashtag_style.or(self.hashtag_style),
            disabled: over.disabled.or(self.disabled),
            length_method: over.length_method.or(self.length_method),
        }
    }

    #[must_use]
    pub fn on_mention_press<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str, &PressEvent) + Send + Sync + 'static,
    {
        self.on_mention_press = Some(Arc::new(callback));
        self
    }

    #[must_use]
    pub fn on_hashtag_press<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str, &PressEvent) + Send + Sync + 'static,
    {
        self.on_hashtag_press = Some(Arc::new(callback));
        self
    }

    #[must_use]
    pub fn min_mention_length(mut self, len: i32) -> Self {
        self.min_mention_length = Some(len);
        self
    }

    #[must_use]
    pub fn min_hashtag_length(mut self, len: i32) -> Self {
        self.min_hashtag_length = Some(len);
        self
    }

    #[must_use]
    pub fn mention_style(mut self, style: Style) -> Self {
        self.mention_style = Some(style);
        self
    }

    #[must_use]
    pub fn hashtag_style(mut self, style: Style) -> Self {
        self.hashtag_style = Some(style);
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    #[must_use]
    pub fn length_method(mut self, method: LengthMethod) -> Self {
        self.length_method = Some(method);
        self
    }
}

impl From<MentionHashtagConfig> for ConfigPatch {
    /// Every key of a resolved config becomes a set key.
    fn from(config: MentionHashtagConfig) -> Self {
        Self {
            on_mention_press: config.on_mention_press,
            on_hashtag_press: config.on_hashtag_press,
            min_hashtag_length: Some(config.min_hashtag_length),
            min_mention_length: Some(config.min_mention_length),
            mention_style: Some(config.mention_style),
            hashtag_style: Some(config.hashtag_style),
            disabled: Some(config.disabled),
            length_method: Some(config.length_method),
        }
    }
}
