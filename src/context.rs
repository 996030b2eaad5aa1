//! Ambient configuration scopes.
//!
//! Default options flow to every render inside a scope without being passed
//! explicitly. Scopes form a stack: an inner scope overrides only the keys it
//! sets and inherits the rest from the nearest enclosing scope, falling back
//! to [`MentionHashtagConfig::default`].
//!
//! Two ways to use it:
//!
//! - [`ConfigStack`] is a plain value you own and thread through your code.
//! - [`provide`] pushes onto a per-thread stack and returns a [`ScopeGuard`]
//!   that pops on drop, so scopes end exactly where their guard goes out of
//!   scope.
//!
//! # Examples
//!
//! ```
//! use mention_hashtag_text::{ConfigPatch, context};
//!
//! let _outer = context::provide(ConfigPatch::new().min_mention_length(3));
//! assert_eq!(context::ambient().min_mention_length, 3);
//!
//! {
//!     let _inner = context::provide(ConfigPatch::new().min_hashtag_length(4));
//!     let config = context::ambient();
//!     assert_eq!(config.min_mention_length, 3);
//!     assert_eq!(config.min_hashtag_length, 4);
//! }
//!
//! assert_eq!(context::ambient().min_hashtag_length, 1);
//! ```

use crate::config::{ConfigPatch, MentionHashtagConfig};
use crate::event::{LogLevel, emit_log_with};
use std::cell::RefCell;
use std::marker::PhantomData;

/// Identifies one layer pushed with [`ConfigStack::enter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayerId(u64);

#[derive(Clone, Debug)]
struct Layer {
    id: LayerId,
    patch: ConfigPatch,
}

/// An owned stack of configuration layers.
#[derive(Clone, Debug, Default)]
pub struct ConfigStack {
    layers: Vec<Layer>,
    next_id: u64,
}

impl ConfigStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a scope.
    pub fn push(&mut self, patch: ConfigPatch) {
        self.enter(patch);
    }

    /// Enter a scope and return an id that [`leave`](Self::leave) accepts.
    pub fn enter(&mut self, patch: ConfigPatch) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.layers.push(Layer { id, patch });
        id
    }

    /// Remove layer `id` and every layer above it.
    ///
    /// Returns how many layers were removed; zero when `id` is already gone.
    pub fn leave(&mut self, id: LayerId) -> usize {
        match self.layers.iter().position(|layer| layer.id == id) {
            Some(index) => {
                let removed = self.layers.len() - index;
                self.layers.truncate(index);
                removed
            }
            None => 0,
        }
    }

    /// Leave the innermost scope, returning its patch.
    pub fn pop(&mut self) -> Option<ConfigPatch> {
        self.layers.pop().map(|layer| layer.patch)
    }

    /// Number of active scopes.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Drop every scope deeper than `depth`.
    pub fn truncate(&mut self, depth: usize) {
        self.layers.truncate(depth);
    }

    /// Every layer folded into one patch, inner keys winning. Empty layers
    /// count toward depth but are skipped here.
    #[must_use]
    pub fn flattened(&self) -> ConfigPatch {
        self.layers
            .iter()
            .filter(|layer| !layer.patch.is_empty())
            .fold(ConfigPatch::new(), |acc, layer| acc.overlay(&layer.patch))
    }

    /// Defaults with every layer applied, outermost first.
    #[must_use]
    pub fn resolved(&self) -> MentionHashtagConfig {
        self.flattened().merge_over(&MentionHashtagConfig::default())
    }

    /// Resolve with an explicit per-call patch on top of every layer.
    #[must_use]
    pub fn resolve(&self, explicit: &ConfigPatch) -> MentionHashtagConfig {
        self.flattened()
            .overlay(explicit)
            .merge_over(&MentionHashtagConfig::default())
    }

    /// Run `f` inside a scope. The stack is restored to its prior depth when
    /// `f` returns, including any scopes `f` left open.
    pub fn scoped<R>(&mut self, patch: ConfigPatch, f: impl FnOnce(&mut Self) -> R) -> R {
        let depth = self.depth();
        self.push(patch);
        let result = f(self);
        self.truncate(depth);
        result
    }
}

thread_local! {
    static AMBIENT: RefCell<ConfigStack> = RefCell::new(ConfigStack::new());
}

/// Keeps an ambient scope open.
///
/// Dropping it removes its own layer and any layer opened above it. A guard
/// whose layer was already removed by an outer guard drops as a no-op.
#[must_use = "the scope ends as soon as the guard is dropped"]
#[derive(Debug)]
pub struct ScopeGuard {
    id: LayerId,
    depth: usize,
    // The stack is thread-local; the guard must not leave its thread.
    _not_send: PhantomData<*const ()>,
}

impl ScopeGuard {
    /// Depth of the stack below this scope.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        let (id, depth) = (self.id, self.depth);
        let removed = AMBIENT
            .try_with(|stack| stack.try_borrow_mut().map_or(0, |mut stack| stack.leave(id)))
            .unwrap_or(0);
        emit_log_with(LogLevel::Debug, || {
            format!("ambient scope opened at depth {depth} closed, {removed} layer(s) removed")
        });
    }
}

/// Open an ambient scope on the current thread.
pub fn provide(patch: ConfigPatch) -> ScopeGuard {
    let (id, depth) = AMBIENT.with(|stack| {
        let mut stack = stack.borrow_mut();
        let depth = stack.depth();
        (stack.enter(patch), depth)
    });
    emit_log_with(LogLevel::Debug, || format!("ambient scope opened at depth {depth}"));
    ScopeGuard {
        id,
        depth,
        _not_send: PhantomData,
    }
}

/// The ambient configuration for the current thread.
#[must_use]
pub fn ambient() -> MentionHashtagConfig {
    AMBIENT.with(|stack| stack.borrow().resolved())
}

/// Ambient configuration with an explicit per-call patch applied on top.
#[must_use]
pub fn resolve(explicit: &ConfigPatch) -> MentionHashtagConfig {
    AMBIENT.with(|stack| stack.borrow().resolve(explicit))
}

/// Number of ambient scopes open on the current thread.
#[must_use]
pub fn ambient_depth() -> usize {
    AMBIENT.with(|stack| stack.borrow().depth())
}
