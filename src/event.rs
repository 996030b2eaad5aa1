//! Event and log callback system.
//!
//! The crate never prints. Diagnostics go to an optional process-wide log
//! callback, and press dispatches are mirrored to an optional event callback
//! as `(name, data)` pairs such as `("mention_press", "alice")`.

use std::sync::{Arc, Mutex, PoisonError};

/// Severity of a diagnostic passed to the log callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type EventCallback = Arc<dyn Fn(&str, &str) + Send + Sync + 'static>;
type LogCallback = Arc<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

/// A process-wide, replaceable callback. A poisoned lock is recovered.
///
/// Callbacks run after the lock is released, so a callback may replace or
/// clear its own slot, or emit into it.
struct Slot<T>(Mutex<Option<T>>);

impl<T: Clone> Slot<T> {
    const fn empty() -> Self {
        Self(Mutex::new(None))
    }

    fn replace(&self, value: Option<T>) {
        // The old callback is dropped after the lock is released.
        let old = std::mem::replace(
            &mut *self.0.lock().unwrap_or_else(PoisonError::into_inner),
            value,
        );
        drop(old);
    }

    fn get(&self) -> Option<T> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn with(&self, f: impl FnOnce(&T)) {
        if let Some(callback) = self.get() {
            f(&callback);
        }
    }

    fn is_set(&self) -> bool {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).is_some()
    }
}

static EVENTS: Slot<EventCallback> = Slot::empty();
static LOGS: Slot<LogCallback> = Slot::empty();

/// Install the callback that receives `(name, data)` for every press.
pub fn set_event_callback<F>(callback: F)
where
    F: Fn(&str, &str) + Send + Sync + 'static,
{
    EVENTS.replace(Some(Arc::new(callback)));
}

pub fn clear_event_callback() {
    EVENTS.replace(None);
}

/// Forward an event to the installed callback, if any.
pub fn emit_event(name: &str, data: &str) {
    EVENTS.with(|callback| callback(name, data));
}

/// Install the callback that receives crate diagnostics.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    LOGS.replace(Some(Arc::new(callback)));
}

pub fn clear_log_callback() {
    LOGS.replace(None);
}

/// Whether a log callback is installed.
#[must_use]
pub fn log_enabled() -> bool {
    LOGS.is_set()
}

pub fn emit_log(level: LogLevel, message: &str) {
    LOGS.with(|callback| callback(level, message));
}

/// Like [`emit_log`], but only formats the message when someone listens.
pub(crate) fn emit_log_with<F>(level: LogLevel, message: F)
where
    F: FnOnce() -> String,
{
    LOGS.with(|callback| callback(level, &message()));
}
