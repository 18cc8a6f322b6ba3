// crates/devdef-rs-xml/src/logging.rs

//! Diagnostic events emitted while loading and saving device definitions.
//!
//! The codec never logs to a global directly. Every note and error goes through
//! an [`EventSink`] handed in by the caller; [`LogSink`] forwards to the `log`
//! facade and [`CollectingSink`] keeps events in memory.

use log::Level;
use std::path::Path;
use std::sync::Mutex;

/// Trait for structs that provide metadata for logging
pub trait LogMetadata {
    fn meta(&self) -> String;
}

/// Which operation an event belongs to and which file it concerns.
#[derive(Debug, Clone, Copy)]
pub struct LogContext<'a> {
    pub component: &'static str,
    pub file: &'a Path,
}

impl<'a> LogContext<'a> {
    pub(crate) fn loading(file: &'a Path) -> Self {
        Self {
            component: "Loading device definition",
            file,
        }
    }

    pub(crate) fn saving(file: &'a Path) -> Self {
        Self {
            component: "Saving device definition",
            file,
        }
    }
}

impl LogMetadata for LogContext<'_> {
    fn meta(&self) -> String {
        format!("component={}, file={}", self.component, self.file.display())
    }
}

/// A single diagnostic event.
#[derive(Debug, Clone, Copy)]
pub struct LogEvent<'a> {
    pub level: Level,
    pub context: &'a LogContext<'a>,
    pub message: &'a str,
}

/// Receiver of diagnostic events.
pub trait EventSink {
    fn record(&self, event: &LogEvent<'_>);
}

/// Forwards events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn record(&self, event: &LogEvent<'_>) {
        log::log!(event.level, "[{}] {}", event.context.meta(), event.message);
    }
}

/// An event as stored by [`CollectingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEvent {
    pub level: Level,
    pub component: &'static str,
    pub message: String,
}

/// Keeps every recorded event in memory, in order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    events: Mutex<Vec<RecordedEvent>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events recorded so far.
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// True if an event of `level` whose message contains `needle` was recorded.
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.events()
            .iter()
            .any(|e| e.level == level && e.message.contains(needle))
    }

    /// Number of events recorded at `level`.
    pub fn count(&self, level: Level) -> usize {
        self.events().iter().filter(|e| e.level == level).count()
    }
}

impl EventSink for CollectingSink {
    fn record(&self, event: &LogEvent<'_>) {
        if let Ok(mut events) = self.events.lock() {
            events.push(RecordedEvent {
                level: event.level,
                component: event.context.component,
                message: event.message.to_string(),
            });
        }
    }
}

/// Builds a `LogEvent` and hands it to `sink`. Used by the macros below.
pub(crate) fn record(sink: &dyn EventSink, level: Level, context: &LogContext<'_>, message: &str) {
    sink.record(&LogEvent {
        level,
        context,
        message,
    });
}

// =============================================
// Logging Macros (namespaced under crate::logging)
// =============================================

// ===== dd_info! =====
macro_rules! dd_info {
    ($sink:expr, $ctx:expr, $fmt:literal $(, $($arg:tt)+)?) => {{
        let message = format!($fmt $(, $($arg)+)?);
        $crate::logging::record($sink, ::log::Level::Info, &$ctx, &message);
    }};
}

// ===== dd_debug! =====
macro_rules! dd_debug {
    ($sink:expr, $ctx:expr, $fmt:literal $(, $($arg:tt)+)?) => {{
        let message = format!($fmt $(, $($arg)+)?);
        $crate::logging::record($sink, ::log::Level::Debug, &$ctx, &message);
    }};
}

// ===== dd_error! =====
macro_rules! dd_error {
    ($sink:expr, $ctx:expr, $fmt:literal $(, $($arg:tt)+)?) => {{
        let message = format!($fmt $(, $($arg)+)?);
        $crate::logging::record($sink, ::log::Level::Error, &$ctx, &message);
    }};
}

// Re-export macros for use in other files
pub(crate) use dd_debug;
pub(crate) use dd_error;
pub(crate) use dd_info;
