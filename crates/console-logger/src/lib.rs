//! Console Logger
//!
//! A `tracing-subscriber` layer that formats each event as a single line
//! and hands it to a [`LogSink`]. In the browser the sink is the devtools
//! console; on native targets it is stderr.

use std::fmt::{self, Write as _};

use thiserror::Error;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("a global subscriber is already installed: {0}")]
    AlreadyInitialized(String),
}

/// Destination for formatted log lines
pub trait LogSink: Send + Sync + 'static {
    fn write(&self, level: Level, line: &str);
}

/// Browser console on wasm32, stderr elsewhere
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConsole;

impl LogSink for BrowserConsole {
    #[cfg(target_arch = "wasm32")]
    fn write(&self, level: Level, line: &str) {
        let value = wasm_bindgen::JsValue::from_str(line);
        match level {
            Level::ERROR => web_sys::console::error_1(&value),
            Level::WARN => web_sys::console::warn_1(&value),
            Level::INFO => web_sys::console::info_1(&value),
            Level::DEBUG => web_sys::console::log_1(&value),
            _ => web_sys::console::debug_1(&value),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn write(&self, _level: Level, line: &str) {
        eprintln!("{}", line);
    }
}

/// Layer turning events into console lines
pub struct ConsoleLayer<K = BrowserConsole> {
    sink: K,
}

impl<K: LogSink> ConsoleLayer<K> {
    pub fn new(sink: K) -> Self {
        Self { sink }
    }
}

impl<S, K> Layer<S> for ConsoleLayer<K>
where
    S: Subscriber,
    K: LogSink,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut line = LineBuilder::default();
        event.record(&mut line);
        self.sink.write(*meta.level(), &line.finish(*meta.level(), meta.target()));
    }
}

/// Collects the message and key=value fields of one event
#[derive(Default)]
struct LineBuilder {
    message: String,
    fields: String,
}

impl LineBuilder {
    fn finish(self, level: Level, target: &str) -> String {
        format!("[{}] {}: {}{}", level, target, self.message, self.fields)
    }
}

impl Visit for LineBuilder {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

/// Install the console layer as the global subscriber.
pub fn init(level: LevelFilter) -> Result<(), LoggerError> {
    tracing_subscriber::registry()
        .with(level)
        .with(ConsoleLayer::new(BrowserConsole))
        .try_init()
        .map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))
}
