//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and [`Logger`] handler stacks.
//!
//! [`RecordLayer`] is a tracing-subscriber layer that turns each tracing event
//! into a [`LogRecord`] and hands it to a [`Logger`]. This lets code keep
//! using the standard macros (`info!`, `warn!`, ...) while the console sink
//! decides what reaches the terminal.
//!
//! # Mapping
//!
//! - `ERROR` → [`Level::Error`], `WARN` → [`Level::Warning`],
//!   `INFO` → [`Level::Info`], `DEBUG` and `TRACE` → [`Level::Debug`].
//! - The `message` field becomes the record message; every other field is
//!   copied into the record context.
//! - The event target becomes the record channel.
//!
//! Events emitted by this workspace's own crates are skipped so a handler
//! that logs about itself cannot feed back into the layer.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{Logger, init_tracing};
//!
//! let logger = Logger::new("app").with_handler(console_handler);
//! init_tracing(logger);
//!
//! tracing::warn!(attempts = 3, "retrying upload");
//! ```

use serde_json::Value;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::levels::Level;
use crate::logger::Logger;
use crate::record::{LogRecord, Payload};

/// Target prefixes whose events never reach the bridged logger.
const IGNORED_TARGET_PREFIXES: [&str; 3] = ["logging", "logging_sink", "command_line_logger"];

/// A tracing layer that forwards events to a [`Logger`].
pub struct RecordLayer {
    logger: Logger,
}

impl RecordLayer {
    /// Creates a layer dispatching into `logger`.
    #[must_use]
    pub const fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// The logger receiving bridged records.
    #[must_use]
    pub const fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Map a tracing level to a record level.
    const fn map_level(level: &tracing::Level) -> Level {
        match *level {
            tracing::Level::ERROR => Level::Error,
            tracing::Level::WARN => Level::Warning,
            tracing::Level::INFO => Level::Info,
            tracing::Level::DEBUG | tracing::Level::TRACE => Level::Debug,
        }
    }

    fn is_ignored_target(target: &str) -> bool {
        IGNORED_TARGET_PREFIXES.iter().any(|prefix| {
            target == *prefix
                || target
                    .strip_prefix(prefix)
                    .is_some_and(|rest| rest.starts_with("::"))
        })
    }

    /// Converts an event into a record without dispatching it.
    #[must_use]
    pub fn record_for(event: &Event<'_>) -> LogRecord {
        let metadata = event.metadata();
        let mut visitor = RecordVisitor::default();
        event.record(&mut visitor);

        LogRecord::new(
            Self::map_level(metadata.level()),
            visitor.message.unwrap_or_default(),
        )
        .with_channel(metadata.target())
        .with_context(visitor.fields)
    }
}

impl<S> Layer<S> for RecordLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if Self::is_ignored_target(event.metadata().target()) {
            return;
        }

        let level = Self::map_level(event.metadata().level());
        if !self.logger.is_handling(level) {
            return;
        }

        self.logger.add_record(&Self::record_for(event));
    }
}

/// Visitor splitting an event into its message and structured fields.
#[derive(Default)]
struct RecordVisitor {
    message: Option<String>,
    fields: Payload,
}

impl RecordVisitor {
    fn insert(&mut self, field: &Field, value: Value) {
        self.fields.insert(field.name().to_owned(), value);
    }
}

impl Visit for RecordVisitor {
    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, Value::from(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, Value::from(value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        } else {
            self.insert(field, Value::from(value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            self.insert(field, Value::from(format!("{value:?}")));
        }
    }
}

/// Installs a global subscriber that bridges tracing events into `logger`.
///
/// # Example
///
/// ```rust,ignore
/// use logging::{Logger, init_tracing};
///
/// init_tracing(Logger::new("app").with_handler(handler));
/// tracing::error!("disk full");
/// ```
pub fn init_tracing(logger: Logger) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(RecordLayer::new(logger))
        .init();
}

/// Installs the bridge behind an additional filter layer.
///
/// # Example
///
/// ```rust,ignore
/// use logging::{Logger, init_tracing_with_filter};
/// use tracing_subscriber::EnvFilter;
///
/// init_tracing_with_filter(logger, EnvFilter::from_default_env());
/// ```
pub fn init_tracing_with_filter<F>(logger: Logger, filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(RecordLayer::new(logger))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::{Handler, Propagation};
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::SubscriberExt;

    #[derive(Default)]
    struct Capture {
        minimum: Option<Level>,
        records: Mutex<Vec<LogRecord>>,
    }

    impl Handler for Capture {
        fn is_handling(&self, record: &LogRecord) -> bool {
            self.minimum.is_none_or(|minimum| record.level() >= minimum)
        }

        fn handle(&self, record: &LogRecord) -> Propagation {
            self.records.lock().expect("lock").push(record.clone());
            Propagation::Continue
        }
    }

    fn with_layer(capture: &Arc<Capture>, f: impl FnOnce()) {
        let logger = Logger::new("bridge").with_handler(capture.clone());
        let subscriber = tracing_subscriber::registry().with(RecordLayer::new(logger));
        tracing::subscriber::with_default(subscriber, f);
    }

    #[test]
    fn test_map_level() {
        assert_eq!(RecordLayer::map_level(&tracing::Level::ERROR), Level::Error);
        assert_eq!(RecordLayer::map_level(&tracing::Level::WARN), Level::Warning);
        assert_eq!(RecordLayer::map_level(&tracing::Level::INFO), Level::Info);
        assert_eq!(RecordLayer::map_level(&tracing::Level::DEBUG), Level::Debug);
        assert_eq!(RecordLayer::map_level(&tracing::Level::TRACE), Level::Debug);
    }

    #[test]
    fn test_ignored_targets() {
        assert!(RecordLayer::is_ignored_target("logging"));
        assert!(RecordLayer::is_ignored_target("logging_sink::handler"));
        assert!(RecordLayer::is_ignored_target("command_line_logger::subscriber"));
        assert!(!RecordLayer::is_ignored_target("logging_extra"));
        assert!(!RecordLayer::is_ignored_target("app::jobs"));
    }

    #[test]
    fn events_become_records_with_context() {
        let capture = Arc::new(Capture::default());
        with_layer(&capture, || {
            tracing::warn!(target: "app::upload", attempts = 3, retry = true, file = "a.txt", "retrying upload");
        });

        let records = capture.records.lock().expect("lock");
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.level(), Level::Warning);
        assert_eq!(record.message(), "retrying upload");
        assert_eq!(record.channel(), "app::upload");
        assert_eq!(record.context()["attempts"], json!(3));
        assert_eq!(record.context()["retry"], json!(true));
        assert_eq!(record.context()["file"], json!("a.txt"));
        assert!(!record.context().contains_key("message"));
    }

    #[test]
    fn events_below_every_handler_are_dropped() {
        let capture = Arc::new(Capture {
            minimum: Some(Level::Error),
            ..Capture::default()
        });
        with_layer(&capture, || {
            tracing::info!(target: "app", "just info");
            tracing::error!(target: "app", "real problem");
        });

        let records = capture.records.lock().expect("lock");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message(), "real problem");
    }

    #[test]
    fn workspace_targets_are_skipped() {
        let capture = Arc::new(Capture::default());
        with_layer(&capture, || {
            tracing::error!(target: "logging_sink::handler", "internal");
        });
        assert!(capture.records.lock().expect("lock").is_empty());
    }
}
