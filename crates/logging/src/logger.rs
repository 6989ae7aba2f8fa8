//! crates/logging/src/logger.rs
//! Named handler stack that dispatches records until one stops them.

use std::fmt;
use std::sync::Arc;

use crate::handler::Handler;
use crate::levels::Level;
use crate::record::{LogRecord, Payload};

/// Callback that fills the `extra` payload of every record a logger creates.
pub type Processor = Arc<dyn Fn(&mut Payload) + Send + Sync>;

/// A logging channel: a name, an ordered handler stack and optional processors.
///
/// Handlers pushed later run first. Dispatch walks the stack until a handler
/// returns [`Propagation::Stop`](crate::Propagation::Stop).
#[derive(Clone)]
pub struct Logger {
    name: String,
    handlers: Vec<Arc<dyn Handler>>,
    processors: Vec<Processor>,
}

impl Logger {
    /// Creates a logger with no handlers.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handlers: Vec::new(),
            processors: Vec::new(),
        }
    }

    /// Channel name stamped on records created by [`log`](Self::log).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Puts `handler` on top of the stack.
    pub fn push_handler(&mut self, handler: Arc<dyn Handler>) {
        self.handlers.insert(0, handler);
    }

    /// Builder form of [`push_handler`](Self::push_handler).
    #[must_use]
    pub fn with_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.push_handler(handler);
        self
    }

    /// Adds a processor that runs on the `extra` payload of new records.
    #[must_use]
    pub fn with_processor(mut self, processor: Processor) -> Self {
        self.processors.push(processor);
        self
    }

    /// Handlers in dispatch order.
    #[must_use]
    pub fn handlers(&self) -> &[Arc<dyn Handler>] {
        &self.handlers
    }

    /// Reports whether any handler would act on a record at `level`.
    #[must_use]
    pub fn is_handling(&self, level: Level) -> bool {
        let probe = LogRecord::new(level, String::new()).with_channel(self.name.clone());
        self.handlers.iter().any(|handler| handler.is_handling(&probe))
    }

    /// Builds a record on this channel and dispatches it.
    ///
    /// Returns `true` when at least one handler reported it was handling the record.
    pub fn log(&self, level: Level, message: impl Into<String>, context: Payload) -> bool {
        let mut extra = Payload::new();
        for processor in &self.processors {
            processor(&mut extra);
        }
        let record = LogRecord::new(level, message)
            .with_channel(self.name.clone())
            .with_context(context)
            .with_extra(extra);
        self.add_record(&record)
    }

    /// Dispatches an existing record through the handler stack.
    pub fn add_record(&self, record: &LogRecord) -> bool {
        let mut handled = false;
        for handler in &self.handlers {
            if !handler.is_handling(record) {
                continue;
            }
            handled = true;
            if handler.handle(record).is_stop() {
                break;
            }
        }
        handled
    }

    /// Closes every handler.
    pub fn close(&self) {
        for handler in &self.handlers {
            handler.close();
        }
    }

    /// Logs at [`Level::Debug`].
    pub fn debug(&self, message: impl Into<String>, context: Payload) -> bool {
        self.log(Level::Debug, message, context)
    }

    /// Logs at [`Level::Info`].
    pub fn info(&self, message: impl Into<String>, context: Payload) -> bool {
        self.log(Level::Info, message, context)
    }

    /// Logs at [`Level::Notice`].
    pub fn notice(&self, message: impl Into<String>, context: Payload) -> bool {
        self.log(Level::Notice, message, context)
    }

    /// Logs at [`Level::Warning`].
    pub fn warning(&self, message: impl Into<String>, context: Payload) -> bool {
        self.log(Level::Warning, message, context)
    }

    /// Logs at [`Level::Error`].
    pub fn error(&self, message: impl Into<String>, context: Payload) -> bool {
        self.log(Level::Error, message, context)
    }

    /// Logs at [`Level::Critical`].
    pub fn critical(&self, message: impl Into<String>, context: Payload) -> bool {
        self.log(Level::Critical, message, context)
    }

    /// Logs at [`Level::Alert`].
    pub fn alert(&self, message: impl Into<String>, context: Payload) -> bool {
        self.log(Level::Alert, message, context)
    }

    /// Logs at [`Level::Emergency`].
    pub fn emergency(&self, message: impl Into<String>, context: Payload) -> bool {
        self.log(Level::Emergency, message, context)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("handlers", &self.handlers.len())
            .field("processors", &self.processors.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::Propagation;
    use serde_json::json;
    use std::sync::Mutex;

    struct Tagged {
        tag: &'static str,
        minimum: Level,
        outcome: Propagation,
        journal: Arc<Mutex<Vec<String>>>,
    }

    impl Handler for Tagged {
        fn is_handling(&self, record: &LogRecord) -> bool {
            record.level() >= self.minimum
        }

        fn handle(&self, record: &LogRecord) -> Propagation {
            self.journal
                .lock()
                .expect("lock")
                .push(format!("{}:{}", self.tag, record.message()));
            self.outcome
        }
    }

    fn tagged(
        tag: &'static str,
        minimum: Level,
        outcome: Propagation,
        journal: &Arc<Mutex<Vec<String>>>,
    ) -> Arc<dyn Handler> {
        Arc::new(Tagged {
            tag,
            minimum,
            outcome,
            journal: Arc::clone(journal),
        })
    }

    #[test]
    fn last_pushed_handler_runs_first() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::new("app")
            .with_handler(tagged("a", Level::Debug, Propagation::Continue, &journal))
            .with_handler(tagged("b", Level::Debug, Propagation::Continue, &journal));

        assert!(logger.info("hello", Payload::new()));
        assert_eq!(*journal.lock().expect("lock"), vec!["b:hello", "a:hello"]);
    }

    #[test]
    fn stop_prevents_remaining_handlers() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::new("app")
            .with_handler(tagged("bottom", Level::Debug, Propagation::Continue, &journal))
            .with_handler(tagged("top", Level::Debug, Propagation::Stop, &journal));

        logger.error("boom", Payload::new());
        assert_eq!(*journal.lock().expect("lock"), vec!["top:boom"]);
    }

    #[test]
    fn handlers_not_handling_are_skipped() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::new("app")
            .with_handler(tagged("errors", Level::Error, Propagation::Stop, &journal));

        assert!(!logger.debug("quiet", Payload::new()));
        assert!(!logger.is_handling(Level::Warning));
        assert!(logger.is_handling(Level::Critical));
        assert!(journal.lock().expect("lock").is_empty());
    }

    #[test]
    fn processors_fill_extra_and_channel_is_stamped() {
        struct Capture(Mutex<Option<LogRecord>>);
        impl Handler for Capture {
            fn is_handling(&self, _record: &LogRecord) -> bool {
                true
            }
            fn handle(&self, record: &LogRecord) -> Propagation {
                *self.0.lock().expect("lock") = Some(record.clone());
                Propagation::Continue
            }
        }

        let capture = Arc::new(Capture(Mutex::new(None)));
        let logger = Logger::new("jobs")
            .with_handler(capture.clone())
            .with_processor(Arc::new(|extra: &mut Payload| {
                extra.insert("host".to_owned(), json!("web-1"));
            }));

        logger.notice("queued", crate::payload(json!({"id": 7})));
        let record = capture.0.lock().expect("lock").clone().expect("record");
        assert_eq!(record.channel(), "jobs");
        assert_eq!(record.extra()["host"], json!("web-1"));
        assert_eq!(record.context()["id"], json!(7));
    }

    #[test]
    fn debug_format_summarises_stack() {
        let logger = Logger::new("app");
        let rendered = format!("{logger:?}");
        assert!(rendered.contains("app"));
        assert!(rendered.contains("handlers: 0"));
    }
}
