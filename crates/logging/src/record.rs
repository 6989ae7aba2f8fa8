//! crates/logging/src/record.rs
//! Immutable log record carried from loggers to handlers.

use serde_json::{Map, Value};

use crate::levels::Level;

/// Structured payload attached to a record.
pub type Payload = Map<String, Value>;

/// A single log entry.
///
/// Records are assembled with the `with_*` builders and are read-only once
/// handed to a [`Logger`](crate::Logger). Empty `context` and `extra` maps
/// mean "no payload".
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LogRecord {
    level: Level,
    #[serde(default)]
    channel: String,
    message: String,
    #[serde(default)]
    context: Payload,
    #[serde(default)]
    extra: Payload,
}

impl LogRecord {
    /// Creates a record with empty payloads and no channel.
    #[must_use]
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            channel: String::new(),
            message: message.into(),
            context: Payload::new(),
            extra: Payload::new(),
        }
    }

    /// Sets the channel name.
    #[must_use]
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    /// Sets the caller-supplied context payload.
    #[must_use]
    pub fn with_context(mut self, context: Payload) -> Self {
        self.context = context;
        self
    }

    /// Sets the processor-supplied extra payload.
    #[must_use]
    pub fn with_extra(mut self, extra: Payload) -> Self {
        self.extra = extra;
        self
    }

    /// Severity of the record.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Channel the record was logged on; empty when none was set.
    #[must_use]
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// The log message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Caller-supplied structured context.
    #[must_use]
    pub const fn context(&self) -> &Payload {
        &self.context
    }

    /// Structured data added by processors.
    #[must_use]
    pub const fn extra(&self) -> &Payload {
        &self.extra
    }
}

/// Converts a `json!({...})` object into a [`Payload`].
///
/// Non-object values are stored under a single `"value"` key.
#[must_use]
pub fn payload(value: Value) -> Payload {
    match value {
        Value::Object(map) => map,
        Value::Null => Payload::new(),
        other => {
            let mut map = Payload::new();
            map.insert("value".to_owned(), other);
            map
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_record_has_empty_payloads() {
        let record = LogRecord::new(Level::Info, "ready");
        assert_eq!(record.level(), Level::Info);
        assert_eq!(record.message(), "ready");
        assert!(record.channel().is_empty());
        assert!(record.context().is_empty());
        assert!(record.extra().is_empty());
    }

    #[test]
    fn builders_populate_fields() {
        let record = LogRecord::new(Level::Error, "failed")
            .with_channel("console")
            .with_context(payload(json!({"user": "alice"})))
            .with_extra(payload(json!({"pid": 42})));

        assert_eq!(record.channel(), "console");
        assert_eq!(record.context()["user"], json!("alice"));
        assert_eq!(record.extra()["pid"], json!(42));
    }

    #[test]
    fn payload_wraps_scalars_and_drops_null() {
        assert!(payload(Value::Null).is_empty());
        let wrapped = payload(json!(7));
        assert_eq!(wrapped["value"], json!(7));
    }

    #[test]
    fn record_deserializes_without_payloads() {
        let record: LogRecord =
            serde_json::from_value(json!({"level": "notice", "message": "hi"}))
                .expect("deserialize");
        assert_eq!(record.level(), Level::Notice);
        assert!(record.context().is_empty());
    }
}
