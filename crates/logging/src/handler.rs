//! crates/logging/src/handler.rs
//! Handler contract implemented by every log destination.

use crate::record::LogRecord;

/// Whether a record should continue to the remaining handlers of a [`Logger`](crate::Logger).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[must_use]
pub enum Propagation {
    /// Later handlers still receive the record.
    #[default]
    Continue,
    /// The record stops here.
    Stop,
}

impl Propagation {
    /// Reports whether dispatch should stop.
    #[must_use]
    pub const fn is_stop(self) -> bool {
        matches!(self, Self::Stop)
    }
}

/// A log destination.
///
/// Handlers are shared across threads by the [`Logger`](crate::Logger) stack,
/// so every operation takes `&self`. Implementations are expected to be
/// best-effort: they report nothing back besides [`Propagation`].
pub trait Handler: Send + Sync {
    /// Reports whether [`handle`](Self::handle) would act on `record`.
    ///
    /// Must not perform I/O or change state.
    fn is_handling(&self, record: &LogRecord) -> bool;

    /// Processes `record` and decides whether it keeps bubbling.
    fn handle(&self, record: &LogRecord) -> Propagation;

    /// Processes `records` in order, one [`handle`](Self::handle) call each.
    fn handle_batch(&self, records: &[LogRecord]) {
        for record in records {
            let _ = self.handle(record);
        }
    }

    /// Releases any resources held by the handler.
    fn close(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::Level;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<String>>,
    }

    impl Handler for Recorder {
        fn is_handling(&self, _record: &LogRecord) -> bool {
            true
        }

        fn handle(&self, record: &LogRecord) -> Propagation {
            self.seen
                .lock()
                .expect("lock")
                .push(record.message().to_owned());
            Propagation::Continue
        }
    }

    #[test]
    fn default_batch_preserves_order() {
        let recorder = Recorder::default();
        let records = [
            LogRecord::new(Level::Info, "one"),
            LogRecord::new(Level::Error, "two"),
            LogRecord::new(Level::Debug, "three"),
        ];
        recorder.handle_batch(&records);
        assert_eq!(
            *recorder.seen.lock().expect("lock"),
            vec!["one", "two", "three"]
        );
    }

    #[test]
    fn propagation_defaults_to_continue() {
        assert_eq!(Propagation::default(), Propagation::Continue);
        assert!(!Propagation::Continue.is_stop());
        assert!(Propagation::Stop.is_stop());
    }
}
