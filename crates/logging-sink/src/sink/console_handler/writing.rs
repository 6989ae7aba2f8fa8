use logging::{LogRecord, Payload};

use super::ConsoleHandler;
use crate::output::ConsoleOutput;
use crate::prefix::format_prefix;

impl ConsoleHandler {
    /// Writes the prefixed message line, then the `extra` and `context` dumps.
    ///
    /// Does nothing when no output is bound. The first output error ends the
    /// write; it is traced and otherwise dropped.
    pub(crate) fn write(&self, record: &LogRecord) {
        let Some(output) = self.binding.current() else {
            return;
        };
        let output = output.as_ref();

        let line = format!(
            "{}{}",
            format_prefix(record.level(), output.is_decorated()),
            record.message()
        );
        if let Err(error) = output.write_line(&line) {
            tracing::trace!(%error, "console log line dropped");
            return;
        }

        for payload in [record.extra(), record.context()] {
            if let Err(error) = self.dump_payload(payload, output) {
                tracing::trace!(%error, "console payload dump dropped");
                return;
            }
        }
    }

    fn dump_payload(&self, payload: &Payload, output: &dyn ConsoleOutput) -> std::io::Result<()> {
        if payload.is_empty() {
            return Ok(());
        }
        let snapshot = self.cloner.clone_var(payload);
        self.dumper.dump(&snapshot, output)
    }
}
