use std::fmt;
use std::sync::Arc;

use logging::{Handler, LogRecord, Propagation, should_emit};

use crate::binding::OutputBinding;
use crate::dumper::{CliDumper, Cloner, Dumper, VarCloner};

/// Handler that writes records to the console output bound for the current command.
///
/// The handler reads the [`OutputBinding`] on every call: while an output is
/// bound, records at or above that output's verbosity threshold are written
/// as one prefixed line, followed by dumps of the record's `extra` and then
/// `context` payloads when they are non-empty. While nothing is bound the
/// handler behaves as if the verbosity were `Silent`.
///
/// The handler never stops propagation, so it composes with any other
/// destination on the same [`Logger`](logging::Logger). Output errors are
/// swallowed: logging must never fail the command it reports on.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use logging::{Handler, Level, LogRecord, Propagation, Verbosity};
/// use logging_sink::{ConsoleHandler, MemoryOutput, OutputBinding};
///
/// let output = Arc::new(MemoryOutput::memory(Verbosity::Normal, false));
/// let handler = ConsoleHandler::new(OutputBinding::bound(output.clone()));
///
/// let outcome = handler.handle(&LogRecord::new(Level::Warning, "disk almost full"));
/// assert_eq!(outcome, Propagation::Continue);
/// assert_eq!(output.contents(), "[WARNING] disk almost full\n");
/// ```
#[derive(Clone)]
pub struct ConsoleHandler {
    binding: OutputBinding,
    cloner: Arc<dyn Cloner>,
    dumper: Arc<dyn Dumper>,
}

mod writing;

impl ConsoleHandler {
    /// Creates a handler over `binding` using [`VarCloner`] and [`CliDumper`].
    #[must_use]
    pub fn new(binding: OutputBinding) -> Self {
        Self::with_dumper(binding, VarCloner, CliDumper::default())
    }

    /// Creates a handler with explicit payload collaborators.
    #[must_use]
    pub fn with_dumper<C, D>(binding: OutputBinding, cloner: C, dumper: D) -> Self
    where
        C: Cloner + 'static,
        D: Dumper + 'static,
    {
        Self {
            binding,
            cloner: Arc::new(cloner),
            dumper: Arc::new(dumper),
        }
    }

    /// The binding this handler reads its output from.
    #[must_use]
    pub const fn binding(&self) -> &OutputBinding {
        &self.binding
    }
}

impl Handler for ConsoleHandler {
    fn is_handling(&self, record: &LogRecord) -> bool {
        self.binding
            .current()
            .is_some_and(|output| should_emit(record.level(), output.verbosity()))
    }

    fn handle(&self, record: &LogRecord) -> Propagation {
        if self.is_handling(record) {
            self.write(record);
        }

        Propagation::Continue
    }

    fn handle_batch(&self, records: &[LogRecord]) {
        for record in records {
            let _ = self.handle(record);
        }
    }

    // Nothing to release; outputs belong to the command that bound them.
    fn close(&self) {}
}

impl fmt::Debug for ConsoleHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleHandler")
            .field("binding", &self.binding)
            .finish_non_exhaustive()
    }
}
