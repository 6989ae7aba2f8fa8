//! crates/logging-sink/src/output.rs
//! Console output capability consumed by the console handler.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use is_terminal::IsTerminal;
use logging::Verbosity;

/// Destination a command writes its console output to.
///
/// The console handler only needs three things from it: a way to write a
/// line, the verbosity the user asked for and whether styled text is
/// supported. Implementations are shared behind `Arc`, hence `&self`.
pub trait ConsoleOutput: Send + Sync {
    /// Writes `line` followed by a newline.
    fn write_line(&self, line: &str) -> io::Result<()>;

    /// Verbosity tier currently requested for this output.
    fn verbosity(&self) -> Verbosity;

    /// Reports whether ANSI styling may be written.
    fn is_decorated(&self) -> bool;
}

/// [`ConsoleOutput`] over any [`Write`] implementor.
///
/// Writes are serialised by an internal mutex so the output can be shared
/// between the command and the logging handler.
pub struct StreamOutput<W> {
    writer: Mutex<W>,
    verbosity: Verbosity,
    decorated: bool,
}

/// In-memory output, handy for capturing what a command printed.
pub type MemoryOutput = StreamOutput<Vec<u8>>;

impl<W> StreamOutput<W> {
    /// Wraps `writer` with a fixed verbosity and decoration flag.
    #[must_use]
    pub const fn new(writer: W, verbosity: Verbosity, decorated: bool) -> Self {
        Self {
            writer: Mutex::new(writer),
            verbosity,
            decorated,
        }
    }

    /// Consumes the output and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with exclusive access to the writer.
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut writer)
    }
}

impl StreamOutput<io::Stdout> {
    /// Standard output, decorated when it is a terminal and `NO_COLOR` is unset.
    #[must_use]
    pub fn stdout(verbosity: Verbosity) -> Self {
        let stdout = io::stdout();
        let decorated = stdout.is_terminal() && colors_allowed();
        Self::new(stdout, verbosity, decorated)
    }
}

impl StreamOutput<io::Stderr> {
    /// Standard error, decorated when it is a terminal and `NO_COLOR` is unset.
    #[must_use]
    pub fn stderr(verbosity: Verbosity) -> Self {
        let stderr = io::stderr();
        let decorated = stderr.is_terminal() && colors_allowed();
        Self::new(stderr, verbosity, decorated)
    }
}

impl MemoryOutput {
    /// Empty in-memory output.
    #[must_use]
    pub const fn memory(verbosity: Verbosity, decorated: bool) -> Self {
        Self::new(Vec::new(), verbosity, decorated)
    }

    /// Everything written so far, decoded lossily as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        self.with_writer(|buffer| String::from_utf8_lossy(buffer).into_owned())
    }
}

fn colors_allowed() -> bool {
    std::env::var_os("NO_COLOR").is_none_or(|value| value.is_empty())
}

impl<W> ConsoleOutput for StreamOutput<W>
where
    W: Write + Send,
{
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.with_writer(|writer| {
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")
        })
    }

    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn is_decorated(&self) -> bool {
        self.decorated
    }
}

impl<W> fmt::Debug for StreamOutput<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamOutput")
            .field("verbosity", &self.verbosity)
            .field("decorated", &self.decorated)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_line_appends_newline() {
        let output = MemoryOutput::memory(Verbosity::Normal, false);
        output.write_line("first").expect("write");
        output.write_line("second").expect("write");
        assert_eq!(output.contents(), "first\nsecond\n");
    }

    #[test]
    fn reports_configured_capabilities() {
        let output = MemoryOutput::memory(Verbosity::VeryVerbose, true);
        assert_eq!(output.verbosity(), Verbosity::VeryVerbose);
        assert!(output.is_decorated());
    }

    #[test]
    fn into_inner_returns_buffer() {
        let output = StreamOutput::new(Vec::new(), Verbosity::Quiet, false);
        output.write_line("x").expect("write");
        assert_eq!(output.into_inner(), b"x\n".to_vec());
    }

    #[test]
    fn write_errors_surface_to_caller() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let output = StreamOutput::new(Broken, Verbosity::Debug, false);
        let err = output.write_line("lost").expect_err("broken writer");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn debug_omits_writer() {
        let output = MemoryOutput::memory(Verbosity::Normal, false);
        let rendered = format!("{output:?}");
        assert!(rendered.contains("Normal"));
        assert!(!rendered.contains("writer"));
    }
}
