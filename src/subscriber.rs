//! Command lifecycle hooks that capture and release console output.

use std::fmt;
use std::sync::Arc;

use logging_sink::{ConsoleOutput, OutputBinding};

/// Raised by the host when a command is about to run.
#[derive(Clone)]
pub struct CommandStarting {
    /// Command name, when the host knows it.
    pub command: Option<String>,
    /// Output the command writes to.
    pub output: Arc<dyn ConsoleOutput>,
}

impl CommandStarting {
    /// Creates the event for `command` writing to `output`.
    #[must_use]
    pub fn new(command: impl Into<String>, output: Arc<dyn ConsoleOutput>) -> Self {
        Self {
            command: Some(command.into()),
            output,
        }
    }
}

impl fmt::Debug for CommandStarting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandStarting")
            .field("command", &self.command)
            .field("verbosity", &self.output.verbosity())
            .field("decorated", &self.output.is_decorated())
            .finish()
    }
}

/// Raised by the host when a command has finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandFinished {
    /// Command name, when the host knows it.
    pub command: Option<String>,
    /// Exit status reported by the command.
    pub exit_code: i32,
}

impl CommandFinished {
    /// Creates the event for `command` finishing with `exit_code`.
    #[must_use]
    pub fn new(command: impl Into<String>, exit_code: i32) -> Self {
        Self {
            command: Some(command.into()),
            exit_code,
        }
    }
}

/// Lifecycle events the subscriber reacts to.
#[derive(Clone, Debug)]
pub enum CommandEvent {
    /// A command is starting.
    Starting(CommandStarting),
    /// A command has finished.
    Finished(CommandFinished),
}

/// Discriminant of a [`CommandEvent`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// [`CommandEvent::Starting`].
    CommandStarting,
    /// [`CommandEvent::Finished`].
    CommandFinished,
}

impl CommandEvent {
    /// The event's kind.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Starting(_) => EventKind::CommandStarting,
            Self::Finished(_) => EventKind::CommandFinished,
        }
    }
}

/// Binds a command's output for the duration of the command.
#[derive(Clone, Debug)]
pub struct Subscriber {
    binding: OutputBinding,
}

impl Subscriber {
    /// Creates a subscriber managing `binding`.
    #[must_use]
    pub const fn new(binding: OutputBinding) -> Self {
        Self { binding }
    }

    /// The binding this subscriber manages.
    #[must_use]
    pub const fn binding(&self) -> &OutputBinding {
        &self.binding
    }

    /// Makes the starting command's output the current console output.
    pub fn capture(&self, event: &CommandStarting) {
        self.binding.bind(Arc::clone(&event.output));
        tracing::debug!(command = ?event.command, "console output captured");
    }

    /// Clears the current console output once the command is done.
    pub fn release(&self, event: &CommandFinished) {
        self.binding.unbind();
        tracing::debug!(
            command = ?event.command,
            exit_code = event.exit_code,
            "console output released"
        );
    }

    /// Routes `event` to [`capture`](Self::capture) or [`release`](Self::release).
    pub fn on_event(&self, event: &CommandEvent) {
        match event {
            CommandEvent::Starting(starting) => self.capture(starting),
            CommandEvent::Finished(finished) => self.release(finished),
        }
    }

    /// Which hook serves which event, for hosts that register listeners by name.
    #[must_use]
    pub const fn subscriptions() -> [(EventKind, &'static str); 2] {
        [
            (EventKind::CommandStarting, "capture"),
            (EventKind::CommandFinished, "release"),
        ]
    }
}
