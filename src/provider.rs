//! Registers the console channel and driver into a [`LogManager`].

use std::sync::Arc;

use logging::{ChannelConfig, LogManager, Logger};
use logging_sink::{ConsoleHandler, OutputBinding};

use crate::subscriber::Subscriber;

/// Channel name registered by [`Provider::register`].
pub const CONSOLE_CHANNEL: &str = "console";

/// Driver name registered by [`Provider::register`].
pub const CONSOLE_DRIVER: &str = "console";

/// Handler hint stored in the console channel's configuration.
pub const CONSOLE_HANDLER: &str = "console";

/// Wires the console handler into a host's logging configuration.
///
/// The provider owns the [`OutputBinding`] shared by every console logger it
/// creates and by the [`Subscriber`] returned from [`boot`](Self::boot), so
/// capturing an output through the subscriber is immediately visible to
/// those loggers.
#[derive(Clone, Debug, Default)]
pub struct Provider {
    binding: OutputBinding,
}

impl Provider {
    /// Creates a provider around an existing binding.
    #[must_use]
    pub const fn new(binding: OutputBinding) -> Self {
        Self { binding }
    }

    /// The binding shared with registered loggers.
    #[must_use]
    pub const fn binding(&self) -> &OutputBinding {
        &self.binding
    }

    /// Adds the `console` channel entry and the `console` driver to `manager`.
    ///
    /// An existing `console` channel entry or driver is replaced.
    pub fn register(&self, manager: &mut LogManager) {
        manager.set_channel(
            CONSOLE_CHANNEL,
            ChannelConfig::new(CONSOLE_DRIVER).with_handler(CONSOLE_HANDLER),
        );

        let binding = self.binding.clone();
        manager.extend(CONSOLE_DRIVER, move |name, _config| {
            Logger::new(name).with_handler(Arc::new(ConsoleHandler::new(binding.clone())))
        });

        tracing::debug!(channel = CONSOLE_CHANNEL, "console logging registered");
    }

    /// Returns the subscriber that captures and releases command output.
    #[must_use]
    pub fn boot(&self) -> Subscriber {
        Subscriber::new(self.binding.clone())
    }
}
