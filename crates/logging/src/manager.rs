//! crates/logging/src/manager.rs
//! Channel registry resolving configured channels through named drivers.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::config::{ChannelConfig, LoggingConfig};
use crate::logger::Logger;

/// Builds a [`Logger`] for a channel from its name and configuration.
pub type DriverFactory = Arc<dyn Fn(&str, &ChannelConfig) -> Logger + Send + Sync>;

/// Errors raised while resolving a channel.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoggingError {
    /// No channel entry exists under this name.
    #[error("log channel [{0}] is not defined")]
    UnknownChannel(String),

    /// The channel names a driver nobody registered.
    #[error("driver [{driver}] for log channel [{channel}] is not supported")]
    UnsupportedDriver {
        /// Channel being resolved.
        channel: String,
        /// Driver named by the channel.
        driver: String,
    },
}

/// Owns the logging configuration and the driver factories that interpret it.
#[derive(Clone, Default)]
pub struct LogManager {
    config: LoggingConfig,
    drivers: HashMap<String, DriverFactory>,
}

impl LogManager {
    /// Creates a manager over an existing configuration.
    #[must_use]
    pub fn new(config: LoggingConfig) -> Self {
        Self {
            config,
            drivers: HashMap::new(),
        }
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &LoggingConfig {
        &self.config
    }

    /// Inserts or replaces a channel entry.
    pub fn set_channel(&mut self, name: impl Into<String>, config: ChannelConfig) {
        let name = name.into();
        tracing::debug!(channel = %name, driver = %config.driver, "log channel configured");
        self.config.set_channel(name, config);
    }

    /// Registers `factory` under `driver`, replacing any previous registration.
    pub fn extend<F>(&mut self, driver: impl Into<String>, factory: F)
    where
        F: Fn(&str, &ChannelConfig) -> Logger + Send + Sync + 'static,
    {
        let driver = driver.into();
        tracing::debug!(driver = %driver, "log driver registered");
        self.drivers.insert(driver, Arc::new(factory));
    }

    /// Reports whether a driver is registered.
    #[must_use]
    pub fn has_driver(&self, driver: &str) -> bool {
        self.drivers.contains_key(driver)
    }

    /// Builds the logger for channel `name`.
    pub fn channel(&self, name: &str) -> Result<Logger, LoggingError> {
        let config = self
            .config
            .channel(name)
            .ok_or_else(|| LoggingError::UnknownChannel(name.to_owned()))?;
        let factory =
            self.drivers
                .get(&config.driver)
                .ok_or_else(|| LoggingError::UnsupportedDriver {
                    channel: name.to_owned(),
                    driver: config.driver.clone(),
                })?;
        Ok(factory(name, config))
    }

    /// Builds the logger for the configured default channel.
    pub fn default_channel(&self) -> Result<Logger, LoggingError> {
        self.channel(&self.config.default)
    }
}

impl fmt::Debug for LogManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut drivers: Vec<&str> = self.drivers.keys().map(String::as_str).collect();
        drivers.sort_unstable();
        f.debug_struct("LogManager")
            .field("config", &self.config)
            .field("drivers", &drivers)
            .finish()
    }
}
