//! crates/logging/src/config.rs
//! Channel configuration consumed by [`LogManager`](crate::LogManager).

use std::collections::BTreeMap;

/// Settings for one named channel.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChannelConfig {
    /// Driver that builds the channel's logger.
    pub driver: String,
    /// Handler the driver should install, when the driver supports several.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,
}

impl ChannelConfig {
    /// Creates a config for `driver` with no handler hint.
    #[must_use]
    pub fn new(driver: impl Into<String>) -> Self {
        Self {
            driver: driver.into(),
            handler: None,
        }
    }

    /// Sets the handler hint.
    #[must_use]
    pub fn with_handler(mut self, handler: impl Into<String>) -> Self {
        self.handler = Some(handler.into());
        self
    }
}

/// Logging configuration: a default channel plus named channel entries.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoggingConfig {
    /// Channel returned by [`LogManager::default_channel`](crate::LogManager::default_channel).
    #[serde(default = "default_channel_name")]
    pub default: String,
    /// Named channel entries.
    #[serde(default)]
    pub channels: BTreeMap<String, ChannelConfig>,
}

fn default_channel_name() -> String {
    "stack".to_owned()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_channel_name(),
            channels: BTreeMap::new(),
        }
    }
}

impl LoggingConfig {
    /// Looks up a channel entry.
    #[must_use]
    pub fn channel(&self, name: &str) -> Option<&ChannelConfig> {
        self.channels.get(name)
    }

    /// Inserts or replaces a channel entry, returning the previous one.
    pub fn set_channel(
        &mut self,
        name: impl Into<String>,
        config: ChannelConfig,
    ) -> Option<ChannelConfig> {
        self.channels.insert(name.into(), config)
    }
}
