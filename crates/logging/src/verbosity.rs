//! crates/logging/src/verbosity.rs
//! Verbosity tiers and the tier-to-level admission table.
//!
//! A console destination advertises how much it wants to see through a
//! [`Verbosity`] tier. [`should_emit`] decides whether a record of a given
//! [`Level`] passes that tier. The table is static:
//!
//! | Tier          | Minimum level |
//! |---------------|---------------|
//! | `Silent`      | none          |
//! | `Quiet`       | `Error`       |
//! | `Normal`      | `Warning`     |
//! | `Verbose`     | `Notice`      |
//! | `VeryVerbose` | `Info`        |
//! | `Debug`       | `Debug`       |
//!
//! Hosts that still carry the legacy bit-flag encoding (8, 16, 32, 64, 128,
//! 256) go through [`should_emit_bits`]. Any value outside those six encodings
//! admits nothing.

use std::fmt;
use std::str::FromStr;

use crate::levels::Level;

/// Environment variable consulted by [`Verbosity::from_env`].
pub const SHELL_VERBOSITY_ENV: &str = "SHELL_VERBOSITY";

/// How much output a console destination currently wants.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    /// Nothing is written.
    Silent,
    /// Only errors and above.
    Quiet,
    /// Warnings and above.
    #[default]
    Normal,
    /// Notices and above (`-v`).
    Verbose,
    /// Informational messages and above (`-vv`).
    VeryVerbose,
    /// Everything (`-vvv`).
    Debug,
}

impl Verbosity {
    /// Every tier, from least to most verbose.
    pub const ALL: [Self; 6] = [
        Self::Silent,
        Self::Quiet,
        Self::Normal,
        Self::Verbose,
        Self::VeryVerbose,
        Self::Debug,
    ];

    /// Lowest level admitted by this tier, or `None` when the tier admits nothing.
    #[must_use]
    pub const fn minimum_level(self) -> Option<Level> {
        match self {
            Self::Silent => None,
            Self::Quiet => Some(Level::Error),
            Self::Normal => Some(Level::Warning),
            Self::Verbose => Some(Level::Notice),
            Self::VeryVerbose => Some(Level::Info),
            Self::Debug => Some(Level::Debug),
        }
    }

    /// Reports whether a record at `level` passes this tier.
    #[must_use]
    pub const fn admits(self, level: Level) -> bool {
        match self.minimum_level() {
            Some(minimum) => level.weight() >= minimum.weight(),
            None => false,
        }
    }

    /// Legacy bit-flag encoding of the tier.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Silent => 8,
            Self::Quiet => 16,
            Self::Normal => 32,
            Self::Verbose => 64,
            Self::VeryVerbose => 128,
            Self::Debug => 256,
        }
    }

    /// Decodes the legacy bit-flag encoding. Unrecognised values yield `None`.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(Self::Silent),
            16 => Some(Self::Quiet),
            32 => Some(Self::Normal),
            64 => Some(Self::Verbose),
            128 => Some(Self::VeryVerbose),
            256 => Some(Self::Debug),
            _ => None,
        }
    }

    /// Maps a repeated `-v` count onto a tier (0 is `Normal`, 3 or more is `Debug`).
    #[must_use]
    pub const fn from_verbose_count(count: u8) -> Self {
        match count {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::VeryVerbose,
            _ => Self::Debug,
        }
    }

    /// Parses a `SHELL_VERBOSITY` value (`-2` to `3`).
    #[must_use]
    pub fn from_shell_verbosity(value: &str) -> Option<Self> {
        match value.trim().parse::<i8>().ok()? {
            -2 => Some(Self::Silent),
            -1 => Some(Self::Quiet),
            0 => Some(Self::Normal),
            1 => Some(Self::Verbose),
            2 => Some(Self::VeryVerbose),
            3 => Some(Self::Debug),
            _ => None,
        }
    }

    /// Reads [`SHELL_VERBOSITY_ENV`] from the process environment.
    ///
    /// Returns `None` when the variable is unset or holds an unrecognised value.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        std::env::var(SHELL_VERBOSITY_ENV)
            .ok()
            .and_then(|value| Self::from_shell_verbosity(&value))
    }

    /// Snake-case tier name, e.g. `"very_verbose"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Silent => "silent",
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
            Self::VeryVerbose => "very_verbose",
            Self::Debug => "debug",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`Verbosity`] tier.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown verbosity tier: {input}")]
pub struct ParseVerbosityError {
    input: String,
}

impl FromStr for Verbosity {
    type Err = ParseVerbosityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str() == normalized)
            .ok_or_else(|| ParseVerbosityError {
                input: s.to_owned(),
            })
    }
}

/// Decides whether a record at `level` should reach a destination at `verbosity`.
#[must_use]
pub const fn should_emit(level: Level, verbosity: Verbosity) -> bool {
    verbosity.admits(level)
}

/// Same decision as [`should_emit`] for the legacy bit-flag encoding.
///
/// This is the only path where an out-of-range tier can appear; such values
/// admit nothing rather than failing.
#[must_use]
pub const fn should_emit_bits(level: Level, bits: u32) -> bool {
    match Verbosity::from_bits(bits) {
        Some(verbosity) => verbosity.admits(level),
        None => false,
    }
}
