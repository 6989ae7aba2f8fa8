//! crates/logging/src/levels.rs
//! Closed severity enumeration shared by records, handlers and the console sink.

use std::fmt;
use std::str::FromStr;

/// Severity of a log record.
///
/// The set is closed: every record carries exactly one of these eight values,
/// ordered from least to most severe. Each level has a fixed numeric weight
/// used by verbosity thresholds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Detailed debug information.
    Debug,
    /// Interesting events.
    Info,
    /// Normal but significant events.
    Notice,
    /// Exceptional occurrences that are not errors.
    Warning,
    /// Runtime errors that do not require immediate action.
    Error,
    /// Critical conditions.
    Critical,
    /// Action must be taken immediately.
    Alert,
    /// The system is unusable.
    Emergency,
}

impl Level {
    /// Every level, from least to most severe.
    pub const ALL: [Self; 8] = [
        Self::Debug,
        Self::Info,
        Self::Notice,
        Self::Warning,
        Self::Error,
        Self::Critical,
        Self::Alert,
        Self::Emergency,
    ];

    /// Numeric weight compared against verbosity thresholds.
    #[must_use]
    pub const fn weight(self) -> u16 {
        match self {
            Self::Debug => 100,
            Self::Info => 200,
            Self::Notice => 250,
            Self::Warning => 300,
            Self::Error => 400,
            Self::Critical => 500,
            Self::Alert => 550,
            Self::Emergency => 600,
        }
    }

    /// Human-readable name, e.g. `"Warning"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::Info => "Info",
            Self::Notice => "Notice",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Critical => "Critical",
            Self::Alert => "Alert",
            Self::Emergency => "Emergency",
        }
    }

    /// Upper-case name used in undecorated console prefixes.
    #[must_use]
    pub const fn as_upper_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Notice => "NOTICE",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
            Self::Alert => "ALERT",
            Self::Emergency => "EMERGENCY",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a [`Level`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level: {input}")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "info" => Self::Info,
            "notice" => Self::Notice,
            "warning" | "warn" => Self::Warning,
            "error" | "err" => Self::Error,
            "critical" | "crit" => Self::Critical,
            "alert" => Self::Alert,
            "emergency" | "emerg" => Self::Emergency,
            _ => {
                return Err(ParseLevelError {
                    input: s.to_owned(),
                });
            }
        };
        Ok(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered_by_weight() {
        for pair in Level::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].weight() < pair[1].weight());
        }
    }

    #[test]
    fn weights_match_threshold_boundaries() {
        assert_eq!(Level::Debug.weight(), 100);
        assert_eq!(Level::Info.weight(), 200);
        assert_eq!(Level::Notice.weight(), 250);
        assert_eq!(Level::Warning.weight(), 300);
        assert_eq!(Level::Error.weight(), 400);
        assert_eq!(Level::Critical.weight(), 500);
        assert_eq!(Level::Alert.weight(), 550);
        assert_eq!(Level::Emergency.weight(), 600);
    }

    #[test]
    fn upper_str_is_upper_case_name() {
        for level in Level::ALL {
            assert_eq!(level.as_upper_str(), level.name().to_uppercase());
        }
    }

    #[test]
    fn parse_accepts_names_and_aliases() {
        for level in Level::ALL {
            assert_eq!(level.name().parse::<Level>(), Ok(level));
            assert_eq!(level.as_upper_str().parse::<Level>(), Ok(level));
        }
        assert_eq!("warn".parse::<Level>(), Ok(Level::Warning));
        assert_eq!(" crit ".parse::<Level>(), Ok(Level::Critical));
        assert_eq!("emerg".parse::<Level>(), Ok(Level::Emergency));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "verbose".parse::<Level>().expect_err("not a level");
        assert_eq!(err.input(), "verbose");
        assert_eq!(err.to_string(), "unknown log level: verbose");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Level::Warning).expect("serialize");
        assert_eq!(json, "\"warning\"");
        let level: Level = serde_json::from_str("\"alert\"").expect("deserialize");
        assert_eq!(level, Level::Alert);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Level::Notice.to_string(), "Notice");
    }
}
