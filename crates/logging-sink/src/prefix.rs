//! crates/logging-sink/src/prefix.rs
//! Line prefixes identifying the level of each console log line.

use anstyle::{AnsiColor, Color, Style};
use logging::Level;

/// Column width shared by every decorated label.
pub const LABEL_WIDTH: usize = 9;

/// Fixed-width label shown inside the decorated tag.
#[must_use]
pub const fn decorated_label(level: Level) -> &'static str {
    match level {
        Level::Debug => "  DEBUG  ",
        Level::Info => "   INFO  ",
        Level::Notice => " NOTICE  ",
        Level::Warning => " WARNING ",
        Level::Error => "  ERROR  ",
        Level::Critical => "CRITICAL ",
        Level::Alert => "  ALERT  ",
        Level::Emergency => "EMERGENCY",
    }
}

/// White-on-colour style of the decorated tag.
#[must_use]
pub const fn level_style(level: Level) -> Style {
    let tag = Style::new().fg_color(Some(Color::Ansi(AnsiColor::White)));
    match level {
        Level::Debug => tag.bg_color(Some(Color::Ansi(AnsiColor::BrightBlack))),
        Level::Info => tag.bg_color(Some(Color::Ansi(AnsiColor::Green))),
        Level::Notice => tag.bg_color(Some(Color::Ansi(AnsiColor::Cyan))),
        Level::Warning => tag.bg_color(Some(Color::Ansi(AnsiColor::Yellow))),
        Level::Error => tag.bg_color(Some(Color::Ansi(AnsiColor::Red))),
        Level::Critical => tag.bg_color(Some(Color::Ansi(AnsiColor::Red))).bold(),
        Level::Alert => tag.bg_color(Some(Color::Ansi(AnsiColor::Blue))),
        Level::Emergency => tag.bg_color(Some(Color::Ansi(AnsiColor::Magenta))),
    }
}

/// Prefix written before the message of a record at `level`.
///
/// Plain outputs get `[LEVEL] `; decorated outputs get the styled,
/// fixed-width tag followed by a single space.
#[must_use]
pub fn format_prefix(level: Level, decorated: bool) -> String {
    if decorated {
        let style = level_style(level);
        format!(
            "{}{}{} ",
            style.render(),
            decorated_label(level),
            style.render_reset()
        )
    } else {
        format!("[{}] ", level.as_upper_str())
    }
}
