//! crates/logging-sink/src/dumper.rs
//! Structured payload cloning and multi-line rendering.
//!
//! The console handler never formats payloads itself. It asks a [`Cloner`]
//! for an owned snapshot of the payload and hands the snapshot to a
//! [`Dumper`], which writes it to the same [`ConsoleOutput`] as the log line.
//! [`CliDumper`] renders a compact tree:
//!
//! ```text
//! array:2 [
//!   "user" => "alice"
//!   "tags" => array:2 [
//!     0 => "admin"
//!     1 => "ops"
//!   ]
//! ]
//! ```

use std::io;

use logging::Payload;
use serde_json::Value;

use crate::output::ConsoleOutput;

/// Produces an owned snapshot of a payload for dumping.
pub trait Cloner: Send + Sync {
    /// Deep-clones `payload` into a standalone value.
    fn clone_var(&self, payload: &Payload) -> Value;
}

/// Renders a structured value to a console output.
pub trait Dumper: Send + Sync {
    /// Writes `value` to `output`, one or more lines.
    fn dump(&self, value: &Value, output: &dyn ConsoleOutput) -> io::Result<()>;
}

/// Default [`Cloner`]: a deep copy wrapped as a JSON object.
#[derive(Clone, Copy, Debug, Default)]
pub struct VarCloner;

impl Cloner for VarCloner {
    fn clone_var(&self, payload: &Payload) -> Value {
        Value::Object(payload.clone())
    }
}

/// Default [`Dumper`]: an indented `key => value` tree.
#[derive(Clone, Debug)]
pub struct CliDumper {
    indent: usize,
    max_depth: Option<usize>,
}

impl Default for CliDumper {
    fn default() -> Self {
        Self {
            indent: 2,
            max_depth: None,
        }
    }
}

impl CliDumper {
    /// Dumper with two-space indentation and no depth limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of spaces per nesting level.
    #[must_use]
    pub const fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Collapses containers nested deeper than `depth` into `array:N [ …]`.
    #[must_use]
    pub const fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Renders `value` into lines without writing them anywhere.
    #[must_use]
    pub fn render_lines(&self, value: &Value) -> Vec<String> {
        let mut lines = Vec::new();
        self.render_into(value, 0, "", &mut lines);
        lines
    }

    /// Renders `value` as a single newline-joined string.
    #[must_use]
    pub fn render(&self, value: &Value) -> String {
        self.render_lines(value).join("\n")
    }

    fn render_into(&self, value: &Value, depth: usize, key: &str, lines: &mut Vec<String>) {
        let pad = " ".repeat(depth * self.indent);
        let len = match value {
            Value::Array(items) => items.len(),
            Value::Object(map) => map.len(),
            scalar => {
                lines.push(format!("{pad}{key}{scalar}"));
                return;
            }
        };

        if len == 0 {
            lines.push(format!("{pad}{key}[]"));
            return;
        }
        if self.max_depth.is_some_and(|max| depth >= max) {
            lines.push(format!("{pad}{key}array:{len} [ …]"));
            return;
        }

        lines.push(format!("{pad}{key}array:{len} ["));
        match value {
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    self.render_into(item, depth + 1, &format!("{index} => "), lines);
                }
            }
            Value::Object(map) => {
                for (name, item) in map {
                    let quoted = Value::from(name.as_str());
                    self.render_into(item, depth + 1, &format!("{quoted} => "), lines);
                }
            }
            _ => {}
        }
        lines.push(format!("{pad}]"));
    }
}

impl Dumper for CliDumper {
    fn dump(&self, value: &Value, output: &dyn ConsoleOutput) -> io::Result<()> {
        for line in self.render_lines(value) {
            output.write_line(&line)?;
        }
        Ok(())
    }
}
