#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` routes [`logging::LogRecord`] values to the console output
//! of whichever command is currently running. The [`ConsoleHandler`] filters
//! records by the output's [`Verbosity`](logging::Verbosity), writes one
//! prefixed line per record and pretty-prints structured payloads underneath.
//!
//! # Design
//!
//! - [`ConsoleOutput`] is the capability the handler writes to. Hosts supply
//!   it; [`StreamOutput`] covers stdout, stderr and in-memory buffers.
//! - [`OutputBinding`] is the single "current output" slot. The host binds an
//!   output when a command starts and unbinds it when the command ends; the
//!   handler only reads it.
//! - [`format_prefix`] maps a level to `[LEVEL] ` or to a fixed-width styled
//!   tag when the output is decorated.
//! - [`Cloner`] and [`Dumper`] snapshot and render `extra` and `context`
//!   payloads. [`VarCloner`] and [`CliDumper`] are the defaults.
//!
//! # Invariants
//!
//! - No bound output means no output and `is_handling == false`.
//! - [`ConsoleHandler::handle`](logging::Handler::handle) always returns
//!   [`Propagation::Continue`](logging::Propagation::Continue).
//! - Payload dumps follow the message line, `extra` before `context`, and are
//!   skipped for empty payloads.
//!
//! # Errors
//!
//! Output failures are swallowed by the handler. [`ConsoleOutput::write_line`]
//! and [`Dumper::dump`] surface [`std::io::Error`] to direct callers.
//!
//! # Examples
//!
//! Capture a command's console output in memory:
//!
//! ```
//! use std::sync::Arc;
//! use logging::{Handler, Level, LogRecord, Verbosity, payload};
//! use logging_sink::{ConsoleHandler, MemoryOutput, OutputBinding};
//! use serde_json::json;
//!
//! let binding = OutputBinding::new();
//! let handler = ConsoleHandler::new(binding.clone());
//!
//! let output = Arc::new(MemoryOutput::memory(Verbosity::Verbose, false));
//! {
//!     let _command = binding.scoped(output.clone());
//!     let record = LogRecord::new(Level::Notice, "cache warmed")
//!         .with_context(payload(json!({"entries": 12})));
//!     let _ = handler.handle(&record);
//! }
//!
//! // Nothing is bound any more, so this record goes nowhere.
//! let _ = handler.handle(&LogRecord::new(Level::Error, "after the command"));
//!
//! assert_eq!(
//!     output.contents(),
//!     "[NOTICE] cache warmed\narray:1 [\n  \"entries\" => 12\n]\n"
//! );
//! ```
//!
//! # See also
//!
//! - `logging` for levels, verbosity tiers and the handler contract.

mod binding;
mod dumper;
mod output;
mod prefix;
mod sink;

pub use binding::OutputBinding;
pub use dumper::{CliDumper, Cloner, Dumper, VarCloner};
pub use output::{ConsoleOutput, MemoryOutput, StreamOutput};
pub use prefix::{LABEL_WIDTH, decorated_label, format_prefix, level_style};
pub use sink::{BindingGuard, ConsoleHandler};
