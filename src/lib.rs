#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! src/lib.rs
//!
//! # Overview
//!
//! `command-line-logger` connects the `logging` facade to the console of the
//! command that is currently running. A [`Provider`] registers a `console`
//! channel whose loggers write through a shared
//! [`OutputBinding`](logging_sink::OutputBinding), and the [`Subscriber`] it
//! boots binds that slot when a command starts and clears it when the command
//! finishes.
//!
//! # Design
//!
//! - [`Provider::register`] adds the `console` channel entry and driver to a
//!   [`LogManager`](logging::LogManager).
//! - [`Provider::boot`] hands out a [`Subscriber`] sharing the same binding.
//! - [`Subscriber::on_event`] reacts to [`CommandEvent::Starting`] by binding
//!   the event's output and to [`CommandEvent::Finished`] by unbinding.
//!
//! # Invariants
//!
//! - Between a finished command and the next starting one, console loggers
//!   write nothing.
//! - Console loggers never stop other handlers from seeing a record.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use command_line_logger::{CONSOLE_CHANNEL, CommandFinished, CommandStarting, Provider};
//! use logging::{LogManager, Verbosity, payload};
//! use logging_sink::MemoryOutput;
//! use serde_json::json;
//!
//! let provider = Provider::default();
//! let mut manager = LogManager::default();
//! provider.register(&mut manager);
//! let subscriber = provider.boot();
//! let logger = manager.channel(CONSOLE_CHANNEL).unwrap();
//!
//! let output = Arc::new(MemoryOutput::memory(Verbosity::Normal, false));
//! subscriber.capture(&CommandStarting::new("cache:clear", output.clone()));
//! logger.warning("cache store is read-only", payload(json!(null)));
//! subscriber.release(&CommandFinished::new("cache:clear", 0));
//! logger.warning("nobody is listening", payload(json!(null)));
//!
//! assert_eq!(output.contents(), "[WARNING] cache store is read-only\n");
//! ```
//!
//! # See also
//!
//! - `logging` for levels, verbosity tiers, loggers and channels.
//! - `logging_sink` for the console handler and output capability.

mod provider;
mod subscriber;

pub use provider::{CONSOLE_CHANNEL, CONSOLE_DRIVER, CONSOLE_HANDLER, Provider};
pub use subscriber::{CommandEvent, CommandFinished, CommandStarting, EventKind, Subscriber};
