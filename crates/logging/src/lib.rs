#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` holds the log-record plumbing shared by the console sink and its
//! host integration: the closed [`Level`] set, the [`Verbosity`] tiers with
//! their admission table, immutable [`LogRecord`] values, the [`Handler`]
//! contract, the [`Logger`] handler stack and the [`LogManager`] channel
//! registry.
//!
//! # Design
//!
//! Handlers are trait objects shared behind `Arc`, so every handler operation
//! takes `&self`. A [`Logger`] walks its stack from the most recently pushed
//! handler downwards and stops only when a handler answers
//! [`Propagation::Stop`]. Channels are described by [`LoggingConfig`] and
//! built lazily by driver factories registered through
//! [`LogManager::extend`].
//!
//! # Invariants
//!
//! - [`Level`] is closed; there is no "unknown level" at runtime.
//! - [`should_emit`] is total over [`Level`] × [`Verbosity`].
//!   [`should_emit_bits`] admits nothing for unrecognised legacy encodings.
//! - Records are never mutated once dispatched.
//!
//! # Errors
//!
//! Only string parsing ([`ParseLevelError`], [`ParseVerbosityError`]) and
//! channel resolution ([`LoggingError`]) can fail. Dispatch itself is
//! infallible.
//!
//! # Examples
//!
//! ```
//! use logging::{Level, Verbosity, should_emit};
//!
//! assert!(should_emit(Level::Warning, Verbosity::Normal));
//! assert!(!should_emit(Level::Notice, Verbosity::Normal));
//! assert!(!should_emit(Level::Emergency, Verbosity::Silent));
//! ```
//!
//! # See also
//!
//! - `logging-sink` for the console handler built on these types.
//! - The `tracing-bridge` feature for routing `tracing` events into a [`Logger`].

mod config;
mod handler;
mod levels;
mod logger;
mod manager;
mod record;
mod verbosity;

#[cfg(feature = "tracing-bridge")]
mod tracing_bridge;

pub use config::{ChannelConfig, LoggingConfig};
pub use handler::{Handler, Propagation};
pub use levels::{Level, ParseLevelError};
pub use logger::{Logger, Processor};
pub use manager::{DriverFactory, LogManager, LoggingError};
pub use record::{LogRecord, Payload, payload};
pub use verbosity::{
    ParseVerbosityError, SHELL_VERBOSITY_ENV, Verbosity, should_emit, should_emit_bits,
};

#[cfg(feature = "tracing-bridge")]
pub use tracing_bridge::{RecordLayer, init_tracing, init_tracing_with_filter};
