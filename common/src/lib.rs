//! # Herald Common
//!
//! Shared building blocks for every `herald` crate.
//!
//! * **[`models`]**: The entities and value objects of the notification domain.
//! * **[`error`]**: Error types raised while turning text into domain values.
//! * **[`config`]**: Run configuration threaded through the command line adapter.
//! * **[`log`]**: Logging helpers on top of [`tracing`].

pub mod config;
pub mod error;
pub mod log;
pub mod models;

pub use tracing;
