//! zulip-client - a typed client for the Zulip messages API.
//!
//! Builds authenticated requests from typed parameters, sends them through a
//! pluggable transport (in-process HTTP or a curl executable), and reports
//! every outcome as a value callers can branch on.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases, services, and DTOs.
pub mod application;
/// Client facade wiring configuration and transports.
pub mod client;
/// Domain layer containing value objects, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing transports and config loading.
pub mod infrastructure;

pub use application::{Messages, NormalizedResponse, OperationOutcome};
pub use client::ZulipClient;
pub use domain::{
    ApiError, ClientConfig, ConfigError, ConfigField, EditMessage, Emoji, MessageId, Narrow,
    NarrowOperator, PropagateMode, Recipients, Transport,
};

/// Current version of the library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = "zulip-client";
