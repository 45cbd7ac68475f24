//! Infrastructure layer with external service adapters.

/// Credential and command-line configuration.
pub mod config;
/// Transport adapters.
pub mod transport;

pub use config::{CliArgs, Command, IniSection, LogLevel};
pub use transport::{CurlTransport, HttpTransport};
