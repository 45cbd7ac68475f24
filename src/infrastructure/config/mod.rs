//! Credential and command-line configuration.

pub mod args;
pub mod ini;
pub mod log_level;
pub mod zuliprc;

pub use args::{CliArgs, Command};
pub use ini::IniSection;
pub use log_level::LogLevel;
