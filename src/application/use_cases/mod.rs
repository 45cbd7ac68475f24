//! Use case implementations.

mod messages;

pub use messages::Messages;
