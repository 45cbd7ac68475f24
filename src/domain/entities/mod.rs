//! Domain entity definitions.

mod basic_auth;
mod client_config;
mod message;
mod narrow;

pub use basic_auth::BasicAuth;
pub use client_config::ClientConfig;
pub use message::{EditMessage, Emoji, MessageId, PropagateMode, Recipients};
pub use narrow::{Narrow, NarrowOperator};
