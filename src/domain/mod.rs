//! Domain layer with core value objects, errors, and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{
    BasicAuth, ClientConfig, EditMessage, Emoji, MessageId, Narrow, NarrowOperator,
    PropagateMode, Recipients,
};
pub use errors::{ApiError, ConfigError, ConfigField};
pub use ports::{FormData, HttpMethod, RawTransportResult, Transport};
