//! Application layer with use cases, services, and DTOs.

/// Data transfer objects.
pub mod dto;
/// Request dispatch and response normalization.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{NormalizedResponse, OperationOutcome};
pub use services::{RequestDispatcher, normalize};
pub use use_cases::Messages;
