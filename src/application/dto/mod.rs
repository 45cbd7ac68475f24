//! Data transfer objects.

mod outcome;
mod response;

pub use outcome::OperationOutcome;
pub use response::{NormalizedResponse, RESULT_SUCCESS};
