//! Application services.

mod request_dispatcher;
mod response_normalizer;

pub use request_dispatcher::RequestDispatcher;
pub use response_normalizer::normalize;
