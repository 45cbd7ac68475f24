//! Transport adapters.

mod curl;
mod http;

pub use curl::CurlTransport;
pub use http::HttpTransport;
