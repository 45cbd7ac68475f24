mod transport_port;

pub use transport_port::{FormData, HttpMethod, RawTransportResult, Transport};
