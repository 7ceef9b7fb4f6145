//! Transport implementations

mod http;

pub use http::HttpTransport;
