//! Traits (ports) implemented by the infrastructure side

mod transport;

pub use transport::{FetchError, FetchResult, Transport};
