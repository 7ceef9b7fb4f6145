//! Domain errors

mod schema_error;

pub use schema_error::{field_path, SchemaError};
