//! JSON field accessor

mod accessor;

pub use accessor::{field, parse_document, FieldResult, JsonObject};
