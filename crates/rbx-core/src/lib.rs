//! # rbx-core
//!
//! Domain layer containing group entities, value objects, strict JSON field access,
//! and the transport port. This crate has no dependency on any HTTP client.

pub mod entities;
pub mod error;
pub mod json;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Group, GroupRole, Membership, User};
pub use error::SchemaError;
pub use json::{FieldResult, JsonObject};
pub use traits::{FetchError, FetchResult, Transport};
pub use value_objects::{GroupId, IdParseError, RoleId, UserId};
