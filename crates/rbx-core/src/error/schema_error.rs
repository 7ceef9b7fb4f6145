//! Schema errors - the remote API returned something other than the shape we rely on

use thiserror::Error;

/// Response shape violations
///
/// Every variant means the remote contract changed (or the response was
/// garbage). None of them are ever turned into a default value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("Missing field \"{path}\" in response")]
    MissingField { path: String },

    #[error("Could not find \"data\" in response, did the response model change?")]
    MissingData,

    #[error("Field \"{path}\" is not {expected}")]
    UnexpectedType { path: String, expected: &'static str },

    #[error("Invalid JSON document: {0}")]
    InvalidJson(String),
}

impl SchemaError {
    /// Build a `MissingField` error for `field` inside the object described by `context`
    pub fn missing(context: &str, field: &str) -> Self {
        Self::MissingField {
            path: field_path(context, field),
        }
    }

    /// Build an `UnexpectedType` error for `field` inside `context`
    pub fn unexpected(context: &str, field: &str, expected: &'static str) -> Self {
        Self::UnexpectedType {
            path: field_path(context, field),
            expected,
        }
    }

    /// Get an error code string for logs and CLI output
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "MISSING_FIELD",
            Self::MissingData => "MISSING_DATA",
            Self::UnexpectedType { .. } => "UNEXPECTED_TYPE",
            Self::InvalidJson(_) => "INVALID_JSON",
        }
    }

    /// Dotted path of the offending field, if the error concerns one
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::MissingField { path } | Self::UnexpectedType { path, .. } => Some(path),
            Self::MissingData | Self::InvalidJson(_) => None,
        }
    }

    /// Check if this error is a single absent field (as opposed to a broken document)
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidJson(e.to_string())
    }
}

/// Join an object description and a field name, e.g. `group` + `id` -> `group.id`
pub fn field_path(context: &str, field: &str) -> String {
    if context.is_empty() {
        field.to_string()
    } else {
        format!("{context}.{field}")
    }
}
