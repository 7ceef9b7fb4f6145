//! Strict field access over parsed JSON documents
//!
//! Every lookup either returns the value with the caller's expected type or a
//! [`SchemaError`] naming the exact field, e.g. `group.id` or `role.rank`.
//! A missing field is never defaulted.

use serde_json::{Map, Value};

use crate::error::SchemaError;

/// Result type for field access
pub type FieldResult<T> = Result<T, SchemaError>;

/// A JSON object paired with a description of its role in the response
#[derive(Debug, Clone, Copy)]
pub struct JsonObject<'a> {
    map: &'a Map<String, Value>,
    context: &'static str,
}

impl<'a> JsonObject<'a> {
    /// Wrap `value`, which must be a JSON object
    pub fn new(value: &'a Value, context: &'static str) -> FieldResult<Self> {
        value
            .as_object()
            .map(|map| Self { map, context })
            .ok_or_else(|| SchemaError::UnexpectedType {
                path: context.to_string(),
                expected: "an object",
            })
    }

    /// Description of this object, used as the prefix of error paths
    #[inline]
    pub fn context(&self) -> &'static str {
        self.context
    }

    /// Check whether a field is present (even if null)
    #[inline]
    pub fn contains(&self, field: &str) -> bool {
        self.map.contains_key(field)
    }

    /// Get a raw field value
    pub fn get(&self, field: &str) -> FieldResult<&'a Value> {
        self.map
            .get(field)
            .ok_or_else(|| SchemaError::missing(self.context, field))
    }

    pub fn get_str(&self, field: &str) -> FieldResult<&'a str> {
        self.get(field)?
            .as_str()
            .ok_or_else(|| SchemaError::unexpected(self.context, field, "a string"))
    }

    pub fn get_string(&self, field: &str) -> FieldResult<String> {
        self.get_str(field).map(str::to_owned)
    }

    /// Get a string field that must be present but may be `null`; `null` reads as `""`
    pub fn get_nullable_string(&self, field: &str) -> FieldResult<String> {
        match self.get(field)? {
            Value::Null => Ok(String::new()),
            Value::String(s) => Ok(s.clone()),
            _ => Err(SchemaError::unexpected(self.context, field, "a string")),
        }
    }

    pub fn get_i64(&self, field: &str) -> FieldResult<i64> {
        self.get(field)?
            .as_i64()
            .ok_or_else(|| SchemaError::unexpected(self.context, field, "an integer"))
    }

    pub fn get_i32(&self, field: &str) -> FieldResult<i32> {
        let value = self.get_i64(field)?;
        i32::try_from(value)
            .map_err(|_| SchemaError::unexpected(self.context, field, "a 32-bit integer"))
    }

    pub fn get_bool(&self, field: &str) -> FieldResult<bool> {
        self.get(field)?
            .as_bool()
            .ok_or_else(|| SchemaError::unexpected(self.context, field, "a boolean"))
    }

    /// Get an integer field converted into an id newtype
    pub fn get_id<T: From<i64>>(&self, field: &str) -> FieldResult<T> {
        self.get_i64(field).map(T::from)
    }

    pub fn get_array(&self, field: &str) -> FieldResult<&'a [Value]> {
        self.get(field)?
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| SchemaError::unexpected(self.context, field, "an array"))
    }

    /// Get a nested object; `context` describes it in later error paths
    pub fn get_object(&self, field: &str, context: &'static str) -> FieldResult<JsonObject<'a>> {
        let value = self.get(field)?;
        value
            .as_object()
            .map(|map| JsonObject { map, context })
            .ok_or_else(|| SchemaError::unexpected(self.context, field, "an object"))
    }

    /// Get a nested object that is allowed to be absent or `null`
    pub fn get_optional_object(
        &self,
        field: &str,
        context: &'static str,
    ) -> FieldResult<Option<JsonObject<'a>>> {
        match self.map.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(_) => self.get_object(field, context).map(Some),
        }
    }
}

/// Parse response text into a JSON document
pub fn parse_document(text: &str) -> FieldResult<Value> {
    serde_json::from_str(text).map_err(SchemaError::from)
}

/// Look up one field of `document`, which must be an object described by `context`
pub fn field<'a>(document: &'a Value, context: &'static str, name: &str) -> FieldResult<&'a Value> {
    JsonObject::new(document, context)?.get(name)
}
