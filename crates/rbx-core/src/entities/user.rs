//! User entity - the minimal account reference the group APIs deal in

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::UserId;

/// User reference, optionally carrying a username learned along the way
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    username: Option<String>,
}

impl User {
    /// Create a bare user reference
    pub const fn new(id: UserId) -> Self {
        Self { id, username: None }
    }

    /// Create a user reference with a known username
    pub fn with_username(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: Some(username.into()),
        }
    }

    #[inline]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Cached username, if it was seen while resolving something else
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }
}

impl From<UserId> for User {
    fn from(id: UserId) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.username {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "{}", self.id),
        }
    }
}
