//! Group entity - a named collective with an owner and a role hierarchy

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{GroupRole, User};
use crate::value_objects::{GroupId, RoleId, UserId};

/// Group entity
///
/// Either a bare reference built with [`Group::from_id`], or a fully resolved
/// group built by the client from the platform's metadata and role-set
/// documents. Fields are read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    id: GroupId,
    name: String,
    owner: Option<User>,
    emblem_url: String,
    description: String,
    roles: Vec<GroupRole>,
}

impl Group {
    /// Create a fully described group
    pub fn new(
        id: GroupId,
        name: impl Into<String>,
        owner: Option<User>,
        emblem_url: impl Into<String>,
        description: impl Into<String>,
        roles: Vec<GroupRole>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            owner,
            emblem_url: emblem_url.into(),
            description: description.into(),
            roles,
        }
    }

    /// Create a bare group reference with only its id set
    pub fn from_id(id: GroupId) -> Self {
        Self {
            id,
            name: String::new(),
            owner: None,
            emblem_url: String::new(),
            description: String::new(),
            roles: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Name as shown on the website
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Owner, `None` if nobody owns the group
    pub fn owner(&self) -> Option<&User> {
        self.owner.as_ref()
    }

    pub fn emblem_url(&self) -> &str {
        &self.emblem_url
    }

    /// Description as shown on the website, may be empty
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Roles in the order the platform listed them
    pub fn roles(&self) -> &[GroupRole] {
        &self.roles
    }

    /// Check if a user is the group owner
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner.as_ref().is_some_and(|owner| owner.id() == user_id)
    }

    /// First role with the given id
    pub fn role_by_id(&self, id: RoleId) -> Option<&GroupRole> {
        self.roles.iter().find(|role| role.id() == id)
    }

    /// First role with the given rank number
    pub fn role_by_rank(&self, rank: i32) -> Option<&GroupRole> {
        self.roles.iter().find(|role| role.rank() == rank)
    }
}

impl From<GroupId> for Group {
    fn from(id: GroupId) -> Self {
        Self::from_id(id)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Group ({}): {}", self.id, self.name)
    }
}
