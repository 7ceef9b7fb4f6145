//! Group role entity - one rung of a group's hierarchy

use serde::{Deserialize, Serialize};

use crate::value_objects::RoleId;

/// Role inside a group's role set
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupRole {
    name: String,
    rank: i32,
    id: RoleId,
}

impl GroupRole {
    /// Create a new GroupRole
    pub fn new(name: impl Into<String>, rank: i32, id: RoleId) -> Self {
        Self {
            name: name.into(),
            rank,
            id,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rank number shown in the group manager (platform ordering, may have gaps)
    #[inline]
    pub fn rank(&self) -> i32 {
        self.rank
    }

    #[inline]
    pub fn id(&self) -> RoleId {
        self.id
    }

    /// Compare ranks for hierarchy (higher rank = more authority)
    #[inline]
    pub fn outranks(&self, other: &GroupRole) -> bool {
        self.rank > other.rank
    }
}
