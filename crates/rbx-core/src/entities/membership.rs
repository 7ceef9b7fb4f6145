//! Membership entity - a user's role in one group

use serde::{Deserialize, Serialize};

use super::GroupRole;
use crate::value_objects::GroupId;

/// One record of a user's group memberships
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub group_id: GroupId,
    pub role: GroupRole,
}

impl Membership {
    pub fn new(group_id: GroupId, role: GroupRole) -> Self {
        Self { group_id, role }
    }
}
