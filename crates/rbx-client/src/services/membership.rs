//! Membership service
//!
//! Answers "is this user in that group, and with which role" from the user's
//! memberships document. Each call fetches the document once.

use rbx_core::{Group, GroupRole, Membership, User, UserId};
use serde_json::Value;
use tracing::{debug, instrument};

use super::context::ClientContext;
use super::error::ClientResult;
use crate::mappers::{all_memberships, is_member_of, role_in};

/// Membership service
pub struct MembershipService<'a> {
    ctx: &'a ClientContext,
}

impl<'a> MembershipService<'a> {
    /// Create a new MembershipService
    pub fn new(ctx: &'a ClientContext) -> Self {
        Self { ctx }
    }

    async fn fetch_memberships(&self, user_id: UserId) -> ClientResult<Value> {
        let url = self.ctx.endpoints().user_memberships(user_id);
        self.ctx.fetch_document(&url).await
    }

    /// Check if `user` is a member of `group`
    #[instrument(skip(self, user, group), fields(user_id = %user.id(), group_id = %group.id()))]
    pub async fn is_member(&self, user: &User, group: &Group) -> ClientResult<bool> {
        let document = self.fetch_memberships(user.id()).await?;
        let member = is_member_of(&document, group.id())?;
        debug!(member, "Membership checked");
        Ok(member)
    }

    /// Get the role `user` holds in `group`, `None` if not a member
    #[instrument(skip(self, user, group), fields(user_id = %user.id(), group_id = %group.id()))]
    pub async fn role_of(&self, user: &User, group: &Group) -> ClientResult<Option<GroupRole>> {
        let document = self.fetch_memberships(user.id()).await?;
        let role = role_in(&document, group.id())?;
        debug!(found = role.is_some(), "Role resolved");
        Ok(role)
    }

    /// Every group `user` belongs to, with the role held in each
    #[instrument(skip(self, user), fields(user_id = %user.id()))]
    pub async fn memberships(&self, user: &User) -> ClientResult<Vec<Membership>> {
        let document = self.fetch_memberships(user.id()).await?;
        Ok(all_memberships(&document)?)
    }
}
