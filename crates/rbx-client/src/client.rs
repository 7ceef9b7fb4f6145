//! High-level client over all group services

use std::sync::Arc;

use rbx_common::ClientConfig;
use rbx_core::{Group, GroupId, GroupRole, Membership, Transport, User};

use crate::endpoints::Endpoints;
use crate::services::{
    ClientContext, ClientResult, Collected, GroupService, MembershipService, RelationService,
};

/// Read-only client for the platform's group APIs
///
/// ```no_run
/// # async fn demo() -> Result<(), rbx_client::ClientError> {
/// use rbx_client::GroupClient;
/// use rbx_common::ClientConfig;
/// use rbx_core::{GroupId, User, UserId};
///
/// let client = GroupClient::from_config(&ClientConfig::default())?;
/// let group = client.group(GroupId::new(7)).await?;
/// let role = client.role_of(&User::new(UserId::new(261)), &group).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GroupClient {
    ctx: ClientContext,
}

impl GroupClient {
    pub fn new(transport: Arc<dyn Transport>, endpoints: Endpoints) -> Self {
        Self {
            ctx: ClientContext::new(transport, endpoints),
        }
    }

    /// Create a client backed by the HTTP transport
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            ctx: ClientContext::from_config(config)?,
        })
    }

    pub fn groups(&self) -> GroupService<'_> {
        GroupService::new(&self.ctx)
    }

    pub fn memberships(&self) -> MembershipService<'_> {
        MembershipService::new(&self.ctx)
    }

    pub fn relations(&self) -> RelationService<'_> {
        RelationService::new(&self.ctx)
    }

    /// Fetch a fully resolved group
    pub async fn group(&self, group_id: GroupId) -> ClientResult<Group> {
        self.groups().fetch_group(group_id).await
    }

    pub async fn allies(&self, group: &Group) -> ClientResult<Collected<Group>> {
        self.relations().allies(group).await
    }

    pub async fn enemies(&self, group: &Group) -> ClientResult<Collected<Group>> {
        self.relations().enemies(group).await
    }

    pub async fn is_member(&self, user: &User, group: &Group) -> ClientResult<bool> {
        self.memberships().is_member(user, group).await
    }

    pub async fn role_of(&self, user: &User, group: &Group) -> ClientResult<Option<GroupRole>> {
        self.memberships().role_of(user, group).await
    }

    pub async fn user_memberships(&self, user: &User) -> ClientResult<Vec<Membership>> {
        self.memberships().memberships(user).await
    }
}
