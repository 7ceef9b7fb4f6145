//! Group service
//!
//! Builds a complete `Group` from the metadata and role-set documents.

use rbx_core::{Group, GroupId};
use tracing::{debug, instrument};

use super::context::ClientContext;
use super::error::ClientResult;
use crate::mappers::{metadata_from_document, roles_from_document};

/// Group service
pub struct GroupService<'a> {
    ctx: &'a ClientContext,
}

impl<'a> GroupService<'a> {
    /// Create a new GroupService
    pub fn new(ctx: &'a ClientContext) -> Self {
        Self { ctx }
    }

    /// Fetch and assemble a group
    ///
    /// Both documents must be fetched and mapped; there is no partial group.
    /// The metadata document is validated before the role sets are requested.
    #[instrument(skip(self))]
    pub async fn fetch_group(&self, group_id: GroupId) -> ClientResult<Group> {
        let endpoints = self.ctx.endpoints();

        let metadata_doc = self.ctx.fetch_document(&endpoints.group(group_id)).await?;
        let metadata = metadata_from_document(&metadata_doc)?;

        let role_sets_doc = self
            .ctx
            .fetch_document(&endpoints.role_sets(group_id))
            .await?;
        let roles = roles_from_document(&role_sets_doc)?;

        debug!(
            group_id = %group_id,
            roles = roles.len(),
            has_owner = metadata.owner.is_some(),
            "Group resolved"
        );

        Ok(metadata.into_group(group_id, roles))
    }
}
