//! Relation service
//!
//! Collects a group's allies or enemies by walking the paged listing.

use rbx_core::{Group, GroupId};
use tracing::{info, instrument};

use super::context::ClientContext;
use super::error::ClientResult;
use super::pagination::{collect_pages, Collected, Page};
use crate::endpoints::RelationKind;
use crate::mappers::page_from_text;

/// Relation service
pub struct RelationService<'a> {
    ctx: &'a ClientContext,
}

impl<'a> RelationService<'a> {
    /// Create a new RelationService
    pub fn new(ctx: &'a ClientContext) -> Self {
        Self { ctx }
    }

    async fn fetch_page(
        &self,
        kind: RelationKind,
        group_id: GroupId,
        page: u32,
    ) -> ClientResult<Page<Group>> {
        let url = self.ctx.endpoints().relation_page(kind, group_id, page);
        let text = self.ctx.fetch_text(&url).await?;
        Ok(page_from_text(&text)?)
    }

    /// Collect every group of one listing
    #[instrument(skip(self, group), fields(group_id = %group.id()))]
    pub async fn related(&self, kind: RelationKind, group: &Group) -> ClientResult<Collected<Group>> {
        let group_id = group.id();
        let collected = collect_pages(move |page| self.fetch_page(kind, group_id, page)).await?;

        info!(
            count = collected.items.len(),
            pages = collected.pages_fetched,
            truncated = collected.truncated,
            "Listing collected"
        );
        Ok(collected)
    }

    /// Allied groups of `group`
    pub async fn allies(&self, group: &Group) -> ClientResult<Collected<Group>> {
        self.related(RelationKind::Allies, group).await
    }

    /// Enemy groups of `group`
    pub async fn enemies(&self, group: &Group) -> ClientResult<Collected<Group>> {
        self.related(RelationKind::Enemies, group).await
    }
}
