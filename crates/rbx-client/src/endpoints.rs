//! Remote endpoint templates
//!
//! The group APIs live on three hosts; every URL this crate requests is built here.

use rbx_common::EndpointConfig;
use rbx_core::{GroupId, UserId};

/// Which alliance listing of a group to walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    Allies,
    Enemies,
}

impl RelationKind {
    /// Path segment of the listing on the API host
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Allies => "allies",
            Self::Enemies => "enemies",
        }
    }
}

/// URL builder for all group endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    api_base: String,
    web_api_base: String,
    groups_base: String,
}

impl Endpoints {
    pub fn new(
        api_base: impl Into<String>,
        web_api_base: impl Into<String>,
        groups_base: impl Into<String>,
    ) -> Self {
        Self {
            api_base: api_base.into(),
            web_api_base: web_api_base.into(),
            groups_base: groups_base.into(),
        }
    }

    pub fn from_config(config: &EndpointConfig) -> Self {
        Self::new(
            config.api_base_url.clone(),
            config.web_api_base_url.clone(),
            config.groups_base_url.clone(),
        )
    }

    /// Group metadata document
    pub fn group(&self, group_id: GroupId) -> String {
        format!("{}/groups/{group_id}", self.api_base)
    }

    /// Role set listing of a group
    pub fn role_sets(&self, group_id: GroupId) -> String {
        format!("{}/groups/{group_id}/RoleSets/", self.web_api_base)
    }

    /// One page of a group's allies or enemies (pages start at 1)
    pub fn relation_page(&self, kind: RelationKind, group_id: GroupId, page: u32) -> String {
        format!(
            "{}/groups/{group_id}/{}?page={page}",
            self.api_base,
            kind.path_segment()
        )
    }

    pub fn allies_page(&self, group_id: GroupId, page: u32) -> String {
        self.relation_page(RelationKind::Allies, group_id, page)
    }

    pub fn enemies_page(&self, group_id: GroupId, page: u32) -> String {
        self.relation_page(RelationKind::Enemies, group_id, page)
    }

    /// Every group membership of a user, with roles
    pub fn user_memberships(&self, user_id: UserId) -> String {
        format!("{}/users/{user_id}/groups/roles", self.groups_base)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::from_config(&EndpointConfig::default())
    }
}
