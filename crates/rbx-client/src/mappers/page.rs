//! Alliance listing page -> Page<Group>
//!
//! Page shape (`/groups/{id}/allies?page=n`, same for enemies):
//!
//! ```json
//! {"FinalPage": false, "Groups": [{"Id": 1, "Name": "A", "Owner": null, ...}]}
//! ```

use rbx_core::json::FieldResult;
use rbx_core::{Group, GroupId, GroupRole, RoleId, SchemaError, User, UserId};
use serde::Deserialize;

use crate::services::Page;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PageModel {
    final_page: bool,
    groups: Vec<GroupModel>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GroupModel {
    id: GroupId,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    owner: Option<OwnerModel>,
    #[serde(default)]
    emblem_url: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    roles: Vec<RoleModel>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OwnerModel {
    id: UserId,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RoleModel {
    name: String,
    rank: i32,
    #[serde(default)]
    id: RoleId,
}

impl From<OwnerModel> for User {
    fn from(model: OwnerModel) -> Self {
        match model.name {
            Some(name) => User::with_username(model.id, name),
            None => User::new(model.id),
        }
    }
}

impl From<RoleModel> for GroupRole {
    fn from(model: RoleModel) -> Self {
        GroupRole::new(model.name, model.rank, model.id)
    }
}

impl From<GroupModel> for Group {
    fn from(model: GroupModel) -> Self {
        Group::new(
            model.id,
            model.name.unwrap_or_default(),
            model.owner.map(User::from),
            model.emblem_url.unwrap_or_default(),
            model.description.unwrap_or_default(),
            model.roles.into_iter().map(GroupRole::from).collect(),
        )
    }
}

/// Decode one listing page; a malformed page is a schema error
pub fn page_from_text(text: &str) -> FieldResult<Page<Group>> {
    let model: PageModel = serde_json::from_str(text).map_err(SchemaError::from)?;
    Ok(Page {
        is_final_page: model.final_page,
        items: model.groups.into_iter().map(Group::from).collect(),
    })
}
