//! Group metadata and role-set documents -> Group entity

use rbx_core::json::{FieldResult, JsonObject};
use rbx_core::{Group, GroupId, GroupRole, SchemaError, User};
use serde_json::Value;

/// Descriptive half of a group, taken from the metadata document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMetadata {
    pub name: String,
    pub owner: Option<User>,
    pub emblem_url: String,
    pub description: String,
}

impl GroupMetadata {
    /// Merge with the role listing into a finished group
    pub fn into_group(self, id: GroupId, roles: Vec<GroupRole>) -> Group {
        Group::new(
            id,
            self.name,
            self.owner,
            self.emblem_url,
            self.description,
            roles,
        )
    }
}

/// Map the `/groups/{id}` document
///
/// `Owner` may be absent or null (nobody owns the group). Every other field
/// is required, though a string field set to `null` reads as empty.
pub fn metadata_from_document(document: &Value) -> FieldResult<GroupMetadata> {
    let group = JsonObject::new(document, "group")?;

    let name = group.get_nullable_string("Name")?;
    let owner = group
        .get_optional_object("Owner", "owner")?
        .map(owner_from_object)
        .transpose()?;
    let emblem_url = group.get_nullable_string("EmblemUrl")?;
    let description = group.get_nullable_string("Description")?;

    Ok(GroupMetadata {
        name,
        owner,
        emblem_url,
        description,
    })
}

fn owner_from_object(owner: JsonObject<'_>) -> FieldResult<User> {
    let id = owner.get_id("Id")?;
    let name = owner.get_nullable_string("Name")?;
    if name.is_empty() {
        Ok(User::new(id))
    } else {
        Ok(User::with_username(id, name))
    }
}

/// Map the `/groups/{id}/RoleSets/` document, keeping the listed order
pub fn roles_from_document(document: &Value) -> FieldResult<Vec<GroupRole>> {
    let entries = document.as_array().ok_or_else(|| SchemaError::UnexpectedType {
        path: "roleSets".to_string(),
        expected: "an array",
    })?;

    entries.iter().map(role_from_entry).collect()
}

fn role_from_entry(entry: &Value) -> FieldResult<GroupRole> {
    let role = JsonObject::new(entry, "role")?;
    Ok(GroupRole::new(
        role.get_string("Name")?,
        role.get_i32("Rank")?,
        role.get_id("Id")?,
    ))
}
