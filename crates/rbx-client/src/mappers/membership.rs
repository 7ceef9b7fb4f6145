//! User memberships document -> membership lookups
//!
//! Document shape (`/users/{id}/groups/roles`):
//!
//! ```json
//! {"data": [{"group": {"id": 9, ...}, "role": {"id": 2, "rank": 50, "name": "Boss"}}]}
//! ```
//!
//! Records are scanned in the order the platform returns them. A record whose
//! group reference is broken is an error even if a later record would match.

use rbx_core::json::{FieldResult, JsonObject};
use rbx_core::{GroupId, GroupRole, Membership, SchemaError};
use serde_json::Value;

/// Membership records of the document, in returned order
fn records(document: &Value) -> FieldResult<&[Value]> {
    let root = JsonObject::new(document, "response")?;
    if !root.contains("data") {
        return Err(SchemaError::MissingData);
    }
    root.get_array("data")
}

fn record_group_id(record: &JsonObject<'_>) -> FieldResult<GroupId> {
    record.get_object("group", "group")?.get_id("id")
}

/// First record referring to `group_id`, if any
pub fn find_membership(document: &Value, group_id: GroupId) -> FieldResult<Option<JsonObject<'_>>> {
    for entry in records(document)? {
        let record = JsonObject::new(entry, "membership")?;
        if record_group_id(&record)? == group_id {
            return Ok(Some(record));
        }
    }
    Ok(None)
}

pub fn is_member_of(document: &Value, group_id: GroupId) -> FieldResult<bool> {
    find_membership(document, group_id).map(|record| record.is_some())
}

/// Role of the first record referring to `group_id`
pub fn role_in(document: &Value, group_id: GroupId) -> FieldResult<Option<GroupRole>> {
    find_membership(document, group_id)?
        .map(|record| role_from_record(&record))
        .transpose()
}

/// Map a record's nested `role` object
pub fn role_from_record(record: &JsonObject<'_>) -> FieldResult<GroupRole> {
    let role = record.get_object("role", "role")?;

    let id = role.get_id("id")?;
    let rank = role.get_i32("rank")?;
    let name = role.get_string("name")?;

    Ok(GroupRole::new(name, rank, id))
}

/// Every record of the document, mapped strictly
pub fn all_memberships(document: &Value) -> FieldResult<Vec<Membership>> {
    records(document)?
        .iter()
        .map(|entry| {
            let record = JsonObject::new(entry, "membership")?;
            Ok(Membership::new(
                record_group_id(&record)?,
                role_from_record(&record)?,
            ))
        })
        .collect()
}
