//! Response document -> entity mappers
//!
//! - `group`: metadata + role-set documents into a `Group`
//! - `membership`: the user memberships document, scanned strictly
//! - `page`: one alliance listing page into a `Page<Group>`

mod group;
mod membership;
mod page;

pub use group::{metadata_from_document, roles_from_document, GroupMetadata};
pub use membership::{all_memberships, find_membership, is_member_of, role_from_record, role_in};
pub use page::page_from_text;
