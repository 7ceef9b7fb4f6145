//! # rbx-client
//!
//! Application layer: resolves groups, their role hierarchy and alliance
//! listings, and a user's membership and role in a group.

pub mod client;
pub mod endpoints;
pub mod mappers;
pub mod services;
pub mod transport;


// Re-export commonly used types at crate root
pub use client::GroupClient;
pub use endpoints::{Endpoints, RelationKind};
pub use services::{
    collect_pages, ClientContext, ClientError, ClientResult, Collected, GroupService,
    MembershipService, Page, RelationService, MAX_PAGE_REQUESTS,
};
pub use transport::HttpTransport;
