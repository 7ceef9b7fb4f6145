//! Client services
//!
//! Each service borrows the shared `ClientContext` and implements one family
//! of lookups against the platform's group APIs.

pub mod context;
pub mod error;
pub mod group;
pub mod membership;
pub mod pagination;
pub mod relations;

// Re-export all services for convenience
pub use context::ClientContext;
pub use error::{ClientError, ClientResult};
pub use group::GroupService;
pub use membership::MembershipService;
pub use pagination::{collect_pages, Collected, Page, MAX_PAGE_REQUESTS};
pub use relations::RelationService;
