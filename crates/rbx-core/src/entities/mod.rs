//! Domain entities - core business objects

mod group;
mod membership;
mod role;
mod user;

pub use group::Group;
pub use membership::Membership;
pub use role::GroupRole;
pub use user::User;
