//! Integration test utilities for the group client
//!
//! Runs the real HTTP transport against a local mock of the three group API
//! hosts.

pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
