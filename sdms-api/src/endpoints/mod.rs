//! API endpoint modules organized by category.
//!
//! Each module adds methods to [`ApiClient`](crate::ApiClient) for one group
//! of related server endpoints.

pub mod account;
pub mod attributes;
pub mod categories;
pub mod documents;
pub mod folders;
pub mod groups;
pub mod search;
pub mod users;
