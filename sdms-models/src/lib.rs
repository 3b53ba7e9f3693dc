//! SeedDMS Models - Typed views of the objects the REST API returns.
//!
//! The service is loose about JSON types (ids arrive as numbers in most
//! places and as strings in folder paths), so every model deserializes
//! leniently through the helpers in [`lenient`].

pub mod lenient;
pub mod models;

// Re-export key types
pub use models::attribute::{AttributeDefinition, AttributeValue};
pub use models::category::Category;
pub use models::document::Document;
pub use models::folder::{Folder, PathEntry};
pub use models::group::Group;
pub use models::object::{DmsObject, FolderRef, GroupRef};
pub use models::user::User;
