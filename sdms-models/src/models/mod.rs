//! Entity model definitions.

pub mod attribute;
pub mod category;
pub mod document;
pub mod folder;
pub mod group;
pub mod object;
pub mod user;
