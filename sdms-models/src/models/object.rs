//! Mixed folder/document listings and id-or-name references.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::document::Document;
use super::folder::Folder;

/// An entry of a folder listing or a search result; the server tags each
/// entry with `"type"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DmsObject {
    Folder(Folder),
    Document(Document),
    /// Anything else the server may list.
    #[serde(other)]
    Other,
}

impl DmsObject {
    pub fn id(&self) -> Option<u64> {
        match self {
            DmsObject::Folder(f) => Some(f.id),
            DmsObject::Document(d) => Some(d.id),
            DmsObject::Other => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            DmsObject::Folder(f) => &f.name,
            DmsObject::Document(d) => &d.name,
            DmsObject::Other => "",
        }
    }

    /// The value of the `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            DmsObject::Folder(_) => "folder",
            DmsObject::Document(_) => "document",
            DmsObject::Other => "other",
        }
    }
}

/// A folder addressed by numeric id or by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderRef {
    Id(u64),
    Name(String),
}

/// A group addressed by numeric id or by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupRef {
    Id(u64),
    Name(String),
}

macro_rules! id_or_name {
    ($ty:ident) => {
        impl From<u64> for $ty {
            fn from(id: u64) -> Self {
                $ty::Id(id)
            }
        }

        impl From<&str> for $ty {
            fn from(name: &str) -> Self {
                name.parse().unwrap_or_else(|never: Infallible| match never {})
            }
        }

        impl From<String> for $ty {
            fn from(name: String) -> Self {
                $ty::from(name.as_str())
            }
        }

        /// All-digit input is an id, anything else a name.
        impl FromStr for $ty {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                Ok(match s.parse::<u64>() {
                    Ok(id) => $ty::Id(id),
                    Err(_) => $ty::Name(s.to_string()),
                })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $ty::Id(id) => write!(f, "{id}"),
                    $ty::Name(name) => f.write_str(name),
                }
            }
        }
    };
}

id_or_name!(FolderRef);
id_or_name!(GroupRef);
