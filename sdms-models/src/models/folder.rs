//! Folder model and folder path entries.

use serde::{Deserialize, Serialize};

use super::attribute::AttributeValue;
use crate::lenient;

/// A folder in the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    #[serde(deserialize_with = "lenient::u64_from_any")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub comment: String,
    /// Creation date as reported by the server (`YYYY-MM-DD hh:mm:ss`).
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub attributes: Vec<AttributeValue>,
}

/// One element of `/folder/:id/path`, root first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathEntry {
    #[serde(deserialize_with = "lenient::u64_from_any")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub name: String,
}

impl PathEntry {
    /// Join path entries into `Root/Child/Leaf`.
    pub fn join(entries: &[PathEntry]) -> String {
        entries
            .iter()
            .map(|e| e.name.as_str())
            .collect::<Vec<_>>()
            .join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_with_attributes() {
        let json = serde_json::json!({
            "attributes": [{"id": 1, "value": "main"}],
            "comment": "DMS root",
            "date": "2017-02-22 12:36:22",
            "id": 1,
            "name": "DMS",
            "type": "folder"
        });
        let folder: Folder = serde_json::from_value(json).unwrap();
        assert_eq!(folder.name, "DMS");
        assert_eq!(folder.attributes[0].value, "main");
    }

    #[test]
    fn test_folder_with_null_comment() {
        let json = r#"{"id": 2, "name": "aotearoa", "comment": null}"#;
        let folder: Folder = serde_json::from_str(json).unwrap();
        assert_eq!(folder.comment, "");
        assert!(folder.attributes.is_empty());
    }

    #[test]
    fn test_path_with_string_ids() {
        let json = r#"[{"id": "1", "name": "DMS"}, {"id": "2", "name": "aotearoa"}]"#;
        let path: Vec<PathEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(path[1].id, 2);
        assert_eq!(PathEntry::join(&path), "DMS/aotearoa");
        assert_eq!(PathEntry::join(&[]), "");
    }
}
