//! Document model.

use serde::{Deserialize, Serialize};

use crate::lenient;

/// A document's latest-version metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(deserialize_with = "lenient::u64_from_any")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub comment: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub keywords: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub mimetype: Option<String>,
    /// Size of the latest version in bytes.
    #[serde(default, deserialize_with = "lenient::opt_u64_from_any")]
    pub size: Option<u64>,
    /// Latest version number.
    #[serde(default, deserialize_with = "lenient::opt_u64_from_any")]
    pub version: Option<u64>,
}

impl Document {
    /// A file name for saving the content locally: the document name plus
    /// an extension guessed from the mime type.
    pub fn suggested_file_name(&self) -> String {
        let ext = match self.mimetype.as_deref() {
            Some("application/pdf") => ".pdf",
            Some("text/plain") => ".txt",
            Some("image/png") => ".png",
            Some("image/jpeg") => ".jpg",
            _ => "",
        };
        if !ext.is_empty() && self.name.to_ascii_lowercase().ends_with(ext) {
            self.name.clone()
        } else {
            format!("{}{ext}", self.name)
        }
    }
}
