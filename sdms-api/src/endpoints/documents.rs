//! Document endpoints.

use std::path::Path;

use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use sdms_core::error::SdmsResult;
use sdms_models::{AttributeValue, Document};

use crate::client::{multipart_form, ApiClient};
use crate::session::Session;
use crate::translate::{Params, PathArgs};

/// A file attached to an existing document.
#[derive(Debug, Clone, Default)]
pub struct DocumentAttachment {
    pub name: String,
    pub comment: String,
    pub keywords: String,
    /// File name reported to the server.
    pub origfilename: String,
    /// Whether the attachment is visible to all readers of the document.
    pub public: bool,
    /// Attach to a specific version instead of the document.
    pub version: Option<u64>,
    pub content: Vec<u8>,
}

impl DocumentAttachment {
    /// Read `path`; the name and original file name default to its base name.
    pub fn from_path(path: &Path) -> SdmsResult<Self> {
        let content = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self {
            name: file_name.clone(),
            origfilename: file_name,
            content,
            ..Self::default()
        })
    }

    fn params(&self) -> Params {
        Params::new()
            .with("name", &self.name)
            .with("comment", &self.comment)
            .with("keywords", &self.keywords)
            .with("origfilename", &self.origfilename)
            .with("public", self.public)
            .with("version", self.version)
    }
}

impl ApiClient {
    pub fn get_document(&self, session: &Session, id: u64) -> SdmsResult<Document> {
        self.call(session, Method::GET, "/document/:id", &PathArgs::id(id), &Params::new())
    }

    pub fn get_document_attributes(&self, session: &Session, id: u64) -> SdmsResult<Vec<AttributeValue>> {
        self.call_list(
            session,
            Method::GET,
            "/document/:id/attributes",
            &PathArgs::id(id),
            &Params::new(),
        )
    }

    /// Content of the latest version, as raw bytes.
    pub fn get_document_content(&self, session: &Session, id: u64) -> SdmsResult<Vec<u8>> {
        self.get_raw(session, "/document/:id/content", &PathArgs::id(id))
    }

    pub fn get_document_file(&self, session: &Session, id: u64, file_id: u64) -> SdmsResult<Value> {
        self.call(
            session,
            Method::GET,
            "/document/:id/file/:fileid",
            &PathArgs::id(id).with("fileid", file_id),
            &Params::new(),
        )
    }

    pub fn get_document_files(&self, session: &Session, id: u64) -> SdmsResult<Vec<Value>> {
        self.call_list(session, Method::GET, "/document/:id/files", &PathArgs::id(id), &Params::new())
    }

    pub fn get_document_links(&self, session: &Session, id: u64) -> SdmsResult<Vec<Value>> {
        self.call_list(session, Method::GET, "/document/:id/links", &PathArgs::id(id), &Params::new())
    }

    /// Preview image of `version` scaled to `width`; `0` means the
    /// server's default for either.
    pub fn get_document_preview(
        &self,
        session: &Session,
        id: u64,
        version: u64,
        width: u32,
    ) -> SdmsResult<Vec<u8>> {
        self.get_raw(
            session,
            "/document/:id/preview/:version/:width",
            &PathArgs::id(id).with("version", version).with("width", width),
        )
    }

    /// Content of one version, as raw bytes.
    pub fn get_document_version(&self, session: &Session, id: u64, version: u64) -> SdmsResult<Vec<u8>> {
        self.get_raw(
            session,
            "/document/:id/version/:version",
            &PathArgs::id(id).with("version", version),
        )
    }

    pub fn get_document_versions(&self, session: &Session, id: u64) -> SdmsResult<Vec<Value>> {
        self.call_list(
            session,
            Method::GET,
            "/document/:id/versions",
            &PathArgs::id(id),
            &Params::new(),
        )
    }

    /// Attach a file to an existing document.
    pub fn upload_document_file(
        &self,
        session: &Session,
        id: u64,
        attachment: &DocumentAttachment,
    ) -> SdmsResult<Value> {
        debug!(
            "attaching {} ({} bytes) to document {id}",
            attachment.origfilename,
            attachment.content.len()
        );
        let form = multipart_form(
            &attachment.params(),
            &attachment.origfilename,
            attachment.content.clone(),
        );
        self.post_multipart(session, "/document/:id/attachment", &PathArgs::id(id), form)?
            .ok()?
            .decode_data()
    }

    pub fn move_document(&self, session: &Session, id: u64, folder_id: u64) -> SdmsResult<Value> {
        self.call(
            session,
            Method::POST,
            "/document/:id/move/:folderid",
            &PathArgs::id(id).with("folderid", folder_id),
            &Params::new(),
        )
    }

    pub fn delete_document(&self, session: &Session, id: u64) -> SdmsResult<Value> {
        self.call(session, Method::DELETE, "/document/:id", &PathArgs::id(id), &Params::new())
    }

    pub fn remove_document_categories(&self, session: &Session, id: u64) -> SdmsResult<Value> {
        self.call(
            session,
            Method::DELETE,
            "/document/:id/categories",
            &PathArgs::id(id),
            &Params::new(),
        )
    }

    pub fn remove_document_category(
        &self,
        session: &Session,
        id: u64,
        category_id: u64,
    ) -> SdmsResult<Value> {
        self.call(
            session,
            Method::DELETE,
            "/document/:id/category/:categoryId",
            &PathArgs::id(id).with("categoryId", category_id),
            &Params::new(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::coerce_params;

    #[test]
    fn test_attachment_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("minutes.txt");
        std::fs::write(&path, b"kia ora").unwrap();

        let att = DocumentAttachment::from_path(&path).unwrap();
        assert_eq!(att.name, "minutes.txt");
        assert_eq!(att.origfilename, "minutes.txt");
        assert_eq!(att.content, b"kia ora");
        assert!(!att.public);
    }

    #[test]
    fn test_attachment_params() {
        let att = DocumentAttachment {
            name: "scan".into(),
            public: true,
            ..DocumentAttachment::default()
        };
        let flat = coerce_params(&att.params());
        assert_eq!(flat["name"], "scan");
        assert_eq!(flat["public"], "true");
        assert_eq!(flat["version"], "");
        assert_eq!(flat.len(), 6);
    }
}
