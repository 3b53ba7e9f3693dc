//! Folder endpoints: navigation, creation, uploads and access control.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use sdms_core::error::SdmsResult;
use sdms_models::{AttributeValue, DmsObject, Folder, FolderRef, PathEntry};

use crate::client::{multipart_form, ApiClient};
use crate::session::Session;
use crate::translate::{Params, PathArgs};

/// Permission granted by a folder access entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    Read,
    ReadWrite,
    All,
}

impl AccessMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessMode::Read => "read",
            AccessMode::ReadWrite => "readwrite",
            AccessMode::All => "all",
        }
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "read" => Ok(AccessMode::Read),
            "readwrite" => Ok(AccessMode::ReadWrite),
            "all" => Ok(AccessMode::All),
            other => Err(format!("unknown access mode `{other}` (read, readwrite, all)")),
        }
    }
}

/// A new document to create in a folder.
#[derive(Debug, Clone, Default)]
pub struct DocumentUpload {
    /// Document name; defaults to the file name.
    pub name: String,
    pub origfilename: String,
    pub keywords: String,
    pub comment: String,
    pub content: Vec<u8>,
}

impl DocumentUpload {
    /// Read `path`; the document is named after the file.
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
        let name = if self.name.is_empty() {
            &self.origfilename
        } else {
            &self.name
        };
        Params::new()
            .with("name", name)
            .with("origfilename", &self.origfilename)
            .with("keywords", &self.keywords)
            .with("comment", &self.comment)
    }
}

impl ApiClient {
    /// Get a folder.
    ///
    /// Without a reference the server answers with the root folder. A
    /// name is looked up with `forcebyname`, optionally below `parent`.
    pub fn get_folder(
        &self,
        session: &Session,
        folder: Option<&FolderRef>,
        parent: Option<u64>,
    ) -> SdmsResult<Folder> {
        match folder {
            None => self.call(session, Method::GET, "/folder", &PathArgs::new(), &Params::new()),
            Some(FolderRef::Id(id)) => {
                self.call(session, Method::GET, "/folder/:id", &PathArgs::id(id), &Params::new())
            }
            Some(FolderRef::Name(name)) => self.call(
                session,
                Method::GET,
                "/folder/:id",
                &PathArgs::id(name),
                &Params::new()
                    .with("forcebyname", true)
                    .with_some("parentid", parent),
            ),
        }
    }

    /// Resolve a folder reference to its numeric id.
    pub fn get_folder_id(&self, session: &Session, folder: &FolderRef) -> SdmsResult<u64> {
        match folder {
            FolderRef::Id(id) => Ok(*id),
            FolderRef::Name(_) => Ok(self.get_folder(session, Some(folder), None)?.id),
        }
    }

    /// Documents and subfolders of a folder.
    pub fn get_folder_children(&self, session: &Session, id: u64) -> SdmsResult<Vec<DmsObject>> {
        self.call_list(
            session,
            Method::GET,
            "/folder/:id/children",
            &PathArgs::id(id),
            &Params::new(),
        )
    }

    /// Sorted ids of the documents directly in a folder.
    pub fn get_folder_document_ids(&self, session: &Session, id: u64) -> SdmsResult<Vec<u64>> {
        let children = self.get_folder_children(session, id)?;
        Ok(sorted_ids(&children, |o| matches!(o, DmsObject::Document(_))))
    }

    /// Sorted ids of the direct subfolders of a folder.
    pub fn get_folder_folder_ids(&self, session: &Session, id: u64) -> SdmsResult<Vec<u64>> {
        let children = self.get_folder_children(session, id)?;
        Ok(sorted_ids(&children, |o| matches!(o, DmsObject::Folder(_))))
    }

    pub fn get_folder_attributes(&self, session: &Session, id: u64) -> SdmsResult<Vec<AttributeValue>> {
        self.call_list(
            session,
            Method::GET,
            "/folder/:id/attributes",
            &PathArgs::id(id),
            &Params::new(),
        )
    }

    pub fn get_folder_parent(&self, session: &Session, id: u64) -> SdmsResult<Folder> {
        self.call(session, Method::GET, "/folder/:id/parent", &PathArgs::id(id), &Params::new())
    }

    /// Folders from the root down to `id`.
    pub fn get_folder_path(&self, session: &Session, id: u64) -> SdmsResult<Vec<PathEntry>> {
        self.call_list(session, Method::GET, "/folder/:id/path", &PathArgs::id(id), &Params::new())
    }

    /// The folder path joined with `/`, e.g. `DMS/aotearoa`.
    pub fn get_folder_path_str(&self, session: &Session, id: u64) -> SdmsResult<String> {
        Ok(PathEntry::join(&self.get_folder_path(session, id)?))
    }

    pub fn create_folder(
        &self,
        session: &Session,
        parent_id: u64,
        name: &str,
        comment: &str,
    ) -> SdmsResult<Folder> {
        self.call(
            session,
            Method::POST,
            "/folder/:id/createfolder",
            &PathArgs::id(parent_id),
            &Params::new().with("name", name).with("comment", comment),
        )
    }

    /// Create a document in `folder`, or in the target folder when none
    /// is given.
    pub fn upload_document(
        &self,
        session: &Session,
        upload: &DocumentUpload,
        folder: Option<&FolderRef>,
    ) -> SdmsResult<Value> {
        let target = match folder {
            Some(f) => f.clone(),
            None => FolderRef::from(self.target_folder()),
        };
        let folder_id = self.get_folder_id(session, &target)?;
        debug!(
            "uploading {} ({} bytes) to folder {folder_id}",
            upload.origfilename,
            upload.content.len()
        );

        let form = multipart_form(&upload.params(), &upload.origfilename, upload.content.clone());
        self.post_multipart(session, "/folder/:id/document", &PathArgs::id(folder_id), form)?
            .ok()?
            .decode_data()
    }

    /// Create a document by sending its content as the raw request body.
    pub fn upload_document_put(
        &self,
        session: &Session,
        folder_id: u64,
        name: &str,
        content: Vec<u8>,
    ) -> SdmsResult<Value> {
        let params = Params::new().with("name", name).with("origfilename", name);
        self.put_raw(session, "/folder/:id/document", &PathArgs::id(folder_id), &params, content)?
            .ok()?
            .decode_data()
    }

    pub fn move_folder(&self, session: &Session, id: u64, parent_id: u64) -> SdmsResult<Value> {
        self.call(
            session,
            Method::POST,
            "/folder/:id/move/:folderid",
            &PathArgs::id(id).with("folderid", parent_id),
            &Params::new(),
        )
    }

    pub fn clear_folder_access_list(&self, session: &Session, id: u64) -> SdmsResult<Value> {
        self.call(
            session,
            Method::PUT,
            "/folder/:id/access/clear",
            &PathArgs::id(id),
            &Params::new(),
        )
    }

    pub fn add_group_access_to_folder(
        &self,
        session: &Session,
        id: u64,
        group_id: u64,
        mode: AccessMode,
    ) -> SdmsResult<Value> {
        self.call(
            session,
            Method::PUT,
            "/folder/:id/access/group/add",
            &PathArgs::id(id),
            &Params::new().with("id", group_id).with("mode", mode.as_str()),
        )
    }

    pub fn remove_group_access_from_folder(
        &self,
        session: &Session,
        id: u64,
        group_id: u64,
    ) -> SdmsResult<Value> {
        self.call(
            session,
            Method::PUT,
            "/folder/:id/access/group/remove",
            &PathArgs::id(id),
            &Params::new().with("id", group_id),
        )
    }

    pub fn add_user_access_to_folder(
        &self,
        session: &Session,
        id: u64,
        user_id: u64,
        mode: AccessMode,
    ) -> SdmsResult<Value> {
        self.call(
            session,
            Method::PUT,
            "/folder/:id/access/user/add",
            &PathArgs::id(id),
            &Params::new().with("id", user_id).with("mode", mode.as_str()),
        )
    }

    pub fn remove_user_access_from_folder(
        &self,
        session: &Session,
        id: u64,
        user_id: u64,
    ) -> SdmsResult<Value> {
        self.call(
            session,
            Method::PUT,
            "/folder/:id/access/user/remove",
            &PathArgs::id(id),
            &Params::new().with("id", user_id),
        )
    }

    pub fn set_folder_inherits_access(&self, session: &Session, id: u64, enable: bool) -> SdmsResult<Value> {
        self.call(
            session,
            Method::PUT,
            "/folder/:id/setInherit",
            &PathArgs::id(id),
            &Params::new().with("enable", enable),
        )
    }

    /// Delete a folder given by id or name.
    pub fn delete_folder(&self, session: &Session, folder: &FolderRef) -> SdmsResult<Value> {
        let id = self.get_folder_id(session, folder)?;
        self.call(session, Method::DELETE, "/folder/:id", &PathArgs::id(id), &Params::new())
    }
}

fn sorted_ids(children: &[DmsObject], keep: impl Fn(&DmsObject) -> bool) -> Vec<u64> {
    let mut ids: Vec<u64> = children
        .iter()
        .filter(|o| keep(*o))
        .filter_map(DmsObject::id)
        .collect();
    ids.sort_unstable();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::coerce_params;

    #[test]
    fn test_access_mode_strings() {
        assert_eq!(AccessMode::Read.as_str(), "read");
        assert_eq!(AccessMode::ReadWrite.to_string(), "readwrite");
        assert_eq!("ALL".parse::<AccessMode>().unwrap(), AccessMode::All);
        assert!("write".parse::<AccessMode>().is_err());
    }

    #[test]
    fn test_sorted_ids_by_kind() {
        let children: Vec<DmsObject> = serde_json::from_value(serde_json::json!([
            {"id": 9, "name": "b.pdf", "type": "document"},
            {"id": 4, "name": "2014", "type": "folder"},
            {"id": 3, "name": "a.pdf", "type": "document"},
            {"id": 27, "name": "2015", "type": "folder"}
        ]))
        .unwrap();
        assert_eq!(sorted_ids(&children, |o| matches!(o, DmsObject::Document(_))), vec![3, 9]);
        assert_eq!(sorted_ids(&children, |o| matches!(o, DmsObject::Folder(_))), vec![4, 27]);
    }

    #[test]
    fn test_upload_name_defaults_to_file_name() {
        let upload = DocumentUpload {
            origfilename: "report.pdf".into(),
            ..DocumentUpload::default()
        };
        let flat = coerce_params(&upload.params());
        assert_eq!(flat["name"], "report.pdf");
        assert_eq!(flat["origfilename"], "report.pdf");
    }
}
