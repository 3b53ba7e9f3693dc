//! Folder commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;

use sdms_api::{AccessMode, ApiClient, DocumentUpload, Session};
use sdms_core::config::AppConfig;
use sdms_core::error::{SdmsError, SdmsResult};
use sdms_models::{FolderRef, GroupRef};

use super::{print_json, print_objects, print_ok, resolve_user, with_session};
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum FoldersAction {
    /// Show a folder (the root folder when none is given).
    Show {
        /// Folder id or name.
        folder: Option<String>,
        /// Parent folder id, to disambiguate a name.
        #[arg(long)]
        parent: Option<u64>,
    },
    /// List the documents and subfolders of a folder.
    Children {
        /// Folder id or name.
        folder: String,
        /// Print only the sorted ids of the documents.
        #[arg(long, conflicts_with = "folder_ids")]
        document_ids: bool,
        /// Print only the sorted ids of the subfolders.
        #[arg(long)]
        folder_ids: bool,
    },
    /// Show the path from the root to a folder.
    Path {
        /// Folder id or name.
        folder: String,
    },
    /// Show the parent of a folder.
    Parent {
        /// Folder id or name.
        folder: String,
    },
    /// Create a subfolder.
    Create {
        /// Parent folder id or name.
        parent: String,
        /// Name of the new folder.
        name: String,
        #[arg(long, default_value = "")]
        comment: String,
    },
    /// Move a folder below another folder.
    Move {
        /// Folder id or name.
        folder: String,
        /// New parent folder id or name.
        parent: String,
    },
    /// Delete a folder.
    Delete {
        /// Folder id or name.
        folder: String,
    },
    /// Upload a file as a new document.
    Upload {
        file: PathBuf,
        /// Target folder id or name (defaults to the configured target folder).
        #[arg(long)]
        folder: Option<String>,
        /// Document name (defaults to the file name).
        #[arg(long)]
        name: Option<String>,
        #[arg(long, default_value = "")]
        keywords: String,
        #[arg(long, default_value = "")]
        comment: String,
        /// Send the file as a raw PUT body instead of a multipart form.
        #[arg(long)]
        put: bool,
    },
    /// Grant a user or group access to a folder.
    Grant {
        /// Folder id or name.
        folder: String,
        #[command(flatten)]
        who: Grantee,
        /// Access mode: read, readwrite or all.
        #[arg(long, default_value = "read")]
        mode: AccessMode,
    },
    /// Revoke a user's or group's access to a folder.
    Revoke {
        /// Folder id or name.
        folder: String,
        #[command(flatten)]
        who: Grantee,
    },
    /// Remove every access entry of a folder.
    ClearAccess {
        /// Folder id or name.
        folder: String,
    },
    /// Turn access inheritance from the parent on or off.
    Inherit {
        /// Folder id or name.
        folder: String,
        #[arg(action = clap::ArgAction::Set)]
        enable: bool,
    },
}

/// Either a user or a group.
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct Grantee {
    /// User id or login.
    #[arg(long)]
    user: Option<String>,
    /// Group id or name.
    #[arg(long)]
    group: Option<String>,
}

pub fn run(config: &AppConfig, action: FoldersAction, format: OutputFormat) -> SdmsResult<()> {
    with_session(config, |api, session| {
        match action {
            FoldersAction::Show { folder, parent } => {
                let folder_ref = folder.map(FolderRef::from);
                let folder = api.get_folder(session, folder_ref.as_ref(), parent)?;
                match format {
                    OutputFormat::Json => print_json(&folder),
                    OutputFormat::Text => {
                        println!("{} (#{})", style(&folder.name).bold(), folder.id);
                        if !folder.comment.is_empty() {
                            println!("  comment: {}", folder.comment);
                        }
                        println!("  date:    {}", folder.date.as_deref().unwrap_or("-"));
                        for attr in &folder.attributes {
                            println!(
                                "  attr {}: {}",
                                attr.name.as_deref().unwrap_or(&attr.id.to_string()),
                                attr.value
                            );
                        }
                    }
                }
            }
            FoldersAction::Children {
                folder,
                document_ids,
                folder_ids,
            } => {
                let id = folder_id(api, session, folder)?;
                if document_ids || folder_ids {
                    let ids = if document_ids {
                        api.get_folder_document_ids(session, id)?
                    } else {
                        api.get_folder_folder_ids(session, id)?
                    };
                    match format {
                        OutputFormat::Json => print_json(&ids),
                        OutputFormat::Text => {
                            for id in ids {
                                println!("{id}");
                            }
                        }
                    }
                } else {
                    let children = api.get_folder_children(session, id)?;
                    match format {
                        OutputFormat::Json => print_json(&children),
                        OutputFormat::Text => print_objects(&children, "Folder is empty."),
                    }
                }
            }
            FoldersAction::Path { folder } => {
                let id = folder_id(api, session, folder)?;
                match format {
                    OutputFormat::Json => print_json(&api.get_folder_path(session, id)?),
                    OutputFormat::Text => println!("{}", api.get_folder_path_str(session, id)?),
                }
            }
            FoldersAction::Parent { folder } => {
                let id = folder_id(api, session, folder)?;
                let parent = api.get_folder_parent(session, id)?;
                match format {
                    OutputFormat::Json => print_json(&parent),
                    OutputFormat::Text => println!("{}  {}", parent.id, parent.name),
                }
            }
            FoldersAction::Create {
                parent,
                name,
                comment,
            } => {
                let parent_id = folder_id(api, session, parent)?;
                let created = api.create_folder(session, parent_id, &name, &comment)?;
                match format {
                    OutputFormat::Json => print_json(&created),
                    OutputFormat::Text => {
                        print_ok(&format!("created folder {} (#{})", created.name, created.id))
                    }
                }
            }
            FoldersAction::Move { folder, parent } => {
                let id = folder_id(api, session, folder)?;
                let parent_id = folder_id(api, session, parent)?;
                let data = api.move_folder(session, id, parent_id)?;
                match format {
                    OutputFormat::Json => print_json(&data),
                    OutputFormat::Text => {
                        print_ok(&format!("moved folder {id} below folder {parent_id}"))
                    }
                }
            }
            FoldersAction::Delete { folder } => {
                let data = api.delete_folder(session, &FolderRef::from(folder.as_str()))?;
                match format {
                    OutputFormat::Json => print_json(&data),
                    OutputFormat::Text => print_ok(&format!("deleted folder {folder}")),
                }
            }
            FoldersAction::Upload {
                file,
                folder,
                name,
                keywords,
                comment,
                put,
            } => {
                let mut upload = DocumentUpload::from_path(&file)?;
                if let Some(name) = name {
                    upload.name = name;
                }
                upload.keywords = keywords;
                upload.comment = comment;

                let data = if put {
                    let target = folder.unwrap_or_else(|| api.target_folder().to_string());
                    let id = folder_id(api, session, target)?;
                    api.upload_document_put(session, id, &upload.name, upload.content.clone())?
                } else {
                    let folder_ref = folder.map(FolderRef::from);
                    api.upload_document(session, &upload, folder_ref.as_ref())?
                };
                match format {
                    OutputFormat::Json => print_json(&data),
                    OutputFormat::Text => print_ok(&format!("uploaded {}", upload.name)),
                }
            }
            FoldersAction::Grant { folder, who, mode } => {
                let id = folder_id(api, session, folder)?;
                let data = match (who.user, who.group) {
                    (Some(user), _) => {
                        let user_id = resolve_user(api, session, &user)?;
                        api.add_user_access_to_folder(session, id, user_id, mode)?
                    }
                    (None, Some(group)) => {
                        let group_id = api.get_group(session, &GroupRef::from(group.as_str()))?.id;
                        api.add_group_access_to_folder(session, id, group_id, mode)?
                    }
                    (None, None) => return Err(no_grantee()),
                };
                match format {
                    OutputFormat::Json => print_json(&data),
                    OutputFormat::Text => print_ok(&format!("granted {mode} access to folder {id}")),
                }
            }
            FoldersAction::Revoke { folder, who } => {
                let id = folder_id(api, session, folder)?;
                let data = match (who.user, who.group) {
                    (Some(user), _) => {
                        let user_id = resolve_user(api, session, &user)?;
                        api.remove_user_access_from_folder(session, id, user_id)?
                    }
                    (None, Some(group)) => {
                        let group_id = api.get_group(session, &GroupRef::from(group.as_str()))?.id;
                        api.remove_group_access_from_folder(session, id, group_id)?
                    }
                    (None, None) => return Err(no_grantee()),
                };
                match format {
                    OutputFormat::Json => print_json(&data),
                    OutputFormat::Text => print_ok(&format!("revoked access to folder {id}")),
                }
            }
            FoldersAction::ClearAccess { folder } => {
                let id = folder_id(api, session, folder)?;
                let data = api.clear_folder_access_list(session, id)?;
                match format {
                    OutputFormat::Json => print_json(&data),
                    OutputFormat::Text => print_ok(&format!("cleared access list of folder {id}")),
                }
            }
            FoldersAction::Inherit { folder, enable } => {
                let id = folder_id(api, session, folder)?;
                let data = api.set_folder_inherits_access(session, id, enable)?;
                match format {
                    OutputFormat::Json => print_json(&data),
                    OutputFormat::Text => {
                        let state = if enable { "on" } else { "off" };
                        print_ok(&format!("access inheritance {state} for folder {id}"))
                    }
                }
            }
        }
        Ok(())
    })
}

fn folder_id(api: &ApiClient, session: &Session, folder: String) -> SdmsResult<u64> {
    api.get_folder_id(session, &FolderRef::from(folder))
}

fn no_grantee() -> SdmsError {
    SdmsError::InvalidArgument("either --user or --group is required".into())
}
