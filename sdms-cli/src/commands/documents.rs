//! Document commands.

use std::path::PathBuf;

use clap::Subcommand;
use console::style;

use sdms_api::DocumentAttachment;
use sdms_core::config::AppConfig;
use sdms_core::error::SdmsResult;
use sdms_models::FolderRef;

use super::{format_bytes, new_table, print_json, print_ok, print_value_rows, with_session};
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum DocumentsAction {
    /// Show document details.
    Show {
        id: u64,
    },
    /// Download the latest content of a document.
    Content {
        id: u64,
        /// Output file (defaults to the document name).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Download a specific version of a document.
    Version {
        id: u64,
        version: u64,
        /// Output file (defaults to the document name).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the versions of a document.
    Versions {
        id: u64,
    },
    /// List the attribute values of a document.
    Attributes {
        id: u64,
    },
    /// Attach a file to a document.
    Attach {
        id: u64,
        file: PathBuf,
        /// Attachment comment.
        #[arg(long, default_value = "")]
        comment: String,
        /// Make the attachment visible to all readers.
        #[arg(long)]
        public: bool,
    },
    /// Move a document to another folder.
    Move {
        id: u64,
        /// Target folder id or name.
        folder: String,
    },
    /// Delete a document.
    Delete {
        id: u64,
    },
}

pub fn run(config: &AppConfig, action: DocumentsAction, format: OutputFormat) -> SdmsResult<()> {
    with_session(config, |api, session| {
        match action {
            DocumentsAction::Show { id } => {
                let doc = api.get_document(session, id)?;
                match format {
                    OutputFormat::Json => print_json(&doc),
                    OutputFormat::Text => {
                        println!("{} (#{})", style(&doc.name).bold(), doc.id);
                        println!("  type:     {}", doc.mimetype.as_deref().unwrap_or("-"));
                        println!(
                            "  size:     {}",
                            doc.size.map(format_bytes).unwrap_or_else(|| "-".into())
                        );
                        println!("  date:     {}", doc.date.as_deref().unwrap_or("-"));
                        if !doc.keywords.is_empty() {
                            println!("  keywords: {}", doc.keywords);
                        }
                        if !doc.comment.is_empty() {
                            println!("  comment:  {}", doc.comment);
                        }
                    }
                }
            }
            DocumentsAction::Content { id, output } => {
                let path = match output {
                    Some(p) => p,
                    None => PathBuf::from(api.get_document(session, id)?.suggested_file_name()),
                };
                let bytes = api.get_document_content(session, id)?;
                save(&path, &bytes, format)?;
            }
            DocumentsAction::Version { id, version, output } => {
                let path = match output {
                    Some(p) => p,
                    None => PathBuf::from(api.get_document(session, id)?.suggested_file_name()),
                };
                let bytes = api.get_document_version(session, id, version)?;
                save(&path, &bytes, format)?;
            }
            DocumentsAction::Versions { id } => {
                let versions = api.get_document_versions(session, id)?;
                match format {
                    OutputFormat::Json => print_json(&versions),
                    OutputFormat::Text => print_value_rows(&versions, "No versions."),
                }
            }
            DocumentsAction::Attributes { id } => {
                let attrs = api.get_document_attributes(session, id)?;
                match format {
                    OutputFormat::Json => print_json(&attrs),
                    OutputFormat::Text => {
                        if attrs.is_empty() {
                            println!("No attributes.");
                        } else {
                            let mut table = new_table(vec!["ID", "Name", "Value"]);
                            for a in &attrs {
                                table.add_row(vec![
                                    a.id.to_string(),
                                    a.name.clone().unwrap_or_else(|| "-".into()),
                                    a.value.clone(),
                                ]);
                            }
                            println!("{table}");
                        }
                    }
                }
            }
            DocumentsAction::Attach {
                id,
                file,
                comment,
                public,
            } => {
                let mut attachment = DocumentAttachment::from_path(&file)?;
                attachment.comment = comment;
                attachment.public = public;
                let data = api.upload_document_file(session, id, &attachment)?;
                match format {
                    OutputFormat::Json => print_json(&data),
                    OutputFormat::Text => print_ok(&format!(
                        "attached {} to document {id}",
                        attachment.origfilename
                    )),
                }
            }
            DocumentsAction::Move { id, folder } => {
                let folder_id = api.get_folder_id(session, &FolderRef::from(folder))?;
                let data = api.move_document(session, id, folder_id)?;
                match format {
                    OutputFormat::Json => print_json(&data),
                    OutputFormat::Text => {
                        print_ok(&format!("moved document {id} to folder {folder_id}"))
                    }
                }
            }
            DocumentsAction::Delete { id } => {
                let data = api.delete_document(session, id)?;
                match format {
                    OutputFormat::Json => print_json(&data),
                    OutputFormat::Text => print_ok(&format!("deleted document {id}")),
                }
            }
        }
        Ok(())
    })
}

fn save(path: &std::path::Path, bytes: &[u8], format: OutputFormat) -> SdmsResult<()> {
    std::fs::write(path, bytes)?;
    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "path": path.display().to_string(),
            "bytes": bytes.len(),
        })),
        OutputFormat::Text => print_ok(&format!(
            "saved {} ({})",
            path.display(),
            format_bytes(bytes.len() as u64)
        )),
    }
    Ok(())
}
