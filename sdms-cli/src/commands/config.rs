//! Configuration commands.

use std::path::Path;

use clap::Subcommand;
use dialoguer::Password;

use sdms_core::config::AppConfig;
use sdms_core::error::{SdmsError, SdmsResult};

use super::{new_table, print_json, print_ok};
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration.
    Show,
    /// Write the configuration file.
    Init {
        /// URL of the REST API entry point.
        #[arg(long)]
        baseurl: Option<String>,
        /// Login name.
        #[arg(long)]
        username: Option<String>,
        /// Password (prompted for when omitted).
        #[arg(long)]
        password: Option<String>,
        /// Default folder for uploads.
        #[arg(long)]
        targetfolder: Option<String>,
    },
}

pub fn run(config: &AppConfig, path: &Path, action: ConfigAction, format: OutputFormat) -> SdmsResult<()> {
    match action {
        ConfigAction::Show => {
            let mut shown = config.clone();
            shown.main.password = mask(&shown.main.password);

            match format {
                OutputFormat::Json => print_json(&shown),
                OutputFormat::Text => {
                    let rows = [
                        ("file", path.display().to_string()),
                        ("baseurl", shown.main.baseurl.clone()),
                        ("username", shown.main.username.clone()),
                        ("password", shown.main.password.clone()),
                        ("targetfolder", shown.main.targetfolder.clone()),
                        ("log level", shown.logging.level.clone()),
                        ("timeout (ms)", shown.http.timeout_ms.to_string()),
                    ];
                    let mut table = new_table(vec!["Setting", "Value"]);
                    for (key, value) in rows {
                        table.add_row(vec![key.to_string(), value]);
                    }
                    println!("{table}");
                }
            }
        }
        ConfigAction::Init {
            baseurl,
            username,
            password,
            targetfolder,
        } => {
            let mut updated = config.clone();
            if let Some(url) = baseurl {
                updated.main.baseurl = AppConfig::sanitize_baseurl(&url);
            }
            if let Some(user) = username {
                updated.main.username = user;
            }
            if let Some(folder) = targetfolder {
                updated.main.targetfolder = folder;
            }
            updated.main.password = match password {
                Some(p) => p,
                None => Password::new()
                    .with_prompt(format!("Password for {}", updated.main.username))
                    .interact()
                    .map_err(|e| SdmsError::Config(format!("password prompt failed: {e}")))?,
            };

            updated.save_to_file(path)?;
            match format {
                OutputFormat::Json => print_json(&serde_json::json!({
                    "written": path.display().to_string(),
                })),
                OutputFormat::Text => print_ok(&format!("wrote {}", path.display())),
            }
        }
    }

    Ok(())
}

fn mask(password: &str) -> String {
    if password.is_empty() {
        String::new()
    } else {
        "********".to_string()
    }
}
