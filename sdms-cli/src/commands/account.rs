//! Account commands.

use clap::Subcommand;
use console::style;

use sdms_core::config::AppConfig;
use sdms_core::error::SdmsResult;

use super::{format_bytes, new_table, print_json, print_ok, with_session};
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum AccountAction {
    /// Show the logged-in account.
    Show,
    /// List documents locked by the logged-in user.
    Locked,
    /// Change the account's email address.
    SetEmail {
        email: String,
    },
    /// Change the account's full name.
    SetName {
        name: String,
    },
}

pub fn run(config: &AppConfig, action: AccountAction, format: OutputFormat) -> SdmsResult<()> {
    with_session(config, |api, session| {
        match action {
            AccountAction::Show => {
                let account = api.get_account(session)?;
                match format {
                    OutputFormat::Json => print_json(&account),
                    OutputFormat::Text => {
                        println!(
                            "{} ({})",
                            style(account.display_name()).bold(),
                            account.login
                        );
                        println!("  id:       {}", account.id);
                        println!("  email:    {}", account.email.as_deref().unwrap_or("-"));
                        println!("  role:     {}", account.role.as_deref().unwrap_or("-"));
                        println!("  language: {}", account.language.as_deref().unwrap_or("-"));
                        if account.isadmin {
                            println!("  {}", style("administrator").yellow());
                        }
                    }
                }
            }
            AccountAction::Locked => {
                let docs = api.get_locked_documents(session)?;
                match format {
                    OutputFormat::Json => print_json(&docs),
                    OutputFormat::Text => {
                        if docs.is_empty() {
                            println!("No locked documents.");
                        } else {
                            let mut table = new_table(vec!["ID", "Name", "Type", "Size"]);
                            for d in &docs {
                                table.add_row(vec![
                                    d.id.to_string(),
                                    d.name.clone(),
                                    d.mimetype.clone().unwrap_or_else(|| "-".into()),
                                    d.size.map(format_bytes).unwrap_or_else(|| "-".into()),
                                ]);
                            }
                            println!("{table}");
                        }
                    }
                }
            }
            AccountAction::SetEmail { email } => {
                let data = api.set_email(session, &email)?;
                match format {
                    OutputFormat::Json => print_json(&data),
                    OutputFormat::Text => print_ok(&format!("email set to {email}")),
                }
            }
            AccountAction::SetName { name } => {
                let data = api.set_full_name(session, &name)?;
                match format {
                    OutputFormat::Json => print_json(&data),
                    OutputFormat::Text => print_ok(&format!("full name set to {name}")),
                }
            }
        }
        Ok(())
    })
}
