//! User administration commands.

use clap::Subcommand;
use console::style;
use dialoguer::Password;

use sdms_api::NewUser;
use sdms_core::config::AppConfig;
use sdms_core::error::{SdmsError, SdmsResult};

use super::{new_table, print_json, print_ok, resolve_user, with_session};
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum UsersAction {
    /// List all users.
    List,
    /// Show one user.
    Show {
        /// User id or login.
        user: String,
    },
    /// Create a user.
    Create {
        /// Login name.
        login: String,
        /// Full name.
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        /// Role (admin, user or guest).
        #[arg(long, default_value = "guest")]
        role: String,
        #[arg(long, default_value = "")]
        comment: String,
        /// Password (prompted for when omitted).
        #[arg(long)]
        password: Option<String>,
    },
    /// Disable a user account.
    Disable {
        /// User id or login.
        user: String,
    },
    /// Enable a user account.
    Enable {
        /// User id or login.
        user: String,
    },
    /// Change a user's password.
    Passwd {
        /// User id or login.
        user: String,
        /// New password (prompted for when omitted).
        #[arg(long)]
        password: Option<String>,
    },
    /// Delete a user.
    Delete {
        /// User id or login.
        user: String,
    },
}

pub fn run(config: &AppConfig, action: UsersAction, format: OutputFormat) -> SdmsResult<()> {
    // Prompt before logging in so the session is not held open.
    let action = match action {
        UsersAction::Create {
            login,
            name,
            email,
            role,
            comment,
            password: None,
        } => {
            let password = prompt_password(&login)?;
            UsersAction::Create { login, name, email, role, comment, password: Some(password) }
        }
        UsersAction::Passwd { user, password: None } => {
            let password = prompt_password(&user)?;
            UsersAction::Passwd { user, password: Some(password) }
        }
        other => other,
    };

    with_session(config, |api, session| {
        match action {
            UsersAction::List => {
                let users = api.get_users(session)?;
                match format {
                    OutputFormat::Json => print_json(&users),
                    OutputFormat::Text => {
                        let mut table = new_table(vec!["ID", "Login", "Name", "Email", "Role", "Status"]);
                        for u in &users {
                            table.add_row(vec![
                                u.id.to_string(),
                                u.login.clone(),
                                u.name.clone(),
                                u.email.clone().unwrap_or_else(|| "-".into()),
                                u.role.clone().unwrap_or_else(|| "-".into()),
                                if u.disabled { "disabled".to_string() } else { "active".to_string() },
                            ]);
                        }
                        println!("{table}");
                        println!("\n{} user(s)", users.len());
                    }
                }
            }
            UsersAction::Show { user } => {
                let id = resolve_user(api, session, &user)?;
                let user = api.get_user_by_id(session, id)?;
                match format {
                    OutputFormat::Json => print_json(&user),
                    OutputFormat::Text => {
                        println!("{} ({})", style(user.display_name()).bold(), user.login);
                        println!("  id:    {}", user.id);
                        println!("  email: {}", user.email.as_deref().unwrap_or("-"));
                        println!("  role:  {}", user.role.as_deref().unwrap_or("-"));
                        if user.disabled {
                            println!("  {}", style("disabled").red());
                        }
                    }
                }
            }
            UsersAction::Create {
                login,
                name,
                email,
                role,
                comment,
                password,
            } => {
                let new_user = NewUser::new(&login, password.as_deref().unwrap_or_default())
                    .name(&name)
                    .email(&email)
                    .role(&role)
                    .comment(&comment);
                let data = api.create_user(session, &new_user)?;
                match format {
                    OutputFormat::Json => print_json(&data),
                    OutputFormat::Text => print_ok(&format!("created user {login}")),
                }
            }
            UsersAction::Disable { user } => {
                let id = resolve_user(api, session, &user)?;
                let data = api.set_disabled_user(session, id)?;
                match format {
                    OutputFormat::Json => print_json(&data),
                    OutputFormat::Text => print_ok(&format!("disabled user {user}")),
                }
            }
            UsersAction::Enable { user } => {
                let id = resolve_user(api, session, &user)?;
                let data = api.set_enabled_user(session, id)?;
                match format {
                    OutputFormat::Json => print_json(&data),
                    OutputFormat::Text => print_ok(&format!("enabled user {user}")),
                }
            }
            UsersAction::Passwd { user, password } => {
                let id = resolve_user(api, session, &user)?;
                let data = api.change_user_password(session, id, password.as_deref().unwrap_or_default())?;
                match format {
                    OutputFormat::Json => print_json(&data),
                    OutputFormat::Text => print_ok(&format!("changed password of {user}")),
                }
            }
            UsersAction::Delete { user } => {
                let id = resolve_user(api, session, &user)?;
                let data = api.delete_user(session, id)?;
                match format {
                    OutputFormat::Json => print_json(&data),
                    OutputFormat::Text => print_ok(&format!("deleted user {user}")),
                }
            }
        }
        Ok(())
    })
}

fn prompt_password(user: &str) -> SdmsResult<String> {
    Password::new()
        .with_prompt(format!("New password for {user}"))
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()
        .map_err(|e| SdmsError::Config(format!("password prompt failed: {e}")))
}
