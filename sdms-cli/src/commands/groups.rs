//! Group commands.

use clap::Subcommand;
use console::style;

use sdms_core::config::AppConfig;
use sdms_core::error::SdmsResult;
use sdms_models::GroupRef;

use super::{new_table, print_json, print_ok, resolve_user, with_session};
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum GroupsAction {
    /// List all groups.
    List,
    /// Show a group and its members.
    Show {
        /// Group id or name.
        group: String,
    },
    /// Create a group.
    Create {
        name: String,
        #[arg(long, default_value = "")]
        comment: String,
    },
    /// Add a user to a group.
    AddUser {
        /// Group id or name.
        group: String,
        /// User id or login.
        user: String,
    },
    /// Remove a user from a group.
    RemoveUser {
        /// Group id or name.
        group: String,
        /// User id or login.
        user: String,
    },
}

pub fn run(config: &AppConfig, action: GroupsAction, format: OutputFormat) -> SdmsResult<()> {
    with_session(config, |api, session| {
        match action {
            GroupsAction::List => {
                let groups = api.get_groups(session)?;
                match format {
                    OutputFormat::Json => print_json(&groups),
                    OutputFormat::Text => {
                        if groups.is_empty() {
                            println!("No groups.");
                        } else {
                            let mut table = new_table(vec!["ID", "Name", "Comment"]);
                            for g in &groups {
                                table.add_row(vec![g.id.to_string(), g.name.clone(), g.comment.clone()]);
                            }
                            println!("{table}");
                        }
                    }
                }
            }
            GroupsAction::Show { group } => {
                let group = api.get_group(session, &GroupRef::from(group))?;
                match format {
                    OutputFormat::Json => print_json(&group),
                    OutputFormat::Text => {
                        println!("{} (#{})", style(&group.name).bold(), group.id);
                        if !group.comment.is_empty() {
                            println!("  {}", group.comment);
                        }
                        if group.users.is_empty() {
                            println!("  no members");
                        } else {
                            let mut table = new_table(vec!["ID", "Login", "Name"]);
                            for u in &group.users {
                                table.add_row(vec![u.id.to_string(), u.login.clone(), u.name.clone()]);
                            }
                            println!("{table}");
                        }
                    }
                }
            }
            GroupsAction::Create { name, comment } => {
                let data = api.create_group(session, &name, &comment)?;
                match format {
                    OutputFormat::Json => print_json(&data),
                    OutputFormat::Text => print_ok(&format!("created group {name}")),
                }
            }
            GroupsAction::AddUser { group, user } => {
                let user_id = resolve_user(api, session, &user)?;
                let data = api.add_user_to_group(session, &GroupRef::from(group.as_str()), user_id)?;
                match format {
                    OutputFormat::Json => print_json(&data),
                    OutputFormat::Text => print_ok(&format!("added {user} to {group}")),
                }
            }
            GroupsAction::RemoveUser { group, user } => {
                let user_id = resolve_user(api, session, &user)?;
                let group_id = match GroupRef::from(group.as_str()) {
                    GroupRef::Id(id) => id,
                    name => api.get_group(session, &name)?.id,
                };
                let data = api.remove_user_from_group(session, group_id, user_id)?;
                match format {
                    OutputFormat::Json => print_json(&data),
                    OutputFormat::Text => print_ok(&format!("removed {user} from {group}")),
                }
            }
        }
        Ok(())
    })
}
