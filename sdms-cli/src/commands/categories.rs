//! Category commands.

use clap::Subcommand;

use sdms_api::{ApiClient, Session};
use sdms_core::config::AppConfig;
use sdms_core::error::SdmsResult;

use super::{new_table, print_json, print_ok, with_session};
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum CategoriesAction {
    /// List all categories.
    List,
    /// Show one category.
    Show {
        /// Category id or name.
        category: String,
    },
    /// Create a category.
    Create {
        name: String,
    },
    /// Rename a category.
    Rename {
        /// Category id or name.
        category: String,
        /// New name.
        name: String,
    },
    /// Delete a category.
    Delete {
        /// Category id or name.
        category: String,
    },
}

pub fn run(config: &AppConfig, action: CategoriesAction, format: OutputFormat) -> SdmsResult<()> {
    with_session(config, |api, session| {
        match action {
            CategoriesAction::List => {
                let categories = api.get_categories(session)?;
                match format {
                    OutputFormat::Json => print_json(&categories),
                    OutputFormat::Text => {
                        if categories.is_empty() {
                            println!("No categories.");
                        } else {
                            let mut table = new_table(vec!["ID", "Name"]);
                            for c in &categories {
                                table.add_row(vec![c.id.to_string(), c.name.clone()]);
                            }
                            println!("{table}");
                        }
                    }
                }
            }
            CategoriesAction::Show { category } => {
                let id = resolve_category(api, session, &category)?;
                let category = api.get_category(session, id)?;
                match format {
                    OutputFormat::Json => print_json(&category),
                    OutputFormat::Text => println!("{}  {}", category.id, category.name),
                }
            }
            CategoriesAction::Create { name } => {
                let data = api.create_category(session, &name)?;
                match format {
                    OutputFormat::Json => print_json(&data),
                    OutputFormat::Text => print_ok(&format!("created category {name}")),
                }
            }
            CategoriesAction::Rename { category, name } => {
                let id = resolve_category(api, session, &category)?;
                let data = api.change_category_name(session, id, &name)?;
                match format {
                    OutputFormat::Json => print_json(&data),
                    OutputFormat::Text => print_ok(&format!("renamed category {id} to {name}")),
                }
            }
            CategoriesAction::Delete { category } => {
                let id = resolve_category(api, session, &category)?;
                let data = api.delete_category(session, id)?;
                match format {
                    OutputFormat::Json => print_json(&data),
                    OutputFormat::Text => print_ok(&format!("deleted category {id}")),
                }
            }
        }
        Ok(())
    })
}

fn resolve_category(api: &ApiClient, session: &Session, category: &str) -> SdmsResult<u64> {
    match category.trim().parse::<u64>() {
        Ok(id) => Ok(id),
        Err(_) => api.lookup_category_id(session, category.trim()),
    }
}
