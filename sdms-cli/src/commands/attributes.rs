//! Attribute definition commands.

use clap::Subcommand;

use sdms_core::config::AppConfig;
use sdms_core::error::SdmsResult;

use super::{new_table, print_json, print_ok, with_session};
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum AttributesAction {
    /// List attribute definitions.
    List,
    /// Rename an attribute definition.
    Rename {
        id: u64,
        name: String,
    },
}

pub fn run(config: &AppConfig, action: AttributesAction, format: OutputFormat) -> SdmsResult<()> {
    with_session(config, |api, session| {
        match action {
            AttributesAction::List => {
                let defs = api.get_attribute_definitions(session)?;
                match format {
                    OutputFormat::Json => print_json(&defs),
                    OutputFormat::Text => {
                        if defs.is_empty() {
                            println!("No attribute definitions.");
                        } else {
                            let mut table = new_table(vec!["ID", "Name", "Object type", "Type", "Multiple"]);
                            for d in &defs {
                                table.add_row(vec![
                                    d.id.to_string(),
                                    d.name.clone(),
                                    d.objtype.to_string(),
                                    d.value_type.to_string(),
                                    if d.multiple { "yes".to_string() } else { "no".to_string() },
                                ]);
                            }
                            println!("{table}");
                        }
                    }
                }
            }
            AttributesAction::Rename { id, name } => {
                let data = api.change_attribute_definition_name(session, id, &name)?;
                match format {
                    OutputFormat::Json => print_json(&data),
                    OutputFormat::Text => print_ok(&format!("renamed attribute {id} to {name}")),
                }
            }
        }
        Ok(())
    })
}
