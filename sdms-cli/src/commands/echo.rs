//! Echo command.

use sdms_core::config::AppConfig;
use sdms_core::error::SdmsResult;

use super::{print_json, with_session};
use crate::OutputFormat;

pub fn run(config: &AppConfig, text: &str, format: OutputFormat) -> SdmsResult<()> {
    let reply = with_session(config, |api, session| api.echo(session, text))?;

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({ "echo": reply })),
        OutputFormat::Text => println!("{reply}"),
    }
    Ok(())
}
