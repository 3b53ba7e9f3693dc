//! Search command.

use sdms_api::{AttrSearchQuery, SearchQuery};
use sdms_core::config::AppConfig;
use sdms_core::error::SdmsResult;

use super::{print_json, print_objects, with_session};
use crate::OutputFormat;

pub fn run(
    config: &AppConfig,
    query: Option<String>,
    attr: Option<(String, String)>,
    limit: Option<u32>,
    mode: Option<String>,
    format: OutputFormat,
) -> SdmsResult<()> {
    let hits = with_session(config, |api, session| match attr {
        Some((name, value)) => api.do_search_by_attr(
            session,
            &AttrSearchQuery { name, value, limit },
        ),
        None => api.do_search(
            session,
            &SearchQuery {
                query: query.unwrap_or_default(),
                limit,
                mode,
            },
        ),
    })?;

    match format {
        OutputFormat::Json => print_json(&hits),
        OutputFormat::Text => print_objects(&hits, "No matches."),
    }
    Ok(())
}

/// Parse `NAME=VALUE` for `--attr`.
pub fn parse_attr(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got `{arg}`")),
    }
}
