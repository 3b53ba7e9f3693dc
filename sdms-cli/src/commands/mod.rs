//! CLI command implementations.

pub mod account;
pub mod attributes;
pub mod categories;
pub mod config;
pub mod documents;
pub mod echo;
pub mod folders;
pub mod groups;
pub mod search;
pub mod users;

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use console::style;
use serde::Serialize;
use tracing::warn;

use sdms_api::{ApiClient, Session};
use sdms_core::config::AppConfig;
use sdms_core::error::{SdmsError, SdmsResult};
use sdms_models::DmsObject;

/// Helper to create an API client from config.
pub fn create_api_client(config: &AppConfig) -> SdmsResult<ApiClient> {
    Ok(ApiClient::new(&config.http)?.with_target_folder(&config.main.targetfolder))
}

/// Log in, run `f`, and log out again.
///
/// A failed logout is an error unless `f` already failed, in which case
/// that first error is returned and the logout failure is logged.
pub fn with_session<T, F>(config: &AppConfig, f: F) -> SdmsResult<T>
where
    F: FnOnce(&ApiClient, &Session) -> SdmsResult<T>,
{
    if !config.is_configured() {
        return Err(SdmsError::MissingConfig(
            "baseurl and username are required; run `seeddms config init`".into(),
        ));
    }

    let api = create_api_client(config)?;
    let mut session = api.login(
        &config.main.baseurl,
        &config.main.username,
        &config.main.password,
    )?;

    let result = f(&api, &session);
    let logout = api.logout(&mut session);
    finish_session(result, logout)
}

fn finish_session<T>(result: SdmsResult<T>, logout: SdmsResult<()>) -> SdmsResult<T> {
    match (result, logout) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(e)) => Err(e),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(logout_err)) => {
            warn!("logout failed: {logout_err}");
            Err(e)
        }
    }
}

/// Resolve a user given as numeric id or login name.
pub fn resolve_user(api: &ApiClient, session: &Session, user: &str) -> SdmsResult<u64> {
    match user.trim().parse::<u64>() {
        Ok(id) => Ok(id),
        Err(_) => Ok(api.get_user_by_name(session, user.trim())?.id),
    }
}

/// A table with the house style.
pub fn new_table<I, S>(header: I) -> Table
where
    I: IntoIterator<Item = S>,
    S: Into<comfy_table::Cell>,
{
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Report a successful change.
pub fn print_ok(message: &str) {
    println!("  {} {}", style("OK").green().bold(), message);
}

/// Print a folder listing or search result.
pub fn print_objects(objects: &[DmsObject], empty_message: &str) {
    if objects.is_empty() {
        println!("{empty_message}");
        return;
    }

    let mut table = new_table(vec!["ID", "Type", "Name", "Comment"]);
    for obj in objects {
        let comment = match obj {
            DmsObject::Folder(f) => f.comment.as_str(),
            DmsObject::Document(d) => d.comment.as_str(),
            DmsObject::Other => "",
        };
        table.add_row(vec![
            obj.id().map(|id| id.to_string()).unwrap_or_else(|| "-".into()),
            obj.kind().to_string(),
            obj.name().to_string(),
            truncate(comment, 40),
        ]);
    }
    println!("{table}");
    println!("\n{} item(s)", objects.len());
}

/// Print a JSON value as a two-column table, or a list of them as rows.
pub fn print_value_rows(rows: &[serde_json::Value], empty_message: &str) {
    if rows.is_empty() {
        println!("{empty_message}");
        return;
    }

    let mut columns: Vec<String> = Vec::new();
    for row in rows {
        if let Some(obj) = row.as_object() {
            for key in obj.keys() {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
        }
    }

    let mut table = new_table(columns.iter().map(String::as_str));
    for row in rows {
        table.add_row(columns.iter().map(|c| value_text(row.get(c.as_str()))));
    }
    println!("{table}");
}

fn value_text(value: Option<&serde_json::Value>) -> String {
    match value {
        None | Some(serde_json::Value::Null) => "-".to_string(),
        Some(serde_json::Value::String(s)) => truncate(s, 40),
        Some(other) => truncate(&other.to_string(), 40),
    }
}

/// Format a byte count as a human-readable string.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.2} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}

/// Truncate a string to at most `max_len` characters, appending an
/// ellipsis if truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(5_044_626), "4.8 MB");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("Māori", 10), "Māori");
        assert_eq!(truncate("Grammar of the New Zealand Language", 10), "Grammar...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_logout_failure_is_reported() {
        let logout_err = || {
            Err(SdmsError::Remote {
                status: 500,
                url: "http://dms/restapi/index.php/logout".into(),
                message: "session store unavailable".into(),
            })
        };

        assert_eq!(finish_session(Ok(7), Ok(())).unwrap(), 7);

        let err = finish_session(Ok(7), logout_err()).unwrap_err();
        assert!(matches!(err, SdmsError::Remote { status: 500, .. }));

        // The command's own failure wins over the logout failure.
        let err = finish_session::<u64>(Err(SdmsError::NotFound("user rongo".into())), logout_err())
            .unwrap_err();
        assert!(matches!(err, SdmsError::NotFound(_)));
    }

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(None), "-");
        assert_eq!(value_text(Some(&serde_json::json!(3))), "3");
        assert_eq!(value_text(Some(&serde_json::json!("x"))), "x");
    }
}
