//! SeedDMS CLI - command-line client for the SeedDMS REST API.
//!
//! Every command logs in with the configured credentials, performs its
//! calls and logs out again.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use sdms_core::config::AppConfig;
use sdms_core::error::SdmsResult;
use sdms_core::logging;
use sdms_core::platform::Platform;

/// SeedDMS - document management from the terminal.
#[derive(Parser)]
#[command(
    name = "seeddms",
    version,
    about = "SeedDMS REST API client",
    long_about = "A command-line client for the SeedDMS document management system.\n\
                  Connection settings come from ~/.seeddms-cli.toml and SEEDDMS_* environment variables."
)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json).
    #[arg(short = 'f', long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output for scripting.
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or write the configuration file.
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Ask the server to echo a message back.
    Echo {
        /// Text to send.
        text: String,
    },
    /// The logged-in account.
    Account {
        #[command(subcommand)]
        action: commands::account::AccountAction,
    },
    /// Attribute definitions.
    Attributes {
        #[command(subcommand)]
        action: commands::attributes::AttributesAction,
    },
    /// Document categories.
    Categories {
        #[command(subcommand)]
        action: commands::categories::CategoriesAction,
    },
    /// Documents.
    Documents {
        #[command(subcommand)]
        action: commands::documents::DocumentsAction,
    },
    /// Folders, uploads and folder access.
    Folders {
        #[command(subcommand)]
        action: commands::folders::FoldersAction,
    },
    /// User groups.
    Groups {
        #[command(subcommand)]
        action: commands::groups::GroupsAction,
    },
    /// User administration.
    Users {
        #[command(subcommand)]
        action: commands::users::UsersAction,
    },
    /// Search documents and folders.
    Search {
        /// Full-text query.
        #[arg(required_unless_present = "attr")]
        query: Option<String>,
        /// Search by attribute instead, as NAME=VALUE.
        #[arg(long, value_parser = commands::search::parse_attr, conflicts_with_all = ["query", "mode"])]
        attr: Option<(String, String)>,
        /// Maximum number of hits.
        #[arg(short = 'n', long)]
        limit: Option<u32>,
        /// Search mode (e.g. typeahead).
        #[arg(long)]
        mode: Option<String>,
    },
}

fn main() -> SdmsResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_path = match cli.config {
        Some(path) => path,
        None => Platform::default_config_path()?,
    };
    let mut config = AppConfig::load_or_default(&config_path)?;
    config.apply_env_overrides();

    // Initialize logging
    let log_dir = config
        .effective_log_dir()
        .unwrap_or_else(|_| PathBuf::from("logs"));
    let level_override = cli.verbose.then_some("debug");
    let _guard = logging::init_logging(&config.logging, &log_dir, level_override)?;

    info!("SeedDMS CLI v{}", sdms_core::constants::APP_VERSION);

    // Dispatch to command handlers
    match cli.command {
        Commands::Config { action } => {
            commands::config::run(&config, &config_path, action, cli.format)
        }
        Commands::Echo { text } => commands::echo::run(&config, &text, cli.format),
        Commands::Account { action } => commands::account::run(&config, action, cli.format),
        Commands::Attributes { action } => {
            commands::attributes::run(&config, action, cli.format)
        }
        Commands::Categories { action } => {
            commands::categories::run(&config, action, cli.format)
        }
        Commands::Documents { action } => {
            commands::documents::run(&config, action, cli.format)
        }
        Commands::Folders { action } => commands::folders::run(&config, action, cli.format),
        Commands::Groups { action } => commands::groups::run(&config, action, cli.format),
        Commands::Users { action } => commands::users::run(&config, action, cli.format),
        Commands::Search { query, attr, limit, mode } => {
            commands::search::run(&config, query, attr, limit, mode, cli.format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_grant_needs_exactly_one_grantee() {
        assert!(Cli::try_parse_from(["seeddms", "folders", "grant", "2"]).is_err());
        assert!(Cli::try_parse_from([
            "seeddms", "folders", "grant", "2", "--user", "tangaroa", "--group", "aotearoa"
        ])
        .is_err());
        assert!(Cli::try_parse_from(["seeddms", "folders", "grant", "2", "--user", "tangaroa"]).is_ok());
        assert!(Cli::try_parse_from(["seeddms", "folders", "revoke", "2"]).is_err());
        assert!(Cli::try_parse_from(["seeddms", "folders", "revoke", "2", "--group", "aotearoa"]).is_ok());
    }

    #[test]
    fn test_search_attr_must_be_name_value() {
        assert!(Cli::try_parse_from(["seeddms", "search", "--attr", "novalue"]).is_err());
        let cli = Cli::try_parse_from(["seeddms", "search", "--attr", "iwi=Ngāti Porou"]).unwrap();
        match cli.command {
            Commands::Search { attr, query, .. } => {
                assert_eq!(attr, Some(("iwi".to_string(), "Ngāti Porou".to_string())));
                assert!(query.is_none());
            }
            _ => panic!("expected search"),
        }
    }
}
