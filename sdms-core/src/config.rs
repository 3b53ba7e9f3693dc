//! Client configuration management.
//!
//! The configuration is a small section-based TOML file. Connection settings
//! live in the `[main]` section:
//!
//! ```toml
//! [main]
//! baseurl = "http://localhost/seeddms/restapi/index.php"
//! username = "admin"
//! password = "admin"
//! targetfolder = "DMS"
//! ```
//!
//! A missing file means "use the defaults"; an existing file without a
//! `[main]` section is rejected as corrupt.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants;
use crate::error::{SdmsError, SdmsResult};
use crate::platform::Platform;

/// Top-level client configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Connection and credential settings.
    pub main: MainConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// HTTP transport settings.
    #[serde(default)]
    pub http: HttpConfig,
}

/// The `[main]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainConfig {
    /// URL of the REST API entry point.
    #[serde(default = "default_baseurl")]
    pub baseurl: String,

    /// Login name.
    #[serde(default = "default_username")]
    pub username: String,

    /// Plain-text password sent on login.
    #[serde(default = "default_password")]
    pub password: String,

    /// Folder used for uploads when none is given.
    #[serde(default = "default_targetfolder")]
    pub targetfolder: String,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for log files. If empty, uses the platform data directory.
    #[serde(default)]
    pub directory: String,

    /// Write the log file as JSON lines.
    #[serde(default)]
    pub json_output: bool,
}

/// HTTP transport configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in milliseconds.
    #[serde(default = "default_api_timeout")]
    pub timeout_ms: u64,

    /// Accept self-signed or otherwise invalid TLS certificates.
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

/// Shape used while reading so a missing `[main]` can be reported clearly.
#[derive(Deserialize)]
struct RawConfig {
    main: Option<MainConfig>,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    http: HttpConfig,
}

// Default value functions for serde
fn default_baseurl() -> String {
    constants::DEFAULT_BASEURL.to_string()
}

fn default_username() -> String {
    constants::DEFAULT_USERNAME.to_string()
}

fn default_password() -> String {
    constants::DEFAULT_PASSWORD.to_string()
}

fn default_targetfolder() -> String {
    constants::DEFAULT_TARGETFOLDER.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_api_timeout() -> u64 {
    constants::DEFAULT_API_TIMEOUT_MS
}

impl Default for MainConfig {
    fn default() -> Self {
        Self {
            baseurl: default_baseurl(),
            username: default_username(),
            password: default_password(),
            targetfolder: default_targetfolder(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: String::new(),
            json_output: false,
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_api_timeout(),
            accept_invalid_certs: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`, or return defaults if it is absent.
    pub fn load_or_default(path: &Path) -> SdmsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("config file {} not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> SdmsResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let raw: RawConfig = toml::from_str(&contents)?;
        let main = raw.main.ok_or_else(|| {
            SdmsError::Config(format!(
                "incomplete or corrupt configfile {}",
                path.display()
            ))
        })?;
        debug!("loaded config from {}", path.display());
        Ok(Self {
            main,
            logging: raw.logging,
            http: raw.http,
        })
    }

    /// Save configuration to a specific file path.
    pub fn save_to_file(&self, path: &Path) -> SdmsResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| SdmsError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        debug!("wrote config to {}", path.display());
        Ok(())
    }

    /// Override `[main]` values from `SEEDDMS_*` environment variables.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Override `[main]` values from an arbitrary lookup. Empty values are
    /// ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get(constants::env::BASEURL) {
            self.main.baseurl = Self::sanitize_baseurl(&v);
        }
        if let Some(v) = get(constants::env::USERNAME) {
            self.main.username = v;
        }
        if let Some(v) = get(constants::env::PASSWORD) {
            self.main.password = v;
        }
        if let Some(v) = get(constants::env::TARGETFOLDER) {
            self.main.targetfolder = v;
        }
    }

    /// Get the effective log directory, using the configured path or the default.
    pub fn effective_log_dir(&self) -> SdmsResult<PathBuf> {
        if self.logging.directory.is_empty() {
            Ok(Platform::data_dir()?.join("logs"))
        } else {
            Ok(PathBuf::from(&self.logging.directory))
        }
    }

    /// Whether enough is configured to attempt a login.
    pub fn is_configured(&self) -> bool {
        !self.main.baseurl.is_empty() && !self.main.username.is_empty()
    }

    /// Normalize a REST API base URL.
    ///
    /// Strips surrounding whitespace and quotes, adds `http://` when no
    /// scheme is given, and removes trailing slashes.
    pub fn sanitize_baseurl(address: &str) -> String {
        let trimmed = address.trim().trim_matches('"').trim();
        if trimmed.is_empty() {
            return String::new();
        }

        let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("http://{trimmed}")
        };

        with_scheme.trim_end_matches('/').to_string()
    }
}
