//! Application-wide constants.

/// Application name.
pub const APP_NAME: &str = "seeddms-cli";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default REST API entry point.
pub const DEFAULT_BASEURL: &str = "http://localhost/seeddms/restapi/index.php";

/// Default login name.
pub const DEFAULT_USERNAME: &str = "admin";

/// Default password.
pub const DEFAULT_PASSWORD: &str = "admin";

/// Default folder for uploads.
pub const DEFAULT_TARGETFOLDER: &str = "DMS";

/// Name of the configuration file in the user's home directory.
pub const CONFIG_FILE_NAME: &str = ".seeddms-cli.toml";

/// Base name of the rotating log file.
pub const LOG_FILE_NAME: &str = "seeddms-cli.log";

/// Default request timeout in milliseconds.
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;

/// HTTP status codes the service uses for successful calls.
pub const ACCEPTED_STATUSES: &[u16] = &[200, 201];

/// Environment variables that override configuration values.
pub mod env {
    pub const BASEURL: &str = "SEEDDMS_BASEURL";
    pub const USERNAME: &str = "SEEDDMS_USERNAME";
    pub const PASSWORD: &str = "SEEDDMS_PASSWORD";
    pub const TARGETFOLDER: &str = "SEEDDMS_TARGETFOLDER";
}

/// Defaults applied when creating a user without the optional fields.
pub mod user_defaults {
    pub const LANGUAGE: &str = "en_GB";
    pub const THEME: &str = "bootstrap";
    pub const ROLE: &str = "guest";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_statuses() {
        assert!(ACCEPTED_STATUSES.contains(&200));
        assert!(ACCEPTED_STATUSES.contains(&201));
        assert!(!ACCEPTED_STATUSES.contains(&204));
    }
}
