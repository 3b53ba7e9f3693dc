//! OS-specific paths.

use std::path::PathBuf;

use crate::constants;
use crate::error::{SdmsError, SdmsResult};

/// Resolves where the client keeps its files on the current OS.
pub struct Platform;

impl Platform {
    /// The user's home directory.
    pub fn home_dir() -> SdmsResult<PathBuf> {
        dirs::home_dir()
            .ok_or_else(|| SdmsError::Config("could not determine home directory".into()))
    }

    /// Get the platform-specific application data directory.
    ///
    /// - Windows: `%APPDATA%/seeddms-cli`
    /// - macOS: `~/Library/Application Support/seeddms-cli`
    /// - Linux: `~/.local/share/seeddms-cli`
    pub fn data_dir() -> SdmsResult<PathBuf> {
        let base = dirs::data_dir()
            .ok_or_else(|| SdmsError::Config("could not determine data directory".into()))?;
        Ok(base.join(constants::APP_NAME))
    }

    /// Default location of the configuration file (`~/.seeddms-cli.toml`).
    pub fn default_config_path() -> SdmsResult<PathBuf> {
        Ok(Self::home_dir()?.join(constants::CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path_file_name() {
        if let Ok(path) = Platform::default_config_path() {
            assert!(path.ends_with(".seeddms-cli.toml"));
        }
    }

    #[test]
    fn test_data_dir_is_app_specific() {
        if let Ok(dir) = Platform::data_dir() {
            assert!(dir.ends_with("seeddms-cli"));
        }
    }
}
