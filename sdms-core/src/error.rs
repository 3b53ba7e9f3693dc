//! Error types for the SeedDMS client.
//!
//! Every failure, local or remote, is reported through the single
//! `SdmsError` enum. Remote failures are never turned into empty results.

use thiserror::Error;

/// Convenience type alias for Results using SdmsError.
pub type SdmsResult<T> = Result<T, SdmsError>;

/// Unified error type for the SeedDMS client.
#[derive(Error, Debug)]
pub enum SdmsError {
    // -- Configuration errors --
    /// Failed to load or parse the configuration file.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required configuration value is missing.
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    /// A command-line argument combination that cannot be acted on.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // -- Request translation errors --
    /// A URL template references a placeholder that was not supplied.
    #[error("incomplete argument list passed to {template}: missing `{name}`")]
    MissingArgument {
        /// Placeholder name without the leading colon.
        name: String,
        /// The template being expanded.
        template: String,
    },

    /// A parameter value has a type that cannot be sent as a form field.
    #[error("unsupported type {kind} for parameter `{name}`")]
    UnsupportedParam {
        /// Parameter name.
        name: String,
        /// Human-readable kind of the offending value.
        kind: String,
    },

    // -- Network errors --
    /// HTTP transport failed.
    #[error("http error: {0}")]
    Http(String),

    /// HTTP request timed out.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// The service answered with a status outside of 200/201.
    #[error("request to {url} raised a {status} error: {message}")]
    Remote {
        /// HTTP status code.
        status: u16,
        /// URL that was requested.
        url: String,
        /// Message extracted from the body, or the raw body.
        message: String,
    },

    /// The service answered with `success: false`.
    #[error("request rejected by server: {message}")]
    Rejected {
        /// The envelope's `message` field.
        message: String,
    },

    /// Login was refused.
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// A name lookup matched nothing.
    #[error("not found: {0}")]
    NotFound(String),

    // -- File/IO errors --
    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl SdmsError {
    /// Whether the error came back from the remote service rather than
    /// from local validation or the transport.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            SdmsError::Remote { .. } | SdmsError::Rejected { .. } | SdmsError::AuthFailed(_)
        )
    }
}

impl From<serde_json::Error> for SdmsError {
    fn from(e: serde_json::Error) -> Self {
        SdmsError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for SdmsError {
    fn from(e: toml::de::Error) -> Self {
        SdmsError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdms_error_display() {
        let err = SdmsError::Config("bad value".to_string());
        assert_eq!(err.to_string(), "configuration error: bad value");
    }

    #[test]
    fn test_remote_error_display() {
        let err = SdmsError::Remote {
            status: 404,
            url: "http://dms/restapi/index.php/document/9".into(),
            message: "No such document".into(),
        };
        assert_eq!(
            err.to_string(),
            "request to http://dms/restapi/index.php/document/9 raised a 404 error: No such document"
        );
        assert!(err.is_remote());
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = SdmsError::InvalidArgument("either --user or --group is required".into());
        assert_eq!(err.to_string(), "invalid argument: either --user or --group is required");
        assert!(!err.is_remote());
    }

    #[test]
    fn test_missing_argument_is_local() {
        let err = SdmsError::MissingArgument {
            name: "id".into(),
            template: "/document/:id".into(),
        };
        assert!(!err.is_remote());
        assert!(err.to_string().contains("`id`"));
    }
}
