//! SeedDMS Core - Foundation types shared by the SeedDMS client crates.
//!
//! This crate provides:
//! - Client configuration (base URL, credentials, target folder)
//! - The unified error type
//! - Structured logging with tracing
//! - Platform paths and common constants

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod platform;

// Re-export commonly used items at the crate root
pub use config::AppConfig;
pub use error::{SdmsError, SdmsResult};
pub use logging::init_logging;
pub use platform::Platform;
