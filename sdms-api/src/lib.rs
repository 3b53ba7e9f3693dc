//! SeedDMS API - blocking HTTP client for the SeedDMS REST API.
//!
//! Each remote operation maps one method call onto an HTTP verb, a URL
//! template with `:name` placeholders and a set of form parameters. The
//! service wraps every answer in a `{success, message, data}` envelope;
//! [`Envelope`] unwraps it and turns failures into [`SdmsError`] values.
//!
//! Authentication is cookie based. [`ApiClient::login`] returns a
//! [`Session`] that every other call borrows.
//!
//! [`SdmsError`]: sdms_core::SdmsError

pub mod client;
pub mod endpoints;
pub mod password;
pub mod response;
pub mod session;
pub mod translate;

// Re-export key types
pub use client::ApiClient;
pub use endpoints::documents::DocumentAttachment;
pub use endpoints::folders::{AccessMode, DocumentUpload};
pub use endpoints::search::{AttrSearchQuery, SearchQuery};
pub use endpoints::users::NewUser;
pub use password::encpasswd;
pub use response::Envelope;
pub use session::Session;
pub use translate::{build_url, coerce_params, ParamValue, Params, PathArgs};
