//! Account endpoints for the logged-in user.

use reqwest::Method;
use serde_json::Value;

use sdms_core::error::SdmsResult;
use sdms_models::{Document, User};

use crate::client::ApiClient;
use crate::session::Session;
use crate::translate::{Params, PathArgs};

impl ApiClient {
    /// Get the account of the logged-in user.
    pub fn get_account(&self, session: &Session) -> SdmsResult<User> {
        self.call(session, Method::GET, "/account", &PathArgs::new(), &Params::new())
    }

    /// Documents locked by the logged-in user.
    pub fn get_locked_documents(&self, session: &Session) -> SdmsResult<Vec<Document>> {
        self.call_list(
            session,
            Method::GET,
            "/account/documents/locked",
            &PathArgs::new(),
            &Params::new(),
        )
    }

    pub fn set_email(&self, session: &Session, email: &str) -> SdmsResult<Value> {
        self.call(
            session,
            Method::PUT,
            "/account/email",
            &PathArgs::new(),
            &Params::new().with("email", email),
        )
    }

    pub fn set_full_name(&self, session: &Session, name: &str) -> SdmsResult<Value> {
        self.call(
            session,
            Method::PUT,
            "/account/fullname",
            &PathArgs::new(),
            &Params::new().with("fullname", name),
        )
    }
}
