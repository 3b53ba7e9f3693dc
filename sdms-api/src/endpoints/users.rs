//! User administration endpoints.

use reqwest::Method;
use serde_json::Value;

use sdms_core::constants::user_defaults;
use sdms_core::error::{SdmsError, SdmsResult};
use sdms_models::User;

use crate::client::ApiClient;
use crate::password::encpasswd;
use crate::session::Session;
use crate::translate::{Params, PathArgs};

/// Fields for creating a user. The password is plain text and is hashed
/// before it is sent.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub login: String,
    pub password: String,
    pub name: String,
    pub email: String,
    pub language: String,
    pub theme: String,
    pub comment: String,
    pub role: String,
}

impl NewUser {
    /// A guest user with the default language and theme.
    pub fn new(login: &str, password: &str) -> Self {
        Self {
            login: login.to_string(),
            password: password.to_string(),
            name: String::new(),
            email: String::new(),
            language: user_defaults::LANGUAGE.to_string(),
            theme: user_defaults::THEME.to_string(),
            comment: String::new(),
            role: user_defaults::ROLE.to_string(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn role(mut self, role: &str) -> Self {
        self.role = role.to_string();
        self
    }

    pub fn comment(mut self, comment: &str) -> Self {
        self.comment = comment.to_string();
        self
    }

    fn params(&self) -> Params {
        Params::new()
            .with("user", &self.login)
            .with("pass", encpasswd(&self.password))
            .with("name", &self.name)
            .with("email", &self.email)
            .with("language", &self.language)
            .with("theme", &self.theme)
            .with("comment", &self.comment)
            .with("role", &self.role)
    }
}

impl ApiClient {
    pub fn get_users(&self, session: &Session) -> SdmsResult<Vec<User>> {
        self.call_list(session, Method::GET, "/users", &PathArgs::new(), &Params::new())
    }

    /// Find a user by login name.
    pub fn get_user_by_name(&self, session: &Session, login: &str) -> SdmsResult<User> {
        self.get_users(session)?
            .into_iter()
            .find(|u| u.login == login)
            .ok_or_else(|| SdmsError::NotFound(format!("user {login}")))
    }

    pub fn get_user_by_id(&self, session: &Session, id: u64) -> SdmsResult<User> {
        self.call(session, Method::GET, "/users/:id", &PathArgs::id(id), &Params::new())
    }

    pub fn create_user(&self, session: &Session, user: &NewUser) -> SdmsResult<Value> {
        self.call(session, Method::POST, "/users", &PathArgs::new(), &user.params())
    }

    pub fn set_disabled_user(&self, session: &Session, id: u64) -> SdmsResult<Value> {
        self.set_user_disabled(session, id, true)
    }

    pub fn set_enabled_user(&self, session: &Session, id: u64) -> SdmsResult<Value> {
        self.set_user_disabled(session, id, false)
    }

    fn set_user_disabled(&self, session: &Session, id: u64, disable: bool) -> SdmsResult<Value> {
        self.call(
            session,
            Method::PUT,
            "/users/:id/disable",
            &PathArgs::id(id),
            &Params::new().with("disable", disable),
        )
    }

    /// Set a new password, given in plain text.
    pub fn change_user_password(&self, session: &Session, id: u64, password: &str) -> SdmsResult<Value> {
        self.call(
            session,
            Method::PUT,
            "/users/:id/password",
            &PathArgs::id(id),
            &Params::new().with("password", encpasswd(password)),
        )
    }

    pub fn delete_user(&self, session: &Session, id: u64) -> SdmsResult<Value> {
        self.call(session, Method::DELETE, "/users/:id", &PathArgs::id(id), &Params::new())
    }
}
