//! User (and current account) model.

use serde::{Deserialize, Serialize};

use crate::lenient;

/// A SeedDMS user as returned by `/users`, `/users/:id` and `/account`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "lenient::u64_from_any")]
    pub id: u64,
    /// Login name.
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub login: String,
    /// Full name.
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    /// `admin`, `user` or `guest`.
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub isadmin: bool,
    #[serde(default)]
    pub isguest: bool,
}

impl User {
    /// Full name when set, otherwise the login.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.login
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_deserialize() {
        let json = serde_json::json!({
            "comment": "",
            "disabled": false,
            "email": "address@server.com",
            "hidden": false,
            "id": 1,
            "isadmin": true,
            "isguest": false,
            "language": "en_GB",
            "login": "admin",
            "name": "Administrator",
            "role": "admin",
            "theme": "bootstrap",
            "type": "user"
        });
        let user: User = serde_json::from_value(json).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.login, "admin");
        assert!(user.isadmin);
        assert_eq!(user.display_name(), "Administrator");
    }

    #[test]
    fn test_guest_with_null_email() {
        let json = serde_json::json!({"id": 2, "login": "guest", "name": "", "email": null});
        let user: User = serde_json::from_value(json).unwrap();
        assert!(user.email.is_none());
        assert_eq!(user.display_name(), "guest");
    }
}
