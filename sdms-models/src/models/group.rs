//! Group model.

use serde::{Deserialize, Serialize};

use super::user::User;
use crate::lenient;

/// A user group with its members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    #[serde(deserialize_with = "lenient::u64_from_any")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub comment: String,
    #[serde(default)]
    pub users: Vec<User>,
}

impl Group {
    /// Whether a user with this id is a member.
    pub fn has_member(&self, user_id: u64) -> bool {
        self.users.iter().any(|u| u.id == user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_deserialize() {
        let json = serde_json::json!({
            "comment": "", "id": 3, "name": "aotearoa", "type": "group",
            "users": [{"id": 4, "login": "tangaroa"}]
        });
        let group: Group = serde_json::from_value(json).unwrap();
        assert_eq!(group.name, "aotearoa");
        assert!(group.has_member(4));
        assert!(!group.has_member(1));
    }
}
