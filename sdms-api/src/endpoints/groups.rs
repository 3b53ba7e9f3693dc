//! Group endpoints.

use reqwest::Method;
use serde_json::Value;

use sdms_core::error::SdmsResult;
use sdms_models::{Group, GroupRef};

use crate::client::ApiClient;
use crate::session::Session;
use crate::translate::{Params, PathArgs};

impl ApiClient {
    pub fn get_groups(&self, session: &Session) -> SdmsResult<Vec<Group>> {
        self.call_list(session, Method::GET, "/groups", &PathArgs::new(), &Params::new())
    }

    /// Get a group by id or name; the server accepts either in the path.
    pub fn get_group(&self, session: &Session, group: &GroupRef) -> SdmsResult<Group> {
        self.call(session, Method::GET, "/groups/:id", &PathArgs::id(group), &Params::new())
    }

    pub fn create_group(&self, session: &Session, name: &str, comment: &str) -> SdmsResult<Value> {
        self.call(
            session,
            Method::POST,
            "/groups",
            &PathArgs::new(),
            &Params::new().with("name", name).with("comment", comment),
        )
    }

    /// Add a user to a group given by id or name.
    pub fn add_user_to_group(&self, session: &Session, group: &GroupRef, user_id: u64) -> SdmsResult<Value> {
        let group_id = match group {
            GroupRef::Id(id) => *id,
            GroupRef::Name(_) => self.get_group(session, group)?.id,
        };
        self.call(
            session,
            Method::PUT,
            "/groups/:id/addUser",
            &PathArgs::id(group_id),
            &Params::new().with("userid", user_id),
        )
    }

    pub fn remove_user_from_group(&self, session: &Session, group_id: u64, user_id: u64) -> SdmsResult<Value> {
        self.call(
            session,
            Method::PUT,
            "/groups/:id/removeUser",
            &PathArgs::id(group_id),
            &Params::new().with("userid", user_id),
        )
    }
}
