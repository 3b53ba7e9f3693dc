//! Attribute definition endpoints.

use reqwest::Method;
use serde_json::Value;

use sdms_core::error::SdmsResult;
use sdms_models::AttributeDefinition;

use crate::client::ApiClient;
use crate::session::Session;
use crate::translate::{Params, PathArgs};

impl ApiClient {
    pub fn get_attribute_definitions(&self, session: &Session) -> SdmsResult<Vec<AttributeDefinition>> {
        self.call_list(
            session,
            Method::GET,
            "/attributedefinitions",
            &PathArgs::new(),
            &Params::new(),
        )
    }

    pub fn change_attribute_definition_name(
        &self,
        session: &Session,
        id: u64,
        name: &str,
    ) -> SdmsResult<Value> {
        self.call(
            session,
            Method::PUT,
            "/attributedefinitions/:id/name",
            &PathArgs::id(id),
            &Params::new().with("name", name),
        )
    }
}
