//! Document category endpoints.

use reqwest::Method;
use serde_json::Value;

use sdms_core::error::{SdmsError, SdmsResult};
use sdms_models::Category;

use crate::client::ApiClient;
use crate::session::Session;
use crate::translate::{Params, PathArgs};

impl ApiClient {
    /// List all categories.
    pub fn get_categories(&self, session: &Session) -> SdmsResult<Vec<Category>> {
        self.call_list(session, Method::GET, "/categories", &PathArgs::new(), &Params::new())
    }

    /// Resolve a category name to its id.
    pub fn lookup_category_id(&self, session: &Session, name: &str) -> SdmsResult<u64> {
        find_category(&self.get_categories(session)?, name)
            .map(|c| c.id)
            .ok_or_else(|| SdmsError::NotFound(format!("category {name}")))
    }

    pub fn has_category(&self, session: &Session, name: &str) -> SdmsResult<bool> {
        Ok(find_category(&self.get_categories(session)?, name).is_some())
    }

    pub fn get_category(&self, session: &Session, id: u64) -> SdmsResult<Category> {
        self.call(session, Method::GET, "/categories/:id", &PathArgs::id(id), &Params::new())
    }

    pub fn create_category(&self, session: &Session, name: &str) -> SdmsResult<Value> {
        self.call(
            session,
            Method::POST,
            "/categories",
            &PathArgs::new(),
            &Params::new().with("category", name),
        )
    }

    pub fn change_category_name(&self, session: &Session, id: u64, name: &str) -> SdmsResult<Value> {
        self.call(
            session,
            Method::PUT,
            "/categories/:id/name",
            &PathArgs::id(id),
            &Params::new().with("name", name),
        )
    }

    pub fn delete_category(&self, session: &Session, id: u64) -> SdmsResult<Value> {
        self.call(session, Method::DELETE, "/categories/:id", &PathArgs::id(id), &Params::new())
    }
}

fn find_category<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_category_is_exact() {
        let cats = vec![
            Category { id: 1, name: "Invoices".into() },
            Category { id: 2, name: "invoices-2014".into() },
        ];
        assert_eq!(find_category(&cats, "Invoices").map(|c| c.id), Some(1));
        assert!(find_category(&cats, "invoices").is_none());
    }
}
