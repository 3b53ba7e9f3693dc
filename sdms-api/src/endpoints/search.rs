//! Search endpoints.

use reqwest::Method;

use sdms_core::error::SdmsResult;
use sdms_models::DmsObject;

use crate::client::ApiClient;
use crate::session::Session;
use crate::translate::{Params, PathArgs};

/// Full-text search parameters.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub query: String,
    pub limit: Option<u32>,
    /// Search mode, e.g. `typeahead`.
    pub mode: Option<String>,
}

impl SearchQuery {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            ..Self::default()
        }
    }

    fn params(&self) -> Params {
        Params::new()
            .with("query", &self.query)
            .with_some("limit", self.limit)
            .with_some("mode", self.mode.as_deref())
    }
}

/// Search by attribute value.
#[derive(Debug, Clone, Default)]
pub struct AttrSearchQuery {
    /// Attribute name.
    pub name: String,
    pub value: String,
    pub limit: Option<u32>,
}

impl AttrSearchQuery {
    fn params(&self) -> Params {
        Params::new()
            .with("name", &self.name)
            .with("value", &self.value)
            .with_some("limit", self.limit)
    }
}

impl ApiClient {
    pub fn do_search(&self, session: &Session, query: &SearchQuery) -> SdmsResult<Vec<DmsObject>> {
        self.call_list(session, Method::GET, "/search", &PathArgs::new(), &query.params())
    }

    pub fn do_search_by_attr(&self, session: &Session, query: &AttrSearchQuery) -> SdmsResult<Vec<DmsObject>> {
        self.call_list(session, Method::GET, "/searchbyattr", &PathArgs::new(), &query.params())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::coerce_params;

    #[test]
    fn test_search_query_omits_unset_fields() {
        let flat = coerce_params(&SearchQuery::new("2014").params());
        assert_eq!(flat.len(), 1);
        assert_eq!(flat["query"], "2014");
    }

    #[test]
    fn test_search_query_full() {
        let q = SearchQuery {
            query: "grammar".into(),
            limit: Some(5),
            mode: Some("typeahead".into()),
        };
        let flat = coerce_params(&q.params());
        assert_eq!(flat["limit"], "5");
        assert_eq!(flat["mode"], "typeahead");
    }

    #[test]
    fn test_attr_search_params() {
        let q = AttrSearchQuery {
            name: "foo_folder_attr".into(),
            value: "main".into(),
            limit: None,
        };
        let flat = coerce_params(&q.params());
        assert_eq!(flat["name"], "foo_folder_attr");
        assert_eq!(flat["value"], "main");
        assert!(!flat.contains_key("limit"));
    }
}
