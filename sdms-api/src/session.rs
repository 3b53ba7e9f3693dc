//! Login session state.

/// An authenticated connection to one SeedDMS instance.
///
/// Created by [`ApiClient::login`](crate::ApiClient::login) and cleared by
/// [`ApiClient::logout`](crate::ApiClient::logout).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    base_url: String,
    cookie: Option<String>,
}

impl Session {
    pub fn new(base_url: &str, cookie: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            cookie,
        }
    }

    /// URL of the REST API entry point, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Value for the `Cookie` request header.
    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.cookie.is_some()
    }

    pub(crate) fn clear(&mut self) {
        self.cookie = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_trims_base_url() {
        let s = Session::new("http://dms/restapi/index.php/", Some("mydms_session=1".into()));
        assert_eq!(s.base_url(), "http://dms/restapi/index.php");
        assert!(s.is_authenticated());
    }

    #[test]
    fn test_clear() {
        let mut s = Session::new("http://dms", Some("a=b".into()));
        s.clear();
        assert!(!s.is_authenticated());
        assert_eq!(s.cookie(), None);
    }
}
