//! HTTP client for the SeedDMS REST API.
//!
//! Handles login and logout, the session cookie, request timeouts, TLS
//! certificate handling and the translation of templates and parameters
//! into HTTP requests.

use std::time::Duration;

use reqwest::blocking::{multipart, Client, RequestBuilder, Response};
use reqwest::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use sdms_core::config::HttpConfig;
use sdms_core::constants;
use sdms_core::error::{SdmsError, SdmsResult};

use crate::response::{self, Envelope};
use crate::session::Session;
use crate::translate::{build_url, coerce_params, Params, PathArgs};

/// Blocking HTTP client for one or more SeedDMS sessions.
///
/// The client itself holds no login state; every call borrows a
/// [`Session`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: Client,
    /// Folder used by uploads that do not name one.
    target_folder: String,
}

impl ApiClient {
    /// Create a new ApiClient from HTTP configuration.
    pub fn new(config: &HttpConfig) -> SdmsResult<Self> {
        let mut builder = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_secs(15));

        // Handle self-signed certificates
        if config.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let inner = builder
            .build()
            .map_err(|e| SdmsError::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            inner,
            target_folder: constants::DEFAULT_TARGETFOLDER.to_string(),
        })
    }

    /// Set the default upload folder.
    pub fn with_target_folder(mut self, folder: &str) -> Self {
        self.target_folder = folder.to_string();
        self
    }

    pub fn target_folder(&self) -> &str {
        &self.target_folder
    }

    // --- Session lifecycle ---

    /// Log in and capture the session cookie.
    pub fn login(&self, base_url: &str, user: &str, pass: &str) -> SdmsResult<Session> {
        let url = format!("{}/login", base_url.trim_end_matches('/'));
        debug!("POST /login as {user}");

        let response = self
            .inner
            .post(&url)
            .form(&[("user", user), ("pass", pass)])
            .send()
            .map_err(Self::classify_error)?;

        let cookie = session_cookie(&response);
        let envelope = match Self::into_envelope(response) {
            Err(SdmsError::Remote {
                status: 401 | 403,
                message,
                ..
            }) => return Err(SdmsError::AuthFailed(message)),
            other => other?,
        };
        if !envelope.success() {
            let message = match envelope.message() {
                "" => "failed to login".to_string(),
                m => m.to_string(),
            };
            return Err(SdmsError::AuthFailed(message));
        }
        let cookie = cookie.ok_or_else(|| {
            SdmsError::AuthFailed("server did not set a session cookie".into())
        })?;

        info!("logged in to {base_url} as {user}");
        Ok(Session::new(base_url, Some(cookie)))
    }

    /// End the session on the server and forget the cookie.
    pub fn logout(&self, session: &mut Session) -> SdmsResult<()> {
        self.get(session, "/logout", &PathArgs::new(), &Params::new())?
            .ok()?;
        session.clear();
        info!("logged out of {}", session.base_url());
        Ok(())
    }

    /// Have the server echo `message` back as plain text.
    pub fn echo(&self, session: &Session, message: &str) -> SdmsResult<String> {
        let bytes = self.get_raw(session, "/echo/:data", &PathArgs::new().with("data", message))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    // --- Request plumbing ---

    /// Build a request with the session cookie attached.
    fn build_request(&self, session: &Session, method: Method, url: &str) -> RequestBuilder {
        let builder = self.inner.request(method, url);
        match session.cookie() {
            Some(cookie) => builder.header(COOKIE, cookie),
            None => builder,
        }
    }

    /// Send a request and wrap the answer.
    ///
    /// GET and DELETE carry parameters in the query string. POST and PUT
    /// carry them both as a form body and in the query string, since
    /// service versions differ in which one they read.
    pub fn request(
        &self,
        session: &Session,
        method: Method,
        template: &str,
        args: &PathArgs,
        params: &Params,
    ) -> SdmsResult<Envelope> {
        let url = build_url(session.base_url(), template, args)?;
        debug!("{} {}", method, template);

        let has_body = method == Method::POST || method == Method::PUT;
        let mut builder = self.build_request(session, method, &url);
        if !params.is_empty() {
            let flat = coerce_params(params);
            builder = builder.query(&flat);
            if has_body {
                builder = builder.form(&flat);
            }
        }

        let response = builder.send().map_err(Self::classify_error)?;
        Self::into_envelope(response)
    }

    pub fn get(
        &self,
        session: &Session,
        template: &str,
        args: &PathArgs,
        params: &Params,
    ) -> SdmsResult<Envelope> {
        self.request(session, Method::GET, template, args, params)
    }

    pub fn post(
        &self,
        session: &Session,
        template: &str,
        args: &PathArgs,
        params: &Params,
    ) -> SdmsResult<Envelope> {
        self.request(session, Method::POST, template, args, params)
    }

    pub fn put(
        &self,
        session: &Session,
        template: &str,
        args: &PathArgs,
        params: &Params,
    ) -> SdmsResult<Envelope> {
        self.request(session, Method::PUT, template, args, params)
    }

    pub fn delete(
        &self,
        session: &Session,
        template: &str,
        args: &PathArgs,
        params: &Params,
    ) -> SdmsResult<Envelope> {
        self.request(session, Method::DELETE, template, args, params)
    }

    /// Convenience: request + success check + decode of `data`.
    pub fn call<T: DeserializeOwned>(
        &self,
        session: &Session,
        method: Method,
        template: &str,
        args: &PathArgs,
        params: &Params,
    ) -> SdmsResult<T> {
        self.request(session, method, template, args, params)?
            .ok()?
            .decode_data()
    }

    /// Like [`ApiClient::call`] for list endpoints; a `null` payload is an
    /// empty list.
    pub fn call_list<T: DeserializeOwned>(
        &self,
        session: &Session,
        method: Method,
        template: &str,
        args: &PathArgs,
        params: &Params,
    ) -> SdmsResult<Vec<T>> {
        let items: Option<Vec<T>> = self.call(session, method, template, args, params)?;
        Ok(items.unwrap_or_default())
    }

    /// GET a binary resource (document content, previews).
    pub fn get_raw(&self, session: &Session, template: &str, args: &PathArgs) -> SdmsResult<Vec<u8>> {
        let url = build_url(session.base_url(), template, args)?;
        debug!("GET (raw) {}", template);

        let response = self
            .build_request(session, Method::GET, &url)
            .send()
            .map_err(Self::classify_error)?;
        let (status, url, body) = Self::read(response)?;
        response::check_status(status, &url, &body)?;
        Ok(body)
    }

    /// POST a multipart form (file uploads).
    pub fn post_multipart(
        &self,
        session: &Session,
        template: &str,
        args: &PathArgs,
        form: multipart::Form,
    ) -> SdmsResult<Envelope> {
        let url = build_url(session.base_url(), template, args)?;
        debug!("POST (multipart) {}", template);

        let response = self
            .build_request(session, Method::POST, &url)
            .multipart(form)
            .send()
            .map_err(Self::classify_error)?;
        Self::into_envelope(response)
    }

    /// PUT a raw request body, with parameters in the query string.
    pub fn put_raw(
        &self,
        session: &Session,
        template: &str,
        args: &PathArgs,
        params: &Params,
        body: Vec<u8>,
    ) -> SdmsResult<Envelope> {
        let url = build_url(session.base_url(), template, args)?;
        debug!("PUT (raw, {} bytes) {}", body.len(), template);

        let response = self
            .build_request(session, Method::PUT, &url)
            .query(&coerce_params(params))
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(body)
            .send()
            .map_err(Self::classify_error)?;
        Self::into_envelope(response)
    }

    // --- Response helpers ---

    fn read(response: Response) -> SdmsResult<(u16, String, Vec<u8>)> {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let body = response
            .bytes()
            .map_err(|e| SdmsError::Http(format!("failed to read response body: {e}")))?;
        Ok((status, url, body.to_vec()))
    }

    fn into_envelope(response: Response) -> SdmsResult<Envelope> {
        let (status, url, body) = Self::read(response)?;
        Envelope::from_parts(status, &url, &body)
    }

    /// Classify a reqwest error into an SdmsError variant.
    fn classify_error(e: reqwest::Error) -> SdmsError {
        if e.is_timeout() {
            SdmsError::Timeout(e.to_string())
        } else if e.is_connect() {
            SdmsError::Http(format!("connection failed: {e}"))
        } else {
            SdmsError::Http(e.to_string())
        }
    }
}

/// Build a multipart form from `params` plus one file part named `file`.
pub fn multipart_form(params: &Params, file_name: &str, content: Vec<u8>) -> multipart::Form {
    let form = coerce_params(params)
        .into_iter()
        .fold(multipart::Form::new(), |form, (k, v)| form.text(k, v));
    form.part(
        "file",
        multipart::Part::bytes(content).file_name(file_name.to_string()),
    )
}

/// Collect `Set-Cookie` headers into a `Cookie` header value.
fn session_cookie(response: &Response) -> Option<String> {
    let pairs: Vec<&str> = response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .collect();

    if pairs.is_empty() {
        None
    } else {
        Some(pairs.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_from_default_config() {
        let client = ApiClient::new(&HttpConfig::default()).unwrap();
        assert_eq!(client.target_folder(), "DMS");
    }

    #[test]
    fn test_with_target_folder() {
        let client = ApiClient::new(&HttpConfig::default())
            .unwrap()
            .with_target_folder("aotearoa");
        assert_eq!(client.target_folder(), "aotearoa");
    }

    #[test]
    fn test_missing_argument_fails_before_sending() {
        let client = ApiClient::new(&HttpConfig::default()).unwrap();
        // Port 9 is never contacted; translation fails first.
        let session = Session::new("http://127.0.0.1:9/restapi/index.php", None);
        let err = client
            .get(&session, "/document/:id", &PathArgs::new(), &Params::new())
            .unwrap_err();
        assert!(matches!(err, SdmsError::MissingArgument { .. }));
    }
}
