//! Shared helpers for the integration tests.
//!
//! The client is blocking, so each test owns a tokio runtime only to drive
//! the mock server; client calls run on the test thread.

#![allow(dead_code)]

use sdms_api::{ApiClient, Session};
use sdms_core::config::HttpConfig;
use serde_json::{json, Value};
use tokio::runtime::Runtime;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Path of the REST entry point on the mock server.
pub const API_PATH: &str = "/restapi/index.php";

/// Session cookie handed out by the mock login.
pub const SESSION_COOKIE: &str = "mydms_session=5d41402abc4b2a76";

/// A mock SeedDMS server.
///
/// Field order matters: the server must drop before its runtime.
pub struct TestServer {
    pub server: MockServer,
    rt: Runtime,
}

impl TestServer {
    pub fn start() -> Self {
        let rt = Runtime::new().unwrap();
        let server = rt.block_on(MockServer::start());
        Self { server, rt }
    }

    pub fn base_url(&self) -> String {
        format!("{}{API_PATH}", self.server.uri())
    }

    pub fn mount(&self, mock: Mock) {
        self.rt.block_on(mock.mount(&self.server));
    }

    pub fn requests(&self) -> Vec<Request> {
        self.rt
            .block_on(self.server.received_requests())
            .unwrap_or_default()
    }

    /// Mount a successful login for admin/admin and log in.
    pub fn login(&self, client: &ApiClient) -> Session {
        self.mount(
            Mock::given(method("POST"))
                .and(path(api("/login")))
                .and(body_string_contains("user=admin"))
                .respond_with(
                    ok(json!({"id": 1, "login": "admin"}))
                        .insert_header("set-cookie", format!("{SESSION_COOKIE}; path=/")),
                ),
        );
        client.login(&self.base_url(), "admin", "admin").unwrap()
    }
}

/// Full mock path for an API endpoint.
pub fn api(endpoint: &str) -> String {
    format!("{API_PATH}{endpoint}")
}

pub fn client() -> ApiClient {
    ApiClient::new(&HttpConfig::default()).unwrap()
}

/// A successful envelope carrying `data`.
pub fn ok(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "success": true,
        "message": "",
        "data": data
    }))
}

/// An envelope with `success: false`.
pub fn rejected(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "success": false,
        "message": message,
        "data": ""
    }))
}
