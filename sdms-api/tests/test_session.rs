//! Integration tests for login, logout and error reporting.

mod common;

use common::{api, client, ok, rejected, TestServer, SESSION_COOKIE};
use sdms_core::error::SdmsError;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn login_stores_cookie_and_later_calls_send_it() {
    let server = TestServer::start();
    let client = client();
    let session = server.login(&client);

    assert!(session.is_authenticated());
    assert_eq!(session.cookie(), Some(SESSION_COOKIE));

    server.mount(
        Mock::given(method("GET"))
            .and(path(api("/account")))
            .and(header("cookie", SESSION_COOKIE))
            .respond_with(ok(json!({
                "id": 1, "login": "admin", "name": "Administrator",
                "email": "address@server.com", "isadmin": true, "type": "user"
            }))),
    );

    let account = client.get_account(&session).unwrap();
    assert_eq!(account.login, "admin");
    assert!(account.isadmin);
}

#[test]
fn login_rejected_by_envelope() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("POST"))
            .and(path(api("/login")))
            .respond_with(rejected("Login failed")),
    );

    let err = client()
        .login(&server.base_url(), "admin", "wrong")
        .unwrap_err();
    assert!(matches!(err, SdmsError::AuthFailed(ref m) if m == "Login failed"));
}

#[test]
fn login_forbidden_status_is_auth_failure() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("POST"))
            .and(path(api("/login")))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "success": false, "message": "Login failed", "data": ""
            }))),
    );

    let err = client()
        .login(&server.base_url(), "admin", "wrong")
        .unwrap_err();
    assert!(matches!(err, SdmsError::AuthFailed(_)));
}

#[test]
fn login_without_cookie_fails() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("POST"))
            .and(path(api("/login")))
            .respond_with(ok(json!({"id": 1}))),
    );

    let err = client()
        .login(&server.base_url(), "admin", "admin")
        .unwrap_err();
    assert!(matches!(err, SdmsError::AuthFailed(_)));
}

#[test]
fn logout_clears_cookie() {
    let server = TestServer::start();
    let client = client();
    let mut session = server.login(&client);

    server.mount(
        Mock::given(method("GET"))
            .and(path(api("/logout")))
            .and(header("cookie", SESSION_COOKIE))
            .respond_with(ok(json!(""))),
    );

    client.logout(&mut session).unwrap();
    assert!(!session.is_authenticated());
    assert_eq!(session.cookie(), None);
}

#[test]
fn echo_returns_body_text() {
    let server = TestServer::start();
    let client = client();
    let session = server.login(&client);

    server.mount(
        Mock::given(method("GET"))
            .and(path(api("/echo/kia%20ora")))
            .respond_with(ResponseTemplate::new(200).set_body_string("kia ora")),
    );

    assert_eq!(client.echo(&session, "kia ora").unwrap(), "kia ora");
}

#[test]
fn not_found_carries_server_message() {
    let server = TestServer::start();
    let client = client();
    let session = server.login(&client);

    server.mount(
        Mock::given(method("GET"))
            .and(path(api("/document/99")))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "success": false, "message": "No such document", "data": ""
            }))),
    );

    let err = client.get_document(&session, 99).unwrap_err();
    match err {
        SdmsError::Remote { status, url, message } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/document/99"));
            assert_eq!(message, "No such document");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rejected_envelope_is_an_error() {
    let server = TestServer::start();
    let client = client();
    let session = server.login(&client);

    server.mount(
        Mock::given(method("GET"))
            .and(path(api("/account")))
            .respond_with(rejected("Not logged in")),
    );

    let err = client.get_account(&session).unwrap_err();
    assert!(matches!(err, SdmsError::Rejected { ref message } if message == "Not logged in"));
}

#[test]
fn unreachable_server_is_transport_error() {
    // Nothing listens on the discard port.
    let err = client()
        .login("http://127.0.0.1:9/restapi/index.php", "admin", "admin")
        .unwrap_err();
    assert!(matches!(err, SdmsError::Http(_) | SdmsError::Timeout(_)));
    assert!(!err.is_remote());
}
