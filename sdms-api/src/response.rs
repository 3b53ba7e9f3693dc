//! Response envelope.
//!
//! Every SeedDMS endpoint answers with
//! ```json
//! { "success": true, "message": "", "data": { ... } }
//! ```
//! either as a bare object or as a list of such rows.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use sdms_core::constants;
use sdms_core::error::{SdmsError, SdmsResult};

/// A decoded response from a successful HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    status: u16,
    url: String,
    rows: Vec<Value>,
}

impl Envelope {
    /// Build an envelope from a raw HTTP response.
    ///
    /// Statuses other than 200 and 201 fail with [`SdmsError::Remote`].
    pub fn from_parts(status: u16, url: &str, body: &[u8]) -> SdmsResult<Self> {
        check_status(status, url, body)?;

        let value: Value = serde_json::from_slice(body).map_err(|e| {
            SdmsError::Serialization(format!("invalid JSON from {url}: {e}"))
        })?;
        let rows = match value {
            Value::Array(rows) => rows,
            other => vec![other],
        };

        Ok(Self {
            status,
            url: url.to_string(),
            rows,
        })
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn first(&self) -> Option<&Value> {
        self.rows.first()
    }

    /// Whether the first row carries `"success": true`.
    pub fn success(&self) -> bool {
        self.first()
            .and_then(|row| row.get("success"))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// The first row's message, or `""`.
    pub fn message(&self) -> &str {
        self.first()
            .and_then(|row| row.get("message"))
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    /// The first row's `data` payload.
    ///
    /// A payload that is itself a single-element list wrapping another
    /// `data` field is unwrapped to that inner value.
    pub fn data(&self) -> Option<&Value> {
        let data = self.first().and_then(|row| row.get("data"))?;
        match data.as_array().map(Vec::as_slice) {
            Some([only]) => Some(only.get("data").unwrap_or(data)),
            _ => Some(data),
        }
    }

    pub fn rows(&self) -> &[Value] {
        &self.rows
    }

    pub fn into_rows(self) -> std::vec::IntoIter<Value> {
        self.rows.into_iter()
    }

    /// Turn `"success": false` into [`SdmsError::Rejected`].
    pub fn ok(self) -> SdmsResult<Self> {
        if self.success() {
            Ok(self)
        } else {
            let message = self.message().to_string();
            warn!("request to {} rejected: {}", self.url, message);
            Err(SdmsError::Rejected { message })
        }
    }

    /// Deserialize the `data` payload. A missing payload decodes as `null`.
    pub fn decode_data<T: DeserializeOwned>(&self) -> SdmsResult<T> {
        let data = self.data().cloned().unwrap_or(Value::Null);
        serde_json::from_value(data).map_err(|e| {
            SdmsError::Serialization(format!("unexpected payload from {}: {e}", self.url))
        })
    }
}

/// Fail unless `status` is one the service uses for success.
///
/// The error message is the body's `message` field when it has one, the
/// raw body otherwise.
pub fn check_status(status: u16, url: &str, body: &[u8]) -> SdmsResult<()> {
    if constants::ACCEPTED_STATUSES.contains(&status) {
        return Ok(());
    }

    let message = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned());

    Err(SdmsError::Remote {
        status,
        url: url.to_string(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const URL: &str = "http://dms/restapi/index.php/document/1";

    #[test]
    fn test_object_body() {
        let env = Envelope::from_parts(200, URL, br#"{"success": true, "data": {"id": 1}}"#).unwrap();
        assert!(env.success());
        assert_eq!(env.message(), "");
        assert_eq!(env.data(), Some(&json!({"id": 1})));
        assert_eq!(env.rows().len(), 1);
    }

    #[test]
    fn test_list_body() {
        let body = br#"[{"success": true, "message": "", "data": {"id": 1}}]"#;
        let env = Envelope::from_parts(201, URL, body).unwrap();
        assert!(env.success());
        assert_eq!(env.data(), Some(&json!({"id": 1})));
        assert_eq!(env.status(), 201);
    }

    #[test]
    fn test_single_element_result_list_is_unwrapped() {
        let body = br#"{"success": true, "data": [{"data": {"id": 1}}]}"#;
        let env = Envelope::from_parts(200, URL, body).unwrap();
        assert!(env.success());
        assert_eq!(env.data(), Some(&json!({"id": 1})));
        let decoded: Value = env.decode_data().unwrap();
        assert_eq!(decoded, json!({"id": 1}));
    }

    #[test]
    fn test_plain_lists_are_not_unwrapped() {
        let body = br#"{"success": true, "data": [{"id": 1, "name": "DMS"}]}"#;
        let env = Envelope::from_parts(200, URL, body).unwrap();
        assert_eq!(env.data(), Some(&json!([{"id": 1, "name": "DMS"}])));

        let body = br#"{"success": true, "data": [{"data": 1}, {"data": 2}]}"#;
        let env = Envelope::from_parts(200, URL, body).unwrap();
        assert_eq!(env.data().and_then(Value::as_array).map(Vec::len), Some(2));
    }

    #[test]
    fn test_rows_iterate_once() {
        let body = br#"[{"id": 1}, {"id": 2}, {"id": 3}]"#;
        let env = Envelope::from_parts(200, URL, body).unwrap();
        let ids: Vec<i64> = env
            .into_rows()
            .filter_map(|row| row.get("id").and_then(Value::as_i64))
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_not_found_uses_json_message() {
        let err = Envelope::from_parts(404, URL, br#"{"success": false, "message": "No such document"}"#)
            .unwrap_err();
        match err {
            SdmsError::Remote { status, url, message } => {
                assert_eq!(status, 404);
                assert_eq!(url, URL);
                assert_eq!(message, "No such document");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_server_error_falls_back_to_raw_body() {
        let err = Envelope::from_parts(500, URL, b"<h1>Internal Server Error</h1>").unwrap_err();
        assert!(err.to_string().ends_with("<h1>Internal Server Error</h1>"));
    }

    #[test]
    fn test_rejected_envelope() {
        let env = Envelope::from_parts(200, URL, br#"{"success": false, "message": "Not allowed", "data": ""}"#)
            .unwrap();
        assert!(!env.success());
        let err = env.ok().unwrap_err();
        assert!(matches!(err, SdmsError::Rejected { ref message } if message == "Not allowed"));
    }

    #[test]
    fn test_invalid_json_on_success() {
        let err = Envelope::from_parts(200, URL, b"not json").unwrap_err();
        assert!(matches!(err, SdmsError::Serialization(_)));
    }

    #[test]
    fn test_decode_missing_data_as_null() {
        let env = Envelope::from_parts(200, URL, br#"{"success": true}"#).unwrap();
        let data: Value = env.decode_data().unwrap();
        assert!(data.is_null());
        let opt: Option<u64> = env.decode_data().unwrap();
        assert!(opt.is_none());
    }

    #[test]
    fn test_empty_list_is_not_success() {
        let env = Envelope::from_parts(200, URL, b"[]").unwrap();
        assert!(!env.success());
        assert!(env.data().is_none());
    }
}
