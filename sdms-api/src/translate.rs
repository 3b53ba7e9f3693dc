//! Request translation.
//!
//! Turns a URL template such as `/document/:id/move/:folderid` plus an
//! argument map into a full URL, and turns typed parameters into the flat
//! string pairs that go into query strings and form bodies.

use std::collections::BTreeMap;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use sdms_core::error::{SdmsError, SdmsResult};

lazy_static! {
    // `:` followed by one or more word characters.
    static ref PLACEHOLDER: Regex = Regex::new(r":(\w+)").unwrap();
}

/// Values substituted into `:name` placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathArgs(BTreeMap<String, String>);

impl PathArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for the common single `:id` template.
    pub fn id(id: impl fmt::Display) -> Self {
        Self::new().with("id", id)
    }

    pub fn with(mut self, name: &str, value: impl fmt::Display) -> Self {
        self.0.insert(name.to_string(), value.to_string());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

/// A single request parameter before coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Bool(bool),
    /// Sent as an empty value.
    Absent,
}

impl ParamValue {
    /// The string form sent over the wire.
    pub fn coerce(&self) -> String {
        match self {
            ParamValue::Str(s) => s.clone(),
            ParamValue::Int(i) => i.to_string(),
            ParamValue::Bool(true) => "true".to_string(),
            ParamValue::Bool(false) => "false".to_string(),
            ParamValue::Absent => String::new(),
        }
    }

    /// Convert a dynamically typed JSON value.
    ///
    /// Floats, arrays and objects have no form encoding and are rejected
    /// with [`SdmsError::UnsupportedParam`].
    pub fn from_json(name: &str, value: serde_json::Value) -> SdmsResult<Self> {
        use serde_json::Value;

        let unsupported = |kind: &str| SdmsError::UnsupportedParam {
            name: name.to_string(),
            kind: kind.to_string(),
        };

        match value {
            Value::Null => Ok(ParamValue::Absent),
            Value::Bool(b) => Ok(ParamValue::Bool(b)),
            Value::String(s) => Ok(ParamValue::Str(s)),
            Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => Ok(ParamValue::Int(i)),
                (None, Some(u)) => Ok(ParamValue::Str(u.to_string())),
                _ => Err(unsupported("float")),
            },
            Value::Array(_) => Err(unsupported("array")),
            Value::Object(_) => Err(unsupported("object")),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Str(s)
    }
}

impl From<&String> for ParamValue {
    fn from(s: &String) -> Self {
        ParamValue::Str(s.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl From<i32> for ParamValue {
    fn from(i: i32) -> Self {
        ParamValue::Int(i64::from(i))
    }
}

impl From<i64> for ParamValue {
    fn from(i: i64) -> Self {
        ParamValue::Int(i)
    }
}

impl From<u32> for ParamValue {
    fn from(i: u32) -> Self {
        ParamValue::Int(i64::from(i))
    }
}

impl From<u64> for ParamValue {
    fn from(i: u64) -> Self {
        // Out-of-range ids keep their decimal form.
        i64::try_from(i)
            .map(ParamValue::Int)
            .unwrap_or_else(|_| ParamValue::Str(i.to_string()))
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Absent, Into::into)
    }
}

/// Named request parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.0.insert(name.to_string(), value.into());
        self
    }

    /// Like [`Params::with`], but leaves the parameter out entirely for `None`.
    pub fn with_some<T: Into<ParamValue>>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.with(name, v),
            None => self,
        }
    }

    /// Build parameters from a JSON object, rejecting unsupported values.
    pub fn from_json(map: serde_json::Map<String, serde_json::Value>) -> SdmsResult<Self> {
        let mut params = Self::new();
        for (name, value) in map {
            let value = ParamValue::from_json(&name, value)?;
            params.0.insert(name, value);
        }
        Ok(params)
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Expand `template` against `args` and prefix it with `base`.
///
/// Substituted values are percent-encoded so names containing `/` or
/// spaces stay within one path segment.
pub fn build_url(base: &str, template: &str, args: &PathArgs) -> SdmsResult<String> {
    let mut path = String::with_capacity(template.len() + 16);
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(template) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let value = args
            .get(name.as_str())
            .ok_or_else(|| SdmsError::MissingArgument {
                name: name.as_str().to_string(),
                template: template.to_string(),
            })?;
        path.push_str(&template[last..whole.start()]);
        path.push_str(&urlencoding::encode(value));
        last = whole.end();
    }
    path.push_str(&template[last..]);

    Ok(format!("{}{path}", base.trim_end_matches('/')))
}

/// Flatten parameters into the string pairs sent on the wire.
pub fn coerce_params(params: &Params) -> BTreeMap<String, String> {
    params
        .iter()
        .map(|(k, v)| (k.to_string(), v.coerce()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const BASE: &str = "http://dms.example.org/restapi/index.php";

    #[test]
    fn test_build_url_substitutes_all_placeholders() {
        let args = PathArgs::id(12).with("folderid", 7);
        let url = build_url(BASE, "/document/:id/move/:folderid", &args).unwrap();
        assert_eq!(url, "http://dms.example.org/restapi/index.php/document/12/move/7");
    }

    #[test]
    fn test_build_url_without_placeholders() {
        let url = build_url(&format!("{BASE}/"), "/categories", &PathArgs::new()).unwrap();
        assert_eq!(url, format!("{BASE}/categories"));
    }

    #[test]
    fn test_build_url_missing_argument() {
        let err = build_url(BASE, "/document/:id/file/:fileid", &PathArgs::id(3)).unwrap_err();
        match err {
            SdmsError::MissingArgument { name, template } => {
                assert_eq!(name, "fileid");
                assert_eq!(template, "/document/:id/file/:fileid");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_build_url_encodes_names() {
        let url = build_url(BASE, "/groups/:id", &PathArgs::id("te reo/maori")).unwrap();
        assert!(url.ends_with("/groups/te%20reo%2Fmaori"));
    }

    #[test]
    fn test_camel_case_placeholder() {
        let args = PathArgs::id(4).with("categoryId", 9);
        let url = build_url(BASE, "/document/:id/category/:categoryId", &args).unwrap();
        assert!(url.ends_with("/document/4/category/9"));
    }

    #[test]
    fn test_coercion() {
        let params = Params::new()
            .with("enable", true)
            .with("disable", false)
            .with("limit", 20)
            .with("query", "2014")
            .with("comment", None::<String>);
        let flat = coerce_params(&params);
        assert_eq!(flat["enable"], "true");
        assert_eq!(flat["disable"], "false");
        assert_eq!(flat["limit"], "20");
        assert_eq!(flat["query"], "2014");
        assert_eq!(flat["comment"], "");
    }

    #[test]
    fn test_with_some_skips_none() {
        let params = Params::new()
            .with_some("limit", None::<u32>)
            .with_some("mode", Some("typeahead"));
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("mode"), Some(&ParamValue::Str("typeahead".into())));
    }

    #[test]
    fn test_large_unsigned_keeps_decimal_form() {
        assert_eq!(ParamValue::from(u64::MAX).coerce(), u64::MAX.to_string());
        assert_eq!(ParamValue::from(42u64), ParamValue::Int(42));
    }

    #[test]
    fn test_from_json_rejects_unsupported_kinds() {
        let err = ParamValue::from_json("ratio", json!(0.5)).unwrap_err();
        assert!(matches!(err, SdmsError::UnsupportedParam { ref kind, .. } if kind == "float"));

        let map = json!({"name": "x", "tags": ["a", "b"]});
        let err = Params::from_json(map.as_object().unwrap().clone()).unwrap_err();
        assert!(matches!(err, SdmsError::UnsupportedParam { ref name, .. } if name == "tags"));
    }

    #[test]
    fn test_from_json_supported_kinds() {
        let map = json!({"a": null, "b": true, "c": 3, "d": "x"});
        let params = Params::from_json(map.as_object().unwrap().clone()).unwrap();
        let flat = coerce_params(&params);
        assert_eq!(flat["a"], "");
        assert_eq!(flat["b"], "true");
        assert_eq!(flat["c"], "3");
        assert_eq!(flat["d"], "x");
    }
}
