//! Serde helpers for fields whose JSON type varies between endpoints.

use serde::de::{self, Deserializer, Unexpected};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumOrStr {
    Num(serde_json::Number),
    Str(String),
}

fn to_u64<E: de::Error>(value: NumOrStr) -> Result<u64, E> {
    match value {
        NumOrStr::Num(n) => n
            .as_u64()
            .ok_or_else(|| E::invalid_value(Unexpected::Other("non-integer number"), &"an id")),
        NumOrStr::Str(s) => s
            .trim()
            .parse()
            .map_err(|_| E::invalid_value(Unexpected::Str(&s), &"a numeric string")),
    }
}

/// Accept `12` or `"12"`.
pub fn u64_from_any<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    to_u64(NumOrStr::deserialize(deserializer)?)
}

/// Accept `12`, `"12"`, `""` or `null`.
pub fn opt_u64_from_any<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumOrStr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumOrStr::Str(s)) if s.trim().is_empty() => Ok(None),
        Some(v) => to_u64(v).map(Some),
    }
}

/// Accept a string, a number or a boolean and keep its text form;
/// `null` becomes the empty string.
pub fn string_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "u64_from_any")]
        id: u64,
        #[serde(default, deserialize_with = "opt_u64_from_any")]
        size: Option<u64>,
        #[serde(default, deserialize_with = "string_from_any")]
        value: String,
    }

    #[test]
    fn test_numeric_and_string_ids() {
        let a: Probe = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        let b: Probe = serde_json::from_str(r#"{"id": "7"}"#).unwrap();
        assert_eq!(a.id, 7);
        assert_eq!(b.id, 7);
    }

    #[test]
    fn test_optional_size() {
        let p: Probe = serde_json::from_str(r#"{"id": 1, "size": "5044626"}"#).unwrap();
        assert_eq!(p.size, Some(5_044_626));
        let p: Probe = serde_json::from_str(r#"{"id": 1, "size": null}"#).unwrap();
        assert_eq!(p.size, None);
        let p: Probe = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(p.size, None);
    }

    #[test]
    fn test_value_text_form() {
        let p: Probe = serde_json::from_str(r#"{"id": 1, "value": 42}"#).unwrap();
        assert_eq!(p.value, "42");
        let p: Probe = serde_json::from_str(r#"{"id": 1, "value": null}"#).unwrap();
        assert_eq!(p.value, "");
    }

    #[test]
    fn test_rejects_garbage_id() {
        assert!(serde_json::from_str::<Probe>(r#"{"id": "seven"}"#).is_err());
        assert!(serde_json::from_str::<Probe>(r#"{"id": 1.5}"#).is_err());
    }
}
