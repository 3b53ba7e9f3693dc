//! Attribute definitions and attribute values.

use serde::{Deserialize, Serialize};

use crate::lenient;

/// Definition of a custom attribute that folders, documents or versions
/// can carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    #[serde(deserialize_with = "lenient::u64_from_any")]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    /// Object type the attribute applies to.
    #[serde(default)]
    pub objtype: i64,
    /// Value type (int, float, string, ...).
    #[serde(rename = "type", default)]
    pub value_type: i64,
    #[serde(default)]
    pub multiple: bool,
    #[serde(default)]
    pub min: i64,
    #[serde(default)]
    pub max: i64,
    #[serde(default)]
    pub valueset: serde_json::Value,
}

/// One attribute value attached to a folder or document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeValue {
    #[serde(deserialize_with = "lenient::u64_from_any")]
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_definition_deserialize() {
        let json = serde_json::json!({
            "id": 1, "max": 0, "min": 0, "multiple": false,
            "name": "foo_folder_attr", "objtype": 1, "type": 3, "valueset": []
        });
        let def: AttributeDefinition = serde_json::from_value(json).unwrap();
        assert_eq!(def.name, "foo_folder_attr");
        assert_eq!(def.value_type, 3);
    }

    #[test]
    fn test_attribute_value_deserialize() {
        let json = r#"[{"id": 1, "name": "language_reference", "value": "te reo maori"}]"#;
        let values: Vec<AttributeValue> = serde_json::from_str(json).unwrap();
        assert_eq!(values[0].value, "te reo maori");
    }
}
