//! Document category model.

use serde::{Deserialize, Serialize};

use crate::lenient;

/// A document category (keyword category in the SeedDMS UI).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "lenient::u64_from_any")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_list_deserialize() {
        let json = r#"[{"id":1,"name":"reference"},{"id":"2","name":"foo"}]"#;
        let cats: Vec<Category> = serde_json::from_str(json).unwrap();
        assert_eq!(cats.len(), 2);
        assert_eq!(cats[1].id, 2);
    }
}
