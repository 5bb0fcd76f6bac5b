//! Item Model

use serde::{Deserialize, Serialize};

/// Item entity as it crosses the API boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Create item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCreate {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Replace item payload. PUT is a full replace of the mutable fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemReplace {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_serializes_public_fields_only() {
        let item = Item {
            id: "518e5b6d96661c4008000002".to_string(),
            title: "title 1".to_string(),
            body: "body 1".to_string(),
            tags: vec!["tag1".to_string()],
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "518e5b6d96661c4008000002",
                "title": "title 1",
                "body": "body 1",
                "tags": ["tag1"],
            })
        );
    }

    #[test]
    fn create_payload_defaults_tags() {
        let payload: ItemCreate = serde_json::from_str(r#"{"title": "t", "body": "b"}"#).unwrap();
        assert!(payload.tags.is_empty());
    }
}
