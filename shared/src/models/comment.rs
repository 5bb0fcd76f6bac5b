//! Comment Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Comment entity as it crosses the API boundary
///
/// `item_id` is a reference, not ownership: the store does not cascade
/// deletes from items to their comments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub item_id: String,
    pub body: String,
    pub timestamp: DateTime<Utc>,
}

/// Create comment payload. Id and timestamp are server-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentCreate {
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_uses_camel_case_item_id_and_iso_timestamp() {
        let comment = Comment {
            id: "518e5b6d96661c4008000003".to_string(),
            item_id: "518e5b6d96661c4008000002".to_string(),
            body: "comment body".to_string(),
            timestamp: "2013-06-16T22:00:00Z".parse().unwrap(),
        };
        let json = serde_json::to_value(&comment).unwrap();
        assert_eq!(json["itemId"], "518e5b6d96661c4008000002");
        assert!(json.get("item_id").is_none());
        assert_eq!(json["timestamp"], "2013-06-16T22:00:00Z");
    }

    #[test]
    fn comment_round_trips() {
        let json = r#"{
            "id": "518e5b6d96661c4008000003",
            "itemId": "518e5b6d96661c4008000002",
            "body": "comment body",
            "timestamp": "2013-06-16T22:00:00.000Z"
        }"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.item_id, "518e5b6d96661c4008000002");
        assert_eq!(serde_json::to_value(&comment).unwrap()["timestamp"], "2013-06-16T22:00:00Z");
    }
}
