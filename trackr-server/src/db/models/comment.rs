//! Comment Record

use serde::{Deserialize, Serialize};
use surrealdb::sql::{Datetime, Thing};

use shared::models::Comment;

pub type CommentId = Thing;

/// Comment record matching the SurrealDB schema
///
/// `item` is a record reference, not ownership: the store does not
/// cascade deletes from items to their comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CommentId>,
    pub item: Thing,
    pub timestamp: Datetime,
    pub body: String,
}

impl From<CommentRecord> for Comment {
    /// Boundary transform: same id rename as for items, plus the item
    /// reference flattened to its bare key.
    fn from(record: CommentRecord) -> Self {
        Comment {
            id: record.id.map(|t| t.id.to_raw()).unwrap_or_default(),
            item_id: record.item.id.to_raw(),
            body: record.body,
            timestamp: *record.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn boundary_transform_flattens_the_item_reference() {
        let now = Utc::now();
        let record = CommentRecord {
            id: Some(Thing::from(("comment", "518e5b6d96661c4008000003"))),
            item: Thing::from(("item", "518e5b6d96661c4008000002")),
            timestamp: now.into(),
            body: "comment body".to_string(),
        };
        let comment = Comment::from(record);
        assert_eq!(comment.id, "518e5b6d96661c4008000003");
        assert_eq!(comment.item_id, "518e5b6d96661c4008000002");
        assert_eq!(comment.timestamp, now);
    }
}
