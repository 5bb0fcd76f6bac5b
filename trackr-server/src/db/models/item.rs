//! Item Record

use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use shared::models::Item;

pub type ItemId = Thing;

/// Item record matching the SurrealDB schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<ItemRecord> for Item {
    /// Boundary transform: the internal record id becomes the public
    /// `id` field, reduced to its bare key.
    fn from(record: ItemRecord) -> Self {
        Item {
            id: record.id.map(|t| t.id.to_raw()).unwrap_or_default(),
            title: record.title,
            body: record.body,
            tags: record.tags,
        }
    }
}
