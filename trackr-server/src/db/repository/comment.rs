//! Comment Repository

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, make_thing, record_key};
use crate::db::models::CommentRecord;

const TABLE: &str = "comment";
const ITEM_TABLE: &str = "item";

#[derive(Clone)]
pub struct CommentRepository {
    base: BaseRepository,
}

impl CommentRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Comments on one item, oldest first
    pub async fn find_by_item(&self, item_key: &str) -> RepoResult<Vec<CommentRecord>> {
        let item = make_thing(ITEM_TABLE, item_key);
        let comments: Vec<CommentRecord> = self
            .base
            .db()
            .query("SELECT * FROM comment WHERE item = $item ORDER BY timestamp")
            .bind(("item", item))
            .await?
            .take(0)?;
        Ok(comments)
    }

    /// Find comment by key
    pub async fn find_by_id(&self, key: &str) -> RepoResult<Option<CommentRecord>> {
        let comment: Option<CommentRecord> = self.base.db().select((TABLE, key)).await?;
        Ok(comment)
    }

    /// Create a comment on an item, stamped with the current time.
    ///
    /// The caller is responsible for checking that the item exists;
    /// the store does not enforce the reference.
    pub async fn create(&self, item_key: &str, body: String) -> RepoResult<CommentRecord> {
        let record = CommentRecord {
            id: None,
            item: make_thing(ITEM_TABLE, item_key),
            timestamp: Utc::now().into(),
            body,
        };

        let key = record_key();
        let created: Option<CommentRecord> = self
            .base
            .db()
            .create((TABLE, key.as_str()))
            .content(record)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create comment".to_string()))
    }
}
