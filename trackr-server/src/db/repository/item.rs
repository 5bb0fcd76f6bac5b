//! Item Repository

use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, record_key};
use crate::db::models::ItemRecord;
use shared::models::{ItemCreate, ItemReplace};

const TABLE: &str = "item";

#[derive(Clone)]
pub struct ItemRepository {
    base: BaseRepository,
}

impl ItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all items, oldest first (keys are timestamp-prefixed)
    pub async fn find_all(&self) -> RepoResult<Vec<ItemRecord>> {
        let items: Vec<ItemRecord> = self
            .base
            .db()
            .query("SELECT * FROM item ORDER BY id")
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Weighted full-text search across tags, title and body.
    ///
    /// Relevance is tags*10 + title*5 + body*1, so a tag hit always
    /// outranks the same term found in prose.
    pub async fn search(&self, text: &str) -> RepoResult<Vec<ItemRecord>> {
        let text = text.to_string();
        let items: Vec<ItemRecord> = self
            .base
            .db()
            .query(
                "SELECT *, search::score(0) * 10 + search::score(1) * 5 + search::score(2) AS relevance \
                 FROM item \
                 WHERE tags @0@ $text OR title @1@ $text OR body @2@ $text \
                 ORDER BY relevance DESC",
            )
            .bind(("text", text))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Find item by key
    pub async fn find_by_id(&self, key: &str) -> RepoResult<Option<ItemRecord>> {
        let item: Option<ItemRecord> = self.base.db().select((TABLE, key)).await?;
        Ok(item)
    }

    /// Create a new item under a fresh server-assigned key
    pub async fn create(&self, data: ItemCreate) -> RepoResult<ItemRecord> {
        let record = ItemRecord {
            id: None,
            title: data.title,
            body: data.body,
            tags: data.tags,
        };

        let key = record_key();
        let created: Option<ItemRecord> = self
            .base
            .db()
            .create((TABLE, key.as_str()))
            .content(record)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create item".to_string()))
    }

    /// Replace the mutable fields of an existing item
    pub async fn replace(&self, key: &str, data: ItemReplace) -> RepoResult<ItemRecord> {
        self.find_by_id(key)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Item {key} not found")))?;

        let record = ItemRecord {
            id: None,
            title: data.title,
            body: data.body,
            tags: data.tags,
        };

        let updated: Option<ItemRecord> = self
            .base
            .db()
            .update((TABLE, key))
            .content(record)
            .await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Item {key} not found")))
    }

    /// All distinct tags across all items, lexicographically sorted.
    pub async fn distinct_tags(&self) -> RepoResult<Vec<String>> {
        #[derive(Debug, Deserialize)]
        struct TagsRow {
            #[serde(default)]
            tags: Vec<String>,
        }

        let mut result = self
            .base
            .db()
            .query("SELECT array::sort(array::group(tags)) AS tags FROM item GROUP ALL")
            .await?;
        let row: Option<TagsRow> = result.take(0)?;
        Ok(row.map(|r| r.tags).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    async fn repo() -> (ItemRepository, tempfile::TempDir) {
        let tmp = tempfile::tempdir().unwrap();
        let service = DbService::new(&tmp.path().join("db").to_string_lossy())
            .await
            .unwrap();
        (ItemRepository::new(service.db), tmp)
    }

    fn item(title: &str, body: &str, tags: &[&str]) -> ItemCreate {
        ItemCreate {
            title: title.to_string(),
            body: body.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn create_assigns_hex_key_and_round_trips() {
        let (repo, _tmp) = repo().await;

        let created = repo
            .create(item("title 1", "body 1", &["tag1"]))
            .await
            .unwrap();
        let key = created.id.as_ref().unwrap().id.to_raw();
        assert_eq!(key.len(), 24);

        let fetched = repo.find_by_id(&key).await.unwrap().unwrap();
        assert_eq!(fetched.title, "title 1");
        assert_eq!(fetched.body, "body 1");
        assert_eq!(fetched.tags, vec!["tag1"]);
    }

    #[tokio::test]
    async fn find_by_unknown_key_is_none() {
        let (repo, _tmp) = repo().await;
        let found = repo.find_by_id("518e5b6d96661c4008000002").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn replace_overwrites_all_fields() {
        let (repo, _tmp) = repo().await;

        let created = repo.create(item("title", "body", &["tag"])).await.unwrap();
        let key = created.id.as_ref().unwrap().id.to_raw();

        let replaced = repo
            .replace(
                &key,
                ItemReplace {
                    title: "updated title".to_string(),
                    body: "updated body".to_string(),
                    tags: vec!["new tag".to_string()],
                },
            )
            .await
            .unwrap();
        assert_eq!(replaced.title, "updated title");

        let fetched = repo.find_by_id(&key).await.unwrap().unwrap();
        assert_eq!(fetched.title, "updated title");
        assert_eq!(fetched.body, "updated body");
        assert_eq!(fetched.tags, vec!["new tag"]);
    }

    #[tokio::test]
    async fn replace_of_missing_item_is_not_found() {
        let (repo, _tmp) = repo().await;
        let err = repo
            .replace(
                "518e5b6d96661c4008000002",
                ItemReplace {
                    title: "t".to_string(),
                    body: "b".to_string(),
                    tags: vec![],
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn search_ranks_tag_matches_above_title_above_body() {
        let (repo, _tmp) = repo().await;

        repo.create(item("ciao in the title", "plain prose", &["misc"]))
            .await
            .unwrap();
        repo.create(item("body match", "this body mentions ciao once", &["misc"]))
            .await
            .unwrap();
        repo.create(item("tagged", "plain prose", &["ciao"]))
            .await
            .unwrap();
        repo.create(item("unrelated", "nothing to see", &["misc"]))
            .await
            .unwrap();

        let hits = repo.search("ciao").await.unwrap();
        let titles: Vec<&str> = hits.iter().map(|h| h.title.as_str()).collect();
        assert_eq!(titles, vec!["tagged", "ciao in the title", "body match"]);
    }

    #[tokio::test]
    async fn distinct_tags_deduplicates_and_sorts() {
        let (repo, _tmp) = repo().await;

        repo.create(item("a", "", &["1", "2"])).await.unwrap();
        repo.create(item("b", "", &["3", "4"])).await.unwrap();
        repo.create(item("c", "", &["1", "3"])).await.unwrap();

        let tags = repo.distinct_tags().await.unwrap();
        assert_eq!(tags, vec!["1", "2", "3", "4"]);
    }

    #[tokio::test]
    async fn distinct_tags_on_empty_store_is_empty() {
        let (repo, _tmp) = repo().await;
        assert!(repo.distinct_tags().await.unwrap().is_empty());
    }
}
