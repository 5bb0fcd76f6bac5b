//! Item data sources
//!
//! [`ItemSource`] is the asynchronous contract front-end controllers
//! consume. [`HttpSource`] talks to the REST API; [`MemorySource`] is a
//! deterministic, seedable stand-in for UI tests: an explicit injected
//! data source rather than ambient shared state.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use shared::models::{Comment, Item, ItemCreate};

use crate::{ClientConfig, ClientError, ClientResult, HttpClient};

/// Asynchronous item data-access contract
///
/// Every call settles exactly once; failures propagate to the caller
/// as [`ClientError`] values.
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// List items; `query` filters by full-text relevance when given.
    async fn find(&self, query: Option<&str>) -> ClientResult<Vec<Item>>;

    /// Fetch one item, failing with [`ClientError::NotFound`] otherwise.
    async fn get(&self, id: &str) -> ClientResult<Item>;

    /// Create an item; the source assigns the id.
    async fn create(&self, item: ItemCreate) -> ClientResult<Item>;

    /// Append a timestamped comment to an item and yield the item again.
    async fn update(&self, id: &str, comment_text: &str) -> ClientResult<Item>;

    /// Deduplicated union of all tags across all items.
    async fn get_tags(&self) -> ClientResult<Vec<String>>;
}

/// REST-backed item source
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: HttpClient,
}

impl HttpSource {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: HttpClient::new(config),
        }
    }

    /// The underlying client, for callers needing the full REST surface
    pub fn client(&self) -> &HttpClient {
        &self.client
    }
}

#[async_trait]
impl ItemSource for HttpSource {
    async fn find(&self, query: Option<&str>) -> ClientResult<Vec<Item>> {
        self.client.find_items(query).await
    }

    async fn get(&self, id: &str) -> ClientResult<Item> {
        self.client.get_item(id).await
    }

    async fn create(&self, item: ItemCreate) -> ClientResult<Item> {
        Ok(self.client.create_item(&item).await?.body)
    }

    async fn update(&self, id: &str, comment_text: &str) -> ClientResult<Item> {
        self.client.add_comment(id, comment_text).await?;
        self.client.get_item(id).await
    }

    async fn get_tags(&self) -> ClientResult<Vec<String>> {
        self.client.get_tags().await
    }
}

/// One stored item with its comments
#[derive(Debug, Clone)]
struct StoredItem {
    item: Item,
    comments: Vec<Comment>,
}

/// In-memory item source with deterministic seeding
///
/// Ids come from a monotonic counter rendered in the same 24-hex shape
/// the server assigns, so seeded fixtures and created items look alike.
pub struct MemorySource {
    items: Mutex<Vec<StoredItem>>,
    next_id: AtomicU64,
}

impl MemorySource {
    /// Empty source
    pub fn new() -> Self {
        Self::with_seed(Vec::new())
    }

    /// Source pre-populated with `items`; ids keep counting above the seed
    pub fn with_seed(items: Vec<Item>) -> Self {
        let next_id = items.len() as u64 + 1;
        Self {
            items: Mutex::new(
                items
                    .into_iter()
                    .map(|item| StoredItem {
                        item,
                        comments: Vec::new(),
                    })
                    .collect(),
            ),
            next_id: AtomicU64::new(next_id),
        }
    }

    /// The comments recorded against one item
    pub async fn comments(&self, id: &str) -> ClientResult<Vec<Comment>> {
        self.items
            .lock()
            .await
            .iter()
            .find(|s| s.item.id == id)
            .map(|s| s.comments.clone())
            .ok_or_else(|| ClientError::NotFound(format!("Item {id} not found")))
    }

    fn next_key(&self) -> String {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed);
        format!("{n:024x}")
    }
}

impl Default for MemorySource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemSource for MemorySource {
    async fn find(&self, _query: Option<&str>) -> ClientResult<Vec<Item>> {
        Ok(self
            .items
            .lock()
            .await
            .iter()
            .map(|s| s.item.clone())
            .collect())
    }

    async fn get(&self, id: &str) -> ClientResult<Item> {
        self.items
            .lock()
            .await
            .iter()
            .find(|s| s.item.id == id)
            .map(|s| s.item.clone())
            .ok_or_else(|| ClientError::NotFound(format!("Item {id} not found")))
    }

    async fn create(&self, item: ItemCreate) -> ClientResult<Item> {
        let created = Item {
            id: self.next_key(),
            title: item.title,
            body: item.body,
            tags: item.tags,
        };
        self.items.lock().await.push(StoredItem {
            item: created.clone(),
            comments: Vec::new(),
        });
        Ok(created)
    }

    async fn update(&self, id: &str, comment_text: &str) -> ClientResult<Item> {
        let mut items = self.items.lock().await;
        let stored = items
            .iter_mut()
            .find(|s| s.item.id == id)
            .ok_or_else(|| ClientError::NotFound(format!("Item {id} not found")))?;
        let comment = Comment {
            id: self.next_key(),
            item_id: id.to_string(),
            body: comment_text.to_string(),
            timestamp: Utc::now(),
        };
        stored.comments.push(comment);
        Ok(stored.item.clone())
    }

    async fn get_tags(&self) -> ClientResult<Vec<String>> {
        let items = self.items.lock().await;
        let mut tags: Vec<String> = items
            .iter()
            .flat_map(|s| s.item.tags.iter().cloned())
            .collect();
        tags.sort();
        tags.dedup();
        Ok(tags)
    }
}
