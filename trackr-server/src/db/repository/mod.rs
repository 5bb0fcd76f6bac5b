//! Repository Module
//!
//! CRUD and search operations over the SurrealDB tables.

pub mod comment;
pub mod item;

// Re-exports
pub use comment::CommentRepository;
pub use item::ItemRepository;

use chrono::Utc;
use rand::RngCore;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use surrealdb::sql::Thing;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

/// Build a record pointer from a table name and a bare key.
pub(crate) fn make_thing(table: &str, key: &str) -> Thing {
    Thing::from((table.to_string(), key.to_string()))
}

/// Generate a record key: 24 lowercase hex chars.
///
/// 4 big-endian unix-timestamp bytes followed by 8 random bytes, so
/// keys sort roughly by creation time and never collide in practice.
pub(crate) fn record_key() -> String {
    let mut bytes = [0u8; 12];
    let ts = Utc::now().timestamp() as u32;
    bytes[..4].copy_from_slice(&ts.to_be_bytes());
    rand::thread_rng().fill_bytes(&mut bytes[4..]);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keys_are_24_lowercase_hex_chars() {
        let key = record_key();
        assert_eq!(key.len(), 24);
        assert!(key.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
    }

    #[test]
    fn record_keys_do_not_repeat() {
        let keys: std::collections::HashSet<String> = (0..1000).map(|_| record_key()).collect();
        assert_eq!(keys.len(), 1000);
    }

    #[test]
    fn make_thing_keeps_the_bare_key() {
        let thing = make_thing("item", "518e5b6d96661c4008000002");
        assert_eq!(thing.tb, "item");
        assert_eq!(thing.id.to_raw(), "518e5b6d96661c4008000002");
    }
}
