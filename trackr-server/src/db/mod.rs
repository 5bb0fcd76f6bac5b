//! Database Module
//!
//! Embedded SurrealDB storage: connection, schema and search indexes.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database at `db_path` and apply the schema.
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns("trackr")
            .use_db("trackr")
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        define_schema(&db).await?;

        tracing::info!("Database ready ({db_path})");

        Ok(Self { db })
    }
}

/// Table, field and index definitions.
///
/// All statements are idempotent (IF NOT EXISTS) and applied on every
/// start. The three search indexes back the weighted item text search:
/// relevance = tags*10 + title*5 + body*1.
async fn define_schema(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query(
        "
        DEFINE TABLE IF NOT EXISTS item SCHEMAFULL;
        DEFINE FIELD IF NOT EXISTS title ON item TYPE string;
        DEFINE FIELD IF NOT EXISTS body ON item TYPE string;
        DEFINE FIELD IF NOT EXISTS tags ON item TYPE array<string>;

        DEFINE TABLE IF NOT EXISTS comment SCHEMAFULL;
        DEFINE FIELD IF NOT EXISTS item ON comment TYPE record<item>;
        DEFINE FIELD IF NOT EXISTS timestamp ON comment TYPE datetime;
        DEFINE FIELD IF NOT EXISTS body ON comment TYPE string;

        DEFINE ANALYZER IF NOT EXISTS item_text TOKENIZERS class FILTERS lowercase, ascii;
        DEFINE INDEX IF NOT EXISTS item_tags_search ON item FIELDS tags SEARCH ANALYZER item_text BM25;
        DEFINE INDEX IF NOT EXISTS item_title_search ON item FIELDS title SEARCH ANALYZER item_text BM25;
        DEFINE INDEX IF NOT EXISTS item_body_search ON item FIELDS body SEARCH ANALYZER item_text BM25;
        DEFINE INDEX IF NOT EXISTS comment_item ON comment FIELDS item;
        ",
    )
    .await
    .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?
    .check()
    .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;

    Ok(())
}
