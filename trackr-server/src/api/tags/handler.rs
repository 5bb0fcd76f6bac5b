//! Tag API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::ItemRepository;
use crate::utils::AppResult;

/// GET /api/tags - 全部物品上去重后的标签集合
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<String>>> {
    let repo = ItemRepository::new(state.db.clone());
    let tags = repo.distinct_tags().await?;
    Ok(Json(tags))
}
