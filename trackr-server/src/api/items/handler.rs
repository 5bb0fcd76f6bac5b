//! Item API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::ItemRepository;
use crate::utils::validation::validate_item_fields;
use crate::utils::{AppError, AppResult};
use shared::models::{Item, ItemCreate, ItemReplace};

/// Query string for item listing
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Full-text query across tags, title and body
    pub text: Option<String>,
}

/// GET /api/items - 获取所有物品，可选 ?text= 全文搜索
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Item>>> {
    let repo = ItemRepository::new(state.db.clone());
    let records = match query.text.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        Some(text) => repo.search(text).await?,
        None => repo.find_all().await?,
    };
    Ok(Json(records.into_iter().map(Item::from).collect()))
}

/// GET /api/items/:id - 获取单个物品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Item>> {
    let repo = ItemRepository::new(state.db.clone());
    let record = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Item {id} not found")))?;
    Ok(Json(Item::from(record)))
}

/// POST /api/items - 创建物品
///
/// 201 响应携带 Location 头指向新资源。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ItemCreate>,
) -> AppResult<impl IntoResponse> {
    validate_item_fields(&payload.title, &payload.body, &payload.tags)?;

    let repo = ItemRepository::new(state.db.clone());
    let item = Item::from(repo.create(payload).await?);

    let location = format!("/api/items/{}", item.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(item),
    ))
}

/// PUT /api/items/:id - 全量替换物品的可变字段
pub async fn replace(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ItemReplace>,
) -> AppResult<Json<Item>> {
    validate_item_fields(&payload.title, &payload.body, &payload.tags)?;

    let repo = ItemRepository::new(state.db.clone());
    let record = repo.replace(&id, payload).await?;
    Ok(Json(Item::from(record)))
}
