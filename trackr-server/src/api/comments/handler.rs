//! Comment API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::core::ServerState;
use crate::db::repository::{CommentRepository, ItemRepository};
use crate::utils::validation::validate_comment_fields;
use crate::utils::{AppError, AppResult};
use shared::models::{Comment, CommentCreate};

/// GET /api/items/:id/comments - 某物品的全部评论
///
/// 物品不存在时返回空列表，与按引用查询的语义一致。
pub async fn list(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Comment>>> {
    let repo = CommentRepository::new(state.db.clone());
    let records = repo.find_by_item(&id).await?;
    Ok(Json(records.into_iter().map(Comment::from).collect()))
}

/// POST /api/items/:id/comments - 创建评论
///
/// 两步操作：先确认物品存在，再插入评论。
pub async fn create(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CommentCreate>,
) -> AppResult<impl IntoResponse> {
    validate_comment_fields(&payload.body)?;

    let items = ItemRepository::new(state.db.clone());
    items
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Item {id} not found")))?;

    let repo = CommentRepository::new(state.db.clone());
    let comment = Comment::from(repo.create(&id, payload.body).await?);

    let location = format!("/api/items/{id}/comments/{}", comment.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(comment),
    ))
}

/// GET /api/items/:id/comments/:comment_id - 获取单条评论
///
/// 评论必须属于路径中的物品，否则 404。
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path((id, comment_id)): Path<(String, String)>,
) -> AppResult<Json<Comment>> {
    let repo = CommentRepository::new(state.db.clone());
    let record = repo
        .find_by_id(&comment_id)
        .await?
        .filter(|c| c.item.id.to_raw() == id)
        .ok_or_else(|| AppError::not_found(format!("Comment {comment_id} not found")))?;
    Ok(Json(Comment::from(record)))
}
