//! Comment API 模块
//!
//! 物品的评论子资源，嵌套在 /api/items/{id}/comments 下。

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/items/{id}/comments", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{comment_id}", get(handler::get_by_id))
}
