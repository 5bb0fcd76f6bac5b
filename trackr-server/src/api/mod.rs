//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`items`] - 物品管理接口
//! - [`comments`] - 物品评论子资源接口
//! - [`tags`] - 标签聚合接口

pub mod comments;
pub mod health;
pub mod items;
pub mod tags;
