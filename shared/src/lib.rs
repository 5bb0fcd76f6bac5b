//! Shared types for the Trackr workspace
//!
//! API-boundary models and the error wire shape, used by both
//! `trackr-server` and `trackr-client` so the two sides cannot drift.

pub mod error;
pub mod models;

pub use error::ErrorResponse;
pub use models::{Comment, CommentCreate, Item, ItemCreate, ItemReplace};
