//! Trackr Client
//!
//! The data-access layer consumed by front-end controllers: one
//! asynchronous contract ([`ItemSource`]) with an HTTP implementation
//! backed by the REST API and a deterministic in-memory implementation
//! for UI tests, plus a broadcast channel for transient flash messages.

pub mod config;
pub mod error;
pub mod http;
pub mod notify;
pub mod source;

// Re-export main types
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{Created, HttpClient};
pub use notify::{FlashBus, FlashMessage};
pub use source::{HttpSource, ItemSource, MemorySource};
