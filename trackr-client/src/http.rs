//! HTTP client for the Trackr REST API

use reqwest::{Client, StatusCode, header};
use serde::de::DeserializeOwned;

use shared::ErrorResponse;
use shared::models::{Comment, CommentCreate, Item, ItemCreate, ItemReplace};

use crate::{ClientConfig, ClientError, ClientResult};

/// A created resource together with its `Location` header
#[derive(Debug, Clone)]
pub struct Created<T> {
    pub location: Option<String>,
    pub body: T,
}

/// HTTP client for making network requests to the Trackr server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body, keeping the `Location` header
    async fn post_created<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Created<T>> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = Self::handle_response(response).await?;
        Ok(Created { location, body })
    }

    /// Make a PUT request with JSON body
    async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            // Prefer the structured error body; fall back to raw text
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.message)
                .unwrap_or(text);
            tracing::debug!(status = %status, message = %message, "Request failed");
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(message)),
                _ => Err(ClientError::Internal(message)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    // ========== Items API ==========

    /// List items, optionally filtered by a full-text query
    pub async fn find_items(&self, text: Option<&str>) -> ClientResult<Vec<Item>> {
        match text {
            Some(text) => {
                let response = self
                    .client
                    .get(self.url("/api/items"))
                    .query(&[("text", text)])
                    .send()
                    .await?;
                Self::handle_response(response).await
            }
            None => self.get("/api/items").await,
        }
    }

    /// Fetch a single item by id
    pub async fn get_item(&self, id: &str) -> ClientResult<Item> {
        self.get(&format!("/api/items/{id}")).await
    }

    /// Create a new item
    pub async fn create_item(&self, payload: &ItemCreate) -> ClientResult<Created<Item>> {
        self.post_created("/api/items", payload).await
    }

    /// Replace an item's title, body and tags
    pub async fn replace_item(&self, id: &str, payload: &ItemReplace) -> ClientResult<Item> {
        self.put(&format!("/api/items/{id}"), payload).await
    }

    // ========== Comments API ==========

    /// List the comments on an item
    pub async fn list_comments(&self, item_id: &str) -> ClientResult<Vec<Comment>> {
        self.get(&format!("/api/items/{item_id}/comments")).await
    }

    /// Add a comment to an item
    pub async fn add_comment(
        &self,
        item_id: &str,
        body: impl Into<String>,
    ) -> ClientResult<Created<Comment>> {
        let payload = CommentCreate { body: body.into() };
        self.post_created(&format!("/api/items/{item_id}/comments"), &payload)
            .await
    }

    /// Fetch a single comment
    pub async fn get_comment(&self, item_id: &str, comment_id: &str) -> ClientResult<Comment> {
        self.get(&format!("/api/items/{item_id}/comments/{comment_id}"))
            .await
    }

    // ========== Tags API ==========

    /// All distinct tags in use
    pub async fn get_tags(&self) -> ClientResult<Vec<String>> {
        self.get("/api/tags").await
    }
}
