//! HTTP Todo API
//!
//! `TodoApi` over the server's JSON endpoints using reqwest (fetch on wasm32).

use async_trait::async_trait;
use log::debug;

use super::urls::{search_url, stats_url, todo_url, todos_url};
use super::{decode_ack, decode_body, decode_todo_list, ApiError, ApiResult, TodoApi};
use crate::models::{FilterOptions, Stats, Todo, TodoUpdate};

/// Where the API lives
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// Absolute base URL, e.g. `http://localhost:8080/api`
    pub base_url: String,
}

impl ApiConfig {
    pub const API_PREFIX: &'static str = "/api";

    /// Serve the API from the page's own origin
    pub fn from_window() -> Self {
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());
        Self::from_origin(origin.as_deref())
    }

    pub fn from_origin(origin: Option<&str>) -> Self {
        let origin = origin
            .map(|o| o.trim_end_matches('/'))
            .filter(|o| !o.is_empty() && *o != "null");
        let base_url = match origin {
            Some(origin) => format!("{}{}", origin, Self::API_PREFIX),
            None => Self::API_PREFIX.to_string(),
        };
        Self { base_url }
    }
}

/// reqwest-backed client for the todo server
#[derive(Clone, Debug)]
pub struct HttpTodoApi {
    client: reqwest::Client,
    base: String,
}

impl HttpTodoApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: config.base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    async fn read_text(url: &str, response: reqwest::Response) -> ApiResult<String> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().await.map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })
    }

    async fn send(&self, url: &str, request: reqwest::RequestBuilder) -> ApiResult<String> {
        let response = request.send().await.map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;
        Self::read_text(url, response).await
    }

    async fn get_text(&self, url: &str) -> ApiResult<String> {
        debug!("[API] GET {}", url);
        self.send(url, self.client.get(url)).await
    }
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list_todos(&self, filters: &FilterOptions) -> ApiResult<Vec<Todo>> {
        let url = todos_url(&self.base, filters);
        let text = self.get_text(&url).await?;
        decode_todo_list(&url, &text)
    }

    async fn get_todo(&self, id: &str) -> ApiResult<Todo> {
        let url = todo_url(&self.base, id);
        let text = self.get_text(&url).await?;
        decode_body(&url, &text)
    }

    async fn update_todo(&self, id: &str, update: &TodoUpdate) -> ApiResult<Todo> {
        let url = todo_url(&self.base, id);
        debug!("[API] PUT {} {:?}", url, update);
        let text = self.send(&url, self.client.put(&url).json(update)).await?;
        decode_body(&url, &text)
    }

    async fn delete_todo(&self, id: &str) -> ApiResult<()> {
        let url = todo_url(&self.base, id);
        debug!("[API] DELETE {}", url);
        let text = self.send(&url, self.client.delete(&url)).await?;
        decode_ack(&url, &text)
    }

    async fn stats(&self) -> ApiResult<Stats> {
        let url = stats_url(&self.base);
        let text = self.get_text(&url).await?;
        decode_body(&url, &text)
    }

    async fn search_todos(&self, query: &str) -> ApiResult<Vec<Todo>> {
        let url = search_url(&self.base, query);
        let text = self.get_text(&url).await?;
        decode_todo_list(&url, &text)
    }
}
