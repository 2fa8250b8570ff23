//! Remote Accessor
//!
//! Access to the todo server's HTTP API, organized behind the `TodoApi`
//! trait so the board logic can run against an in-memory double.

mod http;
mod urls;

use async_trait::async_trait;
use log::warn;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::models::{FilterOptions, Stats, Todo, TodoUpdate};

pub use http::{ApiConfig, HttpTodoApi};

/// Errors from the remote todo service
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("server rejected request: {0}")]
    Rejected(String),
    #[error("{url} answered without a payload")]
    MissingData { url: String },
    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Operations offered by the todo server
#[async_trait(?Send)]
pub trait TodoApi {
    /// `GET /api/todos` with the filter's server-side fields
    async fn list_todos(&self, filters: &FilterOptions) -> ApiResult<Vec<Todo>>;

    /// `GET /api/todo/{id}`
    async fn get_todo(&self, id: &str) -> ApiResult<Todo>;

    /// `PUT /api/todo/{id}` with a partial body
    async fn update_todo(&self, id: &str, update: &TodoUpdate) -> ApiResult<Todo>;

    /// `DELETE /api/todo/{id}`
    async fn delete_todo(&self, id: &str) -> ApiResult<()>;

    /// `GET /api/stats`
    async fn stats(&self) -> ApiResult<Stats>;

    /// `GET /api/search?q=`
    async fn search_todos(&self, query: &str) -> ApiResult<Vec<Todo>>;
}

/// Fetch the collection the board should show for `filters`.
///
/// Free-text search goes to the search endpoint and the remaining fields
/// are applied locally; otherwise every field is sent as a query parameter.
pub async fn fetch_board<A: TodoApi + ?Sized>(api: &A, filters: &FilterOptions) -> ApiResult<Vec<Todo>> {
    match filters.search_text() {
        Some(query) => {
            let mut todos = api.search_todos(query).await?;
            todos.retain(|todo| filters.matches(todo));
            Ok(todos)
        }
        None => api.list_todos(filters).await,
    }
}

// ========================
// Response Decoding
// ========================

/// `{success, data?, error?}` wrapper some endpoints answer with
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct Envelope<T> {
    success: bool,
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Body<T> {
    Envelope(Envelope<T>),
    Bare(T),
}

#[derive(Deserialize)]
struct TodoList {
    #[serde(default)]
    todos: Option<Vec<serde_json::Value>>,
}

fn decode_error(url: &str, source: serde_json::Error) -> ApiError {
    ApiError::Decode {
        url: url.to_string(),
        source,
    }
}

fn rejected(error: Option<String>) -> ApiError {
    ApiError::Rejected(error.unwrap_or_else(|| "unknown error".to_string()))
}

/// Decode a payload that may arrive bare or wrapped in an envelope
pub(crate) fn decode_body<T: DeserializeOwned>(url: &str, text: &str) -> ApiResult<T> {
    match serde_json::from_str::<Body<T>>(text) {
        Ok(Body::Bare(value)) => Ok(value),
        Ok(Body::Envelope(env)) if env.success => env.data.ok_or_else(|| ApiError::MissingData {
            url: url.to_string(),
        }),
        Ok(Body::Envelope(env)) => Err(rejected(env.error)),
        // Re-parse as T for a precise error message
        Err(_) => serde_json::from_str::<T>(text).map_err(|e| decode_error(url, e)),
    }
}

/// Decode `{ todos: [...] }`, tolerating `null` and error envelopes.
///
/// Rows are decoded one at a time; a row that does not parse (for example
/// a status outside the known set) is skipped rather than failing the list.
pub(crate) fn decode_todo_list(url: &str, text: &str) -> ApiResult<Vec<Todo>> {
    if let Ok(env) = serde_json::from_str::<Envelope<serde_json::Value>>(text) {
        if !env.success {
            return Err(rejected(env.error));
        }
    }
    let list: TodoList = serde_json::from_str(text).map_err(|e| decode_error(url, e))?;
    let todos = list
        .todos
        .unwrap_or_default()
        .into_iter()
        .filter_map(|row| {
            let id = row.get("id").and_then(|v| v.as_str()).unwrap_or("?").to_string();
            match serde_json::from_value::<Todo>(row) {
                Ok(todo) => Some(todo),
                Err(e) => {
                    warn!("[API] Skipping todo {} from {}: {}", id, url, e);
                    None
                }
            }
        })
        .collect();
    Ok(todos)
}

/// Decode an acknowledgement; an empty body counts as success
pub(crate) fn decode_ack(url: &str, text: &str) -> ApiResult<()> {
    if text.trim().is_empty() {
        return Ok(());
    }
    let env: Envelope<serde_json::Value> = serde_json::from_str(text).map_err(|e| decode_error(url, e))?;
    if env.success {
        Ok(())
    } else {
        Err(rejected(env.error))
    }
}


#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::mock::MockApi;
    use super::*;
    use crate::models::{make_todo, Priority, TodoStatus};

    const URL: &str = "http://localhost:8080/api/todo/x";

    #[test]
    fn test_decode_bare_todo() {
        let text = r#"{"id":"x","file_path":"a.go","line_number":3,"type":"TODO","content":"c","status":"blocked"}"#;
        let todo: Todo = decode_body(URL, text).unwrap();
        assert_eq!(todo.status, TodoStatus::Blocked);
    }

    #[test]
    fn test_decode_success_envelope() {
        let text = r#"{"success":true,"data":{"id":"x","file_path":"a.go","line_number":3,"type":"TODO","content":"c","status":"closed"}}"#;
        let todo: Todo = decode_body(URL, text).unwrap();
        assert_eq!(todo.status, TodoStatus::Closed);
    }

    #[test]
    fn test_decode_error_envelope_is_rejected() {
        let text = r#"{"success":false,"error":"TODO not found"}"#;
        let err = decode_body::<Todo>(URL, text).unwrap_err();
        assert!(matches!(err, ApiError::Rejected(ref msg) if msg == "TODO not found"));
    }

    #[test]
    fn test_decode_envelope_without_data() {
        let err = decode_body::<Todo>(URL, r#"{"success":true}"#).unwrap_err();
        assert!(matches!(err, ApiError::MissingData { .. }));
    }

    #[test]
    fn test_decode_garbage_is_decode_error() {
        let err = decode_body::<Todo>(URL, "<html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[test]
    fn test_decode_todo_list_null_is_empty() {
        let todos = decode_todo_list(URL, r#"{"todos":null,"total":0}"#).unwrap();
        assert!(todos.is_empty());
    }

    #[test]
    fn test_decode_todo_list_skips_unparseable_rows() {
        let text = r#"{"todos":[
            {"id":"a","file_path":"a.go","line_number":1,"type":"TODO","content":"c","status":"open"},
            {"id":"b","file_path":"b.go","line_number":2,"type":"TODO","content":"c","status":"done"},
            {"id":"c","file_path":"c.go","line_number":3,"type":"BUG","content":"c","priority":"urgent"},
            {"id":"d","file_path":"d.go","line_number":4,"type":"FIXME","content":"c","status":"blocked"}
        ],"total":4}"#;

        let todos = decode_todo_list(URL, text).unwrap();
        assert_eq!(todos.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(), ["a", "d"]);
    }

    #[test]
    fn test_decode_todo_list_error_envelope() {
        let err = decode_todo_list(URL, r#"{"success":false,"error":"no such table"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Rejected(_)));
    }

    #[test]
    fn test_decode_ack() {
        assert!(decode_ack(URL, "").is_ok());
        assert!(decode_ack(URL, r#"{"success":true}"#).is_ok());
        assert!(decode_ack(URL, r#"{"success":false,"error":"x"}"#).is_err());
    }

    #[test]
    fn test_fetch_board_without_search_uses_list() {
        let api = MockApi::with_todos(vec![
            make_todo("a", TodoStatus::Open),
            make_todo("b", TodoStatus::Closed),
        ]);
        let filters = FilterOptions {
            status: Some(TodoStatus::Open),
            ..Default::default()
        };

        let todos = block_on(fetch_board(&api, &filters)).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(api.calls.borrow().as_slice(), ["list"]);
    }

    #[test]
    fn test_fetch_board_search_narrows_locally() {
        let mut urgent = make_todo("b", TodoStatus::Open);
        urgent.priority = Priority::P0;
        let api = MockApi::with_todos(vec![make_todo("a", TodoStatus::Open), urgent]);
        let filters = FilterOptions {
            priority: Some(Priority::P0),
            search: Some("  content ".to_string()),
            ..Default::default()
        };

        let todos = block_on(fetch_board(&api, &filters)).unwrap();
        assert_eq!(todos.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(), ["b"]);
        assert_eq!(api.calls.borrow().as_slice(), ["search content"]);
    }
}
