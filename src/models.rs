//! Frontend Models
//!
//! Data structures matching the todo server's JSON.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Workflow status of a todo; drives board column membership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    #[default]
    Open,
    InProgress,
    Blocked,
    Resolved,
    Wontfix,
    Closed,
}

impl TodoStatus {
    pub const ALL: [TodoStatus; 6] = [
        TodoStatus::Open,
        TodoStatus::InProgress,
        TodoStatus::Blocked,
        TodoStatus::Resolved,
        TodoStatus::Wontfix,
        TodoStatus::Closed,
    ];

    /// Wire key, also used as the column's drop id
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Open => "open",
            TodoStatus::InProgress => "in_progress",
            TodoStatus::Blocked => "blocked",
            TodoStatus::Resolved => "resolved",
            TodoStatus::Wontfix => "wontfix",
            TodoStatus::Closed => "closed",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TodoStatus::Open => "Open",
            TodoStatus::InProgress => "In Progress",
            TodoStatus::Blocked => "Blocked",
            TodoStatus::Resolved => "Resolved",
            TodoStatus::Wontfix => "Won't Fix",
            TodoStatus::Closed => "Closed",
        }
    }
}

/// Ordinal severity, P0 most urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Priority {
    P0,
    P1,
    P2,
    #[default]
    P3,
    P4,
}

impl Priority {
    pub const ALL: [Priority; 5] = [Priority::P0, Priority::P1, Priority::P2, Priority::P3, Priority::P4];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::P0 => "P0",
            Priority::P1 => "P1",
            Priority::P2 => "P2",
            Priority::P3 => "P3",
            Priority::P4 => "P4",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == key)
    }
}

/// Comment markers the scanner records as todo types
pub const TODO_TYPES: &[&str] = &["TODO", "FIXME", "HACK", "BUG", "NOTE", "XXX"];

/// A code-derived task record (matches server)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Assigned by the server, stable across updates
    pub id: String,
    pub file_path: String,
    pub line_number: u32,
    #[serde(default)]
    pub column: u32,
    #[serde(rename = "type")]
    pub todo_type: String,
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: TodoStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub assignee: String,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// Estimate in minutes
    #[serde(default)]
    pub estimate: Option<u32>,
    #[serde(default)]
    pub hash: String,
}

impl Todo {
    /// Last path component of `file_path`
    pub fn file_name(&self) -> &str {
        self.file_path.rsplit('/').next().unwrap_or(&self.file_path)
    }

    /// `name:line` location shown on cards
    pub fn location(&self) -> String {
        format!("{}:{}", self.file_name(), self.line_number)
    }

    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.due_date.is_some_and(|due| due < now)
    }
}

/// Partial update body for `PUT /api/todo/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TodoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TodoStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl TodoUpdate {
    pub fn status(status: TodoStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

/// Aggregate counts from `GET /api/stats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub by_status: BTreeMap<String, i64>,
    #[serde(default)]
    pub by_type: BTreeMap<String, i64>,
    #[serde(default)]
    pub by_priority: BTreeMap<String, i64>,
}

impl Stats {
    pub fn count_for(&self, status: TodoStatus) -> i64 {
        self.by_status.get(status.as_str()).copied().unwrap_or(0)
    }
}

/// Query options produced by the filter bar; `None` fields are wildcards
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub status: Option<TodoStatus>,
    pub priority: Option<Priority>,
    pub assignee: Option<String>,
    #[serde(rename = "type")]
    pub todo_type: Option<String>,
    pub search: Option<String>,
}

impl FilterOptions {
    /// No field narrows the result
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Non-empty search text, trimmed
    pub fn search_text(&self) -> Option<&str> {
        self.search.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Server-side query parameters (search is served by its own endpoint)
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(priority) = self.priority {
            pairs.push(("priority", priority.as_str().to_string()));
        }
        if let Some(assignee) = self.assignee.as_deref().filter(|a| !a.is_empty()) {
            pairs.push(("assignee", assignee.to_string()));
        }
        if let Some(todo_type) = self.todo_type.as_deref().filter(|t| !t.is_empty()) {
            pairs.push(("type", todo_type.to_string()));
        }
        pairs
    }

    /// Client-side check of the non-search fields, all combined with AND
    pub fn matches(&self, todo: &Todo) -> bool {
        self.status.map_or(true, |s| todo.status == s)
            && self.priority.map_or(true, |p| todo.priority == p)
            && self
                .assignee
                .as_deref()
                .filter(|a| !a.is_empty())
                .map_or(true, |a| todo.assignee == a)
            && self
                .todo_type
                .as_deref()
                .filter(|t| !t.is_empty())
                .map_or(true, |t| todo.todo_type == t)
    }
}

#[cfg(test)]
pub(crate) fn make_todo(id: &str, status: TodoStatus) -> Todo {
    Todo {
        id: id.to_string(),
        file_path: format!("src/{}.rs", id),
        line_number: 10,
        column: 4,
        todo_type: "TODO".to_string(),
        content: format!("content of {}", id),
        author: "dev".to_string(),
        email: "dev@example.com".to_string(),
        created_at: None,
        updated_at: None,
        status,
        priority: Priority::P2,
        category: String::new(),
        assignee: String::new(),
        due_date: None,
        estimate: None,
        hash: format!("hash-{}", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_deserialize_server_todo() {
        let json = r#"{
            "id": "a1b2",
            "file_path": "internal/parser/parser.go",
            "line_number": 42,
            "column": 3,
            "type": "FIXME",
            "content": "handle nested comments",
            "author": "Jane",
            "email": "jane@example.com",
            "created_at": "2024-03-01T10:00:00Z",
            "updated_at": "2024-03-02T10:00:00Z",
            "status": "in_progress",
            "priority": "P1",
            "category": "parser",
            "assignee": "jane",
            "due_date": "2024-04-01T00:00:00Z",
            "estimate": 90,
            "hash": "deadbeef"
        }"#;

        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.status, TodoStatus::InProgress);
        assert_eq!(todo.priority, Priority::P1);
        assert_eq!(todo.todo_type, "FIXME");
        assert_eq!(todo.estimate, Some(90));
        assert_eq!(todo.location(), "parser.go:42");
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{"id":"x","file_path":"main.go","line_number":1,"type":"TODO","content":"c"}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.status, TodoStatus::Open);
        assert_eq!(todo.priority, Priority::P3);
        assert!(todo.due_date.is_none());
        assert_eq!(todo.file_name(), "main.go");
    }

    #[test]
    fn test_status_keys_round_trip_through_from_key() {
        for status in TodoStatus::ALL {
            assert_eq!(TodoStatus::from_key(status.as_str()), Some(status));
        }
        assert_eq!(TodoStatus::from_key("done"), None);
    }

    #[test]
    fn test_status_update_serializes_only_status() {
        let body = serde_json::to_value(TodoUpdate::status(TodoStatus::InProgress)).unwrap();
        assert_eq!(body, serde_json::json!({ "status": "in_progress" }));
    }

    #[test]
    fn test_overdue() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let mut todo = make_todo("t", TodoStatus::Open);
        assert!(!todo.is_overdue(now));
        todo.due_date = Some(Utc.with_ymd_and_hms(2024, 4, 30, 0, 0, 0).unwrap());
        assert!(todo.is_overdue(now));
        todo.due_date = Some(Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap());
        assert!(!todo.is_overdue(now));
    }

    #[test]
    fn test_query_pairs_skip_wildcards_and_search() {
        let filters = FilterOptions {
            status: Some(TodoStatus::Blocked),
            priority: None,
            assignee: Some(String::new()),
            todo_type: Some("BUG".to_string()),
            search: Some("parser".to_string()),
        };
        assert_eq!(
            filters.query_pairs(),
            vec![("status", "blocked".to_string()), ("type", "BUG".to_string())]
        );
    }

    #[test]
    fn test_matches_combines_with_and() {
        let mut todo = make_todo("t", TodoStatus::Open);
        todo.assignee = "sam".to_string();

        let filters = FilterOptions {
            status: Some(TodoStatus::Open),
            assignee: Some("sam".to_string()),
            ..Default::default()
        };
        assert!(filters.matches(&todo));

        let filters = FilterOptions {
            priority: Some(Priority::P0),
            ..filters
        };
        assert!(!filters.matches(&todo));
        assert!(FilterOptions::default().matches(&todo));
    }

    #[test]
    fn test_filters_is_empty() {
        assert!(FilterOptions::default().is_empty());
        let filters = FilterOptions {
            todo_type: Some("HACK".to_string()),
            ..Default::default()
        };
        assert!(!filters.is_empty());
    }

    #[test]
    fn test_stats_missing_status_counts_zero() {
        let stats: Stats = serde_json::from_str(r#"{"total":3,"by_status":{"open":2,"closed":1}}"#).unwrap();
        assert_eq!(stats.count_for(TodoStatus::Open), 2);
        assert_eq!(stats.count_for(TodoStatus::Blocked), 0);
        assert!(stats.by_type.is_empty());
    }
}
