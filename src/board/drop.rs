//! Drop Resolver
//!
//! Maps a finished drag (dragged id, release target id) to a status change.

use super::columns::BOARD_COLUMNS;
use crate::models::{Todo, TodoStatus};

/// A resolved status assignment for one todo
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusChange {
    pub todo_id: String,
    pub status: TodoStatus,
}

/// Resolve a drop. First match wins:
/// 1. the target is a board column key -> that column's status
/// 2. the target is a known todo -> that todo's current status
/// 3. otherwise (no target, unknown id) -> no change
pub fn resolve_drop(dragged_id: &str, target_id: Option<&str>, todos: &[Todo]) -> Option<StatusChange> {
    let target_id = target_id?;

    let status = BOARD_COLUMNS
        .iter()
        .copied()
        .find(|status| status.as_str() == target_id)
        .or_else(|| todos.iter().find(|t| t.id == target_id).map(|t| t.status))?;

    Some(StatusChange {
        todo_id: dragged_id.to_string(),
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::make_todo;

    fn board() -> Vec<Todo> {
        vec![make_todo("i1", TodoStatus::Open), make_todo("i2", TodoStatus::InProgress)]
    }

    #[test]
    fn test_drop_on_column() {
        let change = resolve_drop("i1", Some("in_progress"), &board());
        assert_eq!(
            change,
            Some(StatusChange {
                todo_id: "i1".to_string(),
                status: TodoStatus::InProgress
            })
        );
    }

    #[test]
    fn test_drop_on_card_inherits_its_status() {
        let on_card = resolve_drop("i1", Some("i2"), &board());
        let on_column = resolve_drop("i1", Some("in_progress"), &board());
        assert_eq!(on_card, on_column);
    }

    #[test]
    fn test_drop_nowhere_is_noop() {
        assert_eq!(resolve_drop("i1", None, &board()), None);
        assert_eq!(resolve_drop("i1", Some("sidebar"), &board()), None);
    }

    #[test]
    fn test_wontfix_key_is_not_a_column() {
        assert_eq!(resolve_drop("i1", Some("wontfix"), &board()), None);
    }

    #[test]
    fn test_column_key_wins_over_todo_with_same_id() {
        let todos = vec![make_todo("i1", TodoStatus::Open), make_todo("blocked", TodoStatus::Closed)];
        let change = resolve_drop("i1", Some("blocked"), &todos).unwrap();
        assert_eq!(change.status, TodoStatus::Blocked);
    }

    #[test]
    fn test_drop_on_own_card_keeps_status() {
        let change = resolve_drop("i2", Some("i2"), &board()).unwrap();
        assert_eq!(change.status, TodoStatus::InProgress);
    }
}
