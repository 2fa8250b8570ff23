//! Column Partition
//!
//! Groups todos into the board's status lanes.

use crate::models::{Todo, TodoStatus};

/// Lanes rendered on the board, in display order. `Wontfix` is a valid
/// status but has no lane.
pub const BOARD_COLUMNS: [TodoStatus; 5] = [
    TodoStatus::Open,
    TodoStatus::InProgress,
    TodoStatus::Blocked,
    TodoStatus::Resolved,
    TodoStatus::Closed,
];

/// One lane and the todos currently in it
#[derive(Clone, Debug, PartialEq)]
pub struct BoardColumn {
    pub status: TodoStatus,
    pub todos: Vec<Todo>,
}

/// Stable partition of `todos` into the board lanes.
/// Todos whose status has no lane are left out.
pub fn partition_columns(todos: &[Todo]) -> Vec<BoardColumn> {
    BOARD_COLUMNS
        .iter()
        .map(|&status| BoardColumn {
            status,
            todos: todos.iter().filter(|t| t.status == status).cloned().collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::make_todo;

    fn ids(column: &BoardColumn) -> Vec<&str> {
        column.todos.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_columns_in_display_order() {
        let columns = partition_columns(&[]);
        let statuses: Vec<_> = columns.iter().map(|c| c.status).collect();
        assert_eq!(statuses, BOARD_COLUMNS.to_vec());
        assert!(columns.iter().all(|c| c.todos.is_empty()));
    }

    #[test]
    fn test_partition_is_stable() {
        let todos = vec![
            make_todo("1", TodoStatus::Open),
            make_todo("2", TodoStatus::Closed),
            make_todo("3", TodoStatus::Open),
            make_todo("4", TodoStatus::InProgress),
            make_todo("5", TodoStatus::Open),
        ];
        let columns = partition_columns(&todos);

        assert_eq!(ids(&columns[0]), ["1", "3", "5"]);
        assert_eq!(ids(&columns[1]), ["4"]);
        assert_eq!(ids(&columns[4]), ["2"]);
    }

    #[test]
    fn test_partition_is_complete_and_disjoint() {
        let todos: Vec<_> = TodoStatus::ALL
            .iter()
            .cycle()
            .take(18)
            .enumerate()
            .map(|(i, &s)| make_todo(&i.to_string(), s))
            .collect();
        let columns = partition_columns(&todos);

        let mut placed: Vec<&str> = columns.iter().flat_map(|c| c.todos.iter().map(|t| t.id.as_str())).collect();
        placed.sort_unstable();
        let mut expected: Vec<&str> = todos
            .iter()
            .filter(|t| t.status != TodoStatus::Wontfix)
            .map(|t| t.id.as_str())
            .collect();
        expected.sort_unstable();

        assert_eq!(placed, expected);
        for column in &columns {
            assert!(column.todos.iter().all(|t| t.status == column.status));
        }
    }

    #[test]
    fn test_wontfix_is_not_rendered() {
        let columns = partition_columns(&[make_todo("w", TodoStatus::Wontfix)]);
        assert!(columns.iter().all(|c| c.todos.is_empty()));
    }
}
