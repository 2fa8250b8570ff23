//! Kanban Board Engine
//!
//! Everything the board does that does not need a DOM: the owned todo
//! collection, column partitioning, drop resolution, the optimistic
//! status update and the drag-end transition tying them together.

mod columns;
mod drag_end;
mod drop;
mod optimistic;

pub use columns::{partition_columns, BOARD_COLUMNS};
pub use drag_end::on_drag_end;
pub use optimistic::{OptimisticUpdater, UpdateOutcome};

use crate::models::{Todo, TodoStatus};

/// The single todo collection the board renders.
///
/// Only two writes exist: a full replace after a fetch, and a one-item
/// status patch from the optimistic updater.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardState {
    todos: Vec<Todo>,
}

impl BoardState {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self { todos }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn find(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Replace the whole collection (completed fetch)
    pub fn replace_all(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
    }

    /// Set one todo's status, leaving every other field alone.
    /// Returns false when no todo has that id.
    pub fn patch_status(&mut self, id: &str, status: TodoStatus) -> bool {
        match self.todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.status = status;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::make_todo;

    #[test]
    fn test_patch_status_touches_only_status() {
        let mut board = BoardState::new(vec![make_todo("a", TodoStatus::Open), make_todo("b", TodoStatus::Open)]);
        let before = board.find("a").cloned().unwrap();

        assert!(board.patch_status("a", TodoStatus::Blocked));

        let after = board.find("a").unwrap();
        assert_eq!(after.status, TodoStatus::Blocked);
        assert_eq!(Todo { status: before.status, ..after.clone() }, before);
        assert_eq!(board.find("b").unwrap().status, TodoStatus::Open);
    }

    #[test]
    fn test_patch_missing_id_is_noop() {
        let mut board = BoardState::new(vec![make_todo("a", TodoStatus::Open)]);
        let snapshot = board.clone();
        assert!(!board.patch_status("zz", TodoStatus::Closed));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_replace_all_swaps_collection() {
        let mut board = BoardState::new(vec![make_todo("a", TodoStatus::Open)]);
        board.replace_all(vec![make_todo("b", TodoStatus::Closed), make_todo("c", TodoStatus::Open)]);
        assert_eq!(board.len(), 2);
        assert!(board.find("a").is_none());
    }
}
