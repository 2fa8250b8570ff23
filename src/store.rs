//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::future::Future;

use leptos::prelude::*;
use leptos_dragdrop::{CollisionStrategy, DragEnd};
use log::warn;
use reactive_stores::Store;

use crate::api::TodoApi;
use crate::board::{on_drag_end, BoardState, OptimisticUpdater, UpdateOutcome};
use crate::models::{FilterOptions, Stats, Todo};

/// Progress of the board's collection fetch
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    /// Blocking connection error, message for the user
    Failed(String),
}

/// Identifies one board load
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Orders board loads so only the most recently started one may publish
#[derive(Debug, Default)]
pub struct LoadSequence {
    latest: u64,
}

impl LoadSequence {
    /// Start a load, superseding every earlier one
    pub fn next(&mut self) -> LoadTicket {
        self.latest += 1;
        LoadTicket(self.latest)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Todos shown on the board
    pub board: BoardState,
    /// Aggregate counts, absent until loaded
    pub stats: Option<Stats>,
    /// Current filter bar selection
    pub filters: FilterOptions,
    pub load_state: LoadState,
    /// Todo opened in the detail panel
    pub selected_todo: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the board's collection after a fetch
pub fn store_replace_todos(store: &AppStore, todos: Vec<Todo>) {
    store.board().write().replace_all(todos);
}

/// Apply a finished drag to the board; returns the remote request to spawn
pub fn store_drag_end<A, S>(
    store: &AppStore,
    updater: &OptimisticUpdater<A>,
    strategy: &S,
    end: &DragEnd,
) -> Option<impl Future<Output = UpdateOutcome> + 'static>
where
    A: TodoApi + Clone + 'static,
    S: CollisionStrategy + ?Sized,
{
    let board_field = store.board();
    let mut board = board_field.write();
    on_drag_end(&mut board, updater, strategy, end)
}

/// Re-fetch the statistics strip; a failure keeps the current counts
pub async fn store_refresh_stats<A: TodoApi + ?Sized>(store: AppStore, api: &A) {
    match api.stats().await {
        Ok(stats) => store.stats().set(Some(stats)),
        Err(e) => warn!("[APP] Failed to refresh stats: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_load_is_current() {
        let mut loads = LoadSequence::default();
        let first = loads.next();
        assert!(loads.is_current(first));

        let second = loads.next();
        assert!(loads.is_current(second));
        assert!(!loads.is_current(first));
    }

    #[test]
    fn test_older_load_finishing_last_is_stale() {
        // Same filters twice, e.g. a reload after delete and then Retry
        let mut loads = LoadSequence::default();
        let after_delete = loads.next();
        let retry = loads.next();

        assert!(loads.is_current(retry));
        assert!(!loads.is_current(after_delete));
        assert_ne!(after_delete, retry);
    }
}
