//! Optimistic Update Coordinator
//!
//! Applies a resolved status change to the local board at once and hands
//! back the remote half as a future for the caller to spawn.

use std::future::Future;

use log::{debug, error, warn};

use super::drop::StatusChange;
use super::BoardState;
use crate::api::{ApiError, TodoApi};
use crate::models::TodoUpdate;

/// How the remote half of an update ended
#[derive(Debug)]
pub enum UpdateOutcome {
    Confirmed,
    /// Logged; the local change is kept
    Failed(ApiError),
}

#[derive(Clone)]
pub struct OptimisticUpdater<A> {
    api: A,
}

impl<A> OptimisticUpdater<A>
where
    A: TodoApi + Clone + 'static,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Patch `board` synchronously, then return the `PUT {status}` request.
    ///
    /// The returned future never touches the board: success needs no
    /// further change and failure leaves the optimistic status in place.
    pub fn apply(&self, board: &mut BoardState, change: StatusChange) -> impl Future<Output = UpdateOutcome> + 'static {
        let StatusChange { todo_id, status } = change;

        if board.patch_status(&todo_id, status) {
            debug!("[BOARD] {} -> {} (local)", todo_id, status.as_str());
        } else {
            warn!("[BOARD] {} is not on the board, sending update anyway", todo_id);
        }

        let api = self.api.clone();
        async move {
            match api.update_todo(&todo_id, &TodoUpdate::status(status)).await {
                Ok(_) => {
                    debug!("[BOARD] {} -> {} confirmed", todo_id, status.as_str());
                    UpdateOutcome::Confirmed
                }
                Err(err) => {
                    error!("[BOARD] Failed to update status of {}: {}", todo_id, err);
                    UpdateOutcome::Failed(err)
                }
            }
        }
    }
}
