//! Drag End Transition
//!
//! A finished drag becomes at most one status change: collision picks the
//! release target, the drop resolver maps it to a status, and the
//! optimistic updater applies it.

use std::future::Future;

use leptos_dragdrop::{CollisionStrategy, DragEnd};
use log::debug;

use super::drop::resolve_drop;
use super::optimistic::{OptimisticUpdater, UpdateOutcome};
use super::BoardState;
use crate::api::TodoApi;

/// Apply a finished drag to `board`.
///
/// Returns the remote update to spawn, or `None` when the release had no
/// recognised target (nothing is changed and nothing is sent).
pub fn on_drag_end<A, S>(
    board: &mut BoardState,
    updater: &OptimisticUpdater<A>,
    strategy: &S,
    end: &DragEnd,
) -> Option<impl Future<Output = UpdateOutcome> + 'static>
where
    A: TodoApi + Clone + 'static,
    S: CollisionStrategy + ?Sized,
{
    let target = end.target(strategy);
    let Some(change) = resolve_drop(&end.id, target.as_deref(), board.todos()) else {
        debug!("[DND] {} released outside any target", end.id);
        return None;
    };

    debug!("[DND] Drop: dragged={}, target={:?}, status={}", end.id, target, change.status.as_str());
    Some(updater.apply(board, change))
}
