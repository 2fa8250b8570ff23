//! Kanban Board Component
//!
//! Status columns of draggable cards.
//! Uses leptos-dragdrop with closest-corner collision to pick the drop target.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::board::{partition_columns, OptimisticUpdater, UpdateOutcome, BOARD_COLUMNS};
use crate::components::{ConnectionError, DragOverlay, TodoCard};
use crate::context::use_app_context;
use crate::models::{Todo, TodoStatus};
use crate::store::{store_drag_end, store_refresh_stats, use_app_store, AppStateStoreFields, LoadState};

use leptos_dragdrop::*;

/// What the board area shows
#[derive(Clone, Debug, PartialEq)]
enum BoardView {
    Spinner,
    Error(String),
    Columns,
}

/// Kanban board with DnD support
#[component]
pub fn KanbanBoard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    // Create DnD signals
    let dnd = create_dnd_signals();
    let updater = OptimisticUpdater::new(ctx.api());

    // Bind global mouseup handler for dropping
    bind_global_mouseup(dnd, move |end| {
        let Some(pending) = store_drag_end(&store, &updater, &ClosestCorners, &end) else {
            return;
        };
        spawn_local(async move {
            // Lane counts only move once the server has the new status
            if let UpdateOutcome::Confirmed = pending.await {
                store_refresh_stats(store, &ctx.api()).await;
            }
        });
    });

    // Re-partitioned on every collection change
    let columns = Memo::new(move |_| partition_columns(store.board().read().todos()));

    // Spinner only until the first load; later reloads keep the board visible
    let board_view = Memo::new(move |_| match store.load_state().get() {
        LoadState::Failed(message) => BoardView::Error(message),
        LoadState::Loading if store.board().read().is_empty() => BoardView::Spinner,
        _ => BoardView::Columns,
    });

    view! {
        <div class="kanban-board">
            {move || match board_view.get() {
                BoardView::Spinner => view! {
                    <div class="board-loading"><span class="spinner"></span></div>
                }.into_any(),
                BoardView::Error(message) => view! { <ConnectionError message=message /> }.into_any(),
                BoardView::Columns => view! {
                    <div class="kanban-columns" data-drop-scope="board">
                        {BOARD_COLUMNS.iter().enumerate().map(|(index, &status)| {
                            let todos = Signal::derive(move || {
                                columns.with(|cols| cols.get(index).map(|c| c.todos.clone()).unwrap_or_default())
                            });
                            view! { <KanbanColumn status=status todos=todos dnd=dnd /> }
                        }).collect_view()}
                    </div>
                    <DragOverlay dnd=dnd />
                }.into_any(),
            }}
        </div>
    }
}

/// One status lane - itself a drop target keyed by the status
#[component]
fn KanbanColumn(
    status: TodoStatus,
    todos: Signal<Vec<Todo>>,
    dnd: DndSignals,
) -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="kanban-column" data-drop-id=status.as_str()>
            <div class="kanban-column-header">
                <h3>{status.label()}</h3>
                <span class="kanban-column-count">{move || todos.with(Vec::len)}</span>
            </div>

            <div class="kanban-cards">
                <For
                    each=move || todos.get()
                    key=|todo| {
                        // Every field a card displays, so edits re-render
                        (
                            todo.id.clone(),
                            todo.status,
                            todo.priority,
                            todo.content.clone(),
                            todo.assignee.clone(),
                            todo.due_date,
                        )
                    }
                    children=move |todo| {
                        let id = todo.id.clone();
                        let on_mousedown = make_on_mousedown(dnd, id.clone());

                        // Visual state
                        let drag_id = id.clone();
                        let card_class = move || {
                            if dnd.is_dragging(&drag_id) { "sortable-card ghost" } else { "sortable-card" }
                        };

                        let select_id = id.clone();
                        let on_click = move |_| {
                            // The click that ends a drag is not a selection
                            if !dnd.drag_just_ended_read.get_untracked() {
                                store.selected_todo().set(Some(select_id.clone()));
                            }
                        };

                        view! {
                            <div
                                class=card_class
                                data-drop-id=id
                                on:mousedown=on_mousedown
                                on:click=on_click
                            >
                                <TodoCard todo=todo />
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
