//! Drag Overlay Component
//!
//! Floating copy of the dragged card that follows the pointer.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;

use crate::components::TodoCard;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn DragOverlay(dnd: DndSignals) -> impl IntoView {
    let store = use_app_store();

    // Changes only when a different card is picked up, not on pointer moves
    let active_todo = Memo::new(move |_| {
        dnd.active_id()
            .and_then(|id| store.board().read().find(&id).cloned())
    });

    let overlay_style = move || match dnd.dragged_rect() {
        Some(rect) => format!(
            "position: fixed; pointer-events: none; z-index: 1000; left: {}px; top: {}px; width: {}px;",
            rect.left, rect.top, rect.width
        ),
        None => "display: none;".to_string(),
    };

    view! {
        {move || active_todo.get().map(|todo| view! {
            <div class="drag-overlay" style=overlay_style>
                <TodoCard todo=todo dragging=true />
            </div>
        })}
    }
}
