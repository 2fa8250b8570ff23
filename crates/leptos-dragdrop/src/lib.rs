//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag, and resolves the
//! release target from droppable geometry at mouseup.
//!
//! Drop targets are plain elements carrying a `data-drop-id` attribute. A
//! single element carrying `data-drop-scope` bounds the droppable area:
//! releasing the pointer outside it resolves to no target.

mod geometry;
mod session;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

pub use geometry::{in_scope, ClosestCorners, CollisionStrategy, Droppable, FixedTarget, Rect};
pub use session::{DragEnd, DragSession, Grab, DRAG_THRESHOLD_PX};

/// Attribute carrying a drop target's id
pub const DROP_ID_ATTR: &str = "data-drop-id";
/// Attribute marking the area outside which a release cancels the drop
pub const DROP_SCOPE_ATTR: &str = "data-drop-scope";

/// How long clicks are suppressed after a drag ends
const CLICK_SUPPRESS_MS: u32 = 100;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub session_read: ReadSignal<DragSession>,
    pub session_write: WriteSignal<DragSession>,
    /// Pending grab (mousedown, possibly not yet dragging)
    pub grab_read: ReadSignal<Option<Grab>>,
    pub grab_write: WriteSignal<Option<Grab>>,
    /// Last known pointer position
    pub pointer_read: ReadSignal<(f64, f64)>,
    pub pointer_write: WriteSignal<(f64, f64)>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
}

impl DndSignals {
    /// Id of the item being dragged (tracked)
    pub fn active_id(&self) -> Option<String> {
        self.session_read.with(|s| s.active_id().map(str::to_string))
    }

    /// Whether `id` is the item being dragged (tracked)
    pub fn is_dragging(&self, id: &str) -> bool {
        self.session_read.with(|s| s.is_active(id))
    }

    /// Current bounds of the dragged element, while a drag is active (tracked)
    pub fn dragged_rect(&self) -> Option<Rect> {
        if !self.session_read.with(DragSession::is_dragging) {
            return None;
        }
        let (x, y) = self.pointer_read.get();
        self.grab_read.with(|g| g.as_ref().map(|g| g.dragged_rect(x, y)))
    }
}

pub fn create_dnd_signals() -> DndSignals {
    let (session_read, session_write) = signal(DragSession::default());
    let (grab_read, grab_write) = signal(None::<Grab>);
    let (pointer_read, pointer_write) = signal((0.0f64, 0.0f64));
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    DndSignals {
        session_read,
        session_write,
        grab_read,
        grab_write,
        pointer_read,
        pointer_write,
        drag_just_ended_read,
        drag_just_ended_write,
    }
}

/// Begin drag operation
pub fn start_drag(dnd: &DndSignals, id: String) {
    dnd.session_write.update(|s| s.begin(id));
}

/// End drag operation, returning the id that was being dragged
pub fn end_drag(dnd: &DndSignals) -> Option<String> {
    let ended = dnd.session_write.try_update(|s| s.end()).flatten();
    dnd.grab_write.set(None);

    if ended.is_some() {
        dnd.drag_just_ended_write.set(true);
        let clear = dnd.drag_just_ended_write;
        spawn_local(async move {
            TimeoutFuture::new(CLICK_SUPPRESS_MS).await;
            clear.set(false);
        });
    }
    ended
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position and element bounds
pub fn make_on_mousedown(dnd: DndSignals, item_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore if target is a form control
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlSelectElement>().is_some() { return; }
        }
        let origin = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .map(|el| Rect::from_dom(&el.get_bounding_client_rect()))
            .unwrap_or_default();
        let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);

        dnd.grab_write.set(Some(Grab {
            id: item_id.clone(),
            start_x: x,
            start_y: y,
            origin,
        }));
        dnd.pointer_write.set((x, y));
    }
}

/// Bounds and ids of every droppable element under the drop scope.
/// Empty when the pointer is outside the scope.
pub fn collect_droppables(pointer_x: f64, pointer_y: f64) -> Vec<Droppable> {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };

    let scope = doc
        .query_selector(&format!("[{}]", DROP_SCOPE_ATTR))
        .ok()
        .flatten()
        .map(|el| Rect::from_dom(&el.get_bounding_client_rect()));

    let Ok(nodes) = doc.query_selector_all(&format!("[{}]", DROP_ID_ATTR)) else {
        return Vec::new();
    };
    let candidates = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .filter_map(|el| {
            let id = el.get_attribute(DROP_ID_ATTR)?;
            Some(Droppable::new(id, Rect::from_dom(&el.get_bounding_client_rect())))
        })
        .collect();
    in_scope(scope, (pointer_x, pointer_y), candidates)
}

/// Track pointer movement on the document - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
        let pending = dnd.grab_read.with_untracked(|g| {
            g.as_ref().map(|g| (g.id.clone(), g.exceeds_threshold(x, y)))
        });
        let Some((id, exceeded)) = pending else { return; };

        dnd.pointer_write.set((x, y));
        if exceeded && !dnd.session_read.with_untracked(DragSession::is_dragging) {
            start_drag(&dnd, id);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Escape cancels an active drag without dropping
pub fn bind_global_escape(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && dnd.grab_read.with_untracked(Option::is_some) {
            end_drag(&dnd);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        }
    }
    on_keydown.forget();
}

/// Bind global mouseup handler for drop detection.
///
/// `on_drop` receives the finished drag with the dragged element's bounds
/// and the in-scope drop targets; picking the target is left to the
/// caller's `CollisionStrategy`. A mouseup that never crossed the drag
/// threshold is a click and is not reported.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(DragEnd) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
        let grab = dnd.grab_read.get_untracked();

        // Session is cleared unconditionally, whatever the outcome
        let Some(id) = end_drag(&dnd) else { return; };
        let Some(grab) = grab else { return; };

        on_drop(DragEnd {
            id,
            rect: grab.dragged_rect(x, y),
            candidates: collect_droppables(x, y),
        });
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove and escape
    bind_global_mousemove(dnd);
    bind_global_escape(dnd);
}
