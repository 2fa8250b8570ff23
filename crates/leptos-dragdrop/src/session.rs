//! Drag Session
//!
//! Plain state for the gesture in progress, free of any reactive or DOM
//! types so the transitions can be exercised directly.

use crate::geometry::{CollisionStrategy, Droppable, Rect};

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: f64 = 8.0;

/// The item currently being dragged, if any
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragSession {
    active_id: Option<String>,
}

impl DragSession {
    /// Record `id` as the dragged item. A session that was never ended is
    /// overwritten rather than merged.
    pub fn begin(&mut self, id: impl Into<String>) {
        self.active_id = Some(id.into());
    }

    /// Clear the session, returning the id that was active
    pub fn end(&mut self) -> Option<String> {
        self.active_id.take()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id.as_deref() == Some(id)
    }

    pub fn is_dragging(&self) -> bool {
        self.active_id.is_some()
    }
}

/// Pointer-down state recorded before the drag threshold is crossed
#[derive(Clone, Debug, PartialEq)]
pub struct Grab {
    pub id: String,
    pub start_x: f64,
    pub start_y: f64,
    /// Bounds of the grabbed element at pointer-down
    pub origin: Rect,
}

impl Grab {
    /// Whether the pointer has travelled far enough to count as a drag
    pub fn exceeds_threshold(&self, x: f64, y: f64) -> bool {
        let dx = x - self.start_x;
        let dy = y - self.start_y;
        (dx * dx + dy * dy).sqrt() > DRAG_THRESHOLD_PX
    }

    /// Bounds of the dragged element with the pointer at (x, y)
    pub fn dragged_rect(&self, x: f64, y: f64) -> Rect {
        self.origin.translate(x - self.start_x, y - self.start_y)
    }
}

/// A finished drag, captured at pointer release
#[derive(Clone, Debug, PartialEq)]
pub struct DragEnd {
    pub id: String,
    /// Bounds of the dragged element at release
    pub rect: Rect,
    /// Drop targets that may receive the release
    pub candidates: Vec<Droppable>,
}

impl DragEnd {
    /// Release target chosen by `strategy`, if any
    pub fn target<S: CollisionStrategy + ?Sized>(&self, strategy: &S) -> Option<String> {
        strategy.resolve(&self.rect, &self.candidates)
    }
}
