//! Drop Target Geometry
//!
//! Rectangles, droppable candidates and the collision strategies that pick
//! a release target from on-screen geometry at release time.

/// Axis-aligned rectangle in client coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Corners in order: top-left, top-right, bottom-left, bottom-right
    pub fn corners(&self) -> [(f64, f64); 4] {
        [
            (self.left, self.top),
            (self.right(), self.top),
            (self.left, self.bottom()),
            (self.right(), self.bottom()),
        ]
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            ..*self
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }

    pub fn from_dom(rect: &web_sys::DomRect) -> Self {
        Self::new(rect.left(), rect.top(), rect.width(), rect.height())
    }
}

/// A registered drop target with its current bounds
#[derive(Clone, Debug, PartialEq)]
pub struct Droppable {
    pub id: String,
    pub rect: Rect,
}

impl Droppable {
    pub fn new(id: impl Into<String>, rect: Rect) -> Self {
        Self { id: id.into(), rect }
    }
}

/// Candidates that may receive a release at `pointer`.
///
/// With a scope, a pointer outside its bounds leaves no candidates, so the
/// release resolves to no target whatever the strategy.
pub fn in_scope(scope: Option<Rect>, pointer: (f64, f64), candidates: Vec<Droppable>) -> Vec<Droppable> {
    match scope {
        Some(bounds) if !bounds.contains(pointer.0, pointer.1) => Vec::new(),
        _ => candidates,
    }
}

/// Picks the release target among candidate drop targets
pub trait CollisionStrategy {
    fn resolve(&self, dragged: &Rect, candidates: &[Droppable]) -> Option<String>;
}

/// Nearest target by mean distance between corresponding corners
#[derive(Clone, Copy, Debug, Default)]
pub struct ClosestCorners;

impl ClosestCorners {
    pub fn distance(dragged: &Rect, target: &Rect) -> f64 {
        let total: f64 = dragged
            .corners()
            .iter()
            .zip(target.corners().iter())
            .map(|(a, b)| ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt())
            .sum();
        total / 4.0
    }
}

impl CollisionStrategy for ClosestCorners {
    fn resolve(&self, dragged: &Rect, candidates: &[Droppable]) -> Option<String> {
        let mut best: Option<(&Droppable, f64)> = None;
        for candidate in candidates {
            let d = Self::distance(dragged, &candidate.rect);
            // Ties keep the earlier candidate
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((candidate, d));
            }
        }
        best.map(|(candidate, _)| candidate.id.clone())
    }
}

/// Always resolves to the same target, for tests and scripted drops
#[derive(Clone, Debug, Default)]
pub struct FixedTarget(pub Option<String>);

impl CollisionStrategy for FixedTarget {
    fn resolve(&self, _dragged: &Rect, _candidates: &[Droppable]) -> Option<String> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<Droppable> {
        vec![
            Droppable::new("open", Rect::new(0.0, 0.0, 300.0, 800.0)),
            Droppable::new("in_progress", Rect::new(320.0, 0.0, 300.0, 800.0)),
            Droppable::new("blocked", Rect::new(640.0, 0.0, 300.0, 800.0)),
        ]
    }

    #[test]
    fn test_corners_order() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.corners(), [(10.0, 20.0), (40.0, 20.0), (10.0, 60.0), (40.0, 60.0)]);
    }

    #[test]
    fn test_distance_is_zero_for_identical_rects() {
        let r = Rect::new(5.0, 5.0, 100.0, 50.0);
        assert_eq!(ClosestCorners::distance(&r, &r), 0.0);
    }

    #[test]
    fn test_closest_column_wins() {
        // A card-sized rect sitting over the middle column
        let dragged = Rect::new(330.0, 100.0, 280.0, 90.0);
        let target = ClosestCorners.resolve(&dragged, &columns());
        assert_eq!(target.as_deref(), Some("in_progress"));
    }

    #[test]
    fn test_card_preferred_over_its_column_when_overlapping() {
        let mut candidates = columns();
        candidates.push(Droppable::new("card-7", Rect::new(650.0, 40.0, 280.0, 90.0)));
        let dragged = Rect::new(655.0, 50.0, 280.0, 90.0);

        let target = ClosestCorners.resolve(&dragged, &candidates);
        assert_eq!(target.as_deref(), Some("card-7"));
    }

    #[test]
    fn test_no_candidates_resolves_to_none() {
        let dragged = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(ClosestCorners.resolve(&dragged, &[]), None);
    }

    #[test]
    fn test_tie_keeps_first_candidate() {
        let same = Rect::new(0.0, 0.0, 10.0, 10.0);
        let candidates = vec![Droppable::new("a", same), Droppable::new("b", same)];
        assert_eq!(ClosestCorners.resolve(&same, &candidates).as_deref(), Some("a"));
    }

    #[test]
    fn test_fixed_target_ignores_geometry() {
        let strategy = FixedTarget(Some("blocked".to_string()));
        let far = Rect::new(9000.0, 9000.0, 1.0, 1.0);
        assert_eq!(strategy.resolve(&far, &columns()).as_deref(), Some("blocked"));
    }

    #[test]
    fn test_in_scope_keeps_candidates_inside_bounds() {
        let board = Rect::new(0.0, 0.0, 940.0, 800.0);
        assert_eq!(in_scope(Some(board), (400.0, 300.0), columns()), columns());
        assert_eq!(in_scope(None, (5000.0, 5000.0), columns()), columns());
    }

    #[test]
    fn test_in_scope_outside_bounds_leaves_nothing() {
        let board = Rect::new(0.0, 0.0, 940.0, 800.0);
        let kept = in_scope(Some(board), (400.0, 900.0), columns());
        assert!(kept.is_empty());
        assert_eq!(ClosestCorners.resolve(&Rect::new(390.0, 880.0, 280.0, 90.0), &kept), None);
    }

    #[test]
    fn test_translate_and_contains() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0).translate(5.0, -5.0);
        assert_eq!(r, Rect::new(5.0, -5.0, 10.0, 10.0));
        assert!(r.contains(15.0, 5.0));
        assert!(!r.contains(4.0, 0.0));
    }
}
