#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::geom::Point;
use crate::rects::{RectId, RectStore, Rectangle};

/// Whether `pt` lies in the square zone of half-extent `radius` around the
/// rectangle's center. Edges are inclusive.
///
/// The zone ignores `length` and `width`: a rectangle of any stored size is
/// grabbed by the same fixed-radius square.
#[must_use]
pub fn touches(rect: &Rectangle, pt: Point, radius: f64) -> bool {
    pt.x >= rect.x - radius && pt.x <= rect.x + radius && pt.y >= rect.y - radius && pt.y <= rect.y + radius
}

/// Find the first rectangle (in store order) whose hit zone contains `pt`.
#[must_use]
pub fn hit_test(pt: Point, rects: &RectStore, radius: f64) -> Option<RectId> {
    rects.iter().find(|r| touches(r, pt, radius)).map(|r| r.id)
}
