//! Rectangle model and the bounded, insertion-ordered store that owns them.
//!
//! `RectStore` is the only owner of `Rectangle` values. Everything else
//! (pointer bindings, actions) refers to a rectangle by its `RectId` and
//! resolves through the store, so a binding to a rectangle that has since
//! been evicted simply finds nothing.
//!
//! The store never grows past its capacity. Inserting into a full store
//! clears it first: the whole history is dropped, not just the oldest entry.

#[cfg(test)]
#[path = "rects_test.rs"]
mod rects_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geom::Point;

/// Unique identifier for a rectangle.
pub type RectId = Uuid;

/// An axis-aligned rectangle described by its center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Unique identifier for this rectangle.
    pub id: RectId,
    /// Center x in viewport coordinates.
    pub x: f64,
    /// Center y in viewport coordinates.
    pub y: f64,
    /// Horizontal extent.
    pub length: f64,
    /// Vertical extent.
    pub width: f64,
}

impl Rectangle {
    /// Create a square rectangle of side `size` centered on `center`.
    #[must_use]
    pub fn centered(center: Point, size: f64) -> Self {
        Self { id: Uuid::new_v4(), x: center.x, y: center.y, length: size, width: size }
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Bounds as `(left, top, length, width)` for fill calls.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.x - self.length / 2.0, self.y - self.width / 2.0, self.length, self.width)
    }
}

/// Outcome of [`RectStore::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inserted {
    /// Id of the inserted rectangle.
    pub id: RectId,
    /// How many rectangles were dropped to make room (0 when the store had space).
    pub evicted: usize,
}

/// Bounded store of rectangles, iterated in insertion order.
#[derive(Debug, Clone)]
pub struct RectStore {
    rects: Vec<Rectangle>,
    capacity: usize,
}

impl RectStore {
    /// Create an empty store holding at most `capacity` rectangles.
    ///
    /// A capacity of zero is treated as one so that an insert always lands.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { rects: Vec::with_capacity(capacity), capacity }
    }

    /// Insert a rectangle, clearing the whole store first if it is full.
    pub fn insert(&mut self, rect: Rectangle) -> Inserted {
        let evicted = if self.rects.len() >= self.capacity {
            let n = self.rects.len();
            self.rects.clear();
            n
        } else {
            0
        };
        let id = rect.id;
        self.rects.push(rect);
        Inserted { id, evicted }
    }

    /// Return a reference to a rectangle by id.
    #[must_use]
    pub fn get(&self, id: &RectId) -> Option<&Rectangle> {
        self.rects.iter().find(|r| r.id == *id)
    }

    /// Return a mutable reference to a rectangle by id.
    pub fn get_mut(&mut self, id: &RectId) -> Option<&mut Rectangle> {
        self.rects.iter_mut().find(|r| r.id == *id)
    }

    /// Move a rectangle's center, keeping its size. Returns false if the id is unknown.
    pub fn move_to(&mut self, id: &RectId, center: Point) -> bool {
        let Some(rect) = self.get_mut(id) else {
            return false;
        };
        rect.x = center.x;
        rect.y = center.y;
        true
    }

    /// All rectangles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Rectangle> {
        self.rects.iter()
    }

    /// Drop every rectangle.
    pub fn clear(&mut self) {
        self.rects.clear();
    }

    /// Maximum number of rectangles held at once.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of rectangles currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Returns `true` if the store contains no rectangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

impl Default for RectStore {
    fn default() -> Self {
        Self::with_capacity(crate::consts::RECT_CAPACITY)
    }
}
