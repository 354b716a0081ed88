//! Input model: touch events, pointer bindings, and the gesture state machine.
//!
//! `TouchEvent` is the host-neutral form of one platform touch callback.
//! `GestureState` tracks whether a gesture is in progress and which pointer
//! started it. `PointerBindings` maps every pointer currently dragging
//! something to the id of the rectangle under it; it stores ids only and never
//! owns rectangles.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::collections::HashMap;

use crate::geom::Point;
use crate::rects::RectId;

/// Identifier of one contact point, stable for the lifetime of that contact.
pub type PointerId = i32;

/// One pointer's position within a touch event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Which contact this sample belongs to.
    pub id: PointerId,
    /// Position in viewport coordinates.
    pub point: Point,
}

impl PointerSample {
    #[must_use]
    pub fn new(id: PointerId, x: f64, y: f64) -> Self {
        Self { id, point: Point::new(x, y) }
    }
}

/// A touch event delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum TouchEvent {
    /// First contact of a new gesture.
    PrimaryDown(PointerSample),
    /// An additional contact while a gesture is in progress.
    SecondaryDown(PointerSample),
    /// One or more contacts moved. Carries a sample for every active contact.
    Move(Vec<PointerSample>),
    /// The last contact lifted, ending the gesture.
    PrimaryUp(PointerSample),
    /// A non-final contact lifted.
    SecondaryUp(PointerSample),
    /// The host aborted the gesture.
    Cancel,
}

/// Whether a gesture is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    /// No pointers down; waiting for the next primary-down.
    #[default]
    Idle,
    /// At least one pointer is down.
    Active {
        /// The pointer that started the gesture.
        primary: PointerId,
    },
}

impl GestureState {
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active { .. })
    }
}

/// Pointer id to rectangle id mapping for the current gesture.
#[derive(Debug, Clone, Default)]
pub struct PointerBindings {
    map: HashMap<PointerId, RectId>,
}

impl PointerBindings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `pointer` to `rect`, replacing any earlier binding for that pointer.
    pub fn bind(&mut self, pointer: PointerId, rect: RectId) {
        self.map.insert(pointer, rect);
    }

    /// Remove one pointer's binding, returning the rectangle it held.
    pub fn release(&mut self, pointer: PointerId) -> Option<RectId> {
        self.map.remove(&pointer)
    }

    /// The rectangle bound to `pointer`, if any.
    #[must_use]
    pub fn get(&self, pointer: PointerId) -> Option<RectId> {
        self.map.get(&pointer).copied()
    }

    /// Drop every binding.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// All `(pointer, rectangle)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (PointerId, RectId)> + '_ {
        self.map.iter().map(|(&p, &r)| (p, r))
    }
}
