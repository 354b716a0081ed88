//! Shared numeric constants for the board.

// ── Rectangle set ───────────────────────────────────────────────

/// Maximum number of rectangles on the board before the set is reset.
pub const RECT_CAPACITY: usize = 5;

/// Side length of a freshly placed rectangle, in pixels.
pub const RECT_SIZE_PX: f64 = 50.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Half-extent of the square interaction zone around a rectangle center.
///
/// Applied on both axes regardless of the rectangle's stored size.
pub const HIT_RADIUS_PX: f64 = 25.0;

// ── Style ───────────────────────────────────────────────────────

/// Solid fill for every rectangle.
pub const RECT_FILL: &str = "#00FF00";
