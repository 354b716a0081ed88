#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in viewport space (CSS pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Drop the fractional part of both coordinates.
    ///
    /// Touch positions are handled in whole pixels.
    #[must_use]
    pub fn truncated(self) -> Self {
        Self { x: self.x.trunc(), y: self.y.trunc() }
    }
}

/// Measured size of the hosting element, recomputed on layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether the viewport has no drawable area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
