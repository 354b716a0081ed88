#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_equality() {
    assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, 2.0));
    assert_ne!(Point::new(1.0, 2.0), Point::new(2.0, 1.0));
}

#[test]
fn point_truncated_drops_fraction() {
    assert_eq!(Point::new(100.9, 40.2).truncated(), Point::new(100.0, 40.0));
}

#[test]
fn point_truncated_rounds_toward_zero_for_negatives() {
    assert_eq!(Point::new(-3.7, -0.5).truncated(), Point::new(-3.0, 0.0));
}

#[test]
fn point_truncated_keeps_whole_values() {
    let p = Point::new(12.0, 7.0);
    assert_eq!(p.truncated(), p);
}

// --- Viewport ---

#[test]
fn viewport_default_is_empty() {
    let v = Viewport::default();
    assert_eq!(v.width, 0.0);
    assert_eq!(v.height, 0.0);
    assert!(v.is_empty());
}

#[test]
fn viewport_with_area_is_not_empty() {
    assert!(!Viewport::new(320.0, 480.0).is_empty());
}

#[test]
fn viewport_with_one_zero_side_is_empty() {
    assert!(Viewport::new(320.0, 0.0).is_empty());
    assert!(Viewport::new(0.0, 480.0).is_empty());
}
