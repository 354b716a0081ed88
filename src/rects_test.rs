#![allow(clippy::float_cmp)]

use super::*;

fn rect_at(x: f64, y: f64) -> Rectangle {
    Rectangle::centered(Point::new(x, y), 50.0)
}

// =============================================================
// Rectangle
// =============================================================

#[test]
fn centered_sets_center_and_square_size() {
    let r = rect_at(100.0, 80.0);
    assert_eq!(r.x, 100.0);
    assert_eq!(r.y, 80.0);
    assert_eq!(r.length, 50.0);
    assert_eq!(r.width, 50.0);
}

#[test]
fn centered_assigns_distinct_ids() {
    assert_ne!(rect_at(0.0, 0.0).id, rect_at(0.0, 0.0).id);
}

#[test]
fn center_reads_back_position() {
    assert_eq!(rect_at(7.0, 9.0).center(), Point::new(7.0, 9.0));
}

#[test]
fn bounds_are_centered_on_position() {
    let r = rect_at(100.0, 100.0);
    assert_eq!(r.bounds(), (75.0, 75.0, 50.0, 50.0));
}

#[test]
fn bounds_use_length_horizontally_and_width_vertically() {
    let mut r = rect_at(100.0, 100.0);
    r.length = 40.0;
    r.width = 20.0;
    assert_eq!(r.bounds(), (80.0, 90.0, 40.0, 20.0));
}

#[test]
fn rectangle_serializes_fields() {
    let r = rect_at(1.0, 2.0);
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["x"], 1.0);
    assert_eq!(json["y"], 2.0);
    assert_eq!(json["length"], 50.0);
    assert_eq!(json["width"], 50.0);
    assert_eq!(json["id"], r.id.to_string());
}

// =============================================================
// RectStore: basics
// =============================================================

#[test]
fn default_store_is_empty_with_capacity_five() {
    let store = RectStore::default();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert_eq!(store.capacity(), 5);
}

#[test]
fn zero_capacity_is_raised_to_one() {
    let mut store = RectStore::with_capacity(0);
    assert_eq!(store.capacity(), 1);
    store.insert(rect_at(0.0, 0.0));
    assert_eq!(store.len(), 1);
}

#[test]
fn insert_then_get() {
    let mut store = RectStore::default();
    let r = rect_at(10.0, 20.0);
    let id = r.id;
    let inserted = store.insert(r);
    assert_eq!(inserted.id, id);
    assert_eq!(inserted.evicted, 0);
    assert_eq!(store.get(&id).map(|r| r.x), Some(10.0));
}

#[test]
fn get_unknown_id_is_none() {
    let store = RectStore::default();
    assert!(store.get(&Uuid::new_v4()).is_none());
}

#[test]
fn iter_preserves_insertion_order() {
    let mut store = RectStore::default();
    let ids: Vec<RectId> = (0..3_i32)
        .map(|i| store.insert(rect_at(f64::from(i) * 100.0, 0.0)).id)
        .collect();
    let seen: Vec<RectId> = store.iter().map(|r| r.id).collect();
    assert_eq!(seen, ids);
}

#[test]
fn clear_empties_store() {
    let mut store = RectStore::default();
    store.insert(rect_at(0.0, 0.0));
    store.insert(rect_at(100.0, 0.0));
    store.clear();
    assert!(store.is_empty());
}

// =============================================================
// RectStore: move_to
// =============================================================

#[test]
fn move_to_updates_center_only() {
    let mut store = RectStore::default();
    let id = store.insert(rect_at(0.0, 0.0)).id;
    assert!(store.move_to(&id, Point::new(30.0, 40.0)));
    let r = store.get(&id).unwrap();
    assert_eq!(r.center(), Point::new(30.0, 40.0));
    assert_eq!(r.length, 50.0);
    assert_eq!(r.width, 50.0);
}

#[test]
fn move_to_unknown_id_returns_false() {
    let mut store = RectStore::default();
    store.insert(rect_at(0.0, 0.0));
    assert!(!store.move_to(&Uuid::new_v4(), Point::new(1.0, 1.0)));
}

#[test]
fn move_to_leaves_other_rectangles_alone() {
    let mut store = RectStore::default();
    let a = store.insert(rect_at(0.0, 0.0)).id;
    let b = store.insert(rect_at(200.0, 200.0)).id;
    store.move_to(&a, Point::new(5.0, 5.0));
    assert_eq!(store.get(&b).unwrap().center(), Point::new(200.0, 200.0));
}

// =============================================================
// RectStore: capacity eviction
// =============================================================

#[test]
fn fills_up_to_capacity_without_eviction() {
    let mut store = RectStore::default();
    for i in 0..5_i32 {
        let inserted = store.insert(rect_at(f64::from(i) * 100.0, 0.0));
        assert_eq!(inserted.evicted, 0);
    }
    assert_eq!(store.len(), 5);
}

#[test]
fn sixth_insert_clears_then_inserts() {
    let mut store = RectStore::default();
    for i in 0..5_i32 {
        store.insert(rect_at(f64::from(i) * 100.0, 0.0));
    }
    let sixth = rect_at(600.0, 600.0);
    let sixth_id = sixth.id;
    let inserted = store.insert(sixth);

    assert_eq!(inserted.evicted, 5);
    assert_eq!(store.len(), 1);
    assert_eq!(store.iter().next().map(|r| r.id), Some(sixth_id));
}

#[test]
fn eviction_drops_previous_ids() {
    let mut store = RectStore::with_capacity(2);
    let a = store.insert(rect_at(0.0, 0.0)).id;
    let b = store.insert(rect_at(100.0, 0.0)).id;
    store.insert(rect_at(200.0, 0.0));
    assert!(store.get(&a).is_none());
    assert!(store.get(&b).is_none());
}

#[test]
fn store_refills_after_eviction() {
    let mut store = RectStore::with_capacity(2);
    for i in 0..4_i32 {
        store.insert(rect_at(f64::from(i) * 100.0, 0.0));
    }
    // 2 + clear/1 + 1 = 2
    assert_eq!(store.len(), 2);
}
