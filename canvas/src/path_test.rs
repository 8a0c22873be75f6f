#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn path_of(points: &[(f64, f64)]) -> Path {
    points.iter().map(|&(x, y)| pt(x, y)).collect::<Vec<_>>().into()
}

// =============================================================
// Path
// =============================================================

#[test]
fn path_new_is_empty() {
    let path = Path::new();
    assert!(path.is_empty());
    assert_eq!(path.len(), 0);
    assert!(!path.is_drawable());
}

#[test]
fn path_push_preserves_order() {
    let mut path = Path::new();
    path.push(pt(3.0, 1.0));
    path.push(pt(1.0, 2.0));
    path.push(pt(2.0, 3.0));
    assert_eq!(path.points(), &[pt(3.0, 1.0), pt(1.0, 2.0), pt(2.0, 3.0)]);
}

#[test]
fn path_single_point_is_not_drawable() {
    let path = path_of(&[(1.0, 1.0)]);
    assert!(!path.is_drawable());
    assert_eq!(path.segments().count(), 0);
}

#[test]
fn path_two_points_is_drawable() {
    let path = path_of(&[(1.0, 1.0), (2.0, 2.0)]);
    assert!(path.is_drawable());
}

#[test]
fn path_segments_pair_consecutive_points() {
    let path = path_of(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    let segments: Vec<_> = path.segments().collect();
    assert_eq!(
        segments,
        vec![(pt(0.0, 0.0), pt(10.0, 0.0)), (pt(10.0, 0.0), pt(10.0, 10.0))]
    );
}

#[test]
fn path_allows_repeated_points() {
    let path = path_of(&[(5.0, 5.0), (5.0, 5.0), (5.0, 5.0)]);
    assert_eq!(path.len(), 3);
    assert_eq!(path.segments().count(), 2);
}

// =============================================================
// PathStore
// =============================================================

#[test]
fn store_new_is_empty() {
    let store = PathStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.paths().is_empty());
}

#[test]
fn store_commit_accepts_drawable_path() {
    let mut store = PathStore::new();
    let path = path_of(&[(1.0, 2.0), (3.0, 4.0)]);
    assert!(store.commit(path.clone()));
    assert_eq!(store.paths(), &[path]);
}

#[test]
fn store_commit_rejects_empty_path() {
    let mut store = PathStore::new();
    assert!(!store.commit(Path::new()));
    assert!(store.is_empty());
}

#[test]
fn store_commit_rejects_single_point() {
    let mut store = PathStore::new();
    assert!(!store.commit(path_of(&[(9.0, 9.0)])));
    assert!(store.is_empty());
}

#[test]
fn store_keeps_commit_order() {
    let mut store = PathStore::new();
    let first = path_of(&[(0.0, 0.0), (1.0, 1.0)]);
    let second = path_of(&[(5.0, 5.0), (6.0, 6.0), (7.0, 7.0)]);
    store.commit(first.clone());
    store.commit(second.clone());
    assert_eq!(store.len(), 2);
    assert_eq!(store.paths()[0], first);
    assert_eq!(store.paths()[1], second);
}

#[test]
fn store_commit_stores_points_unchanged() {
    let mut store = PathStore::new();
    let path = path_of(&[(-3.5, 12.25), (400.0, -7.0)]);
    store.commit(path);
    assert_eq!(store.paths()[0].points()[0].x, -3.5);
    assert_eq!(store.paths()[0].points()[0].y, 12.25);
    assert_eq!(store.paths()[0].points()[1].x, 400.0);
    assert_eq!(store.paths()[0].points()[1].y, -7.0);
}
