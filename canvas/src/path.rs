//! Path model: freehand line strips and the store of committed paths.
//!
//! A [`Path`] is the ordered list of cursor positions sampled while the right
//! button is held. Points are stored exactly as captured (screen coordinates at
//! capture time, offset not subtracted); the renderer applies the current view
//! offset when drawing.
//!
//! [`PathStore`] is append-only. Once a path is committed it is only ever
//! reachable through shared borrows, so it cannot be mutated afterwards.

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

use crate::consts::MIN_PATH_POINTS;
use crate::view::Point;

/// A user-drawn freehand line strip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    /// Create an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Append a sampled point.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Points in capture order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the path has at least one segment to draw.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= MIN_PATH_POINTS
    }

    /// Consecutive point pairs forming the line strip.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

impl From<Vec<Point>> for Path {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

/// Append-only store of committed paths.
#[derive(Debug, Default)]
pub struct PathStore {
    paths: Vec<Path>,
}

impl PathStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { paths: Vec::new() }
    }

    /// Commit a finished path. Paths with fewer than two points are dropped.
    ///
    /// Returns `true` when the path was stored.
    pub fn commit(&mut self, path: Path) -> bool {
        if !path.is_drawable() {
            return false;
        }
        self.paths.push(path);
        true
    }

    /// Committed paths in commit order.
    #[must_use]
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Number of committed paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns `true` if nothing has been committed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
