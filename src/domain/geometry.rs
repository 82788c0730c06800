use serde::{Deserialize, Serialize};

/// A point in tree coordinates (trunk at x = 0, ground at y = 0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Straight branch from the trunk to its leaf cluster
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BranchGeometry {
    pub start: Point,
    pub end: Point,
}
