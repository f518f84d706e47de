//! Small geometric primitives shared across the object model.
//!
//! Canvas space is plain `f64` pixels, y-down. Path coordinates handed to
//! drawing surfaces use [`glam::DVec2`]; these types cover the object
//! model's own bookkeeping.

use std::ops::{Add, Sub};

use glam::DVec2;

/// A point in canvas space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Midpoint between two points.
    pub fn midpoint(self, other: Self) -> Self {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> DVec2 {
        DVec2::new(p.x, p.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Point {
        Point::new(v.x, v.y)
    }
}

/// The axis-aligned bounding box of a shape.
///
/// `left`/`top` anchor the *center* of the box; `width`/`height` are signed
/// extents. A degenerate axis carries a unit extent so the box never
/// collapses.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Bounds {
            left,
            top,
            width,
            height,
        }
    }

    /// The center anchor as a point.
    pub fn anchor(&self) -> Point {
        Point::new(self.left, self.top)
    }
}
