//! Axis-aligned rectangles from two opposite corners.
//!
//! Width and height use absolute differences, so the rectangle behaves the
//! same regardless of left/right or bottom/top order at construction.

use crate::point::Point;
use crate::vector::Vector;

/// Axis-aligned box; `bottom_left`/`top_right` are the canonical stored
/// pair, the other corners are derived.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rectangle {
    bottom_left: Point,
    top_right: Point,
}

impl Rectangle {
    #[inline]
    pub fn new(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        Self {
            bottom_left: Point::new(left, bottom),
            top_right: Point::new(right, top),
        }
    }

    #[inline]
    pub fn from_points(bottom_left: Point, top_right: Point) -> Self {
        Self {
            bottom_left,
            top_right,
        }
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.bottom_left.x()
    }
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.bottom_left.y()
    }
    #[inline]
    pub fn right(&self) -> f64 {
        self.top_right.x()
    }
    #[inline]
    pub fn top(&self) -> f64 {
        self.top_right.y()
    }

    #[inline]
    pub fn bottom_left(&self) -> Point {
        self.bottom_left
    }
    #[inline]
    pub fn top_right(&self) -> Point {
        self.top_right
    }
    #[inline]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }
    #[inline]
    pub fn top_left(&self) -> Point {
        Point::new(self.left(), self.top())
    }

    #[inline]
    pub fn width(&self) -> f64 {
        (self.right() - self.left()).abs()
    }
    #[inline]
    pub fn height(&self) -> f64 {
        (self.top() - self.bottom()).abs()
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
    #[inline]
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width() + self.height())
    }
    #[inline]
    pub fn center(&self) -> Point {
        (self.bottom_left + self.top_right) / 2.0
    }

    /// The four edges as directed segments, counterclockwise from the bottom.
    pub fn edges(&self) -> [Vector; 4] {
        [
            Vector::new(self.bottom_left(), self.bottom_right()),
            Vector::new(self.bottom_right(), self.top_right()),
            Vector::new(self.top_right(), self.top_left()),
            Vector::new(self.top_left(), self.bottom_left()),
        ]
    }

    /// Translate all four sides.
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        let shift = Point::new(dx, dy);
        Self {
            bottom_left: self.bottom_left + shift,
            top_right: self.top_right + shift,
        }
    }

    /// Grow symmetrically about the center.
    pub fn inflate(&self, dx: f64, dy: f64) -> Self {
        Self::new(
            self.left() - dx,
            self.bottom() - dy,
            self.right() + dx,
            self.top() + dy,
        )
    }

    /// Bounding rectangle covering both inputs.
    pub fn combine(a: &Rectangle, b: &Rectangle) -> Rectangle {
        let (al, ab, ar, at) = a.normalized_bounds();
        let (bl, bb, br, bt) = b.normalized_bounds();
        Rectangle::new(al.min(bl), ab.min(bb), ar.max(br), at.max(bt))
    }

    pub fn contains(&self, point: Point) -> bool {
        let (l, b, r, t) = self.normalized_bounds();
        l <= point.x() && point.x() <= r && b <= point.y() && point.y() <= t
    }

    /// `(left, bottom, right, top)` with each pair ordered.
    fn normalized_bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.left().min(self.right()),
            self.bottom().min(self.top()),
            self.left().max(self.right()),
            self.bottom().max(self.top()),
        )
    }
}
