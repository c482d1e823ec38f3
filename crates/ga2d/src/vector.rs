//! Directed segments: side tests, projections, perpendiculars, intersections.
//!
//! Purpose
//! - `Vector` is the ordered pair `(p1, p2)`; `p1` is the tail, `p2` the
//!   head. Most predicates reduce to the 2-D cross product of the direction
//!   with some offset, or to a change into the vector-aligned local frame
//!   (tail at the origin, head on the positive x-axis).
//!
//! Degeneracies
//! - Zero-length vectors have no direction: `versor` yields NaN coordinates
//!   and the local-frame helpers degrade to a pure translation.

use std::ops::{Add, Sub};

use crate::angle::Angle;
use crate::point::Point;
use crate::transform::Transform2D;

/// Classification of a point against a directed line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Over,
    Right,
}

/// Directed segment from `p1` to `p2`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    pub p1: Point,
    pub p2: Point,
}

impl Vector {
    #[inline]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    #[inline]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Length of the segment.
    #[inline]
    pub fn module(&self) -> f64 {
        self.p1.dist(self.p2)
    }

    /// Unit direction from tail to head.
    #[inline]
    pub fn versor(&self) -> Point {
        (self.p2 - self.p1) / self.module()
    }

    /// Rescale the head along the current direction.
    pub fn set_module(&mut self, value: f64) {
        self.p2 = self.p1 + self.versor() * value;
    }

    pub fn transform(&self, mat: &Transform2D) -> Vector {
        Vector::new(self.p1.transform(mat), self.p2.transform(mat))
    }

    /// Translate so `p1` lands on `target`, preserving direction and length.
    pub fn move_to(&mut self, target: Point) {
        let shift = target - self.p1;
        *self = self.transform(&Transform2D::translation(shift.x(), shift.y()));
    }

    /// Swap tail and head.
    #[inline]
    pub fn reverse(&self) -> Vector {
        Vector::new(self.p2, self.p1)
    }

    #[inline]
    pub fn mid_point(&self) -> Point {
        (self.p1 + self.p2) / 2.0
    }

    /// Which side of the directed line the point lies on, by the sign of the
    /// cross product of the direction with the offset to the point.
    pub fn side(&self, point: Point) -> Side {
        let cross = (self.p2 - self.p1).cross(point - self.p1);
        if cross > 0.0 {
            Side::Left
        } else if cross < 0.0 {
            Side::Right
        } else {
            Side::Over
        }
    }

    /// Parallelism test: the cross product of the two directions is exactly zero.
    pub fn check_parallel(&self, other: &Vector) -> bool {
        (self.p2 - self.p1).cross(other.p2 - other.p1) == 0.0
    }

    /// Perpendicular distance from a point to the line containing the vector.
    pub fn dist_point(&self, point: Point) -> f64 {
        ((self.p2 - self.p1).cross(point - self.p1) / self.module()).abs()
    }

    /// True direction angle of `p2 - p1`, covering all four quadrants.
    ///
    /// Not [`Point::angle_x_axis`]: that convention is off by 90° in the
    /// lower half-plane and would not put the vector on the local x-axis.
    fn direction_angle(&self) -> Angle {
        let d = self.p2 - self.p1;
        Angle::from_radians(d.y().atan2(d.x()))
    }

    /// Transform into the frame where the vector lies on the positive x-axis.
    fn to_local_frame(&self) -> Transform2D {
        let ang = self.direction_angle();
        Transform2D::rotation(-ang) * Transform2D::translation(-self.p1.x(), -self.p1.y())
    }

    fn from_local_frame(&self) -> Transform2D {
        let ang = self.direction_angle();
        Transform2D::translation(self.p1.x(), self.p1.y()) * Transform2D::rotation(ang)
    }

    /// Perpendicular to this vector at `reference`.
    ///
    /// Built in the local frame: drop `reference` onto the x-axis and raise
    /// the vertical segment from the foot back up to it (unit length when the
    /// reference sits on the line), then map back. `module`, when given,
    /// rescales the result.
    pub fn perpendicular(&self, reference: Point, module: Option<f64>) -> Vector {
        let local = reference.transform(&self.to_local_frame());
        let tip_y = if local.y() != 0.0 { local.y() } else { 1.0 };
        let mut perp = Vector::new(
            Point::new(local.x(), 0.0),
            Point::new(local.x(), tip_y),
        );
        if let Some(value) = module {
            perp.set_module(value);
        }
        perp.transform(&self.from_local_frame())
    }

    /// Intersection of two segments, or of the infinite lines containing
    /// them when `as_infinite_lines` is set.
    ///
    /// Solves the 2×2 system for the parameters `t`, `s` along each vector;
    /// `None` when the vectors are parallel or, for segments, when either
    /// parameter falls outside `[0, 1]`.
    pub fn intersection(&self, other: &Vector, as_infinite_lines: bool) -> Option<Point> {
        let d1 = self.p2 - self.p1;
        let d2 = other.p2 - other.p1;
        let denom = d1.cross(d2);
        if denom == 0.0 {
            return None;
        }
        let offset = other.p1 - self.p1;
        let t = offset.cross(d2) / denom;
        let s = offset.cross(d1) / denom;
        if !as_infinite_lines && !((0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&s)) {
            return None;
        }
        Some(self.p1 + d1 * t)
    }

    /// Whether the perpendicular projection of `point` onto the vector's
    /// line falls between its endpoints.
    pub fn inner_limits(&self, point: Point) -> bool {
        let local = point.transform(&self.to_local_frame());
        (0.0..=self.module()).contains(&local.x())
    }

    /// Segment crossing test via two side comparisons.
    pub fn intercept(&self, other: &Vector) -> bool {
        self.side(other.p1) != self.side(other.p2) && other.side(self.p1) != other.side(self.p2)
    }
}

/// Head-to-tail composition: `rhs` moved onto `self`'s head, spanning from
/// `self.p1` to the moved head.
impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        let mut moved = rhs;
        moved.move_to(self.p2);
        Vector::new(self.p1, moved.p2)
    }
}

/// Difference: the segment from `rhs`'s head to `self`'s head.
impl Sub for Vector {
    type Output = Vector;

    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(rhs.p2, self.p2)
    }
}
