//! Circles: construction, bounds, containment, segment and line interception.

use thiserror::Error;

use crate::angle::Angle;
use crate::point::{Point, Quadrant};
use crate::rect::Rectangle;
use crate::transform::Transform2D;
use crate::vector::Vector;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CircleError {
    #[error("circle radius must be positive")]
    NullRadius,
    #[error("the three points are collinear")]
    LinearPoints,
}

/// Result of intersecting a circle with the line through a vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CircleIntersection {
    None,
    Tangent(Point),
    TwoPoints(Point, Point),
}

/// Circle with a strictly positive radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Result<Self, CircleError> {
        if radius <= 0.0 {
            return Err(CircleError::NullRadius);
        }
        Ok(Self { center, radius })
    }

    /// Radius taken as the distance to a point on the circumference.
    pub fn from_center_and_point(center: Point, on_circumference: Point) -> Result<Self, CircleError> {
        Self::new(center, center.dist(on_circumference))
    }

    /// Circle through three boundary points.
    ///
    /// Each chord is rotated a quarter turn about its own midpoint to get its
    /// perpendicular bisector; the bisectors meet at the center.
    pub fn from_three_points(a: Point, b: Point, c: Point) -> Result<Self, CircleError> {
        let chord_ab = Vector::new(a, b);
        let chord_bc = Vector::new(b, c);
        if chord_ab.check_parallel(&chord_bc) {
            return Err(CircleError::LinearPoints);
        }

        let mid_ab = chord_ab.mid_point();
        let mid_bc = chord_bc.mid_point();
        let bisector_ab = chord_ab.transform(&Transform2D::rotation_about(
            Angle::ANGLE_90,
            mid_ab.x(),
            mid_ab.y(),
        ));
        let bisector_bc = chord_bc.transform(&Transform2D::rotation_about(
            Angle::ANGLE_90,
            mid_bc.x(),
            mid_bc.y(),
        ));

        let center = bisector_ab
            .intersection(&bisector_bc, true)
            .ok_or(CircleError::LinearPoints)?;
        Self::new(center, center.dist(a))
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<(), CircleError> {
        if radius <= 0.0 {
            return Err(CircleError::NullRadius);
        }
        self.radius = radius;
        Ok(())
    }

    /// Axis-aligned boundary point: east, north, west or south of the center
    /// for quadrants 1 through 4.
    pub fn quadrant_point(&self, quad: Quadrant) -> Point {
        match quad.get() {
            1 => self.center + Point::new(self.radius, 0.0),
            2 => self.center + Point::new(0.0, self.radius),
            3 => self.center - Point::new(self.radius, 0.0),
            _ => self.center - Point::new(0.0, self.radius),
        }
    }

    /// Map the circle through a transform.
    ///
    /// The radius is recomputed from a mapped boundary point, which is exact
    /// only for transforms that preserve distances uniformly (rigid motions
    /// and uniform scale); non-uniform scale or shear yields an approximate
    /// radius. A transform that collapses the boundary onto the center fails
    /// `NullRadius`.
    pub fn transform(&self, mat: &Transform2D) -> Result<Circle, CircleError> {
        let center = self.center.transform(mat);
        let rim = (self.center + Point::new(self.radius, 0.0)).transform(mat);
        Self::new(center, center.dist(rim))
    }

    /// Axis-aligned square of side `2·radius` centered on the circle.
    pub fn bounds_rect(&self) -> Rectangle {
        Rectangle::new(
            self.center.x() - self.radius,
            self.center.y() - self.radius,
            self.center.x() + self.radius,
            self.center.y() + self.radius,
        )
    }

    #[inline]
    pub fn perimeter(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.radius
    }
    #[inline]
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.center.dist(point) <= self.radius
    }

    /// Whether a segment crosses the circle boundary.
    ///
    /// Endpoints on opposite sides of the boundary cross; two endpoints
    /// strictly inside do not. Otherwise the segment crosses iff the
    /// perpendicular from the center reaches it within the radius and its
    /// foot lies between the endpoints.
    pub fn intersects_segment(&self, segment: &Vector) -> bool {
        let d1 = self.center.dist(segment.p1);
        let d2 = self.center.dist(segment.p2);
        if (d1 <= self.radius) != (d2 <= self.radius) {
            return true;
        }
        if d1 < self.radius && d2 < self.radius {
            return false;
        }
        segment.dist_point(self.center) <= self.radius && segment.inner_limits(self.center)
    }

    /// Whether the circle boundary crosses any edge of the rectangle.
    pub fn intercept_rect(&self, rect: &Rectangle) -> bool {
        rect.edges()
            .iter()
            .any(|edge| self.intersects_segment(edge))
    }

    /// Analytic intersection of the circle with the infinite line through a
    /// vector.
    ///
    /// With endpoint positions taken relative to the center, `det` is the
    /// cross product of the two endpoint position vectors and
    /// `Δ = r²·dr² − det²` classifies the contact.
    pub fn intercept_vector(&self, vector: &Vector) -> CircleIntersection {
        let x1 = vector.p1.x() - self.center.x();
        let y1 = vector.p1.y() - self.center.y();
        let x2 = vector.p2.x() - self.center.x();
        let y2 = vector.p2.y() - self.center.y();
        let dx = x2 - x1;
        let dy = y2 - y1;
        let dr2 = dx * dx + dy * dy;
        let det = x1 * y2 - x2 * y1;

        let disc = self.radius * self.radius * dr2 - det * det;
        if disc < 0.0 {
            return CircleIntersection::None;
        }

        let sgn_dy = if dy < 0.0 { -1.0 } else { 1.0 };
        let root = disc.sqrt();
        let first = Point::new(
            (det * dy + sgn_dy * dx * root) / dr2 + self.center.x(),
            (-det * dx + dy.abs() * root) / dr2 + self.center.y(),
        );
        if disc == 0.0 {
            return CircleIntersection::Tangent(first);
        }
        let second = Point::new(
            (det * dy - sgn_dy * dx * root) / dr2 + self.center.x(),
            (-det * dx - dy.abs() * root) / dr2 + self.center.y(),
        );
        CircleIntersection::TwoPoints(first, second)
    }
}
