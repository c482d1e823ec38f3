//! 2-D points: coordinate algebra, distances, quadrants, axis angles.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use nalgebra::Vector2;

use crate::angle::Angle;
use crate::bounded::Bounded;
use crate::transform::Transform2D;

/// Quadrant selector: 1 = +x/+y, counted counterclockwise.
pub type Quadrant = Bounded<1, 4>;

/// Plain value point; no identity beyond its coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    coords: Vector2<f64>,
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            coords: Vector2::new(x, y),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.coords.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.coords.y
    }

    /// Euclidean distance from the origin.
    #[inline]
    pub fn dist_origin(&self) -> f64 {
        self.coords.norm()
    }

    #[inline]
    pub fn dist(&self, other: Point) -> f64 {
        (other.coords - self.coords).norm()
    }

    #[inline]
    pub fn dist_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
        Point::new(x1, y1).dist(Point::new(x2, y2))
    }

    /// Quadrant classification by sign.
    ///
    /// Points on an axis fold into the `x <= 0` / `y <= 0` side: `(0, 1)` is
    /// Q2, `(1, 0)` is Q4, the origin is Q3.
    pub fn quadrant(&self) -> Quadrant {
        let q = if self.y() > 0.0 {
            if self.x() <= 0.0 {
                2
            } else {
                1
            }
        } else if self.x() <= 0.0 {
            3
        } else {
            4
        };
        Quadrant::new_unchecked(q)
    }

    /// Unit point in the same direction; degenerate (NaN) for the origin.
    #[inline]
    pub fn versor(&self) -> Point {
        *self / self.dist_origin()
    }

    /// 2-D cross product `x·oy - ox·y`.
    #[inline]
    pub fn cross(&self, other: Point) -> f64 {
        self.x() * other.y() - other.x() * self.y()
    }

    /// Apply a homogeneous transform to this point.
    #[inline]
    pub fn transform(&self, mat: &Transform2D) -> Point {
        mat.apply(*self)
    }

    /// Angle from the positive x-axis, in `[0, 2π)` by way of a 180°
    /// correction when `y < 0` (acos alone covers `[0, π]`). The origin maps
    /// to the zero angle.
    pub fn angle_x_axis(&self) -> Angle {
        let dist = self.dist_origin();
        if dist == 0.0 {
            return Angle::default();
        }
        let mut ang = Angle::from_radians((self.x() / dist).acos());
        if self.y() < 0.0 {
            ang += Angle::ANGLE_180;
        }
        ang
    }

    /// Angle between `a` and `b` as seen from `reference`.
    pub fn angle_between(a: Point, b: Point, reference: Point) -> Angle {
        (a - reference).angle_x_axis() - (b - reference).angle_x_axis()
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point {
            coords: self.coords + rhs.coords,
        }
    }
}
impl Add<f64> for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: f64) -> Point {
        Point {
            coords: self.coords.add_scalar(rhs),
        }
    }
}
impl Add<Point> for f64 {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        rhs + self
    }
}
impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Point) {
        self.coords += rhs.coords;
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point {
            coords: self.coords - rhs.coords,
        }
    }
}
impl Sub<f64> for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: f64) -> Point {
        Point {
            coords: self.coords.add_scalar(-rhs),
        }
    }
}
impl Sub<Point> for f64 {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self - rhs.x(), self - rhs.y())
    }
}
impl SubAssign for Point {
    #[inline]
    fn sub_assign(&mut self, rhs: Point) {
        self.coords -= rhs.coords;
    }
}

impl Mul for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: Point) -> Point {
        Point {
            coords: self.coords.component_mul(&rhs.coords),
        }
    }
}
impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f64) -> Point {
        Point {
            coords: self.coords * rhs,
        }
    }
}
impl Mul<Point> for f64 {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: Point) -> Point {
        rhs * self
    }
}
impl MulAssign<f64> for Point {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.coords *= rhs;
    }
}

impl Div for Point {
    type Output = Point;
    #[inline]
    fn div(self, rhs: Point) -> Point {
        Point {
            coords: self.coords.component_div(&rhs.coords),
        }
    }
}
impl Div<f64> for Point {
    type Output = Point;
    #[inline]
    fn div(self, rhs: f64) -> Point {
        Point {
            coords: self.coords / rhs,
        }
    }
}
impl DivAssign<f64> for Point {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.coords /= rhs;
    }
}

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point {
            coords: -self.coords,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn componentwise_and_scalar_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, 5.0);
        assert_eq!(a + b, Point::new(4.0, 7.0));
        assert_eq!(b - a, Point::new(2.0, 3.0));
        assert_eq!(a * b, Point::new(3.0, 10.0));
        assert_eq!(b / a, Point::new(3.0, 2.5));
        assert_eq!(a + 1.0, Point::new(2.0, 3.0));
        assert_eq!(1.0 + a, Point::new(2.0, 3.0));
        assert_eq!(a - 1.0, Point::new(0.0, 1.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_eq!(2.0 * a, Point::new(2.0, 4.0));
        assert_eq!(b / 2.0, Point::new(1.5, 2.5));
        assert_eq!(-a, Point::new(-1.0, -2.0));
    }

    #[test]
    fn distances() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_relative_eq!(a.dist(b), 5.0);
        assert_relative_eq!(b.dist_origin(), 5.0);
        assert_relative_eq!(Point::dist_coords(1.0, 1.0, 4.0, 5.0), 5.0);
    }

    #[test]
    fn quadrants_fold_axes_into_the_low_side() {
        assert_eq!(Point::new(1.0, 1.0).quadrant(), 1);
        assert_eq!(Point::new(-1.0, 1.0).quadrant(), 2);
        assert_eq!(Point::new(-1.0, -1.0).quadrant(), 3);
        assert_eq!(Point::new(1.0, -1.0).quadrant(), 4);
        // axis ties
        assert_eq!(Point::new(0.0, 1.0).quadrant(), 2);
        assert_eq!(Point::new(1.0, 0.0).quadrant(), 4);
        assert_eq!(Point::new(0.0, 0.0).quadrant(), 3);
        assert_eq!(Point::new(-1.0, 0.0).quadrant(), 3);
    }

    #[test]
    fn versor_has_unit_length() {
        let v = Point::new(3.0, 4.0).versor();
        assert_relative_eq!(v.x(), 0.6);
        assert_relative_eq!(v.y(), 0.8);
        assert_relative_eq!(v.dist_origin(), 1.0);
    }

    #[test]
    fn axis_angles_cover_the_full_circle() {
        assert_relative_eq!(Point::new(1.0, 0.0).angle_x_axis().radians(), 0.0);
        assert_relative_eq!(
            Point::new(1.0, 1.0).angle_x_axis().radians(),
            FRAC_PI_4,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            Point::new(0.0, 2.0).angle_x_axis().radians(),
            FRAC_PI_2,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            Point::new(-3.0, 0.0).angle_x_axis().radians(),
            PI,
            epsilon = 1e-12
        );
        // y < 0 picks up the 180° correction
        assert_relative_eq!(
            Point::new(-1.0, -1.0).angle_x_axis().radians(),
            FRAC_PI_4 * 3.0 + PI,
            epsilon = 1e-12
        );
        assert_relative_eq!(Point::new(0.0, 0.0).angle_x_axis().radians(), 0.0);
    }

    #[test]
    fn angle_between_uses_the_shared_reference() {
        let reference = Point::new(1.0, 1.0);
        let a = Point::new(2.0, 2.0);
        let b = Point::new(2.0, 1.0);
        assert_relative_eq!(
            Point::angle_between(a, b, reference).radians(),
            FRAC_PI_4,
            epsilon = 1e-12
        );
    }

    #[test]
    fn cross_product_sign() {
        let a = Point::new(1.0, 0.0);
        let b = Point::new(0.0, 1.0);
        assert_eq!(a.cross(b), 1.0);
        assert_eq!(b.cross(a), -1.0);
        assert_eq!(a.cross(a), 0.0);
    }

    proptest! {
        #[test]
        fn distance_is_symmetric_and_zero_on_self(
            x1 in -100.0f64..100.0,
            y1 in -100.0f64..100.0,
            x2 in -100.0f64..100.0,
            y2 in -100.0f64..100.0,
        ) {
            let a = Point::new(x1, y1);
            let b = Point::new(x2, y2);
            prop_assert_eq!(a.dist(b), b.dist(a));
            prop_assert_eq!(a.dist(a), 0.0);
        }
    }
}
