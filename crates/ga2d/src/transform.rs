//! 3×3 homogeneous transforms for the 2-D plane.
//!
//! Purpose
//! - Specialize the generic matrix engine into the affine maps drafting
//!   callers build: translation, rotation, scale, mirror, and their
//!   reference-point variants, composed by multiplication.
//!
//! Conventions
//! - Row-major; a point is the homogeneous column `(x, y, 1)`.
//! - Every factory keeps row 2 equal to `[0, 0, 1]`; the type does not
//!   enforce it, callers build only through the factories.

use std::ops::{Mul, MulAssign};

use thiserror::Error;

use crate::angle::Angle;
use crate::matrix::{FixedMatrix, MatrixError};
use crate::point::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("mirror line endpoints coincide")]
    InvalidMirrorArgs,
}

/// Homogeneous 2-D affine transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    items: [[f64; 3]; 3],
}

impl Transform2D {
    pub const IDENTITY: Transform2D = Transform2D {
        items: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };
    pub const NULL: Transform2D = Transform2D {
        items: [[0.0; 3]; 3],
    };

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    pub fn translation(dx: f64, dy: f64) -> Self {
        let mut mat = Self::IDENTITY;
        mat.items[0][2] = dx;
        mat.items[1][2] = dy;
        mat
    }

    pub fn rotation(angle: Angle) -> Self {
        let (sin, cos) = angle.radians().sin_cos();
        let mut mat = Self::IDENTITY;
        mat.items[0][0] = cos;
        mat.items[0][1] = -sin;
        mat.items[1][0] = sin;
        mat.items[1][1] = cos;
        mat
    }

    /// Rotation about a reference point.
    pub fn rotation_about(angle: Angle, rx: f64, ry: f64) -> Self {
        Self::translation(rx, ry) * Self::rotation(angle) * Self::translation(-rx, -ry)
    }

    pub fn scale(fx: f64, fy: f64) -> Self {
        let mut mat = Self::IDENTITY;
        mat.items[0][0] = fx;
        mat.items[1][1] = fy;
        mat
    }

    /// Scale about a reference point.
    pub fn scale_about(fx: f64, fy: f64, rx: f64, ry: f64) -> Self {
        Self::translation(rx, ry) * Self::scale(fx, fy) * Self::translation(-rx, -ry)
    }

    /// Reflection across the line through `(x1, y1)` and `(x2, y2)`.
    ///
    /// Builds a flip about the local x-axis and conjugates it by the rigid
    /// transform carrying the mirror line onto the x-axis.
    pub fn mirror(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, TransformError> {
        if Point::dist_coords(x1, y1, x2, y2) == 0.0 {
            return Err(TransformError::InvalidMirrorArgs);
        }

        let mut flip = Self::IDENTITY;
        flip.items[1][1] = -1.0;

        let direction = Point::new(x2 - x1, y2 - y1);
        if direction.x() == 0.0 {
            // Vertical line: conjugate by a quarter turn at the x-intercept.
            let ang = Angle::ANGLE_90;
            Ok(Self::translation(x1, 0.0)
                * Self::rotation(ang)
                * flip
                * Self::rotation(-ang)
                * Self::translation(-x1, 0.0))
        } else {
            let intercept = y1 - ((y2 - y1) / (x2 - x1)) * x1;
            let ang = direction.angle_x_axis();
            Ok(Self::translation(0.0, intercept)
                * Self::rotation(ang)
                * flip
                * Self::rotation(-ang)
                * Self::translation(0.0, -intercept))
        }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.items[row][col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.items[row][col] = value;
    }

    /// Apply to a point as a homogeneous column.
    pub fn apply(&self, p: Point) -> Point {
        let m = &self.items;
        Point::new(
            m[0][0] * p.x() + m[0][1] * p.y() + m[0][2],
            m[1][0] * p.x() + m[1][1] * p.y() + m[1][2],
        )
    }

    /// Inverse via the generic matrix cofactor inverse.
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        let inv = self.to_matrix()?.inverse()?;
        let mut items = [[0.0; 3]; 3];
        for (i, row) in items.iter_mut().enumerate() {
            for (j, item) in row.iter_mut().enumerate() {
                *item = inv.get(i, j)?;
            }
        }
        Ok(Self { items })
    }

    pub fn to_matrix(&self) -> Result<FixedMatrix<f64>, MatrixError> {
        let mut mat = FixedMatrix::new(3, 3)?;
        for i in 0..3 {
            for j in 0..3 {
                mat.set(i, j, self.items[i][j])?;
            }
        }
        Ok(mat)
    }
}

impl Mul for Transform2D {
    type Output = Transform2D;

    fn mul(self, rhs: Transform2D) -> Transform2D {
        let mut items = [[0.0; 3]; 3];
        for (i, row) in items.iter_mut().enumerate() {
            for (j, item) in row.iter_mut().enumerate() {
                let mut acc = 0.0;
                for k in 0..3 {
                    acc += self.items[i][k] * rhs.items[k][j];
                }
                *item = acc;
            }
        }
        Transform2D { items }
    }
}

impl MulAssign for Transform2D {
    #[inline]
    fn mul_assign(&mut self, rhs: Transform2D) {
        *self = *self * rhs;
    }
}
