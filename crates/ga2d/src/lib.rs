//! 2-D geometry kernel for drafting-style callers.
//!
//! Layers
//! - `bounded` and `angle` hold the validated scalar types: range-checked
//!   integers and angles with a degrees/minutes/seconds view.
//! - `matrix` is the generic square-matrix engine (Laplace determinant,
//!   cofactor inverse) backing `transform`.
//! - `point`, `vector`, `rect`, `circle` are the planar primitives built on
//!   top of homogeneous transforms.
//!
//! All types are plain values: operations return new values, errors are
//! explicit `Result`s, nothing is cached between calls.

pub mod angle;
pub mod bounded;
pub mod circle;
pub mod matrix;
pub mod point;
pub mod rect;
pub mod transform;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::angle::{Angle, AngleError, AngleFields, AngleUnit};
    pub use crate::bounded::{Bounded, RangeError};
    pub use crate::circle::{Circle, CircleError, CircleIntersection};
    pub use crate::matrix::{DynMatrix, FixedMatrix, Matrix, MatrixError};
    pub use crate::point::{Point, Quadrant};
    pub use crate::rect::Rectangle;
    pub use crate::transform::{Transform2D, TransformError};
    pub use crate::vector::{Side, Vector};
}
