//! Generic dense matrix engine.
//!
//! Purpose
//! - Bounded `rows × cols` matrices over a signed numeric scalar, with the
//!   operations the 2-D transform layer needs: determinant by Laplace
//!   expansion, cofactor matrix, transpose, inverse.
//! - Storage is injected (see [`storage`]): a fixed-capacity inline array for
//!   small matrices or a contiguous heap grid for larger ones, selected by
//!   the caller through the type alias.
//!
//! Cost note
//! - `det` is recursive Laplace expansion along row 0 and grows factorially;
//!   callers bound `n` accordingly. No memoization.

pub mod storage;

#[cfg(test)]
mod tests;

use num_traits::{One, Signed, Zero};
use thiserror::Error;

pub use storage::{Grid, Inline, MatrixStore};

/// Capacity of the inline store used by [`FixedMatrix`].
pub const INLINE_DIM: usize = 20;

/// Small matrix on a fixed 20×20 inline store.
pub type FixedMatrix<T> = Matrix<Inline<T, INLINE_DIM, INLINE_DIM>>;
/// Matrix on a heap-backed contiguous grid, for dimensions past the inline bound.
pub type DynMatrix<T> = Matrix<Grid<T>>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("store cannot hold {rows}x{cols}")]
    Overflow { rows: usize, cols: usize },
    #[error("index ({row}, {col}) outside {rows}x{cols}")]
    InvalidIndex {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("removing the last row or column is not allowed")]
    CantRemoveDimension,
    #[error("operation requires a square matrix, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("matrix is singular or non-square")]
    NotInvertible,
    #[error("incompatible dimensions: {lhs_rows}x{lhs_cols} vs {rhs_rows}x{rhs_cols}")]
    IncompatibleDimensions {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },
}

/// Dense matrix with logical dimensions tracked apart from store capacity.
///
/// Invariants:
/// - `1 <= rows <= store.cap_rows()` and likewise for columns.
/// - Every cell inside the logical area is addressable in the store.
#[derive(Clone, Debug)]
pub struct Matrix<S: MatrixStore> {
    rows: usize,
    cols: usize,
    store: S,
}

impl<S> Matrix<S>
where
    S: MatrixStore + Default,
    S::Elem: Signed + Copy,
{
    /// Zero-filled matrix of the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        let mut mat = Self {
            rows: 0,
            cols: 0,
            store: S::default(),
        };
        mat.set_dims(rows, cols)?;
        Ok(mat)
    }

    /// Alias of [`Matrix::new`]; kept for symmetry with [`Matrix::identity`].
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Self::new(rows, cols)
    }

    pub fn identity(size: usize) -> Result<Self, MatrixError> {
        let mut mat = Self::new(size, size)?;
        for i in 0..size {
            mat.store.set(i, i, S::Elem::one());
        }
        Ok(mat)
    }

    /// Build from explicit rows; all slices must have equal length.
    pub fn from_rows(data: &[&[S::Elem]]) -> Result<Self, MatrixError> {
        let rows = data.len();
        let cols = data.first().map_or(0, |r| r.len());
        let mut mat = Self::new(rows, cols)?;
        for (i, row) in data.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::IncompatibleDimensions {
                    lhs_rows: rows,
                    lhs_cols: cols,
                    rhs_rows: 1,
                    rhs_cols: row.len(),
                });
            }
            for (j, &value) in row.iter().enumerate() {
                mat.store.set(i, j, value);
            }
        }
        Ok(mat)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Resize the logical area; fails `Overflow` past the store capacity or
    /// on a zero dimension.
    pub fn set_dims(&mut self, rows: usize, cols: usize) -> Result<(), MatrixError> {
        if rows == 0 || cols == 0 || rows > self.store.cap_rows() || cols > self.store.cap_cols() {
            return Err(MatrixError::Overflow { rows, cols });
        }
        self.store.resize(rows, cols);
        self.rows = rows;
        self.cols = cols;
        Ok(())
    }

    pub fn get(&self, row: usize, col: usize) -> Result<S::Elem, MatrixError> {
        self.check_index(row, col)?;
        Ok(self.store.get(row, col))
    }

    pub fn set(&mut self, row: usize, col: usize, value: S::Elem) -> Result<(), MatrixError> {
        self.check_index(row, col)?;
        self.store.set(row, col, value);
        Ok(())
    }

    fn check_index(&self, row: usize, col: usize) -> Result<(), MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::InvalidIndex {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Remove a row, shifting the ones below it up.
    pub fn remove_row(&mut self, row: usize) -> Result<(), MatrixError> {
        if row >= self.rows {
            return Err(MatrixError::InvalidIndex {
                row,
                col: 0,
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.rows == 1 {
            return Err(MatrixError::CantRemoveDimension);
        }
        self.remove_row_unchecked(row);
        Ok(())
    }

    /// Remove a column, shifting the ones right of it left.
    pub fn remove_col(&mut self, col: usize) -> Result<(), MatrixError> {
        if col >= self.cols {
            return Err(MatrixError::InvalidIndex {
                row: 0,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.cols == 1 {
            return Err(MatrixError::CantRemoveDimension);
        }
        self.remove_col_unchecked(col);
        Ok(())
    }

    fn remove_row_unchecked(&mut self, row: usize) {
        for i in row..self.rows - 1 {
            for j in 0..self.cols {
                let below = self.store.get(i + 1, j);
                self.store.set(i, j, below);
            }
        }
        self.rows -= 1;
        self.store.resize(self.rows, self.cols);
    }

    fn remove_col_unchecked(&mut self, col: usize) {
        for i in 0..self.rows {
            for j in col..self.cols - 1 {
                let right = self.store.get(i, j + 1);
                self.store.set(i, j, right);
            }
        }
        self.cols -= 1;
        self.store.resize(self.rows, self.cols);
    }

    pub fn transposed(&self) -> Result<Self, MatrixError> {
        let mut res = Self::new(self.cols, self.rows)?;
        for i in 0..self.rows {
            for j in 0..self.cols {
                res.store.set(j, i, self.store.get(i, j));
            }
        }
        Ok(res)
    }

    /// Determinant by recursive Laplace expansion along row 0.
    pub fn det(&self) -> Result<S::Elem, MatrixError> {
        if self.rows != self.cols {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.det_rec())
    }

    fn det_rec(&self) -> S::Elem {
        match self.rows {
            1 => self.store.get(0, 0),
            2 => {
                self.store.get(0, 0) * self.store.get(1, 1)
                    - self.store.get(1, 0) * self.store.get(0, 1)
            }
            _ => {
                let mut det = S::Elem::zero();
                let mut sign = S::Elem::one();
                for i in 0..self.cols {
                    let mut minor = self.clone();
                    minor.remove_row_unchecked(0);
                    minor.remove_col_unchecked(i);
                    det = det + self.store.get(0, i) * sign * minor.det_rec();
                    sign = -sign;
                }
                det
            }
        }
    }

    /// Matrix of signed minors. The 1×1 cofactor matrix is `[1]`, so the
    /// adjugate inverse stays well-defined down to scalars.
    pub fn cofactor_matrix(&self) -> Result<Self, MatrixError> {
        if self.rows != self.cols {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let mut res = Self::new(self.rows, self.cols)?;
        if self.rows == 1 {
            res.store.set(0, 0, S::Elem::one());
            return Ok(res);
        }
        for i in 0..self.rows {
            for j in 0..self.cols {
                let mut minor = self.clone();
                minor.remove_row_unchecked(i);
                minor.remove_col_unchecked(j);
                let sign = if (i + j) % 2 == 0 {
                    S::Elem::one()
                } else {
                    -S::Elem::one()
                };
                res.store.set(i, j, sign * minor.det_rec());
            }
        }
        Ok(res)
    }

    pub fn is_invertible(&self) -> bool {
        self.rows == self.cols && !self.det_rec().is_zero()
    }

    /// Adjugate inverse: `cofactors.transposed() * (1 / det)`.
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        if !self.is_invertible() {
            return Err(MatrixError::NotInvertible);
        }
        let det = self.det_rec();
        Ok(self
            .cofactor_matrix()?
            .transposed()?
            .mul_scalar(S::Elem::one() / det))
    }

    /// Main diagonal as a 1×n row matrix.
    pub fn primary_diagonal(&self) -> Result<Self, MatrixError> {
        if self.rows != self.cols {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let mut res = Self::new(1, self.rows)?;
        for i in 0..self.rows {
            res.store.set(0, i, self.store.get(i, i));
        }
        Ok(res)
    }

    /// Anti-diagonal as a 1×n row matrix, read bottom-left to top-right.
    pub fn secondary_diagonal(&self) -> Result<Self, MatrixError> {
        if self.rows != self.cols {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let mut res = Self::new(1, self.rows)?;
        for i in 0..self.rows {
            res.store.set(0, i, self.store.get(i, self.rows - 1 - i));
        }
        Ok(res)
    }

    pub fn try_add(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_same_dims(other)?;
        let mut res = self.clone();
        for i in 0..self.rows {
            for j in 0..self.cols {
                res.store
                    .set(i, j, self.store.get(i, j) + other.store.get(i, j));
            }
        }
        Ok(res)
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_same_dims(other)?;
        let mut res = self.clone();
        for i in 0..self.rows {
            for j in 0..self.cols {
                res.store
                    .set(i, j, self.store.get(i, j) - other.store.get(i, j));
            }
        }
        Ok(res)
    }

    /// Row-by-column contraction; inner dimensions must match.
    pub fn try_mul(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.cols != other.rows {
            return Err(MatrixError::IncompatibleDimensions {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: other.rows,
                rhs_cols: other.cols,
            });
        }
        let mut res = Self::new(self.rows, other.cols)?;
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut item = S::Elem::zero();
                for k in 0..self.cols {
                    item = item + self.store.get(i, k) * other.store.get(k, j);
                }
                res.store.set(i, j, item);
            }
        }
        Ok(res)
    }

    /// Right division: `self * other.inverse()`.
    pub fn try_div(&self, other: &Self) -> Result<Self, MatrixError> {
        self.try_mul(&other.inverse()?)
    }

    fn check_same_dims(&self, other: &Self) -> Result<(), MatrixError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrixError::IncompatibleDimensions {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: other.rows,
                rhs_cols: other.cols,
            });
        }
        Ok(())
    }

    pub fn add_scalar(&self, value: S::Elem) -> Self {
        self.map(|x| x + value)
    }
    pub fn sub_scalar(&self, value: S::Elem) -> Self {
        self.map(|x| x - value)
    }
    pub fn mul_scalar(&self, value: S::Elem) -> Self {
        self.map(|x| x * value)
    }
    pub fn div_scalar(&self, value: S::Elem) -> Self {
        self.map(|x| x / value)
    }

    fn map(&self, f: impl Fn(S::Elem) -> S::Elem) -> Self {
        let mut res = self.clone();
        for i in 0..self.rows {
            for j in 0..self.cols {
                res.store.set(i, j, f(self.store.get(i, j)));
            }
        }
        res
    }
}

impl<S> PartialEq for Matrix<S>
where
    S: MatrixStore,
    S::Elem: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.rows != other.rows || self.cols != other.cols {
            return false;
        }
        for i in 0..self.rows {
            for j in 0..self.cols {
                if self.store.get(i, j) != other.store.get(i, j) {
                    return false;
                }
            }
        }
        true
    }
}
