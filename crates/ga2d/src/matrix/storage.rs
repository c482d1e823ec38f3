//! Backing stores for [`super::Matrix`].
//!
//! Two concrete stores behind one trait, selected by the caller:
//! - `Inline<T, R, C>`: fixed-capacity inline array for small matrices.
//! - `Grid<T>`: a single contiguous growable buffer with row-major indexing
//!   for matrices beyond the inline bound.
//!
//! The matrix validates dimensions and indices before touching the store, so
//! store accessors only `debug_assert` their inputs.

use num_traits::Zero;

/// Resizable 2-D storage capability consumed by [`super::Matrix`].
pub trait MatrixStore: Clone {
    type Elem: Copy;

    /// Largest row count this store can ever hold.
    fn cap_rows(&self) -> usize;
    /// Largest column count this store can ever hold.
    fn cap_cols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> Self::Elem;
    fn set(&mut self, row: usize, col: usize, value: Self::Elem);
    /// Make `rows × cols` addressable. Existing values in the overlapping
    /// region are preserved; new cells read as zero.
    fn resize(&mut self, rows: usize, cols: usize);
}

/// Fixed-capacity inline store; `resize` only re-labels the logical area.
#[derive(Clone, Debug)]
pub struct Inline<T, const R: usize, const C: usize> {
    items: [[T; C]; R],
}

impl<T: Copy + Zero, const R: usize, const C: usize> Default for Inline<T, R, C> {
    fn default() -> Self {
        Self {
            items: [[T::zero(); C]; R],
        }
    }
}

impl<T: Copy + Zero, const R: usize, const C: usize> MatrixStore for Inline<T, R, C> {
    type Elem = T;

    #[inline]
    fn cap_rows(&self) -> usize {
        R
    }
    #[inline]
    fn cap_cols(&self) -> usize {
        C
    }
    #[inline]
    fn get(&self, row: usize, col: usize) -> T {
        debug_assert!(row < R && col < C);
        self.items[row][col]
    }
    #[inline]
    fn set(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(row < R && col < C);
        self.items[row][col] = value;
    }
    #[inline]
    fn resize(&mut self, rows: usize, cols: usize) {
        debug_assert!(rows <= R && cols <= C);
        // Capacity is fixed; the full grid stays addressable.
    }
}

/// Heap-backed store: one contiguous row-major buffer.
///
/// Replaces per-row allocation schemes; the stride equals the current column
/// count and changes only through `resize`.
#[derive(Clone, Debug, Default)]
pub struct Grid<T> {
    buf: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy + Zero> MatrixStore for Grid<T> {
    type Elem = T;

    #[inline]
    fn cap_rows(&self) -> usize {
        usize::MAX
    }
    #[inline]
    fn cap_cols(&self) -> usize {
        usize::MAX
    }
    #[inline]
    fn get(&self, row: usize, col: usize) -> T {
        debug_assert!(row < self.rows && col < self.cols);
        self.buf[row * self.cols + col]
    }
    #[inline]
    fn set(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(row < self.rows && col < self.cols);
        self.buf[row * self.cols + col] = value;
    }
    fn resize(&mut self, rows: usize, cols: usize) {
        if rows == self.rows && cols == self.cols {
            return;
        }
        let mut buf = vec![T::zero(); rows * cols];
        let copy_rows = rows.min(self.rows);
        let copy_cols = cols.min(self.cols);
        for i in 0..copy_rows {
            for j in 0..copy_cols {
                buf[i * cols + j] = self.buf[i * self.cols + j];
            }
        }
        self.buf = buf;
        self.rows = rows;
        self.cols = cols;
    }
}
