// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The core [`Matrix`] type and its factories.

use crate::storage::Storage;
use crate::{MatrixError, NumericConfig, Orientation, Result, Shape};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use std::ops::{Bound, Range, RangeBounds};

/// A dense, row-major matrix of `f64` with value semantics.
///
/// `Matrix` owns its elements logically but shares the physical buffer
/// between clones until one of them is written (copy-on-write), so
/// `let b = a.clone()` is cheap and `b` still behaves as an independent
/// copy.
///
/// Both extents are at least 1 and never change for the life of a value;
/// reshaping always produces a new matrix.
///
/// # Examples
/// ```
/// use matrix_core::Matrix;
///
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let mut b = a.clone();
/// b.set(0, 0, 10.0).unwrap();
/// assert_eq!(a.get(0, 0).unwrap(), 1.0);
/// assert_eq!(b.get(0, 0).unwrap(), 10.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    shape: Shape,
    storage: Storage,
}

impl Matrix {
    // ── Internal constructors ──────────────────────────────────

    /// Wraps a buffer whose length is already known to match `shape`.
    pub(crate) fn from_parts(shape: Shape, data: Vec<f64>) -> Self {
        debug_assert_eq!(shape.num_elements(), data.len());
        debug_assert!(shape.is_valid());
        Self {
            shape,
            storage: Storage::from_vec(data),
        }
    }

    /// A new matrix of the given shape that shares `self`'s buffer.
    ///
    /// Only valid when the row-major element order is identical under both
    /// shapes (vector transposes).
    pub(crate) fn reshaped_alias(&self, shape: Shape) -> Self {
        debug_assert_eq!(shape.num_elements(), self.shape.num_elements());
        Self {
            shape,
            storage: self.storage.clone(),
        }
    }

    /// Mutable element buffer; duplicates the storage first if it is shared.
    pub(crate) fn data_mut(&mut self) -> &mut [f64] {
        self.storage.make_mut()
    }

    fn assert_dims(rows: usize, columns: usize) {
        assert!(
            rows > 0 && columns > 0,
            "matrix dimensions must be positive, got {rows}x{columns}"
        );
    }

    // ── Factories ──────────────────────────────────────────────

    /// A `rows × columns` matrix of zeros.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self::filled(rows, columns, 0.0)
    }

    /// A `rows × columns` matrix of ones.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn ones(rows: usize, columns: usize) -> Self {
        Self::filled(rows, columns, 1.0)
    }

    /// A `rows × columns` matrix with every cell set to `value`.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn filled(rows: usize, columns: usize, value: f64) -> Self {
        Self::assert_dims(rows, columns);
        Self {
            shape: Shape::new(rows, columns),
            storage: Storage::filled(rows * columns, value),
        }
    }

    /// The `size × size` identity matrix.
    ///
    /// # Panics
    /// Panics if `size` is zero.
    pub fn identity(size: usize) -> Self {
        let mut m = Self::zeros(size, size);
        let data = m.data_mut();
        for i in 0..size {
            data[i * size + i] = 1.0;
        }
        m
    }

    /// A `rows × columns` matrix of independent uniform draws from `[0, 1]`.
    ///
    /// The generator is injected so that callers control seeding:
    ///
    /// ```
    /// use matrix_core::Matrix;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let a = Matrix::random(2, 3, &mut StdRng::seed_from_u64(7));
    /// let b = Matrix::random(2, 3, &mut StdRng::seed_from_u64(7));
    /// assert_eq!(a, b);
    /// assert!(a.as_slice().iter().all(|v| (0.0..=1.0).contains(v)));
    /// ```
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn random<R: Rng + ?Sized>(rows: usize, columns: usize, rng: &mut R) -> Self {
        Self::assert_dims(rows, columns);
        let uniform = Uniform::new_inclusive(0.0, 1.0);
        let data = (0..rows * columns).map(|_| uniform.sample(rng)).collect();
        Self::from_parts(Shape::new(rows, columns), data)
    }

    /// Wraps a row-major buffer of exactly `rows * columns` elements.
    ///
    /// # Errors
    /// - [`MatrixError::EmptyInput`] if a dimension is zero.
    /// - [`MatrixError::BufferSize`] if the buffer length does not match.
    pub fn from_vec(rows: usize, columns: usize, data: Vec<f64>) -> Result<Self> {
        let shape = Shape::new(rows, columns);
        if !shape.is_valid() {
            return Err(MatrixError::EmptyInput { op: "from_vec" });
        }
        if data.len() != shape.num_elements() {
            return Err(MatrixError::BufferSize {
                shape,
                len: data.len(),
            });
        }
        Ok(Self::from_parts(shape, data))
    }

    /// Builds a matrix from nested rows.
    ///
    /// The column count is the length of the first row; every other row must
    /// have exactly that length.
    ///
    /// # Errors
    /// - [`MatrixError::EmptyInput`] for no rows or an empty first row.
    /// - [`MatrixError::RaggedRows`] for a row of a different length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let columns = rows.first().map_or(0, |r| r.as_ref().len());
        if columns == 0 {
            return Err(MatrixError::EmptyInput { op: "from_rows" });
        }
        let mut data = Vec::with_capacity(rows.len() * columns);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != columns {
                return Err(MatrixError::RaggedRows {
                    row: i,
                    expected: columns,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self::from_parts(Shape::new(rows.len(), columns), data))
    }

    /// Builds a matrix from the columns `range` of every nested row.
    ///
    /// An unbounded end stops at the first row's length. The result has
    /// `end - start` columns.
    ///
    /// # Examples
    /// ```
    /// use matrix_core::Matrix;
    /// let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
    /// let m = Matrix::from_rows_range(&rows, 1..3).unwrap();
    /// assert_eq!(m.to_nested(), vec![vec![2.0, 3.0], vec![5.0, 6.0]]);
    /// ```
    ///
    /// # Errors
    /// - [`MatrixError::EmptyInput`] for no rows or an empty range.
    /// - [`MatrixError::RaggedRows`] if a row is shorter than the range end.
    pub fn from_rows_range<R, B>(rows: &[R], range: B) -> Result<Self>
    where
        R: AsRef<[f64]>,
        B: RangeBounds<usize>,
    {
        let first_len = rows.first().map_or(0, |r| r.as_ref().len());
        let Range { start, end } = bounds(&range, first_len);
        if rows.is_empty() || end <= start {
            return Err(MatrixError::EmptyInput {
                op: "from_rows_range",
            });
        }
        for (i, row) in rows.iter().enumerate() {
            let len = row.as_ref().len();
            if len < end {
                return Err(MatrixError::RaggedRows {
                    row: i,
                    expected: end,
                    actual: len,
                });
            }
        }
        let columns = end - start;
        let mut data = Vec::with_capacity(rows.len() * columns);
        for row in rows {
            data.extend_from_slice(&row.as_ref()[start..end]);
        }
        Ok(Self::from_parts(Shape::new(rows.len(), columns), data))
    }

    /// Builds a `1 × N` or `N × 1` matrix from a flat sequence.
    pub fn from_vector(values: Vec<f64>, orientation: Orientation) -> Result<Self> {
        if values.is_empty() {
            return Err(MatrixError::EmptyInput { op: "from_vector" });
        }
        Ok(Self::from_parts(
            Shape::vector(values.len(), orientation),
            values,
        ))
    }

    /// Shorthand for [`Matrix::from_vector`] with [`Orientation::Row`].
    pub fn row_vector(values: Vec<f64>) -> Result<Self> {
        Self::from_vector(values, Orientation::Row)
    }

    /// Shorthand for [`Matrix::from_vector`] with [`Orientation::Column`].
    pub fn column_vector(values: Vec<f64>) -> Result<Self> {
        Self::from_vector(values, Orientation::Column)
    }

    /// A vector of the consecutive integers in `range`, as doubles.
    ///
    /// # Examples
    /// ```
    /// use matrix_core::{Matrix, Orientation};
    /// let v = Matrix::arange(-1..3, Orientation::Column).unwrap();
    /// assert_eq!(v.as_slice(), &[-1.0, 0.0, 1.0, 2.0]);
    /// assert_eq!(v.columns(), 1);
    /// ```
    pub fn arange(range: Range<i64>, orientation: Orientation) -> Result<Self> {
        if range.is_empty() {
            return Err(MatrixError::EmptyInput { op: "arange" });
        }
        Self::from_vector(range.map(|v| v as f64).collect(), orientation)
    }

    /// Stacks `copies` copies of a row vector into a `copies × columns` matrix.
    ///
    /// # Errors
    /// - [`MatrixError::NotARowVector`] unless `self.rows() == 1`.
    /// - [`MatrixError::EmptyInput`] if `copies == 0`.
    pub fn tile(&self, copies: usize) -> Result<Self> {
        if !self.shape.is_row_vector() {
            return Err(MatrixError::NotARowVector {
                op: "tile",
                shape: self.shape,
            });
        }
        if copies == 0 {
            return Err(MatrixError::EmptyInput { op: "tile" });
        }
        if copies == 1 {
            return Ok(self.clone());
        }
        let row = self.as_slice();
        let mut data = Vec::with_capacity(copies * row.len());
        for _ in 0..copies {
            data.extend_from_slice(row);
        }
        Ok(Self::from_parts(Shape::new(copies, row.len()), data))
    }

    // ── Shape queries ──────────────────────────────────────────

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn rows(&self) -> usize {
        self.shape.rows()
    }

    pub fn columns(&self) -> usize {
        self.shape.columns()
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Always `false`: matrices have at least one element.
    pub fn is_empty(&self) -> bool {
        self.storage.len() == 0
    }

    pub fn is_row_vector(&self) -> bool {
        self.shape.is_row_vector()
    }

    pub fn is_column_vector(&self) -> bool {
        self.shape.is_column_vector()
    }

    pub fn is_vector(&self) -> bool {
        self.shape.is_vector()
    }

    pub fn is_square(&self) -> bool {
        self.shape.is_square()
    }

    // ── Raw access ─────────────────────────────────────────────

    /// The elements in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        self.storage.as_slice()
    }

    /// A copy of the elements in row-major order.
    pub fn to_vec(&self) -> Vec<f64> {
        self.as_slice().to_vec()
    }

    /// Consumes the matrix, returning its row-major buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.storage.into_vec()
    }

    /// `true` if both matrices currently share one physical buffer.
    ///
    /// Purely diagnostic: sharing is never observable through values,
    /// since any write first gives the writer its own buffer.
    pub fn shares_storage(&self, other: &Matrix) -> bool {
        self.storage.ptr_eq(&other.storage)
    }

    /// `true` if the shapes match and every pair of elements differs by at
    /// most `tolerance`.
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.shape == other.shape
            && self
                .as_slice()
                .iter()
                .zip(other.as_slice())
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    /// [`Matrix::approx_eq`] with `config.approx_tolerance`.
    pub fn approx_eq_with(&self, other: &Matrix, config: &NumericConfig) -> bool {
        self.approx_eq(other, config.approx_tolerance)
    }
}

/// Resolves `range` to a half-open `start..end`, with `default_end` for an
/// unbounded end. No bounds checking.
///
/// Bounds at `usize::MAX` saturate, so the result is still past any real
/// dimension and fails the caller's check.
pub(crate) fn bounds<B: RangeBounds<usize>>(range: &B, default_end: usize) -> Range<usize> {
    let start = match range.start_bound() {
        Bound::Unbounded => 0,
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
    };
    let end = match range.end_bound() {
        Bound::Unbounded => default_end,
        Bound::Included(&e) => e.saturating_add(1),
        Bound::Excluded(&e) => e,
    };
    start..end
}
