// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Bounds-checked element, row, column and range access.
//!
//! Getters always return owned copies; setters validate everything before
//! the first write, so a failed call leaves the receiver unchanged.

use crate::matrix::bounds;
use crate::{Axis, Matrix, MatrixError, Result, Shape};
use std::iter::FusedIterator;
use std::ops::{Index, IndexMut, Range, RangeBounds};

impl Matrix {
    // ── Validation helpers ─────────────────────────────────────

    pub(crate) fn check_index(&self, axis: Axis, index: usize) -> Result<()> {
        let bound = self.shape().extent(axis);
        if index >= bound {
            return Err(MatrixError::IndexOutOfRange { axis, index, bound });
        }
        Ok(())
    }

    pub(crate) fn check_range<B: RangeBounds<usize>>(
        &self,
        axis: Axis,
        range: &B,
        op: &'static str,
    ) -> Result<Range<usize>> {
        let bound = self.shape().extent(axis);
        let r = bounds(range, bound);
        if r.start > r.end || r.end > bound {
            return Err(MatrixError::RangeOutOfBounds {
                axis,
                start: r.start,
                end: r.end,
                bound,
            });
        }
        if r.is_empty() {
            return Err(MatrixError::EmptyInput { op });
        }
        Ok(r)
    }

    fn check_replacement(expected: Shape, replacement: &Matrix) -> Result<()> {
        if replacement.shape() != expected {
            return Err(MatrixError::IncompatibleReplacement {
                expected,
                actual: replacement.shape(),
            });
        }
        Ok(())
    }

    // ── Elements ───────────────────────────────────────────────

    /// Element at `(row, column)`.
    pub fn get(&self, row: usize, column: usize) -> Result<f64> {
        self.check_index(Axis::Row, row)?;
        self.check_index(Axis::Column, column)?;
        Ok(self.as_slice()[self.shape().offset(row, column)])
    }

    /// Overwrites the element at `(row, column)`.
    pub fn set(&mut self, row: usize, column: usize, value: f64) -> Result<()> {
        self.check_index(Axis::Row, row)?;
        self.check_index(Axis::Column, column)?;
        let offset = self.shape().offset(row, column);
        self.data_mut()[offset] = value;
        Ok(())
    }

    /// Element `i` of a row or column vector.
    ///
    /// # Errors
    /// [`MatrixError::NotAVector`] if the matrix has more than one row and
    /// more than one column; [`MatrixError::IndexOutOfRange`] if `i` is past
    /// the end.
    pub fn at(&self, i: usize) -> Result<f64> {
        let axis = self.vector_axis()?;
        self.check_index(axis, i)?;
        Ok(self.as_slice()[i])
    }

    /// Overwrites element `i` of a row or column vector.
    pub fn set_at(&mut self, i: usize, value: f64) -> Result<()> {
        let axis = self.vector_axis()?;
        self.check_index(axis, i)?;
        self.data_mut()[i] = value;
        Ok(())
    }

    /// The non-unit axis of a vector (`Column` for 1×1).
    fn vector_axis(&self) -> Result<Axis> {
        if self.is_row_vector() {
            Ok(Axis::Column)
        } else if self.is_column_vector() {
            Ok(Axis::Row)
        } else {
            Err(MatrixError::NotAVector {
                shape: self.shape(),
            })
        }
    }

    /// Element `(0, 0)`, the value of a 1×1 matrix.
    pub fn scalar(&self) -> f64 {
        self.as_slice()[0]
    }

    // ── Rows and columns ───────────────────────────────────────

    /// Row `row` as a `1 × columns` matrix.
    pub fn row(&self, row: usize) -> Result<Matrix> {
        self.check_index(Axis::Row, row)?;
        Ok(Matrix::from_parts(
            Shape::new(1, self.columns()),
            self.row_slice(row).to_vec(),
        ))
    }

    /// Replaces row `row` with a `1 × columns` matrix.
    pub fn set_row(&mut self, row: usize, replacement: &Matrix) -> Result<()> {
        self.check_index(Axis::Row, row)?;
        Self::check_replacement(Shape::new(1, self.columns()), replacement)?;
        let columns = self.columns();
        let start = row * columns;
        matrix_kernels::copy(
            replacement.as_slice(),
            &mut self.data_mut()[start..start + columns],
        )?;
        Ok(())
    }

    /// Column `column` as a `rows × 1` matrix.
    pub fn column(&self, column: usize) -> Result<Matrix> {
        self.check_index(Axis::Column, column)?;
        let rows = self.rows();
        let mut data = vec![0.0; rows];
        matrix_kernels::copy_strided(
            rows,
            &self.as_slice()[column..],
            self.columns(),
            &mut data,
            1,
        )?;
        Ok(Matrix::from_parts(Shape::new(rows, 1), data))
    }

    /// Replaces column `column` with a `rows × 1` matrix.
    pub fn set_column(&mut self, column: usize, replacement: &Matrix) -> Result<()> {
        self.check_index(Axis::Column, column)?;
        Self::check_replacement(Shape::new(self.rows(), 1), replacement)?;
        let (rows, columns) = (self.rows(), self.columns());
        matrix_kernels::copy_strided(
            rows,
            replacement.as_slice(),
            1,
            &mut self.data_mut()[column..],
            columns,
        )?;
        Ok(())
    }

    // ── Ranges ─────────────────────────────────────────────────

    /// Rows in `range` as a `(end - start) × columns` matrix.
    ///
    /// # Examples
    /// ```
    /// use matrix_core::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
    /// assert_eq!(m.rows_in(1..).unwrap().to_nested(), vec![vec![3.0, 4.0], vec![5.0, 6.0]]);
    /// ```
    pub fn rows_in<B: RangeBounds<usize>>(&self, range: B) -> Result<Matrix> {
        let r = self.check_range(Axis::Row, &range, "rows_in")?;
        let columns = self.columns();
        Ok(Matrix::from_parts(
            Shape::new(r.len(), columns),
            self.as_slice()[r.start * columns..r.end * columns].to_vec(),
        ))
    }

    /// Replaces the rows in `range` with a `(end - start) × columns` matrix.
    pub fn set_rows_in<B: RangeBounds<usize>>(
        &mut self,
        range: B,
        replacement: &Matrix,
    ) -> Result<()> {
        let r = self.check_range(Axis::Row, &range, "set_rows_in")?;
        let columns = self.columns();
        Self::check_replacement(Shape::new(r.len(), columns), replacement)?;
        matrix_kernels::copy(
            replacement.as_slice(),
            &mut self.data_mut()[r.start * columns..r.end * columns],
        )?;
        Ok(())
    }

    /// Columns in `range` as a `rows × (end - start)` matrix.
    pub fn columns_in<B: RangeBounds<usize>>(&self, range: B) -> Result<Matrix> {
        let r = self.check_range(Axis::Column, &range, "columns_in")?;
        let width = r.len();
        let mut data = Vec::with_capacity(self.rows() * width);
        for row in self.iter_rows() {
            data.extend_from_slice(&row[r.clone()]);
        }
        Ok(Matrix::from_parts(Shape::new(self.rows(), width), data))
    }

    /// Replaces the columns in `range` with a `rows × (end - start)` matrix.
    pub fn set_columns_in<B: RangeBounds<usize>>(
        &mut self,
        range: B,
        replacement: &Matrix,
    ) -> Result<()> {
        let r = self.check_range(Axis::Column, &range, "set_columns_in")?;
        Self::check_replacement(Shape::new(self.rows(), r.len()), replacement)?;
        let columns = self.columns();
        let data = self.data_mut();
        for (i, src) in replacement.iter_rows().enumerate() {
            let start = i * columns + r.start;
            data[start..start + src.len()].copy_from_slice(src);
        }
        Ok(())
    }

    /// Copies the listed rows, in order, into a new `indices.len() × columns`
    /// matrix. Indices may repeat.
    ///
    /// # Examples
    /// ```
    /// use matrix_core::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
    /// let picked = m.select_rows(&[2, 0]).unwrap();
    /// assert_eq!(picked.to_nested(), vec![vec![5.0, 6.0], vec![1.0, 2.0]]);
    /// ```
    pub fn select_rows(&self, indices: &[usize]) -> Result<Matrix> {
        if indices.is_empty() {
            return Err(MatrixError::EmptyInput { op: "select_rows" });
        }
        for &i in indices {
            self.check_index(Axis::Row, i)?;
        }
        let mut data = Vec::with_capacity(indices.len() * self.columns());
        for &i in indices {
            data.extend_from_slice(self.row_slice(i));
        }
        Ok(Matrix::from_parts(
            Shape::new(indices.len(), self.columns()),
            data,
        ))
    }

    /// Loads the columns `source_columns` of each source row into the
    /// receiver, row `i` of the source going to row `i` of the receiver,
    /// starting at `destination_column`.
    ///
    /// Used to assemble a matrix piecewise:
    ///
    /// ```
    /// use matrix_core::Matrix;
    /// let mut m = Matrix::zeros(2, 3);
    /// m.load(&[[1.0, 2.0, 9.0], [3.0, 4.0, 9.0]], 0..2, 1).unwrap();
    /// assert_eq!(m.to_nested(), vec![vec![0.0, 1.0, 2.0], vec![0.0, 3.0, 4.0]]);
    /// ```
    ///
    /// # Errors
    /// - [`MatrixError::RangeOutOfBounds`] if there are more source rows than
    ///   receiver rows, or the destination columns run past the receiver.
    /// - [`MatrixError::RaggedRows`] if a source row is shorter than the range.
    /// - [`MatrixError::EmptyInput`] for no rows or an empty column range.
    pub fn load<R, B>(
        &mut self,
        source: &[R],
        source_columns: B,
        destination_column: usize,
    ) -> Result<()>
    where
        R: AsRef<[f64]>,
        B: RangeBounds<usize>,
    {
        let first_len = source.first().map_or(0, |r| r.as_ref().len());
        let cols = bounds(&source_columns, first_len);
        if source.is_empty() || cols.end <= cols.start {
            return Err(MatrixError::EmptyInput { op: "load" });
        }
        if source.len() > self.rows() {
            return Err(MatrixError::RangeOutOfBounds {
                axis: Axis::Row,
                start: 0,
                end: source.len(),
                bound: self.rows(),
            });
        }
        let dest_end = destination_column.saturating_add(cols.len());
        if dest_end > self.columns() {
            return Err(MatrixError::RangeOutOfBounds {
                axis: Axis::Column,
                start: destination_column,
                end: dest_end,
                bound: self.columns(),
            });
        }
        for (i, row) in source.iter().enumerate() {
            let len = row.as_ref().len();
            if len < cols.end {
                return Err(MatrixError::RaggedRows {
                    row: i,
                    expected: cols.end,
                    actual: len,
                });
            }
        }

        let columns = self.columns();
        let data = self.data_mut();
        for (i, row) in source.iter().enumerate() {
            let start = i * columns + destination_column;
            data[start..start + cols.len()].copy_from_slice(&row.as_ref()[cols.clone()]);
        }
        Ok(())
    }

    // ── Conversion and traversal ───────────────────────────────

    /// Row `row` as a borrowed slice (unchecked beyond slice indexing).
    pub(crate) fn row_slice(&self, row: usize) -> &[f64] {
        let columns = self.columns();
        &self.as_slice()[row * columns..(row + 1) * columns]
    }

    /// The elements as nested rows.
    pub fn to_nested(&self) -> Vec<Vec<f64>> {
        self.iter_rows().map(<[f64]>::to_vec).collect()
    }

    /// Iterates over the rows, in order, as read-only slices.
    ///
    /// Every call starts a fresh traversal at row 0.
    pub fn iter_rows(&self) -> RowIter<'_> {
        RowIter {
            data: self.as_slice(),
            columns: self.columns(),
            front: 0,
            back: self.rows(),
        }
    }
}

/// Iterator over the rows of a [`Matrix`], see [`Matrix::iter_rows`].
#[derive(Debug, Clone)]
pub struct RowIter<'a> {
    data: &'a [f64],
    columns: usize,
    front: usize,
    back: usize,
}

impl<'a> Iterator for RowIter<'a> {
    type Item = &'a [f64];

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let start = self.front * self.columns;
        self.front += 1;
        Some(&self.data[start..start + self.columns])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for RowIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        let start = self.back * self.columns;
        Some(&self.data[start..start + self.columns])
    }
}

impl ExactSizeIterator for RowIter<'_> {}

impl FusedIterator for RowIter<'_> {}

impl<'a> IntoIterator for &'a Matrix {
    type Item = &'a [f64];
    type IntoIter = RowIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_rows()
    }
}

impl From<&Matrix> for Vec<Vec<f64>> {
    fn from(m: &Matrix) -> Self {
        m.to_nested()
    }
}

/// Unchecked-style element access: panics on out-of-range indices, like
/// slice indexing. Use [`Matrix::get`] for a recoverable error.
impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.rows() && column < self.columns(),
            "index ({row}, {column}) out of range for {} matrix",
            self.shape()
        );
        &self.as_slice()[self.shape().offset(row, column)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.rows() && column < self.columns(),
            "index ({row}, {column}) out of range for {} matrix",
            self.shape()
        );
        let offset = self.shape().offset(row, column);
        &mut self.data_mut()[offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix {
        Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).unwrap()
    }

    #[test]
    fn test_get_set() {
        let mut m = sample();
        assert_eq!(m.get(1, 2).unwrap(), 6.0);
        m.set(1, 2, 60.0).unwrap();
        assert_eq!(m.get(1, 2).unwrap(), 60.0);
        assert_eq!(m[(1, 2)], 60.0);
    }

    #[test]
    fn test_get_out_of_range() {
        let m = sample();
        assert_eq!(
            m.get(3, 0),
            Err(MatrixError::IndexOutOfRange {
                axis: Axis::Row,
                index: 3,
                bound: 3
            })
        );
        assert!(matches!(
            m.get(0, 7),
            Err(MatrixError::IndexOutOfRange {
                axis: Axis::Column,
                ..
            })
        ));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_operator_panics() {
        let m = sample();
        let _ = m[(0, 3)];
    }

    #[test]
    fn test_index_mut_copy_on_write() {
        let a = sample();
        let mut b = a.clone();
        b[(0, 0)] = -1.0;
        assert_eq!(a[(0, 0)], 1.0);
        assert_eq!(b[(0, 0)], -1.0);
    }

    #[test]
    fn test_vector_access() {
        let mut r = Matrix::row_vector(vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(r.at(2).unwrap(), 3.0);
        r.set_at(0, 9.0).unwrap();
        assert_eq!(r.at(0).unwrap(), 9.0);

        let c = Matrix::column_vector(vec![4.0, 5.0]).unwrap();
        assert_eq!(c.at(1).unwrap(), 5.0);
        assert!(matches!(
            c.at(2),
            Err(MatrixError::IndexOutOfRange { axis: Axis::Row, .. })
        ));

        let m = sample();
        assert_eq!(
            m.at(0),
            Err(MatrixError::NotAVector {
                shape: Shape::new(3, 3)
            })
        );
    }

    #[test]
    fn test_scalar() {
        let one = Matrix::filled(1, 1, 4.5);
        assert_eq!(one.scalar(), 4.5);
    }

    #[test]
    fn test_row_get_set() {
        let mut m = sample();
        assert_eq!(m.row(1).unwrap().as_slice(), &[4.0, 5.0, 6.0]);

        let new_row = Matrix::row_vector(vec![0.0, 0.0, 0.0]).unwrap();
        m.set_row(1, &new_row).unwrap();
        assert_eq!(m.row(1).unwrap(), new_row);
    }

    #[test]
    fn test_set_row_wrong_shape_leaves_receiver() {
        let mut m = sample();
        let before = m.clone();
        let bad = Matrix::column_vector(vec![0.0, 0.0, 0.0]).unwrap();
        assert_eq!(
            m.set_row(0, &bad),
            Err(MatrixError::IncompatibleReplacement {
                expected: Shape::new(1, 3),
                actual: Shape::new(3, 1)
            })
        );
        assert_eq!(m, before);
    }

    #[test]
    fn test_column_get_set() {
        let mut m = sample();
        let c = m.column(2).unwrap();
        assert_eq!(c.shape(), Shape::new(3, 1));
        assert_eq!(c.as_slice(), &[3.0, 6.0, 9.0]);

        m.set_column(0, &Matrix::column_vector(vec![-1.0, -2.0, -3.0]).unwrap())
            .unwrap();
        assert_eq!(m.column(0).unwrap().as_slice(), &[-1.0, -2.0, -3.0]);
        assert_eq!(m.get(0, 1).unwrap(), 2.0);

        assert!(m.set_column(0, &Matrix::zeros(1, 3)).is_err());
        assert!(m.column(3).is_err());
    }

    #[test]
    fn test_rows_in() {
        let m = sample();
        let mid = m.rows_in(1..3).unwrap();
        assert_eq!(mid.shape(), Shape::new(2, 3));
        assert_eq!(mid.as_slice(), &[4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(m.rows_in(..).unwrap(), m);
        assert_eq!(m.rows_in(0..=0).unwrap().as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_rows_in_errors() {
        let m = sample();
        assert_eq!(
            m.rows_in(2..5),
            Err(MatrixError::RangeOutOfBounds {
                axis: Axis::Row,
                start: 2,
                end: 5,
                bound: 3
            })
        );
        assert!(matches!(
            m.rows_in(1..1),
            Err(MatrixError::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_set_rows_in() {
        let mut m = sample();
        m.set_rows_in(0..2, &Matrix::zeros(2, 3)).unwrap();
        assert_eq!(m.as_slice(), &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 7.0, 8.0, 9.0]);
        assert!(m.set_rows_in(0..2, &Matrix::zeros(3, 3)).is_err());
    }

    #[test]
    fn test_columns_in() {
        let m = sample();
        let right = m.columns_in(1..).unwrap();
        assert_eq!(right.shape(), Shape::new(3, 2));
        assert_eq!(right.as_slice(), &[2.0, 3.0, 5.0, 6.0, 8.0, 9.0]);
        assert!(m.columns_in(0..4).is_err());
    }

    #[test]
    fn test_set_columns_in() {
        let mut m = sample();
        m.set_columns_in(1..3, &Matrix::ones(3, 2)).unwrap();
        assert_eq!(m.as_slice(), &[1.0, 1.0, 1.0, 4.0, 1.0, 1.0, 7.0, 1.0, 1.0]);

        let before = m.clone();
        assert!(matches!(
            m.set_columns_in(1..3, &Matrix::ones(2, 2)),
            Err(MatrixError::IncompatibleReplacement { .. })
        ));
        assert_eq!(m, before);
    }

    #[test]
    fn test_select_rows() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
        let picked = m.select_rows(&[2, 0]).unwrap();
        assert_eq!(picked.to_nested(), vec![vec![5.0, 6.0], vec![1.0, 2.0]]);

        let dup = m.select_rows(&[1, 1, 1]).unwrap();
        assert_eq!(dup.shape(), Shape::new(3, 2));
        assert_eq!(dup.as_slice(), &[3.0, 4.0, 3.0, 4.0, 3.0, 4.0]);

        assert!(m.select_rows(&[0, 3]).is_err());
        assert!(m.select_rows(&[]).is_err());
    }

    #[test]
    fn test_load() {
        let mut m = Matrix::zeros(3, 4);
        m.load(&[vec![1.0, 2.0], vec![3.0, 4.0]], .., 2).unwrap();
        assert_eq!(
            m.to_nested(),
            vec![
                vec![0.0, 0.0, 1.0, 2.0],
                vec![0.0, 0.0, 3.0, 4.0],
                vec![0.0, 0.0, 0.0, 0.0]
            ]
        );
    }

    #[test]
    fn test_load_errors_leave_receiver() {
        let mut m = Matrix::zeros(2, 3);
        let before = m.clone();

        // Destination past the last column.
        assert!(matches!(
            m.load(&[[1.0, 2.0]], 0..2, 2),
            Err(MatrixError::RangeOutOfBounds {
                axis: Axis::Column,
                ..
            })
        ));
        // Too many source rows.
        assert!(matches!(
            m.load(&[[1.0], [2.0], [3.0]], 0..1, 0),
            Err(MatrixError::RangeOutOfBounds { axis: Axis::Row, .. })
        ));
        // Second source row too short.
        assert!(matches!(
            m.load(&[vec![1.0, 2.0], vec![3.0]], 0..2, 0),
            Err(MatrixError::RaggedRows { row: 1, .. })
        ));
        assert_eq!(m, before);
    }

    #[test]
    fn test_ranges_ending_at_usize_max() {
        let mut m = sample();
        let before = m.clone();
        assert_eq!(
            m.rows_in(0..=usize::MAX),
            Err(MatrixError::RangeOutOfBounds {
                axis: Axis::Row,
                start: 0,
                end: usize::MAX,
                bound: 3
            })
        );
        assert!(matches!(
            m.columns_in(1..=usize::MAX),
            Err(MatrixError::RangeOutOfBounds { axis: Axis::Column, .. })
        ));
        assert!(m
            .set_columns_in(0..=usize::MAX, &Matrix::ones(3, 1))
            .unwrap_err()
            .is_index_error());
        assert!(matches!(
            m.mean_in(..=usize::MAX),
            Err(MatrixError::RangeOutOfBounds { .. })
        ));
        assert!(m.std_in(0..=usize::MAX).is_err());
        assert_eq!(m, before);
    }

    #[test]
    fn test_load_destination_past_usize_max() {
        let mut m = Matrix::zeros(2, 3);
        assert_eq!(
            m.load(&[[1.0]], 0..1, usize::MAX),
            Err(MatrixError::RangeOutOfBounds {
                axis: Axis::Column,
                start: usize::MAX,
                end: usize::MAX,
                bound: 3
            })
        );
        assert!(matches!(
            m.load(&[[1.0, 2.0]], 0..=usize::MAX, 0),
            Err(MatrixError::RangeOutOfBounds { axis: Axis::Column, .. })
        ));
        assert_eq!(m, Matrix::zeros(2, 3));
    }

    #[test]
    fn test_to_nested_and_from() {
        let m = sample();
        let nested: Vec<Vec<f64>> = (&m).into();
        assert_eq!(nested, m.to_nested());
        assert_eq!(nested[2], vec![7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_iter_rows_restartable() {
        let m = sample();
        let first: Vec<&[f64]> = m.iter_rows().collect();
        let second: Vec<&[f64]> = (&m).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
        assert_eq!(m.iter_rows().len(), 3);
        assert_eq!(m.iter_rows().next_back().unwrap(), &[7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_getters_do_not_mutate() {
        let m = sample();
        let before = m.clone();
        let _ = m.row(0);
        let _ = m.column(1);
        let _ = m.rows_in(0..2);
        let _ = m.columns_in(1..3);
        let _ = m.select_rows(&[2, 2]);
        let _ = m.to_nested();
        assert_eq!(m, before);
    }
}
