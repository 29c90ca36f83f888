// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Reductions and column statistics.
//!
//! Extremum searches use strict comparisons: ties go to the first element
//! scanned, and a NaN is only ever reported when it is that first element.

use crate::error::shape_sized;
use crate::{Axis, Matrix, Result, Shape};
use matrix_kernels::{iamax, iamin, mean, sum};
use std::ops::{Range, RangeBounds};
use tracing::warn;

/// Position and value of a global minimum or maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    pub value: f64,
    pub row: usize,
    pub column: usize,
}

#[derive(Debug, Clone, Copy)]
enum Pick {
    Min,
    Max,
}

impl Pick {
    /// Element index of the first minimum or maximum among `n` strided values.
    ///
    /// Every lane of a matrix holds at least one element, so `n` is non-zero.
    fn locate(self, n: usize, x: &[f64], inc: usize) -> usize {
        let found = match self {
            Pick::Min => iamin(n, x, inc),
            Pick::Max => iamax(n, x, inc),
        };
        shape_sized(found).expect("matrix lanes are never empty")
    }
}

impl Matrix {
    // ── Sums ───────────────────────────────────────────────────

    /// Sum of every element.
    pub fn sum(&self) -> f64 {
        shape_sized(sum(self.len(), self.as_slice(), 1))
    }

    /// Per-row sums as a `rows × 1` column vector.
    pub fn sum_rows(&self) -> Matrix {
        let sums = self
            .iter_rows()
            .map(|row| shape_sized(sum(row.len(), row, 1)))
            .collect();
        Matrix::from_parts(Shape::new(self.rows(), 1), sums)
    }

    /// Per-column sums as a `1 × columns` row vector.
    pub fn sum_columns(&self) -> Matrix {
        let sums = self.column_sums(0..self.columns());
        Matrix::from_parts(Shape::new(1, self.columns()), sums)
    }

    // ── Extrema ────────────────────────────────────────────────

    /// `(n, data, inc)` view of row or column `index`, which must be in range.
    fn lane(&self, axis: Axis, index: usize) -> (usize, &[f64], usize) {
        match axis {
            Axis::Row => (self.columns(), self.row_slice(index), 1),
            Axis::Column => (self.rows(), &self.as_slice()[index..], self.columns()),
        }
    }

    fn lane_pick(&self, axis: Axis, index: usize, pick: Pick) -> (f64, usize) {
        let (n, data, inc) = self.lane(axis, index);
        let i = pick.locate(n, data, inc);
        (data[i * inc], i)
    }

    fn lane_extremum(&self, axis: Axis, index: usize, pick: Pick) -> Result<(f64, usize)> {
        self.check_index(axis, index)?;
        Ok(self.lane_pick(axis, index, pick))
    }

    /// Smallest value in row `row` and its column index.
    ///
    /// # Errors
    /// [`IndexOutOfRange`](crate::MatrixError::IndexOutOfRange) if `row >= self.rows()`.
    pub fn min_in_row(&self, row: usize) -> Result<(f64, usize)> {
        self.lane_extremum(Axis::Row, row, Pick::Min)
    }

    /// Largest value in row `row` and its column index.
    pub fn max_in_row(&self, row: usize) -> Result<(f64, usize)> {
        self.lane_extremum(Axis::Row, row, Pick::Max)
    }

    /// Smallest value in column `column` and its row index.
    pub fn min_in_column(&self, column: usize) -> Result<(f64, usize)> {
        self.lane_extremum(Axis::Column, column, Pick::Min)
    }

    /// Largest value in column `column` and its row index.
    pub fn max_in_column(&self, column: usize) -> Result<(f64, usize)> {
        self.lane_extremum(Axis::Column, column, Pick::Max)
    }

    fn row_extrema(&self, pick: Pick) -> Matrix {
        let values = (0..self.rows())
            .map(|r| self.lane_pick(Axis::Row, r, pick).0)
            .collect();
        Matrix::from_parts(Shape::new(self.rows(), 1), values)
    }

    fn column_extrema(&self, pick: Pick) -> Matrix {
        let values = (0..self.columns())
            .map(|c| self.lane_pick(Axis::Column, c, pick).0)
            .collect();
        Matrix::from_parts(Shape::new(1, self.columns()), values)
    }

    /// Per-row minima as a `rows × 1` column vector.
    pub fn min_rows(&self) -> Matrix {
        self.row_extrema(Pick::Min)
    }

    /// Per-row maxima as a `rows × 1` column vector.
    pub fn max_rows(&self) -> Matrix {
        self.row_extrema(Pick::Max)
    }

    /// Per-column minima as a `1 × columns` row vector.
    pub fn min_columns(&self) -> Matrix {
        self.column_extrema(Pick::Min)
    }

    /// Per-column maxima as a `1 × columns` row vector.
    pub fn max_columns(&self) -> Matrix {
        self.column_extrema(Pick::Max)
    }

    fn global_extremum(&self, pick: Pick) -> Extremum {
        let i = pick.locate(self.len(), self.as_slice(), 1);
        Extremum {
            value: self.as_slice()[i],
            row: i / self.columns(),
            column: i % self.columns(),
        }
    }

    /// The smallest element, first in row-major order on ties.
    ///
    /// # Examples
    /// ```
    /// use matrix_core::Matrix;
    /// let m = Matrix::from_rows(&[[3.0, 1.0], [1.0, 5.0]]).unwrap();
    /// let lo = m.min();
    /// assert_eq!((lo.value, lo.row, lo.column), (1.0, 0, 1));
    /// ```
    pub fn min(&self) -> Extremum {
        self.global_extremum(Pick::Min)
    }

    /// The largest element, first in row-major order on ties.
    pub fn max(&self) -> Extremum {
        self.global_extremum(Pick::Max)
    }

    // ── Column statistics ──────────────────────────────────────

    fn column_sums(&self, columns: Range<usize>) -> Vec<f64> {
        columns
            .map(|c| {
                let (n, data, inc) = self.lane(Axis::Column, c);
                shape_sized(sum(n, data, inc))
            })
            .collect()
    }

    fn column_means(&self, columns: Range<usize>) -> Vec<f64> {
        columns
            .map(|c| {
                let (n, data, inc) = self.lane(Axis::Column, c);
                shape_sized(mean(n, data, inc))
            })
            .collect()
    }

    fn column_std(&self, columns: Range<usize>) -> Vec<f64> {
        let means = self.column_means(columns.clone());
        let mut squares = vec![0.0; means.len()];
        for row in self.iter_rows() {
            for ((s, m), x) in squares.iter_mut().zip(&means).zip(&row[columns.clone()]) {
                let d = x - m;
                *s += d * d;
            }
        }
        if self.rows() == 1 {
            warn!(
                shape = %self.shape(),
                "sample standard deviation of a single row is undefined"
            );
        }
        let dof = (self.rows() - 1) as f64;
        squares.into_iter().map(|s| (s / dof).sqrt()).collect()
    }

    fn row_of(values: Vec<f64>) -> Matrix {
        Matrix::from_parts(Shape::new(1, values.len()), values)
    }

    /// Column means as a `1 × columns` row vector.
    pub fn mean(&self) -> Matrix {
        Self::row_of(self.column_means(0..self.columns()))
    }

    /// Means of the columns in `range`, as a `1 × range.len()` row vector.
    ///
    /// # Errors
    /// - [`RangeOutOfBounds`](crate::MatrixError::RangeOutOfBounds) if the
    ///   range reaches past the last column.
    /// - [`EmptyInput`](crate::MatrixError::EmptyInput) for an empty range.
    pub fn mean_in<B: RangeBounds<usize>>(&self, range: B) -> Result<Matrix> {
        let columns = self.check_range(Axis::Column, &range, "mean_in")?;
        Ok(Self::row_of(self.column_means(columns)))
    }

    /// Column sample standard deviations (divisor `rows - 1`).
    ///
    /// A single-row matrix yields NaN in every column.
    pub fn std(&self) -> Matrix {
        Self::row_of(self.column_std(0..self.columns()))
    }

    /// Sample standard deviations of the columns in `range`.
    pub fn std_in<B: RangeBounds<usize>>(&self, range: B) -> Result<Matrix> {
        let columns = self.check_range(Axis::Column, &range, "std_in")?;
        Ok(Self::row_of(self.column_std(columns)))
    }
}
