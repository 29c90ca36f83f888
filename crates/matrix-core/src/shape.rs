// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Matrix shape descriptors and shape-compatibility rules.

use std::fmt;

/// The `rows × columns` extent of a [`crate::Matrix`].
///
/// Shapes are plain `Copy` values. Element `(r, c)` of a matrix with this
/// shape lives at linear offset `r * columns + c` (row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: usize,
    columns: usize,
}

/// How a right-hand operand lines up with the left-hand one in an
/// element-wise operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Broadcast {
    /// Identical shapes, applied element by element.
    Same,
    /// A `1 × columns` operand applied to every row.
    Row,
    /// A `rows × 1` operand applied to every column.
    Column,
}

/// One of the two matrix axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

/// Whether a flat sequence becomes a `1 × N` or an `N × 1` matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Row,
    Column,
}

impl Shape {
    /// Creates a shape.
    ///
    /// # Examples
    /// ```
    /// use matrix_core::Shape;
    /// let s = Shape::new(2, 3);
    /// assert_eq!(s.num_elements(), 6);
    /// assert_eq!(s.transposed(), Shape::new(3, 2));
    /// ```
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Shape of an `n`-element vector with the given orientation.
    pub fn vector(len: usize, orientation: Orientation) -> Self {
        match orientation {
            Orientation::Row => Self::new(1, len),
            Orientation::Column => Self::new(len, 1),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Extent along `axis`.
    pub fn extent(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.rows,
            Axis::Column => self.columns,
        }
    }

    /// Total number of elements.
    pub fn num_elements(&self) -> usize {
        self.rows * self.columns
    }

    /// `true` when both extents are positive.
    pub fn is_valid(&self) -> bool {
        self.rows > 0 && self.columns > 0
    }

    pub fn is_row_vector(&self) -> bool {
        self.rows == 1
    }

    pub fn is_column_vector(&self) -> bool {
        self.columns == 1
    }

    /// `true` for row vectors, column vectors and 1×1 matrices.
    pub fn is_vector(&self) -> bool {
        self.is_row_vector() || self.is_column_vector()
    }

    pub fn is_scalar(&self) -> bool {
        self.rows == 1 && self.columns == 1
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// The shape with rows and columns swapped.
    pub fn transposed(&self) -> Self {
        Self::new(self.columns, self.rows)
    }

    /// Linear offset of `(row, column)` in row-major order (unchecked).
    #[inline]
    pub fn offset(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    /// `true` if `self · other` is defined: `self` is `m × k`, `other` is `k × n`.
    pub fn is_matmul_compatible(&self, other: &Shape) -> bool {
        self.columns == other.rows
    }

    /// Resolves how `rhs` broadcasts against `self`.
    ///
    /// Rules are tried in order: same shape, row vector with matching
    /// column count, column vector with matching row count. A 1×1 `rhs`
    /// against a 1×1 `self` is [`Broadcast::Same`]; against a wider `1 × n`
    /// `self` it is a column broadcast.
    pub fn broadcast(&self, rhs: &Shape) -> Option<Broadcast> {
        if self == rhs {
            Some(Broadcast::Same)
        } else if rhs.rows == 1 && rhs.columns == self.columns {
            Some(Broadcast::Row)
        } else if rhs.columns == 1 && rhs.rows == self.rows {
            Some(Broadcast::Column)
        } else {
            None
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Row => "row",
            Axis::Column => "column",
        })
    }
}

/// Convenience: `Shape::from((2, 3))`.
impl From<(usize, usize)> for Shape {
    fn from((rows, columns): (usize, usize)) -> Self {
        Self::new(rows, columns)
    }
}
