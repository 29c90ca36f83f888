// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for matrix operations.

use crate::{Axis, Shape};
use matrix_kernels::KernelError;

/// Convenience alias used throughout the crate.
pub type Result<T, E = MatrixError> = std::result::Result<T, E>;

/// Errors that can occur while constructing, indexing or operating on matrices.
///
/// Every variant is recoverable: a failing call leaves all existing
/// matrices untouched and produces no partial result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    /// Two operands have incompatible shapes for the requested operation.
    #[error("incompatible shapes for {op}: {lhs} vs {rhs}")]
    ShapeMismatch {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },

    /// The operation requires a square matrix.
    #[error("{op} requires a square matrix, got {shape}")]
    NotSquare { op: &'static str, shape: Shape },

    /// LU factorization met a (near-)zero pivot.
    #[error("matrix is singular: pivot {pivot} is zero within tolerance")]
    Singular { pivot: usize },

    /// A row or column index is outside the matrix.
    #[error("{axis} index {index} out of range (matrix has {bound} {axis}s)")]
    IndexOutOfRange {
        axis: Axis,
        index: usize,
        bound: usize,
    },

    /// A row or column range reaches outside the matrix.
    #[error("{axis} range {start}..{end} out of bounds (matrix has {bound} {axis}s)")]
    RangeOutOfBounds {
        axis: Axis,
        start: usize,
        end: usize,
        bound: usize,
    },

    /// A single-index accessor was used on a matrix that is not a vector.
    #[error("vector accessor used on a {shape} matrix")]
    NotAVector { shape: Shape },

    /// The operation is only defined for row vectors.
    #[error("{op} requires a row vector, got {shape}")]
    NotARowVector { op: &'static str, shape: Shape },

    /// A setter was given a replacement of the wrong shape.
    #[error("replacement of shape {actual} does not fit a {expected} target")]
    IncompatibleReplacement { expected: Shape, actual: Shape },

    /// A source row is shorter (or, for exact construction, different) than required.
    #[error("row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A flat buffer does not hold exactly `rows * columns` elements.
    #[error("buffer of length {len} does not match shape {shape}")]
    BufferSize { shape: Shape, len: usize },

    /// The input would produce a matrix with a zero-sized dimension.
    #[error("{op} needs at least one row and one column")]
    EmptyInput { op: &'static str },

    /// The numeric backend rejected a call.
    #[error("kernel error: {0}")]
    Kernel(#[from] KernelError),

    /// Configuration could not be loaded or is invalid.
    #[error("configuration error: {0}")]
    Config(String),
}

impl MatrixError {
    /// `true` for the index-related failures: out-of-range indices and
    /// ranges, and vector-only accessors used on the wrong shape.
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            MatrixError::IndexOutOfRange { .. }
                | MatrixError::RangeOutOfBounds { .. }
                | MatrixError::NotAVector { .. }
                | MatrixError::NotARowVector { .. }
        )
    }
}

/// Unwraps the result of a kernel whose buffers were sized from a valid shape.
///
/// Kernels only fail on buffer-length mismatches, which such callers rule out.
pub(crate) fn shape_sized<T>(result: std::result::Result<T, KernelError>) -> T {
    result.expect("kernel buffers are sized from the matrix shape")
}
