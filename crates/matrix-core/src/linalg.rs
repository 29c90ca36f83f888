// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Linear-map operations: transpose, matrix product, inverse and division.
//!
//! # Inverse
//!
//! ```text
//!   A ──copy──► LU (partial pivoting) ──► solve L·U·x = P·eⱼ per column ──► A⁻¹
//!                  │
//!                  └── |pivot| <= tol·min(row, column scale) ──► MatrixError::Singular
//! ```
//!
//! The row and column scales are the largest magnitudes in the pivot's
//! original row and column, so a matrix whose rows or columns differ by many
//! orders of magnitude is judged lane by lane rather than against its single
//! largest entry.
//!
//! The factorization always runs on a private copy, so a singular input is
//! reported without touching the caller's matrix.

use crate::error::shape_sized;
use crate::{Matrix, MatrixError, NumericConfig, Result, Shape};
use matrix_kernels::{gemm, lu_factor, lu_invert, transpose, KernelError, LuFactors};
use tracing::{debug, warn};

impl Matrix {
    /// The transpose, using the default blocking.
    pub fn transpose(&self) -> Matrix {
        self.transpose_with(&NumericConfig::default())
    }

    /// The transpose, blocked by `config.transpose_block`.
    ///
    /// Vectors keep the same row-major element order under transposition,
    /// so their result shares `self`'s buffer.
    pub fn transpose_with(&self, config: &NumericConfig) -> Matrix {
        let shape = self.shape().transposed();
        if self.is_vector() {
            return self.reshaped_alias(shape);
        }
        debug!(shape = %self.shape(), block = config.transpose_block, "transpose");
        let mut out = vec![0.0; self.len()];
        shape_sized(transpose(
            self.rows(),
            self.columns(),
            self.as_slice(),
            &mut out,
            config.transpose_block,
        ));
        Matrix::from_parts(shape, out)
    }

    /// Linear-map product `self · rhs`.
    ///
    /// # Errors
    /// [`MatrixError::ShapeMismatch`] when `self.columns() != rhs.rows()`.
    ///
    /// # Examples
    /// ```
    /// use matrix_core::Matrix;
    /// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// let id = Matrix::identity(2);
    /// assert_eq!(a.matmul(&id).unwrap(), a);
    /// ```
    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix> {
        if !self.shape().is_matmul_compatible(&rhs.shape()) {
            return Err(MatrixError::ShapeMismatch {
                op: "matmul",
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        let (m, k, n) = (self.rows(), self.columns(), rhs.columns());
        debug!(m, k, n, "matmul");
        let mut out = vec![0.0; m * n];
        gemm(m, k, n, self.as_slice(), rhs.as_slice(), &mut out)?;
        Ok(Matrix::from_parts(Shape::new(m, n), out))
    }

    /// Linear-map division `self · rhs⁻¹`.
    ///
    /// # Errors
    /// - [`MatrixError::NotSquare`] if `rhs` is not square.
    /// - [`MatrixError::ShapeMismatch`] if `self.columns() != rhs.rows()`.
    /// - [`MatrixError::Singular`] if `rhs` has no inverse.
    pub fn matdiv(&self, rhs: &Matrix) -> Result<Matrix> {
        if !rhs.is_square() {
            return Err(MatrixError::NotSquare {
                op: "matdiv",
                shape: rhs.shape(),
            });
        }
        if !self.shape().is_matmul_compatible(&rhs.shape()) {
            return Err(MatrixError::ShapeMismatch {
                op: "matdiv",
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        self.matmul(&rhs.inverse()?)
    }

    /// The inverse, using the default tolerances.
    ///
    /// # Errors
    /// - [`MatrixError::NotSquare`] for non-square input.
    /// - [`MatrixError::Singular`] if elimination meets a pivot that is zero
    ///   relative to its own row and column.
    ///
    /// # Examples
    /// ```
    /// use matrix_core::{Matrix, MatrixError};
    /// let a = Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]]).unwrap();
    /// let inv = a.inverse().unwrap();
    /// assert!(a.matmul(&inv).unwrap().approx_eq(&Matrix::identity(2), 1e-12));
    ///
    /// let singular = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
    /// assert!(matches!(singular.inverse(), Err(MatrixError::Singular { .. })));
    /// ```
    pub fn inverse(&self) -> Result<Matrix> {
        self.inverse_with(&NumericConfig::default())
    }

    /// The inverse, with tolerances taken from `config`.
    pub fn inverse_with(&self, config: &NumericConfig) -> Result<Matrix> {
        let (lu, factors) = self.factor("inverse", config)?;
        let ratio = factors.pivot_ratio();
        if ratio < config.ill_conditioned_ratio {
            warn!(
                shape = %self.shape(),
                pivot_ratio = ratio,
                threshold = config.ill_conditioned_ratio,
                "matrix is ill-conditioned; inverse may be inaccurate"
            );
        }
        let mut out = vec![0.0; lu.len()];
        lu_invert(&lu, &factors, &mut out).map_err(singular)?;
        Ok(Matrix::from_parts(self.shape(), out))
    }

    /// The determinant, from the LU pivots and the permutation sign.
    /// Singular input gives `0.0`.
    ///
    /// # Errors
    /// [`MatrixError::NotSquare`] for non-square input.
    pub fn determinant(&self) -> Result<f64> {
        match self.factor("determinant", &NumericConfig::default()) {
            Ok((lu, factors)) => Ok(factors.determinant(&lu)),
            Err(MatrixError::Singular { .. }) => Ok(0.0),
            Err(e) => Err(e),
        }
    }

    /// LU-factors a copy of `self`.
    fn factor(
        &self,
        op: &'static str,
        config: &NumericConfig,
    ) -> Result<(Vec<f64>, LuFactors)> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                op,
                shape: self.shape(),
            });
        }
        let tolerance = config.singular_tolerance;
        debug!(op, n = self.rows(), tolerance, "lu factorization");

        let mut lu = self.to_vec();
        let factors = lu_factor(self.rows(), &mut lu, tolerance).map_err(singular)?;
        Ok((lu, factors))
    }
}

fn singular(e: KernelError) -> MatrixError {
    match e {
        KernelError::SingularPivot { index } => MatrixError::Singular { pivot: index },
        other => MatrixError::Kernel(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known() -> Matrix {
        Matrix::from_rows(&[[1.0, 2.0, 3.0], [0.0, 4.0, 0.0], [3.0, 2.0, 1.0]]).unwrap()
    }

    #[test]
    fn test_transpose_rectangular() {
        let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        let t = a.transpose();
        assert_eq!(t.shape(), Shape::new(3, 2));
        assert_eq!(t.to_nested(), vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn test_transpose_small_block() {
        let m = Matrix::from_vec(5, 7, (0..35).map(f64::from).collect()).unwrap();
        let cfg = NumericConfig {
            transpose_block: 2,
            ..Default::default()
        };
        assert_eq!(m.transpose_with(&cfg), m.transpose());
        assert_eq!(m.transpose_with(&cfg).get(6, 4).unwrap(), m.get(4, 6).unwrap());
    }

    #[test]
    fn test_transpose_vector_shares_buffer() {
        let v = Matrix::row_vector(vec![1.0, 2.0, 3.0]).unwrap();
        let t = v.transpose();
        assert!(t.is_column_vector());
        assert!(t.shares_storage(&v));
        assert_eq!(t.as_slice(), v.as_slice());
    }

    #[test]
    fn test_matmul() {
        let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        let b = Matrix::from_rows(&[[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]).unwrap();
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.to_nested(), vec![vec![58.0, 64.0], vec![139.0, 154.0]]);
    }

    #[test]
    fn test_matmul_shape_mismatch() {
        let a = Matrix::ones(2, 3);
        assert_eq!(
            a.matmul(&a),
            Err(MatrixError::ShapeMismatch {
                op: "matmul",
                lhs: Shape::new(2, 3),
                rhs: Shape::new(2, 3),
            })
        );
    }

    #[test]
    fn test_outer_product() {
        let col = Matrix::column_vector(vec![1.0, 2.0]).unwrap();
        let row = Matrix::row_vector(vec![3.0, 4.0, 5.0]).unwrap();
        let outer = col.matmul(&row).unwrap();
        assert_eq!(outer.shape(), Shape::new(2, 3));
        assert_eq!(outer.row(1).unwrap().as_slice(), &[6.0, 8.0, 10.0]);
        assert_eq!(row.matmul(&row.transpose()).unwrap().scalar(), 50.0);
    }

    #[test]
    fn test_inverse_known() {
        let inv = known().inverse().unwrap();
        let expected = Matrix::from_rows(&[
            [-0.125, -0.125, 0.375],
            [0.0, 0.25, 0.0],
            [0.375, -0.125, -0.125],
        ])
        .unwrap();
        assert!(inv.approx_eq(&expected, 1e-12));
        assert!(known().matmul(&inv).unwrap().approx_eq(&Matrix::identity(3), 1e-12));
    }

    #[test]
    fn test_inverse_singular_leaves_input() {
        let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 0.0, 1.0]]).unwrap();
        let before = a.clone();
        assert!(matches!(a.inverse(), Err(MatrixError::Singular { .. })));
        assert_eq!(a, before);
        assert!(matches!(
            Matrix::zeros(2, 2).inverse(),
            Err(MatrixError::Singular { pivot: 0 })
        ));
    }

    #[test]
    fn test_inverse_not_square() {
        assert!(matches!(
            Matrix::ones(2, 3).inverse(),
            Err(MatrixError::NotSquare { op: "inverse", .. })
        ));
    }

    #[test]
    fn test_inverse_scale_invariant() {
        let tiny = known() * 1e-200;
        let inv = tiny.inverse().unwrap();
        assert!(tiny.matmul(&inv).unwrap().approx_eq(&Matrix::identity(3), 1e-9));
    }

    #[test]
    fn test_inverse_1x1() {
        let a = Matrix::filled(1, 1, 4.0);
        assert_eq!(a.inverse().unwrap().scalar(), 0.25);
    }

    #[test]
    fn test_ill_conditioned_still_inverts() {
        let a = Matrix::from_rows(&[[1.0, 0.0], [0.0, 1e-12]]).unwrap();
        let inv = a.inverse().unwrap();
        assert!((inv.get(1, 1).unwrap() - 1e12).abs() < 1.0);
    }

    #[test]
    fn test_inverse_with_disparate_scales() {
        let diag = Matrix::from_rows(&[[1e14, 0.0], [0.0, 1.0]]).unwrap();
        let inv = diag.inverse().unwrap();
        assert_eq!(inv.as_slice(), &[1e-14, 0.0, 0.0, 1.0]);

        // Unscaled features: one large row, one small row.
        let rows = Matrix::from_rows(&[[1e14, 1e14], [1.0, 2.0]]).unwrap();
        let expected = Matrix::from_rows(&[[2e-14, -1.0], [-1e-14, 1.0]]).unwrap();
        assert!(rows.inverse().unwrap().approx_eq(&expected, 1e-12));

        let columns = rows.transpose();
        assert!(columns.inverse().is_ok());
        assert!(columns.determinant().unwrap() != 0.0);
    }

    #[test]
    fn test_inverse_rejects_cancelled_pivot() {
        // Row 1 differs from row 0 only past the relative tolerance.
        let a = Matrix::from_rows(&[[1.0, 1.0], [1.0, 1.0 + 1e-15]]).unwrap();
        assert_eq!(a.inverse(), Err(MatrixError::Singular { pivot: 1 }));
        assert_eq!(a.determinant().unwrap(), 0.0);
    }

    #[test]
    fn test_matdiv() {
        let a = known();
        let b = Matrix::from_rows(&[[2.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 8.0]]).unwrap();
        let q = a.matdiv(&b).unwrap();
        assert!(q.matmul(&b).unwrap().approx_eq(&a, 1e-12));
        assert!(a.matdiv(&a).unwrap().approx_eq(&Matrix::identity(3), 1e-12));
    }

    #[test]
    fn test_matdiv_errors() {
        let a = Matrix::ones(2, 3);
        assert!(matches!(
            a.matdiv(&Matrix::ones(3, 2)),
            Err(MatrixError::NotSquare { op: "matdiv", .. })
        ));
        assert!(matches!(
            a.matdiv(&Matrix::identity(2)),
            Err(MatrixError::ShapeMismatch { op: "matdiv", .. })
        ));
        assert!(matches!(
            a.matdiv(&Matrix::ones(3, 3)),
            Err(MatrixError::Singular { .. })
        ));
    }

    #[test]
    fn test_determinant() {
        assert!((known().determinant().unwrap() - -32.0).abs() < 1e-12);
        assert_eq!(Matrix::identity(4).determinant().unwrap(), 1.0);
        assert_eq!(Matrix::ones(3, 3).determinant().unwrap(), 0.0);
        let swapped = Matrix::from_rows(&[[0.0, 1.0], [1.0, 0.0]]).unwrap();
        assert_eq!(swapped.determinant().unwrap(), -1.0);
        assert!(Matrix::ones(2, 3).determinant().is_err());
    }
}
