// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! LU factorization with partial pivoting and inversion from the factors.
//!
//! The pair follows the LAPACK `getrf` / `getri` split: [`lu_factor`]
//! overwrites a square matrix with `L` (unit lower, below the diagonal)
//! and `U` (upper, including the diagonal) such that `P·A = L·U`, and
//! [`lu_invert`] builds `A⁻¹` from those factors.

use crate::error::ensure_exact;
use crate::level1::fill;
use crate::KernelError;

/// Pivoting metadata produced by [`lu_factor`].
#[derive(Debug, Clone, PartialEq)]
pub struct LuFactors {
    /// Order of the factored matrix.
    pub n: usize,
    /// `pivots[k]` is the row exchanged with row `k` at elimination step `k`.
    pub pivots: Vec<usize>,
    /// Number of actual row exchanges (`pivots[k] != k`).
    pub swaps: usize,
    /// Smallest pivot magnitude met during elimination.
    pub min_pivot: f64,
    /// Largest pivot magnitude met during elimination.
    pub max_pivot: f64,
}

impl LuFactors {
    /// Ratio of the smallest to the largest pivot magnitude.
    ///
    /// A cheap conditioning indicator: values near zero mean the matrix is
    /// close to singular even though elimination succeeded.
    pub fn pivot_ratio(&self) -> f64 {
        if self.max_pivot == 0.0 {
            0.0
        } else {
            self.min_pivot / self.max_pivot
        }
    }

    /// Determinant of the original matrix, given the factored buffer.
    pub fn determinant(&self, lu: &[f64]) -> f64 {
        let n = self.n;
        let diag: f64 = (0..n).map(|i| lu[i * n + i]).product();
        if self.swaps % 2 == 0 {
            diag
        } else {
            -diag
        }
    }
}

/// Factors the `n × n` row-major matrix `a` in place as `P·A = L·U`.
///
/// At step `k` the row with the largest `|a[i, k]|` (`i ≥ k`, first
/// occurrence) is swapped into position `k`.
///
/// `tolerance` is relative. The pivot at step `k` must be strictly greater
/// than `tolerance × min(r, c)`, where `r` is the largest magnitude in the
/// pivot row and `c` the largest magnitude in column `k`, both taken from the
/// input before elimination. Each pivot is judged against its own row and
/// column, so rows or columns of very different scale do not mask each
/// other. A zero pivot is always rejected.
///
/// # Errors
/// - [`KernelError::LengthMismatch`] if `a.len() != n * n`.
/// - [`KernelError::SingularPivot`] with the elimination step of the first
///   (near-)zero pivot. `a` is left partially eliminated in that case; callers
///   that need the original must factor a copy.
pub fn lu_factor(n: usize, a: &mut [f64], tolerance: f64) -> Result<LuFactors, KernelError> {
    ensure_exact("lu_factor", n * n, a.len())?;

    let mut row_scale: Vec<f64> = a.chunks_exact(n.max(1)).map(max_abs).collect();
    let column_scale: Vec<f64> = (0..n)
        .map(|j| (0..n).fold(0.0_f64, |acc, i| acc.max(a[i * n + j].abs())))
        .collect();

    let mut pivots = Vec::with_capacity(n);
    let mut swaps = 0;
    let mut min_pivot = f64::INFINITY;
    let mut max_pivot: f64 = 0.0;

    for k in 0..n {
        let mut p = k;
        let mut best = a[k * n + k].abs();
        for i in k + 1..n {
            let v = a[i * n + k].abs();
            if v > best {
                best = v;
                p = i;
            }
        }

        // Negated comparison so that a NaN pivot is also rejected.
        let threshold = tolerance * row_scale[p].min(column_scale[k]);
        if !(best > threshold) {
            return Err(KernelError::SingularPivot { index: k });
        }

        pivots.push(p);
        if p != k {
            swaps += 1;
            for j in 0..n {
                a.swap(k * n + j, p * n + j);
            }
            row_scale.swap(k, p);
        }
        min_pivot = min_pivot.min(best);
        max_pivot = max_pivot.max(best);

        let inv_pivot = 1.0 / a[k * n + k];
        for i in k + 1..n {
            a[i * n + k] *= inv_pivot;
            let l_ik = a[i * n + k];
            if l_ik == 0.0 {
                continue;
            }
            for j in k + 1..n {
                a[i * n + j] -= l_ik * a[k * n + j];
            }
        }
    }

    if n == 0 {
        min_pivot = 0.0;
    }

    Ok(LuFactors {
        n,
        pivots,
        swaps,
        min_pivot,
        max_pivot,
    })
}

fn max_abs(row: &[f64]) -> f64 {
    row.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()))
}

/// Writes `A⁻¹` into `out` from the factors produced by [`lu_factor`].
///
/// Column `j` of the inverse solves `L·U·x = P·eⱼ`: the permuted unit
/// vector goes through a forward substitution with the unit-lower `L`, then
/// a back substitution with `U`.
pub fn lu_invert(
    lu: &[f64],
    factors: &LuFactors,
    out: &mut [f64],
) -> Result<(), KernelError> {
    let n = factors.n;
    ensure_exact("lu_invert (factors)", n * n, lu.len())?;
    ensure_exact("lu_invert (output)", n * n, out.len())?;
    ensure_exact("lu_invert (pivots)", n, factors.pivots.len())?;

    let mut x = vec![0.0; n];
    for j in 0..n {
        fill(0.0, &mut x);
        x[j] = 1.0;
        for (k, &p) in factors.pivots.iter().enumerate() {
            x.swap(k, p);
        }

        // Forward substitution, L has an implicit unit diagonal.
        for i in 1..n {
            let row = &lu[i * n..i * n + i];
            let dot: f64 = row.iter().zip(&x[..i]).map(|(l, xv)| l * xv).sum();
            x[i] -= dot;
        }

        // Back substitution with U.
        for i in (0..n).rev() {
            let row = &lu[i * n + i + 1..(i + 1) * n];
            let dot: f64 = row.iter().zip(&x[i + 1..]).map(|(u, xv)| u * xv).sum();
            let u_ii = lu[i * n + i];
            if u_ii == 0.0 {
                return Err(KernelError::SingularPivot { index: i });
            }
            x[i] = (x[i] - dot) / u_ii;
        }

        for (i, &v) in x.iter().enumerate() {
            out[i * n + j] = v;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: &[f64], b: &[f64], tol: f64) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < tol)
    }

    fn invert(n: usize, a: &[f64]) -> Result<Vec<f64>, KernelError> {
        let mut lu = a.to_vec();
        let factors = lu_factor(n, &mut lu, 0.0)?;
        let mut out = vec![0.0; n * n];
        lu_invert(&lu, &factors, &mut out)?;
        Ok(out)
    }

    #[test]
    fn test_factor_reconstructs_pa() {
        let a = [2.0, 1.0, 1.0, 4.0, -6.0, 0.0, -2.0, 7.0, 2.0];
        let mut lu = a.to_vec();
        let f = lu_factor(3, &mut lu, 0.0).unwrap();

        // Rebuild L·U and compare with the row-permuted A.
        let mut pa = a.to_vec();
        for (k, &p) in f.pivots.iter().enumerate() {
            for j in 0..3 {
                pa.swap(k * 3 + j, p * 3 + j);
            }
        }
        let mut prod = [0.0; 9];
        for i in 0..3 {
            for j in 0..3 {
                let mut s = 0.0;
                for t in 0..3 {
                    let l = if t == i {
                        1.0
                    } else if t < i {
                        lu[i * 3 + t]
                    } else {
                        0.0
                    };
                    let u = if t <= j { lu[t * 3 + j] } else { 0.0 };
                    s += l * u;
                }
                prod[i * 3 + j] = s;
            }
        }
        assert!(approx_eq(&prod, &pa, 1e-12));
    }

    #[test]
    fn test_partial_pivoting_picks_largest() {
        let mut a = [1.0, 2.0, 3.0, 4.0];
        let f = lu_factor(2, &mut a, 0.0).unwrap();
        assert_eq!(f.pivots, vec![1, 1]);
        assert_eq!(f.swaps, 1);
        assert_eq!(f.max_pivot, 3.0);
    }

    #[test]
    fn test_invert_known_3x3() {
        let a = [1.0, 2.0, 3.0, 0.0, 4.0, 0.0, 3.0, 2.0, 1.0];
        let inv = invert(3, &a).unwrap();
        assert!((inv[0] + 0.125).abs() < 1e-12);
        assert!((inv[2] - 0.375).abs() < 1e-12);
        assert!((inv[4] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_invert_identity_is_exact() {
        let eye = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
        assert_eq!(invert(3, &eye).unwrap(), eye.to_vec());
    }

    #[test]
    fn test_singular_detected() {
        let mut a = [1.0, 2.0, 2.0, 4.0];
        assert_eq!(
            lu_factor(2, &mut a, 0.0),
            Err(KernelError::SingularPivot { index: 1 })
        );
    }

    #[test]
    fn test_tolerance_rejects_cancelled_pivot() {
        // Second row is the first plus 1e-12 in one entry.
        let mut a = [1.0, 1.0, 1.0, 1.0 + 1e-12];
        assert_eq!(
            lu_factor(2, &mut a, 1e-10),
            Err(KernelError::SingularPivot { index: 1 })
        );
        let mut b = [1.0, 1.0, 1.0, 1.0 + 1e-12];
        assert!(lu_factor(2, &mut b, 0.0).is_ok());
    }

    #[test]
    fn test_tolerance_is_relative_to_pivot_row_and_column() {
        let mut diag = [1e14, 0.0, 0.0, 1.0];
        assert!(lu_factor(2, &mut diag, 1e-13).is_ok());

        let mut tiny = [1.0, 0.0, 0.0, 1e-20];
        assert!(lu_factor(2, &mut tiny, 1e-13).is_ok());

        // Large first row, small second row.
        let mut rows = [1e14, 1e14, 1.0, 2.0];
        assert!(lu_factor(2, &mut rows, 1e-13).is_ok());

        // Large first column, small second column.
        let mut columns = [1e14, 1.0, 1e14, 2.0];
        assert!(lu_factor(2, &mut columns, 1e-13).is_ok());
    }

    #[test]
    fn test_zero_row_is_singular_at_any_tolerance() {
        let mut a = [1.0, 2.0, 0.0, 0.0];
        assert_eq!(
            lu_factor(2, &mut a, 0.0),
            Err(KernelError::SingularPivot { index: 1 })
        );
    }

    #[test]
    fn test_nan_pivot_is_singular() {
        let mut a = [f64::NAN];
        assert!(lu_factor(1, &mut a, 0.0).is_err());
    }

    #[test]
    fn test_determinant_sign() {
        let mut a = [0.0, 1.0, 1.0, 0.0];
        let f = lu_factor(2, &mut a, 0.0).unwrap();
        assert_eq!(f.determinant(&a), -1.0);

        let mut b = [2.0, 0.0, 0.0, 3.0];
        let g = lu_factor(2, &mut b, 0.0).unwrap();
        assert_eq!(g.determinant(&b), 6.0);
    }

    #[test]
    fn test_pivot_ratio() {
        let mut a = [4.0, 0.0, 0.0, 0.5];
        let f = lu_factor(2, &mut a, 0.0).unwrap();
        assert_eq!(f.pivot_ratio(), 0.125);
    }
}
