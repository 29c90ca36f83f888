// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Level-3 kernels: dense matrix product and blocked transpose.

use crate::error::ensure_exact;
use crate::level1::fill;
use crate::KernelError;

/// Dense matrix product `c ← a · b`.
///
/// `a` is `m × k`, `b` is `k × n` and `c` is `m × n`, all row-major. The
/// previous contents of `c` are overwritten.
///
/// # Errors
/// Returns [`KernelError::LengthMismatch`] if any buffer length disagrees
/// with the given dimensions.
pub fn gemm(
    m: usize,
    k: usize,
    n: usize,
    a: &[f64],
    b: &[f64],
    c: &mut [f64],
) -> Result<(), KernelError> {
    ensure_exact("gemm (lhs)", m * k, a.len())?;
    ensure_exact("gemm (rhs)", k * n, b.len())?;
    ensure_exact("gemm (output)", m * n, c.len())?;

    fill(0.0, c);

    // ikj loop order: the inner loop is an axpy of a row of B into a row
    // of C, both sequential in memory.
    for i in 0..m {
        let c_row = &mut c[i * n..(i + 1) * n];
        for p in 0..k {
            let a_ip = a[i * k + p];
            if a_ip == 0.0 {
                continue;
            }
            let b_row = &b[p * n..(p + 1) * n];
            for (cj, &bj) in c_row.iter_mut().zip(b_row) {
                *cj += a_ip * bj;
            }
        }
    }
    Ok(())
}

/// Transposes the `rows × cols` matrix `src` into the `cols × rows` matrix `dst`.
///
/// The copy walks `block × block` tiles so that both the reads and the
/// writes of a tile stay within a few cache lines. `block == 0` is treated
/// as 1.
pub fn transpose(
    rows: usize,
    cols: usize,
    src: &[f64],
    dst: &mut [f64],
    block: usize,
) -> Result<(), KernelError> {
    ensure_exact("transpose (src)", rows * cols, src.len())?;
    ensure_exact("transpose (dst)", rows * cols, dst.len())?;
    let block = block.max(1);

    for r0 in (0..rows).step_by(block) {
        let r1 = (r0 + block).min(rows);
        for c0 in (0..cols).step_by(block) {
            let c1 = (c0 + block).min(cols);
            for r in r0..r1 {
                for c in c0..c1 {
                    dst[c * rows + r] = src[r * cols + c];
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemm_2x3_times_3x2() {
        // A = [[1, 2, 3], [4, 5, 6]]
        // B = [[7, 8], [9, 10], [11, 12]]
        // C = [[58, 64], [139, 154]]
        let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let b = [7.0, 8.0, 9.0, 10.0, 11.0, 12.0];
        let mut c = [0.0; 4];
        gemm(2, 3, 2, &a, &b, &mut c).unwrap();
        assert_eq!(c, [58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn test_gemm_overwrites_output() {
        let mut c = [99.0; 1];
        gemm(1, 1, 1, &[3.0], &[4.0], &mut c).unwrap();
        assert_eq!(c, [12.0]);
    }

    #[test]
    fn test_gemm_identity() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let eye = [1.0, 0.0, 0.0, 1.0];
        let mut c = [0.0; 4];
        gemm(2, 2, 2, &a, &eye, &mut c).unwrap();
        assert_eq!(c, a);
    }

    #[test]
    fn test_gemm_length_mismatch() {
        let mut c = [0.0; 4];
        assert!(gemm(2, 3, 2, &[0.0; 6], &[0.0; 4], &mut c).is_err());
    }

    #[test]
    fn test_transpose_rectangular() {
        let src = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut dst = [0.0; 6];
        transpose(2, 3, &src, &mut dst, 32).unwrap();
        assert_eq!(dst, [1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn test_transpose_block_sizes_agree() {
        let rows = 7;
        let cols = 5;
        let src: Vec<f64> = (0..rows * cols).map(|v| v as f64).collect();
        let mut reference = vec![0.0; rows * cols];
        transpose(rows, cols, &src, &mut reference, 1).unwrap();
        for block in [0, 2, 3, 4, 64] {
            let mut dst = vec![0.0; rows * cols];
            transpose(rows, cols, &src, &mut dst, block).unwrap();
            assert_eq!(dst, reference, "block size {block}");
        }
    }
}
