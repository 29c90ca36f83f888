// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Level-1 vector kernels: copies, axpy, fills and element-wise products.

use crate::error::{ensure_exact, ensure_len, strided_len};
use crate::KernelError;

/// Copies `src` into `dst`. Both slices must have the same length.
pub fn copy(src: &[f64], dst: &mut [f64]) -> Result<(), KernelError> {
    ensure_exact("copy", src.len(), dst.len())?;
    dst.copy_from_slice(src);
    Ok(())
}

/// Copies `n` elements from `src` (stride `src_inc`) into `dst` (stride `dst_inc`).
///
/// # Examples
/// ```
/// // Gather the second column of a 3×2 row-major matrix.
/// let m = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let mut col = [0.0; 3];
/// matrix_kernels::copy_strided(3, &m[1..], 2, &mut col, 1).unwrap();
/// assert_eq!(col, [2.0, 4.0, 6.0]);
/// ```
pub fn copy_strided(
    n: usize,
    src: &[f64],
    src_inc: usize,
    dst: &mut [f64],
    dst_inc: usize,
) -> Result<(), KernelError> {
    ensure_len("copy_strided (src)", strided_len(n, src_inc), src.len())?;
    ensure_len("copy_strided (dst)", strided_len(n, dst_inc), dst.len())?;
    for i in 0..n {
        dst[i * dst_inc] = src[i * src_inc];
    }
    Ok(())
}

/// `y ← alpha * x + y`.
///
/// # Examples
/// ```
/// let x = [1.0, 2.0, 3.0];
/// let mut y = [10.0, 20.0, 30.0];
/// matrix_kernels::axpy(2.0, &x, &mut y).unwrap();
/// assert_eq!(y, [12.0, 24.0, 36.0]);
/// ```
pub fn axpy(alpha: f64, x: &[f64], y: &mut [f64]) -> Result<(), KernelError> {
    ensure_exact("axpy", x.len(), y.len())?;
    for (yi, &xi) in y.iter_mut().zip(x) {
        *yi += alpha * xi;
    }
    Ok(())
}

/// Sets every element of `x` to `value`.
pub fn fill(value: f64, x: &mut [f64]) {
    x.iter_mut().for_each(|v| *v = value);
}

/// `x ← alpha * x`.
pub fn scale(alpha: f64, x: &mut [f64]) {
    x.iter_mut().for_each(|v| *v *= alpha);
}

/// `x ← x + alpha`.
pub fn add_scalar(alpha: f64, x: &mut [f64]) {
    x.iter_mut().for_each(|v| *v += alpha);
}

/// `x ← x / alpha` (IEEE semantics, no zero check).
pub fn div_scalar(alpha: f64, x: &mut [f64]) {
    x.iter_mut().for_each(|v| *v /= alpha);
}

/// Element-wise product `out[i] = x[i] * y[i]`.
pub fn mul(x: &[f64], y: &[f64], out: &mut [f64]) -> Result<(), KernelError> {
    ensure_exact("mul", x.len(), y.len())?;
    ensure_exact("mul (output)", x.len(), out.len())?;
    for ((o, &a), &b) in out.iter_mut().zip(x).zip(y) {
        *o = a * b;
    }
    Ok(())
}

/// Element-wise quotient `out[i] = x[i] / y[i]` (IEEE semantics, no zero check).
pub fn div(x: &[f64], y: &[f64], out: &mut [f64]) -> Result<(), KernelError> {
    ensure_exact("div", x.len(), y.len())?;
    ensure_exact("div (output)", x.len(), out.len())?;
    for ((o, &a), &b) in out.iter_mut().zip(x).zip(y) {
        *o = a / b;
    }
    Ok(())
}
