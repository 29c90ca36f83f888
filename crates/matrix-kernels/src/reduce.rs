// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Strided reductions: sum, mean and first-occurrence extremum search.

use crate::error::{ensure_len, strided_len};
use crate::KernelError;

/// Sum of `n` elements of `x` spaced `inc` apart.
pub fn sum(n: usize, x: &[f64], inc: usize) -> Result<f64, KernelError> {
    ensure_len("sum", strided_len(n, inc), x.len())?;
    Ok((0..n).map(|i| x[i * inc]).sum())
}

/// Arithmetic mean of `n` strided elements. `NaN` when `n == 0`.
pub fn mean(n: usize, x: &[f64], inc: usize) -> Result<f64, KernelError> {
    Ok(sum(n, x, inc)? / n as f64)
}

/// Index (in element units, not buffer offsets) of the smallest of `n`
/// strided elements. Ties resolve to the first occurrence; `None` when `n == 0`.
pub fn iamin(n: usize, x: &[f64], inc: usize) -> Result<Option<usize>, KernelError> {
    extremum("iamin", n, x, inc, |candidate, best| candidate < best)
}

/// Index of the largest of `n` strided elements, first occurrence on ties.
///
/// # Examples
/// ```
/// let x = [3.0, 9.0, 1.0, 9.0];
/// assert_eq!(matrix_kernels::iamax(4, &x, 1).unwrap(), Some(1));
/// ```
pub fn iamax(n: usize, x: &[f64], inc: usize) -> Result<Option<usize>, KernelError> {
    extremum("iamax", n, x, inc, |candidate, best| candidate > best)
}

fn extremum(
    op: &'static str,
    n: usize,
    x: &[f64],
    inc: usize,
    better: impl Fn(f64, f64) -> bool,
) -> Result<Option<usize>, KernelError> {
    ensure_len(op, strided_len(n, inc), x.len())?;
    if n == 0 {
        return Ok(None);
    }
    let mut best_idx = 0;
    let mut best = x[0];
    for i in 1..n {
        let v = x[i * inc];
        // Strict comparison keeps the earliest index on ties.
        if better(v, best) {
            best = v;
            best_idx = i;
        }
    }
    Ok(Some(best_idx))
}
