// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for kernel invocations.

/// Errors reported by the numeric kernels.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KernelError {
    /// A buffer is too short (or too long) for the requested dimensions.
    #[error("buffer length mismatch in {op}: expected {expected} elements, got {actual}")]
    LengthMismatch {
        op: &'static str,
        expected: usize,
        actual: usize,
    },

    /// LU factorization met a pivot that is zero within tolerance.
    #[error("singular matrix: pivot {index} is zero within tolerance")]
    SingularPivot { index: usize },
}

/// Checks that `actual >= expected`, the BLAS requirement for strided buffers.
pub(crate) fn ensure_len(
    op: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), KernelError> {
    if actual < expected {
        return Err(KernelError::LengthMismatch {
            op,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Checks that `actual == expected`.
pub(crate) fn ensure_exact(
    op: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), KernelError> {
    if actual != expected {
        return Err(KernelError::LengthMismatch {
            op,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Minimum buffer length for `n` elements visited with stride `inc`.
pub(crate) fn strided_len(n: usize, inc: usize) -> usize {
    if n == 0 {
        0
    } else {
        (n - 1) * inc + 1
    }
}
