// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Element-wise transcendental functions.
//!
//! Each returns a new matrix of the same shape; domain errors follow
//! IEEE-754 (`ln(-1)` is NaN, `ln(0)` is -∞).

use crate::Matrix;
use matrix_kernels as kernels;

impl Matrix {
    /// Applies `f` to every element, returning a new matrix.
    pub fn map(&self, f: impl FnMut(f64) -> f64) -> Matrix {
        let data = self.as_slice().iter().copied().map(f).collect();
        Matrix::from_parts(self.shape(), data)
    }

    fn apply(&self, kernel: impl FnOnce(&mut [f64])) -> Matrix {
        let mut data = self.to_vec();
        kernel(&mut data);
        Matrix::from_parts(self.shape(), data)
    }

    /// `e^x` for every element.
    pub fn exp(&self) -> Matrix {
        self.apply(kernels::exp)
    }

    /// Natural logarithm of every element.
    pub fn ln(&self) -> Matrix {
        self.apply(kernels::ln)
    }

    /// Raises every element to `alpha`. Squaring takes a multiply instead
    /// of `powf`.
    pub fn pow(&self, alpha: f64) -> Matrix {
        if alpha == 2.0 {
            self.apply(kernels::powi2)
        } else {
            self.apply(|x| kernels::powf(alpha, x))
        }
    }

    pub fn sqrt(&self) -> Matrix {
        self.apply(kernels::sqrt)
    }
}
