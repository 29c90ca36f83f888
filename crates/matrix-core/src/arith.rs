// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Element-wise arithmetic with row/column broadcasting.
//!
//! Matrix ⊕ matrix operations are named methods returning `Result`, since
//! shapes may not line up. Matrix ⊕ scalar operations cannot fail and use
//! the `std::ops` operators in both operand orders.

use crate::error::shape_sized;
use crate::{Broadcast, Matrix, MatrixError, Result};
use matrix_kernels::{add_scalar, axpy, copy, div, div_scalar, mul, scale, KernelError};
use std::ops::{Add, Div, Mul, Neg, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ElemOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ElemOp {
    fn name(self) -> &'static str {
        match self {
            ElemOp::Add => "add_elem",
            ElemOp::Sub => "sub_elem",
            ElemOp::Mul => "mul_elem",
            ElemOp::Div => "div_elem",
        }
    }

    /// `out = lhs ⊕ rhs` over equally long slices.
    fn combine(self, lhs: &[f64], rhs: &[f64], out: &mut [f64]) -> Result<(), KernelError> {
        match self {
            ElemOp::Add => {
                copy(lhs, out)?;
                axpy(1.0, rhs, out)
            }
            ElemOp::Sub => {
                copy(lhs, out)?;
                axpy(-1.0, rhs, out)
            }
            ElemOp::Mul => mul(lhs, rhs, out),
            ElemOp::Div => div(lhs, rhs, out),
        }
    }

    /// `out = lhs ⊕ value` for every element.
    fn combine_scalar(
        self,
        lhs: &[f64],
        value: f64,
        out: &mut [f64],
    ) -> Result<(), KernelError> {
        copy(lhs, out)?;
        match self {
            ElemOp::Add => add_scalar(value, out),
            ElemOp::Sub => add_scalar(-value, out),
            ElemOp::Mul => scale(value, out),
            ElemOp::Div => div_scalar(value, out),
        }
        Ok(())
    }
}

impl Matrix {
    fn broadcast_op(&self, rhs: &Matrix, op: ElemOp) -> Result<Matrix> {
        let mode = self
            .shape()
            .broadcast(&rhs.shape())
            .ok_or_else(|| MatrixError::ShapeMismatch {
                op: op.name(),
                lhs: self.shape(),
                rhs: rhs.shape(),
            })?;

        let columns = self.columns();
        let lhs = self.as_slice();
        let mut out = vec![0.0; lhs.len()];
        match mode {
            Broadcast::Same => op.combine(lhs, rhs.as_slice(), &mut out)?,
            Broadcast::Row => {
                for (dst, src) in out.chunks_exact_mut(columns).zip(lhs.chunks_exact(columns)) {
                    op.combine(src, rhs.as_slice(), dst)?;
                }
            }
            Broadcast::Column => {
                for ((dst, src), &v) in out
                    .chunks_exact_mut(columns)
                    .zip(lhs.chunks_exact(columns))
                    .zip(rhs.as_slice())
                {
                    op.combine_scalar(src, v, dst)?;
                }
            }
        }
        Ok(Matrix::from_parts(self.shape(), out))
    }

    /// Element-wise sum with broadcasting.
    ///
    /// `rhs` may have the same shape as `self`, be a `1 × columns` row
    /// vector (added to every row) or a `rows × 1` column vector (added to
    /// every column), tried in that order.
    ///
    /// # Examples
    /// ```
    /// use matrix_core::Matrix;
    /// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
    /// let b = Matrix::row_vector(vec![10.0, 20.0]).unwrap();
    /// assert_eq!(a.add_elem(&b).unwrap().row(2).unwrap().as_slice(), &[15.0, 26.0]);
    /// ```
    ///
    /// # Errors
    /// [`MatrixError::ShapeMismatch`] when none of the broadcasting rules apply.
    pub fn add_elem(&self, rhs: &Matrix) -> Result<Matrix> {
        self.broadcast_op(rhs, ElemOp::Add)
    }

    /// Element-wise difference `self - rhs` with broadcasting.
    pub fn sub_elem(&self, rhs: &Matrix) -> Result<Matrix> {
        self.broadcast_op(rhs, ElemOp::Sub)
    }

    /// Hadamard (element-wise) product with broadcasting.
    ///
    /// This is never the linear-algebra product; see [`Matrix::matmul`].
    pub fn mul_elem(&self, rhs: &Matrix) -> Result<Matrix> {
        self.broadcast_op(rhs, ElemOp::Mul)
    }

    /// Hadamard (element-wise) quotient `self / rhs` with broadcasting.
    ///
    /// Division by zero follows IEEE-754 (±∞ or NaN); see [`Matrix::matdiv`]
    /// for multiplication by an inverse.
    pub fn div_elem(&self, rhs: &Matrix) -> Result<Matrix> {
        self.broadcast_op(rhs, ElemOp::Div)
    }

    fn scalar_op(&self, value: f64, op: ElemOp) -> Matrix {
        let mut out = vec![0.0; self.len()];
        shape_sized(op.combine_scalar(self.as_slice(), value, &mut out));
        Matrix::from_parts(self.shape(), out)
    }
}

macro_rules! scalar_operator {
    ($Trait:ident, $method:ident, $op:expr, |$s:ident, $x:ident| $reversed:expr) => {
        impl $Trait<f64> for &Matrix {
            type Output = Matrix;

            fn $method(self, rhs: f64) -> Matrix {
                self.scalar_op(rhs, $op)
            }
        }

        impl $Trait<f64> for Matrix {
            type Output = Matrix;

            fn $method(self, rhs: f64) -> Matrix {
                self.scalar_op(rhs, $op)
            }
        }

        impl $Trait<&Matrix> for f64 {
            type Output = Matrix;

            fn $method(self, rhs: &Matrix) -> Matrix {
                let $s = self;
                rhs.map(|$x| $reversed)
            }
        }

        impl $Trait<Matrix> for f64 {
            type Output = Matrix;

            fn $method(self, rhs: Matrix) -> Matrix {
                self.$method(&rhs)
            }
        }
    };
}

scalar_operator!(Add, add, ElemOp::Add, |s, x| s + x);
scalar_operator!(Sub, sub, ElemOp::Sub, |s, x| s - x);
scalar_operator!(Mul, mul, ElemOp::Mul, |s, x| s * x);
scalar_operator!(Div, div, ElemOp::Div, |s, x| s / x);

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        let mut out = self.to_vec();
        scale(-1.0, &mut out);
        Matrix::from_parts(self.shape(), out)
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        -&self
    }
}
