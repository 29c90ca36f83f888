// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # matrix-kernels
//!
//! Portable, stateless numeric kernels over row-major `f64` buffers.
//!
//! This crate is the numeric backend of `matrix-core`. Every kernel is a
//! pure function of its inputs (apart from the documented output buffer)
//! and follows BLAS/LAPACK naming where one exists:
//!
//! - Level 1: [`copy`], [`copy_strided`], [`axpy`], [`fill`], [`scale`],
//!   [`add_scalar`], [`div_scalar`], element-wise [`mul`] / [`div`].
//! - Reductions: [`sum`], [`mean`], [`iamin`], [`iamax`] (strided).
//! - Level 3: [`gemm`], blocked [`transpose`].
//! - LAPACK-style: [`lu_factor`] (partial pivoting) and [`lu_invert`].
//! - Transcendental maps: [`exp`], [`ln`], [`powf`], [`powi2`], [`sqrt`].
//!
//! Strided kernels take `(n, x, inc)` triples: `n` elements starting at
//! `x[0]`, spaced `inc` apart. A row of a row-major `rows × cols` matrix
//! is `(cols, &data[r * cols..], 1)`, a column is `(rows, &data[c..], cols)`.
//!
//! Buffer lengths are validated up front; a short buffer yields
//! [`KernelError::LengthMismatch`] and leaves every output untouched.
//!
//! Any other backend honouring the same contracts (a vendor BLAS, SIMD
//! kernels) can replace these loops without changing caller semantics.

mod elementwise;
mod error;
mod level1;
mod level3;
mod lu;
mod reduce;

pub use elementwise::{exp, ln, powf, powi2, sqrt};
pub use error::KernelError;
pub use level1::{add_scalar, axpy, copy, copy_strided, div, div_scalar, fill, mul, scale};
pub use level3::{gemm, transpose};
pub use lu::{lu_factor, lu_invert, LuFactors};
pub use reduce::{iamax, iamin, mean, sum};
