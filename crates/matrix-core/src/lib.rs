// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # matrix-core
//!
//! Dense, row-major `f64` matrices with value semantics.
//!
//! A [`Matrix`] behaves like a plain value: cloning is cheap because the
//! buffer is shared copy-on-write, and every operation returns a new matrix
//! unless it is an explicit setter. Fallible operations return
//! [`MatrixError`]; nothing aborts the process on bad input except the
//! explicit-dimension factories, which treat a zero dimension as a
//! programming error.
//!
//! ## Operators
//!
//! | Meaning                                  | Spelling                                 |
//! |------------------------------------------|------------------------------------------|
//! | element-wise add / subtract (broadcast)  | `a.add_elem(&b)?`, `a.sub_elem(&b)?`     |
//! | Hadamard multiply / divide (broadcast)   | `a.mul_elem(&b)?`, `a.div_elem(&b)?`     |
//! | linear-map multiply                      | `a.matmul(&b)?`                          |
//! | linear-map divide (`a · b⁻¹`)            | `a.matdiv(&b)?`                          |
//! | matrix ⊕ scalar, scalar ⊕ matrix         | `&a + 1.0`, `2.0 * &a`, `1.0 - &a`, ...  |
//!
//! Two matrices are never combined with `*`, so a Hadamard product cannot be
//! mistaken for a matrix product.
//!
//! ## Broadcasting
//!
//! The right operand of an element-wise operation may be the same shape as
//! the left, a `1 × columns` row vector applied to every row, or a
//! `rows × 1` column vector applied to every column, tried in that order.
//!
//! ## Example
//! ```
//! use matrix_core::{Matrix, MatrixError};
//!
//! let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [0.0, 4.0, 0.0], [3.0, 2.0, 1.0]])?;
//! let inv = a.inverse()?;
//! assert!(a.matmul(&inv)?.approx_eq(&Matrix::identity(3), 1e-12));
//!
//! let centred = a.sub_elem(&a.mean())?;
//! assert!(centred.sum_columns().approx_eq(&Matrix::zeros(1, 3), 1e-12));
//! # Ok::<(), MatrixError>(())
//! ```

mod arith;
mod config;
mod display;
mod elementwise;
mod error;
mod index;
mod linalg;
mod matrix;
mod reduce;
mod shape;
mod storage;

pub use config::NumericConfig;
pub use error::{MatrixError, Result};
pub use index::RowIter;
pub use matrix::Matrix;
pub use reduce::Extremum;
pub use shape::{Axis, Broadcast, Orientation, Shape};
