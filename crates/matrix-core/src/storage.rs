// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Copy-on-write backing buffer.
//!
//! ```text
//! let b = a.clone();          a ──┐
//!                                 ├──► Arc<Vec<f64>>   (shared, no copy)
//!                             b ──┘
//!
//! b.make_mut()[0] = 1.0;      a ─────► Arc<Vec<f64>>   (original)
//!                             b ─────► Arc<Vec<f64>>   (fresh copy, then written)
//! ```
//!
//! Reads go straight through the `Arc`. Every write goes through
//! [`Storage::make_mut`], which duplicates the buffer first if anyone else
//! still holds it, so a clone behaves exactly like an independent copy.

use matrix_kernels::fill;
use std::fmt;
use std::sync::Arc;

/// A fixed-length, reference-counted `f64` buffer with value semantics.
#[derive(Clone, PartialEq)]
pub(crate) struct Storage {
    data: Arc<Vec<f64>>,
}

impl Storage {
    pub(crate) fn from_vec(data: Vec<f64>) -> Self {
        Self {
            data: Arc::new(data),
        }
    }

    pub(crate) fn filled(len: usize, value: f64) -> Self {
        let mut data = vec![0.0; len];
        fill(value, &mut data);
        Self::from_vec(data)
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable access, duplicating the buffer first if it is shared.
    pub(crate) fn make_mut(&mut self) -> &mut [f64] {
        Arc::make_mut(&mut self.data).as_mut_slice()
    }

    /// `true` if both handles point at the same physical buffer.
    pub(crate) fn ptr_eq(&self, other: &Storage) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Takes the buffer out, copying only if it is still shared.
    pub(crate) fn into_vec(self) -> Vec<f64> {
        Arc::try_unwrap(self.data).unwrap_or_else(|shared| shared.as_ref().clone())
    }
}

impl fmt::Debug for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}
