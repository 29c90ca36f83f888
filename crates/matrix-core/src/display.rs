// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Human-readable rendering.
//!
//! ```text
//! [     1.0000     2.0000 ]        single row
//!
//! ⎡     1.0000     2.0000 ⎤        first row
//! ⎢     3.0000     4.0000 ⎥        middle rows
//! ⎣     5.0000     6.0000 ⎦        last row
//! ```
//!
//! Field width and precision come from the formatter (`{:8.2}`), falling
//! back to 10 and 4.

use crate::Matrix;
use std::fmt;

const DEFAULT_WIDTH: usize = 10;
const DEFAULT_PRECISION: usize = 4;

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = f.width().unwrap_or(DEFAULT_WIDTH);
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        let last = self.rows() - 1;

        for (i, row) in self.iter_rows().enumerate() {
            let (open, close) = match i {
                _ if last == 0 => ('[', ']'),
                0 => ('⎡', '⎤'),
                _ if i == last => ('⎣', '⎦'),
                _ => ('⎢', '⎥'),
            };
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{open}")?;
            for value in row {
                write!(f, " {value:>width$.precision$}")?;
            }
            write!(f, " {close}")?;
        }
        Ok(())
    }
}
