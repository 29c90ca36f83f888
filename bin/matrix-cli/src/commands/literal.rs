// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Matrix literals: `"1,2,3; 0,4,0; 3,2,1"`.

use anyhow::{bail, Context};
use matrix_core::Matrix;

/// Parses rows separated by `;` and columns separated by `,` and/or
/// whitespace. A trailing `;` is allowed; an empty comma field is not.
pub fn parse_matrix(literal: &str) -> anyhow::Result<Matrix> {
    let mut rows = Vec::new();
    for (r, row) in literal.split(';').enumerate() {
        let row = row.trim();
        if row.is_empty() {
            continue;
        }
        let mut values = Vec::new();
        for (f, field) in row.split(',').enumerate() {
            let field = field.trim();
            if field.is_empty() {
                bail!("row {r}: empty field {f} in \"{row}\"");
            }
            for token in field.split_whitespace() {
                let value = token
                    .parse::<f64>()
                    .with_context(|| format!("row {r}: '{token}' is not a number"))?;
                values.push(value);
            }
        }
        rows.push(values);
    }
    if rows.is_empty() {
        bail!("empty matrix literal");
    }
    Matrix::from_rows(&rows).with_context(|| format!("invalid matrix literal \"{literal}\""))
}
