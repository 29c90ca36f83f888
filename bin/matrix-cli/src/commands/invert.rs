// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `matrix invert` command.

use super::{parse_matrix, print_matrix};
use anyhow::Context;
use matrix_core::{Matrix, NumericConfig};

pub fn execute(literal: &str, config: &NumericConfig) -> anyhow::Result<()> {
    let matrix = parse_matrix(literal)?;
    let inverse = checked_inverse(&matrix, config)?;
    print_matrix(&inverse, config);
    Ok(())
}

/// Inverts `matrix` and warns when `A·A⁻¹` misses the identity by more
/// than `config.approx_tolerance`.
fn checked_inverse(matrix: &Matrix, config: &NumericConfig) -> anyhow::Result<Matrix> {
    let inverse = matrix
        .inverse_with(config)
        .with_context(|| format!("cannot invert the {} matrix", matrix.shape()))?;
    let identity = Matrix::identity(matrix.rows());
    if !matrix.matmul(&inverse)?.approx_eq_with(&identity, config) {
        tracing::warn!(
            shape = %matrix.shape(),
            tolerance = config.approx_tolerance,
            "A·A⁻¹ differs from the identity beyond the approx tolerance"
        );
    }
    Ok(inverse)
}
