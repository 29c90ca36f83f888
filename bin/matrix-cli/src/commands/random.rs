// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `matrix random` command.

use super::print_matrix;
use anyhow::ensure;
use matrix_core::{Matrix, NumericConfig};

pub fn execute(
    rows: usize,
    columns: usize,
    seed: Option<u64>,
    config: &NumericConfig,
) -> anyhow::Result<()> {
    ensure!(
        rows > 0 && columns > 0,
        "a matrix needs at least one row and one column, got {rows}x{columns}"
    );
    let config = NumericConfig {
        seed: seed.or(config.seed),
        ..config.clone()
    };
    tracing::debug!(rows, columns, seed = ?config.seed, "generating random matrix");
    let matrix = Matrix::random(rows, columns, &mut config.rng());
    print_matrix(&matrix, &config);
    Ok(())
}
