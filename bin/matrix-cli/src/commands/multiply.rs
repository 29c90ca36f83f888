// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `matrix multiply` command.

use super::{parse_matrix, print_matrix};
use anyhow::Context;
use matrix_core::NumericConfig;

pub fn execute(
    lhs: &str,
    rhs: &str,
    elementwise: bool,
    config: &NumericConfig,
) -> anyhow::Result<()> {
    let lhs = parse_matrix(lhs).context("left operand")?;
    let rhs = parse_matrix(rhs).context("right operand")?;
    let product = if elementwise {
        lhs.mul_elem(&rhs)
    } else {
        lhs.matmul(&rhs)
    }
    .context("cannot multiply")?;
    print_matrix(&product, config);
    Ok(())
}
