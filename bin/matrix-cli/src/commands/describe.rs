// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `matrix describe` command: shape, totals, extrema and column statistics.

use super::{parse_matrix, print_matrix};
use matrix_core::NumericConfig;

pub fn execute(literal: &str, config: &NumericConfig) -> anyhow::Result<()> {
    let m = parse_matrix(literal)?;
    let prec = config.display_precision;

    println!("  Shape:    {}", m.shape());
    println!("  Sum:      {:.prec$}", m.sum());
    let (lo, hi) = (m.min(), m.max());
    println!("  Min:      {:.prec$} at ({}, {})", lo.value, lo.row, lo.column);
    println!("  Max:      {:.prec$} at ({}, {})", hi.value, hi.row, hi.column);
    if m.is_square() {
        println!("  Det:      {:.prec$}", m.determinant()?);
    }
    println!();

    println!("  Column means");
    print_matrix(&m.mean(), config);
    if m.rows() > 1 {
        println!("  Column sample std");
        print_matrix(&m.std(), config);
    } else {
        println!("  Column sample std: undefined for a single row");
    }
    Ok(())
}
