// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and shared plumbing.

pub mod describe;
pub mod invert;
pub mod multiply;
pub mod random;

mod literal;

pub use literal::parse_matrix;

use anyhow::Context;
use matrix_core::{Matrix, NumericConfig};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber. `RUST_LOG` wins over `-v`.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Reads the numeric settings, or the defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<NumericConfig> {
    match path {
        Some(path) => {
            let config = NumericConfig::from_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            tracing::info!(path = %path.display(), "loaded numeric config");
            Ok(config)
        }
        None => Ok(NumericConfig::default()),
    }
}

/// Prints a matrix with the configured precision.
pub(crate) fn print_matrix(matrix: &Matrix, config: &NumericConfig) {
    println!("{matrix:.prec$}", prec = config.display_precision);
}
