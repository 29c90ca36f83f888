// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # matrix
//!
//! Command-line front end for the matrix engine.
//!
//! Matrices are given as literals: rows separated by `;`, columns by `,`
//! or whitespace.
//!
//! ## Usage
//! ```bash
//! # Invert a matrix
//! matrix invert "1,2,3; 0,4,0; 3,2,1"
//!
//! # Linear-map product, or Hadamard product with broadcasting
//! matrix multiply "1 2; 3 4" "5; 6"
//! matrix multiply --elementwise "1 2; 3 4" "10 100"
//!
//! # Summary statistics
//! matrix describe "1,2; 3,4; 5,6"
//!
//! # Reproducible uniform random matrix
//! matrix random 3 4 --seed 42
//! ```

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "matrix",
    about = "Dense matrix calculator",
    version,
    author
)]
struct Cli {
    /// Path to a TOML file with numeric settings.
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the inverse of a square matrix.
    Invert {
        /// Matrix literal, e.g. "1,2; 3,4".
        #[arg(allow_hyphen_values = true)]
        matrix: String,
    },

    /// Multiply two matrices.
    Multiply {
        /// Left operand.
        #[arg(allow_hyphen_values = true)]
        lhs: String,

        /// Right operand.
        #[arg(allow_hyphen_values = true)]
        rhs: String,

        /// Element-wise (Hadamard) product with row/column broadcasting
        /// instead of the matrix product.
        #[arg(short, long)]
        elementwise: bool,
    },

    /// Print shape, sum, extrema and column statistics.
    Describe {
        /// Matrix literal.
        #[arg(allow_hyphen_values = true)]
        matrix: String,
    },

    /// Print a matrix of uniform samples from [0, 1].
    Random {
        rows: usize,
        columns: usize,

        /// Seed for reproducible output (falls back to the config seed).
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Invert { matrix } => commands::invert::execute(&matrix, &config),
        Commands::Multiply {
            lhs,
            rhs,
            elementwise,
        } => commands::multiply::execute(&lhs, &rhs, elementwise, &config),
        Commands::Describe { matrix } => commands::describe::execute(&matrix, &config),
        Commands::Random {
            rows,
            columns,
            seed,
        } => commands::random::execute(rows, columns, seed, &config),
    }
}
