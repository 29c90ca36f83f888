// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Numeric configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! singular_tolerance = 1e-13
//! ill_conditioned_ratio = 1e-10
//! transpose_block = 32
//! approx_tolerance = 1e-10
//! display_precision = 4
//! seed = 42
//! ```
//!
//! Every key is optional; missing keys take their [`Default`] values.

use crate::{MatrixError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

/// Tunables for the numeric algorithms.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NumericConfig {
    /// A pivot with `|p| <= singular_tolerance * min(r, c)` makes a matrix
    /// singular, where `r` and `c` are the largest magnitudes in the pivot's
    /// original row and column.
    pub singular_tolerance: f64,
    /// Inverses whose `min|pivot| / max|pivot|` falls below this ratio are
    /// reported as ill-conditioned (a warning, not an error).
    pub ill_conditioned_ratio: f64,
    /// Tile edge for the blocked transpose.
    pub transpose_block: usize,
    /// Default tolerance for approximate comparisons.
    pub approx_tolerance: f64,
    /// Digits after the decimal point when rendering matrices.
    pub display_precision: usize,
    /// Seed for [`NumericConfig::rng`]; entropy when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl NumericConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MatrixError::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| MatrixError::Config(format!("TOML parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| MatrixError::Config(format!("TOML serialise error: {e}")))
    }

    /// Checks that every tunable is in its valid range.
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("singular_tolerance", self.singular_tolerance),
            ("ill_conditioned_ratio", self.ill_conditioned_ratio),
            ("approx_tolerance", self.approx_tolerance),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0) || !value.is_finite() {
                return Err(MatrixError::Config(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        if self.transpose_block == 0 {
            return Err(MatrixError::Config(
                "transpose_block must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// A random generator for [`crate::Matrix::random`]: seeded from
    /// [`NumericConfig::seed`] when set, from OS entropy otherwise.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for NumericConfig {
    fn default() -> Self {
        Self {
            singular_tolerance: 1e-13,
            ill_conditioned_ratio: 1e-10,
            transpose_block: 32,
            approx_tolerance: 1e-10,
            display_precision: 4,
            seed: None,
        }
    }
}
