// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Example: ordinary least squares through the normal equations.
//!
//! Generates a noisy linear data set, standardises the features column by
//! column, fits `β = (XᵀX)⁻¹ Xᵀy` on a training split and reports the error
//! on the held-out rows.
//!
//! ```bash
//! cargo run -p matrix-core --example linear_regression
//! ```

use matrix_core::{Matrix, NumericConfig};
use rand::Rng;

const SAMPLES: usize = 200;
const TRUE_WEIGHTS: [f64; 3] = [4.0, -2.0, 0.5];
const TRUE_BIAS: f64 = 3.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing.
    tracing_subscriber::fmt().with_env_filter("info").init();

    let config = NumericConfig {
        seed: Some(2025),
        ..Default::default()
    };
    let mut rng = config.rng();

    // Features in [0, 10], targets with a little uniform noise.
    let x = Matrix::random(SAMPLES, TRUE_WEIGHTS.len(), &mut rng) * 10.0;
    let weights = Matrix::column_vector(TRUE_WEIGHTS.to_vec())?;
    let noise = Matrix::random(SAMPLES, 1, &mut rng).map(|u| (u - 0.5) * 0.2);
    let y = (x.matmul(&weights)? + TRUE_BIAS).add_elem(&noise)?;

    // Standardise every feature column.
    let mean = x.mean();
    let std = x.std();
    let z = x.sub_elem(&mean)?.div_elem(&std)?;

    // Prepend an intercept column.
    let mut design = Matrix::ones(SAMPLES, TRUE_WEIGHTS.len() + 1);
    design.set_columns_in(1.., &z)?;

    // 80/20 split by row index.
    let (train, test): (Vec<usize>, Vec<usize>) = (0..SAMPLES).partition(|_| rng.gen_bool(0.8));
    let (x_train, y_train) = (design.select_rows(&train)?, y.select_rows(&train)?);
    let (x_test, y_test) = (design.select_rows(&test)?, y.select_rows(&test)?);

    // β = (XᵀX)⁻¹ Xᵀy
    let xt = x_train.transpose();
    let gram = xt.matmul(&x_train)?;
    let beta = gram.inverse()?.matmul(&xt.matmul(&y_train)?)?;

    // Undo the standardisation to recover weights in the original units.
    let scaled = beta.rows_in(1..)?.transpose().div_elem(&std)?;
    let bias = beta.at(0)? - scaled.mul_elem(&mean)?.sum();

    println!("Training rows: {}, test rows: {}", train.len(), test.len());
    println!("\nFitted weights:\n{scaled:.3}");
    println!("True weights:\n{}", Matrix::row_vector(TRUE_WEIGHTS.to_vec())?);
    println!("\nFitted bias: {bias:.3} (true {TRUE_BIAS})");

    let residual = x_test.matmul(&beta)?.sub_elem(&y_test)?;
    let rmse = (residual.pow(2.0).sum() / residual.rows() as f64).sqrt();
    println!("Held-out RMSE: {rmse:.4}");

    Ok(())
}
