// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! In-place transcendental maps.

/// `x[i] ← e^x[i]`.
pub fn exp(x: &mut [f64]) {
    x.iter_mut().for_each(|v| *v = v.exp());
}

/// `x[i] ← ln x[i]` (NaN for negative input, -∞ for zero).
pub fn ln(x: &mut [f64]) {
    x.iter_mut().for_each(|v| *v = v.ln());
}

/// `x[i] ← x[i]^alpha`.
pub fn powf(alpha: f64, x: &mut [f64]) {
    x.iter_mut().for_each(|v| *v = v.powf(alpha));
}

/// `x[i] ← x[i]²`, the squaring fast path of [`powf`].
pub fn powi2(x: &mut [f64]) {
    x.iter_mut().for_each(|v| *v *= *v);
}

/// `x[i] ← √x[i]`.
pub fn sqrt(x: &mut [f64]) {
    x.iter_mut().for_each(|v| *v = v.sqrt());
}
