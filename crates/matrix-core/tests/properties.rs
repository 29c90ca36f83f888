// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Property tests for the algebraic identities the matrix engine must hold.

use matrix_core::{Matrix, NumericConfig};
use proptest::prelude::*;

// ── Strategies ─────────────────────────────────────────────────

fn matrix(max_dim: usize, lo: f64, hi: f64) -> impl Strategy<Value = Matrix> {
    (1..=max_dim, 1..=max_dim).prop_flat_map(move |(rows, columns)| {
        prop::collection::vec(lo..hi, rows * columns)
            .prop_map(move |data| Matrix::from_vec(rows, columns, data).unwrap())
    })
}

/// Strictly diagonally dominant, hence invertible and well-conditioned.
fn dominant(max_dim: usize) -> impl Strategy<Value = Matrix> {
    (1..=max_dim).prop_flat_map(|n| {
        prop::collection::vec(-1.0f64..1.0, n * n).prop_map(move |data| {
            let mut m = Matrix::from_vec(n, n, data).unwrap();
            for i in 0..n {
                let sign = if m[(i, i)] < 0.0 { -1.0 } else { 1.0 };
                m[(i, i)] = sign * (n as f64 + 1.0);
            }
            m
        })
    })
}

// ── Properties ─────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn transpose_is_an_involution(m in matrix(12, -1e3, 1e3), block in 1usize..9) {
        let cfg = NumericConfig { transpose_block: block, ..Default::default() };
        let t = m.transpose_with(&cfg);
        prop_assert_eq!(t.shape(), m.shape().transposed());
        prop_assert_eq!(t.transpose_with(&cfg), m);
    }

    #[test]
    fn identity_is_neutral(m in matrix(8, -1e3, 1e3)) {
        prop_assert_eq!(m.matmul(&Matrix::identity(m.columns())).unwrap(), m.clone());
        prop_assert_eq!(Matrix::identity(m.rows()).matmul(&m).unwrap(), m);
    }

    #[test]
    fn inverse_of_inverse(m in dominant(6)) {
        let inv = m.inverse().unwrap();
        prop_assert!(m.matmul(&inv).unwrap().approx_eq(&Matrix::identity(m.rows()), 1e-10));
        prop_assert!(inv.inverse().unwrap().approx_eq(&m, 1e-10));
    }

    #[test]
    fn pow_and_sqrt_agree(m in matrix(6, 0.0, 100.0)) {
        prop_assert!(m.pow(2.0).sqrt().approx_eq(&m, 1e-10));
        prop_assert!(m.pow(0.5).approx_eq(&m.sqrt(), 1e-10));
    }

    #[test]
    fn row_broadcast_undoes(m in matrix(6, -10.0, 10.0)) {
        let shift = m.row(0).unwrap();
        let back = m.add_elem(&shift).unwrap().sub_elem(&shift).unwrap();
        prop_assert!(back.approx_eq(&m, 1e-9));
    }

    #[test]
    fn sums_agree(m in matrix(8, -10.0, 10.0)) {
        let total = m.sum();
        prop_assert!((m.sum_rows().sum() - total).abs() < 1e-9);
        prop_assert!((m.sum_columns().sum() - total).abs() < 1e-9);
    }

    #[test]
    fn clones_are_independent(m in matrix(6, -10.0, 10.0), v in -10.0f64..10.0) {
        let mut copy = m.clone();
        let original = m.get(0, 0).unwrap();
        copy.set(0, 0, v + 100.0).unwrap();
        prop_assert_eq!(m.get(0, 0).unwrap(), original);
        prop_assert!(!m.shares_storage(&copy));
    }

    #[test]
    fn extrema_bound_every_element(m in matrix(8, -10.0, 10.0)) {
        let (lo, hi) = (m.min(), m.max());
        prop_assert!(m.as_slice().iter().all(|&x| lo.value <= x && x <= hi.value));
        prop_assert_eq!(m.get(lo.row, lo.column).unwrap(), lo.value);
        prop_assert_eq!(m.get(hi.row, hi.column).unwrap(), hi.value);
    }
}
