//! Test the M+W Bayesian update.

#![allow(non_snake_case)]

use approx::assert_relative_eq;
use na::DMatrix;
use nalgebra as na;
use rand::{Rng, SeedableRng};

use ppp_estimate::{m_plus_w, EstimateError};

#[test]
fn test_m_plus_w_scheme() {
    // values from the Method 1 example
    let P = DMatrix::from_row_slice(2, 1, &[109.50226244, 100.]);
    let M_inv = DMatrix::from_row_slice(2, 2, &[0., 0., 0., 4.]);
    let D = DMatrix::from_row_slice(2, 1, &[10000., 12100.]);
    let V = DMatrix::from_row_slice(2, 2, &[10000., 0., 0., 12100.]);
    let T = DMatrix::from_row_slice(2, 1, &[10950.22624434, 10950.22624434]);
    let G = DMatrix::from_row_slice(2, 2, &[100., 109.50226244, 100., 109.50226244]);

    let posterior = m_plus_w(&P, &M_inv, &D, &V, &T, &G, false).unwrap();

    assert_relative_eq!(posterior.P[(0, 0)], 109.50226244, epsilon = 1e-6);
    assert_relative_eq!(posterior.M[(0, 0)], 0.84727995, epsilon = 1e-6);
    assert_relative_eq!(posterior.M[(0, 1)], -0.27375566, epsilon = 1e-6);
    assert_relative_eq!(posterior.M[(1, 1)], 0.25, epsilon = 1e-6);
}

#[test]
fn test_verbose_same_result() {
    let P = DMatrix::from_row_slice(1, 1, &[1.]);
    let M_inv = DMatrix::from_row_slice(1, 1, &[0.5]);
    let D = DMatrix::from_row_slice(2, 1, &[1.5, 2.5]);
    let V = DMatrix::from_row_slice(2, 2, &[1., 0.2, 0.2, 2.]);
    let T = DMatrix::from_row_slice(2, 1, &[1., 1.]);
    let G = DMatrix::from_row_slice(2, 1, &[1., 1.]);

    assert_eq!(
        m_plus_w(&P, &M_inv, &D, &V, &T, &G, true),
        m_plus_w(&P, &M_inv, &D, &V, &T, &G, false)
    );
}

#[test]
fn test_no_information() {
    // D == T leaves the prior parameters unchanged
    let mut rng = rand::rngs::StdRng::seed_from_u64(4u64);
    for _ in 0..20 {
        let A = DMatrix::<f64>::from_fn(3, 3, |_, _| rng.gen_range(-1.0..1.0));
        let V = &A * A.transpose() + DMatrix::identity(3, 3);
        let G = DMatrix::<f64>::from_fn(3, 2, |_, _| rng.gen_range(-2.0..2.0));
        let P = DMatrix::<f64>::from_fn(2, 1, |_, _| rng.gen_range(-10.0..10.0));
        let D = DMatrix::<f64>::from_fn(3, 1, |_, _| rng.gen_range(-10.0..10.0));
        let M_inv = DMatrix::identity(2, 2);

        let posterior = m_plus_w(&P, &M_inv, &D, &V, &D, &G, false).unwrap();
        assert_eq!(posterior.P, P);
    }
}

#[test]
fn test_singular() {
    let P = DMatrix::from_row_slice(1, 1, &[1.]);
    let M_inv = DMatrix::from_row_slice(1, 1, &[0.]);
    let D = DMatrix::from_row_slice(2, 1, &[1., 2.]);
    let T = DMatrix::from_row_slice(2, 1, &[1., 1.]);

    // no information about the parameter
    let V = DMatrix::identity(2, 2);
    let G = DMatrix::zeros(2, 1);
    assert_eq!(m_plus_w(&P, &M_inv, &D, &V, &T, &G, false), Err(EstimateError::Singular("M_inv + W")));

    let V = DMatrix::zeros(2, 2);
    let G = DMatrix::from_row_slice(2, 1, &[1., 1.]);
    assert_eq!(m_plus_w(&P, &M_inv, &D, &V, &T, &G, false), Err(EstimateError::Singular("V")));
}

#[test]
#[should_panic]
fn test_shape_mismatch() {
    let P = DMatrix::from_row_slice(1, 1, &[1.]);
    let M_inv = DMatrix::from_row_slice(1, 1, &[0.]);
    let D = DMatrix::from_row_slice(2, 1, &[1., 2.]);
    let V = DMatrix::identity(2, 2);
    let T = DMatrix::from_row_slice(3, 1, &[1., 1., 1.]);
    let G = DMatrix::from_row_slice(2, 1, &[1., 1.]);

    let _ = m_plus_w(&P, &M_inv, &D, &V, &T, &G, false);
}
