//! Test detection of Peelle's Pertinent Puzzle.

use approx::assert_relative_eq;
use rand::{Rng, SeedableRng};

use ppp_estimate::matrix::Array;
use ppp_estimate::ppp::{detect_ppp, ppp_ratios};

/// Covariance of two points with standard deviations s1, s2 and correlation rho.
fn covariance(s1: f64, s2: f64, rho: f64) -> Array<f64> {
    vec![vec![s1 * s1, rho * s1 * s2], vec![rho * s1 * s2, s2 * s2]].into()
}

#[test]
fn test_correlated_data() {
    let v: Array<f64> = vec![vec![0.05, 0.06], vec![0.06, 0.1125]].into();
    let (rho, r) = ppp_ratios(&v).unwrap();
    assert_relative_eq!(rho, 0.8, epsilon = 1e-12);
    assert_relative_eq!(r, 2. / 3., epsilon = 1e-12);
    assert_eq!(detect_ppp(&v), Some(true));
}

#[test]
fn test_independent_data() {
    let v: Array<f64> = vec![vec![0.05, 0.0], vec![0.0, 0.1125]].into();
    assert_eq!(detect_ppp(&v), Some(false));
}

#[test]
fn test_tie() {
    // rho = 1/(1*2) equals the ratio 1/2
    let v: Array<f64> = vec![vec![1., 1.], vec![1., 4.]].into();
    assert_eq!(ppp_ratios(&v), Some((0.5, 0.5)));
    assert_eq!(detect_ppp(&v), Some(false));
}

#[test]
fn test_random_limits() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(3u64);
    for _ in 0..100 {
        let s: f64 = rng.gen_range(0.1..10.0);
        // equal variances without correlation never show PPP
        assert_eq!(detect_ppp(&covariance(s, s, 0.)), Some(false));

        // full correlation of unequal variances always does
        let s2 = s * rng.gen_range(1.1..5.0);
        assert_eq!(detect_ppp(&covariance(s, s2, 1.)), Some(true));
        assert_eq!(detect_ppp(&covariance(s2, s, 1.)), Some(true));
    }
}

#[test]
fn test_not_applicable() {
    let flat: Array<f64> = vec![1., 2.].into();
    assert_eq!(detect_ppp(&flat), None);

    let big: Array<f64> = vec![vec![1., 0., 0.], vec![0., 1., 0.], vec![0., 0., 1.]].into();
    assert_eq!(detect_ppp(&big), None);

    let wide: Array<f64> = vec![vec![1., 0., 0.], vec![0., 1., 0.]].into();
    assert_eq!(detect_ppp(&wide), None);

    let ragged: Array<f64> = vec![vec![1., 0.], vec![0.]].into();
    assert_eq!(detect_ppp(&ragged), None);
}
