#![allow(non_snake_case)]

//! Peelle's Pertinent Puzzle detection.
//!
//! GLS averaging of two correlated data points is biased (PPP) when their correlation exceeds the ratio of their
//! standard deviations. See "Defense of the Least Squares Solution to Peelle's Pertinent Puzzle".
//!
//! The detector is a diagnostic: malformed input is reported as not applicable rather than as an error.

use na::RealField;
use nalgebra as na;

use crate::matrix::Array;

/// Correlation coefficient and standard deviation ratio of a 2x2 covariance matrix.
///
/// Returns `(rho, r)` where `r = min(s1/s2, s2/s1)`, or `None` if `V` is not a 2x2 matrix.
pub fn ppp_ratios<N: RealField>(V: &Array<N>) -> Option<(N, N)> {
    if V.ndim() != 2 {
        return None;
    }
    let v = V.to_matrix().ok()?;
    if v.shape() != (2, 2) {
        return None;
    }

    let s1 = v[(0, 0)].sqrt();
    let s2 = v[(1, 1)].sqrt();
    let rho = v[(0, 1)] / (s1 * s2);
    let (a, b) = (s1 / s2, s2 / s1);
    let r = if a < b { a } else { b };

    Some((rho, r))
}

/// Whether GLS averaging with covariance `V` will show PPP.
///
/// True if the correlation strictly exceeds the ratio of standard deviations.
/// `None` if `V` is not a 2x2 matrix.
///
/// # Examples
///
/// ```
/// # use ppp_estimate::matrix::Array;
/// # use ppp_estimate::ppp::detect_ppp;
/// let V: Array<f64> = vec![vec![0.05, 0.06], vec![0.06, 0.1125]].into();
/// assert_eq!(detect_ppp(&V), Some(true));
/// ```
pub fn detect_ppp<N: RealField>(V: &Array<N>) -> Option<bool> {
    let (rho, r) = ppp_ratios(V)?;
    let ppp = rho > r;
    log::debug!("PPP correlation {} ratio {}: {}", rho, r, ppp);
    Some(ppp)
}
