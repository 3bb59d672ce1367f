#![allow(non_snake_case)]

//! M+W Bayesian update.
//!
//! A discrete Bayesian update of prior parameters P with inverse covariance M^-1 by data D with covariance V.
//! The likelihood is linearised about P: theory T and sensitivities G = dT/dP.
//!
//! Information is additive. The observation contributes the information state Y and information W:
//! ```text
//! Y  = G'.inv(V).(D - T)
//! W  = G'.inv(V).G
//! M' = (M^-1 + W)^-1
//! P' = P + M'.Y
//! ```
//! A zero block in M^-1 is an uninformative prior on those parameters.
//!
//! When T is affine in P, as for the normalization methods, a single update is exact.

use na::{DMatrix, RealField};
use nalgebra as na;

use crate::error::EstimateError;
use crate::matrix;
use crate::models::Posterior;

/// Posterior parameters and covariance by the M+W scheme.
///
/// No shapes are checked: D and T are n x 1, V is n x n, G is n x p, P is p x 1 and M_inv is p x p.
///
/// # Panics
///
/// If the matrix shapes do not conform.
///
/// # Examples
///
/// ```
/// # use nalgebra::DMatrix;
/// # use ppp_estimate::estimators::mw::m_plus_w;
/// let P = DMatrix::from_row_slice(1, 1, &[1.0]);
/// let M_inv = DMatrix::from_row_slice(1, 1, &[1.0]);
/// let D = DMatrix::from_row_slice(1, 1, &[3.0]);
/// let V = DMatrix::from_row_slice(1, 1, &[1.0]);
/// let T = DMatrix::from_row_slice(1, 1, &[1.0]);
/// let G = DMatrix::from_row_slice(1, 1, &[1.0]);
/// let posterior = m_plus_w(&P, &M_inv, &D, &V, &T, &G, false).unwrap();
/// assert_eq!(posterior.P[(0, 0)], 2.0);
/// assert_eq!(posterior.M[(0, 0)], 0.5);
/// ```
pub fn m_plus_w<N: RealField>(
    P: &DMatrix<N>,
    M_inv: &DMatrix<N>,
    D: &DMatrix<N>,
    V: &DMatrix<N>,
    T: &DMatrix<N>,
    G: &DMatrix<N>,
    verbose: bool,
) -> Result<Posterior<N>, EstimateError> {
    let GtVI = G.transpose() * matrix::inverse(V, "V")?;

    let Y = &GtVI * (D - T);
    trace_step("Y", &Y, verbose);
    let W = &GtVI * G;
    trace_step("W", &W, verbose);

    let M_prime = matrix::inverse(&(M_inv + &W), "M_inv + W")?;
    trace_step("M_prime", &M_prime, verbose);
    let P_prime = P + &M_prime * Y;
    trace_step("P_prime", &P_prime, verbose);

    Ok(Posterior { P: P_prime, M: M_prime })
}

fn trace_step<N: RealField>(name: &str, value: &DMatrix<N>, verbose: bool) {
    if verbose {
        println!("\n{}: {}", name, value);
    }
    log::debug!("M+W {}: {}", name, value);
}
