#![allow(non_snake_case)]

//! Generalized least squares estimation.
//!
//! The GLS estimate of parameters P from data Y with covariance V and design matrix X is
//! `P = (X'.inv(V).X)^-1 . X'.inv(V).Y`.
//! `X'.inv(V).X` is the information of the estimate, its inverse the estimate's covariance.
//!
//! When no design matrix is given a column of ones is used, the estimate is then a weighted mean of the data.

use na::{DMatrix, RealField};
use nalgebra as na;

use crate::error::EstimateError;
use crate::matrix::{self, Array};

/// The GLS uncertainty, which does not depend on the data.
///
/// Returns the element-wise square root of `(X'.inv(V).X)^-1`.
/// For a single parameter this is its standard deviation. With more parameters negative covariances
/// have no square root and are NaN.
///
/// # Examples
///
/// ```
/// # use ppp_estimate::matrix::Array;
/// # use ppp_estimate::estimators::gls::gls_uncertainty;
/// let V: Array<f64> = vec![vec![0.05, 0.06], vec![0.06, 0.1125]].into();
/// let unc = gls_uncertainty(&V, None).unwrap();
/// assert!((unc[(0, 0)] - 0.21828206).abs() < 1e-8);
/// ```
pub fn gls_uncertainty<N: RealField>(V: &Array<N>, X: Option<&Array<N>>) -> Result<DMatrix<N>, EstimateError> {
    let V = matrix::check_covariance(V)?;
    let X = matrix::check_design(X, V.nrows())?;
    gls_uncertainty_matrix(&V, &X)
}

/// The GLS estimate and its uncertainty.
///
/// `Y` must be a single column with a row for each row of `V`.
pub fn gls_estimate<N: RealField>(
    Y: &Array<N>,
    V: &Array<N>,
    X: Option<&Array<N>>,
) -> Result<(DMatrix<N>, DMatrix<N>), EstimateError> {
    let V = matrix::check_covariance(V)?;
    let X = matrix::check_design(X, V.nrows())?;
    let Y = matrix::check_data(Y, V.nrows())?;
    gls_estimate_matrix(&Y, &V, &X)
}

/// [`gls_uncertainty`] of already validated matrices.
///
/// [`gls_uncertainty`]: fn.gls_uncertainty.html
pub fn gls_uncertainty_matrix<N: RealField>(V: &DMatrix<N>, X: &DMatrix<N>) -> Result<DMatrix<N>, EstimateError> {
    let VI = matrix::inverse(V, "V")?;
    let XI = matrix::inverse(&matrix::prod_spdt(X, &VI), "X'.inv(V).X")?;
    Ok(matrix::sqrt_elements(&XI))
}

/// [`gls_estimate`] of already validated matrices.
///
/// [`gls_estimate`]: fn.gls_estimate.html
pub fn gls_estimate_matrix<N: RealField>(
    Y: &DMatrix<N>,
    V: &DMatrix<N>,
    X: &DMatrix<N>,
) -> Result<(DMatrix<N>, DMatrix<N>), EstimateError> {
    let VI = matrix::inverse(V, "V")?;
    // Information X'.inv(V).X and information state X'.inv(V).Y
    let XtVI = X.transpose() * &VI;
    let I = &XtVI * X;
    let i = &XtVI * Y;
    log::trace!("GLS information {} information state {}", I, i);

    let P = matrix::inverse(&I, "X'.inv(V).X")? * i;
    let unc = gls_uncertainty_matrix(V, X)?;
    log::trace!("GLS estimate {} uncertainty {}", P, unc);

    Ok((P, unc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_mean_of_independent_data() {
        let V = DMatrix::from_row_slice(2, 2, &[1.0, 0.0, 0.0, 4.0]);
        let Y = DMatrix::from_row_slice(2, 1, &[1.0, 2.0]);
        let (P, unc) = gls_estimate_matrix(&Y, &V, &matrix::ones(2)).unwrap();
        // weights 1 and 1/4
        approx::assert_relative_eq!(P[(0, 0)], 1.2, epsilon = 1e-12);
        approx::assert_relative_eq!(unc[(0, 0)], 0.8f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn singular_covariance() {
        let V = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 1.0, 1.0]);
        assert_eq!(gls_uncertainty_matrix(&V, &matrix::ones(2)), Err(EstimateError::Singular("V")));
    }
}
