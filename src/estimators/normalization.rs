#![allow(non_snake_case)]

//! Normalization constant methods.
//!
//! Counts r +/- dr are measured with a common normalization constant n +/- dn. The true value X, with r = n.X,
//! is estimated by building the prior, covariance and sensitivities of an M+W update.
//!
//! Method 1 fits the raw counts with both X and n as parameters. The prior uncertainty of X is infinite and that of
//! n is dn.
//!
//! The Method 2 family fits the normalized counts D = r/n with X as the only parameter. The normalization
//! uncertainty is carried in the covariance of D, c = (dn/n)^2:
//! ```text
//! V(i,i) = var(i) + c.S(i).S(i)
//! V(i,j) = c.S(i).S(j)
//! ```
//! with var(i) = dr(i)^2/n^2 for experimental counts or X/n for theoretical counts, and sensitivities S(i) = D(i)
//! for experimental sensitivities or X for theoretical sensitivities.

use na::{DMatrix, RealField};
use nalgebra as na;

use crate::error::{EstimateError, ShapeError};
use crate::estimators::gls::gls_estimate_matrix;
use crate::estimators::mw::m_plus_w;
use crate::matrix;
use crate::models::{Method2Variant, Posterior, Source};

/// Method 1: least squares of the raw counts.
///
/// The prior X is the GLS average of `r`, divided by `n`.
/// Parameters of the posterior are `[X, n]`.
pub fn method1<N: RealField>(r: &[N], dr: &[N], n: N, dn: N, verbose: bool) -> Result<Posterior<N>, EstimateError> {
    check_counts(r, dr)?;
    let k = r.len();

    let D = DMatrix::from_column_slice(k, 1, r);
    let V = DMatrix::from_fn(k, k, |i, j| if i == j { dr[i] * dr[i] } else { N::zero() });
    let (D_av, _) = gls_estimate_matrix(&D, &V, &matrix::ones(k))?;

    // prior of X is the normalized average
    let X = D_av[(0, 0)] / n;
    // theory T = n.X
    let T = DMatrix::from_element(k, 1, n * X);

    // infinite prior uncertainty on X
    let mut M_inv = DMatrix::<N>::zeros(2, 2);
    M_inv[(1, 1)] = N::one() / (dn * dn);

    let G = DMatrix::from_fn(k, 2, |_, j| if j == 0 { n } else { X });
    let P = DMatrix::from_column_slice(2, 1, &[X, n]);

    let posterior = m_plus_w(&P, &M_inv, &D, &V, &T, &G, verbose)?;
    report("Method 1", &posterior, verbose);
    Ok(posterior)
}

/// Method 2 family: least squares of the normalized counts.
///
/// The covariance of the normalized counts is built from the `variant` sources.
/// Parameters of the posterior are `[X]`.
pub fn method2<N: RealField>(
    r: &[N],
    dr: &[N],
    n: N,
    dn: N,
    variant: Method2Variant,
    verbose: bool,
) -> Result<Posterior<N>, EstimateError> {
    check_counts(r, dr)?;
    let k = r.len();

    let D = DMatrix::from_iterator(k, 1, r.iter().map(|&ri| ri / n));
    let G = matrix::ones(k);

    let X = match variant.counts {
        Source::Experimental => {
            // experimental covariance does not depend on X
            let V = normalized_covariance(&D, dr, n, dn, N::zero(), Method2Variant::METHOD_2);
            gls_estimate_matrix(&D, &V, &G)?.0[(0, 0)]
        }
        Source::Theoretical => D.mean(),
    };
    let V = normalized_covariance(&D, dr, n, dn, X, variant);
    log::debug!("Method 2 {}/{} prior X {} V {}", variant.sensitivities, variant.counts, X, V);

    let T = DMatrix::from_element(k, 1, X);
    // uninformative prior on X
    let M_inv = DMatrix::<N>::zeros(1, 1);
    let P = DMatrix::from_element(1, 1, X);

    let posterior = m_plus_w(&P, &M_inv, &D, &V, &T, &G, verbose)?;
    report("Method 2", &posterior, verbose);
    Ok(posterior)
}

/// Method 2 with the `sens_method` and `counts_method` tags, `exp` or `theo`.
pub fn method2_named<N: RealField>(
    r: &[N],
    dr: &[N],
    n: N,
    dn: N,
    sens_method: &str,
    counts_method: &str,
    verbose: bool,
) -> Result<Posterior<N>, EstimateError> {
    let variant = Method2Variant::parse(sens_method, counts_method)?;
    method2(r, dr, n, dn, variant, verbose)
}

/// Method 2a: Method 2 with theoretical sensitivities.
pub fn method2a<N: RealField>(r: &[N], dr: &[N], n: N, dn: N, verbose: bool) -> Result<Posterior<N>, EstimateError> {
    method2(r, dr, n, dn, Method2Variant::METHOD_2A, verbose)
}

/// Method 2b: Method 2 with theoretical sensitivities and counts.
pub fn method2b<N: RealField>(r: &[N], dr: &[N], n: N, dn: N, verbose: bool) -> Result<Posterior<N>, EstimateError> {
    method2(r, dr, n, dn, Method2Variant::METHOD_2B, verbose)
}

/// Covariance of the normalized counts `D` with prior `X`.
fn normalized_covariance<N: RealField>(
    D: &DMatrix<N>,
    dr: &[N],
    n: N,
    dn: N,
    X: N,
    variant: Method2Variant,
) -> DMatrix<N> {
    let c = (dn * dn) / (n * n);
    let S = |i: usize| match variant.sensitivities {
        Source::Experimental => D[(i, 0)],
        Source::Theoretical => X,
    };
    let var = |i: usize| match variant.counts {
        Source::Experimental => dr[i] * dr[i] / (n * n),
        Source::Theoretical => X / n,
    };

    DMatrix::from_fn(D.nrows(), D.nrows(), |i, j| {
        let norm = c * S(i) * S(j);
        if i == j {
            var(i) + norm
        } else {
            norm
        }
    })
}

fn check_counts<N: RealField>(r: &[N], dr: &[N]) -> Result<(), ShapeError> {
    if dr.len() != r.len() {
        return Err(ShapeError::RowMismatch {
            what: "count uncertainties",
            rows: dr.len(),
            expected: r.len(),
        });
    }
    Ok(())
}

fn report<N: RealField>(method: &str, posterior: &Posterior<N>, verbose: bool) {
    if verbose {
        print!("\n{}", posterior.report());
    }
    log::debug!("{} posterior P {} M {}", method, posterior.P, posterior.M);
}
