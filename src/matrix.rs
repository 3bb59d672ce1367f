#![allow(non_snake_case)]

//! Matrix inputs and their validation.
//!
//! Numeric inputs are accepted as anything coercible to a matrix: flat sequences, rectangular nested
//! sequences or nalgebra matrices. The [`Array`] they are coerced to remembers whether the input was
//! one or two dimensional so the checks can reject a flat covariance.
//!
//! [`Array`]: enum.Array.html

use na::storage::Storage;
use na::{DMatrix, Dim, Matrix, RealField, Scalar};
use nalgebra as na;

use crate::error::{EstimateError, ShapeError};

/// A matrix-like numeric input.
#[derive(Debug, Clone, PartialEq)]
pub enum Array<N: Scalar> {
    /// One dimensional sequence.
    Flat(Vec<N>),
    /// Sequence of rows, must be rectangular.
    Nested(Vec<Vec<N>>),
    /// Dense matrix.
    Dense(DMatrix<N>),
}

impl<N: Scalar> Array<N> {
    /// Number of dimensions of the input, 1 for a flat sequence.
    pub fn ndim(&self) -> usize {
        match self {
            Array::Flat(_) => 1,
            Array::Nested(_) | Array::Dense(_) => 2,
        }
    }

    /// Size of the leading dimension.
    pub fn nrows(&self) -> usize {
        match self {
            Array::Flat(v) => v.len(),
            Array::Nested(rows) => rows.len(),
            Array::Dense(m) => m.nrows(),
        }
    }

    /// Materialize as a dense matrix.
    ///
    /// A flat sequence becomes a column.
    pub fn to_matrix(&self) -> Result<DMatrix<N>, ShapeError> {
        match self {
            Array::Flat(v) => Ok(DMatrix::from_column_slice(v.len(), 1, v)),
            Array::Nested(rows) => {
                let cols = rows.first().map_or(0, |r| r.len());
                if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
                    return Err(ShapeError::NotRectangular {
                        row,
                        len: r.len(),
                        expected: cols,
                    });
                }
                Ok(DMatrix::from_fn(rows.len(), cols, |i, j| rows[i][j].clone()))
            }
            Array::Dense(m) => Ok(m.clone()),
        }
    }
}

impl<N: Scalar> From<Vec<N>> for Array<N> {
    fn from(v: Vec<N>) -> Self {
        Array::Flat(v)
    }
}

impl<N: Scalar> From<&[N]> for Array<N> {
    fn from(v: &[N]) -> Self {
        Array::Flat(v.to_vec())
    }
}

impl<N: Scalar, const R: usize> From<[N; R]> for Array<N> {
    fn from(v: [N; R]) -> Self {
        Array::Flat(v.to_vec())
    }
}

impl<N: Scalar> From<Vec<Vec<N>>> for Array<N> {
    fn from(rows: Vec<Vec<N>>) -> Self {
        Array::Nested(rows)
    }
}

impl<N: Scalar, const R: usize, const C: usize> From<[[N; C]; R]> for Array<N> {
    fn from(rows: [[N; C]; R]) -> Self {
        Array::Nested(rows.iter().map(|row| row.to_vec()).collect())
    }
}

impl<N: Scalar, R: Dim, C: Dim, S: Storage<N, R, C>> From<Matrix<N, R, C, S>> for Array<N> {
    fn from(m: Matrix<N, R, C, S>) -> Self {
        Array::Dense(DMatrix::from_iterator(m.nrows(), m.ncols(), m.iter().cloned()))
    }
}

/// Column of ones, the design matrix of an unweighted mean.
pub fn ones<N: RealField>(n: usize) -> DMatrix<N> {
    DMatrix::from_element(n, 1, N::one())
}

/// Checks a covariance matrix is 2-D and square.
pub fn check_covariance<N: RealField>(V: &Array<N>) -> Result<DMatrix<N>, ShapeError> {
    if V.ndim() != 2 {
        return Err(ShapeError::NotTwoDimensional { ndim: V.ndim() });
    }
    let V = V.to_matrix()?;
    if !V.is_square() {
        return Err(ShapeError::NotSquare {
            rows: V.nrows(),
            cols: V.ncols(),
        });
    }
    Ok(V)
}

/// Checks a design matrix has `n` rows, defaulting to a column of ones when absent.
pub fn check_design<N: RealField>(X: Option<&Array<N>>, n: usize) -> Result<DMatrix<N>, ShapeError> {
    match X {
        None => Ok(ones(n)),
        Some(X) => {
            let X = X.to_matrix()?;
            if X.nrows() != n {
                return Err(ShapeError::RowMismatch {
                    what: "design matrix",
                    rows: X.nrows(),
                    expected: n,
                });
            }
            Ok(X)
        }
    }
}

/// Checks data is a single column of `n` rows.
pub fn check_data<N: RealField>(Y: &Array<N>, n: usize) -> Result<DMatrix<N>, ShapeError> {
    let Y = Y.to_matrix()?;
    if Y.ncols() != 1 {
        return Err(ShapeError::NotColumn { cols: Y.ncols() });
    }
    if Y.nrows() != n {
        return Err(ShapeError::RowMismatch {
            what: "data",
            rows: Y.nrows(),
            expected: n,
        });
    }
    Ok(Y)
}

/// Inverse of a square matrix.
///
/// `what` names the matrix in the error when it is singular.
pub fn inverse<N: RealField>(M: &DMatrix<N>, what: &'static str) -> Result<DMatrix<N>, EstimateError> {
    M.clone().try_inverse().ok_or(EstimateError::Singular(what))
}

/// Computes the quadratic form `X' * S * X`.
pub fn prod_spdt<N: RealField>(X: &DMatrix<N>, S: &DMatrix<N>) -> DMatrix<N> {
    X.transpose() * S * X
}

/// Element-wise square root.
///
/// Negative elements become NaN.
pub fn sqrt_elements<N: RealField>(M: &DMatrix<N>) -> DMatrix<N> {
    M.map(|e| e.sqrt())
}
