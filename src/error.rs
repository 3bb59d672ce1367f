//! Estimation errors.
//!
//! Shape errors are raised before any numerical work is done.
//! A singular matrix is fatal to an estimate, there is no recovery or regularisation.

use thiserror::Error;

/// Input matrices of the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("covariance matrix must be 2-D, got {ndim}-D input")]
    NotTwoDimensional { ndim: usize },

    #[error("covariance matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("{what} must have the same number of rows as the covariance matrix: {rows} != {expected}")]
    RowMismatch {
        what: &'static str,
        rows: usize,
        expected: usize,
    },

    #[error("data must be a single column, got {cols} columns")]
    NotColumn { cols: usize },

    #[error("row {row} has {len} elements, expected {expected}")]
    NotRectangular {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// Failure of an estimate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// The named matrix has no inverse.
    #[error("{0} is singular")]
    Singular(&'static str),

    /// Mode selectors which are neither `exp` nor `theo`, as (parameter, value) pairs.
    #[error("unknown variant for {}", describe_variants(.parameters))]
    UnknownVariant {
        parameters: Vec<(&'static str, String)>,
    },
}

fn describe_variants(parameters: &[(&'static str, String)]) -> String {
    parameters
        .iter()
        .map(|(name, value)| format!("{} = '{}'", name, value))
        .collect::<Vec<_>>()
        .join(", ")
}
