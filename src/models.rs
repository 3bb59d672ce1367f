#![allow(non_snake_case)]

//! Estimation models.
//!
//! The posterior of an estimate is represented as a struct.
//! The normalization methods are selected by closed enumerations which are parsed from their tags at the boundary.

use std::fmt;
use std::str::FromStr;

use na::{DMatrix, RealField};
use nalgebra as na;

use crate::error::EstimateError;

/// Posterior of a Bayesian update.
///
/// Linear representation as the parameter column vector and the parameter covariance (symmetric positive
/// semi-definite) matrix.
#[derive(Debug, PartialEq, Clone)]
pub struct Posterior<N: RealField> {
    /// Parameters, p x 1
    pub P: DMatrix<N>,
    /// Parameter covariance, p x p
    pub M: DMatrix<N>,
}

impl<N: RealField> Posterior<N> {
    /// Standard deviation of each parameter.
    pub fn standard_deviations(&self) -> DMatrix<N> {
        DMatrix::from_iterator(self.M.nrows(), 1, self.M.diagonal().iter().map(|&d| d.sqrt()))
    }

    /// A printable report of the parameters and their uncertainties.
    pub fn report(&self) -> Report<'_, N> {
        Report { posterior: self }
    }
}

impl<N: RealField> From<Posterior<N>> for (DMatrix<N>, DMatrix<N>) {
    fn from(posterior: Posterior<N>) -> Self {
        (posterior.P, posterior.M)
    }
}

/// Parameters with their uncertainties, one `value +/- sd` line per parameter.
///
/// Values are rounded to 4 decimals for comparison with published worked examples.
pub struct Report<'a, N: RealField> {
    posterior: &'a Posterior<N>,
}

impl<'a, N: RealField> fmt::Display for Report<'a, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sd = self.posterior.standard_deviations();
        for (z, dz) in self.posterior.P.column(0).iter().zip(sd.iter()) {
            writeln!(f, "{:.4} +/- {:.4}", z, dz)?;
        }
        Ok(())
    }
}

/// Source of a quantity used to build a covariance: the measurement or the theory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Measured values, tag `exp`.
    Experimental,
    /// Values predicted from the prior parameters, tag `theo`.
    Theoretical,
}

impl Source {
    pub fn tag(self) -> &'static str {
        match self {
            Source::Experimental => "exp",
            Source::Theoretical => "theo",
        }
    }
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exp" => Ok(Source::Experimental),
            "theo" => Ok(Source::Theoretical),
            _ => Err(s.to_string()),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Variant of the Method 2 family.
///
/// Two independent axes: the source of the sensitivities in the normalization covariance, and the source of the
/// counts in the data variance and prior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Method2Variant {
    pub sensitivities: Source,
    pub counts: Source,
}

impl Method2Variant {
    pub const METHOD_2: Method2Variant = Method2Variant {
        sensitivities: Source::Experimental,
        counts: Source::Experimental,
    };
    pub const METHOD_2A: Method2Variant = Method2Variant {
        sensitivities: Source::Theoretical,
        counts: Source::Experimental,
    };
    pub const METHOD_2B: Method2Variant = Method2Variant {
        sensitivities: Source::Theoretical,
        counts: Source::Theoretical,
    };

    /// Parse the `sens_method` and `counts_method` tags.
    ///
    /// Every unknown tag is named in the error.
    pub fn parse(sens_method: &str, counts_method: &str) -> Result<Self, EstimateError> {
        let sensitivities = sens_method.parse::<Source>();
        let counts = counts_method.parse::<Source>();
        match (sensitivities, counts) {
            (Ok(sensitivities), Ok(counts)) => Ok(Method2Variant { sensitivities, counts }),
            (sensitivities, counts) => {
                let mut parameters = Vec::new();
                if let Err(value) = sensitivities {
                    parameters.push(("sens_method", value));
                }
                if let Err(value) = counts {
                    parameters.push(("counts_method", value));
                }
                Err(EstimateError::UnknownVariant { parameters })
            }
        }
    }
}

/// A normalization method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Full least squares of the raw counts with the normalization as a parameter.
    One,
    /// Normalized counts with experimental sensitivities and counts.
    Two,
    /// Normalized counts with theoretical sensitivities.
    TwoA,
    /// Normalized counts with theoretical sensitivities and counts.
    TwoB,
}

impl Method {
    /// Solve for the true value with the counts `r +/- dr` and normalization `n +/- dn`.
    pub fn solve<N: RealField>(
        self,
        r: &[N],
        dr: &[N],
        n: N,
        dn: N,
        verbose: bool,
    ) -> Result<Posterior<N>, EstimateError> {
        use crate::estimators::normalization::{method1, method2};
        match self {
            Method::One => method1(r, dr, n, dn, verbose),
            Method::Two => method2(r, dr, n, dn, Method2Variant::METHOD_2, verbose),
            Method::TwoA => method2(r, dr, n, dn, Method2Variant::METHOD_2A, verbose),
            Method::TwoB => method2(r, dr, n, dn, Method2Variant::METHOD_2B, verbose),
        }
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Method::One),
            "2" => Ok(Method::Two),
            "2a" => Ok(Method::TwoA),
            "2b" => Ok(Method::TwoB),
            _ => Err(format!("unknown method '{}'", s)),
        }
    }
}
