//! PPP+Estimate, generalized least squares and Bayesian estimation of normalization constants.
//!
//! Measurements often share a common uncertainty, such as a normalization constant multiplying several counts.
//! Least squares averaging of such correlated data can be biased, a phenomenon known as Peelle's Pertinent Puzzle (PPP).
//!
//! The library provides
//! - [`gls`] the generalized least squares estimate and its uncertainty,
//! - [`ppp`] a test of whether a covariance will show PPP under GLS averaging,
//! - [`mw`] the M+W Bayesian update of prior parameters by data,
//! - [`normalization`] Methods 1, 2, 2a and 2b which estimate a true value from counts with an uncertain normalization.
//!
//! Matrices are `nalgebra` dynamic matrices. The numerical implementation is generic over the scalar type.
//! Inputs to the GLS functions may be any matrix-like [`Array`] and are validated before any computation.
//!
//! Each operation is a pure function. With the `verbose` flag intermediate values are printed; all values are
//! also traced with the `log` facade.
//!
//! # Licensing
//!
//! The copyright notice is that of the MIT license.
//!
//! Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the "Software"), to deal in the Software without restriction,
//! including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software,
//! and to permit persons to whom the Software is furnished to do so, subject to the following conditions:
//!
//! The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.
//!
//! THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
//! FITNESS FOR A PARTICULAR PURPOSE AND NON INFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY,
//! WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.
//!
//! [`gls`]: estimators/gls/index.html
//! [`ppp`]: ppp/index.html
//! [`mw`]: estimators/mw/index.html
//! [`normalization`]: estimators/normalization/index.html
//! [`Array`]: matrix/enum.Array.html

pub mod error;
pub mod estimators;
pub mod matrix;
pub mod models;
pub mod ppp;

pub use error::{EstimateError, ShapeError};
pub use estimators::gls::{gls_estimate, gls_uncertainty};
pub use estimators::mw::m_plus_w;
pub use estimators::normalization::{method1, method2, method2_named, method2a, method2b};
pub use matrix::Array;
pub use models::{Method, Method2Variant, Posterior, Source};
pub use ppp::detect_ppp;
