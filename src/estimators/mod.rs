//! A collection of linear estimators.

pub mod gls;
pub mod mw;
pub mod normalization;
