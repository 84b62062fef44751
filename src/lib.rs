//! # Dense simplex tableau iterations
//!
//! The computational core of one iteration of the simplex method on a dense tableau: the
//! Gauss-Jordan pivot, the ratio test used to find a leaving variable, the bookkeeping of basic
//! and non-basic variables and the extraction of the current solution.
//!
//! Every bulk operation runs data-parallel. The pivot never writes into the buffer it reads from;
//! it computes a fresh generation of the tableau and publishes it as a whole.
//!
//! Choosing the entering column, testing for optimality and driving the iterations are left to
//! the caller.
#![warn(missing_docs)]

pub mod algorithm;
pub mod config;
pub mod data;
pub mod error;

#[cfg(test)]
mod tests;
