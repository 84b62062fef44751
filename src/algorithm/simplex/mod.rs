//! # The Simplex algorithm
//!
//! The elementary operations of one simplex iteration on a dense tableau. The tableau is in the
//! form used for Jordan elimination: row `i` reads
//!
//! `y_i = s_i0 - s_i1 x_1 - ... - s_in x_n`
//!
//! where the `x_j` are the non-basic variables, the `y_i` the basic variables and the last row is
//! the objective function. Column `0` is the free column.
//!
//! A caller drives the iterations: it selects an entering column, uses the ratio test to find the
//! leaving row, pivots and records the basis change, until it decides that the tableau is optimal
//! or unbounded.

pub mod pivot;
pub mod solution;
pub mod tableau;
