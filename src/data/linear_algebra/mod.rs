//! # Linear algebra primitives
//!
//! The dense matrix from which a tableau is built.

pub mod matrix;
