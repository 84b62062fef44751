//! # Storing of tableau data in memory
//!
//! Number types the engine computes with and the dense matrix it is built from. Algorithms
//! keep their own data structures under `algorithm::simplex`.

pub mod linear_algebra;
pub mod number_types;
