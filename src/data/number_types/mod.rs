//! # Number types
//!
//! The tableau is defined over floating point numbers only. Rounding errors accumulate over the
//! iterations; the engine doesn't try to correct for them beyond rejecting pivots that are too
//! close to zero.
pub mod traits;
