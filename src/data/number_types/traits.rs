//! # Traits
//!
//! The bounds a number type needs to satisfy to be stored in a tableau that is shared between
//! worker threads.
use std::fmt::{Debug, Display};

use num_traits::Float;

/// A floating point number that can be sent to, and shared between, worker threads.
///
/// Automatically implemented for all types satisfying the trait's bounds, in practice `f32` and
/// `f64`.
pub trait Real: Float + Send + Sync + Debug + Display + 'static {
    /// Lossy conversion used when reporting a value in an error.
    fn to_report(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    /// Whether this value is too close to zero to divide by.
    ///
    /// `NaN` counts as too close.
    fn is_negligible(self, epsilon: Self) -> bool {
        !(self.abs() > epsilon)
    }
}
impl<T: Float + Send + Sync + Debug + Display + 'static> Real for T {
}
