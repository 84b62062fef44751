//! # Reading the current solution
//!
//! The values of the basic variables are in the free column; non-basic variables are zero.
use itertools::repeat_n;

use crate::algorithm::simplex::tableau::Tableau;
use crate::data::number_types::traits::Real;

impl<F: Real> Tableau<F> {
    /// The current basic solution.
    ///
    /// # Return value
    ///
    /// A vector of length `(nr_rows - 1) + (nr_columns - 1)`: the values of the basic variables in
    /// row order, followed by a zero for every non-basic variable. Use `basic_variables` and
    /// `variables` to map positions to variable ids.
    pub fn solution(&self) -> Vec<F> {
        let free_column = self.free_column();
        let nr_basic = self.nr_rows() - 1;

        free_column[..nr_basic].iter()
            .copied()
            .chain(repeat_n(F::zero(), self.nr_columns() - 1))
            .collect()
    }

    /// Value of the objective function for the current solution.
    pub fn objective(&self) -> F {
        self.free_column()[self.nr_rows() - 1]
    }
}
