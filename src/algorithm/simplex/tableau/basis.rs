//! # Basis bookkeeping
//!
//! Which variable occupies which row of the tableau, and which variable each non-basic column
//! stands for.
use std::collections::HashSet;
use std::mem;

use crate::error::{Axis, check_index, EngineError, EngineResult};

/// The variable identities of the tableau's rows and non-basic columns.
///
/// Every variable id appears exactly once, in one of the two arrays. This is checked at creation
/// and preserved by `swap`, the only way to change the basis.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Basis {
    /// Variable of each constraint row; the objective row has none.
    basic_variables: Vec<usize>,
    /// Variable of each non-free column; slot `s` belongs to column `s + 1`.
    variables: Vec<usize>,
}

impl Basis {
    /// Create a basis for a tableau of the given dimensions.
    ///
    /// # Arguments
    ///
    /// * `basic_variables`: One variable id for every row except the objective row.
    /// * `variables`: One variable id for every column except the free column.
    /// * `nr_rows`: Number of tableau rows, objective row included.
    /// * `nr_columns`: Number of tableau columns, free column included.
    ///
    /// # Return value
    ///
    /// A `ShapeMismatch` error when an array has the wrong length, or when the two arrays don't
    /// partition the variable ids.
    pub fn new(
        basic_variables: Vec<usize>,
        variables: Vec<usize>,
        nr_rows: usize,
        nr_columns: usize,
    ) -> EngineResult<Self> {
        debug_assert!(nr_rows > 0 && nr_columns > 0);

        if basic_variables.len() != nr_rows - 1 {
            return Err(EngineError::ShapeMismatch(format!(
                "expected {} basic variables for {} rows, got {}",
                nr_rows - 1, nr_rows, basic_variables.len(),
            )));
        }
        if variables.len() != nr_columns - 1 {
            return Err(EngineError::ShapeMismatch(format!(
                "expected {} non-basic variables for {} columns, got {}",
                nr_columns - 1, nr_columns, variables.len(),
            )));
        }

        let mut seen = HashSet::with_capacity(basic_variables.len() + variables.len());
        if let Some(duplicate) = basic_variables.iter().chain(&variables).find(|&&id| !seen.insert(id)) {
            return Err(EngineError::ShapeMismatch(format!(
                "variable {} is assigned more than once", duplicate,
            )));
        }

        Ok(Self { basic_variables, variables })
    }

    /// Exchange a basic variable with a non-basic variable.
    ///
    /// Called after a pivot on (`basic_row`, `non_basic_slot + 1`): the variable of that row
    /// leaves the basis and takes the place of the variable that entered.
    ///
    /// # Arguments
    ///
    /// * `basic_row`: Row index in `0..nr_rows - 1`.
    /// * `non_basic_slot`: Slot index in `0..nr_columns - 1`.
    pub fn swap(&mut self, basic_row: usize, non_basic_slot: usize) -> EngineResult<()> {
        check_index(Axis::BasicVariable, basic_row, self.basic_variables.len())?;
        check_index(Axis::Variable, non_basic_slot, self.variables.len())?;

        mem::swap(&mut self.basic_variables[basic_row], &mut self.variables[non_basic_slot]);

        Ok(())
    }

    /// Variable ids of the constraint rows.
    pub fn basic_variables(&self) -> &[usize] {
        &self.basic_variables
    }

    /// Variable ids of the non-basic columns.
    pub fn variables(&self) -> &[usize] {
        &self.variables
    }

    /// Variable occupying constraint row `row`.
    pub fn basic_variable(&self, row: usize) -> Option<usize> {
        self.basic_variables.get(row).copied()
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::simplex::tableau::basis::Basis;
    use crate::error::{Axis, EngineError};

    fn basis() -> Basis {
        Basis::new(vec![3, 4], vec![0, 1, 2], 3, 4).unwrap()
    }

    #[test]
    fn swap() {
        let mut basis = basis();

        assert_eq!(basis.swap(1, 0), Ok(()));
        assert_eq!(basis.basic_variables(), &[3, 0]);
        assert_eq!(basis.variables(), &[4, 1, 2]);
        assert_eq!(basis.basic_variable(1), Some(0));
        assert_eq!(basis.basic_variable(2), None);
    }

    #[test]
    fn swap_twice_restores() {
        let original = basis();
        let mut basis = original.clone();

        basis.swap(0, 2).unwrap();
        assert_ne!(basis, original);
        basis.swap(0, 2).unwrap();
        assert_eq!(basis, original);
    }

    #[test]
    fn swap_out_of_bounds() {
        let mut basis = basis();

        assert_eq!(
            basis.swap(2, 0),
            Err(EngineError::InvalidIndex { axis: Axis::BasicVariable, index: 2, bound: 2 }),
        );
        assert_eq!(
            basis.swap(0, 3),
            Err(EngineError::InvalidIndex { axis: Axis::Variable, index: 3, bound: 3 }),
        );
        assert_eq!(basis, self::basis());
    }

    #[test]
    fn wrong_lengths() {
        assert!(matches!(Basis::new(vec![3], vec![0, 1, 2], 3, 4), Err(EngineError::ShapeMismatch(_))));
        assert!(matches!(Basis::new(vec![3, 4], vec![0, 1], 3, 4), Err(EngineError::ShapeMismatch(_))));
        assert!(Basis::new(vec![], vec![], 1, 1).is_ok());
    }

    #[test]
    fn not_a_partition() {
        assert!(matches!(Basis::new(vec![3, 3], vec![0, 1, 2], 3, 4), Err(EngineError::ShapeMismatch(_))));
        assert!(matches!(Basis::new(vec![3, 4], vec![0, 4, 2], 3, 4), Err(EngineError::ShapeMismatch(_))));
    }
}
