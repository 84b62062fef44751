//! # Pivoting
//!
//! One Jordan elimination step: the variable of the pivot row leaves the basis and the variable
//! of the pivot column enters it.
//!
//! With pivot value `p = old[r][k]`, every cell of the next generation is
//!
//! * `new[r][k] = 1 / p`
//! * `new[r][j] = old[r][j] / p` for `j != k`
//! * `new[i][k] = -old[i][k] / p` for `i != r`
//! * `new[i][j] = old[i][j] - old[i][k] * old[r][j] / p` otherwise.
//!
//! Most cells depend on the pivot row and pivot column of the *previous* generation, which are
//! themselves being rewritten. All cells are therefore read from the previous generation and
//! written into a fresh buffer, which replaces the previous generation once complete.
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::algorithm::simplex::tableau::generation::Generation;
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::number_types::traits::Real;
use crate::error::{Axis, check_index, EngineError, EngineResult};

impl<F: Real> Tableau<F> {
    /// Pivot on (`pivot_row`, `pivot_column`).
    ///
    /// The next generation is computed in parallel and published as a whole. The free column is
    /// derived from the new values before publication.
    ///
    /// # Arguments
    ///
    /// * `pivot_row`: Row index in `0..self.nr_rows()`.
    /// * `pivot_column`: Column index in `0..self.nr_columns()`.
    ///
    /// # Return value
    ///
    /// `InvalidIndex` for an index out of bounds, `NumericalInstability` when the pivot value
    /// isn't larger than the configured epsilon in absolute value. On error, the tableau is
    /// unchanged.
    pub fn pivot(&mut self, pivot_row: usize, pivot_column: usize) -> EngineResult<()> {
        check_index(Axis::Row, pivot_row, self.nr_rows())?;
        check_index(Axis::Column, pivot_column, self.nr_columns())?;

        let pivot_value = self.generation().value(pivot_row, pivot_column);
        let epsilon = self.config().epsilon;
        if pivot_value.is_negligible(epsilon) {
            warn!(pivot_row, pivot_column, value = %pivot_value, "rejected pivot");
            return Err(EngineError::NumericalInstability {
                row: pivot_row,
                column: pivot_column,
                magnitude: pivot_value.abs().to_report(),
                epsilon: epsilon.to_report(),
            });
        }

        let previous = self.snapshot();
        let next = self.install(|| jordan_elimination(&previous, pivot_row, pivot_column));
        self.replace_generation(next);

        debug!(
            pivot_row,
            pivot_column,
            generation = self.generation().number(),
            "pivoted",
        );
        Ok(())
    }
}

/// Compute the generation following `previous` for a pivot on (`pivot_row`, `pivot_column`).
///
/// Reads only from `previous` and writes only into the returned generation. Each output cell is
/// computed independently, in parallel over all `rows * columns` cells.
///
/// The caller is responsible for the indices being in bounds and the pivot value being nonzero.
pub fn jordan_elimination<F: Real>(
    previous: &Generation<F>,
    pivot_row: usize,
    pivot_column: usize,
) -> Generation<F> {
    let nr_rows = previous.nr_rows();
    let nr_columns = previous.nr_columns();
    debug_assert!(pivot_row < nr_rows);
    debug_assert!(pivot_column < nr_columns);

    let old = previous.data();
    let pivot_value = old[pivot_row * nr_columns + pivot_column];
    let row_values = previous.row_slice(pivot_row);

    let data = (0..old.len())
        .into_par_iter()
        .with_min_len(nr_columns)
        .map(|index| {
            let (i, j) = (index / nr_columns, index % nr_columns);
            match (i == pivot_row, j == pivot_column) {
                (true, true) => F::one() / pivot_value,
                (true, false) => old[index] / pivot_value,
                (false, true) => -(old[index] / pivot_value),
                (false, false) => {
                    let column_value = old[i * nr_columns + pivot_column];
                    old[index] - (column_value * row_values[j]) / pivot_value
                },
            }
        })
        .collect();

    Generation::with_free_column(data, nr_rows, nr_columns, previous.number() + 1)
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::algorithm::simplex::pivot::jordan_elimination;
    use crate::algorithm::simplex::tableau::generation::Generation;
    use crate::algorithm::simplex::tableau::Tableau;
    use crate::config::EngineConfig;
    use crate::data::linear_algebra::matrix::DenseMatrix;
    use crate::error::{Axis, EngineError};

    fn matrix() -> DenseMatrix<f64> {
        DenseMatrix::from_data(vec![
            vec![4f64, 1f64, 2f64, 3f64],
            vec![6f64, 0f64, 1f64, 1f64],
            vec![10f64, -2f64, -3f64, 0f64],
        ]).unwrap()
    }

    fn tableau() -> Tableau<f64> {
        Tableau::new(&matrix(), vec![4, 5], vec![0, 1, 2]).unwrap()
    }

    #[test]
    fn unit_pivot() {
        let mut tableau = tableau();
        tableau.pivot(0, 1).unwrap();

        assert_eq!(tableau.row(0).unwrap(), vec![4f64, 1f64, 2f64, 3f64]);
        assert_eq!(tableau.row(1).unwrap(), vec![6f64, 0f64, 1f64, 1f64]);
        assert_eq!(tableau.row(2).unwrap(), vec![18f64, 2f64, 1f64, 6f64]);
        assert_eq!(tableau.get(2, 0), Ok(18f64));
        assert_eq!(tableau.free_column(), &[4f64, 6f64, 18f64]);
        assert_eq!(tableau.generation().number(), 1);
    }

    #[test]
    fn general_pivot() {
        let mut tableau = tableau();
        tableau.pivot(1, 2).unwrap();

        assert_eq!(tableau.row(1).unwrap(), vec![6f64, 0f64, 1f64, 1f64]);
        // Row 0: [4 - 2 * 6, 1 - 2 * 0, -2, 3 - 2 * 1]
        assert_eq!(tableau.row(0).unwrap(), vec![-8f64, 1f64, -2f64, 1f64]);
        // Row 2: [10 + 3 * 6, -2 + 3 * 0, 3, 0 + 3 * 1]
        assert_eq!(tableau.row(2).unwrap(), vec![28f64, -2f64, 3f64, 3f64]);
    }

    #[test]
    fn pivot_value_inverted() {
        let matrix = DenseMatrix::from_data(vec![
            vec![3f64, 0.4f64, -1f64],
            vec![2f64, 7f64, -0.3f64],
        ]).unwrap();
        let mut tableau = Tableau::new(&matrix, vec![2], vec![0, 1]).unwrap();

        for (i, j) in [(0, 1), (1, 2), (0, 0)] {
            let old = tableau.get(i, j).unwrap();
            tableau.pivot(i, j).unwrap();
            assert_abs_diff_eq!(tableau.get(i, j).unwrap() * old, 1f64, epsilon = 1e-12);
        }
    }

    #[test]
    fn free_column_follows() {
        let mut tableau = tableau();

        for (i, j) in [(0, 1), (1, 2), (2, 3), (0, 2)] {
            tableau.pivot(i, j).unwrap();
            assert_eq!(tableau.free_column(), tableau.column(0).unwrap());
        }
        assert_eq!(tableau.generation().number(), 4);
    }

    #[test]
    fn negligible_pivot() {
        let mut tableau = tableau();
        let before = tableau.snapshot();

        match tableau.pivot(1, 1) {
            Err(EngineError::NumericalInstability { row, column, magnitude, epsilon }) => {
                assert_eq!((row, column), (1, 1));
                assert_eq!(magnitude, 0f64);
                assert_eq!(epsilon, 1e-6);
            },
            other => panic!("expected numerical instability, got {:?}", other),
        }
        assert_eq!(*tableau.generation(), *before);
        assert_eq!(tableau.generation().number(), 0);
    }

    #[test]
    fn epsilon_configurable() {
        let matrix = DenseMatrix::from_data(vec![
            vec![1f64, 1e-4f64],
            vec![0f64, 1f64],
        ]).unwrap();

        let mut tableau = Tableau::new(&matrix, vec![1], vec![0]).unwrap();
        assert!(tableau.pivot(0, 1).is_ok());

        let config = EngineConfig::default().with_epsilon(1e-3);
        let mut tableau = Tableau::with_config(&matrix, vec![1], vec![0], config).unwrap();
        assert!(matches!(tableau.pivot(0, 1), Err(EngineError::NumericalInstability { .. })));
    }

    #[test]
    fn out_of_bounds() {
        let mut tableau = tableau();

        assert_eq!(
            tableau.pivot(3, 0),
            Err(EngineError::InvalidIndex { axis: Axis::Row, index: 3, bound: 3 }),
        );
        assert_eq!(
            tableau.pivot(0, 4),
            Err(EngineError::InvalidIndex { axis: Axis::Column, index: 4, bound: 4 }),
        );
    }

    #[test]
    fn snapshots_are_stable() {
        let mut tableau = tableau();
        let before = tableau.snapshot();

        tableau.pivot(0, 1).unwrap();

        assert_eq!(before.row(2), vec![10f64, -2f64, -3f64, 0f64]);
        assert_eq!(before.free_column(), &[4f64, 6f64, 10f64]);
        assert_eq!(before.number(), 0);
    }

    /// Apply the update rule sequentially in place, as a worker would that doesn't wait for the
    /// others: later cells see pivot row and pivot column values that were already overwritten.
    fn in_place(previous: &Generation<f64>, r: usize, k: usize) -> Vec<f64> {
        let n = previous.nr_columns();
        let mut data = previous.data().to_vec();
        let p = data[r * n + k];
        for index in 0..data.len() {
            let (i, j) = (index / n, index % n);
            data[index] = match (i == r, j == k) {
                (true, true) => 1f64 / p,
                (true, false) => data[index] / p,
                (false, true) => -data[index] / p,
                (false, false) => data[index] - data[i * n + k] * data[r * n + j] / p,
            };
        }
        data
    }

    #[test]
    fn reads_only_previous_generation() {
        let previous = Generation::from_matrix(&matrix());
        let (r, k) = (1, 2);

        let next = jordan_elimination(&previous, r, k);
        let stale = in_place(&previous, r, k);
        assert_ne!(next.data(), &stale[..]);

        let old = |i: usize, j: usize| previous.value(i, j);
        for i in (0..3).filter(|&i| i != r) {
            for j in (0..4).filter(|&j| j != k) {
                assert_abs_diff_eq!(
                    next.value(i, j),
                    old(i, j) - old(i, k) * old(r, j) / old(r, k),
                    epsilon = 1e-12,
                );
            }
        }
    }

    #[test]
    fn pivot_twice_restores() {
        let original = Generation::from_matrix(&matrix());

        let once = jordan_elimination(&original, 2, 1);
        let twice = jordan_elimination(&once, 2, 1);

        assert_eq!(twice.number(), 2);
        for (x, y) in twice.data().iter().zip(original.data()) {
            assert_abs_diff_eq!(*x, *y, epsilon = 1e-12);
        }
    }
}
