//! # Tableau generations
//!
//! A generation is one immutable version of the tableau values, together with the cached free
//! column. Pivoting never edits a generation: it reads the current one and builds the next.
use rayon::prelude::*;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::traits::Real;
use crate::error::{EngineError, EngineResult};

/// Row-major tableau values and a copy of column `0`.
///
/// The free column always equals column `0` of `data`; both are only ever produced together.
#[derive(Debug, Clone, PartialEq)]
pub struct Generation<F> {
    /// Values, row after row, `nr_rows * nr_columns` in total.
    data: Vec<F>,
    /// Copy of column `0`.
    free_column: Vec<F>,
    nr_rows: usize,
    nr_columns: usize,
    /// How many pivots lie between this generation and the initial tableau.
    number: u64,
}

impl<F: Real> Generation<F> {
    /// Lay out a matrix as the first generation.
    ///
    /// The copy runs in parallel over all `rows * columns` cells.
    pub fn from_matrix(matrix: &DenseMatrix<F>) -> Self {
        let nr_columns = matrix.nr_columns();
        let data = (0..matrix.size())
            .into_par_iter()
            .map(|index| matrix.get_value(index / nr_columns, index % nr_columns))
            .collect();

        Self::with_free_column(data, matrix.nr_rows(), nr_columns, 0)
    }

    /// Wrap row-major values.
    ///
    /// # Arguments
    ///
    /// * `data`: Values, row after row.
    /// * `nr_rows`: Number of rows, at least one.
    /// * `nr_columns`: Number of columns, at least one.
    /// * `number`: Number of pivots that produced these values.
    ///
    /// # Return value
    ///
    /// A `ShapeMismatch` error if the dimensions don't describe `data`.
    pub fn from_row_major(
        data: Vec<F>,
        nr_rows: usize,
        nr_columns: usize,
        number: u64,
    ) -> EngineResult<Self> {
        if nr_rows == 0 || nr_columns == 0 || nr_rows.checked_mul(nr_columns) != Some(data.len()) {
            return Err(EngineError::ShapeMismatch(format!(
                "{} values can't form a {} x {} tableau", data.len(), nr_rows, nr_columns,
            )));
        }

        Ok(Self::with_free_column(data, nr_rows, nr_columns, number))
    }

    /// Derive the free column from fully computed values.
    pub(crate) fn with_free_column(
        data: Vec<F>,
        nr_rows: usize,
        nr_columns: usize,
        number: u64,
    ) -> Self {
        debug_assert_eq!(data.len(), nr_rows * nr_columns);

        let free_column = data.par_iter()
            .step_by(nr_columns)
            .copied()
            .collect();

        Self { data, free_column, nr_rows, nr_columns, number }
    }

    /// Value at coordinate (`i`, `j`).
    pub fn value(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i * self.nr_columns + j]
    }

    /// Borrow row `i`.
    pub fn row_slice(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows);

        &self.data[i * self.nr_columns..(i + 1) * self.nr_columns]
    }

    /// Independent copy of row `i`.
    pub fn row(&self, i: usize) -> Vec<F> {
        self.row_slice(i).par_iter().copied().collect()
    }

    /// Independent copy of column `j`, gathered in parallel over the rows.
    pub fn column(&self, j: usize) -> Vec<F> {
        debug_assert!(j < self.nr_columns);

        (0..self.nr_rows)
            .into_par_iter()
            .map(|i| self.data[i * self.nr_columns + j])
            .collect()
    }

    /// All values, row after row.
    pub fn data(&self) -> &[F] {
        &self.data
    }

    /// The cached copy of column `0`.
    pub fn free_column(&self) -> &[F] {
        &self.free_column
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of columns.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Number of pivots that lie between this generation and the initial tableau.
    pub fn number(&self) -> u64 {
        self.number
    }
}
