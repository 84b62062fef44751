//! # Matrix implementations
//!
//! The dense, row-major input format from which a tableau is constructed.
use std::slice::Iter;

use crate::error::{EngineError, EngineResult};

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: Copy> DenseMatrix<F> {
    /// Create a `DenseMatrix` from the provided rows.
    ///
    /// # Arguments
    ///
    /// * `data`: Rows of the matrix, all of the same, nonzero, length.
    ///
    /// # Return value
    ///
    /// A `DenseMatrix`, or a `ShapeMismatch` error when there are no rows, no columns, or rows of
    /// differing lengths.
    pub fn from_data(data: Vec<Vec<F>>) -> EngineResult<Self> {
        let (nr_rows, nr_columns) = get_data_dimensions(&data)?;

        Ok(Self { data, nr_rows, nr_columns })
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j]
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> Iter<'_, F> {
        debug_assert!(i < self.nr_rows);

        self.data[i].iter()
    }

    /// Get all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> Vec<F> {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(|row| row[j]).collect()
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Get the number of values in this matrix.
    pub fn size(&self) -> usize {
        self.nr_rows * self.nr_columns
    }
}

fn get_data_dimensions<F>(data: &[Vec<F>]) -> EngineResult<(usize, usize)> {
    let nr_rows = data.len();
    let nr_columns = data.first().map_or(0, Vec::len);

    if nr_rows == 0 || nr_columns == 0 {
        return Err(EngineError::ShapeMismatch(format!(
            "a tableau needs at least one row and one column, got {} x {}", nr_rows, nr_columns,
        )));
    }
    if let Some((i, row)) = data.iter().enumerate().find(|(_, row)| row.len() != nr_columns) {
        return Err(EngineError::ShapeMismatch(format!(
            "row {} has length {}, while the first row has length {}", i, row.len(), nr_columns,
        )));
    }

    Ok((nr_rows, nr_columns))
}
