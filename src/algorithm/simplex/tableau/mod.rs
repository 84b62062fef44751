//! # Data structures for Simplex
//!
//! Contains the dense simplex tableau and the bookkeeping of its basis. The tableau values are
//! held in an immutable `Generation` that is replaced as a whole by every pivot.
use std::sync::Arc;

use rayon::ThreadPool;
use tracing::{debug, trace};

use crate::algorithm::simplex::tableau::basis::Basis;
use crate::algorithm::simplex::tableau::generation::Generation;
use crate::config::EngineConfig;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::traits::Real;
use crate::error::{Axis, check_index, EngineResult};

pub mod basis;
pub mod generation;

/// The dense simplex tableau, owned by the loop that drives the iterations.
///
/// Operations take `&mut self` when they change the tableau, so that no read can overlap with a
/// pivot or a basis change.
#[derive(Debug)]
pub struct Tableau<F> {
    /// Current values.
    ///
    /// This attribute is replaced, never modified, by a pivot. Snapshots handed out earlier keep
    /// the generation they were taken from.
    generation: Arc<Generation<F>>,

    /// Maps rows and non-basic columns to variable ids.
    ///
    /// This attribute changes with a basis change.
    basis: Basis,

    config: EngineConfig<F>,
    /// Dedicated workers, if the configuration asks for them.
    pool: Option<ThreadPool>,
}

impl<F: Real> Tableau<F> {
    /// Create a tableau with the default configuration.
    ///
    /// # Arguments
    ///
    /// * `matrix`: Initial tableau; the last row is the objective function, column `0` the free
    /// column.
    /// * `basic_variables`: Variable id of each row except the last.
    /// * `variables`: Variable id of each column except the first.
    ///
    /// # Return value
    ///
    /// A `ShapeMismatch` error if the variable ids don't fit the matrix.
    pub fn new(
        matrix: &DenseMatrix<F>,
        basic_variables: Vec<usize>,
        variables: Vec<usize>,
    ) -> EngineResult<Self> {
        Self::with_config(matrix, basic_variables, variables, EngineConfig::default())
    }

    /// Create a tableau with a specific configuration.
    ///
    /// See `Tableau::new`. Fails also when the configuration doesn't validate or its thread pool
    /// can't be built.
    pub fn with_config(
        matrix: &DenseMatrix<F>,
        basic_variables: Vec<usize>,
        variables: Vec<usize>,
        config: EngineConfig<F>,
    ) -> EngineResult<Self> {
        config.validate()?;
        let basis = Basis::new(basic_variables, variables, matrix.nr_rows(), matrix.nr_columns())?;
        let pool = config.build_pool()?;

        let generation = run_on(pool.as_ref(), || Generation::from_matrix(matrix));
        let tableau = Self { generation: Arc::new(generation), basis, config, pool };

        debug!(
            nr_rows = tableau.nr_rows(),
            nr_columns = tableau.nr_columns(),
            nr_threads = tableau.config.nr_threads,
            "tableau created",
        );
        Ok(tableau)
    }

    /// Run a parallel operation on the configured workers.
    pub(crate) fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        run_on(self.pool.as_ref(), op)
    }

    /// Publish the next generation.
    pub(crate) fn replace_generation(&mut self, next: Generation<F>) {
        debug_assert_eq!(next.nr_rows(), self.nr_rows());
        debug_assert_eq!(next.nr_columns(), self.nr_columns());

        self.generation = Arc::new(next);
    }

    /// Record a basis change.
    ///
    /// Exchanges the variable of row `basic_row` with the variable in non-basic slot
    /// `non_basic_slot`, which belongs to column `non_basic_slot + 1`. A caller does this once
    /// after each pivot.
    pub fn swap(&mut self, basic_row: usize, non_basic_slot: usize) -> EngineResult<()> {
        self.basis.swap(basic_row, non_basic_slot)?;

        trace!(basic_row, non_basic_slot, "basis changed");
        Ok(())
    }

    /// Independent copy of row `i`.
    pub fn row(&self, i: usize) -> EngineResult<Vec<F>> {
        check_index(Axis::Row, i, self.nr_rows())?;

        Ok(self.install(|| self.generation.row(i)))
    }

    /// Independent copy of column `j`.
    pub fn column(&self, j: usize) -> EngineResult<Vec<F>> {
        check_index(Axis::Column, j, self.nr_columns())?;

        Ok(self.install(|| self.generation.column(j)))
    }

    /// Single value at coordinate (`i`, `j`).
    pub fn get(&self, i: usize, j: usize) -> EngineResult<F> {
        check_index(Axis::Row, i, self.nr_rows())?;
        check_index(Axis::Column, j, self.nr_columns())?;

        Ok(self.generation.value(i, j))
    }

    /// Cached copy of column `0`: the values of the basic variables, and the objective value as
    /// the last element.
    pub fn free_column(&self) -> &[F] {
        self.generation.free_column()
    }

    /// The current generation of values.
    pub fn generation(&self) -> &Generation<F> {
        &self.generation
    }

    /// Shared handle to the current generation.
    ///
    /// Remains valid, and unchanged, after later pivots.
    pub fn snapshot(&self) -> Arc<Generation<F>> {
        Arc::clone(&self.generation)
    }

    /// The basis bookkeeping.
    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    /// Variable ids of the constraint rows.
    pub fn basic_variables(&self) -> &[usize] {
        self.basis.basic_variables()
    }

    /// Variable ids of the non-basic columns.
    pub fn variables(&self) -> &[usize] {
        self.basis.variables()
    }

    /// Configuration in effect.
    pub fn config(&self) -> &EngineConfig<F> {
        &self.config
    }

    /// Number of rows in the tableau, objective row included.
    pub fn nr_rows(&self) -> usize {
        self.generation.nr_rows()
    }

    /// Number of columns in the tableau, free column included.
    pub fn nr_columns(&self) -> usize {
        self.generation.nr_columns()
    }
}

fn run_on<OP, R>(pool: Option<&ThreadPool>, op: OP) -> R
where
    OP: FnOnce() -> R + Send,
    R: Send,
{
    match pool {
        Some(pool) => pool.install(op),
        None => op(),
    }
}
