//! # Scenario tests that require a look inside the crate.
//!
//! A small driver maximizes a linear program by repeatedly selecting the column with the most
//! negative objective coefficient, running the ratio test, pivoting and recording the basis
//! change. Each problem module builds a tableau and checks the iterations.
//!
//! Convention for function names:
//!
//! * `fn matrix()`
//! * `fn tableau()`
use crate::algorithm::simplex::ratio_test::RatioPolicy;
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::number_types::traits::Real;


/// How a run of `maximize` ended.
#[derive(Debug, Eq, PartialEq)]
pub enum Outcome {
    Optimal { iterations: usize },
    Unbounded { column: usize },
}

/// Index of the most negative objective coefficient, if any is negative.
pub fn entering_column<F: Real>(tableau: &Tableau<F>) -> Option<usize> {
    let epsilon = tableau.config().epsilon;
    let objective_row = tableau.row(tableau.nr_rows() - 1).unwrap();

    let mut smallest: Option<(usize, F)> = None;
    for (j, &cost) in objective_row.iter().enumerate().skip(1) {
        if cost < -epsilon && smallest.map_or(true, |(_, existing)| cost < existing) {
            smallest = Some((j, cost));
        }
    }

    smallest.map(|(j, _)| j)
}

/// Iterate until no objective coefficient is negative.
pub fn maximize<F: Real>(tableau: &mut Tableau<F>) -> Outcome {
    let mut iterations = 0;
    loop {
        let Some(column) = entering_column(tableau) else {
            break Outcome::Optimal { iterations };
        };

        let ratios = tableau.ratios(0, column, &RatioPolicy::primal()).unwrap();
        let Some(row) = tableau.select_leaving_row(&ratios).unwrap() else {
            break Outcome::Unbounded { column };
        };

        tableau.pivot(row, column).unwrap();
        tableau.swap(row, column - 1).unwrap();
        iterations += 1;
    }
}
