//! # Problem Instances
//!
//! A `ProblemInstance` is one concrete, randomized realization of a
//! [`ProblemClass`]: an [`Adjacency`] saying which variables each fitness
//! contribution reads, a parallel [`ValueTable`] of contributions, and the
//! header fields external solvers expect.
//!
//! Instances are written in a fixed text encoding (see [`wire`]). Field
//! widths and precision are part of the contract with solver readers.
//!
//! ## Example
//!
//! ```rust
//! use nkgen::cardinality::CardinalityKind;
//! use nkgen::class::ProblemClass;
//! use nkgen::distribution::DistributionKind;
//! use nkgen::instance::ProblemInstance;
//! use nkgen::linkage::LinkageKind;
//! use nkgen::rearrangement::RearrangementKind;
//! use nkgen::rng::RandomNumberGenerator;
//!
//! let class = ProblemClass::new(
//!     20,
//!     2,
//!     4,
//!     LinkageKind::NearestNeighbor,
//!     RearrangementKind::NoChange,
//!     DistributionKind::Uniform,
//!     CardinalityKind::AllUnique,
//! )
//! .unwrap();
//!
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let instance = ProblemInstance::generate(&class, &mut rng).unwrap();
//!
//! assert_eq!(instance.eval_budget(), 200);
//! assert_eq!(instance.row_width(), 3);
//! assert!(instance.to_string().starts_with("020 000200 3 20\n"));
//! ```
mod adjacency;
mod table;
pub mod wire;

pub use adjacency::Adjacency;
pub use table::ValueTable;

use crate::class::ProblemClass;
use crate::error::{GeneratorError, Result};
use crate::rng::RandomNumberGenerator;

#[derive(Debug, Clone, PartialEq)]
pub struct ProblemInstance {
    n: usize,
    eval_budget: usize,
    adjacency: Adjacency,
    table: ValueTable,
}

impl ProblemInstance {
    /// Assembles an instance, checking every structural invariant.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::MalformedInstance` if the adjacency is empty,
    /// has ragged or repeating rows, references variables outside `[0, n)`,
    /// or if the table is not parallel to it.
    pub fn new(n: usize, eval_budget: usize, adjacency: Adjacency, table: ValueTable) -> Result<Self> {
        if adjacency.is_empty() {
            return Err(GeneratorError::MalformedInstance(
                "instance has no rows".to_string(),
            ));
        }
        adjacency.validate(n)?;
        table.validate(&adjacency)?;

        Ok(Self {
            n,
            eval_budget,
            adjacency,
            table,
        })
    }

    /// Realizes `class` once, drawing all randomness from `rng`.
    ///
    /// The linkage is built and rearranged first; then a fresh value sampler
    /// is constructed for this instance alone and every table cell is drawn
    /// from it.
    pub fn generate(class: &ProblemClass, rng: &mut RandomNumberGenerator) -> Result<Self> {
        let adjacency = class.linkage().generate(class.n(), class.k(), rng)?;
        let adjacency = class.rearrangement().apply(class.n(), adjacency, rng);

        let sampler = class
            .cardinality()
            .sampler(class.distribution(), adjacency.row_width(), rng)?;
        let table = ValueTable::fill(&adjacency, &sampler, rng)?;

        Self::new(class.n(), class.eval_budget(), adjacency, table)
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn eval_budget(&self) -> usize {
        self.eval_budget
    }

    /// Variables per row, as written in the header.
    pub fn row_width(&self) -> usize {
        self.adjacency.row_width()
    }

    pub fn row_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    pub fn table(&self) -> &ValueTable {
        &self.table
    }

    /// Total fitness of a full assignment of the `n` variables.
    pub fn evaluate(&self, solution: &[bool]) -> Result<f64> {
        if solution.len() != self.n {
            return Err(GeneratorError::Configuration(format!(
                "solution has {} variables, instance has {}",
                solution.len(),
                self.n
            )));
        }

        Ok(self
            .adjacency
            .rows()
            .iter()
            .enumerate()
            .filter_map(|(r, links)| {
                let bits: Vec<bool> = links.iter().map(|&x| solution[x]).collect();
                self.table.lookup(r, &bits)
            })
            .sum::<f64>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty() {
        let result = ProblemInstance::new(4, 32, Adjacency::default(), ValueTable::default());
        assert!(matches!(result, Err(GeneratorError::MalformedInstance(_))));
    }

    #[test]
    fn test_evaluate_sums_row_contributions() {
        let adjacency = Adjacency::new(vec![vec![0, 1], vec![1, 0]]);
        let table = ValueTable::new(vec![vec![0.0, 0.1, 0.2, 0.3], vec![0.5, 0.6, 0.7, 0.8]]);
        let instance = ProblemInstance::new(2, 8, adjacency, table).unwrap();

        // x0 = 1, x1 = 0: row 0 reads (1, 0) -> cell 2, row 1 reads (0, 1) -> cell 1.
        let fitness = instance.evaluate(&[true, false]).unwrap();
        assert!((fitness - 0.8).abs() < 1e-12);
        assert!(instance.evaluate(&[true]).is_err());
    }
}
