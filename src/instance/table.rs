use crate::cardinality::ValueSampler;
use crate::error::{GeneratorError, Result};
use crate::rng::RandomNumberGenerator;

use super::Adjacency;

/// Fitness values parallel to an [`Adjacency`].
///
/// Row `r` holds `2^w` values where `w` is the width of adjacency row `r`.
/// Cell `c` is the contribution when the row's variables, read in row order
/// as the bits of `c` (first variable most significant), take those values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueTable {
    rows: Vec<Vec<f64>>,
}

impl ValueTable {
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// Fills one row per adjacency row, every cell an independent sampler call.
    pub fn fill(
        adjacency: &Adjacency,
        sampler: &ValueSampler,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        let rows = adjacency
            .rows()
            .iter()
            .map(|links| {
                (0..1usize << links.len())
                    .map(|_| sampler.sample(rng))
                    .collect::<Result<Vec<f64>>>()
            })
            .collect::<Result<_>>()?;

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value of `row` under a boolean `assignment` of that row's variables.
    pub fn lookup(&self, row: usize, assignment: &[bool]) -> Option<f64> {
        let cell = assignment
            .iter()
            .fold(0usize, |cell, &bit| (cell << 1) | usize::from(bit));
        self.rows.get(row)?.get(cell).copied()
    }

    /// Checks the table is parallel to `adjacency` and every value is in `[0, 1]`.
    pub fn validate(&self, adjacency: &Adjacency) -> Result<()> {
        if self.rows.len() != adjacency.len() {
            return Err(GeneratorError::MalformedInstance(format!(
                "{} value rows for {} adjacency rows",
                self.rows.len(),
                adjacency.len()
            )));
        }

        for (r, (values, links)) in self.rows.iter().zip(adjacency.rows()).enumerate() {
            if values.len() != 1 << links.len() {
                return Err(GeneratorError::MalformedInstance(format!(
                    "row {} has {} values, expected {}",
                    r,
                    values.len(),
                    1usize << links.len()
                )));
            }
            if let Some(v) = values.iter().find(|v| !(0.0..=1.0).contains(*v)) {
                return Err(GeneratorError::MalformedInstance(format!(
                    "row {} holds value {} outside [0, 1]",
                    r, v
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::DistributionKind;

    #[test]
    fn test_fill_matches_row_widths() {
        let mut rng = RandomNumberGenerator::from_seed(8);
        let adjacency = Adjacency::new(vec![vec![0, 1, 2], vec![3, 4, 5]]);
        let sampler = ValueSampler::Fresh(DistributionKind::Uniform);
        let table = ValueTable::fill(&adjacency, &sampler, &mut rng).unwrap();

        assert_eq!(table.len(), 2);
        assert!(table.rows().iter().all(|row| row.len() == 8));
        assert!(table.validate(&adjacency).is_ok());
    }

    #[test]
    fn test_lookup_reads_assignment_as_binary() {
        let table = ValueTable::new(vec![vec![0.0, 0.1, 0.2, 0.3]]);
        assert_eq!(table.lookup(0, &[false, false]), Some(0.0));
        assert_eq!(table.lookup(0, &[true, false]), Some(0.2));
        assert_eq!(table.lookup(0, &[true, true]), Some(0.3));
        assert_eq!(table.lookup(1, &[true, true]), None);
    }

    #[test]
    fn test_validate_rejects_mismatch() {
        let adjacency = Adjacency::new(vec![vec![0, 1]]);
        assert!(ValueTable::new(vec![vec![0.5; 3]]).validate(&adjacency).is_err());
        assert!(ValueTable::new(vec![vec![0.5; 4], vec![0.5; 4]]).validate(&adjacency).is_err());
        assert!(ValueTable::new(vec![vec![0.5, 0.5, 1.5, 0.5]]).validate(&adjacency).is_err());
    }
}
