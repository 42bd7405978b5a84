use std::collections::HashSet;

use crate::error::{GeneratorError, Result};

/// Variable-dependency structure of one instance.
///
/// Each row lists the variables one local fitness contribution reads, in the
/// order used to index that row's value table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Adjacency {
    rows: Vec<Vec<usize>>,
}

impl Adjacency {
    pub fn new(rows: Vec<Vec<usize>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<usize>> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Width of the first row, or 0 for an empty adjacency.
    pub fn row_width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Replaces every index `x` with `mapping[x]`.
    pub fn relabel(&mut self, mapping: &[usize]) {
        for row in &mut self.rows {
            for x in row.iter_mut() {
                *x = mapping[*x];
            }
        }
    }

    /// Checks that rows are non-empty, share one width, hold distinct
    /// entries and only reference variables in `[0, n)`.
    pub fn validate(&self, n: usize) -> Result<()> {
        let width = self.row_width();

        for (r, row) in self.rows.iter().enumerate() {
            if row.is_empty() || row.len() != width {
                return Err(GeneratorError::MalformedInstance(format!(
                    "row {} has width {}, expected {}",
                    r,
                    row.len(),
                    width
                )));
            }
            if let Some(&x) = row.iter().find(|&&x| x >= n) {
                return Err(GeneratorError::MalformedInstance(format!(
                    "row {} references variable {} outside [0, {})",
                    r, x, n
                )));
            }
            let unique: HashSet<usize> = row.iter().copied().collect();
            if unique.len() != row.len() {
                return Err(GeneratorError::MalformedInstance(format!(
                    "row {} repeats a variable: {:?}",
                    r, row
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_catches_each_defect() {
        assert!(Adjacency::new(vec![vec![0, 1], vec![1, 2]]).validate(3).is_ok());
        assert!(Adjacency::new(vec![vec![0, 1], vec![1, 3]]).validate(3).is_err());
        assert!(Adjacency::new(vec![vec![0, 0]]).validate(3).is_err());
        assert!(Adjacency::new(vec![vec![0, 1], vec![2]]).validate(3).is_err());
    }

    #[test]
    fn test_relabel() {
        let mut adjacency = Adjacency::new(vec![vec![0, 1], vec![2, 0]]);
        adjacency.relabel(&[2, 0, 1]);
        assert_eq!(adjacency.into_rows(), vec![vec![2, 0], vec![1, 2]]);
    }
}
