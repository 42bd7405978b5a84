use crate::error::Result;
use crate::instance::Adjacency;
use crate::rng::RandomNumberGenerator;

/// Clauses per variable, in hundredths: the random 3-SAT threshold 4.27.
const CLAUSE_RATIO_PERCENT: usize = 427;

/// Number of clauses for `n` variables, `ceil(4.27 * n)`.
pub fn clause_count(n: usize) -> usize {
    (CLAUSE_RATIO_PERCENT * n).div_ceil(100)
}

/// Each clause is `k + 1` distinct variables in random order.
pub fn generate(n: usize, k: usize, rng: &mut RandomNumberGenerator) -> Result<Adjacency> {
    let variables: Vec<usize> = (0..n).collect();
    let rows = (0..clause_count(n))
        .map(|_| rng.sample_distinct(&variables, k + 1))
        .collect::<Result<Vec<_>>>()?;

    Ok(Adjacency::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clause_count() {
        assert_eq!(clause_count(100), 427);
        assert_eq!(clause_count(50), 214);
        assert_eq!(clause_count(1), 5);
    }

    #[test]
    fn test_clauses_have_distinct_members() {
        let mut rng = RandomNumberGenerator::from_seed(41);
        let adjacency = generate(20, 2, &mut rng).unwrap();

        assert_eq!(adjacency.len(), clause_count(20));
        assert!(adjacency.rows().iter().all(|row| row.len() == 3));
        assert!(adjacency.validate(20).is_ok());
    }
}
