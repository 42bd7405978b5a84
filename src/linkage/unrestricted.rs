use crate::error::Result;
use crate::instance::Adjacency;
use crate::rng::RandomNumberGenerator;

use super::all_except;

/// Row `i` is `i` followed by `k` distinct random variables other than `i`.
pub fn generate(n: usize, k: usize, rng: &mut RandomNumberGenerator) -> Result<Adjacency> {
    let rows = (0..n)
        .map(|i| {
            let mut row = vec![i];
            row.extend(rng.sample_distinct(&all_except(n, i), k)?);
            Ok(row)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Adjacency::new(rows))
}
