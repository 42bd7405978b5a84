//! Block-separable linkage.
//!
//! Variables are cut into contiguous blocks of nominally `2k` members. The
//! walk goes left to right and grows the current block to `2k + 1` whenever
//! the remaining variables are not a multiple of `2k`. A trailing block too
//! small to give its members `k` links is folded into the block before it.
//! Within a block every member links to `min(k, block - 1)` random other
//! members of the same block.

use std::ops::Range;

use crate::error::Result;
use crate::instance::Adjacency;
use crate::rng::RandomNumberGenerator;

/// Contiguous blocks covering `0..n` exactly once.
///
/// Every block holds at least `k + 1` variables unless `n <= k`, in which
/// case there is a single block of `n`.
pub fn blocks(n: usize, k: usize) -> Vec<Range<usize>> {
    let nominal = (2 * k).max(1);
    let mut blocks: Vec<Range<usize>> = Vec::with_capacity(n / nominal + 1);
    let mut start = 0;

    while start < n {
        let remaining = n - start;
        let step = if remaining % nominal == 0 {
            nominal
        } else {
            nominal + 1
        };
        let end = start + step.min(remaining);
        blocks.push(start..end);
        start = end;
    }

    if blocks.len() > 1 && blocks.last().is_some_and(|last| last.len() <= k) {
        if let Some(last) = blocks.pop() {
            if let Some(previous) = blocks.last_mut() {
                previous.end = last.end;
            }
        }
    }

    blocks
}

pub fn generate(n: usize, k: usize, rng: &mut RandomNumberGenerator) -> Result<Adjacency> {
    let mut rows = Vec::with_capacity(n);

    for block in blocks(n, k) {
        let members: Vec<usize> = block.clone().collect();
        let links = k.min(members.len() - 1);

        for i in block {
            let others: Vec<usize> = members.iter().copied().filter(|&m| m != i).collect();
            let mut row = vec![i];
            row.extend(rng.sample_distinct(&others, links)?);
            rows.push(row);
        }
    }

    Ok(Adjacency::new(rows))
}
