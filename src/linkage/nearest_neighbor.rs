use crate::instance::Adjacency;

/// Row `i` is `(i, i + 1, ..., i + k) mod n`.
pub fn generate(n: usize, k: usize) -> Adjacency {
    Adjacency::new(
        (0..n)
            .map(|i| (i..=i + k).map(|j| j % n).collect())
            .collect(),
    )
}
