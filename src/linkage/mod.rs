//! # Linkage Models
//!
//! A linkage model decides which variables feed each local fitness
//! contribution. `LinkageKind::generate` turns the problem size `n` and the
//! epistasis `k` into an [`Adjacency`]: one row per contribution, each row an
//! ordered list of distinct variable indices in `[0, n)`.
//!
//! | Kind | Rows | Row width | Random |
//! |---|---|---|---|
//! | `NearestNeighbor` | `n` | `k + 1` | no |
//! | `Unrestricted` | `n` | `k + 1` | yes |
//! | `Separable` | `n` | `k + 1` (`min(k, block - 1) + 1`) | yes |
//! | `Mesh` | `n * (k + 1)` | 2 | no |
//! | `SATLike` | `ceil(4.27 * n)` | `k + 1` | yes |
//!
//! ## Example
//!
//! ```rust
//! use nkgen::linkage::LinkageKind;
//! use nkgen::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let adjacency = LinkageKind::NearestNeighbor.generate(5, 2, &mut rng).unwrap();
//!
//! assert_eq!(adjacency.rows()[0], vec![0, 1, 2]);
//! assert_eq!(adjacency.rows()[4], vec![4, 0, 1]);
//! ```
pub mod mesh;
pub mod nearest_neighbor;
pub mod sat_like;
pub mod separable;
pub mod unrestricted;

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{GeneratorError, Result};
use crate::instance::Adjacency;
use crate::rng::RandomNumberGenerator;

pub use mesh::Torus;

/// The variable interaction topology of a problem class.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkageKind {
    /// Each variable depends on the `k` variables that follow it, cyclically.
    NearestNeighbor,
    /// Each variable depends on `k` other variables chosen at random.
    Unrestricted,
    /// Variables are split into blocks; links never cross a block boundary.
    Separable,
    /// Variables sit on a `(k + 1)`-dimensional torus; one edge per axis.
    Mesh,
    /// `ceil(4.27 * n)` random clauses of `k + 1` variables each.
    SATLike,
}

impl LinkageKind {
    pub const ALL: [LinkageKind; 5] = [
        Self::NearestNeighbor,
        Self::Unrestricted,
        Self::Separable,
        Self::Mesh,
        Self::SATLike,
    ];

    /// Checks that `n` and `k` admit this topology.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Configuration` if `n < 2`, `k < 1`, or the
    /// model needs `k + 1` distinct variables per row and `k >= n`.
    pub fn validate(&self, n: usize, k: usize) -> Result<()> {
        if n < 2 {
            return Err(GeneratorError::Configuration(format!(
                "N must be at least 2, got {}",
                n
            )));
        }
        if k < 1 {
            return Err(GeneratorError::Configuration(
                "K must be at least 1".to_string(),
            ));
        }

        match self {
            Self::NearestNeighbor | Self::Unrestricted | Self::SATLike if k >= n => {
                Err(GeneratorError::Configuration(format!(
                    "{} linkage needs K <= N - 1 to form rows of K + 1 distinct variables (N={}, K={})",
                    self, n, k
                )))
            }
            _ => Ok(()),
        }
    }

    /// Builds the adjacency for one instance.
    ///
    /// Deterministic models ignore `rng`.
    pub fn generate(&self, n: usize, k: usize, rng: &mut RandomNumberGenerator) -> Result<Adjacency> {
        self.validate(n, k)?;

        let adjacency = match self {
            Self::NearestNeighbor => nearest_neighbor::generate(n, k),
            Self::Unrestricted => unrestricted::generate(n, k, rng)?,
            Self::Separable => separable::generate(n, k, rng)?,
            Self::Mesh => mesh::generate(n, k),
            Self::SATLike => sat_like::generate(n, k, rng)?,
        };

        debug!(
            linkage = self.name(),
            n,
            k,
            rows = adjacency.len(),
            "generated linkage"
        );
        Ok(adjacency)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::NearestNeighbor => "NearestNeighbor",
            Self::Unrestricted => "Unrestricted",
            Self::Separable => "Separable",
            Self::Mesh => "Mesh",
            Self::SATLike => "SATLike",
        }
    }
}

impl fmt::Display for LinkageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LinkageKind {
    type Err = GeneratorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| GeneratorError::MalformedDescriptor(format!("unknown linkage '{}'", s)))
    }
}

/// Every index in `0..n` except `excluded`.
fn all_except(n: usize, excluded: usize) -> Vec<usize> {
    (0..n).filter(|&i| i != excluded).collect()
}
