//! # Rearrangement
//!
//! Optional relabeling of variable identities after the linkage is built.
//! The structure of the adjacency is untouched; only which variable plays
//! which role changes.

use std::fmt;
use std::str::FromStr;

use crate::error::GeneratorError;
use crate::instance::Adjacency;
use crate::rng::RandomNumberGenerator;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RearrangementKind {
    /// Relabel every index through one uniform random permutation.
    Scatter,
    /// Keep the labels produced by the linkage model.
    NoChange,
}

impl RearrangementKind {
    pub const ALL: [RearrangementKind; 2] = [Self::Scatter, Self::NoChange];

    pub fn apply(&self, n: usize, mut adjacency: Adjacency, rng: &mut RandomNumberGenerator) -> Adjacency {
        match self {
            Self::Scatter => {
                let mut ordering: Vec<usize> = (0..n).collect();
                rng.shuffle(&mut ordering);
                adjacency.relabel(&ordering);
                adjacency
            }
            Self::NoChange => adjacency,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Scatter => "Scatter",
            Self::NoChange => "NoChange",
        }
    }
}

impl fmt::Display for RearrangementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RearrangementKind {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| GeneratorError::MalformedDescriptor(format!("unknown rearrangement '{}'", s)))
    }
}
