//! # Value Cardinality
//!
//! A `CardinalityKind` controls how many distinct values may appear in one
//! instance's value table. Fewer distinct values produce more plateaus.
//!
//! `CardinalityKind::sampler` builds a `ValueSampler` that owns whatever pool
//! of values the strategy needs. A sampler is built once per instance and
//! handed by reference to every cell fill, so pools are never shared between
//! instances.
//!
//! ## Example
//!
//! ```rust
//! use nkgen::cardinality::CardinalityKind;
//! use nkgen::distribution::DistributionKind;
//! use nkgen::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(3);
//! let sampler = CardinalityKind::TwoValues
//!     .sampler(DistributionKind::Uniform, 3, &mut rng)
//!     .unwrap();
//!
//! let pool = sampler.pool().unwrap().to_vec();
//! for _ in 0..10 {
//!     assert!(pool.contains(&sampler.sample(&mut rng).unwrap()));
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use crate::distribution::DistributionKind;
use crate::error::{GeneratorError, Result};
use crate::rng::RandomNumberGenerator;

/// How many distinct values an instance's table may contain.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardinalityKind {
    /// Two values drawn up front; every cell is one of them.
    TwoValues,
    /// `2^w` values drawn up front for row width `w`; cells pick among them.
    PowKValues,
    /// Every cell is an independent draw.
    AllUnique,
}

impl CardinalityKind {
    pub const ALL: [CardinalityKind; 3] = [Self::TwoValues, Self::PowKValues, Self::AllUnique];

    /// Builds a fresh sampler for one instance whose rows are `row_width` wide.
    pub fn sampler(
        &self,
        distribution: DistributionKind,
        row_width: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<ValueSampler> {
        let sampler = match self {
            Self::TwoValues => ValueSampler::Pool {
                values: vec![distribution.sample(rng)?, distribution.sample(rng)?],
            },
            Self::PowKValues => ValueSampler::Pool {
                values: (0..1usize << row_width)
                    .map(|_| distribution.sample(rng))
                    .collect::<Result<_>>()?,
            },
            Self::AllUnique => ValueSampler::Fresh(distribution),
        };
        Ok(sampler)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::TwoValues => "TwoValues",
            Self::PowKValues => "PowKValues",
            Self::AllUnique => "AllUnique",
        }
    }
}

impl fmt::Display for CardinalityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CardinalityKind {
    type Err = GeneratorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| GeneratorError::MalformedDescriptor(format!("unknown cardinality '{}'", s)))
    }
}

/// Per-instance source of table cell values.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueSampler {
    /// Cells are chosen uniformly, with replacement, from a fixed pool.
    Pool { values: Vec<f64> },
    /// Cells are fresh draws from the distribution.
    Fresh(DistributionKind),
}

impl ValueSampler {
    /// Produces the value of one table cell.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Configuration` when drawing from an empty pool.
    pub fn sample(&self, rng: &mut RandomNumberGenerator) -> Result<f64> {
        match self {
            Self::Pool { values } => rng.choose(values).copied().ok_or_else(|| {
                GeneratorError::Configuration("cannot draw from an empty value pool".to_string())
            }),
            Self::Fresh(distribution) => distribution.sample(rng),
        }
    }

    /// The captured pool, if this sampler draws from one.
    pub fn pool(&self) -> Option<&[f64]> {
        match self {
            Self::Pool { values } => Some(values),
            Self::Fresh(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow_k_pool_size() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        for width in 1..=6 {
            let sampler = CardinalityKind::PowKValues.sampler(DistributionKind::Normal, width, &mut rng).unwrap();
            assert_eq!(sampler.pool().unwrap().len(), 1 << width);
        }
    }

    #[test]
    fn test_two_values_pool_size() {
        let mut rng = RandomNumberGenerator::from_seed(2);
        let sampler = CardinalityKind::TwoValues.sampler(DistributionKind::Scaled, 5, &mut rng).unwrap();
        assert_eq!(sampler.pool().unwrap().len(), 2);
    }

    #[test]
    fn test_all_unique_has_no_pool() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let sampler = CardinalityKind::AllUnique.sampler(DistributionKind::Uniform, 2, &mut rng).unwrap();
        assert_eq!(sampler, ValueSampler::Fresh(DistributionKind::Uniform));
        assert!(sampler.pool().is_none());

        let a = sampler.sample(&mut rng).unwrap();
        let b = sampler.sample(&mut rng).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_samplers_are_fresh_per_construction() {
        let mut rng = RandomNumberGenerator::from_seed(4);
        let first = CardinalityKind::TwoValues.sampler(DistributionKind::Uniform, 2, &mut rng).unwrap();
        let second = CardinalityKind::TwoValues.sampler(DistributionKind::Uniform, 2, &mut rng).unwrap();
        assert_ne!(first.pool(), second.pool());
    }

    #[test]
    fn test_empty_pool_is_an_error() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        let sampler = ValueSampler::Pool { values: Vec::new() };
        assert!(matches!(
            sampler.sample(&mut rng),
            Err(GeneratorError::Configuration(_))
        ));
    }

    #[test]
    fn test_name_round_trip() {
        for kind in CardinalityKind::ALL {
            assert_eq!(kind.to_string().parse::<CardinalityKind>().unwrap(), kind);
        }
        assert!("ThreeValues".parse::<CardinalityKind>().is_err());
    }
}
