//! # Value Distributions
//!
//! A `DistributionKind` produces one raw fitness value in `[0, 1]` per call.
//! The three shapes differ in how mass is spread while keeping comparable
//! means, which changes the ruggedness of the landscape built from them.

use std::fmt;
use std::str::FromStr;

use crate::error::{GeneratorError, Result};
use crate::rng::RandomNumberGenerator;

const NORMAL_MEAN: f64 = 0.5;
const NORMAL_STD_DEV: f64 = 0.2;
const SCALED_LOW: f64 = 0.54;

/// The statistical shape fitness values are drawn from.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistributionKind {
    /// Uniform on `[0, 1)`.
    Uniform,
    /// Normal(0.5, 0.2), redrawn until the value lands in `[0, 1]`.
    Normal,
    /// `u^3` with `u` uniform on `[0.54, 1)`: skewed toward small values.
    Scaled,
}

impl DistributionKind {
    pub const ALL: [DistributionKind; 3] = [Self::Uniform, Self::Normal, Self::Scaled];

    /// Draws one value.
    pub fn sample(&self, rng: &mut RandomNumberGenerator) -> Result<f64> {
        match self {
            Self::Uniform => Ok(rng.unit()),
            Self::Normal => {
                // Acceptance is about 0.988 per draw.
                loop {
                    let value = rng.gaussian(NORMAL_MEAN, NORMAL_STD_DEV)?;
                    if (0.0..=1.0).contains(&value) {
                        return Ok(value);
                    }
                }
            }
            Self::Scaled => Ok(rng.uniform(SCALED_LOW, 1.0).powi(3)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Uniform => "Uniform",
            Self::Normal => "Normal",
            Self::Scaled => "Scaled",
        }
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistributionKind {
    type Err = GeneratorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| GeneratorError::MalformedDescriptor(format!("unknown distribution '{}'", s)))
    }
}
