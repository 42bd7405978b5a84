//! # Problem Classes
//!
//! A `ProblemClass` fixes the generative configuration shared by every
//! instance of a run: problem size, epistasis, evaluation constant and one
//! strategy from each family. It is sampled once per run and never changes
//! afterwards.
//!
//! A `ClassDescriptor` pairs a class with the seed that produced the run and
//! is persisted as the single line of `meta.txt`:
//!
//! ```text
//! N K eval_const linkage rearrangement distribution cardinality seed
//! ```
//!
//! ## Example
//!
//! ```rust
//! use nkgen::class::{ClassBounds, ClassDescriptor, ProblemClass};
//! use nkgen::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(17);
//! let class = ProblemClass::sample(&ClassBounds::default(), &mut rng).unwrap();
//! assert!((50..=300).contains(&class.n()));
//!
//! let descriptor = ClassDescriptor::new(class, 17);
//! let restored: ClassDescriptor = descriptor.to_string().parse().unwrap();
//! assert_eq!(restored, descriptor);
//! ```

use std::fmt;
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;
use std::str::FromStr;

use crate::cardinality::CardinalityKind;
use crate::distribution::DistributionKind;
use crate::error::{GeneratorError, Result, ResultExt};
use crate::linkage::LinkageKind;
use crate::rearrangement::RearrangementKind;
use crate::rng::RandomNumberGenerator;

/// Allowed divisors of the evaluation budget.
pub const EVAL_CONSTS: [usize; 3] = [1, 4, 16];

/// `floor(2 * n^2 / eval_const)`, or `None` if `2 * n^2` overflows or
/// `eval_const` is zero.
pub fn eval_budget(n: usize, eval_const: usize) -> Option<usize> {
    n.checked_mul(n)?.checked_mul(2)?.checked_div(eval_const)
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProblemClass {
    n: usize,
    k: usize,
    eval_const: usize,
    linkage: LinkageKind,
    rearrangement: RearrangementKind,
    distribution: DistributionKind,
    cardinality: CardinalityKind,
}

impl ProblemClass {
    /// Creates a class after checking that every instance of it can be built.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Configuration` if `eval_const` is not one of
    /// [`EVAL_CONSTS`] or if `linkage` is infeasible for `n` and `k`.
    pub fn new(
        n: usize,
        k: usize,
        eval_const: usize,
        linkage: LinkageKind,
        rearrangement: RearrangementKind,
        distribution: DistributionKind,
        cardinality: CardinalityKind,
    ) -> Result<Self> {
        if !EVAL_CONSTS.contains(&eval_const) {
            return Err(GeneratorError::Configuration(format!(
                "eval_const must be one of {:?}, got {}",
                EVAL_CONSTS, eval_const
            )));
        }
        if eval_budget(n, eval_const).is_none() {
            return Err(GeneratorError::Configuration(format!(
                "N = {} is too large: its evaluation budget overflows",
                n
            )));
        }
        linkage.validate(n, k)?;

        Ok(Self {
            n,
            k,
            eval_const,
            linkage,
            rearrangement,
            distribution,
            cardinality,
        })
    }

    /// Samples every field uniformly and independently within `bounds`.
    pub fn sample(bounds: &ClassBounds, rng: &mut RandomNumberGenerator) -> Result<Self> {
        bounds.validate()?;

        let linkage = pick(rng, &LinkageKind::ALL)?;
        let rearrangement = pick(rng, &RearrangementKind::ALL)?;
        let distribution = pick(rng, &DistributionKind::ALL)?;
        let cardinality = pick(rng, &CardinalityKind::ALL)?;
        let n = rng.range_inclusive(*bounds.n.start(), *bounds.n.end());
        let eval_const = pick(rng, &bounds.eval_consts)?;
        let k = rng.range_inclusive(*bounds.k.start(), *bounds.k.end());

        Self::new(n, k, eval_const, linkage, rearrangement, distribution, cardinality)
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn eval_const(&self) -> usize {
        self.eval_const
    }

    pub fn linkage(&self) -> LinkageKind {
        self.linkage
    }

    pub fn rearrangement(&self) -> RearrangementKind {
        self.rearrangement
    }

    pub fn distribution(&self) -> DistributionKind {
        self.distribution
    }

    pub fn cardinality(&self) -> CardinalityKind {
        self.cardinality
    }

    pub fn eval_budget(&self) -> usize {
        // `new` rejects every class whose budget overflows.
        2 * self.n * self.n / self.eval_const
    }
}

impl fmt::Display for ProblemClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.n,
            self.k,
            self.eval_const,
            self.linkage,
            self.rearrangement,
            self.distribution,
            self.cardinality
        )
    }
}

fn pick<T: Copy>(rng: &mut RandomNumberGenerator, items: &[T]) -> Result<T> {
    rng.choose(items)
        .copied()
        .ok_or_else(|| GeneratorError::Configuration("cannot choose from an empty set".to_string()))
}

/// Ranges a class is sampled from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassBounds {
    pub n: RangeInclusive<usize>,
    pub k: RangeInclusive<usize>,
    pub eval_consts: Vec<usize>,
}

impl Default for ClassBounds {
    fn default() -> Self {
        Self {
            n: 50..=300,
            k: 1..=5,
            eval_consts: EVAL_CONSTS.to_vec(),
        }
    }
}

impl ClassBounds {
    pub fn validate(&self) -> Result<()> {
        if self.n.is_empty() || *self.n.start() < 2 {
            return Err(GeneratorError::Configuration(format!(
                "N range {:?} must be non-empty and start at 2 or more",
                self.n
            )));
        }
        if self.k.is_empty() || *self.k.start() < 1 {
            return Err(GeneratorError::Configuration(format!(
                "K range {:?} must be non-empty and start at 1 or more",
                self.k
            )));
        }
        if self.eval_consts.is_empty() || self.eval_consts.iter().any(|c| !EVAL_CONSTS.contains(c)) {
            return Err(GeneratorError::Configuration(format!(
                "eval constants {:?} must be a non-empty subset of {:?}",
                self.eval_consts, EVAL_CONSTS
            )));
        }
        Ok(())
    }
}

/// A class together with the seed of the run that produced it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassDescriptor {
    pub class: ProblemClass,
    pub seed: u64,
}

impl ClassDescriptor {
    pub fn new(class: ProblemClass, seed: u64) -> Self {
        Self { class, seed }
    }

    pub fn write_file(&self, path: &Path) -> Result<()> {
        fs::write(path, format!("{}\n", self)).context(format!("failed to write {}", path.display()))
    }

    /// Reads a descriptor back. Any parse or validation failure is fatal.
    pub fn read_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).context(format!("failed to read {}", path.display()))?;
        text.parse()
    }
}

impl fmt::Display for ClassDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.class, self.seed)
    }
}

impl FromStr for ClassDescriptor {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        let &[n, k, eval_const, linkage, rearrangement, distribution, cardinality, seed] =
            fields.as_slice()
        else {
            return Err(GeneratorError::MalformedDescriptor(format!(
                "expected 8 fields, found {}",
                fields.len()
            )));
        };

        let class = ProblemClass::new(
            number(n, "N")?,
            number(k, "K")?,
            number(eval_const, "eval_const")?,
            linkage.parse()?,
            rearrangement.parse()?,
            distribution.parse()?,
            cardinality.parse()?,
        )
        .map_err(|e| GeneratorError::MalformedDescriptor(e.to_string()))?;

        Ok(Self::new(class, number(seed, "seed")?))
    }
}

fn number<T: FromStr>(token: &str, field: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| GeneratorError::MalformedDescriptor(format!("invalid {} '{}'", field, token)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_budget() {
        assert_eq!(eval_budget(100, 4), Some(5000));
        assert_eq!(eval_budget(100, 1), Some(20000));
        assert_eq!(eval_budget(51, 16), Some(325));
        assert_eq!(eval_budget(usize::MAX / 2, 1), None);
    }

    #[test]
    fn test_new_rejects_overflowing_budget() {
        let result = ProblemClass::new(
            1 << 40,
            2,
            16,
            LinkageKind::NearestNeighbor,
            RearrangementKind::NoChange,
            DistributionKind::Uniform,
            CardinalityKind::AllUnique,
        );
        assert!(matches!(result, Err(GeneratorError::Configuration(_))));
    }

    #[test]
    fn test_new_rejects_bad_eval_const() {
        let result = ProblemClass::new(
            10,
            2,
            3,
            LinkageKind::Mesh,
            RearrangementKind::NoChange,
            DistributionKind::Uniform,
            CardinalityKind::AllUnique,
        );
        assert!(matches!(result, Err(GeneratorError::Configuration(_))));
    }

    #[test]
    fn test_new_rejects_infeasible_linkage() {
        let result = ProblemClass::new(
            3,
            3,
            4,
            LinkageKind::Unrestricted,
            RearrangementKind::Scatter,
            DistributionKind::Normal,
            CardinalityKind::TwoValues,
        );
        assert!(matches!(result, Err(GeneratorError::Configuration(_))));
    }

    #[test]
    fn test_sample_respects_bounds() {
        let bounds = ClassBounds {
            n: 10..=12,
            k: 2..=3,
            eval_consts: vec![16],
        };
        let mut rng = RandomNumberGenerator::from_seed(99);
        for _ in 0..50 {
            let class = ProblemClass::sample(&bounds, &mut rng).unwrap();
            assert!((10..=12).contains(&class.n()));
            assert!((2..=3).contains(&class.k()));
            assert_eq!(class.eval_const(), 16);
        }
    }

    #[test]
    fn test_sample_is_reproducible() {
        let bounds = ClassBounds::default();
        let a = ProblemClass::sample(&bounds, &mut RandomNumberGenerator::from_seed(5)).unwrap();
        let b = ProblemClass::sample(&bounds, &mut RandomNumberGenerator::from_seed(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_bounds_validation() {
        let mut bounds = ClassBounds::default();
        bounds.eval_consts = vec![2];
        assert!(bounds.validate().is_err());

        let mut bounds = ClassBounds::default();
        bounds.n = RangeInclusive::new(10, 5);
        assert!(bounds.validate().is_err());

        let mut bounds = ClassBounds::default();
        bounds.k = 0..=2;
        assert!(bounds.validate().is_err());
    }

    #[test]
    fn test_descriptor_line() {
        let class = ProblemClass::new(
            120,
            3,
            16,
            LinkageKind::SATLike,
            RearrangementKind::Scatter,
            DistributionKind::Scaled,
            CardinalityKind::PowKValues,
        )
        .unwrap();
        let descriptor = ClassDescriptor::new(class, 123456789);

        assert_eq!(
            descriptor.to_string(),
            "120 3 16 SATLike Scatter Scaled PowKValues 123456789"
        );
        assert_eq!(descriptor.to_string().parse::<ClassDescriptor>().unwrap(), descriptor);
    }

    #[test]
    fn test_malformed_descriptors_are_rejected() {
        for line in [
            "",
            "120 3 16 SATLike Scatter Scaled PowKValues",
            "120 3 16 Ring Scatter Scaled PowKValues 1",
            "abc 3 16 SATLike Scatter Scaled PowKValues 1",
            "120 3 5 SATLike Scatter Scaled PowKValues 1",
            "3 3 16 SATLike Scatter Scaled PowKValues 1",
            "120 3 16 SATLike Scatter Scaled PowKValues -1",
            "18446744073709551615 3 16 Unrestricted Scatter Scaled PowKValues 1",
        ] {
            assert!(
                matches!(line.parse::<ClassDescriptor>(), Err(GeneratorError::MalformedDescriptor(_))),
                "accepted {:?}",
                line
            );
        }
    }
}
