//! # GenerationOptions
//!
//! The `GenerationOptions` struct holds the configuration of one generation
//! run: where to write, how many instances per split, which seed to use and
//! the ranges the problem class is sampled from.
//!
//! ## Example
//!
//! ```rust
//! use nkgen::generation::GenerationOptions;
//!
//! // Defaults: folder "problems", 200 training and 50 testing instances.
//! let defaults = GenerationOptions::default();
//! assert_eq!(defaults.get_training(), 200);
//!
//! let custom = GenerationOptions::builder()
//!     .folder("out")
//!     .seed(7)
//!     .training(10)
//!     .testing(2)
//!     .build();
//! assert_eq!(custom.get_seed(), Some(7));
//! ```

use std::path::{Path, PathBuf};

use crate::class::{ClassBounds, ClassDescriptor, ProblemClass};

use super::Split;

#[derive(Debug, Clone)]
pub struct GenerationOptions {
    folder: PathBuf,
    seed: Option<u64>,
    training: usize,
    testing: usize,
    bounds: ClassBounds,
    /// Pinned class; when set, no class is sampled.
    class: Option<ProblemClass>,
}

impl GenerationOptions {
    pub fn builder() -> GenerationOptionsBuilder {
        GenerationOptionsBuilder::default()
    }

    pub fn get_folder(&self) -> &Path {
        &self.folder
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_training(&self) -> usize {
        self.training
    }

    pub fn get_testing(&self) -> usize {
        self.testing
    }

    /// Number of instances requested for `split`.
    pub fn get_count(&self, split: Split) -> usize {
        match split {
            Split::Training => self.training,
            Split::Testing => self.testing,
        }
    }

    pub fn get_bounds(&self) -> &ClassBounds {
        &self.bounds
    }

    pub fn get_class(&self) -> Option<ProblemClass> {
        self.class
    }

    /// Sets the seed.
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = Some(seed);
    }

    /// Sets the output folder.
    pub fn set_folder(&mut self, folder: impl Into<PathBuf>) {
        self.folder = folder.into();
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            folder: PathBuf::from("problems"),
            seed: None,
            training: 200,
            testing: 50,
            bounds: ClassBounds::default(),
            class: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct GenerationOptionsBuilder {
    folder: Option<PathBuf>,
    seed: Option<u64>,
    training: Option<usize>,
    testing: Option<usize>,
    bounds: Option<ClassBounds>,
    class: Option<ProblemClass>,
}

impl GenerationOptionsBuilder {
    pub fn folder(mut self, value: impl Into<PathBuf>) -> Self {
        self.folder = Some(value.into());
        self
    }

    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn training(mut self, value: usize) -> Self {
        self.training = Some(value);
        self
    }

    pub fn testing(mut self, value: usize) -> Self {
        self.testing = Some(value);
        self
    }

    pub fn bounds(mut self, value: ClassBounds) -> Self {
        self.bounds = Some(value);
        self
    }

    pub fn class(mut self, value: ProblemClass) -> Self {
        self.class = Some(value);
        self
    }

    /// Reproduces a prior run: its seed and class are both pinned.
    pub fn replay(self, descriptor: ClassDescriptor) -> Self {
        self.seed(descriptor.seed).class(descriptor.class)
    }

    pub fn build(self) -> GenerationOptions {
        let default = GenerationOptions::default();
        GenerationOptions {
            folder: self.folder.unwrap_or(default.folder),
            seed: self.seed.or(default.seed),
            training: self.training.unwrap_or(default.training),
            testing: self.testing.unwrap_or(default.testing),
            bounds: self.bounds.unwrap_or(default.bounds),
            class: self.class.or(default.class),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_falls_back_to_defaults() {
        let options = GenerationOptions::builder().testing(3).build();
        assert_eq!(options.get_folder(), Path::new("problems"));
        assert_eq!(options.get_training(), 200);
        assert_eq!(options.get_count(Split::Testing), 3);
        assert_eq!(options.get_seed(), None);
        assert_eq!(options.get_bounds(), &ClassBounds::default());
    }

    #[test]
    fn test_replay_pins_seed_and_class() {
        let descriptor: ClassDescriptor = "60 2 4 Mesh NoChange Normal TwoValues 31".parse().unwrap();
        let options = GenerationOptions::builder().replay(descriptor).build();
        assert_eq!(options.get_seed(), Some(31));
        assert_eq!(options.get_class(), Some(descriptor.class));
    }
}
