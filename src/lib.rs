pub mod cardinality;
pub mod class;
pub mod distribution;
pub mod error;
pub mod generation;
pub mod instance;
pub mod linkage;
pub mod rearrangement;
pub mod rng;

// Re-export commonly used types for convenience
pub use class::{ClassBounds, ClassDescriptor, ProblemClass};
pub use error::{GeneratorError, Result, ResultExt};
pub use generation::{GenerationLauncher, GenerationOptions};
pub use instance::ProblemInstance;
