pub mod launcher;
pub mod layout;
pub mod manifest;
pub mod options;

pub use launcher::{GenerationLauncher, GenerationReport};
pub use layout::{OutputLayout, Split};
pub use manifest::Manifest;
pub use options::{GenerationOptions, GenerationOptionsBuilder};
