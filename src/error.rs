//! # Error Types
//!
//! This module defines the error type shared by every stage of instance
//! generation: class sampling, topology construction, serialization and the
//! on-disk output layout.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use nkgen::error::{GeneratorError, Result};
//!
//! fn check_width(k: usize) -> Result<()> {
//!     if k == 0 {
//!         return Err(GeneratorError::Configuration("K must be at least 1".to_string()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_width(0).is_err());
//! ```
//!
//! Using the `ResultExt` trait to add context to errors:
//!
//! ```rust
//! use nkgen::error::{Result, ResultExt};
//! use std::fs::File;
//!
//! fn open_meta(path: &str) -> Result<File> {
//!     File::open(path).context(format!("failed to open {}", path))
//! }
//!
//! assert!(open_meta("/definitely/not/here/meta.txt").is_err());
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Errors raised while generating, writing or reading problem instances.
///
/// Generation is a single pass: any of these aborts the whole run.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Parameters are out of domain or make a topology infeasible.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A persisted class descriptor (`meta.txt`) could not be parsed.
    #[error("Malformed descriptor: {0}")]
    MalformedDescriptor(String),

    /// Instance text could not be parsed or violates the instance invariants.
    #[error("Malformed instance: {0}")]
    MalformedInstance(String),

    /// A split manifest could not be parsed or does not match the folder.
    #[error("Malformed manifest: {0}")]
    MalformedManifest(String),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for generator operations.
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use nkgen::error::ResultExt;
/// use std::fs::File;
///
/// fn read_file(path: &str) -> nkgen::error::Result<()> {
///     File::open(path).context("Failed to open file")?;
///     Ok(())
/// }
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `GeneratorError::Other` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneratorError::Other(format!("{}: {}", context, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_converts() {
        fn fails() -> Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))?;
            Ok(())
        }

        match fails() {
            Err(GeneratorError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_context_prefixes_message() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let err = result.context("writing training/00000.txt").unwrap_err();
        assert_eq!(err.to_string(), "writing training/00000.txt: missing");
    }
}
