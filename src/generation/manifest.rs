use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{GeneratorError, Result, ResultExt};

use super::OutputLayout;

/// Listing of one split's instance files.
///
/// The first line is the instance count; each following line is one path
/// relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Manifest {
    entries: Vec<String>,
}

impl Manifest {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn write_file(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_string()).context(format!("failed to write {}", path.display()))
    }

    pub fn read_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).context(format!("failed to read {}", path.display()))?;
        text.parse()
    }

    /// Checks that every listed file exists under `layout`.
    pub fn verify(&self, layout: &OutputLayout) -> Result<()> {
        match self.entries.iter().find(|entry| !layout.resolve(entry).is_file()) {
            Some(missing) => Err(GeneratorError::MalformedManifest(format!(
                "listed file {} does not exist",
                missing
            ))),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.entries.len())?;
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

impl FromStr for Manifest {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self> {
        let mut lines = s.lines().map(str::trim).filter(|line| !line.is_empty());

        let header = lines
            .next()
            .ok_or_else(|| GeneratorError::MalformedManifest("missing count line".to_string()))?;
        let count: usize = header
            .parse()
            .map_err(|_| GeneratorError::MalformedManifest(format!("invalid count '{}'", header)))?;

        let entries: Vec<String> = lines.map(str::to_string).collect();
        if entries.len() != count {
            return Err(GeneratorError::MalformedManifest(format!(
                "count says {} but {} paths are listed",
                count,
                entries.len()
            )));
        }

        Ok(Self { entries })
    }
}
