use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, ResultExt};

const META_FILE: &str = "meta.txt";
const RESULTS_DIR: &str = "results";
const RESULTS_IGNORE: &str = "*.json\n";

/// The two instance sets written per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Split {
    Training,
    Testing,
}

impl Split {
    pub const ALL: [Split; 2] = [Self::Training, Self::Testing];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Training => "training",
            Self::Testing => "testing",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// File layout of an output folder.
///
/// ```text
/// <root>/meta.txt
/// <root>/trainingFiles.txt
/// <root>/testingFiles.txt
/// <root>/training/00000.txt ...
/// <root>/testing/00000.txt ...
/// <root>/results/.gitignore
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn split_dir(&self, split: Split) -> PathBuf {
        self.root.join(split.name())
    }

    pub fn results_dir(&self) -> PathBuf {
        self.root.join(RESULTS_DIR)
    }

    pub fn meta_path(&self) -> PathBuf {
        self.root.join(META_FILE)
    }

    pub fn manifest_path(&self, split: Split) -> PathBuf {
        self.root.join(format!("{}Files.txt", split.name()))
    }

    /// Path of instance `index` relative to the root, as listed in manifests.
    pub fn relative_instance_path(split: Split, index: usize) -> String {
        format!("{}/{:05}.txt", split.name(), index)
    }

    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Creates the folder tree and the results ignore marker.
    ///
    /// Folders that already exist are reused.
    pub fn prepare(&self) -> Result<()> {
        ensure_dir(&self.root)?;
        for split in Split::ALL {
            ensure_dir(&self.split_dir(split))?;
        }
        ensure_dir(&self.results_dir())?;

        let ignore = self.results_dir().join(".gitignore");
        fs::write(&ignore, RESULTS_IGNORE).context(format!("failed to write {}", ignore.display()))
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    match fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(e) => Err(e).context(format!("failed to create {}", path.display())),
    }
}
