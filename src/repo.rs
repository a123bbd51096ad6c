//! Repository discovery and the context value handed to every pipeline stage.
//!
//! Nothing in this crate consults ambient process state; components receive a
//! [`Repository`] and derive all paths from it.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Handle to a discovered repository, rooted at its `.git` directory.
#[derive(Debug, Clone)]
pub struct Repository {
    git_dir: PathBuf,
}

impl Repository {
    /// Open a repository whose `.git` directory is known to be at `git_dir`.
    ///
    /// No validation is performed; later stages fail with I/O errors if the
    /// directory is not a repository.
    pub fn at(git_dir: impl Into<PathBuf>) -> Self {
        Self {
            git_dir: git_dir.into(),
        }
    }

    /// Walk from `start` towards the filesystem root until a directory
    /// containing `.git` is found.
    ///
    /// Returns [`Error::RepositoryNotFound`] if the walk exhausts all parent
    /// directories.
    pub fn discover(start: impl AsRef<Path>) -> Result<Self> {
        let start = start.as_ref();
        for dir in start.ancestors() {
            let candidate = dir.join(".git");
            if candidate.is_dir() {
                tracing::debug!(git_dir = %candidate.display(), "discovered repository");
                return Ok(Self { git_dir: candidate });
            }
        }
        Err(Error::RepositoryNotFound {
            start: start.to_owned(),
        })
    }

    /// The `.git` directory this repository is rooted at.
    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    /// The loose-object store, `.git/objects`.
    pub fn objects_dir(&self) -> PathBuf {
        self.git_dir.join("objects")
    }

    /// The local branch ref directory, `.git/refs/heads`.
    pub fn heads_dir(&self) -> PathBuf {
        self.git_dir.join("refs").join("heads")
    }
}
