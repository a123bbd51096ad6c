//! Error types for commit-graph reconstruction

use std::path::PathBuf;

/// Result type alias for operations in this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for commit-graph reconstruction and printing
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No `.git` directory was found while walking towards the filesystem root
    #[error("not inside a git repository (searched upwards from '{start}')")]
    RepositoryNotFound {
        /// The directory the upward search started from
        start: PathBuf,
    },

    /// A loose object could not be inflated
    #[error("could not inflate object '{id}'")]
    Inflate {
        /// Identity of the object as derived from its storage path
        id: String,
        /// The underlying zlib error
        source: std::io::Error,
    },

    /// A branch ref file did not contain a usable hash
    #[error("ref '{name}' does not contain a valid hash")]
    MalformedRef {
        /// The branch name, relative to `refs/heads`
        name: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
