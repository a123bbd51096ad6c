//! Reconstruct a commit ancestry graph from a git loose-object store and
//! linearize it deterministically for inspection.
//!
//! The pipeline runs strictly forward, each stage fully consuming the
//! previous one's output:
//!
//! 1. [`repo`] discovers the repository and carries its paths.
//! 2. [`odb`] enumerates and inflates loose objects, keeping only commits.
//! 3. [`graph`] assembles the parsed records into a bidirectional
//!    parent/child graph and derives the root set.
//! 4. [`traverse`] produces a deterministic child-before-parent linear order.
//! 5. [`print`] serializes the order, annotating commits with branch names
//!    from [`refs`] and marking every point where sequence adjacency does not
//!    correspond to a direct graph edge.
//!
//! Everything is single-threaded and synchronous; any object that cannot be
//! read or inflated aborts the run.

#![deny(missing_docs, rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod error;
pub mod graph;
pub mod odb;
pub mod print;
pub mod refs;
pub mod repo;
pub mod traverse;

pub use error::{Error, Result};
pub use graph::{CommitGraph, CommitNode};
pub use repo::Repository;
