//! Loose-object store enumeration and commit classification.
//!
//! The store is a two-level fan-out: the first two hex characters of an
//! object's hash name a subdirectory of `objects/`, the remaining characters
//! name the file inside it. An object's identity is reconstructed by
//! concatenating the two path components; it is never recomputed from the
//! object's contents.
//!
//! Every file is zlib-compressed. After inflation the payload starts with an
//! ASCII type tag; only objects tagged `commit` are parsed further. Trees,
//! blobs and tags are classified and dropped without error.
//!
//! Any read or inflate failure aborts the whole run. There is no
//! partial-result mode.

use std::collections::BTreeSet;
use std::fs;
use std::io::Read;
use std::path::Path;

use bstr::ByteSlice;

use crate::repo::Repository;
use crate::{Error, Result};

const COMMIT_TAG: &[u8] = b"commit";
const PARENT_FIELD: &[u8] = b"parent ";

/// A commit record extracted from one loose object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommit {
    /// The commit's hash, as derived from its storage path.
    pub id: String,
    /// Hashes of the commits this one directly descends from.
    ///
    /// Empty for root commits; more than one for merges.
    pub parents: BTreeSet<String>,
}

/// Inflate a zlib stream in full.
///
/// Corrupt input surfaces as an `io::Error` from the decoder.
pub fn inflate(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut out = Vec::new();
    flate2::read::ZlibDecoder::new(bytes).read_to_end(&mut out)?;
    Ok(out)
}

/// Classify an inflated object payload and, if it is a commit, extract its
/// parent hashes.
///
/// Returns `None` for every other object kind. Every line of the payload
/// beginning with `parent ` contributes the trimmed remainder as one parent
/// hash, wherever it appears. A commit without parent lines is a root, not
/// an error.
pub fn parse_commit(id: impl Into<String>, payload: &[u8]) -> Option<ParsedCommit> {
    if !payload.starts_with(COMMIT_TAG) {
        return None;
    }
    let mut parents = BTreeSet::new();
    for line in payload.lines() {
        if let Some(hash) = line.strip_prefix(PARENT_FIELD) {
            parents.insert(hash.trim().to_str_lossy().into_owned());
        }
    }
    Some(ParsedCommit {
        id: id.into(),
        parents,
    })
}

/// Enumerate the loose-object store of `repo` and return all commit records.
///
/// Enumeration order is arbitrary and callers must not rely on it. Only
/// two-hex-character fan-out directories are visited; `pack/` and `info/`
/// are not part of the loose store.
pub fn scan_commits(repo: &Repository) -> Result<Vec<ParsedCommit>> {
    let objects = repo.objects_dir();
    let mut commits = Vec::new();
    for entry in fs::read_dir(&objects)? {
        let entry = entry?;
        let dir_name = entry.file_name();
        let Some(fanout) = fanout_name(&dir_name) else {
            continue;
        };
        if !entry.path().is_dir() {
            continue;
        }
        scan_fanout(&entry.path(), fanout, &mut commits)?;
    }
    tracing::debug!(commits = commits.len(), "scanned loose-object store");
    Ok(commits)
}

fn scan_fanout(dir: &Path, fanout: &str, commits: &mut Vec<ParsedCommit>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        let Some(rest) = file_name.to_str() else {
            continue;
        };
        let id = format!("{fanout}{rest}");
        let compressed = fs::read(entry.path())?;
        let payload = inflate(&compressed).map_err(|source| Error::Inflate {
            id: id.clone(),
            source,
        })?;
        if let Some(commit) = parse_commit(id, &payload) {
            commits.push(commit);
        }
    }
    Ok(())
}

fn fanout_name(name: &std::ffi::OsStr) -> Option<&str> {
    let name = name.to_str()?;
    (name.len() == 2 && name.bytes().all(|b| b.is_ascii_hexdigit())).then_some(name)
}
