//! Branch resolution: map commit hashes to the branch names pointing at them.
//!
//! Only local branches under `refs/heads` participate. Branch names may be
//! hierarchical (`feature/x`); the name is the ref file's path relative to
//! `refs/heads` with `/` separators, regardless of platform.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use crate::repo::Repository;
use crate::{Error, Result};

/// Mapping from commit hash to the set of branch names pointing at it.
///
/// Commits without branches simply have no entry. Read-only for the rest of
/// the pipeline.
pub type BranchMap = BTreeMap<String, BTreeSet<String>>;

/// Resolve all local branches of `repo` into a [`BranchMap`].
///
/// A repository without `refs/heads` (or with an empty one) yields an empty
/// map. Unreadable ref files are fatal.
pub fn branch_map(repo: &Repository) -> Result<BranchMap> {
    let heads = repo.heads_dir();
    let mut map = BranchMap::new();
    if !heads.is_dir() {
        return Ok(map);
    }
    collect(&heads, String::new(), &mut map)?;
    let branches = map.values().map(BTreeSet::len).sum::<usize>();
    tracing::debug!(branches, "resolved branch refs");
    Ok(map)
}

fn collect(dir: &Path, prefix: String, map: &mut BranchMap) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let name = match file_name.to_str() {
            Some(n) => n,
            None => continue, // refs with non-UTF-8 names cannot be printed
        };
        let qualified = if prefix.is_empty() {
            name.to_owned()
        } else {
            format!("{prefix}/{name}")
        };
        let path = entry.path();
        if path.is_dir() {
            collect(&path, qualified, map)?;
        } else {
            let hash = read_ref(&path, &qualified)?;
            map.entry(hash).or_default().insert(qualified);
        }
    }
    Ok(())
}

fn read_ref(path: &Path, name: &str) -> Result<String> {
    let contents = fs::read_to_string(path)?;
    let hash = contents.trim();
    if hash.is_empty() || !hash.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::MalformedRef { name: name.to_owned() });
    }
    Ok(hash.to_owned())
}
