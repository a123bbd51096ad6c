//! Serialization of the ordered commit sequence with branch annotations and
//! sticky markers.
//!
//! The output is one line per commit, `<hash>[ <branch>...]`. Whenever the
//! next commit in the sequence is not a direct parent of the current one,
//! linear adjacency misrepresents the graph; the discontinuity is bracketed
//! by a `<parents>=` marker (plus a blank line) after the current commit and
//! a `=<children>` marker before the next one. Marker hash lists are joined
//! in ascending lexicographic order.

use std::collections::BTreeSet;
use std::io::Write;

use crate::graph::CommitGraph;
use crate::refs::BranchMap;

/// Write the annotated sequence to `out`.
///
/// `order` must be an output of [`crate::traverse::topo_order`] over `graph`;
/// hashes missing from the graph are treated as having no parents or
/// children.
pub fn print_annotated(
    out: &mut impl Write,
    graph: &CommitGraph,
    order: &[String],
    branches: &BranchMap,
) -> std::io::Result<()> {
    let empty = BTreeSet::new();
    let mut jumped = false;

    for (idx, hash) in order.iter().enumerate() {
        let node = graph.node(hash);
        let parents = node.map_or(&empty, |n| n.parents());
        let children = node.map_or(&empty, |n| n.children());

        if jumped {
            jumped = false;
            writeln!(out, "={}", join(children))?;
        }

        match branches.get(hash) {
            Some(names) if !names.is_empty() => writeln!(out, "{hash} {}", join(names))?,
            _ => writeln!(out, "{hash}")?,
        }

        if let Some(next) = order.get(idx + 1) {
            if !parents.contains(next) {
                jumped = true;
                writeln!(out, "{}=\n", join(parents))?;
            }
        }
    }
    Ok(())
}

fn join(hashes: &BTreeSet<String>) -> String {
    hashes
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odb::ParsedCommit;
    use crate::traverse::topo_order;

    fn graph(records: &[(&str, &[&str])]) -> CommitGraph {
        CommitGraph::from_records(records.iter().map(|(id, parents)| ParsedCommit {
            id: (*id).to_owned(),
            parents: parents.iter().map(|p| (*p).to_owned()).collect(),
        }))
    }

    fn render(graph: &CommitGraph, branches: &BranchMap) -> String {
        let order = topo_order(graph);
        let mut out = Vec::new();
        print_annotated(&mut out, graph, &order, branches).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn branch(hash: &str, names: &[&str]) -> BranchMap {
        let mut map = BranchMap::new();
        map.insert(
            hash.to_owned(),
            names.iter().map(|n| (*n).to_owned()).collect(),
        );
        map
    }

    #[test]
    fn single_root_no_branches_no_markers() {
        let g = graph(&[("aa11", &[])]);
        assert_eq!(render(&g, &BranchMap::new()), "aa11\n");
    }

    #[test]
    fn linear_history_with_branch_at_tip() {
        let g = graph(&[("aa11", &[]), ("bb22", &["aa11"]), ("cc33", &["bb22"])]);
        let branches = branch("cc33", &["main"]);
        assert_eq!(render(&g, &branches), "cc33 main\nbb22\naa11\n");
    }

    #[test]
    fn multiple_branch_names_print_in_ascending_order() {
        let g = graph(&[("aa11", &[])]);
        let branches = branch("aa11", &["topic/z", "main", "dev"]);
        assert_eq!(render(&g, &branches), "aa11 dev main topic/z\n");
    }

    #[test]
    fn disjoint_roots_are_bracketed_by_markers() {
        let g = graph(&[("aa11", &[]), ("bb22", &[])]);
        assert_eq!(render(&g, &BranchMap::new()), "aa11\n=\n\n=\nbb22\n");
    }

    #[test]
    fn jump_between_merge_parent_subtrees_is_bracketed() {
        // dd44 merges bb22 and cc33, both children of root aa11. The walk
        // exhausts bb22's side first, then jumps over to cc33's.
        let g = graph(&[
            ("aa11", &[]),
            ("bb22", &["aa11"]),
            ("cc33", &["aa11"]),
            ("dd44", &["bb22", "cc33"]),
        ]);
        let expected = "\
dd44
bb22
aa11=

=dd44
cc33
aa11
";
        assert_eq!(render(&g, &BranchMap::new()), expected);
    }

    #[test]
    fn parents_marker_lists_both_parents_of_a_merge() {
        // cc33 merges the two roots; dd44 sits on aa11's side, so the
        // sequence jumps right after the merge commit itself.
        let g = graph(&[
            ("aa11", &[]),
            ("bb22", &[]),
            ("cc33", &["aa11", "bb22"]),
            ("dd44", &["aa11"]),
        ]);
        let expected = "\
cc33
aa11 bb22=

=
dd44
aa11
=

=cc33
bb22
";
        assert_eq!(render(&g, &BranchMap::new()), expected);
    }
}
