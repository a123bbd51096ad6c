use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use gix_topo::{graph::CommitGraph, odb, print, refs, traverse, Repository};

/// Print the commits of a repository in reverse topological order, annotated
/// with branch names.
#[derive(Debug, Parser)]
#[command(name = "gix-topo", version)]
struct Args {
    /// Directory to start repository discovery from. Defaults to the current
    /// working directory.
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let start = match args.path {
        Some(path) => path,
        None => std::env::current_dir().context("cannot determine the current directory")?,
    };

    let repo = Repository::discover(&start)?;
    let branches = refs::branch_map(&repo)?;
    let commits = odb::scan_commits(&repo)?;
    let graph = CommitGraph::from_records(commits);
    let order = traverse::topo_order(&graph);

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    print::print_annotated(&mut out, &graph, &order, &branches)?;
    out.flush()?;
    Ok(())
}
