//! Populate a graph by walking a directory tree
//!
//! Each enumerated child gets exactly one `parent -> child` edge, added before
//! any attempt to descend into it. Failures are reported to the error sink
//! and the walk continues with the next sibling, so a partially readable
//! tree still yields a partial graph.

use std::collections::HashSet;
use std::time::Instant;

use crate::error::EnumerationError;
use crate::fs::FsBackend;
use crate::graph::store::DirGraph;
use crate::graph::types::{BuildOptions, BuildReport};
use crate::path::NodePath;
use crate::sink::{ErrorSink, StderrSink};
use crate::trace_time;

/// State tracked while walking one root
struct BuildState<'a, F: ?Sized, S: ?Sized> {
    fs: &'a F,
    sink: &'a mut S,
    opts: &'a BuildOptions,
    entered: HashSet<NodePath>,
    report: BuildReport,
}

impl<F: FsBackend + ?Sized, S: ErrorSink + ?Sized> BuildState<'_, F, S> {
    fn report_error(&mut self, err: &EnumerationError) {
        tracing::warn!(path = %err.path, cause = %err.cause, "Failed to read directory entry");
        self.report.errors += 1;
        if err.is_interrupted() {
            self.report.interrupted = true;
        }
        self.sink.report(&err.to_string());
    }

    /// Record `dir` as entered; false if its identity was seen before
    fn enter(&mut self, dir: &NodePath) -> bool {
        if !self.opts.detect_cycles {
            return true;
        }
        let identity = self.fs.canonicalize(dir).unwrap_or_else(|| dir.clone());
        self.entered.insert(identity)
    }

    fn expand(&mut self, graph: &mut DirGraph, dir: &NodePath, depth: usize) {
        let children = match self.fs.children(dir) {
            Ok(children) => children,
            Err(e) => {
                self.report_error(&e);
                return;
            }
        };
        self.report.directories_visited += 1;

        for child in children {
            if self.report.interrupted {
                break;
            }

            graph.add_edge(dir.clone(), child.clone());
            self.report.edges_added += 1;

            match self.fs.is_directory(&child) {
                Ok(true) => self.descend(graph, child, depth + 1),
                Ok(false) => {}
                Err(e) => self.report_error(&e),
            }
        }
    }

    fn descend(&mut self, graph: &mut DirGraph, dir: NodePath, depth: usize) {
        if self.opts.max_depth.is_some_and(|max| depth > max) {
            self.report.depth_limited += 1;
            return;
        }
        if !self.enter(&dir) {
            tracing::debug!(path = %dir, "Directory already entered, not descending");
            self.report.cycles_skipped += 1;
            return;
        }
        self.expand(graph, &dir, depth);
    }
}

/// Walk `root` with default options, adding `parent -> child` edges to `graph`.
///
/// A root that does not exist or is not a directory leaves `graph` unchanged.
pub fn build_from_filesystem<F, S>(
    graph: &mut DirGraph,
    root: &NodePath,
    fs: &F,
    sink: &mut S,
) -> BuildReport
where
    F: FsBackend + ?Sized,
    S: ErrorSink + ?Sized,
{
    build_from_filesystem_with(graph, root, fs, sink, &BuildOptions::default())
}

/// Walk `root` honoring `opts`; see [`build_from_filesystem`]
#[tracing::instrument(skip(graph, fs, sink, opts), fields(root = %root, max_depth = ?opts.max_depth, detect_cycles = opts.detect_cycles))]
pub fn build_from_filesystem_with<F, S>(
    graph: &mut DirGraph,
    root: &NodePath,
    fs: &F,
    sink: &mut S,
    opts: &BuildOptions,
) -> BuildReport
where
    F: FsBackend + ?Sized,
    S: ErrorSink + ?Sized,
{
    let start = Instant::now();
    let mut state = BuildState {
        fs,
        sink,
        opts,
        entered: HashSet::new(),
        report: BuildReport::default(),
    };

    if !fs.exists(root) {
        tracing::debug!("Root does not exist, nothing to build");
        return state.report;
    }

    match fs.root_is_directory(root) {
        Ok(true) => {}
        Ok(false) => {
            tracing::debug!("Root is not a directory, nothing to build");
            return state.report;
        }
        Err(e) => {
            state.report_error(&e);
            return state.report;
        }
    }

    state.enter(root);
    state.expand(graph, root, 0);

    trace_time!(start, "build_from_filesystem");
    tracing::debug!(
        directories = state.report.directories_visited,
        edges = state.report.edges_added,
        errors = state.report.errors,
        "Build complete"
    );
    state.report
}

/// Build a fresh graph from `root`, sending diagnostics to stderr
pub fn build_graph<F: FsBackend + ?Sized>(root: &NodePath, fs: &F) -> (DirGraph, BuildReport) {
    let mut graph = DirGraph::new();
    let report = build_from_filesystem(&mut graph, root, fs, &mut StderrSink);
    (graph, report)
}
