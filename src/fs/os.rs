use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{ErrorCause, EnumerationError};
use crate::fs::FsBackend;
use crate::path::NodePath;

/// Host filesystem backend
///
/// Symlinks below the root are never followed when classifying, so a link to
/// a directory is a leaf in the built graph. The root itself is always
/// resolved. Children are yielded sorted by file name so builds are
/// reproducible across runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFs {
    follow_links: bool,
}

impl OsFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify symlinks by their target instead of as leaves.
    /// Pair with cycle detection in the builder.
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }
}

/// What a failed `walkdir` entry means for the listing of `dir`
#[derive(Debug, PartialEq, Eq)]
enum EntryFailure {
    /// The directory itself could not be read
    Listing,
    /// A single child could not be inspected; it is still a child
    Child(NodePath),
}

fn entry_failure(dir: &NodePath, depth: usize, at: Option<&Path>) -> EntryFailure {
    match at {
        Some(at) if depth > 0 && at != dir.as_path() => EntryFailure::Child(NodePath::from(at)),
        _ => EntryFailure::Listing,
    }
}

impl FsBackend for OsFs {
    fn exists(&self, path: &NodePath) -> bool {
        path.as_path().exists()
    }

    fn is_directory(&self, path: &NodePath) -> Result<bool, EnumerationError> {
        let meta = if self.follow_links {
            fs::metadata(path)
        } else {
            fs::symlink_metadata(path)
        };
        meta.map(|m| m.is_dir())
            .map_err(|e| EnumerationError::from_io(path.clone(), &e))
    }

    fn root_is_directory(&self, path: &NodePath) -> Result<bool, EnumerationError> {
        fs::metadata(path)
            .map(|m| m.is_dir())
            .map_err(|e| EnumerationError::from_io(path.clone(), &e))
    }

    fn children(&self, path: &NodePath) -> Result<Vec<NodePath>, EnumerationError> {
        let mut children = Vec::new();

        for entry in WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .follow_root_links(true)
            .sort_by_file_name()
        {
            let e = match entry {
                Ok(entry) => {
                    children.push(NodePath::from(entry.into_path()));
                    continue;
                }
                Err(e) => e,
            };

            match entry_failure(path, e.depth(), e.path()) {
                EntryFailure::Child(child) => {
                    // Classification of the child reports whatever is wrong with it
                    tracing::debug!(path = %child, error = %e, "Could not inspect entry");
                    children.push(child);
                }
                EntryFailure::Listing => {
                    let cause = e
                        .io_error()
                        .map(ErrorCause::from_io)
                        .unwrap_or(ErrorCause::Other);
                    return Err(EnumerationError::new(path.clone(), cause).with_detail(e.to_string()));
                }
            }
        }

        Ok(children)
    }

    fn canonicalize(&self, path: &NodePath) -> Option<NodePath> {
        fs::canonicalize(path).ok().map(NodePath::from)
    }
}
