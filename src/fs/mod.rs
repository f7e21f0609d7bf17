//! Filesystem adapters
//!
//! The traversal builder never touches the host filesystem directly. It asks
//! an [`FsBackend`] whether a path exists, whether it is a directory, and what
//! its immediate children are:
//! - [`OsFs`]: the host filesystem
//! - [`MemoryFs`]: a synthetic tree, with injectable failures
//! - [`CancellableFs`]: wraps another backend and stops on request

pub mod cancel;
pub mod memory;
pub mod os;

pub use cancel::CancellableFs;
pub use memory::MemoryFs;
pub use os::OsFs;

use crate::error::EnumerationError;
use crate::path::NodePath;

/// Enumeration and classification over paths
pub trait FsBackend {
    fn exists(&self, path: &NodePath) -> bool;

    fn is_directory(&self, path: &NodePath) -> Result<bool, EnumerationError>;

    /// Classify the root of a build. Backends that treat symlinks as leaves
    /// still resolve them here, so a root reached through a link is walked.
    fn root_is_directory(&self, path: &NodePath) -> Result<bool, EnumerationError> {
        self.is_directory(path)
    }

    /// Immediate children of `path`, in the order the backend yields them
    fn children(&self, path: &NodePath) -> Result<Vec<NodePath>, EnumerationError>;

    /// Canonical identity of `path`, used to detect directories that are
    /// reachable twice (symlink loops, bind mounts). `None` means the path is
    /// its own identity.
    fn canonicalize(&self, _path: &NodePath) -> Option<NodePath> {
        None
    }
}

impl<T: FsBackend + ?Sized> FsBackend for &T {
    fn exists(&self, path: &NodePath) -> bool {
        (**self).exists(path)
    }

    fn is_directory(&self, path: &NodePath) -> Result<bool, EnumerationError> {
        (**self).is_directory(path)
    }

    fn root_is_directory(&self, path: &NodePath) -> Result<bool, EnumerationError> {
        (**self).root_is_directory(path)
    }

    fn children(&self, path: &NodePath) -> Result<Vec<NodePath>, EnumerationError> {
        (**self).children(path)
    }

    fn canonicalize(&self, path: &NodePath) -> Option<NodePath> {
        (**self).canonicalize(path)
    }
}
