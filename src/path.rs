//! Path value used as the graph key
//!
//! `NodePath` wraps a host path and is compared, hashed and ordered the way
//! `std::path::Path` is. It never touches the filesystem: once a path is in a
//! graph it is a pure key.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// An immutable identifier for a filesystem location
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodePath(PathBuf);

impl NodePath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        NodePath(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// True for the empty path, which is never stored as a vertex
    pub fn is_empty(&self) -> bool {
        self.0.as_os_str().is_empty()
    }

    /// Append a child component, e.g. `/r` + `a` -> `/r/a`
    pub fn join(&self, child: impl AsRef<Path>) -> Self {
        NodePath(self.0.join(child))
    }

    pub fn parent(&self) -> Option<NodePath> {
        self.0.parent().map(|p| NodePath(p.to_path_buf()))
    }

    pub fn file_name(&self) -> Option<&std::ffi::OsStr> {
        self.0.file_name()
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl AsRef<Path> for NodePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<PathBuf> for NodePath {
    fn from(path: PathBuf) -> Self {
        NodePath(path)
    }
}

impl From<&Path> for NodePath {
    fn from(path: &Path) -> Self {
        NodePath(path.to_path_buf())
    }
}

impl From<&str> for NodePath {
    fn from(path: &str) -> Self {
        NodePath(PathBuf::from(path))
    }
}

impl From<String> for NodePath {
    fn from(path: String) -> Self {
        NodePath(PathBuf::from(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_component_wise() {
        // "/r/a/x" sorts before "/r/b" because comparison is per component
        let mut paths = vec![
            NodePath::from("/r/b"),
            NodePath::from("/r/a/x"),
            NodePath::from("/r"),
            NodePath::from("/r/a"),
        ];
        paths.sort();
        let rendered: Vec<String> = paths.iter().map(|p| p.to_string()).collect();
        assert_eq!(rendered, vec!["/r", "/r/a", "/r/a/x", "/r/b"]);
    }

    #[test]
    fn test_trailing_separator_is_equal() {
        assert_eq!(NodePath::from("/r/a/"), NodePath::from("/r/a"));
    }

    #[test]
    fn test_empty_path() {
        assert!(NodePath::from("").is_empty());
        assert!(!NodePath::from("/").is_empty());
    }

    #[test]
    fn test_join_and_parent() {
        let root = NodePath::from("/r");
        let child = root.join("a");
        assert_eq!(child, NodePath::from("/r/a"));
        assert_eq!(child.parent(), Some(root));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&NodePath::from("/r/a")).unwrap();
        assert_eq!(json, "\"/r/a\"");
    }
}
