use std::collections::HashMap;

use crate::error::{ErrorCause, EnumerationError};
use crate::fs::FsBackend;
use crate::path::NodePath;

#[derive(Debug, Clone)]
enum Entry {
    Directory(Vec<NodePath>),
    File,
}

/// Synthetic tree held in memory
///
/// Directories list their children in the order they were added. Failures
/// can be injected per path for enumeration and for classification, and a
/// path can be given a canonical alias to model a symlink that points back
/// up the tree.
///
/// ```
/// use dirgraph::fs::{FsBackend, MemoryFs};
/// use dirgraph::NodePath;
///
/// let fs = MemoryFs::new()
///     .with_dir("/r", ["/r/a", "/r/b"])
///     .with_file("/r/b");
/// assert!(fs.is_directory(&NodePath::from("/r/a")).unwrap());
/// assert!(!fs.is_directory(&NodePath::from("/r/b")).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    entries: HashMap<NodePath, Entry>,
    children_failures: HashMap<NodePath, ErrorCause>,
    classify_failures: HashMap<NodePath, ErrorCause>,
    aliases: HashMap<NodePath, NodePath>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a directory with its children. Children not declared
    /// elsewhere are created as empty directories; use `with_file` to turn
    /// one into a file.
    pub fn with_dir<I, P>(mut self, path: impl Into<NodePath>, children: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<NodePath>,
    {
        let path = path.into();
        let children: Vec<NodePath> = children.into_iter().map(Into::into).collect();
        for child in &children {
            self.entries
                .entry(child.clone())
                .or_insert_with(|| Entry::Directory(Vec::new()));
        }
        self.entries.insert(path, Entry::Directory(children));
        self
    }

    pub fn with_file(mut self, path: impl Into<NodePath>) -> Self {
        self.entries.insert(path.into(), Entry::File);
        self
    }

    /// Make `children(path)` fail with `cause`
    pub fn fail_children(mut self, path: impl Into<NodePath>, cause: ErrorCause) -> Self {
        self.children_failures.insert(path.into(), cause);
        self
    }

    /// Make `is_directory(path)` fail with `cause`
    pub fn fail_classify(mut self, path: impl Into<NodePath>, cause: ErrorCause) -> Self {
        self.classify_failures.insert(path.into(), cause);
        self
    }

    /// Report `target` as the canonical identity of `path`
    pub fn with_alias(mut self, path: impl Into<NodePath>, target: impl Into<NodePath>) -> Self {
        self.aliases.insert(path.into(), target.into());
        self
    }
}

impl FsBackend for MemoryFs {
    fn exists(&self, path: &NodePath) -> bool {
        self.entries.contains_key(path)
    }

    fn is_directory(&self, path: &NodePath) -> Result<bool, EnumerationError> {
        if let Some(cause) = self.classify_failures.get(path) {
            return Err(EnumerationError::new(path.clone(), *cause));
        }
        match self.entries.get(path) {
            Some(Entry::Directory(_)) => Ok(true),
            Some(Entry::File) => Ok(false),
            None => Err(EnumerationError::new(path.clone(), ErrorCause::NotFound)),
        }
    }

    fn children(&self, path: &NodePath) -> Result<Vec<NodePath>, EnumerationError> {
        if let Some(cause) = self.children_failures.get(path) {
            return Err(EnumerationError::new(path.clone(), *cause));
        }
        match self.entries.get(path) {
            Some(Entry::Directory(children)) => Ok(children.clone()),
            Some(Entry::File) => Err(EnumerationError::new(path.clone(), ErrorCause::Other)
                .with_detail("not a directory")),
            None => Err(EnumerationError::new(path.clone(), ErrorCause::NotFound)),
        }
    }

    fn canonicalize(&self, path: &NodePath) -> Option<NodePath> {
        Some(self.aliases.get(path).cloned().unwrap_or_else(|| path.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_keep_declaration_order() {
        let fs = MemoryFs::new().with_dir("/r", ["/r/b", "/r/a"]);
        let children = fs.children(&NodePath::from("/r")).unwrap();
        assert_eq!(children, vec![NodePath::from("/r/b"), NodePath::from("/r/a")]);
    }

    #[test]
    fn test_undeclared_child_is_empty_directory() {
        let fs = MemoryFs::new().with_dir("/r", ["/r/a"]);
        let a = NodePath::from("/r/a");
        assert!(fs.exists(&a));
        assert!(fs.is_directory(&a).unwrap());
        assert!(fs.children(&a).unwrap().is_empty());
    }

    #[test]
    fn test_later_declaration_wins() {
        let fs = MemoryFs::new()
            .with_dir("/r", ["/r/a"])
            .with_dir("/r/a", ["/r/a/x"]);
        let children = fs.children(&NodePath::from("/r/a")).unwrap();
        assert_eq!(children, vec![NodePath::from("/r/a/x")]);
    }

    #[test]
    fn test_injected_failures() {
        let fs = MemoryFs::new()
            .with_dir("/r", ["/r/a", "/r/b"])
            .fail_children("/r/a", ErrorCause::Permission)
            .fail_classify("/r/b", ErrorCause::Io);

        let err = fs.children(&NodePath::from("/r/a")).unwrap_err();
        assert_eq!(err.cause, ErrorCause::Permission);
        assert!(fs.is_directory(&NodePath::from("/r/a")).unwrap());

        let err = fs.is_directory(&NodePath::from("/r/b")).unwrap_err();
        assert_eq!(err.cause, ErrorCause::Io);
    }

    #[test]
    fn test_missing_path() {
        let fs = MemoryFs::new();
        let p = NodePath::from("/nope");
        assert!(!fs.exists(&p));
        assert_eq!(fs.children(&p).unwrap_err().cause, ErrorCause::NotFound);
    }

    #[test]
    fn test_alias_canonicalization() {
        let fs = MemoryFs::new()
            .with_dir("/r", ["/r/loop"])
            .with_alias("/r/loop", "/r");
        assert_eq!(
            fs.canonicalize(&NodePath::from("/r/loop")),
            Some(NodePath::from("/r"))
        );
        assert_eq!(
            fs.canonicalize(&NodePath::from("/r")),
            Some(NodePath::from("/r"))
        );
    }
}
