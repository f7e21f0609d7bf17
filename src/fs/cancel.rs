use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{ErrorCause, EnumerationError};
use crate::fs::FsBackend;
use crate::path::NodePath;

/// Backend wrapper that refuses further enumeration once cancelled
///
/// The flag is shared, so another thread (or a signal handler) can hold a
/// clone of [`CancellableFs::handle`] and stop a long traversal. After
/// cancellation every `children` call fails with
/// [`ErrorCause::Interrupted`], which the builder treats as terminal.
#[derive(Debug, Clone)]
pub struct CancellableFs<F> {
    inner: F,
    cancelled: Arc<AtomicBool>,
}

impl<F: FsBackend> CancellableFs<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Shared flag; storing `true` cancels the traversal
    pub fn handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<F: FsBackend> FsBackend for CancellableFs<F> {
    fn exists(&self, path: &NodePath) -> bool {
        self.inner.exists(path)
    }

    fn is_directory(&self, path: &NodePath) -> Result<bool, EnumerationError> {
        self.inner.is_directory(path)
    }

    fn root_is_directory(&self, path: &NodePath) -> Result<bool, EnumerationError> {
        self.inner.root_is_directory(path)
    }

    fn children(&self, path: &NodePath) -> Result<Vec<NodePath>, EnumerationError> {
        if self.is_cancelled() {
            return Err(EnumerationError::new(
                path.clone(),
                ErrorCause::Interrupted,
            ));
        }
        self.inner.children(path)
    }

    fn canonicalize(&self, path: &NodePath) -> Option<NodePath> {
        self.inner.canonicalize(path)
    }
}
