//! Error sinks for traversal diagnostics
//!
//! The builder never fails on an unreadable entry. It hands a human-readable
//! diagnostic to an [`ErrorSink`] and moves on to the next sibling.

use std::io::Write;

/// Receives diagnostics produced while building a graph
pub trait ErrorSink {
    fn report(&mut self, diagnostic: &str);
}

impl<F: FnMut(&str)> ErrorSink for F {
    fn report(&mut self, diagnostic: &str) {
        self(diagnostic)
    }
}

/// Default sink: one line per diagnostic on standard error
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl ErrorSink for StderrSink {
    fn report(&mut self, diagnostic: &str) {
        // Nothing sensible to do if stderr itself is gone
        let _ = writeln!(std::io::stderr().lock(), "{}", diagnostic);
    }
}

/// Sink that keeps every diagnostic, in arrival order
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    pub diagnostics: Vec<String>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl ErrorSink for CollectingSink {
    fn report(&mut self, diagnostic: &str) {
        self.diagnostics.push(diagnostic.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |d: &str| seen.push(d.to_uppercase());
            sink.report("first");
            sink.report("second");
        }
        assert_eq!(seen, vec!["FIRST", "SECOND"]);
    }

    #[test]
    fn test_collecting_sink() {
        let mut sink = CollectingSink::new();
        assert!(sink.is_empty());
        sink.report("cannot read /r/a: permission denied");
        assert_eq!(sink.len(), 1);
        assert!(sink.diagnostics[0].contains("/r/a"));
    }
}
