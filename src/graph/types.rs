use serde::{Deserialize, Serialize};

/// Options controlling a filesystem build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOptions {
    /// Deepest directory level that is enumerated (root is depth 0).
    /// `None` walks the whole tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,

    /// Skip descent into directories whose canonical identity was already
    /// entered during this build
    #[serde(default = "default_detect_cycles")]
    pub detect_cycles: bool,
}

fn default_detect_cycles() -> bool {
    true
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            max_depth: None,
            detect_cycles: default_detect_cycles(),
        }
    }
}

/// Summary of a filesystem build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Directories whose children were successfully enumerated
    pub directories_visited: usize,
    /// Edges written into the graph
    pub edges_added: usize,
    /// Diagnostics sent to the error sink
    pub errors: usize,
    /// Directories left unexpanded because they were already entered
    pub cycles_skipped: usize,
    /// Directories left unexpanded because of `max_depth`
    pub depth_limited: usize,
    /// True when a cancellation stopped the build early
    pub interrupted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_options_default() {
        let opts = BuildOptions::default();
        assert_eq!(opts.max_depth, None);
        assert!(opts.detect_cycles);
    }

    #[test]
    fn test_build_options_from_partial_toml() {
        let opts: BuildOptions = toml::from_str("max_depth = 3").unwrap();
        assert_eq!(opts.max_depth, Some(3));
        assert!(opts.detect_cycles);

        let opts: BuildOptions = toml::from_str("detect_cycles = false").unwrap();
        assert_eq!(opts.max_depth, None);
        assert!(!opts.detect_cycles);
    }
}
