use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{DirGraphError, Result};

/// Environment variable consulted after `RUST_LOG`
pub const LOG_ENV_VAR: &str = "DIRGRAPH_LOG";

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", root = %root);
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize structured logging for an application embedding dirgraph.
///
/// `verbose` selects debug output for the `dirgraph` target; an explicit
/// `log_level` (either a bare level or a full filter directive) wins over it.
/// Events go to stderr, compact by default or as JSON lines with `log_json`.
pub fn init_tracing(verbose: bool, log_level: Option<&str>, log_json: bool) -> Result<()> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level,
        (true, None) => "dirgraph=debug",
        (false, None) => "dirgraph=warn",
    };

    init_with_level(level, log_json)
}

/// Build the filter directive for a level given on the command line or in config
pub fn filter_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("dirgraph={}", level)
    }
}

/// Parse `level` into a filter, rejecting directives `EnvFilter` cannot read
fn level_filter(level: &str) -> Result<EnvFilter> {
    let directive = filter_directive(level);
    EnvFilter::try_new(&directive).map_err(|e| {
        tracing::debug!(directive = %directive, error = %e, "Rejected log filter");
        DirGraphError::invalid_value("log level", level)
    })
}

fn init_with_level(level: &str, log_json: bool) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV_VAR))
    {
        Ok(filter) => filter,
        Err(_) => level_filter(level)?,
    };

    let registry = tracing_subscriber::registry().with(filter);

    let installed = if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()
    };

    installed.map_err(|e| DirGraphError::Other(format!("failed to install logger: {}", e)))
}
