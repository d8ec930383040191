//! Logging facilities for listkit.
//!
//! listkit uses the `tracing` crate for instrumentation. The library never
//! installs a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("listkit=debug")
//!     .init();
//! ```
//!
//! The [`targets`] constants can be used in filter directives to select a
//! single subsystem.

/// Target names for log filtering.
pub mod targets {
    /// Core target.
    pub const CORE: &str = "listkit_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "listkit_core::signal";
    /// Property system target.
    pub const PROPERTY: &str = "listkit_core::property";
    /// List state target.
    pub const LIST: &str = "listkit::list";
    /// Configuration and input parsing target.
    pub const CONFIG: &str = "listkit::config";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Used to bracket one list operation so that events logged while it runs
/// (including signal emissions) are attributed to it.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new span for the named operation.
    pub fn new(operation: &'static str) -> Self {
        let span = tracing::debug_span!(target: "listkit::perf", "list_operation", operation);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span_with_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let _span = PerfSpan::new("test_operation");
            tracing::debug!(target: targets::LIST, value = 1, "inside span");
        });
    }

    #[test]
    fn test_targets_are_namespaced() {
        for target in [targets::SIGNAL, targets::PROPERTY] {
            assert!(target.starts_with(targets::CORE));
        }
        assert!(targets::LIST.starts_with("listkit::"));
    }
}
