//! Logging and debugging facilities for Horizon Trellis.
//!
//! This module provides:
//! - Integration with the `tracing` crate for structured logging
//! - Performance tracing hooks for profiling
//!
//! # Tracing Integration
//!
//! Horizon Trellis uses the `tracing` crate for instrumentation. To see
//! logs, install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Model errors are never logged by the library itself; they are returned
//! to the caller, and the consuming view layer decides what to report.

/// Span names used throughout Horizon Trellis for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Signal emission span.
    pub const SIGNAL: &str = "horizon_trellis::signal";
    /// Model mutation span.
    pub const MODEL: &str = "horizon_trellis::model";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_trellis_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_trellis_core::signal";
    /// Model layer target.
    pub const MODEL: &str = "horizon_trellis::model";
    /// Performance tracing target.
    pub const PERF: &str = "horizon_trellis::perf";
}

/// RAII guard for performance tracing of an operation.
///
/// Creates an entered `tracing` span that remains active until the guard is
/// dropped. Span timing is left to the installed subscriber.
///
/// # Example
///
/// ```ignore
/// use horizon_trellis_core::PerfSpan;
///
/// {
///     let _span = PerfSpan::new("rebuild_rows");
///     // ... expensive work ...
/// } // span closes here
/// ```
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "horizon_trellis::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span_guard() {
        // Must not panic with or without a subscriber installed.
        let _span = PerfSpan::new("test_operation");
    }

    #[test]
    fn test_target_names() {
        assert!(targets::SIGNAL.starts_with(targets::CORE));
    }
}
