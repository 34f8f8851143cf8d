//! Tracing targets.
//!
//! tidycss reports through the `tracing` crate. Every diagnostic recorded in a
//! [`DiagnosticLog`](crate::DiagnosticLog) is mirrored as an event: routine
//! normalizations at `debug`, malformed input at `warn`. Install a subscriber
//! to see them:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("tidycss::parser=debug")
//!     .init();
//! ```

/// Target names for log filtering.
pub mod targets {
    /// Lexer state machine and diagnostics.
    pub const PARSER: &str = "tidycss::parser";
    /// Document accumulator.
    pub const DOCUMENT: &str = "tidycss::document";
    /// Optimiser/printer pipeline.
    pub const PIPELINE: &str = "tidycss::pipeline";
}
