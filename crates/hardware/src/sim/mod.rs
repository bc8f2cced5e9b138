//! Trace replay.
//!
//! Provides the trace-file parser and the driver that replays a parsed
//! trace through the hierarchy against an owned backing memory.

/// Replay driver and report.
pub mod simulator;
/// Trace record parsing and loading.
pub mod trace;
