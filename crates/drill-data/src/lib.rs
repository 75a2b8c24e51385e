//! Data layer for drill.
//!
//! Loads activity records (built-in sample or JSONL files) and reduces them
//! to per-machine average process durations.

pub mod aggregator;
pub mod reader;

pub use drill_core as core;
