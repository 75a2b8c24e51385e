//! Core types and computations for drill.
//!
//! Holds the shared error type, the activity-record models, the digit-set
//! search, the integer-sequence puzzles, output formatting and CLI settings.

pub mod digits;
pub mod error;
pub mod formatting;
pub mod models;
pub mod sequences;
pub mod settings;
