use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether an activity row marks the beginning or the end of a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Start,
    End,
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityKind::Start => f.write_str("start"),
            ActivityKind::End => f.write_str("end"),
        }
    }
}

/// A single row of the activity table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Machine the process ran on.
    pub machine_id: i64,
    /// Process identifier, unique per machine.
    pub process_id: i64,
    /// Start or end marker.
    pub activity_type: ActivityKind,
    /// Time of the event in seconds.
    pub timestamp: f64,
}

impl ActivityRecord {
    pub fn new(machine_id: i64, process_id: i64, activity_type: ActivityKind, timestamp: f64) -> Self {
        Self {
            machine_id,
            process_id,
            activity_type,
            timestamp,
        }
    }
}

/// Mean process duration for one machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineAverage {
    pub machine_id: i64,
    /// Rounded mean duration. `None` when the machine has no complete
    /// start/end pair.
    pub processing_time: Option<f64>,
}

/// Classification of an integer sequence.
///
/// Rendered through [`fmt::Display`] in both text and JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progression {
    /// Constant difference between consecutive elements.
    Arithmetic,
    /// Constant ratio between consecutive elements, no zero elements.
    Geometric,
    /// Neither of the above.
    Random,
}

impl fmt::Display for Progression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Progression::Arithmetic => "Arithmetic Progression",
            Progression::Geometric => "Geometric Progression",
            Progression::Random => "Random",
        };
        f.write_str(label)
    }
}
