//! Command dispatch: run one puzzle and render its result.

use anyhow::{Context, Result};
use drill_core::digits::first_disjoint_from;
use drill_core::formatting::format_average_table;
use drill_core::models::{MachineAverage, Progression};
use drill_core::sequences::{classify_progression, max_adjacent_difference, parse_numbers};
use drill_core::settings::Command;
use drill_data::aggregator::average_processing_time;
use drill_data::reader::{load_activity_file, sample_activity};
use serde_json::json;
use tracing::{debug, info};

/// Result of a single puzzle run.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Averages(Vec<MachineAverage>),
    Number(u64),
    Progression(Progression),
}

impl Outcome {
    /// Plain-text rendering printed to stdout.
    pub fn render_text(&self) -> String {
        match self {
            Outcome::Averages(rows) => format_average_table(rows),
            Outcome::Number(n) => n.to_string(),
            Outcome::Progression(p) => p.to_string(),
        }
    }

    /// JSON rendering tagged with the command name.
    pub fn to_json(&self, command: &str) -> serde_json::Value {
        let result = match self {
            Outcome::Averages(rows) => json!(rows),
            Outcome::Number(n) => json!(n),
            Outcome::Progression(p) => json!(p.to_string()),
        };
        json!({ "command": command, "result": result })
    }
}

/// Execute `command` and return its outcome.
pub fn run(command: &Command) -> Result<Outcome> {
    info!("Running {}", command.name());

    let outcome = match command {
        Command::AverageTime { input } => {
            let records = match input {
                Some(path) => load_activity_file(path)
                    .with_context(|| format!("loading activity from {}", path.display()))?,
                None => sample_activity(),
            };
            Outcome::Averages(average_processing_time(&records)?)
        }
        Command::DigitSearch { seed } => Outcome::Number(first_disjoint_from(*seed)?),
        Command::Progression { numbers } => {
            let numbers = parse_numbers(numbers)?;
            Outcome::Progression(classify_progression(&numbers))
        }
        Command::MaxDiff { numbers } => {
            let numbers = parse_numbers(numbers)?;
            Outcome::Number(max_adjacent_difference(&numbers)?)
        }
    };

    debug!("{} -> {:?}", command.name(), outcome);
    Ok(outcome)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
