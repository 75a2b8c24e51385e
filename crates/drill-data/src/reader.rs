//! Activity-record loading.
//!
//! Records come either from the built-in sample table or from a JSONL file
//! holding one `{"machine_id", "process_id", "activity_type", "timestamp"}`
//! object per line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use drill_core::error::{DrillError, Result};
use drill_core::models::{ActivityKind, ActivityRecord};
use tracing::{debug, warn};

// ── Public API ────────────────────────────────────────────────────────────────

/// The twelve-row sample table: three machines, two processes each.
pub fn sample_activity() -> Vec<ActivityRecord> {
    use ActivityKind::{End, Start};

    [
        (0, 0, Start, 0.712),
        (0, 0, End, 1.52),
        (0, 1, Start, 3.14),
        (0, 1, End, 4.12),
        (1, 0, Start, 0.55),
        (1, 0, End, 1.55),
        (1, 1, Start, 0.43),
        (1, 1, End, 1.42),
        (2, 0, Start, 4.1),
        (2, 0, End, 4.512),
        (2, 1, Start, 2.5),
        (2, 1, End, 5.0),
    ]
    .into_iter()
    .map(|(machine, process, kind, ts)| ActivityRecord::new(machine, process, kind, ts))
    .collect()
}

/// Load activity records from a JSONL file.
///
/// Blank lines are ignored. Lines that are not a valid record are logged and
/// skipped; an unreadable file is an error.
pub fn load_activity_file(path: &Path) -> Result<Vec<ActivityRecord>> {
    let file = File::open(path).map_err(|source| DrillError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let records = read_activity_lines(BufReader::new(file), &path.display().to_string())?;
    debug!("Loaded {} activity records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse JSONL activity records from any buffered reader.
///
/// `source` names the input in log messages.
pub fn read_activity_lines<R: BufRead>(reader: R, source: &str) -> Result<Vec<ActivityRecord>> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match serde_json::from_str::<ActivityRecord>(trimmed) {
            Ok(record) => records.push(record),
            Err(e) => {
                skipped += 1;
                warn!("Skipping line {} of {}: {}", index + 1, source, e);
            }
        }
    }

    if skipped > 0 {
        debug!("{}: {} parsed, {} skipped", source, records.len(), skipped);
    }

    Ok(records)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
