//! Per-machine average process duration.
//!
//! Start and end rows are paired by `(machine_id, process_id)`, each pair
//! becomes one duration, and durations are averaged per machine.

use std::collections::BTreeMap;

use drill_core::error::{DrillError, Result};
use drill_core::formatting::round_to;
use drill_core::models::{ActivityKind, ActivityRecord, MachineAverage};
use tracing::{debug, warn};

/// Decimal places kept in the reported averages.
pub const AVERAGE_DECIMALS: u32 = 3;

// ── ProcessSpan ───────────────────────────────────────────────────────────────

/// Start and end timestamps of one process, either of which may be missing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessSpan {
    pub machine_id: i64,
    pub process_id: i64,
    pub start: Option<f64>,
    pub end: Option<f64>,
}

impl ProcessSpan {
    fn new(machine_id: i64, process_id: i64) -> Self {
        Self {
            machine_id,
            process_id,
            start: None,
            end: None,
        }
    }

    /// `end - start`, or `None` when either side is missing.
    pub fn duration(&self) -> Option<f64> {
        Some(self.end? - self.start?)
    }

    fn record(&mut self, kind: ActivityKind, timestamp: f64) -> Result<()> {
        let slot = match kind {
            ActivityKind::Start => &mut self.start,
            ActivityKind::End => &mut self.end,
        };
        if slot.is_some() {
            return Err(DrillError::DuplicateActivity {
                machine_id: self.machine_id,
                process_id: self.process_id,
                kind: kind.to_string(),
            });
        }
        *slot = Some(timestamp);
        Ok(())
    }
}

// ── DurationAggregator ────────────────────────────────────────────────────────

/// Stateless helper that reshapes activity rows into durations and averages.
pub struct DurationAggregator;

impl DurationAggregator {
    /// Pair start and end rows by `(machine_id, process_id)`.
    ///
    /// Returns spans sorted by machine then process. A second row with the
    /// same machine, process and kind is rejected.
    pub fn process_spans(records: &[ActivityRecord]) -> Result<Vec<ProcessSpan>> {
        let mut spans: BTreeMap<(i64, i64), ProcessSpan> = BTreeMap::new();

        for record in records {
            spans
                .entry((record.machine_id, record.process_id))
                .or_insert_with(|| ProcessSpan::new(record.machine_id, record.process_id))
                .record(record.activity_type, record.timestamp)?;
        }

        Ok(spans.into_values().collect())
    }

    /// Mean span duration per machine, rounded to [`AVERAGE_DECIMALS`].
    ///
    /// Incomplete spans contribute nothing to the mean. A machine whose spans
    /// are all incomplete is reported with `processing_time: None`.
    pub fn average_by_machine(spans: &[ProcessSpan]) -> Vec<MachineAverage> {
        // (sum, count) of complete durations per machine.
        let mut totals: BTreeMap<i64, (f64, u32)> = BTreeMap::new();

        for span in spans {
            let entry = totals.entry(span.machine_id).or_insert((0.0, 0));
            match span.duration() {
                Some(duration) => {
                    entry.0 += duration;
                    entry.1 += 1;
                }
                None => warn!(
                    "Machine {} process {} is missing its {} row",
                    span.machine_id,
                    span.process_id,
                    if span.start.is_none() { "start" } else { "end" }
                ),
            }
        }

        totals
            .into_iter()
            .map(|(machine_id, (sum, count))| MachineAverage {
                machine_id,
                processing_time: (count > 0)
                    .then(|| round_to(sum / f64::from(count), AVERAGE_DECIMALS)),
            })
            .collect()
    }
}

/// Average processing time per machine, sorted by `machine_id`.
pub fn average_processing_time(records: &[ActivityRecord]) -> Result<Vec<MachineAverage>> {
    let spans = DurationAggregator::process_spans(records)?;
    let averages = DurationAggregator::average_by_machine(&spans);
    debug!(
        "Averaged {} processes across {} machines",
        spans.len(),
        averages.len()
    );
    Ok(averages)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::sample_activity;
    use drill_core::models::ActivityKind::{End, Start};

    fn row(machine: i64, process: i64, kind: ActivityKind, ts: f64) -> ActivityRecord {
        ActivityRecord::new(machine, process, kind, ts)
    }

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("value present");
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    // ── average_processing_time ───────────────────────────────────────────────

    #[test]
    fn test_sample_averages() {
        let averages = average_processing_time(&sample_activity()).unwrap();

        let ids: Vec<i64> = averages.iter().map(|a| a.machine_id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_close(averages[0].processing_time, 0.894);
        assert_close(averages[1].processing_time, 0.995);
        assert_close(averages[2].processing_time, 1.456);
    }

    #[test]
    fn test_row_order_does_not_matter() {
        let mut records = sample_activity();
        records.reverse();
        let reversed = average_processing_time(&records).unwrap();
        let original = average_processing_time(&sample_activity()).unwrap();
        assert_eq!(reversed, original);
    }

    #[test]
    fn test_empty_input() {
        assert!(average_processing_time(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_missing_end_is_skipped() {
        let records = vec![
            row(0, 0, Start, 1.0),
            row(0, 0, End, 3.0),
            row(0, 1, Start, 5.0),
        ];
        let averages = average_processing_time(&records).unwrap();
        assert_eq!(averages.len(), 1);
        assert_close(averages[0].processing_time, 2.0);
    }

    #[test]
    fn test_machine_without_complete_pair_is_missing() {
        let records = vec![
            row(0, 0, Start, 1.0),
            row(0, 0, End, 1.5),
            row(4, 0, End, 9.0),
        ];
        let averages = average_processing_time(&records).unwrap();
        assert_eq!(
            averages[1],
            MachineAverage {
                machine_id: 4,
                processing_time: None
            }
        );
    }

    #[test]
    fn test_duplicate_row_is_rejected() {
        let records = vec![
            row(1, 2, Start, 1.0),
            row(1, 2, Start, 1.2),
            row(1, 2, End, 3.0),
        ];
        let err = average_processing_time(&records).unwrap_err();
        assert!(matches!(
            err,
            DrillError::DuplicateActivity {
                machine_id: 1,
                process_id: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_average_is_rounded() {
        let records = vec![
            row(0, 0, Start, 0.0),
            row(0, 0, End, 1.0),
            row(0, 1, Start, 0.0),
            row(0, 1, End, 1.0),
            row(0, 2, Start, 0.0),
            row(0, 2, End, 2.0),
        ];
        let averages = average_processing_time(&records).unwrap();
        assert_eq!(averages[0].processing_time, Some(1.333));
    }

    #[test]
    fn test_average_midpoint_rounds_to_even() {
        let records = vec![
            row(0, 0, Start, 0.0),
            row(0, 0, End, 0.0),
            row(0, 1, Start, 0.0),
            row(0, 1, End, 0.025),
        ];
        let averages = average_processing_time(&records).unwrap();
        assert_eq!(averages[0].processing_time, Some(0.012));
    }

    #[test]
    fn test_well_formed_tables_have_non_negative_durations() {
        let mut records = Vec::new();
        for machine in 0..6i64 {
            for process in 0..5i64 {
                let start = ((machine * 7 + process * 3) % 11) as f64 * 0.37;
                let end = start + ((machine + process) % 5) as f64 * 0.25;
                records.push(row(machine, process, End, end));
                records.push(row(machine, process, Start, start));
            }
        }

        let spans = DurationAggregator::process_spans(&records).unwrap();
        assert_eq!(spans.len(), 30);
        for span in &spans {
            assert!(span.duration().expect("complete span") >= 0.0);
        }

        for average in average_processing_time(&records).unwrap() {
            assert!(average.processing_time.expect("complete machine") >= 0.0);
        }
    }

    // ── ProcessSpan ───────────────────────────────────────────────────────────

    #[test]
    fn test_span_duration() {
        let spans = DurationAggregator::process_spans(&[
            row(2, 1, End, 5.0),
            row(2, 1, Start, 2.5),
        ])
        .unwrap();
        assert_eq!(spans[0].duration(), Some(2.5));
    }

    #[test]
    fn test_span_without_start_has_no_duration() {
        let spans = DurationAggregator::process_spans(&[row(0, 0, End, 5.0)]).unwrap();
        assert_eq!(spans[0].duration(), None);
    }
}
