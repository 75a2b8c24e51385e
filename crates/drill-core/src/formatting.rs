use crate::models::MachineAverage;

/// Placeholder printed for a missing value.
pub const MISSING: &str = "<NA>";

/// Round `value` to `decimals` places, exact halves to the even digit.
///
/// This is the data-frame `round` rule: the scaled value is rounded with
/// ties-to-even, so `0.0125` becomes `0.012`.
///
/// # Examples
///
/// ```
/// use drill_core::formatting::round_to;
///
/// assert_eq!(round_to(0.8940000000000001, 3), 0.894);
/// assert_eq!(round_to(2.5, 0), 2.0);
/// assert_eq!(round_to(-2.5, 0), -2.0);
/// ```
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}

/// Render an optional float the way a data frame cell shows it.
///
/// Whole numbers keep one decimal (`1.0`), missing values print as `<NA>`.
pub fn format_value(value: Option<f64>) -> String {
    match value {
        None => MISSING.to_string(),
        Some(v) if v.fract() == 0.0 && v.is_finite() => format!("{:.1}", v),
        Some(v) => format!("{}", v),
    }
}

/// Render per-machine averages as a right-aligned table with a row index.
///
/// ```text
///    machine_id  processing_time
/// 0           0            0.894
/// 1           1            0.995
/// ```
pub fn format_average_table(rows: &[MachineAverage]) -> String {
    let cells: Vec<[String; 3]> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            [
                i.to_string(),
                row.machine_id.to_string(),
                format_value(row.processing_time),
            ]
        })
        .collect();

    render_table(["", "machine_id", "processing_time"], &cells)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Right-align every column to its widest cell, two spaces between columns.
fn render_table<const N: usize>(headers: [&str; N], rows: &[[String; N]]) -> String {
    let mut widths = headers.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(join_row(headers.into_iter(), &widths));
    for row in rows {
        lines.push(join_row(row.iter().map(String::as_str), &widths));
    }
    lines.join("\n")
}

fn join_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, &width)| format!("{:>width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join("  ")
}

// ── Tests ──────────────────────────────────────────────────────────────────────
