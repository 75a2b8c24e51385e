//! Puzzles over a short ordered list of integers: progression
//! classification and the largest gap between neighbours.

use crate::error::{DrillError, Result};
use crate::models::Progression;

/// Literal input of the progression puzzle.
pub const DEFAULT_PROGRESSION_INPUT: &str = "1 2 4 8 16";

/// Literal input of the adjacent-difference puzzle.
pub const DEFAULT_DIFFERENCE_INPUT: &str = "3 4 34";

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse a whitespace-separated list of integers such as `"3 4 34"`.
pub fn parse_numbers(text: &str) -> Result<Vec<i64>> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| DrillError::InvalidNumber(token.to_string()))
        })
        .collect()
}

// ── Progression ───────────────────────────────────────────────────────────────

/// Classify `numbers` as arithmetic, geometric or random.
///
/// Arithmetic is checked first, so a constant sequence such as `[3, 3, 3]`
/// is arithmetic even though its ratio is constant too. Sequences with fewer
/// than three elements are always arithmetic.
pub fn classify_progression(numbers: &[i64]) -> Progression {
    if is_arithmetic(numbers) {
        Progression::Arithmetic
    } else if is_geometric(numbers) {
        Progression::Geometric
    } else {
        Progression::Random
    }
}

/// Every consecutive difference equals `numbers[1] - numbers[0]`.
pub fn is_arithmetic(numbers: &[i64]) -> bool {
    let [first, second, ..] = numbers else {
        return true;
    };
    let step = i128::from(*second) - i128::from(*first);
    numbers
        .windows(2)
        .all(|w| i128::from(w[1]) - i128::from(w[0]) == step)
}

/// Every consecutive ratio equals `numbers[1] / numbers[0]`.
///
/// Undefined (false) when any element is zero. Ratios are compared by
/// cross-multiplication in `i128`, so no precision is lost.
pub fn is_geometric(numbers: &[i64]) -> bool {
    if numbers.contains(&0) {
        return false;
    }
    let [first, second, ..] = numbers else {
        return true;
    };
    let (first, second) = (i128::from(*first), i128::from(*second));
    numbers
        .windows(2)
        .all(|w| i128::from(w[1]) * first == i128::from(w[0]) * second)
}

// ── Adjacent difference ───────────────────────────────────────────────────────

/// Largest absolute difference between an element and its successor.
pub fn max_adjacent_difference(numbers: &[i64]) -> Result<u64> {
    numbers
        .windows(2)
        .map(|w| w[0].abs_diff(w[1]))
        .max()
        .ok_or(DrillError::TooFewValues {
            needed: 2,
            got: numbers.len(),
        })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
