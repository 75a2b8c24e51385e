//! Digit-set search: walk upward from a seed until the counter shares no
//! decimal digit with the seed.

use std::fmt;

use tracing::debug;

use crate::error::{DrillError, Result};

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 20;

const ALL_DIGITS: u16 = 0b11_1111_1111;

// ── DigitSet ──────────────────────────────────────────────────────────────────

/// The distinct decimal digits of a non-negative integer, one bit per digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitSet(u16);

impl DigitSet {
    /// Collect the digits of `value`. Zero has the single digit `0`.
    pub fn of(mut value: u64) -> Self {
        let mut bits = 0u16;
        loop {
            bits |= 1 << (value % 10);
            value /= 10;
            if value == 0 {
                break;
            }
        }
        Self(bits)
    }

    pub fn contains(self, digit: u8) -> bool {
        digit < 10 && self.0 & (1 << digit) != 0
    }

    pub fn intersects(self, other: DigitSet) -> bool {
        self.0 & other.0 != 0
    }

    /// Digits that do not appear in this set.
    pub fn complement(self) -> Self {
        Self(!self.0 & ALL_DIGITS)
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0u8..10).filter(move |&d| self.contains(d))
    }
}

impl fmt::Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, digit) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{digit}")?;
        }
        f.write_str("}")
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

/// Return the first value `>= seed` whose digit set is disjoint from the
/// digit set of `seed`.
///
/// The seed itself is tested first and always intersects itself, so the
/// result is strictly greater than `seed`.
///
/// A disjoint value exists only when the seed leaves at least one non-zero
/// digit unused (a run of that digit eventually exceeds the seed). When the
/// only unused digit is `0`, or none is, [`DrillError::NoDisjointValue`] is
/// returned instead of looping forever.
///
/// Rather than stepping by one, the counter jumps past every value sharing
/// the most significant colliding digit, so the search takes at most a few
/// steps per decimal place even for seeds near `u64::MAX`.
pub fn first_disjoint_from(seed: u64) -> Result<u64> {
    let reference = DigitSet::of(seed);
    let unused_nonzero = reference.complement().iter().any(|d| d != 0);
    if !unused_nonzero {
        return Err(DrillError::NoDisjointValue(seed));
    }

    let mut current = seed;
    let mut steps = 0u32;
    while let Some(place) = leading_collision(current, reference) {
        // Every value below the next multiple of `place` keeps the colliding digit.
        current = (current / place)
            .checked_add(1)
            .and_then(|prefix| prefix.checked_mul(place))
            .ok_or(DrillError::SearchOverflow(seed))?;
        steps += 1;
    }

    debug!(
        "Seed {} digits {}: first disjoint value {} after {} jumps",
        seed, reference, current, steps
    );

    Ok(current)
}

/// Place value (1, 10, 100, ...) of the most significant digit of `value`
/// that belongs to `reference`, or `None` when the digit sets are disjoint.
fn leading_collision(value: u64, reference: DigitSet) -> Option<u64> {
    let mut rest = value;
    let mut place = 1u64;
    let mut found = None;
    loop {
        if reference.contains((rest % 10) as u8) {
            found = Some(place);
        }
        rest /= 10;
        if rest == 0 {
            return found;
        }
        place *= 10;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
