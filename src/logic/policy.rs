//! Range Policy
//!
//! Applies single steps to a position under a [`Range`], either clamping at
//! the bounds or wrapping around them. Multi-step requests are applied one
//! repetition at a time so a `step` that does not divide the range still
//! lands where repeated single steps would.

use crate::types::{Count, Direction, Range};

/// Result of applying one or more steps
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    /// Position after all repetitions
    pub position: Count,
    /// Whether any repetition counts as a change
    pub changed: bool,
}

/// Apply one step to `position`
///
/// A non-circular step past a bound clamps to that bound and only counts as
/// a change if the position actually moved. A circular step past a bound
/// wraps so the displacement modulo [`Range::span`] is preserved.
#[must_use]
pub fn step_once(
    position: Count,
    range: Range,
    circular: bool,
    direction: Direction,
) -> StepOutcome {
    let step = i64::from(range.step());
    let candidate = match direction {
        Direction::Up => i64::from(position) + step,
        Direction::Down => i64::from(position) - step,
    };

    let (min, max) = (i64::from(range.min()), i64::from(range.max()));
    if candidate >= min && candidate <= max {
        return StepOutcome {
            position: to_count(candidate),
            changed: true,
        };
    }

    if circular {
        let wrapped = min + (candidate - min).rem_euclid(range.span());
        StepOutcome {
            position: to_count(wrapped),
            changed: true,
        }
    } else {
        let bound = match direction {
            Direction::Up => range.max(),
            Direction::Down => range.min(),
        };
        StepOutcome {
            position: bound,
            changed: bound != position,
        }
    }
}

/// Apply `times` steps in `direction`, one repetition at a time
#[must_use]
pub fn step_many(
    position: Count,
    range: Range,
    circular: bool,
    direction: Direction,
    times: u8,
) -> StepOutcome {
    let mut outcome = StepOutcome {
        position,
        changed: false,
    };

    for _ in 0..times {
        let next = step_once(outcome.position, range, circular, direction);
        outcome.position = next.position;
        outcome.changed |= next.changed;
    }

    outcome
}

/// Bring `position` back inside `range`, snapping to the minimum if outside
///
/// Returns `None` when the position is already inside.
#[must_use]
pub const fn reclamp(position: Count, range: Range) -> Option<Count> {
    if range.contains(position) {
        None
    } else {
        Some(range.min())
    }
}

// Values produced here always lie within an i32 range.
#[allow(clippy::cast_possible_truncation)]
const fn to_count(value: i64) -> Count {
    value as Count
}
