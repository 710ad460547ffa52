//! Per-trial step counts on the capped columns
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::column::Column;
use crate::options::Move;

/// Steps advanced on columns 6, 7 and 8 in the current attempt, indexed in
/// `Column::ALL` order. Fresh (all zero) at the start of every trial; counts
/// only ever grow while the attempt lasts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position {
    steps: [u8; 3],
}

impl Position {
    #[must_use]
    pub const fn new() -> Self {
        Self { steps: [0; 3] }
    }

    /// Build a mid-climb position; steps are in `Column::ALL` order.
    #[must_use]
    pub const fn from_steps(steps: [u8; 3]) -> Self {
        Self { steps }
    }

    #[must_use]
    pub const fn step_count(&self, column: Column) -> u8 {
        self.steps[column as usize]
    }

    /// Advance a column by one step.
    pub fn advance(&mut self, column: Column) {
        let slot = &mut self.steps[column as usize];
        *slot = slot.saturating_add(1);
    }

    /// The position after playing `mv`, leaving `self` untouched. A pair
    /// naming the same column advances it twice.
    #[must_use]
    pub fn with_move(&self, mv: &Move) -> Self {
        let mut next = *self;
        match *mv {
            Move::Single(column) => next.advance(column),
            Move::Pair(first, second) => {
                next.advance(first);
                next.advance(second);
            }
        }
        next
    }

    #[must_use]
    pub const fn is_climbing(&self, column: Column) -> bool {
        self.step_count(column) > 0
    }

    /// Whether a raw dice sum lands on a climbing column. Sums outside the
    /// capped set are never climbing.
    #[must_use]
    pub fn is_climbing_sum(&self, sum: u8) -> bool {
        Column::from_sum(sum).is_some_and(|column| self.is_climbing(column))
    }

    /// Number of columns with at least one step.
    #[must_use]
    pub fn climber_count(&self) -> usize {
        self.steps.iter().filter(|&&steps| steps > 0).count()
    }

    /// First column at or above its height, if the attempt has capped.
    /// Overshooting the height still counts as a cap.
    #[must_use]
    pub fn capped_column(&self) -> Option<Column> {
        Column::ALL
            .into_iter()
            .find(|&column| self.step_count(column) >= column.height())
    }

    /// Sum of all step counts.
    #[must_use]
    pub fn total_steps(&self) -> u32 {
        self.steps.iter().map(|&steps| u32::from(steps)).sum()
    }

    /// Comparison key for the greedy evaluator.
    #[must_use]
    pub fn fitness(&self) -> Fitness {
        let mut peak = 0.0_f64;
        let mut total = 0.0_f64;
        for column in Column::ALL {
            let ratio = f64::from(self.step_count(column)) / f64::from(column.height());
            peak = peak.max(ratio);
            total += ratio;
        }
        Fitness { peak, total }
    }
}

/// Two-level progress score: tallest relative column first, total relative
/// progress second. Compared lexicographically; never displayed.
#[derive(Debug, Clone, Copy)]
pub struct Fitness {
    peak: f64,
    total: f64,
}

impl Fitness {
    #[must_use]
    pub const fn peak(&self) -> f64 {
        self.peak
    }

    #[must_use]
    pub const fn total(&self) -> f64 {
        self.total
    }
}

impl PartialEq for Fitness {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Fitness {}

impl PartialOrd for Fitness {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fitness {
    fn cmp(&self, other: &Self) -> Ordering {
        self.peak
            .total_cmp(&other.peak)
            .then_with(|| self.total.total_cmp(&other.total))
    }
}
