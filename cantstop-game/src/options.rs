//! Legal options for a roll and their restriction to the capped columns
use smallvec::SmallVec;
use std::fmt;

use crate::column::Column;
use crate::dice::SumPair;
use crate::position::Position;

/// Options produced for one roll; at most two per pairing, so six total.
pub type OptionSet = SmallVec<[RollOption; 6]>;

/// Capped-column moves surviving the all-6-7-8 restriction.
pub type MoveSet = SmallVec<[Move; 6]>;

/// A playable option over raw dice sums: a whole pairing, or one half of a
/// pairing the player was forced to split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RollOption {
    Pair(u8, u8),
    Single(u8),
}

impl RollOption {
    /// Convert to a column-typed move if every sum lands on 6, 7 or 8.
    #[must_use]
    pub fn as_cap_move(&self) -> Option<Move> {
        match *self {
            Self::Single(sum) => Column::from_sum(sum).map(Move::Single),
            Self::Pair(first, second) => {
                if let Some(a) = Column::from_sum(first)
                    && let Some(b) = Column::from_sum(second)
                {
                    Some(Move::Pair(a, b))
                } else {
                    None
                }
            }
        }
    }
}

impl fmt::Display for RollOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Pair(first, second) => write!(f, "[{first}, {second}]"),
            Self::Single(sum) => write!(f, "[{sum}]"),
        }
    }
}

/// An option restricted to the capped columns, ready to apply. A pair may
/// name the same column twice and advances it twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Pair(Column, Column),
    Single(Column),
}

impl Move {
    /// How many steps the move advances in total.
    #[must_use]
    pub const fn step_count(self) -> u8 {
        match self {
            Self::Pair(..) => 2,
            Self::Single(_) => 1,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Pair(first, second) => write!(f, "[{first}, {second}]"),
            Self::Single(column) => write!(f, "[{column}]"),
        }
    }
}

/// Filter and split the raw pairings against the current position.
///
/// With 0 or 1 climbing columns every pairing passes through whole. With 2,
/// a pairing of two distinct columns that are both new would start a third
/// climb, so it is offered as two separate singles instead. With 3 the
/// attempt is locked to the climbing columns and each pairing is trimmed to
/// its climbing part, possibly to nothing.
///
/// Output preserves pairing order; a split yields the first sum before the
/// second. The boolean conditions mirror the measured game rules exactly.
#[must_use]
pub fn legal_options(raw: [SumPair; 3], position: &Position) -> OptionSet {
    let climbers = position.climber_count();
    let mut options = OptionSet::new();
    for [x, y] in raw {
        match climbers {
            0 | 1 => options.push(RollOption::Pair(x, y)),
            2 => {
                let both_new = !position.is_climbing_sum(x) && !position.is_climbing_sum(y);
                if both_new && x != y {
                    options.push(RollOption::Single(x));
                    options.push(RollOption::Single(y));
                } else {
                    options.push(RollOption::Pair(x, y));
                }
            }
            _ => match (position.is_climbing_sum(x), position.is_climbing_sum(y)) {
                (true, true) => options.push(RollOption::Pair(x, y)),
                (true, false) => options.push(RollOption::Single(x)),
                (false, true) => options.push(RollOption::Single(y)),
                (false, false) => {}
            },
        }
    }
    options
}

/// The all-6-7-8 restriction: keep options whose every sum maps into the
/// capped set, as column-typed moves. Order preserved.
#[must_use]
pub fn cap_moves(options: &[RollOption]) -> MoveSet {
    options
        .iter()
        .filter_map(RollOption::as_cap_move)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> [SumPair; 3] {
        [[8, 8], [4, 7], [5, 6]]
    }

    fn position(six: u8, seven: u8, eight: u8) -> Position {
        Position::from_steps([six, seven, eight])
    }

    #[test]
    fn no_climbers_pass_everything_through() {
        let options = legal_options(raw(), &position(0, 0, 0));
        assert_eq!(
            options.as_slice(),
            &[
                RollOption::Pair(8, 8),
                RollOption::Pair(4, 7),
                RollOption::Pair(5, 6),
            ]
        );
    }

    #[test]
    fn one_climber_passes_everything_through() {
        for climb in [position(0, 0, 1), position(1, 0, 0)] {
            let options = legal_options(raw(), &climb);
            assert_eq!(
                options.as_slice(),
                &[
                    RollOption::Pair(8, 8),
                    RollOption::Pair(4, 7),
                    RollOption::Pair(5, 6),
                ]
            );
        }
    }

    #[test]
    fn two_climbers_split_a_pair_of_new_distinct_columns() {
        let options = legal_options(raw(), &position(0, 1, 1));
        assert_eq!(
            options.as_slice(),
            &[
                RollOption::Pair(8, 8),
                RollOption::Pair(4, 7),
                RollOption::Single(5),
                RollOption::Single(6),
            ]
        );
    }

    #[test]
    fn two_climbers_keep_pairs_touching_a_climb() {
        let options = legal_options(raw(), &position(1, 1, 0));
        assert_eq!(
            options.as_slice(),
            &[
                RollOption::Pair(8, 8),
                RollOption::Pair(4, 7),
                RollOption::Pair(5, 6),
            ]
        );
    }

    #[test]
    fn two_climbers_keep_same_sum_pairs_whole() {
        // A doubled new column does not start two climbs, so no split.
        let options = legal_options([[5, 5], [2, 2], [9, 9]], &position(0, 1, 1));
        assert_eq!(
            options.as_slice(),
            &[
                RollOption::Pair(5, 5),
                RollOption::Pair(2, 2),
                RollOption::Pair(9, 9),
            ]
        );
    }

    #[test]
    fn three_climbers_lock_to_climbing_columns() {
        let options = legal_options(raw(), &position(1, 1, 1));
        assert_eq!(
            options.as_slice(),
            &[
                RollOption::Pair(8, 8),
                RollOption::Single(7),
                RollOption::Single(6),
            ]
        );
    }

    #[test]
    fn three_climbers_drop_pairings_missing_every_climb() {
        let options = legal_options([[2, 3], [9, 10], [11, 12]], &position(1, 1, 1));
        assert!(options.is_empty());
    }

    #[test]
    fn restriction_keeps_only_capped_columns() {
        let options = legal_options(raw(), &position(0, 1, 1));
        let moves = cap_moves(&options);
        assert_eq!(
            moves.as_slice(),
            &[
                Move::Pair(Column::Eight, Column::Eight),
                Move::Single(Column::Six),
            ]
        );
    }

    #[test]
    fn a_pair_with_one_stray_sum_is_not_a_cap_move() {
        assert_eq!(RollOption::Pair(4, 7).as_cap_move(), None);
        assert_eq!(RollOption::Pair(7, 9).as_cap_move(), None);
        assert_eq!(
            RollOption::Pair(7, 8).as_cap_move(),
            Some(Move::Pair(Column::Seven, Column::Eight))
        );
        assert_eq!(RollOption::Single(5).as_cap_move(), None);
        assert_eq!(
            RollOption::Single(6).as_cap_move(),
            Some(Move::Single(Column::Six))
        );
    }

    #[test]
    fn options_and_moves_display_like_lists() {
        assert_eq!(RollOption::Pair(4, 7).to_string(), "[4, 7]");
        assert_eq!(RollOption::Single(5).to_string(), "[5]");
        assert_eq!(
            Move::Pair(Column::Eight, Column::Eight).to_string(),
            "[8, 8]"
        );
        assert_eq!(Move::Single(Column::Six).to_string(), "[6]");
    }
}
