//! Greedy move selection by resulting-position fitness
use crate::options::Move;
use crate::position::Position;

/// Pick the move whose resulting position has the greatest fitness.
///
/// Ties resolve to the last tied candidate in input order, matching a stable
/// ascending sort followed by taking the final element.
///
/// # Panics
///
/// Panics if `moves` is empty. The trial's bust and ignore guards rule that
/// out before selection is reached.
#[must_use]
pub fn best_move(moves: &[Move], position: &Position) -> Move {
    moves
        .iter()
        .copied()
        .max_by_key(|mv| position.with_move(mv).fitness())
        .expect("selection needs at least one candidate move")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Column::{Eight, Seven, Six};

    fn pos(six: u8, seven: u8, eight: u8) -> Position {
        Position::from_steps([six, seven, eight])
    }

    #[test]
    fn picks_the_greedy_maximum_in_hand_checked_cases() {
        let cases: &[(&[Move], Position, Move)] = &[
            (
                &[Move::Single(Six), Move::Pair(Eight, Eight)],
                pos(0, 0, 0),
                Move::Pair(Eight, Eight),
            ),
            (
                &[Move::Pair(Seven, Seven), Move::Pair(Eight, Eight)],
                pos(0, 0, 0),
                Move::Pair(Eight, Eight),
            ),
            (
                &[Move::Pair(Seven, Seven), Move::Pair(Eight, Eight)],
                pos(0, 3, 0),
                Move::Pair(Seven, Seven),
            ),
            (
                &[Move::Pair(Seven, Seven), Move::Pair(Six, Seven)],
                pos(0, 0, 0),
                Move::Pair(Seven, Seven),
            ),
            (
                &[Move::Single(Seven), Move::Pair(Six, Eight)],
                pos(0, 0, 0),
                Move::Pair(Six, Eight),
            ),
            (
                &[Move::Single(Seven), Move::Pair(Six, Eight)],
                pos(1, 0, 1),
                Move::Pair(Six, Eight),
            ),
            (
                &[Move::Single(Seven), Move::Single(Six)],
                pos(1, 0, 1),
                Move::Single(Six),
            ),
            (
                &[
                    Move::Pair(Seven, Seven),
                    Move::Pair(Six, Eight),
                    Move::Single(Seven),
                ],
                pos(1, 0, 1),
                Move::Pair(Six, Eight),
            ),
            (
                &[
                    Move::Pair(Seven, Seven),
                    Move::Pair(Six, Eight),
                    Move::Single(Seven),
                ],
                pos(1, 0, 0),
                Move::Pair(Six, Eight),
            ),
            (
                &[
                    Move::Pair(Seven, Seven),
                    Move::Pair(Six, Eight),
                    Move::Single(Seven),
                ],
                pos(0, 1, 0),
                Move::Pair(Seven, Seven),
            ),
            (
                &[Move::Single(Seven), Move::Pair(Six, Six)],
                pos(0, 1, 0),
                Move::Pair(Six, Six),
            ),
            (
                &[Move::Single(Six), Move::Pair(Eight, Seven)],
                pos(1, 1, 1),
                Move::Pair(Eight, Seven),
            ),
            (
                &[Move::Pair(Six, Six), Move::Single(Seven)],
                pos(1, 0, 3),
                Move::Pair(Six, Six),
            ),
            (
                &[
                    Move::Single(Seven),
                    Move::Single(Seven),
                    Move::Single(Six),
                ],
                pos(1, 2, 3),
                Move::Single(Six),
            ),
        ];

        for (moves, position, expected) in cases {
            assert_eq!(
                best_move(moves, position),
                *expected,
                "moves {moves:?} at {position:?}"
            );
        }
    }

    #[test]
    fn ties_go_to_the_last_candidate() {
        // Columns 6 and 8 share a height, so lone steps on either tie on
        // both fitness levels.
        let position = pos(0, 0, 0);
        let forward = [Move::Single(Six), Move::Single(Eight)];
        let backward = [Move::Single(Eight), Move::Single(Six)];
        assert_eq!(best_move(&forward, &position), Move::Single(Eight));
        assert_eq!(best_move(&backward, &position), Move::Single(Six));
        // Same inputs, same choice.
        assert_eq!(
            best_move(&forward, &position),
            best_move(&forward, &position)
        );
    }

    #[test]
    #[should_panic(expected = "at least one candidate")]
    fn refuses_an_empty_candidate_list() {
        let _ = best_move(&[], &Position::new());
    }
}
