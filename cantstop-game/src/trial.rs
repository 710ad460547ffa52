//! Single-trial state machine for one capping attempt
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dice::{DiceRoll, SumPair};
use crate::options::{Move, MoveSet, OptionSet, cap_moves, legal_options};
use crate::policy::best_move;
use crate::position::Position;

/// Terminal classification of one climbing attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The roll offered no legal option at all.
    Bust,
    /// A legal option existed but every one left the 6-7-8 subset; the
    /// attempt is discarded from statistics.
    Ignore,
    /// Some column reached its full height.
    Success,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Bust => "bust",
            Self::Ignore => "ignore",
            Self::Success => "success",
        };
        f.write_str(label)
    }
}

/// Everything observable about one turn: the roll, each derivation stage,
/// the chosen move (absent on bust and ignore turns), the position after the
/// turn and the terminal outcome if the trial ended.
#[derive(Debug, Clone)]
pub struct TurnRecord {
    pub dice: DiceRoll,
    pub raw_options: [SumPair; 3],
    pub options: OptionSet,
    pub cap_moves: MoveSet,
    pub chosen: Option<Move>,
    pub position: Position,
    pub terminal: Option<Outcome>,
}

/// Per-turn tracing hook. Observers must not affect outcome semantics; they
/// only look at the records.
pub trait TurnObserver {
    fn turn_played(&mut self, record: &TurnRecord);
}

impl<F: FnMut(&TurnRecord)> TurnObserver for F {
    fn turn_played(&mut self, record: &TurnRecord) {
        self(record);
    }
}

/// One climbing attempt in progress: Active until a turn reports a terminal
/// outcome. Positions are never reused across trials.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrialSession {
    position: Position,
}

impl TrialSession {
    /// Start a fresh attempt with every column at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            position: Position::new(),
        }
    }

    /// Resume from a mid-climb position.
    #[must_use]
    pub const fn from_position(position: Position) -> Self {
        Self { position }
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Play one turn with the given dice: derive the pairings, filter and
    /// split them, restrict to the capped columns, then pick and apply the
    /// best move.
    ///
    /// Empty options mean `Bust`; a non-empty option set whose restriction
    /// is empty means `Ignore`. Both end the trial before any selection, so
    /// `best_move` always sees candidates. A column reaching its height ends
    /// the trial with `Success`.
    pub fn play_turn(&mut self, dice: DiceRoll) -> TurnRecord {
        let raw_options = dice.pairings();
        let options = legal_options(raw_options, &self.position);
        let moves = cap_moves(&options);

        let (chosen, terminal) = if options.is_empty() {
            (None, Some(Outcome::Bust))
        } else if moves.is_empty() {
            (None, Some(Outcome::Ignore))
        } else {
            let choice = best_move(&moves, &self.position);
            self.position = self.position.with_move(&choice);
            let capped = self.position.capped_column().map(|_| Outcome::Success);
            (Some(choice), capped)
        };

        TurnRecord {
            dice,
            raw_options,
            options,
            cap_moves: moves,
            chosen,
            position: self.position,
            terminal,
        }
    }
}

/// Run one attempt to a terminal outcome.
pub fn run_trial<R: Rng>(rng: &mut R) -> Outcome {
    run_trial_observed(rng, &mut |_: &TurnRecord| {})
}

/// Run one attempt, reporting every turn to the observer.
pub fn run_trial_observed<R: Rng, O: TurnObserver + ?Sized>(
    rng: &mut R,
    observer: &mut O,
) -> Outcome {
    let mut session = TrialSession::new();
    loop {
        let record = session.play_turn(DiceRoll::roll(rng));
        observer.turn_played(&record);
        if let Some(outcome) = record.terminal {
            return outcome;
        }
    }
}
