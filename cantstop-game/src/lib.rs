//! Core Can't Stop mechanics for estimating the odds of capping columns
//! 6, 7 and 8 in one continuous climbing attempt.
//!
//! A trial repeatedly rolls four dice, derives the three pairings, filters
//! and splits them by climber count, restricts to moves that stay on the
//! capped columns, applies the greedy best move and stops on a terminal
//! outcome (bust, ignore or success). Randomness is always injected, so
//! drivers and tests control the stream.

pub mod column;
pub mod dice;
pub mod options;
pub mod policy;
pub mod position;
pub mod trial;

pub use column::Column;
pub use dice::{DiceRoll, SumPair};
pub use options::{Move, MoveSet, OptionSet, RollOption, cap_moves, legal_options};
pub use policy::best_move;
pub use position::{Fitness, Position};
pub use trial::{Outcome, TrialSession, TurnObserver, TurnRecord, run_trial, run_trial_observed};
