//! Four-dice rolls and their pairings into column sums
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One way to spend a roll: the sums of two disjoint dice pairs.
pub type SumPair = [u8; 2];

/// An ordered roll of four six-sided dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiceRoll([u8; 4]);

impl DiceRoll {
    /// Wrap explicit face values. Faces are expected in 1..=6.
    #[must_use]
    pub const fn new(faces: [u8; 4]) -> Self {
        Self(faces)
    }

    /// Roll four dice from the injected generator.
    pub fn roll<R: Rng>(rng: &mut R) -> Self {
        let mut faces = [0u8; 4];
        for face in &mut faces {
            *face = rng.gen_range(1..=6);
        }
        Self(faces)
    }

    #[must_use]
    pub const fn faces(self) -> [u8; 4] {
        self.0
    }

    /// The three ways to split the roll into two pairs of sums, in fixed
    /// order: (d0+d1, d2+d3), (d0+d2, d1+d3), (d0+d3, d1+d2).
    #[must_use]
    pub const fn pairings(self) -> [SumPair; 3] {
        let [a, b, c, d] = self.0;
        [[a + b, c + d], [a + c, b + d], [a + d, b + c]]
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "[{a}, {b}, {c}, {d}]")
    }
}
