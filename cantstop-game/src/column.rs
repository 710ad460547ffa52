//! The three columns a capping attempt is allowed to touch
use serde::{Deserialize, Serialize};
use std::fmt;

/// A column of the 6-7-8 capping scenario. Other columns are intentionally
/// unrepresentable; dice sums outside the set simply fail to map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Six,
    Seven,
    Eight,
}

impl Column {
    /// Every column, in board order. Also the `Position` index order.
    pub const ALL: [Self; 3] = [Self::Six, Self::Seven, Self::Eight];

    /// Map a dice sum to its column, if it is one of the capped set.
    #[must_use]
    pub const fn from_sum(sum: u8) -> Option<Self> {
        match sum {
            6 => Some(Self::Six),
            7 => Some(Self::Seven),
            8 => Some(Self::Eight),
            _ => None,
        }
    }

    /// The dice sum this column is reached by.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
        }
    }

    /// Steps required to cap the column: 13 for the middle column, 11 for
    /// its neighbours.
    #[must_use]
    pub const fn height(self) -> u8 {
        match self {
            Self::Seven => 13,
            Self::Six | Self::Eight => 11,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
