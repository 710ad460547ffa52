//! Outcome tally and run summary for the Monte Carlo loop
use serde::{Deserialize, Serialize};
use std::time::Duration;

use cantstop_game::Outcome;

/// Running counters over many trials. Ignored trials never count as
/// attempts; the odds are successes over busts-plus-successes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OddsTally {
    pub busts: u64,
    pub ignores: u64,
    pub successes: u64,
}

impl OddsTally {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            busts: 0,
            ignores: 0,
            successes: 0,
        }
    }

    pub const fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Bust => self.busts += 1,
            Outcome::Ignore => self.ignores += 1,
            Outcome::Success => self.successes += 1,
        }
    }

    /// All trials, including the ignored ones.
    #[must_use]
    pub const fn trials(&self) -> u64 {
        self.busts + self.ignores + self.successes
    }

    /// Trials that stayed on the capped columns to a bust or a cap.
    #[must_use]
    pub const fn attempts(&self) -> u64 {
        self.busts + self.successes
    }

    /// Fraction of attempts that capped; 0 before the first attempt.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn success_ratio(&self) -> f64 {
        let attempts = self.attempts();
        if attempts == 0 {
            0.0
        } else {
            self.successes as f64 / attempts as f64
        }
    }

    /// Half-width of the 95% Wald interval, `1.96 * sqrt(p*q/n)`; 0 before
    /// the first attempt.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn margin(&self) -> f64 {
        let attempts = self.attempts();
        if attempts == 0 {
            return 0.0;
        }
        let p = self.success_ratio();
        let q = 1.0 - p;
        1.96 * (p * q / attempts as f64).sqrt()
    }

    /// The running odds line the driver prints during a run.
    #[must_use]
    pub fn odds_line(&self) -> String {
        format!(
            "{:>10} - Odds: {} ± {}",
            self.attempts(),
            self.success_ratio(),
            self.margin()
        )
    }
}

/// Everything the final report carries about one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub seed: u64,
    pub trials: u64,
    pub attempts: u64,
    pub busts: u64,
    pub ignores: u64,
    pub successes: u64,
    pub success_ratio: f64,
    pub margin: f64,
    #[serde(with = "duration_serde")]
    pub elapsed: Duration,
}

impl RunSummary {
    #[must_use]
    pub fn new(seed: u64, tally: &OddsTally, elapsed: Duration) -> Self {
        Self {
            seed,
            trials: tally.trials(),
            attempts: tally.attempts(),
            busts: tally.busts,
            ignores: tally.ignores,
            successes: tally.successes,
            success_ratio: tally.success_ratio(),
            margin: tally.margin(),
            elapsed,
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs_f64().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = f64::deserialize(deserializer)?;
        Ok(Duration::from_secs_f64(secs.max(0.0)))
    }
}
