use super::tally::Tally;
use crate::Probability;
use std::time::Duration;

/// Estimated showdown rates for the hero.
///
/// `trials` is the number of trials actually run (zero for the
/// no-opponent case). Rates sum to one up to floating error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equity {
    pub win: Probability,
    pub tie: Probability,
    pub lose: Probability,
    pub trials: usize,
    pub elapsed: Duration,
}

impl Equity {
    /// With nobody left to beat the hero wins outright without a single trial.
    pub fn degenerate() -> Self {
        Self {
            win: 1.,
            tie: 0.,
            lose: 0.,
            trials: 0,
            elapsed: Duration::ZERO,
        }
    }
    /// Rates rounded to [`crate::RATE_DECIMALS`] places, still summing to one.
    ///
    /// Win and tie round to the nearest unit and lose takes the remainder. If
    /// win and tie both round up past the whole, the larger gives back the
    /// excess.
    pub fn rounded(&self) -> Self {
        let scale = 10f64.powi(crate::RATE_DECIMALS);
        let whole = scale as i64;
        let units = |p: Probability| ((p * scale).round() as i64).clamp(0, whole);
        let mut win = units(self.win);
        let mut tie = units(self.tie);
        let excess = (win + tie - whole).max(0);
        match win >= tie {
            true => win -= excess,
            false => tie -= excess,
        }
        let lose = whole - win - tie;
        Self {
            win: win as Probability / scale,
            tie: tie as Probability / scale,
            lose: lose as Probability / scale,
            ..*self
        }
    }
    pub fn total(&self) -> Probability {
        self.win + self.tie + self.lose
    }
}

impl From<(Tally, Duration)> for Equity {
    fn from((tally, elapsed): (Tally, Duration)) -> Self {
        let n = tally.total();
        let rate = |k: usize| k as Probability / n.max(1) as Probability;
        Self {
            win: rate(tally.win()),
            tie: rate(tally.tie()),
            lose: rate(tally.lose()),
            trials: n,
            elapsed,
        }
    }
}

impl std::fmt::Display for Equity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "win {:.4} tie {:.4} lose {:.4} ({} trials, {:?})",
            self.win, self.tie, self.lose, self.trials, self.elapsed
        )
    }
}
