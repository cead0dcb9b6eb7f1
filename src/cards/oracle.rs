use super::hand::Hand;
use super::strength::Strength;

/// A totally ordered showdown score where lower is stronger.
///
/// Packs category, defining ranks, and kickers into one word so that a trial
/// compares hands with a single integer comparison. Equal scores tie.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Score(u32);

impl Score {
    /// Whether this score beats another at showdown.
    pub fn beats(&self, other: &Self) -> bool {
        self < other
    }
}

/// u32 isomorphism
impl From<Score> for u32 {
    fn from(s: Score) -> Self {
        s.0
    }
}
impl From<u32> for Score {
    fn from(n: u32) -> Self {
        Self(n)
    }
}

/// category (4 bits) | first rank (4) | second rank (4) | kickers (13)
/// packed so that stronger means larger, then flipped
impl From<Strength> for Score {
    fn from(strength: Strength) -> Self {
        let (r1, r2) = strength.value().ranks();
        let packed = 0u32
            | (strength.value().category() as u32) << 21
            | (u8::from(r1) as u32) << 17
            | (u8::from(r2) as u32) << 13
            | u16::from(strength.kicks()) as u32;
        Self(u32::MAX - packed)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

/// Scores a seven-card showdown hand.
///
/// Implementations must be pure: the same Hand always gets the same Score.
/// `Sync` lets parallel workers share one oracle by reference.
pub trait Oracle: Sync {
    fn score(&self, hand: Hand) -> Score;
}

/// The bitwise [`super::evaluator::Evaluator`], behind the [`Oracle`] seam.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ranker;

impl Oracle for Ranker {
    fn score(&self, hand: Hand) -> Score {
        debug_assert!(hand.size() == crate::SHOWDOWN_SIZE);
        Score::from(Strength::from(hand))
    }
}
