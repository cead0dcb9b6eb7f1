use crate::cards::Score;

/// How one trial ended, from the hero's side.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Tie,
    Lose,
}

/// (hero, strongest opponent) scores decide the outcome
impl From<(Score, Score)> for Outcome {
    fn from((hero, best): (Score, Score)) -> Self {
        match hero.cmp(&best) {
            std::cmp::Ordering::Less => Self::Win,
            std::cmp::Ordering::Equal => Self::Tie,
            std::cmp::Ordering::Greater => Self::Lose,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "win"),
            Self::Tie => write!(f, "tie"),
            Self::Lose => write!(f, "lose"),
        }
    }
}
