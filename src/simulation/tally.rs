use super::outcome::Outcome;

/// Outcome counts over some number of trials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    win: usize,
    tie: usize,
    lose: usize,
}

impl Tally {
    pub fn witness(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.win += 1,
            Outcome::Tie => self.tie += 1,
            Outcome::Lose => self.lose += 1,
        }
    }
    pub fn win(&self) -> usize {
        self.win
    }
    pub fn tie(&self) -> usize {
        self.tie
    }
    pub fn lose(&self) -> usize {
        self.lose
    }
    pub fn total(&self) -> usize {
        self.win + self.tie + self.lose
    }
}

impl std::ops::Add for Tally {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            win: self.win + rhs.win,
            tie: self.tie + rhs.tie,
            lose: self.lose + rhs.lose,
        }
    }
}

impl std::iter::Sum for Tally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |a, b| a + b)
    }
}

impl FromIterator<Outcome> for Tally {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        let mut tally = Self::default();
        iter.into_iter().for_each(|o| tally.witness(o));
        tally
    }
}
