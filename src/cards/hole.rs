use super::card::Card;
use super::hand::Hand;
use crate::Arbitrary;

/// A player's two private cards, in the order they were given.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Card, Card);

impl Hole {
    pub fn cards(&self) -> [Card; 2] {
        [self.0, self.1]
    }
    /// The same two cards, given in the other order.
    pub fn swap(&self) -> Self {
        Self(self.1, self.0)
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        Hand::add(Hand::from(hole.0), Hand::from(hole.1))
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        assert!(a != b);
        Self(a, b)
    }
}

impl Arbitrary for Hole {
    fn random() -> Self {
        let a = Card::random();
        let b = std::iter::repeat_with(Card::random)
            .find(|b| *b != a)
            .expect("infinite stream");
        Self(a, b)
    }
}
