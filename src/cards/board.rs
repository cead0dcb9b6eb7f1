use super::card::Card;
use super::hand::Hand;
use super::street::Street;
use crate::InputError;

/// The community cards revealed so far: none, a flop, a turn, or a river.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
    street: Street,
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cards: Vec::with_capacity(crate::BOARD_SIZE),
            street: Street::Pref,
        }
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn street(&self) -> Street {
        self.street
    }
}

impl TryFrom<Vec<Card>> for Board {
    type Error = InputError;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        let street = Street::try_from(cards.len())?;
        Ok(Self { cards, street })
    }
}

impl From<&Board> for Hand {
    fn from(board: &Board) -> Self {
        board.cards.iter().copied().collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.cards.iter() {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
