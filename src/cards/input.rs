use super::board::Board;
use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use crate::InputError;

/// A validated hero hand and board.
///
/// Construction checks, in order: that every card parses, hero size, board
/// size, and that no card appears twice across hero and board. The first
/// offending card is the one reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    hole: Hole,
    board: Board,
}

impl Input {
    pub fn validate(hero: &[Card], board: &[Card]) -> Result<Self, InputError> {
        let [a, b] = <[Card; 2]>::try_from(hero).map_err(|_| InputError::InvalidHero(hero.len()))?;
        let board = Board::try_from(board.to_vec())?;
        let mut seen = Hand::empty();
        for card in hero.iter().chain(board.cards()) {
            if !seen.insert(*card) {
                return Err(InputError::DuplicateCard(*card));
            }
        }
        Ok(Self {
            hole: Hole::from((a, b)),
            board,
        })
    }
    /// Validates card strings, as they arrive from a request.
    pub fn parse<S: AsRef<str>>(hero: &[S], board: &[S]) -> Result<Self, InputError> {
        let hero = Self::cards(hero)?;
        let board = Self::cards(board)?;
        Self::validate(&hero, &board)
    }
    pub fn hole(&self) -> &Hole {
        &self.hole
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    /// Every card already out of the deck.
    pub fn known(&self) -> Hand {
        Hand::add(Hand::from(self.hole), Hand::from(&self.board))
    }

    fn cards<S: AsRef<str>>(strings: &[S]) -> Result<Vec<Card>, InputError> {
        strings
            .iter()
            .map(|s| Card::try_from(s.as_ref()).map_err(InputError::from))
            .collect()
    }
}

impl From<Hole> for Input {
    fn from(hole: Hole) -> Self {
        Self {
            hole,
            board: Board::empty(),
        }
    }
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ~ {}", self.hole, self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CardError;

    fn cards(s: &str) -> Vec<Card> {
        Card::parse_many(s).unwrap()
    }

    #[test]
    fn accepts_every_street() {
        for board in ["", "2c 3d 4h", "2c 3d 4h 5s", "2c 3d 4h 5s 6c"] {
            assert!(Input::validate(&cards("As Kd"), &cards(board)).is_ok());
        }
    }

    #[test]
    fn rejects_duplicate_hero() {
        assert_eq!(
            Input::parse(&["As", "As"], &[]),
            Err(InputError::DuplicateCard(Card::try_from("As").unwrap()))
        );
    }

    #[test]
    fn rejects_duplicate_across_board() {
        assert_eq!(
            Input::parse(&["As", "Kd"], &["7h", "8h", "Kd"]),
            Err(InputError::DuplicateCard(Card::try_from("Kd").unwrap()))
        );
    }

    #[test]
    fn rejects_bad_lengths() {
        assert_eq!(
            Input::validate(&cards("As"), &[]),
            Err(InputError::InvalidHero(1))
        );
        assert_eq!(
            Input::validate(&cards("As Kd"), &cards("7h")),
            Err(InputError::InvalidBoardLength(1))
        );
        assert_eq!(
            Input::parse(&["As", "Kd"], &["7h", "8h"]),
            Err(InputError::InvalidBoardLength(2))
        );
    }

    #[test]
    fn reports_first_invalid_card() {
        assert_eq!(
            Input::parse(&["As", "Kx"], &["1h", "8h", "9h"]),
            Err(InputError::Card(CardError::InvalidSuit("Kx".into())))
        );
    }

    #[test]
    fn parses_before_counting() {
        assert_eq!(
            Input::parse(&["As", "Kd"], &["Zz"]),
            Err(InputError::Card(CardError::InvalidRank("Zz".into())))
        );
        assert_eq!(
            Input::parse(&["As", "Kd", "Qx"], &[]),
            Err(InputError::Card(CardError::InvalidSuit("Qx".into())))
        );
    }

    #[test]
    fn known_covers_hero_and_board() {
        let input = Input::parse(&["As", "Kd"], &["7h", "8h", "9h"]).unwrap();
        assert_eq!(input.known().size(), 5);
    }
}
