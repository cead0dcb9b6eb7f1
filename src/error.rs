use crate::cards::Card;
use crate::preflop::HandClass;
use thiserror::Error;

/// A single card string that could not be parsed.
///
/// Each variant carries the raw input so callers can echo it back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("card must be 2 characters (e.g. As, Td), got: {0}")]
    InvalidLength(String),
    #[error("rank must be one of AKQJT98765432, got: {0}")]
    InvalidRank(String),
    #[error("suit must be one of s, h, d, c, got: {0}")]
    InvalidSuit(String),
}

/// Malformed caller input. Always surfaced verbatim and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error(transparent)]
    Card(#[from] CardError),
    #[error("hero must be exactly 2 cards, got {0}")]
    InvalidHero(usize),
    #[error("board must have 0, 3, 4, or 5 cards, got {0}")]
    InvalidBoardLength(usize),
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
    #[error("players must be between {min} and {max}, got {0}", min = crate::PLAYERS_MIN, max = crate::PLAYERS_MAX)]
    InvalidPlayers(usize),
    #[error("trial count must be a positive integer")]
    InvalidTrials,
    #[error("unknown trial budget: {0} (use fast, standard, high, or a count)")]
    InvalidBudget(String),
    #[error("give either trials or preset, not both")]
    ConflictingBudget,
    #[error("unknown generation mode: {0} (use monte_carlo or exact)")]
    InvalidMode(String),
}

/// The preflop snapshot could not answer.
///
/// Kept apart from [`InputError`] so a caller can decide whether to fall back
/// to live simulation. Nothing in this crate falls back implicitly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("preflop table not generated: {0}")]
    Unavailable(String),
    #[error("no preflop entry for {class} at {players} players")]
    NotFound { players: usize, class: HandClass },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<CardError> for Error {
    fn from(e: CardError) -> Self {
        Self::Input(InputError::from(e))
    }
}

impl Error {
    /// Stable machine-readable code for response bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Input(InputError::Card(CardError::InvalidLength(_))) => "invalid_card_length",
            Self::Input(InputError::Card(CardError::InvalidRank(_))) => "invalid_rank",
            Self::Input(InputError::Card(CardError::InvalidSuit(_))) => "invalid_suit",
            Self::Input(InputError::InvalidHero(_)) => "invalid_hero",
            Self::Input(InputError::InvalidBoardLength(_)) => "invalid_board_length",
            Self::Input(InputError::DuplicateCard(_)) => "duplicate_cards",
            Self::Input(InputError::InvalidPlayers(_)) => "invalid_players",
            Self::Input(InputError::InvalidTrials) => "invalid_trials",
            Self::Input(InputError::InvalidBudget(_)) => "invalid_trials",
            Self::Input(InputError::ConflictingBudget) => "invalid_trials",
            Self::Input(InputError::InvalidMode(_)) => "invalid_mode",
            Self::Table(TableError::Unavailable(_)) => "preflop_table_not_generated",
            Self::Table(TableError::NotFound { .. }) => "preflop_table_missing",
            Self::Internal(_) => "internal",
        }
    }
    /// The offending card, when one can be named.
    pub fn card(&self) -> Option<String> {
        match self {
            Self::Input(InputError::DuplicateCard(card)) => Some(card.to_string()),
            Self::Input(InputError::Card(CardError::InvalidLength(s)))
            | Self::Input(InputError::Card(CardError::InvalidRank(s)))
            | Self::Input(InputError::Card(CardError::InvalidSuit(s))) => Some(s.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_names_card() {
        let card = Card::try_from("As").unwrap();
        let error = Error::from(InputError::DuplicateCard(card));
        assert_eq!(error.code(), "duplicate_cards");
        assert_eq!(error.card(), Some("As".to_string()));
        assert_eq!(error.to_string(), "duplicate card: As");
    }

    #[test]
    fn players_message_names_bounds() {
        let error = InputError::InvalidPlayers(11);
        assert_eq!(error.to_string(), "players must be between 2 and 10, got 11");
    }

    #[test]
    fn table_kinds_stay_distinct() {
        let error = Error::from(TableError::Unavailable("missing".into()));
        assert!(matches!(error, Error::Table(_)));
        assert_eq!(error.code(), "preflop_table_not_generated");
    }
}
