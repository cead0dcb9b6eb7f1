use super::card::Card;
use super::hand::Hand;

/// The cards not yet seen, as an ordered working buffer for sampling.
///
/// Built once per run from the known cards, in byte order (rank-major,
/// suit-minor). The order only matters as the starting point of the
/// partial shuffle in [`crate::sampling::Sampler::draw`]. Trials never draw
/// from the template directly: each one [`Deck::reset`]s a scratch copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// All 52 cards.
    pub fn new() -> Self {
        Self::from(Hand::empty())
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.0
    }
    /// Restore this scratch deck to the template's order.
    pub fn reset(&mut self, template: &Deck) {
        debug_assert!(self.len() == template.len());
        self.0.copy_from_slice(&template.0);
    }
}

/// everything except the known cards
impl From<Hand> for Deck {
    fn from(known: Hand) -> Self {
        Self(known.complement().into_iter().collect())
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0.into_iter().collect()
    }
}
