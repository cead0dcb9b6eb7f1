use super::outcome::Outcome;
use crate::Error;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Input;
use crate::cards::Oracle;
use crate::sampling::Sampler;
use crate::sampling::Uniform;

/// One random completion of the hidden cards, scored at showdown.
///
/// Drawn cards are consumed in a fixed order: the missing board slots first,
/// then two per opponent. Only the strongest opponent matters, so a tie
/// means the hero split with at least the best of them.
pub struct Trial<'a, O: Oracle> {
    oracle: &'a O,
    hole: Hand,
    board: Hand,
    missing: usize,
    opponents: usize,
}

impl<'a, O: Oracle> Trial<'a, O> {
    pub fn new(oracle: &'a O, input: &Input, opponents: usize) -> Self {
        Self {
            oracle,
            hole: Hand::from(*input.hole()),
            board: Hand::from(input.board()),
            missing: input.board().street().n_missing(),
            opponents,
        }
    }
    /// Cards drawn per trial.
    pub fn needed(&self) -> usize {
        self.opponents * 2 + self.missing
    }
    pub fn play<R: Uniform>(&self, deck: &mut Deck, sampler: &mut Sampler<R>) -> Result<Outcome, Error> {
        let drawn = sampler.draw(deck.cards_mut(), self.needed())?;
        let (runout, holes) = drawn.split_at(self.missing);
        let board = Hand::add(self.board, runout.iter().copied().collect());
        let hero = self.oracle.score(Hand::add(self.hole, board));
        let best = holes
            .chunks_exact(2)
            .map(|hole| self.oracle.score(Hand::add(board, hole.iter().copied().collect())))
            .min()
            .ok_or_else(|| Error::Internal("trial needs at least one opponent".to_string()))?;
        Ok(Outcome::from((hero, best)))
    }
}
