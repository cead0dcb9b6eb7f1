use super::uniform::Uniform;
use crate::Error;
use crate::cards::Card;

/// Draws cards without replacement from a scratch deck.
///
/// A partial Fisher–Yates shuffle: position `i` swaps with a uniformly chosen
/// position in `i..len`, for the first `n` positions only. The drawn cards
/// are then the deck's first `n` entries. Each draw consumes exactly one
/// uniform, so a seeded stream fixes the whole sequence of trials.
#[derive(Debug, Clone)]
pub struct Sampler<R: Uniform>(R);

impl<R: Uniform> From<R> for Sampler<R> {
    fn from(rng: R) -> Self {
        Self(rng)
    }
}

impl<R: Uniform> Sampler<R> {
    pub fn draw<'d>(&mut self, deck: &'d mut [Card], n: usize) -> Result<&'d [Card], Error> {
        let len = deck.len();
        if n > len {
            return Err(Error::Internal(format!("cannot draw {} from {} cards", n, len)));
        }
        for i in 0..n {
            let span = len - i;
            let j = i + ((self.0.uniform() * span as f64) as usize).min(span - 1);
            deck.swap(i, j);
        }
        Ok(&deck[..n])
    }
}
