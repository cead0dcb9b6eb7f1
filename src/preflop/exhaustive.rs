use crate::Error;
use crate::cards::Hand;
use crate::cards::HandIterator;
use crate::cards::Input;
use crate::cards::Oracle;
use crate::cards::Ranker;
use crate::simulation::Equity;
use crate::simulation::Outcome;
use crate::simulation::Tally;
use rayon::prelude::*;
use std::time::Instant;

/// Exact heads-up equity by enumeration.
///
/// Visits every opponent hole and, for each, every runout of the missing
/// board cards, so the rates carry no sampling error. The work is
/// C(n, 2) * C(n - 2, missing) showdowns for n unseen cards, which preflop
/// means about two billion. Opponent holes are spread over rayon.
pub struct Exhaustive<O: Oracle = Ranker> {
    oracle: O,
    input: Input,
}

impl Exhaustive<Ranker> {
    pub fn new(input: Input) -> Self {
        Self::with_oracle(Ranker, input)
    }
}

impl<O: Oracle> Exhaustive<O> {
    pub fn with_oracle(oracle: O, input: Input) -> Self {
        Self { oracle, input }
    }

    pub fn run(&self) -> Result<Equity, Error> {
        log::debug!("{:<32}{:<32}", "enumerating equity", self.input);
        let start = Instant::now();
        let known = self.input.known();
        let hole = Hand::from(*self.input.hole());
        let board = Hand::from(self.input.board());
        let missing = self.input.board().street().n_missing();
        let tally = HandIterator::from((2, known))
            .collect::<Vec<Hand>>()
            .into_par_iter()
            .map(|villain| {
                HandIterator::from((missing, Hand::add(known, villain)))
                    .map(|runout| Hand::add(board, runout))
                    .map(|board| {
                        let hero = self.oracle.score(Hand::add(hole, board));
                        let best = self.oracle.score(Hand::add(villain, board));
                        Outcome::from((hero, best))
                    })
                    .collect::<Tally>()
            })
            .sum::<Tally>();
        if tally.total() == 0 {
            return Err(Error::Internal("no showdowns enumerated".to_string()));
        }
        Ok(Equity::from((tally, start.elapsed())))
    }
}
