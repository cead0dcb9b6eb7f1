use super::equity::Equity;
use super::tally::Tally;
use super::trial::Trial;
use crate::Error;
use crate::InputError;
use crate::cards::Deck;
use crate::cards::Input;
use crate::cards::Oracle;
use crate::cards::Ranker;
use crate::sampling::Sampler;
use crate::sampling::Source;
use crate::sampling::Uniform;
use rayon::prelude::*;
use std::time::Instant;

/// The Monte Carlo equity aggregator.
///
/// Built once per request from a validated [`Input`] and a seat count, then
/// run for some number of trials. Every run builds one deck template from
/// the known cards and one random stream. Every trial resets a scratch copy
/// of the template, so no trial sees another's shuffle.
///
/// Seats may be 1 here (the hero alone), which short-circuits to
/// [`Equity::degenerate`]. Requests are held to [`crate::PLAYERS_MIN`] by
/// the dispatcher.
pub struct Simulation<O: Oracle = Ranker> {
    oracle: O,
    input: Input,
    opponents: usize,
}

impl Simulation<Ranker> {
    pub fn new(players: usize, input: Input) -> Result<Self, InputError> {
        Self::with_oracle(Ranker, players, input)
    }
}

impl<O: Oracle> Simulation<O> {
    pub fn with_oracle(oracle: O, players: usize, input: Input) -> Result<Self, InputError> {
        if !(1..=crate::PLAYERS_MAX).contains(&players) {
            return Err(InputError::InvalidPlayers(players));
        }
        Ok(Self {
            oracle,
            input,
            opponents: players - 1,
        })
    }
    pub fn input(&self) -> &Input {
        &self.input
    }
    pub fn opponents(&self) -> usize {
        self.opponents
    }

    /// Single-threaded run. A seed selects the reproducible stream.
    pub fn run(&self, trials: usize, seed: Option<u64>) -> Result<Equity, Error> {
        if self.opponents == 0 {
            return Ok(Equity::degenerate());
        }
        if trials == 0 {
            return Err(InputError::InvalidTrials.into());
        }
        log::debug!("{:<32}{:<32}", "simulating equity", self.input);
        let start = Instant::now();
        let tally = self.work(trials, Source::from(seed))?;
        let equity = Equity::from((tally, start.elapsed()));
        log::debug!("{:<32}{:<32}", "simulated  equity", equity);
        Ok(equity)
    }

    /// Partitions trials across `workers` rayon tasks.
    ///
    /// Worker `k` gets its own stream seeded with `seed + k * WORKER_SEED_STRIDE`
    /// and `trials / workers` trials, the first `trials % workers` workers
    /// taking one extra. Results are reproducible for a fixed seed and
    /// worker count, and one worker reproduces [`Simulation::run`].
    pub fn run_parallel(&self, trials: usize, seed: Option<u64>, workers: usize) -> Result<Equity, Error> {
        if self.opponents == 0 {
            return Ok(Equity::degenerate());
        }
        if trials == 0 {
            return Err(InputError::InvalidTrials.into());
        }
        let workers = workers.clamp(1, trials);
        log::debug!(
            "{:<32}{:<32}",
            format!("simulating equity x{}", workers),
            self.input
        );
        let start = Instant::now();
        let tally = (0..workers)
            .into_par_iter()
            .map(|k| {
                let share = trials / workers + usize::from(k < trials % workers);
                let seed = seed.map(|s| s.wrapping_add(k as u64 * crate::WORKER_SEED_STRIDE));
                self.work(share, Source::from(seed))
            })
            .collect::<Result<Vec<Tally>, Error>>()?
            .into_iter()
            .sum::<Tally>();
        let equity = Equity::from((tally, start.elapsed()));
        log::debug!("{:<32}{:<32}", "simulated  equity", equity);
        Ok(equity)
    }

    fn work<R: Uniform>(&self, trials: usize, rng: R) -> Result<Tally, Error> {
        let trial = Trial::new(&self.oracle, &self.input, self.opponents);
        let template = Deck::from(self.input.known());
        let mut deck = template.clone();
        let mut sampler = Sampler::from(rng);
        let mut tally = Tally::default();
        for _ in 0..trials {
            deck.reset(&template);
            tally.witness(trial.play(&mut deck, &mut sampler)?);
        }
        Ok(tally)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Hand;
    use crate::cards::Score;

    fn simulation(players: usize, hero: &[&str], board: &[&str]) -> Simulation {
        Simulation::new(players, Input::parse(hero, board).unwrap()).unwrap()
    }

    #[test]
    fn rates_sum_to_one() {
        for (players, board) in [
            (2, vec![]),
            (4, vec!["7h", "8h", "9h"]),
            (6, vec!["7h", "8h", "9h", "Tc"]),
            (10, vec!["7h", "8h", "9h", "Tc", "2d"]),
        ] {
            let equity = simulation(players, &["As", "Kd"], &board)
                .run(2_000, Some(1))
                .unwrap();
            assert_eq!(equity.trials, 2_000);
            assert!((equity.total() - 1.).abs() < 1e-9);
            assert!((equity.rounded().total() - 1.).abs() < 1e-9);
        }
    }

    #[test]
    fn same_seed_same_equity() {
        let sim = simulation(3, &["Qh", "Jh"], &["Th", "2c", "5d"]);
        let a = sim.run(5_000, Some(42)).unwrap();
        let b = sim.run(5_000, Some(42)).unwrap();
        assert_eq!((a.win, a.tie, a.lose), (b.win, b.tie, b.lose));
    }

    #[test]
    fn one_worker_matches_sequential() {
        let sim = simulation(2, &["9c", "9d"], &[]);
        let a = sim.run(3_000, Some(7)).unwrap();
        let b = sim.run_parallel(3_000, Some(7), 1).unwrap();
        assert_eq!((a.win, a.tie, a.lose), (b.win, b.tie, b.lose));
    }

    #[test]
    fn parallel_is_reproducible() {
        let sim = simulation(4, &["Ac", "Kc"], &["2c", "7c", "Jd"]);
        let a = sim.run_parallel(10_001, Some(3), 4).unwrap();
        let b = sim.run_parallel(10_001, Some(3), 4).unwrap();
        assert_eq!(a.trials, 10_001);
        assert_eq!((a.win, a.tie, a.lose), (b.win, b.tie, b.lose));
    }

    #[test]
    fn hero_alone_wins_without_trials() {
        let equity = simulation(1, &["2c", "7d"], &[]).run(1_000, None).unwrap();
        assert_eq!(equity, Equity::degenerate());
        assert_eq!(equity.trials, 0);
    }

    #[test]
    fn zero_trials_rejected() {
        assert!(matches!(
            simulation(2, &["As", "Kd"], &[]).run(0, None),
            Err(Error::Input(InputError::InvalidTrials))
        ));
    }

    #[test]
    fn seat_bounds() {
        let input = Input::parse(&["As", "Kd"], &[]).unwrap();
        assert!(Simulation::new(0, input.clone()).is_err());
        assert!(Simulation::new(11, input.clone()).is_err());
        assert!(Simulation::new(10, input).is_ok());
    }

    #[test]
    fn aces_dominate_heads_up() {
        let equity = simulation(2, &["As", "Ah"], &[]).run(20_000, Some(2024)).unwrap();
        assert!(equity.win > 0.80 && equity.win < 0.88);
    }

    #[test]
    fn made_flush_beats_most_hands() {
        let equity = simulation(2, &["Ah", "Kh"], &["2h", "7h", "9h", "Tc", "3s"])
            .run(5_000, None)
            .unwrap();
        assert!(equity.win > 0.95);
    }

    #[test]
    fn entropy_runs_are_valid() {
        let equity = simulation(5, &["Td", "Ts"], &[]).run(2_000, None).unwrap();
        assert!((equity.total() - 1.).abs() < 1e-9);
    }

    struct Coin;
    impl Oracle for Coin {
        fn score(&self, hand: Hand) -> Score {
            Score::from((u64::from(hand) % 2) as u32)
        }
    }

    #[test]
    fn accepts_any_oracle() {
        let input = Input::parse(&["As", "Kd"], &[]).unwrap();
        let sim = Simulation::with_oracle(Coin, 3, input).unwrap();
        let equity = sim.run(1_000, Some(9)).unwrap();
        assert!((equity.total() - 1.).abs() < 1e-9);
    }
}
