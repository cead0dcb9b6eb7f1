use super::class::HandClass;
use super::exhaustive::Exhaustive;
use super::table::Rates;
use super::table::Table;
use crate::Error;
use crate::InputError;
use crate::cards::Input;
use crate::simulation::Simulation;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::time::Instant;

/// How snapshot entries are computed.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    MonteCarlo,
    Exact,
}

impl std::str::FromStr for Mode {
    type Err = InputError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monte_carlo" => Ok(Self::MonteCarlo),
            "exact" => Ok(Self::Exact),
            _ => Err(InputError::InvalidMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::MonteCarlo => write!(f, "monte_carlo"),
            Self::Exact => write!(f, "exact"),
        }
    }
}

/// Produces a preflop [`Table`] offline.
///
/// Each (class, players) entry runs from the class's representative hole.
/// Monte Carlo rows use the partitioned aggregator; a seeded generator gives
/// row `i` the seed `seed + i`, so a rerun with the same seed and worker
/// count rewrites the same snapshot. Exact mode enumerates and is limited to
/// heads-up.
#[derive(Debug, Clone)]
pub struct Generator {
    mode: Mode,
    trials: usize,
    players: RangeInclusive<usize>,
    seed: Option<u64>,
    workers: usize,
}

impl Generator {
    pub fn new(mode: Mode, trials: usize, min: usize, max: usize) -> Result<Self, InputError> {
        let bounds = crate::PLAYERS_MIN..=crate::PLAYERS_MAX;
        if !bounds.contains(&min) {
            return Err(InputError::InvalidPlayers(min));
        }
        if !bounds.contains(&max) || max < min {
            return Err(InputError::InvalidPlayers(max));
        }
        if mode == Mode::Exact && (min, max) != (2, 2) {
            return Err(InputError::InvalidMode(format!(
                "{} (only 2 players; use players-min 2 and players-max 2)",
                mode
            )));
        }
        if mode == Mode::MonteCarlo && trials == 0 {
            return Err(InputError::InvalidTrials);
        }
        Ok(Self {
            mode,
            trials,
            players: min..=max,
            seed: None,
            workers: num_cpus::get(),
        })
    }
    pub fn seed(self, seed: Option<u64>) -> Self {
        Self { seed, ..self }
    }
    pub fn workers(self, workers: usize) -> Self {
        Self {
            workers: workers.max(1),
            ..self
        }
    }
    /// Rows this generator will compute.
    pub fn size(&self) -> usize {
        HandClass::all().len() * self.players.clone().count()
    }

    pub fn generate(&self) -> Result<Table, Error> {
        log::info!("{:<32}{:<32}", "generating  preflop table", self.mode);
        let start = Instant::now();
        let total = self.size();
        let mut done = 0usize;
        let mut trials = self.trials;
        let mut rows = self
            .players
            .clone()
            .map(|p| (p, BTreeMap::new()))
            .collect::<BTreeMap<usize, BTreeMap<HandClass, Rates>>>();
        for class in HandClass::all() {
            for players in self.players.clone() {
                let input = Input::from(class.cards());
                let equity = match self.mode {
                    Mode::MonteCarlo => Simulation::new(players, input)?.run_parallel(
                        self.trials,
                        self.seed.map(|s| s.wrapping_add(done as u64)),
                        self.workers,
                    )?,
                    Mode::Exact => Exhaustive::new(input).run()?,
                };
                trials = equity.trials;
                rows.entry(players)
                    .or_default()
                    .insert(class, Rates::from(equity));
                done += 1;
                if done % crate::PROGRESS_INTERVAL == 0 {
                    log::info!("progress: {}/{} ({} @ {}p)", done, total, class, players);
                }
            }
        }
        log::info!(
            "{:<32}{:<32}",
            "generated   preflop table",
            format!("{} rows in {:.1?}", done, start.elapsed())
        );
        let generated = chrono::Utc::now().to_rfc3339();
        Ok(Table::new(self.mode, trials, Some(generated), rows)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_by_name() {
        assert_eq!("monte_carlo".parse::<Mode>(), Ok(Mode::MonteCarlo));
        assert_eq!("EXACT".parse::<Mode>(), Ok(Mode::Exact));
        assert!("exhaustive".parse::<Mode>().is_err());
        assert_eq!(serde_json::to_string(&Mode::MonteCarlo).unwrap(), "\"monte_carlo\"");
    }

    #[test]
    fn validates_ranges() {
        assert!(Generator::new(Mode::MonteCarlo, 10, 2, 10).is_ok());
        assert_eq!(
            Generator::new(Mode::MonteCarlo, 10, 1, 3).unwrap_err(),
            InputError::InvalidPlayers(1)
        );
        assert_eq!(
            Generator::new(Mode::MonteCarlo, 10, 5, 3).unwrap_err(),
            InputError::InvalidPlayers(3)
        );
        assert!(matches!(
            Generator::new(Mode::Exact, 0, 2, 3),
            Err(InputError::InvalidMode(_))
        ));
        assert!(Generator::new(Mode::Exact, 0, 2, 2).is_ok());
        assert_eq!(
            Generator::new(Mode::MonteCarlo, 0, 2, 2).unwrap_err(),
            InputError::InvalidTrials
        );
    }

    #[test]
    fn converges_with_live_runs() {
        let table = Generator::new(Mode::MonteCarlo, 2_000, 2, 2)
            .unwrap()
            .seed(Some(1))
            .workers(2)
            .generate()
            .unwrap();
        assert_eq!(table.trials(), 2_000);
        assert_eq!(table.row(2).map(|r| r.len()), Some(169));
        for label in ["AA", "AKs", "72o", "T9s"] {
            let class = label.parse::<HandClass>().unwrap();
            let cached = table.equity(2, class).unwrap();
            let live = Simulation::new(2, Input::from(class.cards()))
                .unwrap()
                .run(20_000, Some(5))
                .unwrap();
            assert!((cached.win - live.win).abs() < 0.05, "{}", label);
        }
    }

    #[test]
    fn reruns_are_identical() {
        let generator = Generator::new(Mode::MonteCarlo, 200, 3, 3)
            .unwrap()
            .seed(Some(9))
            .workers(3);
        let a = generator.generate().unwrap();
        let b = generator.generate().unwrap();
        assert_eq!(a.row(3), b.row(3));
    }
}
