use super::method::Method;
use super::request::Request;
use super::response::Response;
use crate::Error;
use crate::InputError;
use crate::TableError;
use crate::cards::Input;
use crate::preflop::Cache;
use crate::preflop::HandClass;
use crate::simulation::Simulation;

const NOTE_IGNORED: &str = "budget and seed are ignored when using preflop table";
const NOTE_FALLBACK: &str = "preflop table unavailable, simulated instead";

/// Answers [`Request`]s.
///
/// An empty board is looked up in the preflop table and any other board is
/// simulated. A table that cannot answer is an error unless fallback was
/// switched on, in which case the miss is logged and the request simulated.
#[derive(Debug, Clone, Copy)]
pub struct Calculator<'c> {
    cache: &'c Cache,
    fallback: bool,
    workers: usize,
}

impl Default for Calculator<'static> {
    fn default() -> Self {
        Self::new(Cache::global())
    }
}

impl<'c> Calculator<'c> {
    pub fn new(cache: &'c Cache) -> Self {
        Self {
            cache,
            fallback: false,
            workers: 1,
        }
    }
    pub fn fallback(self, fallback: bool) -> Self {
        Self { fallback, ..self }
    }
    pub fn workers(self, workers: usize) -> Self {
        Self {
            workers: workers.max(1),
            ..self
        }
    }

    pub fn calculate(&self, request: &Request) -> Result<Response, Error> {
        if !(crate::PLAYERS_MIN..=crate::PLAYERS_MAX).contains(&request.players) {
            return Err(InputError::InvalidPlayers(request.players).into());
        }
        let input = Input::parse(&request.hero, &request.board)?;
        match Method::from(input.board().street()) {
            Method::MonteCarlo => self.simulate(request, input),
            Method::PreflopTable => match self.lookup(request, &input) {
                Ok(response) => Ok(response),
                Err(e) if self.fallback => {
                    log::warn!("{:<32}{:<32}", "falling back to simulation", e);
                    Ok(self.simulate(request, input)?.note(NOTE_FALLBACK))
                }
                Err(e) => Err(e.into()),
            },
        }
    }

    fn lookup(&self, request: &Request, input: &Input) -> Result<Response, TableError> {
        let table = self.cache.get()?;
        let class = HandClass::from(*input.hole());
        let rates = table.equity(request.players, class)?;
        log::debug!("{:<32}{:<32}", "looked up   preflop", class);
        Ok(Response {
            win: rates.win,
            tie: rates.tie,
            lose: rates.lose,
            trials: table.trials(),
            elapsed_ms: 0,
            method: Method::PreflopTable,
            note: request.customized().then(|| NOTE_IGNORED.to_string()),
        })
    }

    fn simulate(&self, request: &Request, input: Input) -> Result<Response, Error> {
        let simulation = Simulation::new(request.players, input)?;
        let trials = request.trials.trials();
        let equity = match self.workers {
            1 => simulation.run(trials, request.seed)?,
            n => simulation.run_parallel(trials, request.seed, n)?,
        };
        Ok(Response::from((equity, Method::MonteCarlo)))
    }
}
