use crate::InputError;
use crate::simulation::Budget;
use serde::Deserialize;
use serde::Serialize;

/// An equity question as it arrives over the wire.
///
/// Cards stay as strings until [`super::Calculator::calculate`] validates
/// them, so that parse errors can name the offending input. The budget may
/// arrive as `trials` or as `preset`, but not as both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Wire")]
pub struct Request {
    pub players: usize,
    pub hero: Vec<String>,
    pub board: Vec<String>,
    pub trials: Budget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// The body as sent, before the two budget spellings are merged.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Wire {
    players: usize,
    hero: Vec<String>,
    #[serde(default)]
    board: Vec<String>,
    trials: Option<Budget>,
    preset: Option<Budget>,
    seed: Option<u64>,
}

impl TryFrom<Wire> for Request {
    type Error = InputError;
    fn try_from(wire: Wire) -> Result<Self, Self::Error> {
        let trials = match (wire.trials, wire.preset) {
            (Some(_), Some(_)) => return Err(InputError::ConflictingBudget),
            (trials, preset) => trials.or(preset).unwrap_or_default(),
        };
        Ok(Self {
            players: wire.players,
            hero: wire.hero,
            board: wire.board,
            trials,
            seed: wire.seed,
        })
    }
}

impl Request {
    /// Whether the caller asked for anything beyond the default budget.
    pub fn customized(&self) -> bool {
        self.trials != Budget::default() || self.seed.is_some()
    }
}
