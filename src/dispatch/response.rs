use super::method::Method;
use crate::Probability;
use crate::simulation::Equity;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub win: Probability,
    pub tie: Probability,
    pub lose: Probability,
    pub trials: usize,
    pub elapsed_ms: u64,
    pub method: Method,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Response {
    pub fn note(self, note: &str) -> Self {
        Self {
            note: Some(note.to_string()),
            ..self
        }
    }
}

/// rates are rounded on the way out
impl From<(Equity, Method)> for Response {
    fn from((equity, method): (Equity, Method)) -> Self {
        let equity = equity.rounded();
        Self {
            win: equity.win,
            tie: equity.tie,
            lose: equity.lose,
            trials: equity.trials,
            elapsed_ms: equity.elapsed.as_millis() as u64,
            method,
            note: None,
        }
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} win {:.4} tie {:.4} lose {:.4}",
            self.method, self.win, self.tie, self.lose
        )
    }
}
