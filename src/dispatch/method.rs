use crate::cards::Street;
use serde::Deserialize;
use serde::Serialize;

/// Which estimator answered a request.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    PreflopTable,
    MonteCarlo,
}

/// an empty board is answered from the snapshot, anything else is simulated
impl From<Street> for Method {
    fn from(street: Street) -> Self {
        match street {
            Street::Pref => Self::PreflopTable,
            Street::Flop | Street::Turn | Street::Rive => Self::MonteCarlo,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::PreflopTable => write!(f, "preflop_table"),
            Self::MonteCarlo => write!(f, "monte_carlo"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_preflop_uses_table() {
        assert_eq!(Method::from(Street::Pref), Method::PreflopTable);
        assert_eq!(Method::from(Street::Flop), Method::MonteCarlo);
        assert_eq!(Method::from(Street::Rive), Method::MonteCarlo);
        assert_eq!(serde_json::to_string(&Method::PreflopTable).unwrap(), "\"preflop_table\"");
    }
}
