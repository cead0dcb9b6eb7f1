use crate::InputError;
use serde::Deserialize;
use serde::Serialize;

/// Named trial budgets.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Preset {
    Fast,
    #[default]
    Standard,
    High,
}

impl Preset {
    pub const fn trials(&self) -> usize {
        match self {
            Self::Fast => crate::TRIALS_FAST,
            Self::Standard => crate::TRIALS_STANDARD,
            Self::High => crate::TRIALS_HIGH,
        }
    }
}

impl std::str::FromStr for Preset {
    type Err = InputError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fast" => Ok(Self::Fast),
            "standard" => Ok(Self::Standard),
            "high" => Ok(Self::High),
            _ => Err(InputError::InvalidBudget(s.to_string())),
        }
    }
}
impl TryFrom<String> for Preset {
    type Error = InputError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
impl From<Preset> for String {
    fn from(p: Preset) -> Self {
        p.to_string()
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fast => write!(f, "fast"),
            Self::Standard => write!(f, "standard"),
            Self::High => write!(f, "high"),
        }
    }
}

/// How many trials to run: a named preset or an explicit count.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Budget {
    Count(usize),
    Preset(Preset),
}

impl Default for Budget {
    fn default() -> Self {
        Self::Preset(Preset::default())
    }
}

impl Budget {
    pub fn trials(&self) -> usize {
        match self {
            Self::Count(n) => *n,
            Self::Preset(p) => p.trials(),
        }
    }
}

impl From<Preset> for Budget {
    fn from(p: Preset) -> Self {
        Self::Preset(p)
    }
}

/// a bare integer is a count, anything else must name a preset
impl std::str::FromStr for Budget {
    type Err = InputError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(n) => Ok(Self::Count(n)),
            Err(_) => s.parse::<Preset>().map(Self::Preset),
        }
    }
}

impl std::fmt::Display for Budget {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{}", n),
            Self::Preset(p) => write!(f, "{}", p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_counts() {
        assert_eq!(Preset::Fast.trials(), 50_000);
        assert_eq!(Preset::Standard.trials(), 200_000);
        assert_eq!(Preset::High.trials(), 1_000_000);
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!("FAST".parse::<Preset>(), Ok(Preset::Fast));
        assert_eq!("High".parse::<Budget>(), Ok(Budget::Preset(Preset::High)));
        assert_eq!("1234".parse::<Budget>(), Ok(Budget::Count(1234)));
        assert!(matches!("ludicrous".parse::<Budget>(), Err(InputError::InvalidBudget(_))));
    }

    #[test]
    fn json_accepts_name_or_count() {
        assert_eq!(serde_json::from_str::<Budget>("\"Standard\"").unwrap(), Budget::default());
        assert_eq!(serde_json::from_str::<Budget>("5000").unwrap(), Budget::Count(5000));
        assert!(serde_json::from_str::<Budget>("\"medium\"").is_err());
        assert_eq!(serde_json::to_string(&Budget::from(Preset::Fast)).unwrap(), "\"fast\"");
    }
}
