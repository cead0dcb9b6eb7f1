use super::class::HandClass;
use super::generator::Mode;
use crate::Probability;
use crate::TableError;
use crate::simulation::Equity;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

/// One snapshot entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rates {
    pub win: Probability,
    pub tie: Probability,
    pub lose: Probability,
}

impl Rates {
    fn valid(&self) -> bool {
        let unit = |p: Probability| p.is_finite() && (0.0..=1.0).contains(&p);
        unit(self.win)
            && unit(self.tie)
            && unit(self.lose)
            && ((self.win + self.tie + self.lose) - 1.).abs() <= crate::RATE_TOLERANCE
    }
}

impl From<Equity> for Rates {
    fn from(equity: Equity) -> Self {
        let equity = equity.rounded();
        Self {
            win: equity.win,
            tie: equity.tie,
            lose: equity.lose,
        }
    }
}

/// The on-disk shape, kept private so every Table has passed validation.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    generated_at: Option<String>,
    method: String,
    trials_per_hand: usize,
    players_min: usize,
    players_max: usize,
    data: BTreeMap<String, BTreeMap<String, Rates>>,
}

/// A validated preflop snapshot: (players, hand class) to rates.
///
/// Every declared player count carries all 169 classes, so a lookup inside
/// the declared range can only miss on a seat count the table never covered.
/// `method` is whatever the producer recorded; tables written here carry a
/// [`Mode`] label.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    version: String,
    generated: Option<String>,
    method: String,
    trials: usize,
    rows: BTreeMap<usize, BTreeMap<HandClass, Rates>>,
}

impl Table {
    pub fn new(
        method: Mode,
        trials: usize,
        generated: Option<String>,
        rows: BTreeMap<usize, BTreeMap<HandClass, Rates>>,
    ) -> Result<Self, TableError> {
        let table = Self {
            version: crate::TABLE_VERSION.to_string(),
            generated,
            method: method.to_string(),
            trials,
            rows,
        };
        table.validate()?;
        Ok(table)
    }

    pub fn version(&self) -> &str {
        &self.version
    }
    pub fn generated(&self) -> Option<&str> {
        self.generated.as_deref()
    }
    pub fn method(&self) -> &str {
        &self.method
    }
    /// Trials behind each entry (enumerated states for exact tables).
    pub fn trials(&self) -> usize {
        self.trials
    }
    pub fn players(&self) -> std::ops::RangeInclusive<usize> {
        let min = self.rows.keys().next().copied().unwrap_or(crate::PLAYERS_MIN);
        let max = self.rows.keys().next_back().copied().unwrap_or(crate::PLAYERS_MIN);
        min..=max
    }

    pub fn equity(&self, players: usize, class: HandClass) -> Result<Rates, TableError> {
        self.rows
            .get(&players)
            .and_then(|row| row.get(&class))
            .copied()
            .ok_or(TableError::NotFound { players, class })
    }
    /// Every class at one seat count.
    pub fn row(&self, players: usize) -> Option<&BTreeMap<HandClass, Rates>> {
        self.rows.get(&players)
    }

    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let snapshot = serde_json::from_str::<Snapshot>(json)
            .map_err(|e| TableError::Unavailable(format!("malformed snapshot: {}", e)))?;
        Self::try_from(snapshot)
    }
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&Snapshot::from(self))
    }
    pub fn load(path: &Path) -> Result<Self, TableError> {
        log::info!("{:<32}{:<32}", "loading     preflop table", path.display());
        let json = std::fs::read_to_string(path)
            .map_err(|e| TableError::Unavailable(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        log::info!("{:<32}{:<32}", "saving      preflop table", path.display());
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Where to look for the snapshot in this process.
    pub fn locate() -> Option<PathBuf> {
        let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::locate_from(std::env::var(crate::TABLE_PATH_ENV).ok(), &root)
    }
    /// An explicit override always wins. Otherwise the first default path
    /// that exists under `root`.
    pub fn locate_from(overridden: Option<String>, root: &Path) -> Option<PathBuf> {
        match overridden.filter(|s| !s.trim().is_empty()) {
            Some(path) => Some(PathBuf::from(path)),
            None => crate::TABLE_PATHS
                .iter()
                .map(|p| root.join(p))
                .find(|p| p.exists()),
        }
    }

    fn validate(&self) -> Result<(), TableError> {
        let invalid = |reason: String| Err(TableError::Unavailable(reason));
        if self.version.trim().is_empty() {
            return invalid("missing version".to_string());
        }
        if self.trials == 0 {
            return invalid("trialsPerHand must be positive".to_string());
        }
        if self.rows.is_empty() {
            return invalid("no player counts".to_string());
        }
        let classes = HandClass::all();
        for (players, row) in self.rows.iter() {
            if !(crate::PLAYERS_MIN..=crate::PLAYERS_MAX).contains(players) {
                return invalid(format!("player count {} out of range", players));
            }
            if let Some(class) = classes.iter().find(|c| !row.contains_key(*c)) {
                return invalid(format!("{} missing at {} players", class, players));
            }
            if let Some((class, _)) = row.iter().find(|(_, r)| !r.valid()) {
                return invalid(format!("bad rates for {} at {} players", class, players));
            }
        }
        Ok(())
    }
}

impl TryFrom<Snapshot> for Table {
    type Error = TableError;
    fn try_from(snapshot: Snapshot) -> Result<Self, Self::Error> {
        let invalid = |reason: String| TableError::Unavailable(reason);
        let (min, max) = (snapshot.players_min, snapshot.players_max);
        if min > max || min < crate::PLAYERS_MIN || max > crate::PLAYERS_MAX {
            return Err(invalid(format!("bad player range {}..={}", min, max)));
        }
        let mut rows = BTreeMap::new();
        for players in min..=max {
            let row = snapshot
                .data
                .get(&players.to_string())
                .ok_or_else(|| invalid(format!("no data for {} players", players)))?
                .iter()
                .map(|(label, rates)| label.parse::<HandClass>().map(|c| (c, *rates)))
                .collect::<Result<BTreeMap<_, _>, _>>()
                .map_err(invalid)?;
            rows.insert(players, row);
        }
        let table = Self {
            version: snapshot.version,
            generated: snapshot.generated_at,
            method: snapshot.method,
            trials: snapshot.trials_per_hand,
            rows,
        };
        table.validate()?;
        Ok(table)
    }
}

impl From<&Table> for Snapshot {
    fn from(table: &Table) -> Self {
        let players = table.players();
        Self {
            version: table.version.clone(),
            generated_at: table.generated.clone(),
            method: table.method.clone(),
            trials_per_hand: table.trials,
            players_min: *players.start(),
            players_max: *players.end(),
            data: table
                .rows
                .iter()
                .map(|(players, row)| {
                    let row = row.iter().map(|(c, r)| (c.to_string(), *r)).collect();
                    (players.to_string(), row)
                })
                .collect(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A full table with made-up rates, strong for pairs.
    pub(crate) fn fixture(players: std::ops::RangeInclusive<usize>) -> Table {
        let rows = players
            .map(|p| {
                let row = HandClass::all()
                    .into_iter()
                    .map(|c| {
                        let win = if c.hi() == c.lo() { 0.75 } else { 0.5 };
                        (c, Rates { win, tie: 0.125, lose: 0.875 - win })
                    })
                    .collect();
                (p, row)
            })
            .collect();
        Table::new(Mode::MonteCarlo, 1_000, None, rows).unwrap()
    }

    #[test]
    fn json_round_trip() {
        let table = fixture(2..=3);
        let json = table.to_json().unwrap();
        assert!(json.contains("\"trialsPerHand\": 1000"));
        assert!(json.contains("\"playersMin\": 2"));
        assert!(json.contains("\"monte_carlo\""));
        assert_eq!(Table::from_json(&json).unwrap(), table);
    }

    #[test]
    fn lookup() {
        let table = fixture(2..=3);
        let aa = "AA".parse::<HandClass>().unwrap();
        assert_eq!(table.equity(2, aa).unwrap().win, 0.75);
        assert_eq!(table.row(3).map(|r| r.len()), Some(169));
        assert_eq!(
            table.equity(4, aa),
            Err(TableError::NotFound { players: 4, class: aa })
        );
    }

    #[test]
    fn keeps_foreign_method_label() {
        let mut snapshot = Snapshot::from(&fixture(2..=2));
        snapshot.method = "hand_tuned".to_string();
        let table = Table::try_from(snapshot).unwrap();
        assert_eq!(table.method(), "hand_tuned");
        assert!(table.to_json().unwrap().contains("\"hand_tuned\""));
    }

    #[test]
    fn rejects_incomplete_row() {
        let mut snapshot = Snapshot::from(&fixture(2..=2));
        snapshot.data.get_mut("2").unwrap().remove("72o");
        assert!(matches!(Table::try_from(snapshot), Err(TableError::Unavailable(_))));
    }

    #[test]
    fn rejects_missing_player_count() {
        let mut snapshot = Snapshot::from(&fixture(2..=3));
        snapshot.data.remove("3");
        assert!(Table::try_from(snapshot).is_err());
    }

    #[test]
    fn rejects_bad_rates() {
        let mut snapshot = Snapshot::from(&fixture(2..=2));
        snapshot.data.get_mut("2").unwrap().insert(
            "AKs".to_string(),
            Rates { win: 0.9, tie: 0.9, lose: 0.9 },
        );
        assert!(Table::try_from(snapshot).is_err());
    }

    #[test]
    fn rejects_bad_header() {
        let mut snapshot = Snapshot::from(&fixture(2..=2));
        snapshot.players_max = 11;
        assert!(Table::try_from(snapshot).is_err());
        let mut snapshot = Snapshot::from(&fixture(2..=2));
        snapshot.trials_per_hand = 0;
        assert!(Table::try_from(snapshot).is_err());
        let mut snapshot = Snapshot::from(&fixture(2..=2));
        snapshot.version = String::new();
        assert!(Table::try_from(snapshot).is_err());
        assert!(Table::from_json("{\"version\": \"v1\"}").is_err());
    }

    #[test]
    fn save_then_load() {
        let path = std::env::temp_dir()
            .join(format!("holdem-equity-{}", std::process::id()))
            .join("preflop_table.v1.json");
        let table = fixture(2..=2);
        table.save(&path).unwrap();
        assert_eq!(Table::load(&path).unwrap(), table);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_unavailable() {
        let path = std::env::temp_dir().join("holdem-equity-nowhere.json");
        assert!(matches!(Table::load(&path), Err(TableError::Unavailable(_))));
    }

    #[test]
    fn override_wins() {
        let root = std::env::temp_dir().join("holdem-equity-empty-root");
        assert_eq!(
            Table::locate_from(Some("/somewhere/table.json".into()), &root),
            Some(PathBuf::from("/somewhere/table.json"))
        );
        assert_eq!(Table::locate_from(None, &root), None);
        assert_eq!(Table::locate_from(Some("  ".into()), &root), None);
    }
}
