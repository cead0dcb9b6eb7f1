use super::class::HandClass;
use super::table::Rates;
use super::table::Table;
use crate::TableError;
use std::sync::Arc;
use std::sync::RwLock;

static GLOBAL: Cache = Cache::new();

#[derive(Debug)]
enum State {
    Empty,
    Loaded(Arc<Table>),
    Unavailable(TableError),
}

/// A preflop table loaded at most once.
///
/// The first caller runs the load under the write lock; concurrent first
/// callers wait for it instead of loading twice. Whatever the load produced, a
/// table or the reason there is none, is kept for the life of the cache, and
/// every later lookup only takes the read lock.
#[derive(Debug)]
pub struct Cache(RwLock<State>);

impl Default for Cache {
    fn default() -> Self {
        Self::new()
    }
}

impl Cache {
    pub const fn new() -> Self {
        Self(RwLock::new(State::Empty))
    }
    /// The process-wide cache, loading from [`Table::locate`].
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    pub fn get(&self) -> Result<Arc<Table>, TableError> {
        self.get_or_load(|| {
            Table::locate()
                .ok_or_else(|| TableError::Unavailable("no snapshot found".to_string()))
                .and_then(|path| Table::load(&path))
        })
    }
    pub fn get_or_load<F>(&self, load: F) -> Result<Arc<Table>, TableError>
    where
        F: FnOnce() -> Result<Table, TableError>,
    {
        let state = self.0.read().unwrap_or_else(|e| e.into_inner());
        if let Some(settled) = Self::settled(&state) {
            return settled;
        }
        drop(state);
        let mut state = self.0.write().unwrap_or_else(|e| e.into_inner());
        if let Some(settled) = Self::settled(&state) {
            return settled;
        }
        let loaded = load().map(Arc::new);
        *state = match &loaded {
            Ok(table) => State::Loaded(Arc::clone(table)),
            Err(e) => {
                log::warn!("{:<32}{:<32}", "preflop table unavailable", e);
                State::Unavailable(e.clone())
            }
        };
        loaded
    }
    fn settled(state: &State) -> Option<Result<Arc<Table>, TableError>> {
        match state {
            State::Loaded(table) => Some(Ok(Arc::clone(table))),
            State::Unavailable(e) => Some(Err(e.clone())),
            State::Empty => None,
        }
    }
    pub fn equity(&self, players: usize, class: HandClass) -> Result<Rates, TableError> {
        self.get()?.equity(players, class)
    }

    #[cfg(test)]
    #[doc(hidden)]
    pub fn reset(&self) {
        *self.0.write().unwrap_or_else(|e| e.into_inner()) = State::Empty;
    }
}
