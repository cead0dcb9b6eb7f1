//! Hold'em equity estimation.
//!
//! Given a hero's hole cards, zero to five community cards, and a table size,
//! estimate the probability that the hero wins, ties, or loses at showdown.
//!
//! ## Modules
//!
//! - [`cards`] — Card primitives, input validation, and the hand-strength [`cards::Oracle`]
//! - [`sampling`] — Seeded and entropy-backed uniform streams, draw-without-replacement
//! - [`simulation`] — Per-trial engine and the Monte Carlo aggregator
//! - [`preflop`] — 169 hand classes, the cached preflop snapshot, and its generator
//! - [`dispatch`] — Request/response types and the lookup-vs-simulate policy
pub mod cards;
pub mod dispatch;
pub mod error;
pub mod preflop;
pub mod sampling;
pub mod simulation;

pub use error::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Win, tie, and lose rates.
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Fewest players a request may seat (hero plus one opponent).
pub const PLAYERS_MIN: usize = 2;
/// Most players a request may seat.
pub const PLAYERS_MAX: usize = 10;
/// Community cards at showdown.
pub const BOARD_SIZE: usize = 5;
/// Cards in a showdown hand (hole plus board).
pub const SHOWDOWN_SIZE: usize = 7;

// ============================================================================
// TRIAL BUDGETS
// Named presets map onto fixed counts. Callers bound latency by picking one.
// ============================================================================
/// Trials for the `fast` preset.
pub const TRIALS_FAST: usize = 50_000;
/// Trials for the `standard` preset.
pub const TRIALS_STANDARD: usize = 200_000;
/// Trials for the `high` preset.
pub const TRIALS_HIGH: usize = 1_000_000;
/// Trials per hand class when generating a preflop snapshot.
pub const TRIALS_SNAPSHOT: usize = 2_000_000;

// ============================================================================
// REPRODUCIBLE RANDOMNESS
// The seeded stream is part of the reproducibility contract: changing any of
// these changes every seeded result, so bump LCG_VERSION alongside.
// ============================================================================
/// Identifier of the seeded generator algorithm.
pub const LCG_VERSION: &str = "lcg-v1";
/// Numerical Recipes multiplier.
pub const LCG_MULTIPLIER: u64 = 1_664_525;
/// Numerical Recipes increment.
pub const LCG_INCREMENT: u64 = 1_013_904_223;
/// Seed offset between parallel workers of one run.
pub const WORKER_SEED_STRIDE: u64 = 1_000_000_000;

// ============================================================================
// PREFLOP SNAPSHOT
// ============================================================================
/// Snapshot format version written by the generator.
pub const TABLE_VERSION: &str = "v1";
/// Environment variable overriding the snapshot location.
pub const TABLE_PATH_ENV: &str = "PREFLOP_TABLE";
/// Snapshot locations searched, relative to the working directory.
pub const TABLE_PATHS: &[&str] = &[
    "assets/data/preflop_table.v1.json",
    "data/preflop_table.v1.json",
];
/// Rates are reported to this many decimal places.
pub const RATE_DECIMALS: i32 = 6;
/// Allowed drift of win + tie + lose from 1 in a loaded snapshot.
pub const RATE_TOLERANCE: Probability = 1e-3;
/// Rows between generator progress messages.
pub const PROGRESS_INTERVAL: usize = 100;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
