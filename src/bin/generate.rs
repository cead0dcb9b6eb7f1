//! Generate Binary
//!
//! Writes the preflop snapshot that the equity calculator reads.
//!
//! `generate --out assets/data/preflop_table.v1.json --trials 2000000`
//! `generate --mode exact --players-min 2 --players-max 2`

use clap::Parser;
use holdem_equity::preflop::Generator;
use holdem_equity::preflop::Mode;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate the preflop equity table", long_about = None)]
struct Args {
    /// Snapshot destination
    #[arg(long, default_value = holdem_equity::TABLE_PATHS[0])]
    out: PathBuf,
    /// Trials per (class, players) entry
    #[arg(long, default_value_t = holdem_equity::TRIALS_SNAPSHOT)]
    trials: usize,
    /// monte_carlo or exact (exact is heads-up only)
    #[arg(long, default_value = "monte_carlo")]
    mode: Mode,
    #[arg(long, default_value_t = holdem_equity::PLAYERS_MIN)]
    players_min: usize,
    #[arg(long, default_value_t = holdem_equity::PLAYERS_MAX)]
    players_max: usize,
    /// Seed for a reproducible snapshot
    #[arg(long)]
    seed: Option<u64>,
    /// Parallel workers per entry
    #[arg(long, default_value_t = num_cpus::get())]
    workers: usize,
}

fn main() -> anyhow::Result<()> {
    holdem_equity::log();
    let args = Args::parse();
    let table = Generator::new(args.mode, args.trials, args.players_min, args.players_max)?
        .seed(args.seed)
        .workers(args.workers)
        .generate()?;
    table.save(&args.out)?;
    log::info!("{:<32}{:<32}", "wrote       preflop table", args.out.display());
    Ok(())
}
