//! Equity Binary
//!
//! One-shot win/tie/lose estimate, printed as a JSON response.
//!
//! `equity --players 6 --hero "As Kd" --board "7h 8h 9h" --trials fast --seed 42`

use clap::Parser;
use holdem_equity::dispatch::Calculator;
use holdem_equity::dispatch::Request;
use holdem_equity::simulation::Budget;

#[derive(Parser, Debug)]
#[command(author, version, about = "Estimate Hold'em showdown equity", long_about = None)]
struct Args {
    /// Seats at the table, hero included
    #[arg(short, long, default_value_t = 2)]
    players: usize,
    /// Hero hole cards, e.g. "As Kd"
    #[arg(long, required = true)]
    hero: String,
    /// Community cards: none, a flop, a turn, or a river
    #[arg(short, long, default_value = "")]
    board: String,
    /// fast, standard, high, or a trial count
    #[arg(short, long, default_value = "standard")]
    trials: Budget,
    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,
    /// Simulate preflop when no table is available
    #[arg(long)]
    fallback: bool,
    /// Parallel workers for simulation
    #[arg(short, long, default_value_t = 1)]
    workers: usize,
}

fn main() -> anyhow::Result<()> {
    holdem_equity::log();
    let args = Args::parse();
    let request = Request {
        players: args.players,
        hero: args.hero.split_whitespace().map(String::from).collect(),
        board: args.board.split_whitespace().map(String::from).collect(),
        trials: args.trials,
        seed: args.seed,
    };
    let calculator = Calculator::default()
        .fallback(args.fallback)
        .workers(args.workers);
    match calculator.calculate(&request) {
        Ok(response) => {
            log::info!("{:<32}{:<32}", "calculated  equity", response);
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Err(e) => {
            let body = serde_json::json!({
                "error": e.code(),
                "details": e.to_string(),
                "card": e.card(),
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
            Err(e.into())
        }
    }
}
