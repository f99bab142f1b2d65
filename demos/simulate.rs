//! Hand frequency simulation example.
//!
//! ```bash
//! $ RUST_LOG=debug cargo run --release --example simulate -- --workers 4
//! ```

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use clap::{Parser, value_parser};
use pokerfreq::{Deck, MAX_HANDS_PER_DECK, Report, Simulation, SimulationOptions, Tally};

#[derive(Debug, Parser)]
struct Cli {
    /// Number of shuffled decks.
    #[clap(long, short, default_value_t = 6_000)]
    decks: u32,
    /// Hands dealt from each deck.
    #[clap(long, default_value_t = 10, value_parser = value_parser!(u8).range(1..=i64::from(MAX_HANDS_PER_DECK)))]
    hands_per_deck: u8,
    /// Seed, defaults to the current time.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Worker threads.
    #[clap(long, short, default_value_t = 1)]
    workers: usize,
    /// Classify all 2,598,960 hands instead of sampling.
    #[clap(long)]
    exhaustive: bool,
    /// Print one sample hand and its category first.
    #[clap(long)]
    sample: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    if cli.sample {
        let mut deck = Deck::shuffled(seed);
        match deck.deal_hand() {
            Ok(hand) => println!("{hand}=> {}\n", hand.category()),
            Err(err) => println!("Deal error: {err}"),
        }
    }

    let now = Instant::now();

    let tally = if cli.exhaustive {
        Tally::exhaustive()
    } else {
        let options = SimulationOptions::default()
            .with_decks(cli.decks)
            .with_hands_per_deck(cli.hands_per_deck)
            .with_workers(cli.workers);

        let result = Simulation::new(options, seed).and_then(|simulation| {
            if options.workers > 1 {
                simulation.run_parallel()
            } else {
                simulation.run()
            }
        });

        match result {
            Ok(tally) => tally,
            Err(err) => {
                eprintln!("Simulation error: {err}");
                std::process::exit(1);
            }
        }
    };

    println!("{}", Report::new(&tally));
    println!("Seed: {seed}");
    println!("Elapsed: {:.3}s", now.elapsed().as_secs_f64());
}
