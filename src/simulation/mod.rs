//! Monte Carlo estimation of hand category frequencies.

use crate::deck::Deck;
use crate::error::SimulationError;
use crate::options::SimulationOptions;

mod tally;

pub use tally::{SharedTally, Tally};

/// A frequency simulation: shuffle a deck, deal hands, classify, and count.
///
/// Each trial shuffles one deck and deals `hands_per_deck` hands from it
/// without replacement. The seed fully determines the result.
///
/// # Example
///
/// ```
/// use pokerfreq::{Simulation, SimulationOptions};
///
/// let options = SimulationOptions::default().with_decks(100);
/// let tally = Simulation::new(options, 7).unwrap().run().unwrap();
/// assert_eq!(tally.total(), 1_000);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Simulation options.
    options: SimulationOptions,
    /// Seed for every deck in the run.
    seed: u64,
}

impl Simulation {
    /// Creates a simulation with the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`SimulationOptions::validate`].
    pub fn new(options: SimulationOptions, seed: u64) -> Result<Self, SimulationError> {
        options.validate()?;
        log::debug!(
            "simulation configured: {} decks, {} hands per deck, {} workers, seed {seed}",
            options.decks,
            options.hands_per_deck,
            options.workers
        );
        Ok(Self { options, seed })
    }

    /// Returns the simulation options.
    #[must_use]
    pub const fn options(&self) -> &SimulationOptions {
        &self.options
    }

    /// Returns the seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Runs every trial on the current thread.
    ///
    /// # Errors
    ///
    /// Returns an error if a deal fails, which validated options rule out.
    pub fn run(&self) -> Result<Tally, SimulationError> {
        let mut deck = Deck::with_stream(self.seed, 0);
        let tally = self.play(&mut deck, self.options.decks)?;
        log::info!("simulation finished: {} hands", tally.total());
        Ok(tally)
    }

    /// Runs the trials split over `options.workers` threads.
    ///
    /// Worker `i` deals from its own deck on stream `i`, so one worker gives
    /// the same result as [`Simulation::run`].
    ///
    /// # Errors
    ///
    /// Returns the first error reported by a worker.
    #[cfg(feature = "std")]
    pub fn run_parallel(&self) -> Result<Tally, SimulationError> {
        use alloc::vec::Vec;

        let workers = self.options.workers.min(self.options.decks as usize);
        let base = self.options.decks / workers as u32;
        let extra = self.options.decks % workers as u32;
        let shared = SharedTally::new();

        std::thread::scope(|scope| {
            let handles = (0..workers)
                .map(|worker| {
                    let decks = base + u32::from((worker as u32) < extra);
                    let shared = &shared;
                    scope.spawn(move || {
                        log::debug!("worker {worker} started with {decks} decks");
                        let mut deck = Deck::with_stream(self.seed, worker as u64);
                        let tally = self.play(&mut deck, decks)?;
                        shared.merge(&tally);
                        log::debug!("worker {worker} finished");
                        Ok::<(), SimulationError>(())
                    })
                })
                .collect::<Vec<_>>();

            handles.into_iter().try_for_each(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            })
        })?;

        let tally = shared.into_inner();
        log::info!(
            "parallel simulation finished: {} hands on {workers} workers",
            tally.total()
        );
        Ok(tally)
    }

    fn play(&self, deck: &mut Deck, decks: u32) -> Result<Tally, SimulationError> {
        let mut tally = Tally::new();
        for _ in 0..decks {
            deck.shuffle();
            for _ in 0..self.options.hands_per_deck {
                let hand = deck.deal_hand()?;
                tally.record(hand.category());
            }
        }
        Ok(tally)
    }
}
