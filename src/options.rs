//! Simulation configuration options.

use crate::card::DECK_SIZE;
use crate::error::SimulationError;
use crate::hand::HAND_SIZE;

/// Most hands one deck can supply without reshuffling.
pub const MAX_HANDS_PER_DECK: u8 = (DECK_SIZE / HAND_SIZE) as u8;

/// Configuration options for a frequency simulation.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pokerfreq::SimulationOptions;
///
/// let options = SimulationOptions::default()
///     .with_decks(1_000)
///     .with_hands_per_deck(5)
///     .with_workers(4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationOptions {
    /// Number of trials; each trial shuffles a deck once.
    pub decks: u32,
    /// Hands dealt from each shuffled deck.
    pub hands_per_deck: u8,
    /// Threads used by a parallel run.
    pub workers: usize,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            decks: 6_000,
            hands_per_deck: 10,
            workers: 1,
        }
    }
}

impl SimulationOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerfreq::SimulationOptions;
    ///
    /// let options = SimulationOptions::default().with_decks(500);
    /// assert_eq!(options.decks, 500);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u32) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of hands dealt from each deck.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerfreq::SimulationOptions;
    ///
    /// let options = SimulationOptions::default().with_hands_per_deck(1);
    /// assert_eq!(options.hands_per_deck, 1);
    /// ```
    #[must_use]
    pub const fn with_hands_per_deck(mut self, hands: u8) -> Self {
        self.hands_per_deck = hands;
        self
    }

    /// Sets the number of worker threads for a parallel run.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerfreq::SimulationOptions;
    ///
    /// let options = SimulationOptions::default().with_workers(8);
    /// assert_eq!(options.workers, 8);
    /// ```
    #[must_use]
    pub const fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Returns the total number of hands the options deal.
    #[must_use]
    pub const fn total_hands(&self) -> u64 {
        self.decks as u64 * self.hands_per_deck as u64
    }

    /// Checks that the options describe a runnable simulation.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no decks, no hands per deck, more hands
    /// per deck than one deck holds, or no workers.
    pub const fn validate(&self) -> Result<(), SimulationError> {
        if self.decks == 0 {
            return Err(SimulationError::NoDecks);
        }
        if self.hands_per_deck == 0 {
            return Err(SimulationError::NoHands);
        }
        if self.hands_per_deck > MAX_HANDS_PER_DECK {
            return Err(SimulationError::TooManyHands {
                requested: self.hands_per_deck,
                max: MAX_HANDS_PER_DECK,
            });
        }
        if self.workers == 0 {
            return Err(SimulationError::NoWorkers);
        }
        Ok(())
    }
}
