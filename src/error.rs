//! Error types for card, deck, hand, and simulation operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when building a card from raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank ordinal outside `0..13`.
    #[error("invalid rank ordinal {0}")]
    InvalidRank(u8),
    /// Suit index outside `0..4`.
    #[error("invalid suit index {0}")]
    InvalidSuit(u8),
    /// Card index outside `0..52`.
    #[error("invalid card index {0}")]
    InvalidIndex(u8),
    /// Card notation could not be parsed.
    #[error("malformed card notation")]
    Malformed,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards left in the deck since the last shuffle.
    #[error("deck exhausted")]
    Exhausted,
}

/// Errors that can occur when building or classifying a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand does not hold exactly five cards.
    #[error("a hand needs exactly 5 cards, got {len}")]
    InvalidSize {
        /// Number of cards supplied.
        len: usize,
    },
    /// The same card appears twice.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// Card notation in a hand string could not be parsed.
    #[error(transparent)]
    Card(#[from] CardError),
}

/// Errors that can occur while configuring or running a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The simulation has no decks to play.
    #[error("number of decks is zero")]
    NoDecks,
    /// No hands are dealt from each deck.
    #[error("hands per deck is zero")]
    NoHands,
    /// More hands requested per deck than one deck can supply.
    #[error("{requested} hands per deck requested, a deck holds at most {max}")]
    TooManyHands {
        /// Requested hands per deck.
        requested: u8,
        /// Maximum hands one deck can supply.
        max: u8,
    },
    /// The parallel run has no workers.
    #[error("number of workers is zero")]
    NoWorkers,
    /// Dealing failed during a trial.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A dealt hand was rejected.
    #[error(transparent)]
    Hand(#[from] HandError),
}
