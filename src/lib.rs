//! A five-card poker hand classifier and frequency simulator with optional
//! `no_std` support.
//!
//! The crate deals five-card hands from a seeded [`Deck`], sorts each hand into
//! one of nine [`HandCategory`] values with [`classify`], and runs Monte Carlo
//! [`Simulation`]s whose [`Tally`] can be compared against the exact
//! probabilities in a [`Report`].
//!
//! # Example
//!
//! ```
//! use pokerfreq::{Deck, HandCategory};
//!
//! let mut deck = Deck::shuffled(42);
//! let hand = deck.deal_hand().unwrap();
//! assert!(HandCategory::ALL.contains(&hand.category()));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod category;
pub mod classify;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod report;
pub mod simulation;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use category::{HandCategory, TOTAL_HANDS};
pub use classify::{RankProfile, classify};
pub use deck::Deck;
pub use error::{CardError, DealError, HandError, SimulationError};
pub use hand::{HAND_SIZE, Hand};
pub use options::{MAX_HANDS_PER_DECK, SimulationOptions};
pub use report::{Report, ReportRow};
pub use simulation::{SharedTally, Simulation, Tally};
