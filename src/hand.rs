//! Five-card hand representation.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::card::Card;
use crate::category::HandCategory;
use crate::classify::{self, RankProfile};
use crate::error::HandError;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// Five distinct cards.
///
/// ```
/// use pokerfreq::{Hand, HandCategory};
///
/// let hand: Hand = "7H 7D 7C 2S 2H".parse().unwrap();
/// assert_eq!(hand.category(), HandCategory::FullHouse);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Creates a hand from exactly five distinct cards.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::InvalidSize`] if `cards` does not hold five cards,
    /// or [`HandError::DuplicateCard`] if a card is repeated.
    pub fn new(cards: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| HandError::InvalidSize { len: cards.len() })?;

        let mut seen: u64 = 0;
        for card in cards {
            let bit = 1u64 << card.index();
            if seen & bit != 0 {
                return Err(HandError::DuplicateCard(card));
            }
            seen |= bit;
        }

        Ok(Self { cards })
    }

    /// Wraps cards dealt from one deck, which are distinct by construction.
    pub(crate) const fn from_deck(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards }
    }

    /// Returns the cards in dealt order.
    #[must_use]
    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Returns the cards ordered by rank, Ace high.
    #[must_use]
    pub fn sorted(&self) -> [Card; HAND_SIZE] {
        let mut cards = self.cards;
        cards.sort_by_key(|card| card.rank());
        cards
    }

    /// Returns the rank-occurrence profile.
    #[must_use]
    pub fn rank_profile(&self) -> RankProfile {
        RankProfile::new(&self.cards)
    }

    /// Returns whether all cards share a suit.
    #[must_use]
    pub fn is_flush(&self) -> bool {
        classify::is_flush(&self.cards)
    }

    /// Returns whether the cards form a straight.
    #[must_use]
    pub fn is_straight(&self) -> bool {
        classify::is_straight(&self.cards)
    }

    /// Returns the hand category.
    #[must_use]
    pub fn category(&self) -> HandCategory {
        classify::evaluate(&self.cards)
    }
}

impl FromStr for Hand {
    type Err = HandError;

    /// Parses whitespace-separated cards in short notation, e.g. `"AH 2H 3H 4H 5H"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Card>, _>>()?;
        Self::new(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            writeln!(f, "{card}")?;
        }
        Ok(())
    }
}
