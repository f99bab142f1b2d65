//! A single 52-card deck with a deal cursor.

use core::fmt;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;
use crate::hand::{HAND_SIZE, Hand};

/// A deck of 52 cards dealt sequentially without replacement.
///
/// The deck owns its random number generator so that a seed fully determines
/// every shuffle.
///
/// # Example
///
/// ```
/// use pokerfreq::{DECK_SIZE, DealError, Deck};
///
/// let mut deck = Deck::new(42);
/// deck.shuffle();
/// for _ in 0..DECK_SIZE {
///     deck.deal().unwrap();
/// }
/// assert_eq!(deck.deal(), Err(DealError::Exhausted));
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards in current order.
    cards: [Card; DECK_SIZE],
    /// Number of cards dealt since the last shuffle.
    cursor: usize,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates an unshuffled deck in canonical order with the given seed.
    ///
    /// The canonical order holds the 13 ranks, Ace first, of Hearts, then
    /// Diamonds, Clubs, and Spades.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates an unshuffled deck drawing randomness from an independent
    /// stream of the generator seeded with `seed`.
    #[must_use]
    pub fn with_stream(seed: u64, stream: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(stream);
        Self::from_rng(rng)
    }

    /// Creates a deck with the given seed and shuffles it once.
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::new(seed);
        deck.shuffle();
        deck
    }

    fn from_rng(rng: ChaCha8Rng) -> Self {
        let mut cards = [Card::new(Rank::Ace, Suit::Hearts); DECK_SIZE];
        let canonical = Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)));
        for (slot, card) in cards.iter_mut().zip(canonical) {
            *slot = card;
        }

        Self {
            cards,
            cursor: 0,
            rng,
        }
    }

    /// Collects all cards back and shuffles them uniformly.
    pub fn shuffle(&mut self) {
        self.cursor = 0;
        self.cards.shuffle(&mut self.rng);
        log::trace!("deck shuffled");
    }

    /// Deals the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::Exhausted`] once all 52 cards have been dealt since
    /// the last shuffle.
    pub fn deal(&mut self) -> Result<Card, DealError> {
        let card = *self.cards.get(self.cursor).ok_or(DealError::Exhausted)?;
        self.cursor += 1;
        Ok(card)
    }

    /// Deals the next five cards as a hand.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::Exhausted`] if fewer than five cards remain; no card
    /// is consumed in that case.
    pub fn deal_hand(&mut self) -> Result<Hand, DealError> {
        if self.remaining() < HAND_SIZE {
            return Err(DealError::Exhausted);
        }

        let mut cards = [self.cards[self.cursor]; HAND_SIZE];
        cards.copy_from_slice(&self.cards[self.cursor..self.cursor + HAND_SIZE]);
        self.cursor += HAND_SIZE;
        Ok(Hand::from_deck(cards))
    }

    /// Returns the number of cards dealt since the last shuffle.
    #[must_use]
    pub const fn dealt(&self) -> usize {
        self.cursor
    }

    /// Returns the number of cards left to deal.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        DECK_SIZE - self.cursor
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.cursor == DECK_SIZE
    }

    /// Calls `f` once for every five-card combination of the deck, ignoring the
    /// deal cursor (2,598,960 hands for a full deck).
    pub fn for_each_hand<F>(&self, mut f: F)
    where
        F: FnMut(Hand),
    {
        let cards = &self.cards;
        let n = cards.len();

        for c1 in 0..n {
            for c2 in (c1 + 1)..n {
                for c3 in (c2 + 1)..n {
                    for c4 in (c3 + 1)..n {
                        for c5 in (c4 + 1)..n {
                            f(Hand::from_deck([
                                cards[c1], cards[c2], cards[c3], cards[c4], cards[c5],
                            ]));
                        }
                    }
                }
            }
        }
    }

    /// Returns all cards in current order, dealt ones included.
    #[must_use]
    pub const fn cards(&self) -> &[Card; DECK_SIZE] {
        &self.cards
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            let name = alloc::format!("{card}");
            write!(f, "{name:<19}")?;
            if (index + 1) % 4 == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
