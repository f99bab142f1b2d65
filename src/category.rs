//! Poker hand categories and their theoretical frequencies.

use core::fmt;

/// Number of distinct five-card hands in a 52-card deck.
pub const TOTAL_HANDS: u64 = 2_598_960;

/// A five-card poker hand category, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    /// No other category applies.
    HighCard,
    /// Two cards of one rank.
    Pair,
    /// Two cards of one rank and two of another.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// A straight in a single suit.
    StraightFlush,
}

impl HandCategory {
    /// All categories from weakest to strongest.
    pub const ALL: [Self; 9] = [
        Self::HighCard,
        Self::Pair,
        Self::TwoPair,
        Self::ThreeOfAKind,
        Self::Straight,
        Self::Flush,
        Self::FullHouse,
        Self::FourOfAKind,
        Self::StraightFlush,
    ];

    /// Returns the category position in [`HandCategory::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the lowercase category label.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HighCard => "high card",
            Self::Pair => "pair",
            Self::TwoPair => "two pair",
            Self::ThreeOfAKind => "three of a kind",
            Self::Straight => "straight",
            Self::Flush => "flush",
            Self::FullHouse => "full house",
            Self::FourOfAKind => "four of a kind",
            Self::StraightFlush => "straight flush",
        }
    }

    /// Returns how many distinct five-card hands fall in this category.
    ///
    /// Royal flushes are counted as straight flushes.
    ///
    /// ```
    /// use pokerfreq::{HandCategory, TOTAL_HANDS};
    ///
    /// let total: u64 = HandCategory::ALL.iter().map(|c| c.combinations()).sum();
    /// assert_eq!(total, TOTAL_HANDS);
    /// ```
    #[must_use]
    pub const fn combinations(self) -> u64 {
        match self {
            Self::HighCard => 1_302_540,
            Self::Pair => 1_098_240,
            Self::TwoPair => 123_552,
            Self::ThreeOfAKind => 54_912,
            Self::Straight => 10_200,
            Self::Flush => 5_108,
            Self::FullHouse => 3_744,
            Self::FourOfAKind => 624,
            Self::StraightFlush => 40,
        }
    }

    /// Returns the probability of being dealt this category from a full deck.
    #[must_use]
    pub fn probability(self) -> f64 {
        self.combinations() as f64 / TOTAL_HANDS as f64
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
