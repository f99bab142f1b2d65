//! Card types and deck utilities.

extern crate alloc;

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Card rank.
///
/// The discriminant is the rank ordinal used for the canonical deck order and
/// for straight detection (Ace = 0, Two = 1, ..., King = 12). Ordering through
/// [`Ord`] treats the Ace as the highest rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace.
    Ace = 0,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in ordinal order, Ace first.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the rank ordinal (Ace = 0, King = 12).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the rank value with the Ace played high (2..=14).
    #[must_use]
    pub const fn high_value(self) -> u8 {
        match self {
            Self::Ace => 14,
            _ => self as u8 + 1,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(ordinal as usize)
            .copied()
            .ok_or(CardError::InvalidRank(ordinal))
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.high_value().cmp(&other.high_value())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the suit index in canonical deck order.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(CardError::InvalidSuit(index))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// ```
/// use pokerfreq::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Queen, Suit::Spades);
/// assert_eq!(card.to_string(), "Queen of Spades");
/// assert_eq!(card.image_name(), "Queen_of_Spades.png");
/// assert_eq!("QS".parse::<Card>(), Ok(card));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the card rank.
    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Returns the position of this card in a freshly built deck (0..52).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.suit.index() * 13 + self.rank.ordinal()
    }

    /// Returns the card at `index` in a freshly built deck.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidIndex`] if `index` is not below [`DECK_SIZE`].
    pub fn from_index(index: u8) -> Result<Self, CardError> {
        if index as usize >= DECK_SIZE {
            return Err(CardError::InvalidIndex(index));
        }
        Ok(Self::new(Rank::try_from(index % 13)?, Suit::try_from(index / 13)?))
    }

    /// Returns the image file name for this card, e.g. `Ace_of_Hearts.png`.
    #[must_use]
    pub fn image_name(self) -> String {
        let mut name = alloc::format!("{self}").replace(' ', "_");
        name.push_str(".png");
        name
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Parses short notation: a rank token (`A`, `2`..`10`, `T`, `J`, `Q`, `K`)
/// followed by a suit letter (`H`, `D`, `C`, `S`), case-insensitive.
impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .ok_or(CardError::Malformed)?;
        let (rank, suit) = s.split_at(split);

        let rank = match rank.to_ascii_uppercase().as_str() {
            "A" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            _ => return Err(CardError::Malformed),
        };

        let suit = match suit {
            "H" | "h" => Suit::Hearts,
            "D" | "d" => Suit::Diamonds,
            "C" | "c" => Suit::Clubs,
            "S" | "s" => Suit::Spades,
            _ => return Err(CardError::Malformed),
        };

        Ok(Self::new(rank, suit))
    }
}
