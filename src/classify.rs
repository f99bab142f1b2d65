//! Five-card hand classification.
//!
//! A hand is reduced to its rank-occurrence profile and two predicates (flush
//! and straight), then matched against an ordered list of checks from the
//! rarest category down to high card. The first check that holds wins, so a
//! straight flush is never reported as a plain flush or straight.
//!
//! ```
//! use pokerfreq::{classify, Card, HandCategory};
//!
//! let cards = ["TC", "JC", "QC", "KC", "AC"].map(|s| s.parse::<Card>().unwrap());
//! assert_eq!(classify(&cards), Ok(HandCategory::StraightFlush));
//! ```

use crate::card::{Card, Rank};
use crate::category::HandCategory;
use crate::error::HandError;
use crate::hand::{HAND_SIZE, Hand};

/// Classifies five cards into a [`HandCategory`].
///
/// # Errors
///
/// Returns [`HandError::InvalidSize`] unless exactly five cards are given, and
/// [`HandError::DuplicateCard`] if a card appears more than once.
pub fn classify(cards: &[Card]) -> Result<HandCategory, HandError> {
    Hand::new(cards).map(|hand| hand.category())
}

/// Sorted counts of how many cards share each distinct rank.
///
/// A full house has the profile `[2, 3]`, two pair `[1, 2, 2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankProfile {
    counts: [u8; HAND_SIZE],
    len: usize,
}

impl RankProfile {
    /// Computes the profile of five cards.
    #[must_use]
    pub fn new(cards: &[Card; HAND_SIZE]) -> Self {
        let mut per_rank = [0u8; Rank::ALL.len()];
        for card in cards {
            per_rank[card.rank().ordinal() as usize] += 1;
        }

        let mut counts = [0u8; HAND_SIZE];
        let mut len = 0;
        for &count in per_rank.iter().filter(|&&count| count > 0) {
            counts[len] = count;
            len += 1;
        }
        counts[..len].sort_unstable();

        Self { counts, len }
    }

    /// Returns the counts in ascending order.
    #[must_use]
    pub fn counts(&self) -> &[u8] {
        &self.counts[..self.len]
    }

    /// Returns the number of distinct ranks.
    #[must_use]
    pub const fn distinct_ranks(&self) -> usize {
        self.len
    }
}

/// Returns whether all five cards share a suit.
#[must_use]
pub fn is_flush(cards: &[Card; HAND_SIZE]) -> bool {
    let suit = cards[0].suit();
    cards.iter().all(|card| card.suit() == suit)
}

/// Returns whether the five cards form a straight.
///
/// The Ace plays low in A-2-3-4-5 and high in 10-J-Q-K-A; a run through both
/// ends such as Q-K-A-2-3 is not a straight.
#[must_use]
pub fn is_straight(cards: &[Card; HAND_SIZE]) -> bool {
    let mut ordinals = cards.map(|card| card.rank().ordinal());
    ordinals.sort_unstable();

    if is_run(&ordinals) {
        return true;
    }

    // Ace and King together: retry with the Ace above the King.
    if ordinals[0] == Rank::Ace.ordinal() && ordinals[HAND_SIZE - 1] == Rank::King.ordinal() {
        ordinals[0] = Rank::King.ordinal() + 1;
        ordinals.rotate_left(1);
        return is_run(&ordinals);
    }

    false
}

fn is_run(ordinals: &[u8; HAND_SIZE]) -> bool {
    ordinals.windows(2).all(|pair| pair[1] == pair[0] + 1)
}

/// Facts derived once per hand and shared by every check.
struct Features {
    profile: RankProfile,
    flush: bool,
    straight: bool,
}

type Check = (HandCategory, fn(&Features) -> bool);

/// Checks in descending rarity; the last one always holds.
const CHECKS: [Check; 9] = [
    (HandCategory::StraightFlush, straight_flush),
    (HandCategory::FourOfAKind, four_of_a_kind),
    (HandCategory::FullHouse, full_house),
    (HandCategory::Flush, flush),
    (HandCategory::Straight, straight),
    (HandCategory::ThreeOfAKind, three_of_a_kind),
    (HandCategory::TwoPair, two_pair),
    (HandCategory::Pair, pair),
    (HandCategory::HighCard, high_card),
];

const fn straight_flush(features: &Features) -> bool {
    features.flush && features.straight
}

fn four_of_a_kind(features: &Features) -> bool {
    features.profile.counts() == [1, 4]
}

fn full_house(features: &Features) -> bool {
    features.profile.counts() == [2, 3]
}

const fn flush(features: &Features) -> bool {
    features.flush
}

const fn straight(features: &Features) -> bool {
    features.straight
}

fn three_of_a_kind(features: &Features) -> bool {
    features.profile.counts() == [1, 1, 3]
}

fn two_pair(features: &Features) -> bool {
    features.profile.counts() == [1, 2, 2]
}

fn pair(features: &Features) -> bool {
    features.profile.counts() == [1, 1, 1, 2]
}

const fn high_card(_: &Features) -> bool {
    true
}

/// Classifies five cards already known to be distinct.
pub(crate) fn evaluate(cards: &[Card; HAND_SIZE]) -> HandCategory {
    let features = Features {
        profile: RankProfile::new(cards),
        flush: is_flush(cards),
        straight: is_straight(cards),
    };

    CHECKS
        .iter()
        .find(|(_, matches)| matches(&features))
        .map_or(HandCategory::HighCard, |&(category, _)| category)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(notation: &str) -> [Card; HAND_SIZE] {
        let parsed: alloc::vec::Vec<Card> = notation
            .split_whitespace()
            .map(|s| s.parse().unwrap())
            .collect();
        parsed.try_into().unwrap()
    }

    #[test]
    fn profile_counts_are_sorted() {
        assert_eq!(RankProfile::new(&cards("7H 7D 7C 2S 2H")).counts(), [2, 3]);
        assert_eq!(RankProfile::new(&cards("9H 5D 9C 2S 5H")).counts(), [1, 2, 2]);
        assert_eq!(
            RankProfile::new(&cards("3H 5D 9C JS KH")).counts(),
            [1, 1, 1, 1, 1]
        );
        assert_eq!(RankProfile::new(&cards("2H 2D 2C 2S 9H")).distinct_ranks(), 2);
    }

    #[test]
    fn ace_plays_at_both_ends_only() {
        assert!(is_straight(&cards("AH 2D 3C 4S 5H")));
        assert!(is_straight(&cards("TH JD QC KS AH")));
        assert!(is_straight(&cards("9H TD JC QS KH")));
        assert!(!is_straight(&cards("QH KD AC 2S 3H")));
        assert!(!is_straight(&cards("JH QD KC AS 2H")));
        assert!(!is_straight(&cards("KH AD 2C 3S 4H")));
        assert!(!is_straight(&cards("AH AD 2C 3S 4H")));
    }

    #[test]
    fn checks_end_with_a_fallback() {
        let last = CHECKS[CHECKS.len() - 1];
        assert_eq!(last.0, HandCategory::HighCard);

        let categories: alloc::vec::Vec<_> = CHECKS.iter().map(|(c, _)| *c).collect();
        assert_eq!(categories.len(), HandCategory::ALL.len());
        for category in HandCategory::ALL {
            assert!(categories.contains(&category));
        }
    }
}
