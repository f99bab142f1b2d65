//! Category counters.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::category::HandCategory;
use crate::deck::Deck;
use crate::sync::Mutex;

/// Number of hands seen per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    /// Hands per category; absent categories were never seen.
    counts: HashMap<HandCategory, u64>,
    /// Hands recorded.
    total: u64,
}

impl Tally {
    /// Creates an empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies every five-card hand once and returns the exact distribution.
    ///
    /// ```no_run
    /// use pokerfreq::{HandCategory, Tally, TOTAL_HANDS};
    ///
    /// let tally = Tally::exhaustive();
    /// assert_eq!(tally.total(), TOTAL_HANDS);
    /// assert_eq!(tally.count(HandCategory::StraightFlush), 40);
    /// ```
    #[must_use]
    pub fn exhaustive() -> Self {
        let mut tally = Self::new();
        Deck::new(0).for_each_hand(|hand| tally.record(hand.category()));
        tally
    }

    /// Records one hand.
    pub fn record(&mut self, category: HandCategory) {
        *self.counts.entry(category).or_insert(0) += 1;
        self.total += 1;
    }

    /// Returns the number of hands recorded for `category`.
    #[must_use]
    pub fn count(&self, category: HandCategory) -> u64 {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    /// Returns the number of hands recorded.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Returns the observed share of `category`, or 0 for an empty tally.
    #[must_use]
    pub fn frequency(&self, category: HandCategory) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(category) as f64 / self.total as f64
    }

    /// Adds the counts of `other`.
    pub fn merge(&mut self, other: &Self) {
        for (&category, &count) in &other.counts {
            *self.counts.entry(category).or_insert(0) += count;
        }
        self.total += other.total;
    }

    /// Returns `(category, count)` pairs from weakest to strongest category.
    pub fn iter(&self) -> impl Iterator<Item = (HandCategory, u64)> + '_ {
        HandCategory::ALL
            .into_iter()
            .map(|category| (category, self.count(category)))
    }
}

/// A tally that can be updated from several threads.
#[derive(Default)]
pub struct SharedTally {
    inner: Mutex<Tally>,
}

impl SharedTally {
    /// Creates an empty shared tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one hand.
    pub fn record(&self, category: HandCategory) {
        self.inner.lock().record(category);
    }

    /// Adds the counts of a local tally.
    pub fn merge(&self, other: &Tally) {
        self.inner.lock().merge(other);
    }

    /// Returns a copy of the current counts.
    pub fn snapshot(&self) -> Tally {
        self.inner.lock().clone()
    }

    /// Consumes the shared tally and returns the counts.
    pub fn into_inner(self) -> Tally {
        self.inner.into_inner()
    }
}
