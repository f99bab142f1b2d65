//! Observed versus theoretical category frequencies.

use core::fmt;

use crate::category::HandCategory;
use crate::simulation::Tally;

#[cfg(feature = "std")]
fn sqrt(value: f64) -> f64 {
    value.sqrt()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn sqrt(value: f64) -> f64 {
    libm::sqrt(value)
}

/// Result for a single category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportRow {
    /// The category.
    pub category: HandCategory,
    /// Hands observed in this category.
    pub count: u64,
    /// Observed share of all hands.
    pub observed: f64,
    /// Theoretical probability.
    pub expected: f64,
}

/// Comparison of a [`Tally`] against the exact five-card probabilities.
///
/// ```
/// use pokerfreq::{Report, Simulation, SimulationOptions};
///
/// let options = SimulationOptions::default().with_decks(2_000);
/// let tally = Simulation::new(options, 3).unwrap().run().unwrap();
/// let report = Report::new(&tally);
/// assert!(report.correlation() > 0.99);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Hands in the tally.
    pub total: u64,
    /// One row per category from weakest to strongest.
    pub rows: [ReportRow; 9],
}

impl Report {
    /// Builds the report for `tally`.
    #[must_use]
    pub fn new(tally: &Tally) -> Self {
        let rows = HandCategory::ALL.map(|category| ReportRow {
            category,
            count: tally.count(category),
            observed: tally.frequency(category),
            expected: category.probability(),
        });

        Self {
            total: tally.total(),
            rows,
        }
    }

    /// Returns the Pearson correlation between observed and expected shares.
    ///
    /// Returns 0 when the observed shares have no variance (an empty tally).
    #[must_use]
    pub fn correlation(&self) -> f64 {
        let n = self.rows.len() as f64;
        let mean_observed = self.rows.iter().map(|row| row.observed).sum::<f64>() / n;
        let mean_expected = self.rows.iter().map(|row| row.expected).sum::<f64>() / n;

        let mut covariance = 0.0;
        let mut var_observed = 0.0;
        let mut var_expected = 0.0;
        for row in &self.rows {
            let dx = row.observed - mean_observed;
            let dy = row.expected - mean_expected;
            covariance += dx * dy;
            var_observed += dx * dx;
            var_expected += dy * dy;
        }

        let denominator = sqrt(var_observed * var_expected);
        if denominator > 0.0 {
            covariance / denominator
        } else {
            0.0
        }
    }

    /// Returns Pearson's chi-square statistic over the nine categories.
    ///
    /// The statistic has 8 degrees of freedom. Straight flushes are rare enough
    /// that small runs inflate it.
    #[must_use]
    pub fn chi_square(&self) -> f64 {
        let total = self.total as f64;
        self.rows
            .iter()
            .map(|row| {
                let expected = total * row.expected;
                let diff = row.count as f64 - expected;
                if expected > 0.0 {
                    diff * diff / expected
                } else {
                    0.0
                }
            })
            .sum()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total hands: {}", self.total)?;
        writeln!(
            f,
            "{:<20} : {:>10}: {:>10} {:>10}",
            "hand", "count", "obtained", "expected"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<20} : {:>10}: {:>9.3}% {:>9.4}%",
                row.category.name(),
                row.count,
                row.observed * 100.0,
                row.expected * 100.0
            )?;
        }
        writeln!(f, "correlation: {:.4}", self.correlation())?;
        write!(f, "chi-square:  {:.2}", self.chi_square())
    }
}
