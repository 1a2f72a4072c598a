//! Overall earned/spent/delta summary

use crate::models::{DateFilter, Money, Transaction, TransactionSet};

/// Totals over the filtered population
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Total earnings in the period
    pub earned: Money,

    /// Total spendings in the period
    pub spent: Money,
}

impl Summary {
    /// Earnings minus spendings; positive means money was saved
    pub fn delta(&self) -> Money {
        self.earned - self.spent
    }

    /// Spendings as a percentage of earnings
    ///
    /// `None` unless earnings are positive; the ratio is meaningless
    /// otherwise and computing it could divide by zero.
    pub fn spending_ratio(&self) -> Option<f64> {
        self.earned
            .is_positive()
            .then(|| self.spent.ratio_of(self.earned))
    }
}

fn total(entries: &[Transaction], filter: &DateFilter) -> Money {
    entries
        .iter()
        .filter(|e| filter.accepts(e.date))
        .map(|e| e.amount)
        .sum()
}

/// Compute earned and spent totals for the transactions the filter accepts
pub fn summarize(set: &TransactionSet, filter: &DateFilter) -> Summary {
    Summary {
        earned: total(&set.earnings, filter),
        spent: total(&set.spendings, filter),
    }
}
