//! Transaction model
//!
//! A transaction is one dated money movement with a counterparty. Monthly
//! record files hold two sequences of them, `earnings` and `spendings`;
//! spendings additionally receive a category from the category map after
//! loading.

use chrono::NaiveDate;
use serde::Deserialize;

use super::money::Money;
use crate::error::{TallyError, TallyResult};
use crate::storage::CategoryMap;

/// A single dated money movement
#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    /// Amount in currency units
    pub amount: Money,

    /// Transaction date
    pub date: NaiveDate,

    /// The named source (earnings) or recipient (spendings), stored under
    /// the `with` key in the record files
    #[serde(rename = "with")]
    pub counterparty: String,

    /// Category label, assigned post-load for spendings only
    #[serde(default)]
    pub category: Option<String>,
}

impl Transaction {
    /// Create a new transaction without a category
    pub fn new(amount: Money, date: NaiveDate, counterparty: impl Into<String>) -> Self {
        Self {
            amount,
            date,
            counterparty: counterparty.into(),
            category: None,
        }
    }
}

/// All transactions of a run, split into earnings and spendings
///
/// Doubles as the parse target for a single monthly file (either key may be
/// absent) and as the merged set built from a whole data directory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionSet {
    /// Money coming in
    #[serde(default)]
    pub earnings: Vec<Transaction>,

    /// Money going out
    #[serde(default)]
    pub spendings: Vec<Transaction>,
}

impl TransactionSet {
    /// Append another set's transactions to this one
    pub fn merge(&mut self, other: TransactionSet) {
        self.earnings.extend(other.earnings);
        self.spendings.extend(other.spendings);
    }

    /// Assign a category to every spending transaction
    ///
    /// The category map is authoritative and complete: the first spending
    /// counterparty it doesn't cover aborts the run. Earnings are never
    /// categorized.
    pub fn apply_categories(&mut self, categories: &CategoryMap) -> TallyResult<()> {
        for spending in &mut self.spendings {
            match categories.category_for(&spending.counterparty) {
                Some(category) => spending.category = Some(category.to_string()),
                None => {
                    return Err(TallyError::UnknownCounterparty(
                        spending.counterparty.clone(),
                    ))
                }
            }
        }
        Ok(())
    }
}
