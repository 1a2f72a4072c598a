//! Grouped, ranked breakdown of a transaction list
//!
//! The aggregation pipeline: apply the date filter, group by a
//! caller-supplied key, sum per group, annotate each group with its share of
//! the included total, sort descending by amount.

use std::collections::HashMap;

use crate::models::{DateFilter, Money, Transaction};

/// One grouped, summed, percentage-annotated report line
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    /// Grouping key (counterparty or category)
    pub key: String,

    /// Summed amount for this group
    pub amount: Money,

    /// Share of the included grand total, `None` when that total is zero
    pub percentage: Option<f64>,
}

/// Group filtered transactions by `key_of`, sum, rank descending
///
/// Groups keep first-seen order internally (an index-tracking map, never
/// hash iteration order), and the final sort is stable, so equal sums stay
/// in first-seen order. Percentages are relative to the filtered population
/// only and are skipped entirely when its total is zero.
pub fn aggregate_by<'a, F>(
    entries: &'a [Transaction],
    filter: &DateFilter,
    key_of: F,
) -> Vec<AggregateRow>
where
    F: Fn(&'a Transaction) -> &'a str,
{
    let mut rows: Vec<AggregateRow> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut total = Money::zero();

    for entry in entries.iter().filter(|e| filter.accepts(e.date)) {
        total += entry.amount;
        let key = key_of(entry);
        match index.get(key) {
            Some(&at) => rows[at].amount += entry.amount,
            None => {
                index.insert(key, rows.len());
                rows.push(AggregateRow {
                    key: key.to_string(),
                    amount: entry.amount,
                    percentage: None,
                });
            }
        }
    }

    if !total.is_zero() {
        for row in &mut rows {
            row.percentage = Some(row.amount.ratio_of(total));
        }
    }

    rows.sort_by(|a, b| b.amount.cmp(&a.amount));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn txn(amount_cents: i64, date: (i32, u32, u32), with: &str) -> Transaction {
        Transaction::new(
            Money::from_cents(amount_cents),
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            with,
        )
    }

    fn categorized(amount_cents: i64, date: (i32, u32, u32), with: &str, cat: &str) -> Transaction {
        let mut t = txn(amount_cents, date, with);
        t.category = Some(cat.to_string());
        t
    }

    fn by_counterparty(t: &Transaction) -> &str {
        &t.counterparty
    }

    #[test]
    fn test_earnings_scenario() {
        let entries = vec![
            txn(432100, (2020, 12, 25), "Company"),
            txn(500, (2020, 12, 25), "Santa Claus"),
        ];

        let rows = aggregate_by(&entries, &DateFilter::Unfiltered, by_counterparty);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].key, "Company");
        assert_eq!(rows[0].amount.cents(), 432100);
        assert!((rows[0].percentage.unwrap() - 99.884).abs() < 0.001);
        assert_eq!(rows[1].key, "Santa Claus");
        assert!((rows[1].percentage.unwrap() - 0.116).abs() < 0.001);
    }

    #[test]
    fn test_groups_by_category() {
        let entries = vec![
            categorized(123400, (2020, 12, 1), "rent", "home"),
            categorized(1337, (2020, 12, 12), "cat food shop", "cat"),
            categorized(7331, (2020, 12, 21), "saq", "wine"),
            categorized(4224, (2020, 12, 25), "cat food shop", "cat"),
        ];

        let rows = aggregate_by(&entries, &DateFilter::Unfiltered, |t| {
            t.category.as_deref().unwrap_or(&t.counterparty)
        });

        let keyed: Vec<(&str, i64)> = rows.iter().map(|r| (r.key.as_str(), r.amount.cents())).collect();
        assert_eq!(keyed, vec![("home", 123400), ("wine", 7331), ("cat", 5561)]);

        let pct_total: f64 = rows.iter().map(|r| r.percentage.unwrap()).sum();
        assert!((pct_total - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_groups_by_counterparty_in_details_mode() {
        let entries = vec![
            categorized(123400, (2020, 12, 1), "rent", "home"),
            categorized(1337, (2020, 12, 12), "cat food shop", "cat"),
            categorized(7331, (2020, 12, 21), "saq", "wine"),
            categorized(4224, (2020, 12, 25), "cat food shop", "cat"),
        ];

        let rows = aggregate_by(&entries, &DateFilter::Unfiltered, by_counterparty);

        let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["rent", "saq", "cat food shop"]);
        assert_eq!(rows[2].amount.cents(), 5561);
    }

    #[test]
    fn test_row_amounts_sum_to_included_total() {
        let entries = vec![
            txn(1000, (2020, 3, 1), "a"),
            txn(2500, (2020, 7, 1), "b"),
            txn(500, (2021, 1, 1), "a"), // excluded by the filter
        ];

        let rows = aggregate_by(&entries, &DateFilter::Year(2020), by_counterparty);

        let total: Money = rows.iter().map(|r| r.amount).sum();
        assert_eq!(total.cents(), 3500);
    }

    #[test]
    fn test_sorted_non_increasing_with_stable_ties() {
        let entries = vec![
            txn(100, (2020, 1, 1), "first"),
            txn(100, (2020, 1, 2), "second"),
            txn(900, (2020, 1, 3), "big"),
            txn(100, (2020, 1, 4), "third"),
        ];

        let rows = aggregate_by(&entries, &DateFilter::Unfiltered, by_counterparty);

        let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["big", "first", "second", "third"]);
        for pair in rows.windows(2) {
            assert!(pair[0].amount >= pair[1].amount);
        }
    }

    #[test]
    fn test_empty_when_nothing_matches() {
        let entries = vec![txn(1000, (2019, 6, 1), "a")];
        let rows = aggregate_by(&entries, &DateFilter::Year(2020), by_counterparty);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_zero_total_produces_no_percentages() {
        let entries = vec![
            txn(0, (2020, 1, 1), "a"),
            txn(0, (2020, 1, 2), "b"),
        ];

        let rows = aggregate_by(&entries, &DateFilter::Unfiltered, by_counterparty);

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.percentage.is_none()));
    }
}
