//! Core data models
//!
//! - `Money`: cents-backed currency amount
//! - `Transaction` / `TransactionSet`: the loaded records
//! - `DateFilter`: the `--date` matching rule

pub mod date_filter;
pub mod money;
pub mod transaction;

pub use date_filter::DateFilter;
pub use money::Money;
pub use transaction::{Transaction, TransactionSet};
