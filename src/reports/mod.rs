//! Report computations
//!
//! Pure functions from a loaded `TransactionSet` plus a `DateFilter` to
//! report values; rendering lives in `display`.

pub mod aggregate;
pub mod summary;

pub use aggregate::{aggregate_by, AggregateRow};
pub use summary::{summarize, Summary};
