//! tally - personal-finance summarization CLI
//!
//! This library provides the core functionality for the `tally` binary. It
//! reads a data directory of monthly YAML record files plus a
//! `categories.yml` counterparty-to-category mapping, and computes summary
//! and breakdown reports over them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: custom error types
//! - `models`: core data models (money, transactions, date filters)
//! - `storage`: YAML loading of record files and the category map
//! - `reports`: aggregation and summary computations
//! - `display`: text rendering of report output
//! - `cli`: subcommand definitions and handlers
//!
//! Everything is single-threaded and synchronous: one invocation loads the
//! full transaction set into memory, runs one computation, prints, and
//! exits.

pub mod cli;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{TallyError, TallyResult};
