//! CLI definition and command handlers
//!
//! Bridges clap argument parsing with the loading and report layers. The
//! parsed command is the run's entire configuration; nothing below this
//! module looks at process arguments.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::display::{render_rows, render_summary, RowVerb};
use crate::error::TallyResult;
use crate::models::{DateFilter, Transaction, TransactionSet};
use crate::reports::{aggregate_by, summarize};
use crate::storage::{self, CategoryMap};

/// Top-level argument structure
#[derive(Parser, Debug)]
#[command(
    name = "tally",
    version,
    about = "Summarize monthly earnings and spendings from a directory of YAML records",
    long_about = "Reads a data directory of monthly record files plus a categories.yml \
                  counterparty-to-category mapping, and prints an overall summary or a \
                  ranked earnings/spendings breakdown, optionally filtered by year or \
                  year-month."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// The three report subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Overall earnings, spendings, and savings
    Summary {
        /// Focus on entries at the given date (YYYY or YYYY-MM)
        #[arg(long, value_name = "YYYY[-MM]")]
        date: Option<String>,

        /// Directory holding the monthly record files and categories.yml
        data_dir: PathBuf,
    },

    /// Earnings ranked by counterparty
    Earnings {
        /// Focus on entries at the given date (YYYY or YYYY-MM)
        #[arg(long, value_name = "YYYY[-MM]")]
        date: Option<String>,

        /// Directory holding the monthly record files and categories.yml
        data_dir: PathBuf,
    },

    /// Spendings ranked by category
    Spendings {
        /// Focus on entries at the given date (YYYY or YYYY-MM)
        #[arg(long, value_name = "YYYY[-MM]")]
        date: Option<String>,

        /// Rank by raw counterparty instead of category
        #[arg(short = 'd', long)]
        details: bool,

        /// Directory holding the monthly record files and categories.yml
        data_dir: PathBuf,
    },
}

/// Execute a parsed subcommand, printing its report to stdout
pub fn run(command: Commands) -> TallyResult<()> {
    let output = match command {
        Commands::Summary { date, data_dir } => {
            let filter = parse_filter(date.as_deref())?;
            let set = load_data(&data_dir)?;
            render_summary(&summarize(&set, &filter))
        }
        Commands::Earnings { date, data_dir } => {
            let filter = parse_filter(date.as_deref())?;
            let set = load_data(&data_dir)?;
            let rows = aggregate_by(&set.earnings, &filter, |t: &Transaction| {
                t.counterparty.as_str()
            });
            render_rows(&rows, RowVerb::Earnt)
        }
        Commands::Spendings {
            date,
            details,
            data_dir,
        } => {
            let filter = parse_filter(date.as_deref())?;
            let set = load_data(&data_dir)?;
            let rows = if details {
                aggregate_by(&set.spendings, &filter, |t: &Transaction| {
                    t.counterparty.as_str()
                })
            } else {
                aggregate_by(&set.spendings, &filter, |t: &Transaction| {
                    t.category.as_deref().unwrap_or(&t.counterparty)
                })
            };
            render_rows(&rows, RowVerb::Spent)
        }
    };

    print!("{output}");
    Ok(())
}

fn parse_filter(date: Option<&str>) -> TallyResult<DateFilter> {
    date.unwrap_or("").parse()
}

/// Load the category map and every monthly record file, then categorize
///
/// The category map is applied for every subcommand, so an incomplete
/// categories.yml fails fast before any output.
fn load_data(data_dir: &Path) -> TallyResult<TransactionSet> {
    let categories = CategoryMap::load(data_dir)?;
    let mut set = storage::load_directory(data_dir)?;
    set.apply_categories(&categories)?;
    Ok(set)
}
