//! Text rendering of report output
//!
//! Everything renders to a `String`; the CLI layer decides where it goes.

use crate::reports::{AggregateRow, Summary};

/// Verb used when rendering aggregate rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowVerb {
    Earnt,
    Spent,
}

impl RowVerb {
    fn as_str(&self) -> &'static str {
        match self {
            RowVerb::Earnt => "we earnt",
            RowVerb::Spent => "we spent",
        }
    }
}

/// Render ranked aggregate rows, one aligned line per group
pub fn render_rows(rows: &[AggregateRow], verb: RowVerb) -> String {
    if rows.is_empty() {
        return "No data for that period.\n".to_string();
    }

    let mut output = String::new();
    for row in rows {
        let amount = format!("{},", row.amount);
        match row.percentage {
            Some(pct) => output.push_str(&format!(
                "From {:<25}: {} {:<11} this is {:>6}\n",
                row.key,
                verb.as_str(),
                amount,
                format!("{pct:.2}%"),
            )),
            None => output.push_str(&format!(
                "From {:<25}: {} {}\n",
                row.key,
                verb.as_str(),
                row.amount
            )),
        }
    }
    output
}

/// Render the earned/spent/delta summary
pub fn render_summary(summary: &Summary) -> String {
    let mut output = String::new();
    output.push_str(&format!("You earnt {}\n", summary.earned));
    output.push_str(&format!("You spent {}\n", summary.spent));

    let delta = summary.delta();
    if delta.is_positive() {
        output.push_str(&format!("You saved {}\n", delta));
    } else {
        output.push_str(&format!("You overspent {}\n", -delta));
    }

    if let Some(ratio) = summary.spending_ratio() {
        output.push_str(&format!("You spent {ratio:.2}% of your earnings\n"));
    }
    output
}
