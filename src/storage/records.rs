//! Monthly record loading
//!
//! A data directory holds one `categories.yml` plus any number of monthly
//! record files, each with `earnings` and `spendings` sequences. Loading
//! reads every record file and concatenates the results into one
//! `TransactionSet`.

use std::fs;
use std::path::Path;

use crate::error::{TallyError, TallyResult};
use crate::models::TransactionSet;
use crate::storage::categories::CATEGORIES_FILE;

/// Parse one monthly record file
pub fn load_monthly_file(path: &Path) -> TallyResult<TransactionSet> {
    let contents =
        fs::read_to_string(path).map_err(|e| TallyError::parse(path.display().to_string(), e))?;
    serde_yaml::from_str(&contents).map_err(|e| TallyError::parse(path.display().to_string(), e))
}

/// Load every monthly record file in a data directory
///
/// Entries are processed in file-name order so the merged set (and with it
/// the first-seen grouping order downstream) is reproducible across
/// platforms. `categories.yml` and subdirectories are skipped; any other
/// file that fails to parse aborts the load, naming the file.
pub fn load_directory(dir: &Path) -> TallyResult<TransactionSet> {
    let entries = fs::read_dir(dir)
        .map_err(|e| TallyError::Io(format!("Couldn't read directory {}: {}", dir.display(), e)))?;

    let mut paths: Vec<_> = entries
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.file_name().and_then(|n| n.to_str()) != Some(CATEGORIES_FILE))
        .collect();
    paths.sort();

    let mut all = TransactionSet::default();
    for path in paths {
        all.merge(load_monthly_file(&path)?);
    }
    Ok(all)
}
