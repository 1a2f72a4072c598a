//! Category map loading
//!
//! `categories.yml` is a flat counterparty → category mapping, loaded once
//! per run and read-only thereafter.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{TallyError, TallyResult};

/// File name of the category map inside a data directory
pub const CATEGORIES_FILE: &str = "categories.yml";

/// Read-only mapping from spending counterparty to category name
#[derive(Debug, Clone, Default)]
pub struct CategoryMap {
    map: HashMap<String, String>,
}

impl CategoryMap {
    /// Load the category map from `<dir>/categories.yml`
    pub fn load(dir: &Path) -> TallyResult<Self> {
        let path = dir.join(CATEGORIES_FILE);
        let contents = fs::read_to_string(&path)
            .map_err(|e| TallyError::parse(path.display().to_string(), e))?;
        Self::from_yaml(&contents)
            .map_err(|e| TallyError::parse(path.display().to_string(), e))
    }

    /// Parse a category map from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        let map: HashMap<String, String> = serde_yaml::from_str(yaml)?;
        Ok(Self { map })
    }

    /// Look up the category for a counterparty
    pub fn category_for(&self, counterparty: &str) -> Option<&str> {
        self.map.get(counterparty).map(String::as_str)
    }

    /// Number of mapped counterparties
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
