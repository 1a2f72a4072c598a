//! YAML file loading for the data directory
//!
//! Reading only; this program never writes the data directory.

pub mod categories;
pub mod records;

pub use categories::{CategoryMap, CATEGORIES_FILE};
pub use records::load_directory;
