// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::decode::decode_object_table;
use crate::config::model::{ConfigDocument, ObjectTable};
use crate::errors::{LoadOrderError, Result};

/// Load a configuration document from a given path.
///
/// This only performs TOML deserialization; object tables are decoded lazily
/// by [`ConfigDocument::object_table`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigDocument> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading config file");
    let contents = fs::read_to_string(path)?;
    parse_str(&contents)
}

/// Parse a configuration document from TOML text.
pub fn parse_str(contents: &str) -> Result<ConfigDocument> {
    let root: toml::Table = toml::from_str(contents)?;
    Ok(ConfigDocument::new(root))
}

/// Helper to resolve a default config path.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("items.toml")
}

impl ConfigDocument {
    /// Decode the top-level table `name` into typed declarations.
    ///
    /// Fails only if the table is missing or is not a table; malformed
    /// entries inside it are skipped and recorded on the result.
    pub fn object_table(&self, name: &str) -> Result<ObjectTable> {
        match self.root.get(name) {
            None => {
                debug!(
                    table = name,
                    available = ?self.table_names().collect::<Vec<_>>(),
                    "object table not found"
                );
                Err(LoadOrderError::TableNotFound(name.to_string()))
            }
            Some(toml::Value::Table(table)) => Ok(decode_object_table(name, table)),
            Some(other) => Err(LoadOrderError::ConfigError(format!(
                "top-level `{}` must be a table of objects (got {})",
                name,
                other.type_str()
            ))),
        }
    }
}
