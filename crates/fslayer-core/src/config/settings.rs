//! Configuration loaded from a TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FsError, FsResult};
use crate::fs::files::{write_json_file_with_indent, DEFAULT_JSON_INDENT};
use crate::nav::filter::{DirectoryElementsOptions, SortKey, SortOrder};

/// Top-level configuration.
///
/// All fields have defaults so an empty or partial file is valid.
/// Call [`Config::load`] to read from a TOML path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub json: JsonConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`FsError::NonExistentFile`] if the file does not exist.
    /// - [`FsError::ConfigParse`] if the TOML is malformed.
    /// - [`FsError::Io`] for any other read failure.
    pub fn load(path: &Path) -> FsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => FsError::NonExistentFile(path.to_path_buf()),
            _ => FsError::Io(e),
        })?;
        toml::from_str(&content).map_err(|e| FsError::ConfigParse(e.to_string()))
    }

    /// Listing options built from the `[listing]` table, with extensions
    /// lowercased.
    pub fn directory_elements_options(&self) -> DirectoryElementsOptions {
        DirectoryElementsOptions::default()
            .with_sort_by_key(self.listing.sort_by_key)
            .with_sort_order(self.listing.sort_order)
            .with_include_exts(&self.listing.include_exts)
            .with_recursive(self.listing.recursive)
    }

    /// Writes `data` as JSON using the configured `[json] indent`.
    ///
    /// # Errors
    ///
    /// Same as [`crate::write_json_file`].
    pub fn write_json_file<T: Serialize + ?Sized>(&self, path: &Path, data: &T) -> FsResult<()> {
        write_json_file_with_indent(path, data, self.json.indent)
    }
}

/// Defaults for directory listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingConfig {
    #[serde(default)]
    pub sort_by_key: SortKey,
    #[serde(default)]
    pub sort_order: SortOrder,
    #[serde(default)]
    pub include_exts: Vec<String>,
    #[serde(default)]
    pub recursive: bool,
}

/// JSON output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonConfig {
    #[serde(default = "default_json_indent")]
    pub indent: usize,
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self {
            indent: default_json_indent(),
        }
    }
}

fn default_json_indent() -> usize {
    DEFAULT_JSON_INDENT
}
