//! Sorting and extension filtering for directory listings.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::fs::entry::PathElement;

/// The field by which path elements are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Alphabetical by base name (case-insensitive).
    #[default]
    BaseName,
    /// By size in bytes.
    Size,
    /// By creation time.
    Creation,
}

/// Sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest / earliest / A–Z first.
    #[default]
    Asc,
    /// Largest / latest / Z–A first.
    Desc,
}

/// Options controlling [`crate::get_directory_elements`].
///
/// Build with [`Default`] and the `with_*` methods; any field left alone
/// keeps its default (`baseName`, `asc`, no extension filter, not recursive).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryElementsOptions {
    pub sort_by_key: SortKey,
    pub sort_order: SortOrder,
    /// Extensions (with leading dot) that files must have to be listed.
    /// Empty means every file is listed. Never applies to directories or
    /// symlinks.
    pub include_exts: Vec<String>,
    /// Descend into subdirectories while enumerating.
    pub recursive: bool,
}

impl DirectoryElementsOptions {
    #[must_use]
    pub fn with_sort_by_key(mut self, key: SortKey) -> Self {
        self.sort_by_key = key;
        self
    }

    #[must_use]
    pub fn with_sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }

    /// Sets the extension filter. Extensions are lowercased here so callers
    /// may pass `.JSON` or `.json` interchangeably.
    #[must_use]
    pub fn with_include_exts<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.include_exts = exts.into_iter().map(|e| e.as_ref().to_lowercase()).collect();
        self
    }

    #[must_use]
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Returns a copy with every entry of `include_exts` lowercased.
    ///
    /// Needed for options that were deserialized or assigned field by field.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let exts = self.include_exts.clone();
        self.clone().with_include_exts(exts)
    }

    /// Returns `true` if a file with extension `ext_name` passes the filter.
    pub fn accepts_extension(&self, ext_name: &str) -> bool {
        if self.include_exts.is_empty() {
            return true;
        }
        let ext = ext_name.to_lowercase();
        self.include_exts.iter().any(|e| e.to_lowercase() == ext)
    }
}

/// Compares two path elements by `key`, reversed when `order` is
/// [`SortOrder::Desc`].
pub fn compare_elements(
    a: &PathElement,
    b: &PathElement,
    key: SortKey,
    order: SortOrder,
) -> Ordering {
    let ord = match key {
        SortKey::BaseName => a
            .base_name()
            .to_lowercase()
            .cmp(&b.base_name().to_lowercase()),
        SortKey::Size => a.size().cmp(&b.size()),
        SortKey::Creation => a.creation().cmp(&b.creation()),
    };

    match order {
        SortOrder::Asc => ord,
        SortOrder::Desc => ord.reverse(),
    }
}

/// Sorts `elements` in place. The sort is stable.
pub fn sort_elements(elements: &mut [PathElement], key: SortKey, order: SortOrder) {
    elements.sort_by(|a, b| compare_elements(a, b, key, order));
}
