//! Classified directory listings.

use std::path::Path;

use serde::Serialize;

use crate::error::{FsError, FsResult};
use crate::fs::entry::{get_path_element, is_directory, PathElement};
use crate::fs::ops::read_directory;
use crate::nav::filter::{sort_elements, DirectoryElementsOptions};

/// The contents of a directory split by kind.
///
/// Every element appears in at most one list, and each list is sorted with
/// the same key and order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryPathElements {
    pub directories: Vec<PathElement>,
    pub files: Vec<PathElement>,
    pub symbolic_links: Vec<PathElement>,
}

impl DirectoryPathElements {
    /// Total number of listed elements.
    pub fn len(&self) -> usize {
        self.directories.len() + self.files.len() + self.symbolic_links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lists, classifies, filters and sorts the contents of the directory at
/// `path`.
///
/// Each child is resolved without following symlinks and routed by priority:
/// directories first, then files passing the extension filter, then symlinks.
/// A file rejected by the filter is left out entirely. Entries that vanish
/// between enumeration and resolution are skipped.
///
/// # Errors
///
/// - [`FsError::NotADirectory`] if `path` is not a directory.
/// - [`FsError::Io`] if the directory cannot be enumerated.
///
/// # Examples
///
/// ```no_run
/// use fslayer_core::{get_directory_elements, DirectoryElementsOptions, SortKey, SortOrder};
/// use std::path::Path;
///
/// let opts = DirectoryElementsOptions::default()
///     .with_sort_by_key(SortKey::Size)
///     .with_sort_order(SortOrder::Desc)
///     .with_include_exts([".json"]);
/// let listing = get_directory_elements(Path::new("data"), &opts).unwrap();
/// for file in &listing.files {
///     println!("{} ({} bytes)", file.base_name(), file.size());
/// }
/// ```
pub fn get_directory_elements(
    path: &Path,
    options: &DirectoryElementsOptions,
) -> FsResult<DirectoryPathElements> {
    if !is_directory(path) {
        return Err(FsError::NotADirectory(path.to_path_buf()));
    }

    let mut out = DirectoryPathElements::default();

    for child in read_directory(path, options.recursive)? {
        let Some(el) = get_path_element(&child) else {
            tracing::trace!("entry vanished before it could be read: {}", child.display());
            continue;
        };

        if el.is_directory() {
            out.directories.push(el);
        } else if el.is_file() && options.accepts_extension(el.ext_name()) {
            out.files.push(el);
        } else if el.is_symbolic_link() {
            out.symbolic_links.push(el);
        } else {
            tracing::trace!("entry excluded from listing: {}", child.display());
        }
    }

    let (key, order) = (options.sort_by_key, options.sort_order);
    sort_elements(&mut out.directories, key, order);
    sort_elements(&mut out.files, key, order);
    sort_elements(&mut out.symbolic_links, key, order);

    Ok(out)
}
