//! Path element resolution and classification.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::Serialize;

/// A point-in-time snapshot of a single filesystem entry.
///
/// `PathElement` is immutable and is built fresh by every call to
/// [`get_path_element`]. Metadata is link-aware: a symbolic link reports
/// `is_symbolic_link() == true` and is never also a file or a directory.
///
/// # Examples
///
/// ```no_run
/// use fslayer_core::get_path_element;
/// use std::path::Path;
///
/// let el = get_path_element(Path::new("Cargo.toml")).unwrap();
/// assert_eq!(el.base_name(), "Cargo.toml");
/// assert_eq!(el.ext_name(), ".toml");
/// assert!(el.is_file());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathElement {
    path: PathBuf,
    base_name: String,
    ext_name: String,
    is_file: bool,
    is_directory: bool,
    is_symbolic_link: bool,
    size: u64,
    creation: i64,
}

impl PathElement {
    /// Creates a `PathElement` from a path and its `symlink_metadata`.
    ///
    /// The path is stored exactly as given and the base name is its last
    /// segment, byte for byte when it is valid UTF-8. Sizes are taken
    /// verbatim from the metadata, directories included.
    pub fn new(path: PathBuf, metadata: &std::fs::Metadata) -> Self {
        let base_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext_name = extension_of(&base_name).to_string();
        let file_type = metadata.file_type();

        Self {
            path,
            base_name,
            ext_name,
            is_file: file_type.is_file(),
            is_directory: file_type.is_dir(),
            is_symbolic_link: file_type.is_symlink(),
            size: metadata.len(),
            creation: metadata.created().map(to_epoch_millis).unwrap_or(0),
        }
    }

    /// Returns the path this element was resolved from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the last path segment.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Returns the extension including its leading dot, or `""`.
    pub fn ext_name(&self) -> &str {
        &self.ext_name
    }

    pub fn is_file(&self) -> bool {
        self.is_file
    }

    pub fn is_directory(&self) -> bool {
        self.is_directory
    }

    pub fn is_symbolic_link(&self) -> bool {
        self.is_symbolic_link
    }

    /// Returns the size in bytes as reported by the OS.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Returns the creation time in milliseconds since the Unix epoch.
    ///
    /// `0` when the platform does not record birth times.
    pub fn creation(&self) -> i64 {
        self.creation
    }
}

/// Extension of a base name: the text from the last `.` onwards, unless that
/// dot is the first character.
fn extension_of(base_name: &str) -> &str {
    match base_name.rfind('.') {
        Some(idx) if idx > 0 => &base_name[idx..],
        _ => "",
    }
}

fn to_epoch_millis(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => round_millis(after),
        Err(before) => -round_millis(before.duration()),
    }
}

fn round_millis(d: Duration) -> i64 {
    let millis = d.as_secs() as i64 * 1000 + i64::from(d.subsec_nanos() / 1_000_000);
    let remainder = d.subsec_nanos() % 1_000_000;
    if remainder >= 500_000 {
        millis + 1
    } else {
        millis
    }
}

/// Resolves `path` into a [`PathElement`], without following symlinks.
///
/// Returns `None` if metadata cannot be obtained for any reason, most
/// commonly because the path does not exist.
pub fn get_path_element(path: &Path) -> Option<PathElement> {
    let metadata = std::fs::symlink_metadata(path).ok()?;
    Some(PathElement::new(path.to_path_buf(), &metadata))
}

/// Returns `true` if something is reachable at `path`.
///
/// Symlinks are followed, so a dangling link reports `false`.
pub fn path_exists(path: &Path) -> bool {
    path.exists()
}

/// Returns `true` if `path` exists and is a directory (not a symlink to one).
pub fn is_directory(path: &Path) -> bool {
    get_path_element(path).is_some_and(|el| el.is_directory())
}

/// Returns `true` if `path` exists and is a regular file (not a symlink to one).
pub fn is_file(path: &Path) -> bool {
    get_path_element(path).is_some_and(|el| el.is_file())
}
