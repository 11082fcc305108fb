//! Error types for `fslayer-core`.
//!
//! Every validated operation returns [`FsResult<T>`], an alias for
//! `Result<T, FsError>`. The first six variants form the closed taxonomy of
//! precondition failures; each maps to an [`ErrorKind`] tag. Unexpected OS
//! failures pass through untouched as [`FsError::Io`].

use std::fmt;
use std::path::PathBuf;

/// Unified error type for all filesystem operations.
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    /// The path does not exist or is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A directory was required but nothing exists at the path.
    #[error("directory does not exist: {0}")]
    NonExistentDirectory(PathBuf),

    /// The directory is already present and replacing it was not requested.
    #[error("directory already exists: {0}")]
    DirectoryAlreadyExists(PathBuf),

    /// A file was required but nothing exists at the path.
    #[error("file does not exist: {0}")]
    NonExistentFile(PathBuf),

    /// The path does not exist or is not a regular file.
    #[error("not a file: {0}")]
    NotAFile(PathBuf),

    /// Content to write, or content read back, is empty or malformed.
    #[error("file content is empty or invalid: {path}: {reason}")]
    FileContentIsEmptyOrInvalid { path: PathBuf, reason: String },

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// An I/O error raised by the underlying primitive.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FsError {
    /// Returns the taxonomy tag for this error, or `None` for configuration
    /// and raw I/O failures.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::NotADirectory(_) => Some(ErrorKind::NotADirectory),
            Self::NonExistentDirectory(_) => Some(ErrorKind::NonExistentDirectory),
            Self::DirectoryAlreadyExists(_) => Some(ErrorKind::DirectoryAlreadyExists),
            Self::NonExistentFile(_) => Some(ErrorKind::NonExistentFile),
            Self::NotAFile(_) => Some(ErrorKind::NotAFile),
            Self::FileContentIsEmptyOrInvalid { .. } => {
                Some(ErrorKind::FileContentIsEmptyOrInvalid)
            }
            Self::ConfigParse(_) | Self::Io(_) => None,
        }
    }

    pub(crate) fn invalid_content(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FileContentIsEmptyOrInvalid {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// The closed set of precondition failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotADirectory,
    NonExistentDirectory,
    DirectoryAlreadyExists,
    NonExistentFile,
    NotAFile,
    FileContentIsEmptyOrInvalid,
}

impl ErrorKind {
    /// Stable upper-snake-case tag, suitable for logs and wire formats.
    pub fn code(self) -> &'static str {
        match self {
            Self::NotADirectory => "NOT_A_DIRECTORY",
            Self::NonExistentDirectory => "NON_EXISTENT_DIRECTORY",
            Self::DirectoryAlreadyExists => "DIRECTORY_ALREADY_EXISTS",
            Self::NonExistentFile => "NON_EXISTENT_FILE",
            Self::NotAFile => "NOT_A_FILE",
            Self::FileContentIsEmptyOrInvalid => "FILE_CONTENT_IS_EMPTY_OR_INVALID",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Convenience alias used throughout `fslayer-core`.
pub type FsResult<T> = Result<T, FsError>;
