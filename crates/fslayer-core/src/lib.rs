//! fslayer core library: validated filesystem operations and a classifying
//! directory-listing engine.
//!
//! Queries never fail: a missing path resolves to `None` or `false`.
//! Commands check their preconditions first and report violations with a
//! closed set of [`ErrorKind`]s; anything the OS rejects afterwards comes
//! back as [`FsError::Io`].
//!
//! # Modules
//!
//! - [`fs`] — [`PathElement`] resolution, directory and file operations, and
//!   [`get_directory_elements`].
//! - [`nav`] — Sort keys, sort order and extension filtering for listings.
//! - [`config`] — TOML configuration for listing defaults and JSON output.
//! - [`error`] — Unified error type ([`FsError`]) and result alias ([`FsResult`]).

pub mod config;
pub mod error;
pub mod fs;
pub mod nav;

pub use config::settings::Config;
pub use error::{ErrorKind, FsError, FsResult};
pub use fs::entry::{get_path_element, is_directory, is_file, path_exists, PathElement};
pub use fs::files::{
    copy_file, create_file_symlink, delete_file, read_buffer_file, read_file, read_json_file,
    read_text_file, write_buffer_file, write_file, write_json_file, write_json_file_with_indent,
    write_json_str, write_text_file, DEFAULT_JSON_INDENT,
};
pub use fs::listing::{get_directory_elements, DirectoryPathElements};
pub use fs::ops::{
    copy_directory, create_directory, create_directory_symlink, delete_directory, read_directory,
};
pub use nav::filter::{
    compare_elements, sort_elements, DirectoryElementsOptions, SortKey, SortOrder,
};
