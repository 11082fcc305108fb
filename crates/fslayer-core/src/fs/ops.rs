//! Directory operations.

use std::path::{Path, PathBuf};

use crate::error::{FsError, FsResult};
use crate::fs::entry::{get_path_element, is_directory};

/// Creates a directory at `path`, including missing parent directories.
///
/// When a directory already exists at `path` it is either removed first
/// (`delete_if_exists == true`) or reported as an error.
///
/// # Errors
///
/// - [`FsError::DirectoryAlreadyExists`] if `path` is a directory and
///   `delete_if_exists` is `false`.
/// - [`FsError::Io`] if creation or removal fails.
///
/// # Examples
///
/// ```no_run
/// use fslayer_core::create_directory;
/// use std::path::Path;
///
/// create_directory(Path::new("out/reports"), true).unwrap();
/// ```
pub fn create_directory(path: &Path, delete_if_exists: bool) -> FsResult<()> {
    if is_directory(path) {
        if !delete_if_exists {
            return Err(FsError::DirectoryAlreadyExists(path.to_path_buf()));
        }
        delete_directory(path)?;
    }
    std::fs::create_dir_all(path)?;
    tracing::debug!("created directory: {}", path.display());
    Ok(())
}

/// Removes `path` and everything beneath it.
///
/// Succeeds when nothing exists at `path`. Files and symlinks are unlinked;
/// symlinks are never followed.
///
/// # Errors
///
/// - [`FsError::Io`] for any I/O failure other than the path being absent.
pub fn delete_directory(path: &Path) -> FsResult<()> {
    let meta = match std::fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(FsError::Io(e)),
    };

    let result = if meta.is_dir() {
        std::fs::remove_dir_all(path)
    } else {
        std::fs::remove_file(path)
    };
    match result {
        Ok(()) => {
            tracing::debug!("deleted directory: {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(FsError::Io(e)),
    }
}

/// Replaces `dest` with a recursive copy of `src`.
///
/// Anything at `dest` is deleted first, so the result contains exactly the
/// tree under `src`. Symlinks are copied as symlinks.
///
/// # Errors
///
/// - [`FsError::NotADirectory`] if `src` is not a directory.
/// - [`FsError::Io`] for any I/O failure during the copy.
pub fn copy_directory(src: &Path, dest: &Path) -> FsResult<()> {
    if !is_directory(src) {
        return Err(FsError::NotADirectory(src.to_path_buf()));
    }
    delete_directory(dest)?;
    copy_dir_recursive(src, dest, 0)?;
    tracing::debug!("copied directory {} -> {}", src.display(), dest.display());
    Ok(())
}

/// Maximum recursion depth for copies and recursive listings.
const MAX_RECURSION_DEPTH: usize = 64;

fn depth_exceeded(operation: &str) -> FsError {
    FsError::Io(std::io::Error::other(format!(
        "maximum recursion depth ({MAX_RECURSION_DEPTH}) exceeded during {operation}"
    )))
}

fn copy_dir_recursive(src: &Path, dest: &Path, depth: usize) -> FsResult<()> {
    if depth > MAX_RECURSION_DEPTH {
        return Err(depth_exceeded("copy"));
    }

    std::fs::create_dir_all(dest)?;

    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let entry_path = entry.path();
        let target = dest.join(entry.file_name());

        // file_type() does not follow symlinks
        let ft = entry.file_type()?;

        if ft.is_symlink() {
            let link_target = std::fs::read_link(&entry_path)?;
            if std::fs::metadata(&entry_path).is_ok_and(|m| m.is_dir()) {
                symlink_dir(&link_target, &target)?;
            } else {
                symlink_file(&link_target, &target)?;
            }
        } else if ft.is_dir() {
            copy_dir_recursive(&entry_path, &target, depth + 1)?;
        } else {
            std::fs::copy(&entry_path, &target)?;
        }
    }

    Ok(())
}

#[cfg(unix)]
pub(crate) fn symlink_dir(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
pub(crate) fn symlink_dir(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}

#[cfg(not(any(unix, windows)))]
pub(crate) fn symlink_dir(_target: &Path, _link: &Path) -> std::io::Result<()> {
    Err(std::io::Error::from(std::io::ErrorKind::Unsupported))
}

#[cfg(unix)]
pub(crate) fn symlink_file(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
pub(crate) fn symlink_file(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

#[cfg(not(any(unix, windows)))]
pub(crate) fn symlink_file(_target: &Path, _link: &Path) -> std::io::Result<()> {
    Err(std::io::Error::from(std::io::ErrorKind::Unsupported))
}

/// Creates a directory symlink at `path` pointing to `target`.
///
/// # Errors
///
/// - [`FsError::NonExistentDirectory`] if nothing exists at `target`.
/// - [`FsError::NotADirectory`] if `target` is not a directory.
/// - [`FsError::Io`] if the link cannot be created, including on platforms
///   without symlink support.
pub fn create_directory_symlink(target: &Path, path: &Path) -> FsResult<()> {
    let el = get_path_element(target)
        .ok_or_else(|| FsError::NonExistentDirectory(target.to_path_buf()))?;
    if !el.is_directory() {
        return Err(FsError::NotADirectory(target.to_path_buf()));
    }

    symlink_dir(target, path)?;

    tracing::debug!("linked directory {} -> {}", path.display(), target.display());
    Ok(())
}

/// Lists the contents of a directory as full paths (`path` joined with each
/// child name).
///
/// With `recursive`, real subdirectories are descended into, at most 64
/// levels deep; symlinked directories are listed but not followed. The
/// returned order is whatever the OS yields and must not be relied upon.
///
/// # Errors
///
/// - [`FsError::NotADirectory`] if `path` is not a directory.
/// - [`FsError::Io`] if a directory cannot be read or the tree is too deep.
pub fn read_directory(path: &Path, recursive: bool) -> FsResult<Vec<PathBuf>> {
    if !is_directory(path) {
        return Err(FsError::NotADirectory(path.to_path_buf()));
    }

    let mut paths = Vec::new();
    collect_paths(path, recursive, 0, &mut paths)?;
    Ok(paths)
}

fn collect_paths(
    dir: &Path,
    recursive: bool,
    depth: usize,
    out: &mut Vec<PathBuf>,
) -> FsResult<()> {
    if depth > MAX_RECURSION_DEPTH {
        return Err(depth_exceeded("directory listing"));
    }

    for dir_entry in std::fs::read_dir(dir)? {
        let dir_entry = dir_entry?;
        let child = dir.join(dir_entry.file_name());
        let descend = recursive
            && dir_entry
                .file_type()
                .map(|ft| ft.is_dir())
                .unwrap_or(false);
        if descend {
            out.push(child.clone());
            collect_paths(&child, recursive, depth + 1, out)?;
        } else {
            out.push(child);
        }
    }
    Ok(())
}
