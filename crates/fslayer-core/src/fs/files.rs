//! File operations: text, JSON and binary reads and writes, copies,
//! deletions and symlinks.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{FsError, FsResult};
use crate::fs::entry::{get_path_element, is_file, path_exists};
use crate::fs::ops::{create_directory, symlink_file};

/// Indentation used by [`write_json_file`].
pub const DEFAULT_JSON_INDENT: usize = 2;

/// Writes `data` to `path`, creating the parent directory chain if needed
/// and replacing any existing file.
///
/// # Errors
///
/// - [`FsError::Io`] if the parent directory or the file cannot be written.
pub fn write_file(path: &Path, data: impl AsRef<[u8]>) -> FsResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !path_exists(parent) {
            create_directory(parent, false)?;
        }
    }
    let data = data.as_ref();
    std::fs::write(path, data)?;
    tracing::debug!("wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

/// Writes a UTF-8 text file.
///
/// # Errors
///
/// - [`FsError::FileContentIsEmptyOrInvalid`] if `data` is empty.
/// - [`FsError::Io`] if the write fails.
pub fn write_text_file(path: &Path, data: &str) -> FsResult<()> {
    if data.is_empty() {
        return Err(FsError::invalid_content(path, "the provided text is empty"));
    }
    write_file(path, data)
}

/// Serializes `data` as JSON indented by [`DEFAULT_JSON_INDENT`] spaces and
/// writes it to `path`.
///
/// # Errors
///
/// - [`FsError::FileContentIsEmptyOrInvalid`] if `data` cannot be serialized.
///   Nothing is written in that case.
/// - [`FsError::Io`] if the write fails.
///
/// # Examples
///
/// ```no_run
/// use fslayer_core::{read_json_file, write_json_file};
/// use std::path::Path;
///
/// let path = Path::new("out/settings.json");
/// write_json_file(path, &serde_json::json!({ "retries": 3 })).unwrap();
/// let value: serde_json::Value = read_json_file(path).unwrap();
/// assert_eq!(value["retries"], 3);
/// ```
pub fn write_json_file<T: Serialize + ?Sized>(path: &Path, data: &T) -> FsResult<()> {
    write_json_file_with_indent(path, data, DEFAULT_JSON_INDENT)
}

/// Like [`write_json_file`] with a custom indent. An indent of `0` writes
/// compact JSON on a single line.
pub fn write_json_file_with_indent<T: Serialize + ?Sized>(
    path: &Path,
    data: &T,
    indent: usize,
) -> FsResult<()> {
    let text = to_json_string(data, indent)
        .map_err(|e| FsError::invalid_content(path, format!("could not serialize JSON: {e}")))?;
    write_text_file(path, &text)
}

/// Writes already-serialized JSON text to `path` unchanged.
///
/// # Errors
///
/// - [`FsError::FileContentIsEmptyOrInvalid`] if `json` is empty.
/// - [`FsError::Io`] if the write fails.
pub fn write_json_str(path: &Path, json: &str) -> FsResult<()> {
    write_text_file(path, json)
}

fn to_json_string<T: Serialize + ?Sized>(data: &T, indent: usize) -> serde_json::Result<String> {
    if indent == 0 {
        return serde_json::to_string(data);
    }
    let indent = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    data.serialize(&mut ser)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes raw bytes to `path`.
///
/// Any byte slice is a valid buffer, including an empty one, so this only
/// fails on I/O.
pub fn write_buffer_file(path: &Path, data: &[u8]) -> FsResult<()> {
    write_file(path, data)
}

/// Reads the raw contents of a file.
///
/// # Errors
///
/// - [`FsError::NotAFile`] if `path` does not exist or is not a regular file.
/// - [`FsError::Io`] if the read fails.
pub fn read_file(path: &Path) -> FsResult<Vec<u8>> {
    if !is_file(path) {
        return Err(FsError::NotAFile(path.to_path_buf()));
    }
    Ok(std::fs::read(path)?)
}

/// Reads a UTF-8 text file.
///
/// # Errors
///
/// - [`FsError::NotAFile`] if `path` does not exist or is not a regular file.
/// - [`FsError::FileContentIsEmptyOrInvalid`] if the file is empty or not
///   valid UTF-8.
pub fn read_text_file(path: &Path) -> FsResult<String> {
    let bytes = read_file(path)?;
    if bytes.is_empty() {
        return Err(FsError::invalid_content(path, "the file is empty"));
    }
    String::from_utf8(bytes)
        .map_err(|e| FsError::invalid_content(path, format!("the file is not valid UTF-8: {e}")))
}

/// Reads and parses a JSON file.
///
/// # Errors
///
/// - [`FsError::NotAFile`] if `path` does not exist or is not a regular file.
/// - [`FsError::FileContentIsEmptyOrInvalid`] if the file is empty, not UTF-8
///   or cannot be parsed into `T`.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> FsResult<T> {
    let content = read_text_file(path)?;
    serde_json::from_str(&content)
        .map_err(|e| FsError::invalid_content(path, format!("could not parse JSON: {e}")))
}

/// Reads a binary file.
///
/// # Errors
///
/// - [`FsError::NotAFile`] if `path` does not exist or is not a regular file.
/// - [`FsError::FileContentIsEmptyOrInvalid`] if the file is empty.
pub fn read_buffer_file(path: &Path) -> FsResult<Vec<u8>> {
    let bytes = read_file(path)?;
    if bytes.is_empty() {
        return Err(FsError::invalid_content(path, "the file is empty"));
    }
    Ok(bytes)
}

/// Copies the file at `src` to `dest`, overwriting `dest`.
///
/// # Errors
///
/// - [`FsError::NotAFile`] if `src` does not exist or is not a regular file.
/// - [`FsError::Io`] if the copy fails.
pub fn copy_file(src: &Path, dest: &Path) -> FsResult<()> {
    if !is_file(src) {
        return Err(FsError::NotAFile(src.to_path_buf()));
    }
    std::fs::copy(src, dest)?;
    tracing::debug!("copied file {} -> {}", src.display(), dest.display());
    Ok(())
}

/// Deletes the regular file at `path`.
///
/// Directories and symlinks are refused.
///
/// # Errors
///
/// - [`FsError::NotAFile`] if `path` does not exist or is not a regular file.
/// - [`FsError::Io`] if removal fails.
pub fn delete_file(path: &Path) -> FsResult<()> {
    if !is_file(path) {
        return Err(FsError::NotAFile(path.to_path_buf()));
    }
    std::fs::remove_file(path)?;
    tracing::debug!("deleted file: {}", path.display());
    Ok(())
}

/// Creates a file symlink at `path` pointing to `target`.
///
/// # Errors
///
/// - [`FsError::NonExistentFile`] if nothing exists at `target`.
/// - [`FsError::NotAFile`] if `target` is not a regular file.
/// - [`FsError::Io`] if the link cannot be created, including on platforms
///   without symlink support.
pub fn create_file_symlink(target: &Path, path: &Path) -> FsResult<()> {
    let el =
        get_path_element(target).ok_or_else(|| FsError::NonExistentFile(target.to_path_buf()))?;
    if !el.is_file() {
        return Err(FsError::NotAFile(target.to_path_buf()));
    }

    symlink_file(target, path)?;

    tracing::debug!("linked file {} -> {}", path.display(), target.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::fs::entry::is_directory;
    use serde::Deserialize;
    use serde_json::json;
    use std::collections::BTreeMap;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn text_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("hello.txt");

        for text in ["Hello World!!", "multi\nline\n", "ünïcødé ✓"] {
            write_text_file(&path, text).unwrap();
            assert_eq!(read_text_file(&path).unwrap(), text);
        }
    }

    #[test]
    fn write_creates_parent_chain() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a/b/c/file.txt");

        write_text_file(&path, "nested").unwrap();

        assert!(is_directory(&tmp.path().join("a/b/c")));
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn write_overwrites_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("file.txt");

        write_text_file(&path, "a much longer first version").unwrap();
        write_text_file(&path, "short").unwrap();

        assert_eq!(read_text_file(&path).unwrap(), "short");
    }

    #[test]
    fn write_empty_text_fails_without_writing() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("empty.txt");

        let err = write_text_file(&path, "").unwrap_err();

        assert_eq!(err.kind(), Some(ErrorKind::FileContentIsEmptyOrInvalid));
        assert!(!path_exists(&path));
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Settings {
        name: String,
        retries: u32,
        tags: Vec<String>,
    }

    #[test]
    fn json_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.json");
        let settings = Settings {
            name: "primary".to_string(),
            retries: 3,
            tags: vec!["a".to_string(), "b".to_string()],
        };

        write_json_file(&path, &settings).unwrap();
        let back: Settings = read_json_file(&path).unwrap();

        assert_eq!(back, settings);
    }

    #[test]
    fn json_uses_two_space_indent_by_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("value.json");

        write_json_file(&path, &json!({ "a": 1 })).unwrap();

        assert_eq!(read_text_file(&path).unwrap(), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn json_custom_and_zero_indent() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("value.json");

        write_json_file_with_indent(&path, &json!({ "a": [1] }), 4).unwrap();
        assert_eq!(
            read_text_file(&path).unwrap(),
            "{\n    \"a\": [\n        1\n    ]\n}"
        );

        write_json_file_with_indent(&path, &json!({ "a": [1] }), 0).unwrap();
        assert_eq!(read_text_file(&path).unwrap(), "{\"a\":[1]}");
    }

    #[test]
    fn json_str_is_written_verbatim() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("raw.json");

        write_json_str(&path, "{\"x\":true}").unwrap();

        let value: serde_json::Value = read_json_file(&path).unwrap();
        assert_eq!(value, json!({ "x": true }));
        assert!(write_json_str(&path, "").is_err());
    }

    #[test]
    fn unserializable_json_fails_without_writing() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.json");
        let mut map = BTreeMap::new();
        map.insert(vec![1u8], "non-string keys are rejected");

        let err = write_json_file(&path, &map).unwrap_err();

        assert_eq!(err.kind(), Some(ErrorKind::FileContentIsEmptyOrInvalid));
        assert!(!path_exists(&path));
    }

    #[test]
    fn read_json_rejects_malformed_content() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read_json_file::<serde_json::Value>(&path).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::FileContentIsEmptyOrInvalid));
    }

    #[test]
    fn read_text_rejects_empty_and_invalid_utf8() {
        let tmp = TempDir::new().unwrap();
        let empty = tmp.path().join("empty.txt");
        fs::write(&empty, "").unwrap();
        let binary = tmp.path().join("binary.txt");
        fs::write(&binary, [0xff, 0xfe, 0x00]).unwrap();

        assert_eq!(
            read_text_file(&empty).unwrap_err().kind(),
            Some(ErrorKind::FileContentIsEmptyOrInvalid)
        );
        assert_eq!(
            read_text_file(&binary).unwrap_err().kind(),
            Some(ErrorKind::FileContentIsEmptyOrInvalid)
        );
    }

    #[test]
    fn read_requires_a_file() {
        let tmp = TempDir::new().unwrap();

        let err = read_text_file(&tmp.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, FsError::NotAFile(_)));

        let err = read_file(tmp.path()).unwrap_err();
        assert!(matches!(err, FsError::NotAFile(_)));
    }

    #[test]
    fn buffer_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("blob.bin");
        let data = [0u8, 1, 2, 255, 128];

        write_buffer_file(&path, &data).unwrap();

        assert_eq!(read_buffer_file(&path).unwrap(), data);
        assert_eq!(read_file(&path).unwrap(), data);
    }

    #[test]
    fn empty_buffer_writes_but_does_not_read() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("empty.bin");

        write_buffer_file(&path, &[]).unwrap();

        assert!(is_file(&path));
        assert_eq!(read_file(&path).unwrap(), Vec::<u8>::new());
        assert_eq!(
            read_buffer_file(&path).unwrap_err().kind(),
            Some(ErrorKind::FileContentIsEmptyOrInvalid)
        );
    }

    #[test]
    fn copy_file_overwrites_destination() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src.txt");
        let dest = tmp.path().join("dest.txt");
        fs::write(&src, "new").unwrap();
        fs::write(&dest, "old content").unwrap();

        copy_file(&src, &dest).unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
        assert!(is_file(&src));
    }

    #[test]
    fn copy_file_requires_a_file() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("dest.txt");

        let err = copy_file(tmp.path(), &dest).unwrap_err();
        assert!(matches!(err, FsError::NotAFile(_)));
        assert!(!path_exists(&dest));
    }

    #[test]
    fn delete_file_removes_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("doomed.txt");
        fs::write(&path, "x").unwrap();

        delete_file(&path).unwrap();
        assert!(!path_exists(&path));
    }

    #[test]
    fn delete_file_rejects_directory_and_absent() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("dir");
        fs::create_dir(&dir).unwrap();

        let err = delete_file(&dir).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::NotAFile));
        assert!(is_directory(&dir));

        let err = delete_file(&tmp.path().join("missing")).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::NotAFile));
    }

    #[cfg(unix)]
    #[test]
    fn delete_file_rejects_symlink() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("target.txt");
        fs::write(&target, "x").unwrap();
        let link = tmp.path().join("link.txt");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = delete_file(&link).unwrap_err();

        assert_eq!(err.kind(), Some(ErrorKind::NotAFile));
        assert!(get_path_element(&link).is_some());
    }

    #[cfg(unix)]
    #[test]
    fn create_file_symlink_links_file() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("target.txt");
        fs::write(&target, "linked").unwrap();
        let link = tmp.path().join("link.txt");

        create_file_symlink(&target, &link).unwrap();

        assert!(get_path_element(&link).unwrap().is_symbolic_link());
        assert_eq!(fs::read_to_string(&link).unwrap(), "linked");
        // reads go through is_file, which does not follow links
        assert!(matches!(read_text_file(&link).unwrap_err(), FsError::NotAFile(_)));
    }

    #[test]
    fn create_file_symlink_rejects_bad_targets() {
        let tmp = TempDir::new().unwrap();
        let link = tmp.path().join("link");

        let err = create_file_symlink(&tmp.path().join("missing"), &link).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::NonExistentFile));

        let err = create_file_symlink(tmp.path(), &link).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::NotAFile));
        assert!(get_path_element(&link).is_none());
    }
}
