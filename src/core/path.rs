//! Path arithmetic for the virtual filesystem.
//!
//! Paths are plain strings. Directories are written with a trailing `/`
//! (`/usr/`), files without (`/usr/notes.txt`). No `.`/`..` normalization
//! happens here: `cd ..` is handled by the command itself via [`parent_of`].

use crate::config::ROOT_PATH;
use crate::models::FileEntry;

/// Make `path` absolute against `working_directory`.
///
/// Empty input stays empty and absolute input is returned unchanged.
/// The working directory always ends in `/`, so relative paths are simply
/// appended.
pub fn evaluate(path: &str, working_directory: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    if path.starts_with('/') {
        return path.to_string();
    }
    format!("{}{}", working_directory, path)
}

/// Get the parent directory of a path.
///
/// The root, the empty string and a lone space are their own parents.
/// Single-level paths (`/usr`, `/usr/`) have the root as parent.
pub fn parent_of(path: &str) -> String {
    if path == ROOT_PATH || path.is_empty() || path == " " {
        return path.to_string();
    }
    if path.matches('/').count() < 2 {
        return ROOT_PATH.to_string();
    }

    let trimmed = path.strip_suffix('/').unwrap_or(path);
    match trimmed.rfind('/') {
        Some(idx) => trimmed[..=idx].to_string(),
        None => ROOT_PATH.to_string(),
    }
}

/// Last path component, without any trailing `/`.
pub fn basename(path: &str) -> String {
    if path == ROOT_PATH {
        return path.to_string();
    }

    let trimmed = path.strip_suffix('/').unwrap_or(path);
    match trimmed.rfind('/') {
        Some(idx) => trimmed[idx + 1..].to_string(),
        None => trimmed.to_string(),
    }
}

/// Lookup key of an entry: `parent + name + "/"`, or just the name for the
/// root.
///
/// The trailing slash is added for every non-root entry, files included, so
/// this is only a canonical path for directories. Use [`canonical_path`] when
/// the entry's real path is wanted.
pub fn full_path(entry: &FileEntry) -> String {
    if entry.parent_path.is_empty() {
        format!("{}{}", entry.parent_path, entry.name)
    } else {
        format!("{}{}/", entry.parent_path, entry.name)
    }
}

/// Canonical path: directory form for directories, bare for files.
pub fn canonical_path(entry: &FileEntry) -> String {
    if entry.is_directory() {
        full_path(entry)
    } else {
        format!("{}{}", entry.parent_path, entry.name)
    }
}

/// Directory form of a query path (ensures a trailing `/`).
pub fn as_directory(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{}/", path)
    }
}
