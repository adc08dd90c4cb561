use serde::{Deserialize, Serialize};

use crate::config::ROOT_PATH;

// =============================================================================
// File Data
// =============================================================================

/// Payload of a filesystem record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileData {
    /// Directory marker. Directories carry no content of their own.
    Directory,
    /// Literal text content of a regular file.
    Text(String),
}

// =============================================================================
// File Entry
// =============================================================================

/// A single record of the virtual filesystem.
///
/// Entries are flat: the tree is implied by `parent_path`, which holds the
/// full path of the containing directory (always ending in `/`). The root is
/// the only entry whose parent is the empty string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    /// Full path of the containing directory, or `""` for the root.
    pub parent_path: String,
    /// Entry name without any separator (the root is named `/`).
    pub name: String,
    /// Directory marker or file content.
    pub data: FileData,
}

impl FileEntry {
    /// The root directory record.
    pub fn root() -> Self {
        Self::directory("", ROOT_PATH)
    }

    /// Create a directory record.
    pub fn directory(parent_path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            parent_path: parent_path.into(),
            name: name.into(),
            data: FileData::Directory,
        }
    }

    /// Create a regular file record.
    pub fn file(
        parent_path: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            parent_path: parent_path.into(),
            name: name.into(),
            data: FileData::Text(content.into()),
        }
    }

    /// Check if this entry is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self.data, FileData::Directory)
    }

    /// Check if this entry is the filesystem root.
    pub fn is_root(&self) -> bool {
        self.parent_path.is_empty()
    }

    /// File content, or `None` for directories.
    pub fn content(&self) -> Option<&str> {
        match &self.data {
            FileData::Text(text) => Some(text),
            FileData::Directory => None,
        }
    }

    /// Name as shown by `ls`: directories get a trailing `/`.
    pub fn display_name(&self) -> String {
        if self.is_directory() {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }
}

// =============================================================================
// Seed Types
// =============================================================================

/// Filesystem record as written in a configuration file.
///
/// A seed without `content` is a directory; `content = ""` is an empty file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileSeed {
    /// Full path of the containing directory (`""` only for the root).
    pub parent: String,
    /// Entry name.
    pub name: String,
    /// File content (absent for directories).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl FileSeed {
    /// Directory seed.
    pub fn dir(parent: &str, name: &str) -> Self {
        Self {
            parent: parent.to_string(),
            name: name.to_string(),
            content: None,
        }
    }

    /// Regular file seed.
    pub fn file(parent: &str, name: &str, content: &str) -> Self {
        Self {
            parent: parent.to_string(),
            name: name.to_string(),
            content: Some(content.to_string()),
        }
    }
}

impl From<FileSeed> for FileEntry {
    fn from(seed: FileSeed) -> Self {
        Self {
            parent_path: seed.parent,
            name: seed.name,
            data: match seed.content {
                Some(text) => FileData::Text(text),
                None => FileData::Directory,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_entry() {
        let root = FileEntry::root();
        assert!(root.is_root());
        assert!(root.is_directory());
        assert_eq!(root.name, "/");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(FileEntry::directory("/", "usr").display_name(), "usr/");
        assert_eq!(FileEntry::file("/usr/", "a.txt", "").display_name(), "a.txt");
    }

    #[test]
    fn test_content() {
        assert_eq!(FileEntry::file("/", "f", "abc").content(), Some("abc"));
        assert_eq!(FileEntry::directory("/", "d").content(), None);
    }

    #[test]
    fn test_seed_conversion() {
        let dir: FileEntry = FileSeed::dir("/", "home").into();
        assert!(dir.is_directory());

        let empty: FileEntry = FileSeed::file("/", "notes", "").into();
        assert_eq!(empty.data, FileData::Text(String::new()));
    }
}
