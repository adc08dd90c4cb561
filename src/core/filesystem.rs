use tracing::warn;

use crate::core::path::{as_directory, canonical_path, full_path};
use crate::models::{FileEntry, FileSeed};

/// In-memory filesystem.
///
/// Records live in a flat, insertion-ordered arena; the tree is implied by
/// each entry's `parent_path`. Lookups are linear scans, which is fine for
/// the handful of records a simulated shell carries.
///
/// # Path Convention
///
/// - Root: `"/"` (stored with an empty parent)
/// - Directory: `"/usr/"`
/// - File: `"/usr/notes.txt"`
///
/// Callers (the built-in commands) are responsible for uniqueness and parent
/// validity. Removing a directory does not remove its children.
#[derive(Clone, Debug)]
pub struct VirtualFs {
    entries: Vec<FileEntry>,
}

impl VirtualFs {
    /// Create a filesystem holding only the root directory.
    pub fn empty() -> Self {
        Self {
            entries: vec![FileEntry::root()],
        }
    }

    /// Create a filesystem from records, in order.
    ///
    /// A root entry is inserted first if the records lack one.
    pub fn from_entries(entries: impl IntoIterator<Item = FileEntry>) -> Self {
        let mut entries: Vec<FileEntry> = entries.into_iter().collect();
        if !entries.iter().any(FileEntry::is_root) {
            entries.insert(0, FileEntry::root());
        }
        Self { entries }
    }

    /// Create a filesystem from configuration seeds.
    pub fn from_seeds(seeds: &[FileSeed]) -> Self {
        Self::from_entries(seeds.iter().cloned().map(FileEntry::from))
    }

    /// Find the index of the entry at `path`.
    ///
    /// The directory form of `path` is compared against each entry's full
    /// path, so `/usr` and `/usr/` both find the `usr` directory. With
    /// `must_be_directory` set, file entries never match.
    pub fn lookup(&self, path: &str, must_be_directory: bool) -> Option<usize> {
        if path.is_empty() {
            return None;
        }

        let wanted = as_directory(path);
        self.entries.iter().position(|entry| {
            (!must_be_directory || entry.is_directory()) && full_path(entry) == wanted
        })
    }

    /// Entries whose parent is exactly `directory_path`, in insertion order.
    pub fn children_of(&self, directory_path: &str) -> Vec<&FileEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.parent_path == directory_path)
            .collect()
    }

    /// Append a record.
    pub fn add(&mut self, entry: FileEntry) {
        if !entry.parent_path.is_empty() && self.lookup(&entry.parent_path, true).is_none() {
            warn!(
                path = %canonical_path(&entry),
                "adding entry under a missing parent directory"
            );
        }
        self.entries.push(entry);
    }

    /// Remove one record. Children of a removed directory are left in place.
    pub fn remove(&mut self, index: usize) -> FileEntry {
        let removed = self.entries.remove(index);
        if removed.is_directory() {
            let orphans = self.children_of(&full_path(&removed)).len();
            if orphans > 0 {
                warn!(
                    path = %full_path(&removed),
                    orphans,
                    "removed directory still has children"
                );
            }
        }
        removed
    }

    /// Get an entry by index.
    pub fn get(&self, index: usize) -> Option<&FileEntry> {
        self.entries.get(index)
    }

    /// Get a mutable entry by index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut FileEntry> {
        self.entries.get_mut(index)
    }

    /// Check if `path` names a directory.
    pub fn is_directory(&self, path: &str) -> bool {
        self.lookup(path, true).is_some()
    }

    /// Number of records, root included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the root is never removed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter()
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::empty()
    }
}
