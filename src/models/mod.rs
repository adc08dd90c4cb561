//! Data models shared by the shell core.
//!
//! Contains domain types for:
//! - [`FileEntry`], [`FileData`], [`FileSeed`] - Virtual filesystem records
//! - [`OutputMode`], [`Prompt`] - Terminal output routing and display

mod filesystem;
mod terminal;

pub use filesystem::{FileData, FileEntry, FileSeed};
pub use terminal::{OutputMode, Prompt};
