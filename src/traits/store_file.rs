//! File mutation and streaming I/O operations.

use std::io::{Read, Write};

use crate::{CreateOptions, OpenOptions, StoreError};

/// File creation, opening, deletion, and renaming.
///
/// Streams returned by [`create`](StoreFile::create) and
/// [`open`](StoreFile::open) are boxed trait objects so backends are free to
/// hand out whatever reader/writer suits their transport.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods use `&self` to allow
/// concurrent access.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn StoreFile`.
pub trait StoreFile: Send + Sync {
    /// Create a file with default options, returning a writer for its
    /// contents.
    fn create(&self, path: &str) -> Result<Box<dyn Write + Send>, StoreError> {
        self.create_with(path, &CreateOptions::default())
    }

    /// Create a file with the given options, returning a writer for its
    /// contents.
    fn create_with(
        &self,
        path: &str,
        options: &CreateOptions,
    ) -> Result<Box<dyn Write + Send>, StoreError>;

    /// Open a file for reading from the beginning.
    fn open(&self, path: &str) -> Result<Box<dyn Read + Send>, StoreError> {
        self.open_with(path, OpenOptions::default())
    }

    /// Open a file for reading with the given options (e.g. a byte range).
    fn open_with(
        &self,
        path: &str,
        options: OpenOptions,
    ) -> Result<Box<dyn Read + Send>, StoreError>;

    /// Delete a file. Returns `true` if a file was deleted.
    fn delete_file(&self, path: &str) -> Result<bool, StoreError>;

    /// Rename a file. Returns `true` on success.
    fn rename_file(&self, src: &str, dst: &str) -> Result<bool, StoreError>;
}
