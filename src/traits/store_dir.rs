//! Directory operations against an under-storage backend.

use crate::{DeleteOptions, ListOptions, MkdirsOptions, StoreError, UnderStatus};

/// Directory creation, deletion, renaming, and listing.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods use `&self` to allow
/// concurrent access.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn StoreDir`.
pub trait StoreDir: Send + Sync {
    /// Create a directory with default options. Returns `true` if the
    /// directory was created.
    fn mkdirs(&self, path: &str) -> Result<bool, StoreError> {
        self.mkdirs_with(path, &MkdirsOptions::default())
    }

    /// Create a directory with the given options (parent creation, ownership
    /// and mode propagation). Returns `true` if the directory was created.
    fn mkdirs_with(&self, path: &str, options: &MkdirsOptions) -> Result<bool, StoreError>;

    /// Delete an empty directory. Returns `true` if a directory was deleted.
    fn delete_directory(&self, path: &str) -> Result<bool, StoreError> {
        self.delete_directory_with(path, DeleteOptions::default())
    }

    /// Delete a directory, optionally recursively. Returns `true` if a
    /// directory was deleted.
    fn delete_directory_with(
        &self,
        path: &str,
        options: DeleteOptions,
    ) -> Result<bool, StoreError>;

    /// Rename a directory. Returns `true` on success.
    fn rename_directory(&self, src: &str, dst: &str) -> Result<bool, StoreError>;

    /// List the entries of a directory.
    fn list_status(&self, path: &str) -> Result<Vec<UnderStatus>, StoreError> {
        self.list_status_with(path, ListOptions::default())
    }

    /// List the entries of a directory with the given options.
    fn list_status_with(
        &self,
        path: &str,
        options: ListOptions,
    ) -> Result<Vec<UnderStatus>, StoreError>;
}
