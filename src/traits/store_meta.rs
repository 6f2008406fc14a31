//! Metadata operations against an under-storage backend.

use crate::{FileLocationOptions, Mode, SpaceKind, StoreError};

/// Metadata reads and attribute mutations for a path-addressable namespace.
///
/// Paths are backend-addressed strings; depending on the backend they may be
/// plain absolute paths or full URIs. Every method here interacts with the
/// underlying storage and can therefore fail with [`StoreError`].
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods use `&self` to allow
/// concurrent access; backends use interior mutability for their own state.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn StoreMeta`.
pub trait StoreMeta: Send + Sync {
    /// Check whether a path exists.
    fn exists(&self, path: &str) -> Result<bool, StoreError>;

    /// Check whether a path refers to a regular file.
    fn is_file(&self, path: &str) -> Result<bool, StoreError>;

    /// Check whether a path refers to a directory.
    fn is_directory(&self, path: &str) -> Result<bool, StoreError>;

    /// Size of a file in bytes.
    fn file_size(&self, path: &str) -> Result<u64, StoreError>;

    /// Block size of a file in bytes.
    fn block_size(&self, path: &str) -> Result<u64, StoreError>;

    /// Last modification time in milliseconds since the Unix epoch.
    fn modification_time_ms(&self, path: &str) -> Result<u64, StoreError>;

    /// Owner of a path.
    fn owner(&self, path: &str) -> Result<String, StoreError>;

    /// Group of a path.
    fn group(&self, path: &str) -> Result<String, StoreError>;

    /// Permission mode of a path.
    fn mode(&self, path: &str) -> Result<Mode, StoreError>;

    /// Physical locations holding the file's data (e.g. hostnames).
    ///
    /// The default queries from the start of the file.
    fn file_locations(&self, path: &str) -> Result<Vec<String>, StoreError> {
        self.file_locations_with(path, FileLocationOptions::default())
    }

    /// Physical locations holding the file's data at a given offset.
    fn file_locations_with(
        &self,
        path: &str,
        options: FileLocationOptions,
    ) -> Result<Vec<String>, StoreError>;

    /// Space of the given kind, in bytes, for the volume containing `path`.
    fn space(&self, path: &str, kind: SpaceKind) -> Result<u64, StoreError>;

    /// Set the owner and group of a path.
    fn set_owner(&self, path: &str, owner: &str, group: &str) -> Result<(), StoreError>;

    /// Set the permission mode of a path.
    fn set_mode(&self, path: &str, mode: Mode) -> Result<(), StoreError>;
}
