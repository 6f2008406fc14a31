//! Connection lifecycle operations.

use crate::StoreError;

/// Connection and configuration lifecycle of a backend.
///
/// These operations are invoked by the hosting file-system layer when a mount
/// is established from a master or worker process, when mount properties
/// change, and when the mount is torn down.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods use `&self` to allow
/// concurrent access.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn StoreLifecycle`.
pub trait StoreLifecycle: Send + Sync {
    /// Establish the backend connection on behalf of a master process.
    fn connect_from_master(&self, hostname: &str) -> Result<(), StoreError>;

    /// Establish the backend connection on behalf of a worker process.
    fn connect_from_worker(&self, hostname: &str) -> Result<(), StoreError>;

    /// Push the currently held properties into the backend's live
    /// configuration.
    fn configure_properties(&self) -> Result<(), StoreError>;

    /// Release resources held by the backend connection.
    fn close(&self) -> Result<(), StoreError>;
}
