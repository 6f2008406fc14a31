//! Non-fallible configuration and property accessors.

use std::collections::HashMap;

use crate::{StoreConf, StoreUri};

/// Pure accessors over a backend's configuration and identity.
///
/// Nothing here interacts with the underlying storage: these methods read or
/// replace in-memory state and must never fail. A backend that violates this
/// assumption panics outside the capability contract.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Setters take `&self` like every
/// other method; backends use interior mutability.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn StoreConfAccess`.
pub trait StoreConfAccess: Send + Sync {
    /// The backend's configuration object.
    fn conf(&self) -> StoreConf;

    /// Replace the backend's configuration object.
    fn set_conf(&self, conf: StoreConf);

    /// The mount properties as a string map.
    fn properties(&self) -> HashMap<String, String>;

    /// Replace the mount properties.
    ///
    /// Properties take effect in the backend only after
    /// [`configure_properties`](crate::StoreLifecycle::configure_properties).
    fn set_properties(&self, properties: HashMap<String, String>);

    /// Identifier of the backend type (e.g. `"local"`, `"s3"`).
    fn store_type(&self) -> &str;

    /// Whether the backend supports flushing buffered writes.
    fn supports_flush(&self) -> bool;

    /// Resolve a logical path against a backend base URI.
    ///
    /// Pure string manipulation; performs no I/O.
    fn resolve_uri(&self, base: &StoreUri, path: &str) -> StoreUri {
        base.join(path)
    }
}
