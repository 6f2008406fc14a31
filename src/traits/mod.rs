//! # Store Traits
//!
//! The capability set every under-storage backend implements.
//!
//! ## Component Traits
//!
//! The interface is split by concern, one trait per file. A backend
//! implements all of them; middleware that only touches one concern can
//! bound on just that trait:
//!
//! | Trait | Concern |
//! |-------|---------|
//! | [`StoreMeta`] | metadata reads, owner/group/mode mutations |
//! | [`StoreFile`] | create/open/delete/rename of files, streaming I/O |
//! | [`StoreDir`] | mkdirs/delete/rename/list of directories |
//! | [`StoreLifecycle`] | connect, configure, close |
//! | [`StoreConfAccess`] | non-fallible configuration and identity accessors |
//!
//! ## Composite Trait
//!
//! [`UnderStore`] combines all five and has a blanket implementation:
//! implement the components and the composite comes for free.
//!
//! ```rust
//! use understore::UnderStore;
//!
//! fn mount<S: UnderStore>(store: &S) {
//!     let _ = store.exists("/");
//! }
//! ```
//!
//! ## Fallibility
//!
//! Every method of [`StoreMeta`], [`StoreFile`], [`StoreDir`], and
//! [`StoreLifecycle`] interacts with the underlying storage and returns
//! `Result<_, StoreError>`. [`StoreConfAccess`] methods are pure in-memory
//! accessors and are infallible by contract — the distinction drives what the
//! logging adapter intercepts.
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync` and take `&self`; backends use interior
//! mutability. All traits are object-safe.

mod store_conf;
mod store_dir;
mod store_file;
mod store_lifecycle;
mod store_meta;

pub use store_conf::StoreConfAccess;
pub use store_dir::StoreDir;
pub use store_file::StoreFile;
pub use store_lifecycle::StoreLifecycle;
pub use store_meta::StoreMeta;

/// The full under-storage capability set.
///
/// Combines metadata ([`StoreMeta`]), file ([`StoreFile`]), directory
/// ([`StoreDir`]), lifecycle ([`StoreLifecycle`]), and configuration
/// ([`StoreConfAccess`]) capabilities.
///
/// # Blanket Implementation
///
/// Automatically implemented for any type implementing all five component
/// traits. Never implement `UnderStore` directly.
///
/// # Example
///
/// ```rust
/// use understore::{StoreError, UnderStore};
///
/// fn ensure_dir<S: UnderStore>(store: &S, path: &str) -> Result<(), StoreError> {
///     if !store.is_directory(path)? {
///         store.mkdirs(path)?;
///     }
///     Ok(())
/// }
/// ```
pub trait UnderStore: StoreMeta + StoreFile + StoreDir + StoreLifecycle + StoreConfAccess {}

// Blanket implementation - implementing the components yields the composite
impl<T: StoreMeta + StoreFile + StoreDir + StoreLifecycle + StoreConfAccess> UnderStore for T {}
