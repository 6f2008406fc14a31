//! # understore
//!
//! Traits and types for **pluggable under-storage backends** of a
//! distributed file-system layer, plus an instrumented forwarding adapter
//! that logs every backend interaction.
//!
//! An *under store* is the concrete storage a distributed file system mounts
//! underneath itself — a local disk, an object store, another distributed
//! file system. This crate defines the capability set such a backend
//! implements and ships [`LoggedStore`], a transparent wrapper emitting
//! debug-level enter/exit records for every operation that touches the
//! backend.
//!
//! ---
//!
//! ## Quick Start
//!
//! Wrap any backend and use it exactly as before; only log output changes:
//!
//! ```rust,ignore
//! use understore::{LoggedStore, StoreError, UnderStore};
//!
//! fn mount<S: UnderStore>(backend: S) -> Result<(), StoreError> {
//!     let store = LoggedStore::new(backend);
//!     store.connect_from_master("master-1")?; // Enter/Exit records emitted
//!     if !store.is_directory("/data")? {
//!         store.mkdirs("/data")?;
//!     }
//!     let _props = store.properties(); // pure accessor, nothing logged
//!     Ok(())
//! }
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`UnderStore`] | Full capability set a backend implements |
//! | [`LoggedStore`] | Forwarding adapter with enter/exit logging |
//! | [`LoggingLayer`] | [`Layer`] producing a [`LoggedStore`] |
//! | [`StoreError`] | The single backend-interaction failure kind |
//! | [`UnderStatus`] | One directory listing entry |
//! | [`StoreUri`] | Backend location URI with pure path joining |
//!
//! ---
//!
//! ## Capability Traits
//!
//! The interface is split by concern; [`UnderStore`] combines them with a
//! blanket implementation:
//!
//! | Trait | Concern |
//! |-------|---------|
//! | [`StoreMeta`] | existence, sizes, times, ownership, locations, space |
//! | [`StoreFile`] | create/open/delete/rename files, streaming I/O |
//! | [`StoreDir`] | mkdirs, delete, rename, list directories |
//! | [`StoreLifecycle`] | connect from master/worker, configure, close |
//! | [`StoreConfAccess`] | non-fallible configuration/identity accessors |
//!
//! ---
//!
//! ## Logging Contract
//!
//! Every fallible operation produces exactly one `Enter` record before the
//! backend is invoked and exactly one `Exit (OK)` or `Exit (Error)` record
//! after it returns, all at debug level via the [`log`] facade:
//!
//! ```text
//! Enter: RenameFile: src=/a, dst=/b
//! Exit (OK): RenameFile: src=/a, dst=/b
//! ```
//!
//! Results and errors pass through unchanged — callers cannot distinguish a
//! wrapped backend from a raw one by behavior. Non-fallible accessors emit
//! nothing. Descriptions are rendered lazily, so a disabled debug level
//! costs no formatting work.
//!
//! ---
//!
//! ## Error Handling
//!
//! All fallible operations return `Result<T, StoreError>`. There is a single
//! error kind — "interaction with the backend failed" — carrying a
//! human-readable message:
//!
//! ```rust
//! use understore::StoreError;
//!
//! let err = StoreError::new("not found");
//! assert_eq!(err.to_string(), "not found");
//! ```
//!
//! ---
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync` and take `&self`; backends use interior
//! mutability. [`LoggedStore`] holds only the wrapped backend, so it is safe
//! for concurrent use exactly when its backend is. Per call, the enter
//! record strictly precedes the backend invocation and the exit record
//! strictly follows it; records from concurrent calls may interleave.
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Enable serialization for [`UnderStatus`], [`Mode`], option types, etc. |

// Private modules
mod error;
mod ext;
mod layer;
mod logged;
mod options;
mod traits;
mod types;

// Public re-exports - error type
pub use error::StoreError;

// Public re-exports - core types
pub use types::{Mode, SpaceKind, StoreConf, StoreUri, UnderStatus};

// Public re-exports - operation options
pub use options::{
    CreateOptions, DeleteOptions, FileLocationOptions, ListOptions, MkdirsOptions, OpenOptions,
};

// Public re-exports - capability traits
pub use traits::{StoreConfAccess, StoreDir, StoreFile, StoreLifecycle, StoreMeta, UnderStore};

// Public re-exports - instrumentation adapter
pub use logged::{LoggedStore, LoggingLayer};

// Public re-exports - infrastructure
pub use ext::StoreExt;
pub use layer::{Layer, LayerExt};
