//! # Instrumented Forwarding Adapter
//!
//! [`LoggedStore`] forwards every call of the under-storage capability set to
//! a wrapped backend. Operations that interact with the underlying storage —
//! anything returning `Result<_, StoreError>` — are bracketed with debug-level
//! enter/exit records. Pure accessors ([`StoreConfAccess`]) are forwarded
//! directly with no logging.
//!
//! ## Log format
//!
//! Three record shapes, all at debug level:
//!
//! ```text
//! Enter: Exists: path=/a
//! Exit (OK): Exists: path=/a
//! Exit (Error): Open: path=/missing, Error=not found
//! ```
//!
//! Success and failure deliberately share the debug severity; the `(OK)` /
//! `(Error)` marker carries the outcome so downstream filters see a single
//! stream per mount.
//!
//! ## Transparency
//!
//! The adapter never alters results or errors: callers observe identical
//! outcomes with or without it in place. Its only state is the wrapped
//! backend, so it is `Send + Sync` exactly when the backend is and adds no
//! locking of its own.

use std::collections::HashMap;
use std::fmt;
use std::io::{Read, Write};

use crate::{
    CreateOptions, DeleteOptions, FileLocationOptions, Layer, ListOptions, MkdirsOptions, Mode,
    OpenOptions, SpaceKind, StoreConf, StoreConfAccess, StoreDir, StoreError, StoreFile,
    StoreLifecycle, StoreMeta, StoreUri, UnderStatus, UnderStore,
};

/// An under-storage backend wrapper that logs entry and exit of every
/// backend-interacting operation.
///
/// Construct with [`LoggedStore::new`] or by applying [`LoggingLayer`].
/// The wrapper implements the full capability set, so callers cannot tell it
/// apart from the raw backend except by log output.
///
/// # Example
///
/// ```rust,ignore
/// use understore::{LoggedStore, UnderStore};
///
/// let store = LoggedStore::new(my_backend);
/// store.mkdirs("/data")?; // logged
/// let props = store.properties(); // not logged
/// ```
pub struct LoggedStore<S> {
    inner: S,
}

impl<S> LoggedStore<S> {
    /// Wrap a backend. The backend is taken by value; there is no way to
    /// construct the adapter without one.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// A reference to the wrapped backend.
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Unwrap, returning the backend.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

/// Renders a description thunk only when a record is actually emitted.
///
/// Argument rendering touches option objects whose `Display` is not free, so
/// the closure runs during record formatting, never before.
struct Lazy<F: Fn() -> String>(F);

impl<F: Fn() -> String> fmt::Display for Lazy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&(self.0)())
    }
}

/// Invoke a backend operation with enter/exit bracketing.
///
/// Emits `Enter` before the call and `Exit (OK)` or `Exit (Error)` after,
/// then returns the result or error unchanged.
fn call<T>(
    op: impl FnOnce() -> Result<T, StoreError>,
    describe: impl Fn() -> String,
) -> Result<T, StoreError> {
    let desc = Lazy(describe);
    log::debug!("Enter: {desc}");
    match op() {
        Ok(ret) => {
            log::debug!("Exit (OK): {desc}");
            Ok(ret)
        }
        Err(err) => {
            log::debug!("Exit (Error): {desc}, Error={err}");
            Err(err)
        }
    }
}

impl<S: StoreMeta> StoreMeta for LoggedStore<S> {
    fn exists(&self, path: &str) -> Result<bool, StoreError> {
        call(|| self.inner.exists(path), || format!("Exists: path={path}"))
    }

    fn is_file(&self, path: &str) -> Result<bool, StoreError> {
        call(|| self.inner.is_file(path), || format!("IsFile: path={path}"))
    }

    fn is_directory(&self, path: &str) -> Result<bool, StoreError> {
        call(
            || self.inner.is_directory(path),
            || format!("IsDirectory: path={path}"),
        )
    }

    fn file_size(&self, path: &str) -> Result<u64, StoreError> {
        call(
            || self.inner.file_size(path),
            || format!("FileSize: path={path}"),
        )
    }

    fn block_size(&self, path: &str) -> Result<u64, StoreError> {
        call(
            || self.inner.block_size(path),
            || format!("BlockSize: path={path}"),
        )
    }

    fn modification_time_ms(&self, path: &str) -> Result<u64, StoreError> {
        call(
            || self.inner.modification_time_ms(path),
            || format!("ModificationTimeMs: path={path}"),
        )
    }

    fn owner(&self, path: &str) -> Result<String, StoreError> {
        call(|| self.inner.owner(path), || format!("Owner: path={path}"))
    }

    fn group(&self, path: &str) -> Result<String, StoreError> {
        call(|| self.inner.group(path), || format!("Group: path={path}"))
    }

    fn mode(&self, path: &str) -> Result<Mode, StoreError> {
        call(|| self.inner.mode(path), || format!("Mode: path={path}"))
    }

    fn file_locations(&self, path: &str) -> Result<Vec<String>, StoreError> {
        call(
            || self.inner.file_locations(path),
            || format!("FileLocations: path={path}"),
        )
    }

    fn file_locations_with(
        &self,
        path: &str,
        options: FileLocationOptions,
    ) -> Result<Vec<String>, StoreError> {
        call(
            || self.inner.file_locations_with(path, options),
            || format!("FileLocations: path={path}, options={options}"),
        )
    }

    fn space(&self, path: &str, kind: SpaceKind) -> Result<u64, StoreError> {
        call(
            || self.inner.space(path, kind),
            || format!("Space: path={path}, kind={kind}"),
        )
    }

    fn set_owner(&self, path: &str, owner: &str, group: &str) -> Result<(), StoreError> {
        call(
            || self.inner.set_owner(path, owner, group),
            || format!("SetOwner: path={path}, owner={owner}, group={group}"),
        )
    }

    fn set_mode(&self, path: &str, mode: Mode) -> Result<(), StoreError> {
        call(
            || self.inner.set_mode(path, mode),
            || format!("SetMode: path={path}, mode={mode}"),
        )
    }
}

impl<S: StoreFile> StoreFile for LoggedStore<S> {
    fn create(&self, path: &str) -> Result<Box<dyn Write + Send>, StoreError> {
        call(|| self.inner.create(path), || format!("Create: path={path}"))
    }

    fn create_with(
        &self,
        path: &str,
        options: &CreateOptions,
    ) -> Result<Box<dyn Write + Send>, StoreError> {
        call(
            || self.inner.create_with(path, options),
            || format!("Create: path={path}, options={options}"),
        )
    }

    fn open(&self, path: &str) -> Result<Box<dyn Read + Send>, StoreError> {
        call(|| self.inner.open(path), || format!("Open: path={path}"))
    }

    fn open_with(
        &self,
        path: &str,
        options: OpenOptions,
    ) -> Result<Box<dyn Read + Send>, StoreError> {
        call(
            || self.inner.open_with(path, options),
            || format!("Open: path={path}, options={options}"),
        )
    }

    fn delete_file(&self, path: &str) -> Result<bool, StoreError> {
        call(
            || self.inner.delete_file(path),
            || format!("DeleteFile: path={path}"),
        )
    }

    fn rename_file(&self, src: &str, dst: &str) -> Result<bool, StoreError> {
        call(
            || self.inner.rename_file(src, dst),
            || format!("RenameFile: src={src}, dst={dst}"),
        )
    }
}

impl<S: StoreDir> StoreDir for LoggedStore<S> {
    fn mkdirs(&self, path: &str) -> Result<bool, StoreError> {
        call(|| self.inner.mkdirs(path), || format!("Mkdirs: path={path}"))
    }

    fn mkdirs_with(&self, path: &str, options: &MkdirsOptions) -> Result<bool, StoreError> {
        call(
            || self.inner.mkdirs_with(path, options),
            || format!("Mkdirs: path={path}, options={options}"),
        )
    }

    fn delete_directory(&self, path: &str) -> Result<bool, StoreError> {
        call(
            || self.inner.delete_directory(path),
            || format!("DeleteDirectory: path={path}"),
        )
    }

    fn delete_directory_with(
        &self,
        path: &str,
        options: DeleteOptions,
    ) -> Result<bool, StoreError> {
        call(
            || self.inner.delete_directory_with(path, options),
            || format!("DeleteDirectory: path={path}, options={options}"),
        )
    }

    fn rename_directory(&self, src: &str, dst: &str) -> Result<bool, StoreError> {
        call(
            || self.inner.rename_directory(src, dst),
            || format!("RenameDirectory: src={src}, dst={dst}"),
        )
    }

    fn list_status(&self, path: &str) -> Result<Vec<UnderStatus>, StoreError> {
        call(
            || self.inner.list_status(path),
            || format!("ListStatus: path={path}"),
        )
    }

    fn list_status_with(
        &self,
        path: &str,
        options: ListOptions,
    ) -> Result<Vec<UnderStatus>, StoreError> {
        call(
            || self.inner.list_status_with(path, options),
            || format!("ListStatus: path={path}, options={options}"),
        )
    }
}

impl<S: StoreLifecycle> StoreLifecycle for LoggedStore<S> {
    fn connect_from_master(&self, hostname: &str) -> Result<(), StoreError> {
        call(
            || self.inner.connect_from_master(hostname),
            || format!("ConnectFromMaster: hostname={hostname}"),
        )
    }

    fn connect_from_worker(&self, hostname: &str) -> Result<(), StoreError> {
        call(
            || self.inner.connect_from_worker(hostname),
            || format!("ConnectFromWorker: hostname={hostname}"),
        )
    }

    fn configure_properties(&self) -> Result<(), StoreError> {
        call(
            || self.inner.configure_properties(),
            || "ConfigureProperties".to_string(),
        )
    }

    fn close(&self) -> Result<(), StoreError> {
        call(|| self.inner.close(), || "Close".to_string())
    }
}

// Pure accessors bypass interception: only backend interactions warrant log
// volume.
impl<S: StoreConfAccess> StoreConfAccess for LoggedStore<S> {
    fn conf(&self) -> StoreConf {
        self.inner.conf()
    }

    fn set_conf(&self, conf: StoreConf) {
        self.inner.set_conf(conf)
    }

    fn properties(&self) -> HashMap<String, String> {
        self.inner.properties()
    }

    fn set_properties(&self, properties: HashMap<String, String>) {
        self.inner.set_properties(properties)
    }

    fn store_type(&self) -> &str {
        self.inner.store_type()
    }

    fn supports_flush(&self) -> bool {
        self.inner.supports_flush()
    }

    fn resolve_uri(&self, base: &StoreUri, path: &str) -> StoreUri {
        self.inner.resolve_uri(base, path)
    }
}

/// A [`Layer`] that wraps any backend in a [`LoggedStore`].
///
/// # Example
///
/// ```rust,ignore
/// use understore::{LayerExt, LoggingLayer};
///
/// let store = my_backend.layer(LoggingLayer);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingLayer;

impl<S: UnderStore> Layer<S> for LoggingLayer {
    type Backend = LoggedStore<S>;

    fn layer(self, inner: S) -> Self::Backend {
        LoggedStore::new(inner)
    }
}
