//! # Extension Traits
//!
//! Convenience methods for under-storage backends.
//!
//! ## Overview
//!
//! [`StoreExt`] provides commonly-needed helpers that aren't part of the
//! capability set itself. They are default methods with a blanket
//! implementation, so any [`StoreMeta`] backend gets them for free — the
//! logging adapter included, in which case the underlying `space` calls are
//! logged as usual.

use crate::{SpaceKind, StoreError, StoreMeta};

/// Extension methods for any under-storage backend.
///
/// # Example
///
/// ```rust
/// use understore::{StoreError, StoreExt, StoreMeta};
///
/// fn report<S: StoreMeta>(store: &S) -> Result<(), StoreError> {
///     let free = store.space_free("/")?;
///     let total = store.space_total("/")?;
///     println!("{free} of {total} bytes free");
///     Ok(())
/// }
/// ```
pub trait StoreExt: StoreMeta {
    /// Total capacity, in bytes, of the volume containing `path`.
    fn space_total(&self, path: &str) -> Result<u64, StoreError> {
        self.space(path, SpaceKind::Total)
    }

    /// Bytes in use on the volume containing `path`.
    fn space_used(&self, path: &str) -> Result<u64, StoreError> {
        self.space(path, SpaceKind::Used)
    }

    /// Bytes available on the volume containing `path`.
    fn space_free(&self, path: &str) -> Result<u64, StoreError> {
        self.space(path, SpaceKind::Free)
    }
}

// Blanket implementation - any StoreMeta backend gets StoreExt for free
impl<S: StoreMeta + ?Sized> StoreExt for S {}
