//! # Layer Trait
//!
//! Tower-style middleware composition for under-storage backends.
//!
//! ## Overview
//!
//! The [`Layer`] trait enables composable middleware that wraps backends to
//! add cross-cutting behavior. The crate ships one such middleware,
//! [`LoggingLayer`](crate::LoggingLayer), which brackets every
//! backend-interacting operation with enter/exit log records.
//!
//! ## How It Works
//!
//! ```text
//! Backend ──▶ Layer::layer() ──▶ Wrapped Backend
//! ```
//!
//! Each middleware provides:
//! 1. A wrapper struct that implements the capability traits
//! 2. A `Layer` implementation that creates the wrapper
//!
//! ## Fluent Composition
//!
//! Use [`LayerExt`] for fluent chaining:
//!
//! ```rust,ignore
//! use understore::{LayerExt, LoggingLayer};
//!
//! let store = S3Store::connect(conf).layer(LoggingLayer);
//! ```

use crate::UnderStore;

/// A layer that wraps a backend to add functionality.
///
/// Inspired by Tower's `Layer` trait, this enables composable middleware.
/// Each middleware provides a corresponding `Layer` implementation.
///
/// # Type Parameters
///
/// - `S`: The backend type being wrapped (must implement [`UnderStore`])
///
/// # Design Notes
///
/// - `layer(self, backend)` consumes both the layer and backend
/// - The resulting `Backend` type should implement the same capability
///   traits as the input backend `S`
///
/// # Example
///
/// ```rust
/// use understore::Layer;
///
/// struct CountingStore<S> {
///     inner: S,
///     calls: std::sync::atomic::AtomicU64,
/// }
///
/// struct CountingLayer;
///
/// impl<S> Layer<S> for CountingLayer {
///     type Backend = CountingStore<S>;
///
///     fn layer(self, inner: S) -> Self::Backend {
///         CountingStore {
///             inner,
///             calls: std::sync::atomic::AtomicU64::new(0),
///         }
///     }
/// }
/// ```
pub trait Layer<S> {
    /// The resulting backend type after applying this layer.
    type Backend;

    /// Wrap the given backend with this layer's functionality.
    ///
    /// Consumes both the layer configuration and the backend, returning a
    /// new wrapped backend.
    fn layer(self, backend: S) -> Self::Backend;
}

/// Extension trait for fluent layer composition.
///
/// Provides the `.layer()` method on any [`UnderStore`] backend for
/// ergonomic chaining.
///
/// # Example
///
/// ```rust
/// use understore::{Layer, LayerExt, UnderStore};
///
/// fn compose<S: UnderStore, L: Layer<S>>(backend: S, layer: L) -> L::Backend {
///     backend.layer(layer)
/// }
/// ```
pub trait LayerExt: UnderStore + Sized {
    /// Apply a layer to this backend.
    ///
    /// Returns the wrapped backend with the layer's functionality added.
    fn layer<L: Layer<Self>>(self, layer: L) -> L::Backend {
        layer.layer(self)
    }
}

// Blanket implementation - any UnderStore backend gets LayerExt for free
impl<S: UnderStore> LayerExt for S {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_ext_is_auto_implemented() {
        // LayerExt is blanket-implemented for all UnderStore types
        fn _check<S: UnderStore + LayerExt>() {}
    }

    #[test]
    fn layer_composes_arbitrary_wrappers() {
        struct Passthrough<S>(S);
        struct PassthroughLayer;

        impl<S> Layer<S> for PassthroughLayer {
            type Backend = Passthrough<S>;

            fn layer(self, backend: S) -> Self::Backend {
                Passthrough(backend)
            }
        }

        let wrapped = PassthroughLayer.layer(17u8);
        assert_eq!(wrapped.0, 17);
    }
}
