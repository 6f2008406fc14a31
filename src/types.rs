//! Core types for the under-storage abstraction.

use std::collections::HashMap;
use std::fmt;

/// Unix-style permission bits stored as a mode bitmask.
///
/// Rendered in octal (e.g. `755`) wherever a mode appears in log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mode(u32);

impl Mode {
    /// Create a mode from Unix permission bits (e.g. `0o755`).
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & 0o7777)
    }

    /// Get the raw permission bits.
    #[inline]
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Returns `true` if no write bit is set for user, group, or other.
    #[inline]
    pub const fn readonly(&self) -> bool {
        (self.0 & 0o222) == 0
    }

    /// Default mode for a new file (0o644 = rw-r--r--).
    #[inline]
    pub const fn default_file() -> Self {
        Self(0o644)
    }

    /// Default mode for a new directory (0o755 = rwxr-xr-x).
    #[inline]
    pub const fn default_dir() -> Self {
        Self(0o755)
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self::default_file()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:o}", self.0)
    }
}

/// Category of a space query against the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpaceKind {
    /// Total capacity in bytes.
    Total,
    /// Bytes currently in use.
    Used,
    /// Bytes available for use.
    Free,
}

impl fmt::Display for SpaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpaceKind::Total => f.write_str("Total"),
            SpaceKind::Used => f.write_str("Used"),
            SpaceKind::Free => f.write_str("Free"),
        }
    }
}

/// A single entry returned from a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnderStatus {
    /// Name of the entry relative to the listed directory.
    pub name: String,
    /// Whether the entry is a directory.
    pub is_directory: bool,
}

impl UnderStatus {
    /// Create a listing entry.
    pub fn new(name: impl Into<String>, is_directory: bool) -> Self {
        Self {
            name: name.into(),
            is_directory,
        }
    }

    /// Returns `true` if the entry is a regular file.
    #[inline]
    pub fn is_file(&self) -> bool {
        !self.is_directory
    }
}

/// A URI addressing a location in an under-storage backend.
///
/// Opaque to this crate apart from pure string manipulation; the scheme and
/// authority semantics belong to the backend that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoreUri(String);

impl StoreUri {
    /// Create a URI from its string form.
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// The URI as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join a logical path onto this URI, normalizing the separator.
    ///
    /// Pure string manipulation; performs no I/O.
    pub fn join(&self, path: &str) -> StoreUri {
        let base = self.0.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            StoreUri(base.to_string())
        } else {
            StoreUri(format!("{base}/{path}"))
        }
    }
}

impl fmt::Display for StoreUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Backend-wide configuration object.
///
/// The capability set treats configuration as an opaque value carried between
/// the mounting layer and the backend; this crate models it as a string
/// property bag and never interprets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoreConf {
    entries: HashMap<String, String>,
}

impl StoreConf {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a configuration entry, returning `self` for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Look up a configuration entry.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
