//! Option objects passed into individual store operations.
//!
//! Each operation that accepts tuning parameters has its own option struct
//! with a `Default` and builder-style setters. The instrumented adapter treats
//! these values as opaque: only their `Display` form ever appears in log
//! output, so every option type renders itself as a single line.

use std::fmt;

use crate::Mode;

/// Options for creating a file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateOptions {
    /// Create missing parent directories.
    pub create_parent: bool,
    /// Number of replicas the backend should keep.
    pub replication: u32,
    /// Block size in bytes, 0 meaning the backend default.
    pub block_size_bytes: u64,
    /// Mode of the created file.
    pub mode: Mode,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self {
            create_parent: false,
            replication: 1,
            block_size_bytes: 0,
            mode: Mode::default_file(),
        }
    }
}

impl CreateOptions {
    /// Set whether missing parents are created.
    pub fn create_parent(mut self, create_parent: bool) -> Self {
        self.create_parent = create_parent;
        self
    }

    /// Set the replication factor.
    pub fn replication(mut self, replication: u32) -> Self {
        self.replication = replication;
        self
    }

    /// Set the block size in bytes.
    pub fn block_size_bytes(mut self, block_size_bytes: u64) -> Self {
        self.block_size_bytes = block_size_bytes;
        self
    }

    /// Set the mode of the created file.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}

impl fmt::Display for CreateOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CreateOptions{{create_parent={}, replication={}, block_size_bytes={}, mode={}}}",
            self.create_parent, self.replication, self.block_size_bytes, self.mode
        )
    }
}

/// Options for opening a file for reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpenOptions {
    /// Byte offset to start reading from.
    pub offset: u64,
    /// Maximum number of bytes to read; `None` reads to end of file.
    pub length: Option<u64>,
}

impl OpenOptions {
    /// Set the starting offset.
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the maximum number of bytes to read.
    pub fn length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }
}

impl fmt::Display for OpenOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OpenOptions{{offset={}, length=", self.offset)?;
        match self.length {
            Some(len) => write!(f, "{len}}}"),
            None => write!(f, "all}}"),
        }
    }
}

/// Options for deleting a directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeleteOptions {
    /// Delete contents recursively.
    pub recursive: bool,
}

impl DeleteOptions {
    /// Set whether the delete recurses into the directory's contents.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }
}

impl fmt::Display for DeleteOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeleteOptions{{recursive={}}}", self.recursive)
    }
}

/// Options for listing a directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListOptions {
    /// List entries of nested directories as well.
    pub recursive: bool,
}

impl ListOptions {
    /// Set whether the listing recurses into nested directories.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }
}

impl fmt::Display for ListOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ListOptions{{recursive={}}}", self.recursive)
    }
}

/// Options for creating directories.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MkdirsOptions {
    /// Create missing parent directories.
    pub create_parent: bool,
    /// Owner to assign to the created directories, if any.
    pub owner: Option<String>,
    /// Group to assign to the created directories, if any.
    pub group: Option<String>,
    /// Mode of the created directories.
    pub mode: Mode,
}

impl Default for MkdirsOptions {
    fn default() -> Self {
        Self {
            create_parent: true,
            owner: None,
            group: None,
            mode: Mode::default_dir(),
        }
    }
}

impl MkdirsOptions {
    /// Set whether missing parents are created.
    pub fn create_parent(mut self, create_parent: bool) -> Self {
        self.create_parent = create_parent;
        self
    }

    /// Set the owner of the created directories.
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Set the group of the created directories.
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Set the mode of the created directories.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}

impl fmt::Display for MkdirsOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MkdirsOptions{{create_parent={}, owner={}, group={}, mode={}}}",
            self.create_parent,
            self.owner.as_deref().unwrap_or("-"),
            self.group.as_deref().unwrap_or("-"),
            self.mode
        )
    }
}

/// Options for querying the physical locations of a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileLocationOptions {
    /// Byte offset within the file to locate.
    pub offset: u64,
}

impl FileLocationOptions {
    /// Set the offset within the file.
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }
}

impl fmt::Display for FileLocationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileLocationOptions{{offset={}}}", self.offset)
    }
}
