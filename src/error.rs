//! Error type for under-storage interactions.

/// Failure of an interaction with the underlying storage system.
///
/// Every fallible operation in the capability set signals failure through this
/// single kind. Backends attach a human-readable message describing what went
/// wrong; callers that need finer-grained classification must obtain it from
/// the backend, not from this type.
///
/// # Examples
///
/// ```rust
/// use understore::StoreError;
///
/// let err = StoreError::new("connection refused by object store");
/// assert_eq!(err.to_string(), "connection refused by object store");
/// ```
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    /// Create an error from a human-readable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message describing the failed interaction.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<std::io::Error> for StoreError {
    fn from(error: std::io::Error) -> Self {
        Self::new(error.to_string())
    }
}
