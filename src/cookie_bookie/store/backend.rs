use crate::error::Result;

/// Abstract interface for durable key-value storage.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`Persistence`](super::persistence::Persistence) handles the "what" (the recipe
/// collection format). Every write replaces the whole value for a key.
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) if nothing has been stored yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}
