// Delete operation trait and implementation
use crate::error::Result;
use crate::storage::backend::StorageAdapter;

/// Trait for deleting a single object from storage.
pub trait Deleter {
    /// Delete the object stored under `key`.
    ///
    /// Fails with `NotFound` when no such object exists.
    ///
    /// # Arguments
    /// * `key` - Exact object key; no prefix expansion takes place
    ///
    /// # Returns
    /// * `Result<()>` - Success or detailed error information
    async fn delete(&self, key: &str) -> Result<()>;
}

/// Implementation of Deleter over a StorageAdapter.
pub struct ObjectDeleter<A> {
    adapter: A,
}

impl<A: StorageAdapter> ObjectDeleter<A> {
    /// Create a new deleter with the given adapter.
    pub fn new(adapter: A) -> Self {
        Self { adapter }
    }
}

impl<A: StorageAdapter> Deleter for ObjectDeleter<A> {
    async fn delete(&self, key: &str) -> Result<()> {
        // Backend deletes are idempotent; absence has to be observed first.
        let entry = self.adapter.head(key).await?;
        log::debug!("deleting key={} size={}", entry.key, entry.size);
        self.adapter.delete(key).await
    }
}
