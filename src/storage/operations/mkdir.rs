// Directory creation operation trait and implementation
use crate::error::Result;
use crate::storage::backend::StorageAdapter;
use crate::storage::constants::DIRECTORY_CONTENT_TYPE;
use crate::storage::utils::path::marker_key;

/// Trait for creating directories in storage.
pub trait Mkdirer {
    /// Create a directory marker.
    ///
    /// Creating a marker that already exists overwrites it with an identical
    /// empty object, so repeated calls succeed.
    ///
    /// # Arguments
    /// * `path` - Path of the directory to create
    ///
    /// # Returns
    /// * `Result<()>` - Success or detailed error information
    async fn mkdir(&self, path: &str) -> Result<()>;
}

/// Mkdirer that writes an empty object tagged with the directory content type.
pub struct MarkerMkdirer<A> {
    adapter: A,
}

impl<A: StorageAdapter> MarkerMkdirer<A> {
    pub fn new(adapter: A) -> Self {
        Self { adapter }
    }
}

impl<A: StorageAdapter> Mkdirer for MarkerMkdirer<A> {
    async fn mkdir(&self, path: &str) -> Result<()> {
        let key = marker_key(path);
        if key.is_empty() {
            log::warn!("root directory always exists, nothing to create");
            return Ok(());
        }

        self.adapter
            .put(key, tokio::io::empty(), Some(DIRECTORY_CONTENT_TYPE))
            .await
    }
}
