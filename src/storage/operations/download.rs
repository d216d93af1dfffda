use crate::error::Result;
use crate::storage::backend::StorageAdapter;
use std::path::Path;
use tokio::fs;

/// Trait for downloading objects from storage.
pub trait Downloader {
    /// Download a single object into a local file, replacing its contents.
    ///
    /// # Arguments
    /// * `remote_key` - Source key in storage
    /// * `local_path` - Destination path on local filesystem
    ///
    /// # Returns
    /// * `Result<u64>` - Number of bytes written
    async fn download(&self, remote_key: &str, local_path: &Path) -> Result<u64>;
}

/// Implementation of Downloader over a StorageAdapter.
pub struct ObjectDownloader<A> {
    adapter: A,
}

impl<A: StorageAdapter> ObjectDownloader<A> {
    /// Create a new downloader with the given adapter.
    pub fn new(adapter: A) -> Self {
        Self { adapter }
    }
}

impl<A: StorageAdapter> Downloader for ObjectDownloader<A> {
    async fn download(&self, remote_key: &str, local_path: &Path) -> Result<u64> {
        let (entry, content) = self.adapter.get(remote_key).await?;
        fs::write(local_path, &content).await?;
        log::debug!(
            "downloaded key={} bytes={} to {}",
            entry.key,
            entry.size,
            local_path.display()
        );
        Ok(content.len() as u64)
    }
}
