// Recursive directory removal over a key prefix
use crate::error::{Error, RefuseRootRemovalSnafu, Result};
use crate::storage::backend::StorageAdapter;
use crate::storage::utils::path::removal_prefix;
use snafu::ensure;

/// Trait for removing a directory tree from storage.
pub trait Remover {
    /// Delete every key starting with `path`, one key at a time.
    ///
    /// Not transactional: the first failing delete aborts the removal and
    /// keys deleted before it stay deleted.
    ///
    /// # Returns
    /// * `Result<usize>` - Number of keys deleted
    async fn remove(&self, path: &str) -> Result<usize>;
}

/// Remover that lists the whole subtree and deletes it key by key.
pub struct PrefixRemover<A> {
    adapter: A,
}

impl<A: StorageAdapter> PrefixRemover<A> {
    pub fn new(adapter: A) -> Self {
        Self { adapter }
    }
}

impl<A: StorageAdapter> Remover for PrefixRemover<A> {
    async fn remove(&self, path: &str) -> Result<usize> {
        let prefix = removal_prefix(path);
        ensure!(!prefix.is_empty(), RefuseRootRemovalSnafu);

        let objects = self.adapter.list(Some(prefix)).await?;
        let mut removed = 0;
        for object in objects.iter().filter(|o| o.key.starts_with(prefix)) {
            if let Err(e) = self.adapter.delete(&object.key).await {
                log::debug!(
                    "rmdir prefix={prefix} aborted at key={} removed={removed}",
                    object.key
                );
                return Err(Error::RemoveDirectoryFailed {
                    path: path.to_string(),
                    key: object.key.clone(),
                    removed,
                    source: Box::new(e),
                });
            }
            log::debug!("rmdir prefix={prefix} deleted key={}", object.key);
            removed += 1;
        }
        Ok(removed)
    }
}
