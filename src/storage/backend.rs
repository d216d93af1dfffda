// Storage capability seam and its OpenDAL implementation
use crate::error::{Error, Result};
use crate::storage::constants::{DEFAULT_BUFFER_SIZE, DIRECTORY_CONTENT_TYPE};
use futures::stream::TryStreamExt;
use opendal::{Metadata, Operator};
use std::future::Future;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Whether an object stands for a directory or a regular file.
///
/// Directories are a naming convention only: a marker object carries the
/// directory content type, nothing in the backend enforces a hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// Snapshot of one object's metadata as the backend reported it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectEntry {
    pub key: String,
    pub size: u64,
    /// Backend timestamp, ISO-8601 with fractional seconds.
    pub last_modified: Option<String>,
    pub content_type: Option<String>,
}

impl ObjectEntry {
    pub fn new(key: impl Into<String>, size: u64) -> Self {
        Self {
            key: key.into(),
            size,
            last_modified: None,
            content_type: None,
        }
    }

    fn from_metadata(key: &str, meta: &Metadata) -> Self {
        Self {
            key: key.to_string(),
            size: meta.content_length(),
            last_modified: meta.last_modified().map(|t| t.to_rfc3339()),
            content_type: meta.content_type().map(str::to_string),
        }
    }

    pub fn kind(&self) -> EntryKind {
        if self.content_type.as_deref() == Some(DIRECTORY_CONTENT_TYPE) {
            EntryKind::Directory
        } else {
            EntryKind::File
        }
    }
}

/// Minimal set of single-key operations against a flat object namespace.
///
/// Every call is exactly one round trip to the backend. Implementations do
/// not retry, cache or batch. A missing key surfaces as [`Error::NotFound`].
pub trait StorageAdapter: Clone + Send + Sync + 'static {
    /// Store the full contents of `content` under `key`.
    fn put<R>(
        &self,
        key: &str,
        content: R,
        content_type: Option<&str>,
    ) -> impl Future<Output = Result<()>> + Send
    where
        R: AsyncRead + Unpin + Send;

    /// Fetch an object's body together with what is known of its metadata.
    fn get(&self, key: &str) -> impl Future<Output = Result<(ObjectEntry, Vec<u8>)>> + Send;

    fn head(&self, key: &str) -> impl Future<Output = Result<ObjectEntry>> + Send;

    fn delete(&self, key: &str) -> impl Future<Output = Result<()>> + Send;

    /// List every key starting with `prefix` (the whole container when `None`),
    /// at any depth, in backend order.
    fn list(&self, prefix: Option<&str>) -> impl Future<Output = Result<Vec<ObjectEntry>>> + Send;
}

/// Implementation of StorageAdapter for OpenDAL Operator.
#[derive(Clone)]
pub struct OpenDalAdapter {
    operator: Operator,
}

impl OpenDalAdapter {
    /// Create a new adapter over an already configured operator.
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }

    pub fn operator(&self) -> &Operator {
        &self.operator
    }
}

fn backend_error(key: &str) -> impl FnOnce(opendal::Error) -> Error + '_ {
    move |e| {
        if e.kind() == opendal::ErrorKind::NotFound {
            Error::NotFound {
                key: key.to_string(),
            }
        } else {
            Error::Backend { source: e }
        }
    }
}

impl StorageAdapter for OpenDalAdapter {
    async fn put<R>(&self, key: &str, mut content: R, content_type: Option<&str>) -> Result<()>
    where
        R: AsyncRead + Unpin + Send,
    {
        let mut writer = match content_type {
            Some(content_type) => {
                self.operator
                    .writer_with(key)
                    .content_type(content_type)
                    .await
            }
            None => self.operator.writer(key).await,
        }
        .map_err(backend_error(key))?;

        let mut buffer = vec![0u8; DEFAULT_BUFFER_SIZE];
        loop {
            let bytes_read = content.read(&mut buffer).await?;
            if bytes_read == 0 {
                break;
            }
            writer
                .write(buffer[..bytes_read].to_vec())
                .await
                .map_err(backend_error(key))?;
        }
        writer.close().await.map_err(backend_error(key))?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<(ObjectEntry, Vec<u8>)> {
        let content = self
            .operator
            .read(key)
            .await
            .map_err(backend_error(key))?
            .to_vec();
        Ok((ObjectEntry::new(key, content.len() as u64), content))
    }

    async fn head(&self, key: &str) -> Result<ObjectEntry> {
        let meta = self.operator.stat(key).await.map_err(backend_error(key))?;
        Ok(ObjectEntry::from_metadata(key, &meta))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.operator.delete(key).await.map_err(backend_error(key))
    }

    async fn list(&self, prefix: Option<&str>) -> Result<Vec<ObjectEntry>> {
        let path = prefix.unwrap_or("/");
        let mut lister = self
            .operator
            .lister_with(path)
            .recursive(true)
            .await
            .map_err(backend_error(path))?;

        // Swift's lister fills in bytes, content type and last-modified. Other
        // services (memory included) may leave them at their defaults.
        let mut entries = Vec::new();
        while let Some(entry) = lister.try_next().await.map_err(backend_error(path))? {
            entries.push(ObjectEntry::from_metadata(entry.path(), entry.metadata()));
        }
        Ok(entries)
    }
}
