use crate::config::SwiftConfig;
use crate::error::Result;
use crate::session::Session;
use std::path::Path;

pub mod backend;
pub mod constants;
pub mod operations;
mod utils;

pub use self::backend::{EntryKind, ObjectEntry, OpenDalAdapter, StorageAdapter};
pub use self::operations::list::ListedEntry;
pub use self::operations::upload::UploadSchedule;
pub use self::utils::listing::{format_listing, format_timestamp};
pub use self::utils::progress::{ConsoleProgressReporter, ProgressReporter};

use self::operations::delete::ObjectDeleter;
use self::operations::download::ObjectDownloader;
use self::operations::list::PrefixLister;
use self::operations::mkdir::MarkerMkdirer;
use self::operations::rmdir::PrefixRemover;
use self::operations::upload::UploadCoordinator;
use self::operations::{Deleter, Downloader, Lister, Mkdirer, Remover, Uploader};
use crate::wrap_err;

/// Directory-style client over a single container.
///
/// The adapter is the one shared backend session for the run; every
/// operation receives a clone of it, nothing is held globally.
#[derive(Clone)]
pub struct StorageClient<A> {
    adapter: A,
    container: String,
    schedule: UploadSchedule,
}

impl StorageClient<OpenDalAdapter> {
    /// Authenticate against Swift and bind the resulting session to the
    /// configured container.
    pub async fn connect(config: &SwiftConfig) -> Result<Self> {
        let session = Session::authenticate(config).await?;
        let operator = session.operator(&config.container)?;
        Ok(Self::new(OpenDalAdapter::new(operator), &config.container))
    }
}

impl<A: StorageAdapter> StorageClient<A> {
    pub fn new(adapter: A, container: impl Into<String>) -> Self {
        Self {
            adapter,
            container: container.into(),
            schedule: UploadSchedule::default(),
        }
    }

    /// Override the upload wait loop timing.
    pub fn with_upload_schedule(mut self, schedule: UploadSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    pub async fn list_directory(&self, prefix: Option<&str>) -> Result<Vec<ListedEntry>> {
        log::debug!(
            "list_directory container={} prefix={:?}",
            self.container,
            prefix
        );
        let lister = PrefixLister::new(self.adapter.clone());
        wrap_err!(
            lister.list(prefix).await,
            ListDirectoryFailed {
                path: prefix.unwrap_or_default().to_string()
            }
        )
    }

    pub async fn make_directory(&self, path: &str) -> Result<()> {
        log::debug!("make_directory container={} path={}", self.container, path);
        let mkdirer = MarkerMkdirer::new(self.adapter.clone());
        wrap_err!(
            mkdirer.mkdir(path).await,
            DirectoryCreationFailed {
                path: path.to_string()
            }
        )
    }

    /// Remove every key under `path`. Returns the number of deleted keys.
    ///
    /// Failures are already reported with the offending key and are not
    /// wrapped a second time.
    pub async fn remove_directory(&self, path: &str) -> Result<usize> {
        log::debug!(
            "remove_directory container={} path={}",
            self.container,
            path
        );
        let remover = PrefixRemover::new(self.adapter.clone());
        remover.remove(path).await
    }

    pub async fn upload_file<P>(
        &self,
        local_path: &Path,
        remote_key: &str,
        progress: &mut P,
    ) -> Result<()>
    where
        P: ProgressReporter + Send,
    {
        log::debug!(
            "upload_file container={} local_path={} remote_key={}",
            self.container,
            local_path.display(),
            remote_key
        );
        let uploader = UploadCoordinator::new(self.adapter.clone(), self.schedule);
        wrap_err!(
            uploader.upload(local_path, remote_key, progress).await,
            UploadFailed {
                local_path: local_path.display().to_string(),
                remote_path: remote_key.to_string()
            }
        )
    }

    pub async fn download_file(&self, remote_key: &str, local_path: &Path) -> Result<u64> {
        log::debug!(
            "download_file container={} remote_key={} local_path={}",
            self.container,
            remote_key,
            local_path.display()
        );
        let downloader = ObjectDownloader::new(self.adapter.clone());
        wrap_err!(
            downloader.download(remote_key, local_path).await,
            DownloadFailed {
                remote_path: remote_key.to_string(),
                local_path: local_path.display().to_string()
            }
        )
    }

    pub async fn delete_object(&self, key: &str) -> Result<()> {
        log::debug!("delete_object container={} key={}", self.container, key);
        let deleter = ObjectDeleter::new(self.adapter.clone());
        wrap_err!(
            deleter.delete(key).await,
            DeleteFailed {
                key: key.to_string()
            }
        )
    }
}
