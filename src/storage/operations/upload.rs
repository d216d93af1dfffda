use crate::error::{
    Error, PathNotFoundSnafu, Result, UploadWorkerSnafu, VerificationNotFoundSnafu,
};
use crate::storage::backend::StorageAdapter;
use crate::storage::constants::{UPLOAD_POLL_INTERVAL, UPLOAD_PROGRESS_INTERVAL};
use crate::storage::utils::progress::ProgressReporter;
use snafu::{ResultExt, ensure};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tokio::io::BufReader;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Trait for uploading local files to storage.
pub trait Uploader {
    /// Upload a single local file and confirm the key is visible afterwards.
    ///
    /// # Arguments
    /// * `local_path` - Source file on local filesystem
    /// * `remote_key` - Destination key in storage
    /// * `progress` - Notified while the transfer runs
    ///
    /// # Returns
    /// * `Result<()>` - Success or detailed error information
    async fn upload<P>(&self, local_path: &Path, remote_key: &str, progress: &mut P) -> Result<()>
    where
        P: ProgressReporter + Send;
}

/// Timing of the wait loop that watches an upload worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadSchedule {
    /// How often the worker's completion state is checked.
    pub poll: Duration,
    /// Minimum time between two progress notifications.
    pub progress: Duration,
}

impl Default for UploadSchedule {
    fn default() -> Self {
        Self {
            poll: UPLOAD_POLL_INTERVAL,
            progress: UPLOAD_PROGRESS_INTERVAL,
        }
    }
}

/// Runs the transfer on a background task and reports liveness until it ends.
///
/// There is no cancellation: once spawned, the worker runs to completion.
pub struct UploadCoordinator<A> {
    adapter: A,
    schedule: UploadSchedule,
}

impl<A: StorageAdapter> UploadCoordinator<A> {
    pub fn new(adapter: A, schedule: UploadSchedule) -> Self {
        Self { adapter, schedule }
    }

    fn spawn_worker(&self, local_path: PathBuf, remote_key: String) -> JoinHandle<Result<()>> {
        let adapter = self.adapter.clone();
        tokio::spawn(async move {
            let file = fs::File::open(&local_path).await?;
            adapter.put(&remote_key, BufReader::new(file), None).await
        })
    }

    async fn wait_for<P>(&self, worker: JoinHandle<Result<()>>, progress: &mut P) -> Result<()>
    where
        P: ProgressReporter + Send,
    {
        let mut poll = tokio::time::interval(self.schedule.poll);
        poll.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut last_report = Instant::now();

        loop {
            poll.tick().await;
            if worker.is_finished() {
                break;
            }
            if last_report.elapsed() >= self.schedule.progress {
                progress.tick();
                last_report = Instant::now();
            }
        }

        worker.await.context(UploadWorkerSnafu)?
    }

    /// Writes are only eventually visible, so a successful put is confirmed
    /// with a head request. Absence at this point counts as a failed upload.
    async fn verify(&self, remote_key: &str) -> Result<()> {
        match self.adapter.head(remote_key).await {
            Ok(entry) => {
                log::debug!("verified key={} size={}", entry.key, entry.size);
                Ok(())
            }
            Err(Error::NotFound { key }) => VerificationNotFoundSnafu { key }.fail(),
            Err(e) => Err(e),
        }
    }
}

impl<A: StorageAdapter> Uploader for UploadCoordinator<A> {
    async fn upload<P>(&self, local_path: &Path, remote_key: &str, progress: &mut P) -> Result<()>
    where
        P: ProgressReporter + Send,
    {
        ensure!(
            local_path.is_file(),
            PathNotFoundSnafu {
                path: local_path.to_path_buf()
            }
        );

        progress.start();
        let worker = self.spawn_worker(local_path.to_path_buf(), remote_key.to_string());
        let outcome = self.wait_for(worker, progress).await;
        progress.finish();
        outcome?;

        self.verify(remote_key).await
    }
}
