use snafu::Snafu;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("No command provided"))]
    MissingCommand,

    #[snafu(display("Unknown command: {verb}"))]
    UnknownCommand { verb: String },

    #[snafu(display("No working directory provided for {verb}"))]
    MissingWorkingDirectory { verb: String },

    #[snafu(display(
        "Too few arguments provided for {verb} - at least {min} required, {given} provided."
    ))]
    TooFewArguments {
        verb: String,
        min: usize,
        given: usize,
    },

    #[snafu(display("{key} not provided as argument or environment"))]
    MissingConfig { key: String },

    #[snafu(display("Refusing to remove the container root; give a directory prefix"))]
    RefuseRootRemoval,

    #[snafu(display("The object was not found: {key}"))]
    NotFound { key: String },

    #[snafu(display(
        "The object was not found after upload: {key} (the write may not be visible yet)"
    ))]
    VerificationNotFound { key: String },

    #[snafu(display("Path does not exist: {}", path.display()))]
    PathNotFound { path: PathBuf },

    #[snafu(display("Authentication request to '{url}' failed: {source}"))]
    AuthRequest { url: String, source: reqwest::Error },

    #[snafu(display("Authentication rejected with HTTP status {status}"))]
    AuthRejected { status: u16 },

    #[snafu(display("Authentication response is missing the '{header}' header"))]
    AuthHeaderMissing { header: String },

    #[snafu(display("Failed to download '{remote_path}' to '{local_path}': {source}"))]
    DownloadFailed {
        remote_path: String,
        local_path: String,
        source: Box<Error>,
    },

    #[snafu(display("Failed to upload '{local_path}' to '{remote_path}': {source}"))]
    UploadFailed {
        local_path: String,
        remote_path: String,
        source: Box<Error>,
    },

    #[snafu(display("Failed to list directory '{path}': {source}"))]
    ListDirectoryFailed { path: String, source: Box<Error> },

    #[snafu(display("Failed to create directory '{path}': {source}"))]
    DirectoryCreationFailed { path: String, source: Box<Error> },

    #[snafu(display(
        "Failed to delete the object '{key}' while removing '{path}' ({removed} already removed): {source}"
    ))]
    RemoveDirectoryFailed {
        path: String,
        key: String,
        removed: usize,
        source: Box<Error>,
    },

    #[snafu(display("Failed to delete the object '{key}': {source}"))]
    DeleteFailed { key: String, source: Box<Error> },

    #[snafu(display("Upload worker did not complete: {source}"))]
    UploadWorker { source: tokio::task::JoinError },

    #[snafu(display("An error occurred: {source}"))]
    Backend { source: opendal::Error },

    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },
}

/// Failure classes surfaced to the operator. Every class exits with status 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unknown verb, too few arguments or missing configuration.
    Usage,
    /// The backend reported the key absent.
    NotFound,
    /// The write returned but the follow-up existence check did not see the key.
    VerificationNotFound,
    /// Anything else: transport, auth, server or local I/O failures.
    Backend,
}

impl Error {
    /// Classify this error, looking through operation context wrappers.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingCommand
            | Error::UnknownCommand { .. }
            | Error::MissingWorkingDirectory { .. }
            | Error::TooFewArguments { .. }
            | Error::MissingConfig { .. }
            | Error::RefuseRootRemoval => ErrorKind::Usage,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::VerificationNotFound { .. } => ErrorKind::VerificationNotFound,
            Error::DownloadFailed { source, .. }
            | Error::UploadFailed { source, .. }
            | Error::ListDirectoryFailed { source, .. }
            | Error::DirectoryCreationFailed { source, .. }
            | Error::RemoveDirectoryFailed { source, .. }
            | Error::DeleteFailed { source, .. } => source.kind(),
            _ => ErrorKind::Backend,
        }
    }

    pub fn is_usage(&self) -> bool {
        self.kind() == ErrorKind::Usage
    }
}

impl From<opendal::Error> for Error {
    fn from(error: opendal::Error) -> Self {
        Error::Backend { source: error }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io { source: error }
    }
}
