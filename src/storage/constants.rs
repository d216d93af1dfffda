use std::time::Duration;

// Buffer related constants
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

// Key layout
pub const PATH_SEPARATOR: char = '/';
pub const DIRECTORY_CONTENT_TYPE: &str = "application/directory";

// Upload wait loop: how often the worker is polled, and how often a
// progress marker is printed while it is still running
pub const UPLOAD_POLL_INTERVAL: Duration = Duration::from_secs(1);
pub const UPLOAD_PROGRESS_INTERVAL: Duration = Duration::from_secs(5);
pub const PROGRESS_LABEL: &str = "Uploading";
pub const PROGRESS_MARKER: char = '.';

// Listing columns
pub const DIRECTORY_PERMISSIONS: &str = "drwxr--r--";
pub const FILE_PERMISSIONS: &str = "-rw-r--r--";
pub const LISTING_OWNER: &str = "swift";
pub const LISTING_GROUP: &str = "swift";
pub const LISTING_TIME_FORMAT: &str = "%b %d %H:%M";
pub const LISTING_TIME_WIDTH: usize = 12;
