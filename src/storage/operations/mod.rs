// Storage operation traits and implementations
pub mod delete;
pub mod download;
pub mod list;
pub mod mkdir;
pub mod rmdir;
pub mod upload;

pub use delete::Deleter;
pub use download::Downloader;
pub use list::Lister;
pub use mkdir::Mkdirer;
pub use rmdir::Remover;
pub use upload::Uploader;
