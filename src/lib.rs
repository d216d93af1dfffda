//! Filesystem-style commands over a flat OpenStack Swift container.
//!
//! Directories are emulated on top of key prefixes and empty marker objects;
//! see [`storage::StorageClient`] for the operations and [`command`] for how
//! command-line verbs map onto them.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod session;
pub mod storage;
