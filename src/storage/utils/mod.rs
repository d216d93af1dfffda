// Utilities for storage module
pub mod error;
pub mod listing;
pub mod path;
pub mod progress;
