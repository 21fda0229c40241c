//! Configuration
//!
//! - `paths` - Data directory and file locations

pub mod paths;

pub use paths::{DataPaths, DATA_DIR_ENV, DEFAULT_DATA_DIR};
