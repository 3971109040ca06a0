//! Storage layer for cashcast
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod file_io;
pub mod tracker;

pub use file_io::{read_json, write_json_atomic};
pub use tracker::{LoadOutcome, TrackerRepository, TrackerState};

use crate::config::paths::CashcastPaths;
use crate::error::CashcastResult;

/// Main storage coordinator
pub struct Storage {
    paths: CashcastPaths,
    pub tracker: TrackerRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: CashcastPaths) -> CashcastResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            tracker: TrackerRepository::new(paths.tracker_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &CashcastPaths {
        &self.paths
    }

    /// Load all data from disk, recovering with defaults where needed
    pub fn load_all(&mut self) -> CashcastResult<LoadOutcome> {
        self.tracker.load()
    }
}
