//! Path management for cashcast
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `CASHCAST_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/cashcast` or `~/.config/cashcast`
//! 3. Windows: `%APPDATA%\cashcast`

use std::path::PathBuf;

use crate::error::CashcastError;

/// Manages all paths used by cashcast
#[derive(Debug, Clone)]
pub struct CashcastPaths {
    base_dir: PathBuf,
}

impl CashcastPaths {
    /// Create a new CashcastPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, CashcastError> {
        let base_dir = if let Ok(custom) = std::env::var("CASHCAST_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create CashcastPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/cashcast/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/cashcast/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to tracker.json (the persisted forecast state)
    pub fn tracker_file(&self) -> PathBuf {
        self.data_dir().join("tracker.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), CashcastError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CashcastError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CashcastError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, CashcastError> {
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| CashcastError::Config("Could not determine home directory".into()))
        })?;
    Ok(config_base.join("cashcast"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, CashcastError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| CashcastError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("cashcast"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashcastPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(
            paths.tracker_file(),
            temp_dir.path().join("data").join("tracker.json")
        );
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashcastPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
    }
}
