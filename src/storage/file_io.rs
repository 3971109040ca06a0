//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt the store on failure.
//! Read and parse failures surface as `StoreUnavailable` so callers can
//! recover with defaults.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::CashcastError;

/// Read JSON from a file
///
/// Returns `Ok(None)` if the file doesn't exist, and `StoreUnavailable` if
/// it exists but can't be opened or parsed.
pub fn read_json<T, P>(path: P) -> Result<Option<T>, CashcastError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path).map_err(|e| {
        CashcastError::StoreUnavailable(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map(Some).map_err(|e| {
        CashcastError::StoreUnavailable(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified
/// at all, preventing corruption on crashes or power failures.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), CashcastError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    // Parent must exist before the temp file can be created there
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CashcastError::StoreUnavailable(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory, required for atomic rename
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path).map_err(|e| {
        CashcastError::StoreUnavailable(format!("Failed to create temp file: {}", e))
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data).map_err(|e| {
        CashcastError::StoreUnavailable(format!("Failed to serialize data: {}", e))
    })?;

    writer
        .flush()
        .map_err(|e| CashcastError::StoreUnavailable(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| CashcastError::StoreUnavailable(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        CashcastError::StoreUnavailable(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let data: Option<TestData> = read_json(&path).unwrap();
        assert!(data.is_none());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };

        write_json_atomic(&path, &data).unwrap();
        assert!(path.exists());

        let loaded: Option<TestData> = read_json(&path).unwrap();
        assert_eq!(loaded, Some(data));
    }

    #[test]
    fn test_malformed_file_is_store_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        std::fs::write(&path, "not json at all").unwrap();

        let result: Result<Option<TestData>, _> = read_json(&path);
        assert!(matches!(result, Err(e) if e.is_store_unavailable()));
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");
        let temp_path = temp_dir.path().join("test.json.tmp");

        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };

        write_json_atomic(&path, &data).unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.json");

        write_json_atomic(&path, &TestData::default()).unwrap();
        assert!(path.exists());
    }
}
