//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::FlowError;

/// Write CSV rows to a file atomically (write to temp, then rename)
///
/// The header row is written explicitly so that an empty row set still
/// produces a valid file. Each row is serialized with serde, so field order
/// must match `header`.
pub fn write_csv_atomic<T, I, P>(path: P, header: &[&str], rows: I) -> Result<(), FlowError>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            FlowError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file lives in the same directory so the rename stays atomic
    let temp_path = temp_path_for(path);

    if let Err(e) = write_rows(&temp_path, header, rows) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        FlowError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

fn write_rows<T, I>(temp_path: &Path, header: &[&str], rows: I) -> Result<(), FlowError>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let file = File::create(temp_path)
        .map_err(|e| FlowError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    writer
        .write_record(header)
        .map_err(|e| FlowError::Storage(format!("Failed to write header: {}", e)))?;

    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| FlowError::Storage(format!("Failed to serialize row: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| FlowError::Storage(format!("Failed to flush data: {}", e)))?;

    let file = writer
        .into_inner()
        .map_err(|e| FlowError::Storage(format!("Failed to flush data: {}", e.error())))?;

    // Sync to disk before rename
    file.sync_all()
        .map_err(|e| FlowError::Storage(format!("Failed to sync data: {}", e)))?;

    Ok(())
}

/// `transactions.csv` -> `transactions.csv.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("ledger"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use tempfile::TempDir;

    #[derive(Serialize)]
    struct TestRow {
        name: String,
        value: i32,
    }

    fn rows() -> Vec<TestRow> {
        vec![
            TestRow {
                name: "plain".into(),
                value: 1,
            },
            TestRow {
                name: "with, comma".into(),
                value: 2,
            },
        ]
    }

    #[test]
    fn test_write_with_header_and_quoting() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");

        write_csv_atomic(&path, &["name", "value"], rows()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "name,value\nplain,1\n\"with, comma\",2\n");
    }

    #[test]
    fn test_empty_rows_still_write_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");

        write_csv_atomic(&path, &["name", "value"], Vec::<TestRow>::new()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "name,value\n");
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");

        write_csv_atomic(&path, &["name", "value"], rows()).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("test.csv.tmp").exists());
    }

    #[test]
    fn test_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");
        fs::write(&path, "old,content\nthat,is\nlonger,than\nthe,new\n").unwrap();

        write_csv_atomic(&path, &["name", "value"], Vec::<TestRow>::new()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "name,value\n");
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.csv");

        write_csv_atomic(&path, &["name", "value"], rows()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_into_directory_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("taken");
        fs::create_dir(&path).unwrap();

        assert!(write_csv_atomic(&path, &["name", "value"], rows()).is_err());
        assert!(!temp_dir.path().join("taken.tmp").exists());
    }
}
