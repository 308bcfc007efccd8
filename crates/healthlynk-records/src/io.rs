//! JSON file I/O and atomic file operations

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Write data atomically using temp file + rename
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, data)?;
    std::fs::rename(temp_path, path)?;
    Ok(())
}

/// Serialize `value` as pretty JSON and write it atomically
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    atomic_write(path, json.as_bytes())?;
    Ok(())
}

/// Read a JSON file, falling back to `T::default()` when it does not exist
pub fn read_json<T>(path: &Path) -> anyhow::Result<T>
where
    T: for<'de> Deserialize<'de> + Default,
{
    if !path.exists() {
        return Ok(T::default());
    }

    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
    struct TestRecord {
        id: u32,
        name: String,
    }

    #[test]
    fn test_json_roundtrip() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("nested").join("record.json");

        let record = TestRecord {
            id: 7,
            name: "Alice".to_string(),
        };
        write_json(&path, &record).unwrap();

        let read_back: TestRecord = read_json(&path).unwrap();
        assert_eq!(read_back, record);
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_read_missing_uses_default() {
        let temp = tempfile::TempDir::new().unwrap();
        let record: TestRecord = read_json(&temp.path().join("missing.json")).unwrap();
        assert_eq!(record, TestRecord::default());
    }

    #[test]
    fn test_read_malformed_is_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(read_json::<TestRecord>(&path).is_err());
    }

    #[test]
    fn test_atomic_write() {
        let temp = tempfile::TempDir::new().unwrap();
        let test_file = temp.path().join("test_atomic.txt");

        let data = b"Hello, world!";
        atomic_write(&test_file, data).unwrap();

        let read_data = std::fs::read(&test_file).unwrap();
        assert_eq!(data, read_data.as_slice());
    }
}
