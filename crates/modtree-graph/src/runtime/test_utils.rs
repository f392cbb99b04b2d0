//! Test runtime with a pinned working directory.
//!
//! Wraps `std::fs` directly. Tests build a throwaway project inside a
//! `tempfile::TempDir` and hand its root to [`TestRuntime::new`] so relative
//! entry paths resolve against it instead of the process cwd.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::{FileMetadata, Runtime, RuntimeError, RuntimeResult};

/// Simple test runtime that wraps std::fs for native tests.
#[derive(Debug)]
pub struct TestRuntime {
    cwd: PathBuf,
}

impl TestRuntime {
    /// Create a new test runtime with the specified working directory.
    pub fn new(cwd: PathBuf) -> Self {
        Self { cwd }
    }
}

#[async_trait]
impl Runtime for TestRuntime {
    async fn read_file(&self, path: &Path) -> RuntimeResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => RuntimeError::FileNotFound(path.to_path_buf()),
            _ => RuntimeError::Io(e.to_string()),
        })
    }

    async fn metadata(&self, path: &Path) -> RuntimeResult<FileMetadata> {
        let metadata = std::fs::metadata(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => RuntimeError::FileNotFound(path.to_path_buf()),
            _ => RuntimeError::Io(e.to_string()),
        })?;
        Ok(FileMetadata {
            size: metadata.len(),
            is_file: metadata.is_file(),
            is_dir: metadata.is_dir(),
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    async fn read_dir(&self, path: &Path) -> RuntimeResult<Vec<String>> {
        let entries: Vec<String> = std::fs::read_dir(path)
            .map_err(|e| RuntimeError::Io(e.to_string()))?
            .filter_map(|entry| {
                entry
                    .ok()
                    .and_then(|e| e.file_name().to_str().map(String::from))
            })
            .collect();
        Ok(entries)
    }

    fn get_cwd(&self) -> RuntimeResult<PathBuf> {
        Ok(self.cwd.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_runtime_reports_pinned_cwd() {
        let temp = TempDir::new().unwrap();
        let runtime = TestRuntime::new(temp.path().to_path_buf());
        assert_eq!(runtime.get_cwd().unwrap(), temp.path());
    }

    #[tokio::test]
    async fn test_runtime_read_dir() {
        let temp = TempDir::new().unwrap();
        let cwd = temp.path().to_path_buf();
        let runtime = TestRuntime::new(cwd.clone());

        fs::write(cwd.join("file1.ts"), b"1").unwrap();
        fs::write(cwd.join("file2.ts"), b"2").unwrap();
        fs::create_dir(cwd.join("subdir")).unwrap();

        let entries = runtime.read_dir(&cwd).await.unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries.contains(&"file1.ts".to_string()));
        assert!(entries.contains(&"subdir".to_string()));
    }

    #[tokio::test]
    async fn test_runtime_metadata_missing() {
        let temp = TempDir::new().unwrap();
        let runtime = TestRuntime::new(temp.path().to_path_buf());
        let err = runtime
            .metadata(&temp.path().join("nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, RuntimeError::FileNotFound(_)));
    }
}
