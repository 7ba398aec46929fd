//! File helpers: byte-for-byte reads and writes with no transformation.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use retouch_core::EditError;

/// Read a file into an encoded buffer.
pub async fn read_file(path: impl AsRef<Path>) -> Result<Bytes, EditError> {
    Ok(Bytes::from(tokio::fs::read(path).await?))
}

/// Write a buffer to `path`, returning the path on success.
pub async fn write_file(data: &[u8], path: impl AsRef<Path>) -> Result<PathBuf, EditError> {
    tokio::fs::write(&path, data).await?;
    Ok(path.as_ref().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_missing_file() {
        let result = read_file("/nonexistent/input.png").await;
        assert!(matches!(result, Err(EditError::Io(_))));
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");
        let written = write_file(b"abc123", &path).await.unwrap();
        assert_eq!(written, path);
        let back = read_file(&path).await.unwrap();
        assert_eq!(back.as_ref(), b"abc123");
    }
}
