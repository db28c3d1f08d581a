//! Async local file primitives
//!
//! Byte and text file transfer for application sandboxes. Every operation
//! opens its file handle on entry and releases it before returning; nothing
//! is kept open across calls.

use crate::error::{Error, Result};

use log::debug;
use std::path::Path;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Async file access with optional chunked transfer.
///
/// With no buffer size configured, reads and writes move the whole payload
/// in a single transfer. A configured buffer size splits byte-level
/// transfers into chunks of that many bytes. Chunking changes nothing about
/// the result: all bytes are transferred, in order, exactly once.
#[derive(Clone, Debug, Default)]
pub struct FileAccess {
    /// Chunk size for byte reads/writes; `None` transfers whole payloads
    buffer_size: Option<usize>,
}

impl FileAccess {
    /// Create a file access with whole-payload transfers
    pub fn new() -> Self {
        Self { buffer_size: None }
    }

    /// Create a file access that transfers bytes in chunks of `size` bytes
    ///
    /// A size of zero is treated as unset.
    pub fn with_buffer_size(size: usize) -> Self {
        Self {
            buffer_size: (size > 0).then_some(size),
        }
    }

    /// The configured chunk size, if any
    pub fn buffer_size(&self) -> Option<usize> {
        self.buffer_size
    }

    /// Read a file as a byte array.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileRead`] if the file is missing or unreadable.
    pub async fn read_file(&self, path: impl AsRef<Path>) -> Result<Vec<u8>> {
        let path = path.as_ref();

        let data = match self.buffer_size {
            None => tokio::fs::read(path).await.map_err(|e| Error::FileRead {
                path: path.to_path_buf(),
                source: e,
            })?,
            Some(chunk) => {
                let mut file = tokio::fs::File::open(path).await.map_err(|e| Error::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                })?;

                let mut data = Vec::new();
                let mut buf = vec![0u8; chunk];
                loop {
                    let n = file.read(&mut buf).await.map_err(|e| Error::FileRead {
                        path: path.to_path_buf(),
                        source: e,
                    })?;
                    if n == 0 {
                        break;
                    }
                    data.extend_from_slice(&buf[..n]);
                }
                data
            }
        };

        debug!("Read {} bytes from {}", data.len(), path.display());
        Ok(data)
    }

    /// Read a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileRead`] if the file is missing, unreadable, or
    /// not valid UTF-8.
    pub async fn read_file_text(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();

        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::FileRead {
                path: path.to_path_buf(),
                source: e,
            })?;

        debug!("Read {} characters from {}", text.len(), path.display());
        Ok(text)
    }

    /// Write a byte array to `dir/name`, creating or truncating the file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileWrite`] if the file cannot be created or written.
    pub async fn write_file(&self, data: &[u8], name: &str, dir: impl AsRef<Path>) -> Result<()> {
        let path = dir.as_ref().join(name);

        let mut file = tokio::fs::File::create(&path)
            .await
            .map_err(|e| Error::FileWrite {
                path: path.clone(),
                source: e,
            })?;

        let chunk = self.buffer_size.unwrap_or(data.len()).max(1);
        for part in data.chunks(chunk) {
            file.write_all(part).await.map_err(|e| Error::FileWrite {
                path: path.clone(),
                source: e,
            })?;
        }

        file.flush().await.map_err(|e| Error::FileWrite {
            path: path.clone(),
            source: e,
        })?;

        debug!("Wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }

    /// Write a string to `dir/name`, creating or truncating the file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileWrite`] if the file cannot be created or written.
    pub async fn write_file_text(
        &self,
        text: &str,
        name: &str,
        dir: impl AsRef<Path>,
    ) -> Result<()> {
        let path = dir.as_ref().join(name);

        tokio::fs::write(&path, text)
            .await
            .map_err(|e| Error::FileWrite {
                path: path.clone(),
                source: e,
            })?;

        debug!("Wrote {} characters to {}", text.len(), path.display());
        Ok(())
    }

    /// Check if a file exists.
    ///
    /// Never fails: an unreadable or missing path reports `false`.
    pub async fn file_exists(&self, path: impl AsRef<Path>) -> bool {
        tokio::fs::try_exists(path.as_ref()).await.unwrap_or(false)
    }

    /// Check if a directory exists.
    ///
    /// Never fails: an unreadable or missing path reports `false`.
    pub async fn directory_exists(&self, path: impl AsRef<Path>) -> bool {
        tokio::fs::metadata(path.as_ref())
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }
}

// =============================================================================
// Tests
// =============================================================================
