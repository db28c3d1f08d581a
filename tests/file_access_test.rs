//! File Access Integration Tests
//!
//! Tests for the raw file primitives: byte and text transfer, chunked
//! buffering, and existence checks.

use dewfiles::{Error, FileAccess};
use tempfile::TempDir;

#[tokio::test]
async fn test_byte_write_then_read() {
    let dir = TempDir::new().unwrap();
    let files = FileAccess::new();

    let payload: Vec<u8> = (0u8..=255).collect();
    files.write_file(&payload, "data.bin", dir.path()).await.unwrap();

    let loaded = files.read_file(dir.path().join("data.bin")).await.unwrap();
    assert_eq!(loaded, payload);
}

#[tokio::test]
async fn test_text_write_then_read() {
    let dir = TempDir::new().unwrap();
    let files = FileAccess::new();

    let text = "multi\nline\ncontent with unicode: ✓";
    files.write_file_text(text, "doc.txt", dir.path()).await.unwrap();

    let loaded = files.read_file_text(dir.path().join("doc.txt")).await.unwrap();
    assert_eq!(loaded, text);
}

#[tokio::test]
async fn test_chunked_writer_whole_reader_agree() {
    let dir = TempDir::new().unwrap();

    // Write chunked with a buffer far smaller than the payload, read back
    // without chunking; the configuration must not affect the content
    let writer = FileAccess::with_buffer_size(16);
    let reader = FileAccess::new();

    let payload: Vec<u8> = (0..10_000).map(|i| (i % 256) as u8).collect();
    writer.write_file(&payload, "big.bin", dir.path()).await.unwrap();

    let loaded = reader.read_file(dir.path().join("big.bin")).await.unwrap();
    assert_eq!(loaded, payload);
}

#[tokio::test]
async fn test_empty_payload() {
    let dir = TempDir::new().unwrap();
    let files = FileAccess::with_buffer_size(8);

    files.write_file(&[], "empty.bin", dir.path()).await.unwrap();

    let loaded = files.read_file(dir.path().join("empty.bin")).await.unwrap();
    assert!(loaded.is_empty());
}

#[tokio::test]
async fn test_write_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let files = FileAccess::new();

    let missing = dir.path().join("no-such-dir");
    let result = files.write_file_text("x", "f.txt", &missing).await;

    assert!(matches!(result.unwrap_err(), Error::FileWrite { .. }));
}

#[tokio::test]
async fn test_read_missing_file_fails_not_found() {
    let dir = TempDir::new().unwrap();
    let files = FileAccess::new();

    let err = files.read_file(dir.path().join("ghost.bin")).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_existence_checks() {
    let dir = TempDir::new().unwrap();
    let files = FileAccess::new();

    files.write_file_text("x", "present.txt", dir.path()).await.unwrap();
    tokio::fs::create_dir(dir.path().join("sub")).await.unwrap();

    assert!(files.file_exists(dir.path().join("present.txt")).await);
    assert!(!files.file_exists(dir.path().join("absent.txt")).await);

    assert!(files.directory_exists(dir.path().join("sub")).await);
    assert!(!files.directory_exists(dir.path().join("absent")).await);
    assert!(!files.directory_exists(dir.path().join("present.txt")).await);
}
