//! Common test utilities for dewfiles integration tests
//!
//! Provides a shared fixture wrapping a temporary data directory and a
//! configured settings store.

#![allow(dead_code)]

use dewfiles::SettingsStore;
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// Test Fixtures
// =============================================================================

/// Test fixture that provides a temporary data directory and a SettingsStore
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub store: SettingsStore,
}

impl TestFixture {
    /// Create a new test fixture with default configuration
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = SettingsStore::builder().data_dir(temp_dir.path()).build();

        Self { temp_dir, store }
    }

    /// Create a fixture with a custom settings document name
    pub fn with_settings_name(name: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = SettingsStore::builder()
            .data_dir(temp_dir.path())
            .settings_name(name)
            .build();

        Self { temp_dir, store }
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> PathBuf {
        self.temp_dir.path().to_path_buf()
    }

    /// Get the settings document path
    pub fn document_path(&self) -> PathBuf {
        self.store.document_path()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Read the raw settings document content as parsed JSON
pub fn read_document(fixture: &TestFixture) -> Option<serde_json::Value> {
    let path = fixture.document_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).ok()?;
        serde_json::from_str(&content).ok()
    } else {
        None
    }
}
