//! JSON-backed key-value settings store
//!
//! This module contains [`SettingsStore`], the primary entry point for
//! persisting typed values into a single settings document.

use crate::config::{SettingsConfig, SettingsConfigBuilder};
use crate::error::{Error, Result};
use crate::fs::FileAccess;
use crate::storage::{JsonStorage, StorageBackend};

use log::{debug, info};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;

/// The in-memory form of the settings document: string keys to string values
type SettingsDocument = HashMap<String, String>;

/// Key-value settings store backed by a single JSON document.
///
/// The store owns one document at `<data_dir>/<settings_name>.json`, a flat
/// JSON object whose keys and values are strings. Typed values are
/// serialized to their string form on write and deserialized on read; the
/// store itself keeps no record of the type a key was written with, so
/// reading a key with a mismatched type fails at deserialization.
///
/// Every operation loads the full document, applies its change or lookup in
/// memory, and (for writes) rewrites the whole file. The document is small
/// by intent (application settings, not bulk data), and the single JSON blob
/// stays human-debuggable.
///
/// There is no mutual exclusion across concurrent calls: two overlapping
/// [`set_value`](Self::set_value) calls race on the read-modify-write cycle
/// and the last writer wins. Callers needing concurrent-writer safety must
/// serialize access themselves.
///
/// # Example
///
/// ```rust,no_run
/// use dewfiles::SettingsStore;
///
/// # async fn example() -> dewfiles::Result<()> {
/// let store = SettingsStore::builder()
///     .data_dir("~/.local/share/my-app")
///     .build();
///
/// store.set_value("theme", &"dark").await?;
/// store.set_value("retries", &3).await?;
///
/// let theme: String = store.get_value("theme").await?;
/// let retries: i32 = store.get_value("retries").await?;
/// # Ok(())
/// # }
/// ```
pub struct SettingsStore<S: StorageBackend = JsonStorage> {
    /// Configuration
    config: SettingsConfig<S>,

    /// File access used for all document reads and writes
    files: FileAccess,
}

impl SettingsStore {
    /// Create a builder for `SettingsStore` with a fluent API.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use dewfiles::SettingsStore;
    ///
    /// let store = SettingsStore::builder()
    ///     .data_dir("~/.local/share/my-app")
    ///     .settings_name("preferences")
    ///     .build();
    /// ```
    pub fn builder() -> SettingsStoreBuilder {
        SettingsStoreBuilder::new()
    }
}

impl<S: StorageBackend> SettingsStore<S> {
    /// Create a new settings store with the given configuration.
    ///
    /// Nothing is touched on disk until the first operation; the document
    /// and its directory are created lazily.
    pub fn new(config: SettingsConfig<S>) -> Self {
        let files = match config.buffer_size {
            Some(size) => FileAccess::with_buffer_size(size),
            None => FileAccess::new(),
        };
        Self { config, files }
    }

    /// Get the configuration
    pub fn config(&self) -> &SettingsConfig<S> {
        &self.config
    }

    /// Get the full path to the backing settings document
    pub fn document_path(&self) -> PathBuf {
        self.config.document_path()
    }

    fn document_file_name(&self) -> String {
        format!(
            "{}.{}",
            self.config.settings_name,
            self.config.storage.extension()
        )
    }

    /// Create the settings document if it does not exist yet.
    ///
    /// A fresh document contains the empty mapping `{}`. Calling this when
    /// the document already exists is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created or the
    /// document cannot be written.
    pub async fn ensure_document(&self) -> Result<()> {
        let path = self.document_path();
        if self.files.file_exists(&path).await {
            return Ok(());
        }

        if !self.files.directory_exists(&self.config.data_dir).await {
            tokio::fs::create_dir_all(&self.config.data_dir)
                .await
                .map_err(|e| Error::DirectoryCreate {
                    path: self.config.data_dir.clone(),
                    source: e,
                })?;
        }

        let empty = self.config.storage.serialize(&SettingsDocument::new())?;
        self.files
            .write_file_text(&empty, &self.document_file_name(), &self.config.data_dir)
            .await?;

        info!("Created settings document at {}", path.display());
        Ok(())
    }

    /// Store a value under `key`, creating the document if needed.
    ///
    /// An existing key is overwritten in place; a new key is added. The
    /// value's string form goes into the document: a string value is stored
    /// as-is, any other serializable type as its compact JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized or the document
    /// cannot be read or rewritten. A failed rewrite leaves the previous
    /// document version on disk untouched.
    pub async fn set_value<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.ensure_document().await?;

        let mut doc = self.load_document().await?;
        doc.insert(key.to_string(), Self::value_to_string(value)?);
        self.save_document(&doc).await?;

        debug!("Setting {key} saved");
        Ok(())
    }

    /// Check whether `key` is present, creating the document if needed.
    ///
    /// An absent key reports `false`, never an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read.
    pub async fn has_key(&self, key: &str) -> Result<bool> {
        self.ensure_document().await?;

        let doc = self.load_document().await?;
        Ok(doc.contains_key(key))
    }

    /// Read the value stored under `key` and deserialize it into `T`.
    ///
    /// Unlike [`set_value`](Self::set_value) and [`has_key`](Self::has_key),
    /// this does NOT create a missing document: reading before anything was
    /// ever written fails with [`Error::DocumentNotFound`]. The asymmetry is
    /// part of the contract and relied upon by callers that use the failure
    /// to detect a first run.
    ///
    /// # Errors
    ///
    /// * [`Error::DocumentNotFound`] if the document does not exist
    /// * [`Error::SettingNotFound`] if `key` was never written
    /// * [`Error::Deserialize`] if the stored string does not match `T`
    pub async fn get_value<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let raw = self.raw_value(key).await?;
        Self::string_to_value(key, &raw)
    }

    /// Read the raw stored string under `key`, skipping deserialization.
    ///
    /// Same contract as [`get_value`](Self::get_value) otherwise: the
    /// document must already exist, and the key must be present.
    pub async fn get_value_as_string(&self, key: &str) -> Result<String> {
        self.raw_value(key).await
    }

    // =========================================================================
    // Document I/O
    // =========================================================================

    async fn raw_value(&self, key: &str) -> Result<String> {
        let path = self.document_path();
        if !self.files.file_exists(&path).await {
            return Err(Error::DocumentNotFound(path));
        }

        let doc = self.load_document().await?;
        doc.get(key)
            .cloned()
            .ok_or_else(|| Error::SettingNotFound(key.to_string()))
    }

    async fn load_document(&self) -> Result<SettingsDocument> {
        let content = self.files.read_file_text(self.document_path()).await?;
        self.config.storage.deserialize(&content)
    }

    async fn save_document(&self, doc: &SettingsDocument) -> Result<()> {
        let content = self.config.storage.serialize(doc)?;
        self.files
            .write_file_text(&content, &self.document_file_name(), &self.config.data_dir)
            .await
    }

    // =========================================================================
    // Value Conversion
    // =========================================================================

    /// Convert a value to the string form held in the document.
    ///
    /// A JSON string is stored as its raw contents, every other type as its
    /// compact JSON text, so `"dark"` round-trips without quoting while
    /// numbers, booleans and structs keep a parseable shape.
    fn value_to_string<T: Serialize>(value: &T) -> Result<String> {
        let value = serde_json::to_value(value).map_err(Error::Serialize)?;
        Ok(match value {
            Value::String(s) => s,
            other => other.to_string(),
        })
    }

    /// Inverse of [`value_to_string`](Self::value_to_string).
    ///
    /// The stored string is parsed as JSON first; raw string contents are
    /// not valid JSON, so on a parse failure the string is re-wrapped as a
    /// JSON string value and deserialized from that.
    fn string_to_value<T: DeserializeOwned>(key: &str, raw: &str) -> Result<T> {
        match serde_json::from_str(raw) {
            Ok(value) => Ok(value),
            Err(_) => serde_json::from_value(Value::String(raw.to_string())).map_err(|e| {
                Error::Deserialize {
                    key: key.to_string(),
                    source: e,
                }
            }),
        }
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for creating a [`SettingsStore`] with a fluent API.
///
/// This is the recommended way to create a `SettingsStore`.
#[derive(Clone, Debug)]
pub struct SettingsStoreBuilder {
    config_builder: SettingsConfigBuilder,
}

impl Default for SettingsStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStoreBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            config_builder: SettingsConfigBuilder::new(),
        }
    }

    /// Set the data directory.
    ///
    /// Supports `~` expansion for home directory. Defaults to the platform
    /// application data directory.
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_builder = self.config_builder.data_dir(path);
        self
    }

    /// Set the settings document name, without extension (default: "__dew_loc_sett").
    pub fn settings_name(mut self, name: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.settings_name(name);
        self
    }

    /// Use compact JSON (no pretty printing).
    pub fn compact_json(mut self) -> Self {
        self.config_builder = self.config_builder.compact_json();
        self
    }

    /// Set the chunk size for byte-level file transfers.
    pub fn buffer_size(mut self, size: usize) -> Self {
        self.config_builder = self.config_builder.buffer_size(size);
        self
    }

    /// Build the [`SettingsStore`].
    pub fn build(self) -> SettingsStore<JsonStorage> {
        SettingsStore::new(self.config_builder.build())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Endpoint {
        host: String,
        port: u16,
    }

    #[test]
    fn test_string_stored_without_quoting() {
        let raw = SettingsStore::<JsonStorage>::value_to_string(&"dark").unwrap();
        assert_eq!(raw, "dark");
    }

    #[test]
    fn test_number_stored_as_json_text() {
        let raw = SettingsStore::<JsonStorage>::value_to_string(&3).unwrap();
        assert_eq!(raw, "3");

        let raw = SettingsStore::<JsonStorage>::value_to_string(&true).unwrap();
        assert_eq!(raw, "true");
    }

    #[test]
    fn test_struct_stored_as_compact_json() {
        let endpoint = Endpoint {
            host: "localhost".into(),
            port: 8080,
        };
        let raw = SettingsStore::<JsonStorage>::value_to_string(&endpoint).unwrap();
        assert_eq!(raw, r#"{"host":"localhost","port":8080}"#);
    }

    #[test]
    fn test_conversion_roundtrip() {
        let cases: Vec<(&str, &str)> = vec![("theme", "dark"), ("label", "3 retries"), ("empty", "")];
        for (key, text) in cases {
            let raw = SettingsStore::<JsonStorage>::value_to_string(&text).unwrap();
            let back: String = SettingsStore::<JsonStorage>::string_to_value(key, &raw).unwrap();
            assert_eq!(back, text);
        }

        let raw = SettingsStore::<JsonStorage>::value_to_string(&42u32).unwrap();
        let back: u32 = SettingsStore::<JsonStorage>::string_to_value("n", &raw).unwrap();
        assert_eq!(back, 42);
    }

    #[test]
    fn test_numeric_looking_string_stays_a_string() {
        let raw = SettingsStore::<JsonStorage>::value_to_string(&"3").unwrap();
        assert_eq!(raw, "3");

        // Reading it back as a string recovers the original contents
        let back: String = SettingsStore::<JsonStorage>::string_to_value("k", &raw).unwrap();
        assert_eq!(back, "3");
    }

    #[test]
    fn test_type_mismatch_fails_deserialization() {
        let result: Result<i32> = SettingsStore::<JsonStorage>::string_to_value("theme", "dark");
        assert!(matches!(result.unwrap_err(), Error::Deserialize { .. }));
    }
}
