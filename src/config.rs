//! Configuration types for the settings store

use std::path::PathBuf;

use crate::storage::{JsonStorage, StorageBackend};

/// Default stem of the settings document file (without extension)
pub const DEFAULT_SETTINGS_NAME: &str = "__dew_loc_sett";

/// Configuration for initializing a [`SettingsStore`](crate::SettingsStore)
pub struct SettingsConfig<S: StorageBackend = JsonStorage> {
    /// Directory where the settings document is stored
    pub data_dir: PathBuf,

    /// Stem of the settings document file, without extension
    pub settings_name: String,

    /// Storage backend implementation
    pub storage: S,

    /// Chunk size for byte-level file transfers; `None` moves whole payloads
    pub buffer_size: Option<usize>,
}

impl Default for SettingsConfig<JsonStorage> {
    fn default() -> Self {
        Self {
            data_dir: crate::paths::application_data_dir().unwrap_or_else(|_| PathBuf::from(".")),
            settings_name: DEFAULT_SETTINGS_NAME.into(),
            storage: JsonStorage::new(),
            buffer_size: None,
        }
    }
}

impl<S: StorageBackend> SettingsConfig<S> {
    /// Get the full path to the settings document
    pub fn document_path(&self) -> PathBuf {
        self.data_dir
            .join(format!("{}.{}", self.settings_name, self.storage.extension()))
    }
}

impl SettingsConfig<JsonStorage> {
    /// Create a new builder for SettingsConfig
    ///
    /// # Example
    /// ```rust
    /// use dewfiles::SettingsConfig;
    ///
    /// let config = SettingsConfig::builder()
    ///     .data_dir("/tmp/my-app")
    ///     .settings_name("preferences")
    ///     .build();
    /// ```
    pub fn builder() -> SettingsConfigBuilder {
        SettingsConfigBuilder::new()
    }
}

/// Builder for creating SettingsConfig with a fluent API
#[derive(Clone, Debug)]
pub struct SettingsConfigBuilder {
    data_dir: Option<PathBuf>,
    settings_name: Option<String>,
    pretty_json: bool,
    buffer_size: Option<usize>,
}

impl Default for SettingsConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsConfigBuilder {
    /// Create a new builder with default options
    pub fn new() -> Self {
        Self {
            data_dir: None,
            settings_name: None,
            pretty_json: true,
            buffer_size: None,
        }
    }

    /// Set the data directory
    ///
    /// Supports `~` expansion for home directory.
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        // Expand ~ to home directory
        let expanded = if path.starts_with("~") {
            if let Some(home) = dirs::home_dir() {
                home.join(path.strip_prefix("~").unwrap_or(&path))
            } else {
                path
            }
        } else {
            path
        };
        self.data_dir = Some(expanded);
        self
    }

    /// Set the settings document name, without extension (default: "__dew_loc_sett")
    pub fn settings_name(mut self, name: impl Into<String>) -> Self {
        self.settings_name = Some(name.into());
        self
    }

    /// Use compact JSON (no pretty printing)
    pub fn compact_json(mut self) -> Self {
        self.pretty_json = false;
        self
    }

    /// Set the chunk size for byte-level file transfers
    ///
    /// A size of zero leaves whole-payload transfers in place.
    pub fn buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = (size > 0).then_some(size);
        self
    }

    /// Build the SettingsConfig
    ///
    /// If `data_dir` is not set, uses the platform application data
    /// directory, falling back to the current directory when the platform
    /// reports none.
    pub fn build(self) -> SettingsConfig<JsonStorage> {
        let data_dir = self.data_dir.unwrap_or_else(|| {
            crate::paths::application_data_dir().unwrap_or_else(|_| PathBuf::from("."))
        });

        let storage = if self.pretty_json {
            JsonStorage::new()
        } else {
            JsonStorage::compact()
        };

        SettingsConfig {
            data_dir,
            settings_name: self
                .settings_name
                .unwrap_or_else(|| DEFAULT_SETTINGS_NAME.into()),
            storage,
            buffer_size: self.buffer_size,
        }
    }
}
