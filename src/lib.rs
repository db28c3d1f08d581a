//! # dewfiles - Local Files & Settings
//!
//! A small cross-platform Rust library for application sandboxes: async
//! local file read/write plus a JSON-backed key-value settings store.
//!
//! ## Features
//!
//! - **Settings Store**: Persist typed values into a single JSON document,
//!   keyed by string, with create-if-absent semantics
//! - **File Access**: Async byte and text file read/write with optional
//!   chunked transfer, plus file/directory existence checks
//! - **Platform Paths**: Resolve the platform's writable application data
//!   directory
//! - **Pluggable Format**: The document format sits behind a storage
//!   backend trait; JSON is the default
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dewfiles::SettingsStore;
//!
//! # async fn example() -> dewfiles::Result<()> {
//! let store = SettingsStore::builder()
//!     .data_dir("~/.local/share/my-app")
//!     .build();
//!
//! store.set_value("theme", &"dark").await?;
//! store.set_value("retries", &3).await?;
//!
//! let theme: String = store.get_value("theme").await?;
//! assert_eq!(theme, "dark");
//!
//! if store.has_key("retries").await? {
//!     let retries: i32 = store.get_value("retries").await?;
//!     assert_eq!(retries, 3);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Raw File Access
//!
//! ```rust,no_run
//! use dewfiles::{application_data_dir, FileAccess};
//!
//! # async fn example() -> dewfiles::Result<()> {
//! let dir = application_data_dir()?;
//! let files = FileAccess::new();
//!
//! files.write_file_text("hello", "greeting.txt", &dir).await?;
//! let text = files.read_file_text(dir.join("greeting.txt")).await?;
//!
//! let exists = files.file_exists(dir.join("greeting.txt")).await;
//! assert!(exists);
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Settings operations are plain sequential read-modify-write cycles over
//! the whole document, with no internal locking. Concurrent writers against
//! the same document race, and the last writer wins; serialize access
//! externally if that matters for your application.

// Core modules
mod config;
mod error;
mod fs;
mod paths;
mod store;

pub mod storage;

// Re-exports from core
pub use config::{SettingsConfig, SettingsConfigBuilder, DEFAULT_SETTINGS_NAME};
pub use error::{Error, Result};
pub use fs::FileAccess;
pub use paths::application_data_dir;
pub use storage::{JsonStorage, StorageBackend};
pub use store::{SettingsStore, SettingsStoreBuilder};
