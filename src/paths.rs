//! Platform-specific application data path resolution

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Return the writable application data root for the current platform.
///
/// Resolves to the platform's local application data convention: XDG data
/// home on Linux, `Library/Application Support` on macOS, `AppData\Local`
/// on Windows. The result is stateless and does not depend on prior calls.
///
/// # Errors
///
/// Returns [`Error::DataDirUnavailable`] if the platform reports no such
/// directory.
pub fn application_data_dir() -> Result<PathBuf> {
    dirs::data_local_dir().ok_or(Error::DataDirUnavailable)
}
