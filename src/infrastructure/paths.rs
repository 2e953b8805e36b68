//! Platform path utilities.
//!
//! Resolves where WealthWagon keeps its files (currently only trace
//! output). The platform data directory is used when it can be determined,
//! falling back to the system temporary directory.

use std::path::PathBuf;

/// Directory name under the platform data directory.
const APP_DIR: &str = "wealthwagon";

/// Returns the data directory for WealthWagon files.
///
/// - Linux: `~/.local/share/wealthwagon`
/// - macOS: `~/Library/Application Support/wealthwagon`
/// - Windows: `%APPDATA%\wealthwagon`
///
/// The directory is not created here.
///
/// # Examples
///
/// ```
/// use wealthwagon::infrastructure::get_data_dir;
///
/// assert!(get_data_dir().ends_with("wealthwagon"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
}
