//! Path helpers for the Zellij sandbox, where the host home is mounted at
//! `/host`.

use std::path::{Path, PathBuf};

/// File name of the key-value store inside the data directory.
pub const STORE_FILE_NAME: &str = "store.json";

/// File name of the OTLP span export inside the data directory.
pub const TRACE_FILE_NAME: &str = "travel-authority-otlp.json";

/// Default data directory, `/host/.local/share/zellij/travel-authority`.
///
/// `/host` is the cwd of the last focused terminal (usually the home
/// directory), so on the host this is typically
/// `~/.local/share/zellij/travel-authority`.
///
/// # Examples
///
/// ```
/// use travel_authority::infrastructure::get_data_dir;
///
/// assert_eq!(
///     get_data_dir().to_str(),
///     Some("/host/.local/share/zellij/travel-authority")
/// );
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("travel-authority")
}

/// Maps `~` and `~/…` onto the `/host` mount.
///
/// # Examples
///
/// ```
/// use travel_authority::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/data"), "/host/data");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/tmp/x"), "/tmp/x");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

/// Location of the key-value store file under `data_dir`.
#[must_use]
pub fn store_file(data_dir: &Path) -> PathBuf {
    data_dir.join(STORE_FILE_NAME)
}

/// Location of the span export file under `data_dir`.
#[must_use]
pub fn trace_file(data_dir: &Path) -> PathBuf {
    data_dir.join(TRACE_FILE_NAME)
}
