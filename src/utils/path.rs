//! Path utilities: config directory, `~` expansion, database path resolution.

use std::env;
use std::path::{Path, PathBuf};

/// Platform config directory: `%APPDATA%\rcheckin` on Windows,
/// `~/.rcheckin` elsewhere.
pub fn config_dir() -> PathBuf {
    if cfg!(target_os = "windows") {
        let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(appdata).join("rcheckin")
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rcheckin")
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// A bare database name lands in `base`; absolute or `~/` paths are kept.
pub fn resolve_in(base: &Path, name: &str) -> PathBuf {
    let p = expand_tilde(name);
    if p.is_absolute() { p } else { base.join(p) }
}
