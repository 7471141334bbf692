use dirs::home_dir;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".credito_core";

/// Returns the application-specific data directory, defaulting to
/// `~/.credito_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("CREDITO_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Creates the directory (and its parents) when missing.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}
