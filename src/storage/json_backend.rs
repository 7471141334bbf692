use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::core::utils::{app_data_dir, ensure_dir};
use crate::credit::CreditBook;

use super::{Result, StorageBackend};

const STORE_FILE: &str = "creditos.json";
const TMP_SUFFIX: &str = "tmp";

/// Stores the whole credit book as one JSON document, rewritten wholesale on
/// every save and staged through a temporary file.
#[derive(Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Backend rooted at the managed app data directory.
    pub fn new_default() -> Result<Self> {
        let root = app_data_dir();
        ensure_dir(&root)?;
        Ok(Self::new(root.join(STORE_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, book: &CreditBook) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(book)?;
        let tmp = self.path.with_extension(TMP_SUFFIX);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// A missing file is an empty book; a corrupt file propagates the parse
    /// error untouched.
    fn load(&self) -> Result<CreditBook> {
        if !self.path.exists() {
            return Ok(CreditBook::default());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }
}
