use std::{
    env, fs,
    path::{Path, PathBuf},
};

use dirs::home_dir;
use serde::{de::DeserializeOwned, Serialize};

use crate::model::{Category, Transaction, UserPreferences};

use super::{Result, StorageBackend};

const DEFAULT_DIR_NAME: &str = ".fintrack";
const TRANSACTIONS_FILE: &str = "transactions.json";
const CATEGORIES_FILE: &str = "categories.json";
const PREFERENCES_FILE: &str = "preferences.json";

/// Returns the application data directory, defaulting to `~/.fintrack`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("FINTRACK_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Stores each collection as its own pretty-printed JSON document under one
/// root directory. Writes stage to a temporary file and rename into place so
/// a crash never leaves a half-written document behind.
#[derive(Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    fn load_document<T: DeserializeOwned + Default>(&self, file: &str) -> Result<T> {
        let path = self.document_path(file);
        if !path.exists() {
            return Ok(T::default());
        }
        let data = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn save_document<T: Serialize + ?Sized>(&self, file: &str, value: &T) -> Result<()> {
        let path = self.document_path(file);
        let json = serde_json::to_string_pretty(value)?;
        write_atomic(&path, &json)?;
        tracing::debug!(file, "wrote document");
        Ok(())
    }
}

impl StorageBackend for JsonStorage {
    fn load_transactions(&self) -> Result<Vec<Transaction>> {
        self.load_document(TRANSACTIONS_FILE)
    }

    fn save_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        self.save_document(TRANSACTIONS_FILE, transactions)
    }

    fn load_categories(&self) -> Result<Vec<Category>> {
        self.load_document(CATEGORIES_FILE)
    }

    fn save_categories(&self, categories: &[Category]) -> Result<()> {
        self.save_document(CATEGORIES_FILE, categories)
    }

    fn load_preferences(&self) -> Result<UserPreferences> {
        self.load_document(PREFERENCES_FILE)
    }

    fn save_preferences(&self, preferences: &UserPreferences) -> Result<()> {
        self.save_document(PREFERENCES_FILE, preferences)
    }
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, data)?;
    fs::rename(tmp, path)?;
    Ok(())
}
