pub mod json_backend;

use crate::errors::TrackerError;
use crate::model::{Category, Transaction, UserPreferences};

pub type Result<T> = std::result::Result<T, TrackerError>;

/// Abstraction over persistence backends.
///
/// Each collection is an independent document written whole on every save;
/// the core has no notion of partial updates.
pub trait StorageBackend: Send + Sync {
    fn load_transactions(&self) -> Result<Vec<Transaction>>;
    fn save_transactions(&self, transactions: &[Transaction]) -> Result<()>;
    fn load_categories(&self) -> Result<Vec<Category>>;
    fn save_categories(&self, categories: &[Category]) -> Result<()>;
    fn load_preferences(&self) -> Result<UserPreferences>;
    fn save_preferences(&self, preferences: &UserPreferences) -> Result<()>;
}

pub use json_backend::JsonStorage;
