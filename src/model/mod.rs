//! Canonical domain records: transactions, categories, and user preferences.

pub mod category;
pub mod preferences;
pub mod transaction;

pub use category::{Category, CategoryKind};
pub use preferences::UserPreferences;
pub use transaction::{EntryKind, Transaction};
