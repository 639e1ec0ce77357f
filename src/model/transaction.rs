use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single income or expense entry.
///
/// `category_id` may reference a category that no longer exists; aggregation
/// treats such entries as uncategorized rather than dropping them. Amounts are
/// positive magnitudes by convention, enforced by the input layer, not here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: f64,
    pub category_id: Uuid,
    pub description: String,
    pub date: NaiveDate,
    pub kind: EntryKind,
}

impl Transaction {
    /// Creates a new entry with a fresh id.
    pub fn new(
        amount: f64,
        category_id: Uuid,
        description: impl Into<String>,
        date: NaiveDate,
        kind: EntryKind,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            category_id,
            description: description.into(),
            date,
            kind,
        }
    }
}

/// Whether an entry adds to income or to spending.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Expense,
    Income,
}
