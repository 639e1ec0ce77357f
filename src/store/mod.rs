//! Owns the canonical collections and re-derives monthly data on change.
//!
//! The aggregation functions in [`crate::analytics`] stay pure; this container
//! is the only stateful piece, invoking them whenever a mutation could change
//! their output.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analytics::{self, AggregateOptions, CategoryTotal, MonthlyData};
use crate::dates::{MonthKey, TimeReference};
use crate::errors::TrackerError;
use crate::model::{Category, Transaction, UserPreferences};
use crate::storage::StorageBackend;

pub struct FinanceStore {
    transactions: Vec<Transaction>,
    categories: Vec<Category>,
    preferences: UserPreferences,
    current_month: MonthKey,
    monthly_data: MonthlyData,
}

/// Raw dump of the current state, for on-demand export. No aggregation runs
/// when producing this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportData {
    pub transactions: Vec<Transaction>,
    pub categories: Vec<Category>,
    pub preferences: UserPreferences,
}

impl ExportData {
    pub fn to_json_pretty(&self) -> Result<String, TrackerError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FinanceStore {
    /// Creates an empty store selecting the month "now" falls in.
    pub fn new(reference: TimeReference) -> Self {
        Self::from_parts(
            Vec::new(),
            Vec::new(),
            UserPreferences::default(),
            MonthKey::current(reference),
        )
    }

    pub fn from_parts(
        transactions: Vec<Transaction>,
        categories: Vec<Category>,
        preferences: UserPreferences,
        current_month: MonthKey,
    ) -> Self {
        let monthly_data = analytics::summarize(&transactions, current_month);
        Self {
            transactions,
            categories,
            preferences,
            current_month,
            monthly_data,
        }
    }

    /// Loads all three collections from a backend, selecting the current month.
    pub fn load(
        backend: &dyn StorageBackend,
        reference: TimeReference,
    ) -> Result<Self, TrackerError> {
        let transactions = backend.load_transactions()?;
        let categories = backend.load_categories()?;
        let preferences = backend.load_preferences()?;
        tracing::info!(
            transactions = transactions.len(),
            categories = categories.len(),
            "loaded finance state"
        );
        Ok(Self::from_parts(
            transactions,
            categories,
            preferences,
            MonthKey::current(reference),
        ))
    }

    /// Writes all three collections whole, each as its own document.
    pub fn persist(&self, backend: &dyn StorageBackend) -> Result<(), TrackerError> {
        backend.save_transactions(&self.transactions)?;
        backend.save_categories(&self.categories)?;
        backend.save_preferences(&self.preferences)?;
        tracing::debug!("persisted finance state");
        Ok(())
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    pub fn current_month(&self) -> MonthKey {
        self.current_month
    }

    /// Derived totals for the selected month, refreshed on every mutation.
    pub fn monthly_data(&self) -> &MonthlyData {
        &self.monthly_data
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        tracing::debug!(%id, "add transaction");
        self.transactions.push(transaction);
        self.refresh();
        id
    }

    /// Replaces the transaction's fields while preserving its id.
    pub fn update_transaction(
        &mut self,
        id: Uuid,
        mut updated: Transaction,
    ) -> Result<(), TrackerError> {
        let slot = self
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TrackerError::UnknownId(id))?;
        updated.id = id;
        *slot = updated;
        self.refresh();
        Ok(())
    }

    pub fn delete_transaction(&mut self, id: Uuid) -> Result<(), TrackerError> {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        if self.transactions.len() == before {
            return Err(TrackerError::UnknownId(id));
        }
        tracing::debug!(%id, "deleted transaction");
        self.refresh();
        Ok(())
    }

    pub fn add_category(&mut self, category: Category) -> Uuid {
        let id = category.id;
        tracing::debug!(%id, name = %category.name, "add category");
        self.categories.push(category);
        id
    }

    pub fn update_category(&mut self, id: Uuid, mut updated: Category) -> Result<(), TrackerError> {
        let slot = self
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(TrackerError::UnknownId(id))?;
        updated.id = id;
        *slot = updated;
        Ok(())
    }

    /// Removes a category, refusing while any transaction still references it.
    pub fn delete_category(&mut self, id: Uuid) -> Result<(), TrackerError> {
        if !self.categories.iter().any(|c| c.id == id) {
            return Err(TrackerError::UnknownId(id));
        }
        if self.transactions.iter().any(|t| t.category_id == id) {
            return Err(TrackerError::CategoryInUse(id));
        }
        self.categories.retain(|c| c.id != id);
        tracing::debug!(%id, "deleted category");
        Ok(())
    }

    pub fn update_preferences(&mut self, preferences: UserPreferences) {
        self.preferences = preferences;
    }

    pub fn set_current_month(&mut self, month: MonthKey) {
        if self.current_month != month {
            self.current_month = month;
            self.refresh();
        }
    }

    /// Dense per-category breakdown of the selected month's expenses.
    pub fn current_category_totals(&self, options: AggregateOptions) -> Vec<CategoryTotal> {
        let scoped: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|t| MonthKey::of(t.date) == self.current_month)
            .cloned()
            .collect();
        analytics::category_totals(&scoped, &self.categories, options)
    }

    pub fn export(&self) -> ExportData {
        ExportData {
            transactions: self.transactions.clone(),
            categories: self.categories.clone(),
            preferences: self.preferences.clone(),
        }
    }

    fn refresh(&mut self) {
        self.monthly_data = analytics::summarize(&self.transactions, self.current_month);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategoryKind, EntryKind};
    use chrono::NaiveDate;

    fn store_with_month(year: i32, month: u32) -> FinanceStore {
        FinanceStore::from_parts(
            Vec::new(),
            Vec::new(),
            UserPreferences::default(),
            MonthKey::new(year, month).unwrap(),
        )
    }

    #[test]
    fn mutations_refresh_monthly_data() {
        let mut store = store_with_month(2024, 3);
        let food = Category::new("Food", "#f00", "utensils", CategoryKind::Expense);
        let food_id = store.add_category(food);
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let id = store.add_transaction(Transaction::new(
            100.0,
            food_id,
            "groceries",
            date,
            EntryKind::Expense,
        ));
        assert_eq!(store.monthly_data().total_expenses, 100.0);

        store.delete_transaction(id).unwrap();
        assert_eq!(store.monthly_data().total_expenses, 0.0);
    }

    #[test]
    fn category_with_transactions_cannot_be_deleted() {
        let mut store = store_with_month(2024, 3);
        let food = Category::new("Food", "#f00", "utensils", CategoryKind::Expense);
        let food_id = store.add_category(food);
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        store.add_transaction(Transaction::new(
            10.0,
            food_id,
            "snacks",
            date,
            EntryKind::Expense,
        ));

        let err = store.delete_category(food_id).unwrap_err();
        assert!(matches!(err, TrackerError::CategoryInUse(id) if id == food_id));
        assert_eq!(store.categories().len(), 1);
    }

    #[test]
    fn update_preserves_transaction_id() {
        let mut store = store_with_month(2024, 3);
        let category = Uuid::new_v4();
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let id = store.add_transaction(Transaction::new(
            10.0,
            category,
            "before",
            date,
            EntryKind::Expense,
        ));

        let replacement = Transaction::new(20.0, category, "after", date, EntryKind::Expense);
        store.update_transaction(id, replacement).unwrap();

        let stored = &store.transactions()[0];
        assert_eq!(stored.id, id);
        assert_eq!(stored.description, "after");
        assert_eq!(store.monthly_data().total_expenses, 20.0);
    }

    #[test]
    fn changing_month_rederives() {
        let mut store = store_with_month(2024, 3);
        let category = Uuid::new_v4();
        let date = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        store.add_transaction(Transaction::new(
            55.0,
            category,
            "february",
            date,
            EntryKind::Expense,
        ));
        assert_eq!(store.monthly_data().total_expenses, 0.0);

        store.set_current_month(MonthKey::new(2024, 2).unwrap());
        assert_eq!(store.monthly_data().total_expenses, 55.0);
    }
}
