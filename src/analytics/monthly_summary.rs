use std::collections::BTreeMap;

use uuid::Uuid;

use crate::dates::MonthKey;
use crate::model::{EntryKind, Transaction};

/// Derived totals for a single month. Recomputed on demand, never persisted.
///
/// `category_summary` is sparse: categories without expenses in the month are
/// absent, and consumers read a missing key as zero. This deliberately differs
/// from the dense output of [`crate::analytics::category_totals`].
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyData {
    pub month: MonthKey,
    pub total_expenses: f64,
    pub total_income: f64,
    pub category_summary: BTreeMap<Uuid, f64>,
}

impl MonthlyData {
    pub fn empty(month: MonthKey) -> Self {
        Self {
            month,
            total_expenses: 0.0,
            total_income: 0.0,
            category_summary: BTreeMap::new(),
        }
    }
}

/// Aggregates the transactions falling in `month`.
///
/// Month membership is exact key equality, so bucketing can never disagree
/// with the key the caller derived. Sums accumulate in input order, keeping
/// floating-point results reproducible across calls. Expense amounts with a
/// dangling category id count toward `total_expenses` but appear under no
/// category.
pub fn summarize(transactions: &[Transaction], month: MonthKey) -> MonthlyData {
    let mut data = MonthlyData::empty(month);
    for transaction in transactions {
        if MonthKey::of(transaction.date) != month {
            continue;
        }
        match transaction.kind {
            EntryKind::Expense => {
                data.total_expenses += transaction.amount;
                *data
                    .category_summary
                    .entry(transaction.category_id)
                    .or_insert(0.0) += transaction.amount;
            }
            EntryKind::Income => data.total_income += transaction.amount,
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tx(amount: f64, category: Uuid, y: i32, m: u32, d: u32, kind: EntryKind) -> Transaction {
        Transaction::new(
            amount,
            category,
            "test",
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            kind,
        )
    }

    #[test]
    fn empty_month_yields_zero_totals() {
        let month = MonthKey::new(2024, 3).unwrap();
        let data = summarize(&[], month);
        assert_eq!(data.total_expenses, 0.0);
        assert_eq!(data.total_income, 0.0);
        assert!(data.category_summary.is_empty());
    }

    #[test]
    fn only_matching_month_is_counted() {
        let food = Uuid::new_v4();
        let transactions = vec![
            tx(100.0, food, 2024, 3, 5, EntryKind::Expense),
            tx(50.0, food, 2024, 3, 20, EntryKind::Expense),
            tx(999.0, food, 2024, 2, 29, EntryKind::Expense),
            tx(999.0, food, 2024, 4, 1, EntryKind::Expense),
        ];
        let data = summarize(&transactions, MonthKey::new(2024, 3).unwrap());
        assert_eq!(data.total_expenses, 150.0);
        assert_eq!(data.category_summary[&food], 150.0);
    }

    #[test]
    fn income_stays_out_of_category_summary() {
        let salary = Uuid::new_v4();
        let transactions = vec![tx(3000.0, salary, 2024, 3, 1, EntryKind::Income)];
        let data = summarize(&transactions, MonthKey::new(2024, 3).unwrap());
        assert_eq!(data.total_income, 3000.0);
        assert!(data.category_summary.is_empty());
    }
}
