use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::dates::MonthKey;
use crate::model::{EntryKind, Transaction};

/// Expense total for one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub day: u32,
    pub amount: f64,
}

/// Expense and income totals for one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyPoint {
    pub month: MonthKey,
    pub label: &'static str,
    pub expenses: f64,
    pub income: f64,
}

/// Daily expense totals for every day of `month`, zero-filled.
///
/// The result always has exactly `month.days_in_month()` points in ascending
/// day order. Income entries are excluded.
pub fn daily_series(transactions: &[Transaction], month: MonthKey) -> Vec<DailyPoint> {
    let days = month.days_in_month();
    let mut points: Vec<DailyPoint> = Vec::with_capacity(days as usize);
    for day in 1..=days {
        if let Some(date) = NaiveDate::from_ymd_opt(month.year(), month.month(), day) {
            points.push(DailyPoint {
                date,
                day,
                amount: 0.0,
            });
        }
    }

    for transaction in transactions {
        if transaction.kind != EntryKind::Expense || MonthKey::of(transaction.date) != month {
            continue;
        }
        if let Some(point) = points.get_mut(transaction.date.day() as usize - 1) {
            point.amount += transaction.amount;
        }
    }

    points
}

/// Expense and income totals for the `month_count` calendar months ending at
/// `reference`'s month, inclusive.
///
/// Every month in the window gets a point even with no activity; entries
/// outside the window are silently excluded. Points come back oldest first,
/// ordered by month key rather than by window-construction order.
pub fn monthly_series(
    transactions: &[Transaction],
    reference: NaiveDate,
    month_count: u32,
) -> Vec<MonthlyPoint> {
    let newest = MonthKey::of(reference);
    let mut buckets: BTreeMap<MonthKey, MonthlyPoint> = BTreeMap::new();
    for back in 0..month_count {
        let month = newest.months_back(back);
        buckets.insert(
            month,
            MonthlyPoint {
                month,
                label: month.label(),
                expenses: 0.0,
                income: 0.0,
            },
        );
    }

    for transaction in transactions {
        let month = MonthKey::of(transaction.date);
        if let Some(point) = buckets.get_mut(&month) {
            match transaction.kind {
                EntryKind::Expense => point.expenses += transaction.amount,
                EntryKind::Income => point.income += transaction.amount,
            }
        }
    }

    buckets.into_values().collect()
}
