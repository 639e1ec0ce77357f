use std::collections::HashMap;

use uuid::Uuid;

use crate::model::{Category, EntryKind, Transaction};

/// One row of the dense per-category breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category_id: Uuid,
    pub name: String,
    pub color: String,
    pub amount: f64,
    /// Share of the whole, only populated in percentage mode.
    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AggregateOptions {
    pub with_percentage: bool,
}

/// Sums expense amounts per category.
///
/// The caller scopes `transactions` (by month, typically) before calling; no
/// date filtering happens here. Output is dense: every known category gets a
/// row, zero-amount ones included, in category-insertion order. Entries whose
/// category id matches no known category are skipped here but still count
/// toward the monthly totals in [`crate::analytics::summarize`].
pub fn category_totals(
    transactions: &[Transaction],
    categories: &[Category],
    options: AggregateOptions,
) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = categories
        .iter()
        .map(|category| CategoryTotal {
            category_id: category.id,
            name: category.name.clone(),
            color: category.color.clone(),
            amount: 0.0,
            percentage: None,
        })
        .collect();
    let index: HashMap<Uuid, usize> = categories
        .iter()
        .enumerate()
        .map(|(i, category)| (category.id, i))
        .collect();

    for transaction in transactions {
        if transaction.kind != EntryKind::Expense {
            continue;
        }
        if let Some(&i) = index.get(&transaction.category_id) {
            totals[i].amount += transaction.amount;
        }
    }

    if options.with_percentage {
        let whole: f64 = totals.iter().map(|total| total.amount).sum();
        for total in &mut totals {
            let share = if whole > 0.0 {
                total.amount / whole * 100.0
            } else {
                0.0
            };
            total.percentage = Some(share);
        }
    }

    totals
}
