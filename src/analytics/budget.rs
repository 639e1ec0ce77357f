/// Amount of a budget left to spend, floored at zero.
pub fn budget_remaining(budget: f64, spent: f64) -> f64 {
    (budget - spent).max(0.0)
}

/// Whole-percent budget utilization, capped at 100.
///
/// A missing or non-positive budget reads as fully used, matching how the
/// display layer renders an unbudgeted category that has spending.
pub fn budget_utilization(budget: f64, spent: f64) -> f64 {
    if budget <= 0.0 {
        return 100.0;
    }
    (spent / budget * 100.0).round().min(100.0)
}
