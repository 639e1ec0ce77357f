//! Pure aggregation functions over the transaction log.
//!
//! Every function here takes borrowed inputs and returns freshly-built owned
//! output; nothing holds state between calls, so the orchestrating store can
//! re-derive on every mutation.

pub mod budget;
pub mod category_totals;
pub mod monthly_summary;
pub mod series;

pub use budget::{budget_remaining, budget_utilization};
pub use category_totals::{category_totals, AggregateOptions, CategoryTotal};
pub use monthly_summary::{summarize, MonthlyData};
pub use series::{daily_series, monthly_series, DailyPoint, MonthlyPoint};
