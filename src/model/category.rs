use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Groups entries for budgeting and reporting.
///
/// `color` and `icon` are display hints the core never interprets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub icon: String,
    pub kind: CategoryKind,
    /// Optional monthly spending ceiling.
    pub budget: Option<f64>,
}

impl Category {
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        icon: impl Into<String>,
        kind: CategoryKind,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color: color.into(),
            icon: icon.into(),
            kind,
            budget: None,
        }
    }

    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = Some(budget);
        self
    }
}

/// Supported category types. An explicit tag, so income categories need no
/// magic-id convention.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Expense,
    Income,
}
