use serde::{Deserialize, Serialize};

use crate::currency::CurrencyCode;

/// Per-user display and budgeting settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserPreferences {
    pub currency: CurrencyCode,
    pub monthly_budget: f64,
    pub dark_mode: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            currency: CurrencyCode::default(),
            monthly_budget: 0.0,
            dark_mode: false,
        }
    }
}
