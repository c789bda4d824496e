//! Budget usage percentages and status classification

use serde::Serialize;
use std::fmt;

use crate::models::Money;

/// Usage below this percentage is `Good`
pub const WARNING_THRESHOLD: f64 = 75.0;

/// Usage at or above this percentage is `Danger`
pub const DANGER_THRESHOLD: f64 = 90.0;

/// Traffic-light classification of budget usage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Good,
    Warning,
    Danger,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Percentage of `budget_target` used by `spent`, clamped to `[0, 100]`
///
/// A target of zero or less yields 0 rather than a division by zero. The
/// result saturates at 100, so overspending has to be measured from the raw
/// amounts.
///
/// # Examples
/// ```
/// use expense_tracker::aggregation::percentage;
/// use expense_tracker::models::Money;
///
/// let pct = percentage(Money::from_cents(4599), Money::from_cents(50000));
/// assert!((pct - 9.198).abs() < 1e-9);
/// assert_eq!(percentage(Money::from_cents(5000), Money::zero()), 0.0);
/// ```
pub fn percentage(spent: Money, budget_target: Money) -> f64 {
    if !budget_target.is_positive() {
        return 0.0;
    }
    let pct = spent.cents() as f64 / budget_target.cents() as f64 * 100.0;
    pct.clamp(0.0, 100.0)
}

/// Classify a usage percentage
///
/// The boundaries belong to the higher tier: 75 is `Warning`, 90 is `Danger`.
pub fn budget_status(percentage: f64) -> BudgetStatus {
    if percentage < WARNING_THRESHOLD {
        BudgetStatus::Good
    } else if percentage < DANGER_THRESHOLD {
        BudgetStatus::Warning
    } else {
        BudgetStatus::Danger
    }
}
