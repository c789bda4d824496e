//! Budget model
//!
//! Maps each category to its monthly spending target. A category missing from
//! the map has no budget set, which is different from a budget of zero.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::category::Category;
use super::money::Money;
use crate::error::{TrackerError, TrackerResult, ValidationField};

/// Per-category monthly spending targets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Budget {
    targets: BTreeMap<Category, Money>,
}

impl Budget {
    /// Create an empty budget (no category has a target)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a budget from unsigned cent amounts, which cannot be negative
    pub(crate) fn from_target_cents<I>(targets: I) -> Self
    where
        I: IntoIterator<Item = (Category, u32)>,
    {
        Self {
            targets: targets
                .into_iter()
                .map(|(category, cents)| (category, Money::from_cents(i64::from(cents))))
                .collect(),
        }
    }

    /// Get the target for a category, if one has been set
    pub fn get(&self, category: Category) -> Option<Money> {
        self.targets.get(&category).copied()
    }

    /// Get the target for a category, treating "no budget set" as zero
    pub fn target(&self, category: Category) -> Money {
        self.get(category).unwrap_or_default()
    }

    /// Set (or overwrite) the target for a category
    ///
    /// Negative targets are rejected and leave the budget unchanged.
    pub fn set(&mut self, category: Category, amount: Money) -> TrackerResult<()> {
        if amount.is_negative() {
            return Err(TrackerError::validation(
                ValidationField::Budget,
                format!("{} budget cannot be negative", category.as_str()),
            ));
        }
        self.targets.insert(category, amount);
        Ok(())
    }

    /// Sum of all targets
    pub fn total(&self) -> Money {
        self.targets.values().sum()
    }

    /// Iterate over the categories that have a target, in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        self.targets.iter().map(|(c, m)| (*c, *m))
    }

    /// Number of categories with a target
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Check if no category has a target
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(category, amount)| format!("{}: {}", category.as_str(), amount))
            .collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}
